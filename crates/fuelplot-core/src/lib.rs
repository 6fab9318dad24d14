// File: crates/fuelplot-core/src/lib.rs
// Summary: Core library entry point; exports the fillup-log chart pipeline.

pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod parse;
pub mod record;
pub mod scale;
pub mod ticks;
pub mod tooltip;
pub mod types;

mod axis;

pub use chart::{ChartConfig, GeometryKind, Metric, SeriesSpec};
pub use color::{Gradient, Rgb};
pub use error::{ChartError, Result};
pub use geometry::{Scene, Shape};
pub use record::{DeriveOptions, FillupRecord, GasUtilizationForm, PriceFormula};
pub use scale::{LinearScale, PaddingPolicy, PointScale, TimeScale};
pub use tooltip::{Tooltip, TooltipKind};
pub use types::{ChartContext, Insets};
