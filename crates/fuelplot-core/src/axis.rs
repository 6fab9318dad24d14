// File: crates/fuelplot-core/src/axis.rs
// Summary: Axis emission: baselines, tick marks, and tick labels as shapes.

use crate::color::Rgb;
use crate::geometry::{Anchor, Scene, Shape};
use crate::parse::parse_date;
use crate::scale::{LinearScale, PointScale, TimeScale};
use crate::ticks::{format_number, linear_ticks, month_ticks};
use crate::types::ChartContext;

pub const AXIS_COLOR: Rgb = Rgb::new(0, 0, 0);
const TICK_LEN: f64 = 6.0;
const LEFT_TICK_COUNT: usize = 10;

/// Tick-label placement for a bottom axis: local offset plus rotation, the
/// way the source charts slant their date labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickLabelStyle {
    pub dx: f64,
    pub dy: f64,
    pub rotate_deg: f64,
}

impl TickLabelStyle {
    pub const fn slanted(dx: f64, dy: f64) -> Self {
        Self { dx, dy, rotate_deg: -45.0 }
    }
}

fn bottom_tick(scene: &mut Scene, x: f64, y: f64, label: String, style: &TickLabelStyle) {
    scene.push(Shape::Line {
        x1: x,
        y1: y,
        x2: x,
        y2: y + TICK_LEN,
        stroke: AXIS_COLOR,
    });
    scene.push(Shape::Text {
        x,
        y,
        dx: style.dx,
        dy: style.dy,
        content: label,
        anchor: Anchor::Middle,
        rotate_deg: Some(style.rotate_deg),
    });
}

fn baseline(scene: &mut Scene, ctx: &ChartContext, y: f64) {
    scene.push(Shape::Line {
        x1: ctx.plot_left(),
        y1: y,
        x2: ctx.plot_right(),
        y2: y,
        stroke: AXIS_COLOR,
    });
}

/// Bottom date axis over a point scale: one tick per date key, labels
/// normalized to `%Y/%m/%d`.
pub fn bottom_axis_point(
    scene: &mut Scene,
    ctx: &ChartContext,
    scale: &PointScale,
    style: &TickLabelStyle,
) {
    let y = ctx.plot_bottom();
    baseline(scene, ctx, y);
    for (i, key) in scale.keys().iter().enumerate() {
        let label = parse_date(key)
            .map(|d| d.format("%Y/%m/%d").to_string())
            .unwrap_or_else(|| key.clone());
        bottom_tick(scene, scale.position_of_index(i), y, label, style);
    }
}

/// Bottom date axis over a time scale: ticks on month boundaries, labels
/// formatted `%Y/%m`.
pub fn bottom_axis_time(
    scene: &mut Scene,
    ctx: &ChartContext,
    scale: &TimeScale,
    style: &TickLabelStyle,
) {
    let y = ctx.plot_bottom();
    baseline(scene, ctx, y);
    let (d0, d1) = scale.domain();
    for month in month_ticks(d0, d1) {
        if let Some(midnight) = month.and_hms_opt(0, 0, 0) {
            let x = scale.position(midnight);
            bottom_tick(scene, x, y, month.format("%Y/%m").to_string(), style);
        }
    }
}

/// Left metric axis: round-valued ticks with right-anchored labels.
pub fn left_axis_linear(scene: &mut Scene, ctx: &ChartContext, scale: &LinearScale) {
    let x = ctx.plot_left();
    scene.push(Shape::Line {
        x1: x,
        y1: ctx.plot_top(),
        x2: x,
        y2: ctx.plot_bottom(),
        stroke: AXIS_COLOR,
    });
    let (d0, d1) = scale.domain();
    for v in linear_ticks(d0, d1, LEFT_TICK_COUNT) {
        let y = scale.position(v);
        scene.push(Shape::Line {
            x1: x - TICK_LEN,
            y1: y,
            x2: x,
            y2: y,
            stroke: AXIS_COLOR,
        });
        scene.push(Shape::Text {
            x,
            y,
            dx: -(TICK_LEN + 3.0),
            dy: 3.0,
            content: format_number(v),
            anchor: Anchor::End,
            rotate_deg: None,
        });
    }
}
