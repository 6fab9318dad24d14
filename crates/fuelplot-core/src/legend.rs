// File: crates/fuelplot-core/src/legend.rs
// Summary: Vertical two-stop gradient legend with its own value axis.

use crate::color::Rgb;
use crate::geometry::{Anchor, Paint, Scene, Shape};
use crate::scale::LinearScale;
use crate::ticks::{format_number, linear_ticks};
use crate::types::ChartContext;

use crate::axis::AXIS_COLOR;

pub const LEGEND_WIDTH: f64 = 20.0;
const LEGEND_TICK_COUNT: usize = 6;
const TICK_LEN: f64 = 6.0;

/// Emit a gradient legend centered vertically on `center_y`: the gradient
/// definition, the swatch rect in the right margin, and a left axis over
/// the metric domain.
///
/// `stops` are in top-to-bottom order, exactly as the chart's source drew
/// them; the domain minimum sits at the bottom of the bar.
pub fn gradient_legend(
    scene: &mut Scene,
    ctx: &ChartContext,
    id: &str,
    domain: (f64, f64),
    stops: (Rgb, Rgb),
    center_y: f64,
    height: f64,
) {
    let bottom = center_y + height / 2.0 - 1.0;
    let top = center_y - height / 2.0;
    let x = (ctx.width as f64 - ctx.insets.right as f64 / 2.0).floor();

    scene.push(Shape::GradientDef {
        id: id.to_string(),
        start: stops.0,
        stop: stops.1,
    });
    scene.push(Shape::Rect {
        x,
        y: top,
        width: LEGEND_WIDTH,
        height,
        fill: Paint::GradientRef(id.to_string()),
        hover: None,
    });

    let scale = LinearScale::new(domain.0, domain.1, bottom, top);
    scene.push(Shape::Line {
        x1: x,
        y1: top,
        x2: x,
        y2: bottom,
        stroke: AXIS_COLOR,
    });
    for v in linear_ticks(domain.0, domain.1, LEGEND_TICK_COUNT) {
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
