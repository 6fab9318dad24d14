// File: crates/fuelplot-core/src/geometry.rs
// Summary: Declarative draw commands produced by chart assembly.

use crate::color::Rgb;
use crate::types::ChartContext;

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Fill paint: a solid color or a reference to a gradient definition
/// emitted earlier in the same scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    GradientRef(String),
}

/// Hover payload bound to a shape: the record it represents and the
/// already-formatted tooltip text a pointer host hands to the tooltip
/// controller.
#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    pub record: usize,
    pub tooltip: String,
}

/// One draw command for the rendering surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Rgb,
        stroke_width: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgb,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Paint,
        hover: Option<Hover>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Rgb,
        hover: Option<Hover>,
    },
    /// Text placed by translating to `(x, y)`, optionally rotating about
    /// that point, then offsetting by `(dx, dy)` in local coordinates.
    Text {
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        content: String,
        anchor: Anchor,
        rotate_deg: Option<f64>,
    },
    /// Two-stop vertical linear gradient definition consumed by legend
    /// rects via [`Paint::GradientRef`].
    GradientDef {
        id: String,
        start: Rgb,
        stop: Rgb,
    },
}

/// Ordered draw commands for one chart canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(ctx: &ChartContext) -> Self {
        Self {
            width: ctx.width,
            height: ctx.height,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn text(&mut self, x: f64, y: f64, content: impl Into<String>, anchor: Anchor) {
        self.push(Shape::Text {
            x,
            y,
            dx: 0.0,
            dy: 0.0,
            content: content.into(),
            anchor,
            rotate_deg: None,
        });
    }

    /// Shapes carrying a hover payload, in draw order.
    pub fn hover_shapes(&self) -> impl Iterator<Item = (&Shape, &Hover)> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Rect { hover: Some(h), .. } | Shape::Circle { hover: Some(h), .. } => {
                Some((s, h))
            }
            _ => None,
        })
    }
}
