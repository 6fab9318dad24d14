// File: crates/fuelplot-render-svg/src/lib.rs
// Summary: SVG renderer; serializes a scene of draw commands to markup.

use std::fmt::Write as _;
use std::path::Path;

use fuelplot_core::geometry::{Anchor, Paint, Shape};
use fuelplot_core::Scene;

pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize `scene` into a standalone SVG document. Gradient
    /// definitions land in a `<defs>` block up front; hover payloads become
    /// `data-tooltip` attributes a pointer host can wire up.
    pub fn render_to_string(&self, scene: &Scene) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = scene.width,
            h = scene.height,
        );

        let defs: Vec<&Shape> = scene
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::GradientDef { .. }))
            .collect();
        if !defs.is_empty() {
            out.push_str("  <defs>\n");
            for def in defs {
                if let Shape::GradientDef { id, start, stop } = def {
                    let _ = write!(
                        out,
                        "    <linearGradient id=\"{}\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\">\n      <stop offset=\"0%\" stop-opacity=\"1\" stop-color=\"{}\"/>\n      <stop offset=\"100%\" stop-opacity=\"1\" stop-color=\"{}\"/>\n    </linearGradient>\n",
                        escape(id),
                        start.hex(),
                        stop.hex(),
                    );
                }
            }
            out.push_str("  </defs>\n");
        }

        for shape in &scene.shapes {
            match shape {
                Shape::GradientDef { .. } => {}
                Shape::Polyline { points, stroke, stroke_width } => {
                    let mut attr = String::new();
                    for (i, (x, y)) in points.iter().enumerate() {
                        if i > 0 {
                            attr.push(' ');
                        }
                        let _ = write!(attr, "{},{}", fmt_px(*x), fmt_px(*y));
                    }
                    let _ = write!(
                        out,
                        "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                        attr,
                        stroke.hex(),
                        stroke_width,
                    );
                }
                Shape::Line { x1, y1, x2, y2, stroke } => {
                    let _ = write!(
                        out,
                        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"/>\n",
                        fmt_px(*x1),
                        fmt_px(*y1),
                        fmt_px(*x2),
                        fmt_px(*y2),
                        stroke.hex(),
                    );
                }
                Shape::Rect { x, y, width, height, fill, hover } => {
                    let _ = write!(
                        out,
                        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{}/>\n",
                        fmt_px(*x),
                        fmt_px(*y),
                        fmt_px(*width),
                        fmt_px(*height),
                        paint(fill),
                        tooltip_attr(hover.as_ref().map(|h| h.tooltip.as_str())),
                    );
                }
                Shape::Circle { cx, cy, r, fill, hover } => {
                    let _ = write!(
                        out,
                        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{}/>\n",
                        fmt_px(*cx),
                        fmt_px(*cy),
                        fmt_px(*r),
                        fill.hex(),
                        tooltip_attr(hover.as_ref().map(|h| h.tooltip.as_str())),
                    );
                }
                Shape::Text { x, y, dx, dy, content, anchor, rotate_deg } => {
                    let transform = match rotate_deg {
                        Some(deg) => format!(
                            "translate({},{}) rotate({})",
                            fmt_px(*x),
                            fmt_px(*y),
                            fmt_px(*deg)
                        ),
                        None => format!("translate({},{})", fmt_px(*x), fmt_px(*y)),
                    };
                    let _ = write!(
                        out,
                        "  <text transform=\"{}\" x=\"{}\" y=\"{}\" text-anchor=\"{}\">{}</text>\n",
                        transform,
                        fmt_px(*dx),
                        fmt_px(*dy),
                        anchor_attr(*anchor),
                        escape(content),
                    );
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    pub fn render_to_file(&self, scene: &Scene, path: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render_to_string(scene))
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn anchor_attr(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

fn paint(p: &Paint) -> String {
    match p {
        Paint::Solid(c) => c.hex(),
        Paint::GradientRef(id) => format!("url(#{})", escape(id)),
    }
}

fn tooltip_attr(tooltip: Option<&str>) -> String {
    match tooltip {
        Some(t) => format!(" data-tooltip=\"{}\"", escape(t)),
        None => String::new(),
    }
}

/// Trim coordinate noise: whole pixels print without a fraction, the rest
/// keep three decimals.
fn fmt_px(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v.trunc() as i64)
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
