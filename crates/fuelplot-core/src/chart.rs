// File: crates/fuelplot-core/src/chart.rs
// Summary: One chart engine plus the four fillup-log chart configurations.

use crate::axis::{bottom_axis_point, bottom_axis_time, left_axis_linear, TickLabelStyle};
use crate::color::{
    series_color, Gradient, Rgb, BLUE_DARK, BLUE_LIGHT, GREEN_DARK, GREEN_LIGHT, RED_DARK,
    RED_LIGHT,
};
use crate::error::{ChartError, Result};
use crate::geometry::{Anchor, Hover, Paint, Scene, Shape};
use crate::legend::gradient_legend;
use crate::record::{FillupRecord, FIRST_FILLUP_DEFAULT_DAYS};
use crate::scale::{BoundPolicy, LinearScale, PaddingPolicy, PointScale, TimeScale};
use crate::tooltip::TooltipKind;
use crate::types::ChartContext;

const MARKER_RADIUS: f64 = 4.0;
const LINE_WIDTH: f64 = 2.0;
const BAR_WIDTH: f64 = 16.0;

/// Record field a chart plots or colors by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Mileage,
    PotentialMiles,
    Mpg,
    PricePerMile,
    GasUtilization,
    DaysSinceFillup,
}

impl Metric {
    pub fn value(&self, record: &FillupRecord) -> f64 {
        match self {
            Metric::Mileage => record.mileage,
            Metric::PotentialMiles => record.potential_miles(),
            Metric::Mpg => record.mpg,
            Metric::PricePerMile => record.price_per_mile,
            Metric::GasUtilization => record.gas_utilization,
            Metric::DaysSinceFillup => record
                .days_since_fillup
                .unwrap_or(FIRST_FILLUP_DEFAULT_DAYS),
        }
    }
}

/// Horizontal scale choice; fixed per chart variant, never data-driven.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum XScaleKind {
    /// Ordinal placement of the distinct date keys.
    Point { padding: f64 },
    /// Calendar spacing, domain padded by whole months on both sides.
    Time { month_offset: u32 },
}

/// Element coloring: a stable per-series palette entry, or a two-stop
/// gradient over the plotted metric. `at_min`/`at_max` bind colors to the
/// domain ends, so each chart keeps its source's gradient direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorMode {
    Categorical,
    Gradient { at_min: Rgb, at_max: Rgb },
}

/// Free-floating label drawn at the last point of a line series.
#[derive(Clone, Debug, PartialEq)]
pub struct EndLabel {
    pub text: String,
    pub dx: f64,
    pub dy: f64,
}

/// One plotted series: which metric it draws and how its tooltip reads.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    pub metric: Metric,
    pub tooltip: TooltipKind,
    pub end_label: Option<EndLabel>,
}

/// Shape family a chart draws per record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryKind {
    /// One polyline per series with a marker per record.
    Lines,
    /// One vertical bar per record, rising from the plot bottom.
    Bars { width: f64 },
    /// One dot per record at a fixed vertical position.
    Dots,
}

/// Gradient legend settings; stops are in top-to-bottom draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendConfig {
    pub id: String,
    pub stops: (Rgb, Rgb),
    pub height: f64,
}

/// Axis title placement for the rotated left label.
#[derive(Clone, Debug, PartialEq)]
pub struct YLabel {
    pub text: String,
    pub offset: f64,
}

/// Everything that distinguishes one chart variant from another. The four
/// presets below replace the four near-duplicate source scripts.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub kind: GeometryKind,
    pub x_scale: XScaleKind,
    pub series: Vec<SeriesSpec>,
    /// Metric sizing the vertical domain; `None` means no left axis.
    pub scale_metric: Option<Metric>,
    pub padding: PaddingPolicy,
    pub color: ColorMode,
    pub y_label: Option<YLabel>,
    pub legend: Option<LegendConfig>,
    pub tick_style: TickLabelStyle,
    pub date_prefixed_tooltips: bool,
}

impl ChartConfig {
    /// Mileage and potential-miles line chart: two categorical polylines
    /// over an ordinal date axis, domain `[0, floor(max * 1.2)]`.
    pub fn mileage_lines() -> Self {
        Self {
            kind: GeometryKind::Lines,
            x_scale: XScaleKind::Point { padding: 0.5 },
            series: vec![
                SeriesSpec {
                    metric: Metric::Mileage,
                    tooltip: TooltipKind::Mileage,
                    end_label: Some(EndLabel {
                        text: "Mileage".to_string(),
                        dx: -10.0,
                        dy: -10.0,
                    }),
                },
                SeriesSpec {
                    metric: Metric::PotentialMiles,
                    tooltip: TooltipKind::PotentialMiles,
                    end_label: Some(EndLabel {
                        text: "Potential Miles".to_string(),
                        dx: -18.0,
                        dy: -10.0,
                    }),
                },
            ],
            scale_metric: Some(Metric::PotentialMiles),
            padding: PaddingPolicy::new(BoundPolicy::Zero, BoundPolicy::ScaledFloor(1.2)),
            color: ColorMode::Categorical,
            y_label: Some(YLabel { text: "Miles Driven".to_string(), offset: 15.0 }),
            legend: None,
            tick_style: TickLabelStyle::slanted(-32.0, 5.0),
            date_prefixed_tooltips: false,
        }
    }

    /// Average-MPG bar chart; the gradient runs max->light, min->dark as
    /// in its source.
    pub fn average_mpg() -> Self {
        Self {
            kind: GeometryKind::Bars { width: BAR_WIDTH },
            x_scale: XScaleKind::Point { padding: 0.5 },
            series: vec![SeriesSpec {
                metric: Metric::Mpg,
                tooltip: TooltipKind::AvgMpg,
                end_label: None,
            }],
            scale_metric: Some(Metric::Mpg),
            padding: PaddingPolicy::new(
                BoundPolicy::FloorScaled(0.975),
                BoundPolicy::FloorScaled(1.025),
            ),
            color: ColorMode::Gradient { at_min: BLUE_DARK, at_max: BLUE_LIGHT },
            y_label: Some(YLabel { text: "Miles Per Gallon".to_string(), offset: 10.0 }),
            legend: Some(LegendConfig {
                id: "average-mpg-gradient-scale".to_string(),
                stops: (BLUE_LIGHT, BLUE_DARK),
                height: 100.0,
            }),
            tick_style: TickLabelStyle::slanted(-32.0, 5.0),
            date_prefixed_tooltips: false,
        }
    }

    /// Price-per-mile bar chart; min->light, max->dark greens.
    pub fn price_per_mile() -> Self {
        Self {
            kind: GeometryKind::Bars { width: BAR_WIDTH },
            x_scale: XScaleKind::Point { padding: 0.5 },
            series: vec![SeriesSpec {
                metric: Metric::PricePerMile,
                tooltip: TooltipKind::PricePerMile,
                end_label: None,
            }],
            scale_metric: Some(Metric::PricePerMile),
            padding: PaddingPolicy::new(BoundPolicy::Floor, BoundPolicy::Scaled(1.3)),
            color: ColorMode::Gradient { at_min: GREEN_LIGHT, at_max: GREEN_DARK },
            y_label: Some(YLabel { text: "Price Per Mile".to_string(), offset: 10.0 }),
            legend: Some(LegendConfig {
                id: "price-per-mile-gradient-scale".to_string(),
                stops: (GREEN_DARK, GREEN_LIGHT),
                height: 100.0,
            }),
            tick_style: TickLabelStyle::slanted(-32.0, 5.0),
            date_prefixed_tooltips: false,
        }
    }

    /// Fillup-frequency dot chart on the half-height canvas: real calendar
    /// spacing, dots colored by the day gap, min->dark reds.
    pub fn fillup_frequency() -> Self {
        Self {
            kind: GeometryKind::Dots,
            x_scale: XScaleKind::Time { month_offset: 1 },
            series: vec![SeriesSpec {
                metric: Metric::DaysSinceFillup,
                tooltip: TooltipKind::FillupFrequency,
                end_label: None,
            }],
            scale_metric: None,
            padding: PaddingPolicy::new(BoundPolicy::Exact, BoundPolicy::Exact),
            color: ColorMode::Gradient { at_min: RED_DARK, at_max: RED_LIGHT },
            y_label: None,
            legend: Some(LegendConfig {
                id: "fillup-freq-gradient-scale".to_string(),
                stops: (RED_LIGHT, RED_DARK),
                height: 75.0,
            }),
            tick_style: TickLabelStyle::slanted(-25.0, 5.0),
            date_prefixed_tooltips: false,
        }
    }

    /// Build the scene for this chart: scales, axes, titles, geometry with
    /// hover payloads, and the legend. Pure over its inputs.
    pub fn assemble(&self, records: &[FillupRecord], ctx: &ChartContext) -> Result<Scene> {
        if records.is_empty() {
            return Err(ChartError::EmptyData);
        }

        let mut scene = Scene::new(ctx);

        let xs = self.x_positions(records, ctx);
        let y_scale = self.scale_metric.map(|metric| {
            LinearScale::from_data(
                records.iter().map(|r| metric.value(r)),
                &self.padding,
                ctx.plot_bottom(),
                ctx.plot_top(),
            )
        });
        let gradient = match self.color {
            ColorMode::Gradient { at_min, at_max } => {
                let metric = self.series[0].metric;
                Some(Gradient::over_values(
                    at_min,
                    at_max,
                    records.iter().map(|r| metric.value(r)),
                ))
            }
            ColorMode::Categorical => None,
        };

        if matches!(self.kind, GeometryKind::Lines) {
            self.emit_polylines(&mut scene, records, &xs, y_scale.as_ref());
        }

        self.emit_axes(&mut scene, ctx, records, y_scale.as_ref());
        self.emit_titles(&mut scene, ctx);
        self.emit_geometry(&mut scene, ctx, records, &xs, y_scale.as_ref(), gradient.as_ref());

        if let Some(legend) = &self.legend {
            let domain = match (&y_scale, &gradient) {
                (Some(scale), _) => scale.domain(),
                (None, Some(grad)) => (grad.min, grad.max),
                (None, None) => (0.0, 1.0),
            };
            let center_y = match self.kind {
                GeometryKind::Dots => dot_center_y(ctx),
                _ => (ctx.height as f64 - ctx.insets.top as f64) / 2.0,
            };
            gradient_legend(
                &mut scene,
                ctx,
                &legend.id,
                domain,
                legend.stops,
                center_y,
                legend.height,
            );
        }

        Ok(scene)
    }

    fn x_positions(&self, records: &[FillupRecord], ctx: &ChartContext) -> Vec<f64> {
        match self.x_scale {
            XScaleKind::Point { padding } => {
                let scale = self.point_scale(records, ctx, padding);
                (0..records.len())
                    .map(|i| scale.position_of_index(i))
                    .collect()
            }
            XScaleKind::Time { month_offset } => {
                let scale = self.time_scale(records, ctx, month_offset);
                records.iter().map(|r| scale.position(r.date)).collect()
            }
        }
    }

    fn point_scale(&self, records: &[FillupRecord], ctx: &ChartContext, padding: f64) -> PointScale {
        PointScale::new(
            records.iter().map(|r| r.date_key.clone()).collect(),
            ctx.plot_left(),
            ctx.plot_right(),
            padding,
        )
    }

    fn time_scale(&self, records: &[FillupRecord], ctx: &ChartContext, months: u32) -> TimeScale {
        let first = records[0].date;
        let last = records[records.len() - 1].date;
        TimeScale::with_month_padding(first, last, months, ctx.plot_left(), ctx.plot_right())
    }

    fn emit_axes(
        &self,
        scene: &mut Scene,
        ctx: &ChartContext,
        records: &[FillupRecord],
        y_scale: Option<&LinearScale>,
    ) {
        match self.x_scale {
            XScaleKind::Point { padding } => {
                let scale = self.point_scale(records, ctx, padding);
                bottom_axis_point(scene, ctx, &scale, &self.tick_style);
            }
            XScaleKind::Time { month_offset } => {
                let scale = self.time_scale(records, ctx, month_offset);
                bottom_axis_time(scene, ctx, &scale, &self.tick_style);
            }
        }
        if let Some(scale) = y_scale {
            left_axis_linear(scene, ctx, scale);
        }
    }

    fn emit_titles(&self, scene: &mut Scene, ctx: &ChartContext) {
        scene.text(
            ctx.width as f64 / 2.0,
            ctx.height as f64 - ctx.insets.top as f64 / 2.0 + 5.0,
            "Date",
            Anchor::Middle,
        );
        if let Some(label) = &self.y_label {
            scene.push(Shape::Text {
                x: 0.0,
                y: 0.0,
                dx: -(ctx.height as f64) / 2.0,
                dy: label.offset,
                content: label.text.clone(),
                anchor: Anchor::Middle,
                rotate_deg: Some(-90.0),
            });
        }
    }

    fn emit_polylines(
        &self,
        scene: &mut Scene,
        records: &[FillupRecord],
        xs: &[f64],
        y_scale: Option<&LinearScale>,
    ) {
        let Some(scale) = y_scale else {
            return;
        };
        for (si, series) in self.series.iter().enumerate() {
            let points = records
                .iter()
                .zip(xs)
                .map(|(r, &x)| (x, scale.position(series.metric.value(r))))
                .collect();
            scene.push(Shape::Polyline {
                points,
                stroke: self.stroke_for(si),
                stroke_width: LINE_WIDTH,
            });
        }
    }

    fn emit_geometry(
        &self,
        scene: &mut Scene,
        ctx: &ChartContext,
        records: &[FillupRecord],
        xs: &[f64],
        y_scale: Option<&LinearScale>,
        gradient: Option<&Gradient>,
    ) {
        match self.kind {
            GeometryKind::Lines => {
                let Some(scale) = y_scale else {
                    return;
                };
                for (si, series) in self.series.iter().enumerate() {
                    for (i, (r, &x)) in records.iter().zip(xs).enumerate() {
                        let value = series.metric.value(r);
                        scene.push(Shape::Circle {
                            cx: x,
                            cy: scale.position(value),
                            r: MARKER_RADIUS,
                            fill: self.fill_for(si, value, gradient),
                            hover: Some(self.hover(i, r, series)),
                        });
                    }
                    if let Some(label) = &series.end_label {
                        let last = records.len() - 1;
                        scene.push(Shape::Text {
                            x: xs[last],
                            y: scale.position(series.metric.value(&records[last])),
                            dx: label.dx,
                            dy: label.dy,
                            content: label.text.clone(),
                            anchor: Anchor::Start,
                            rotate_deg: None,
                        });
                    }
                }
            }
            GeometryKind::Bars { width } => {
                let Some(scale) = y_scale else {
                    return;
                };
                let series = &self.series[0];
                for (i, (r, &x)) in records.iter().zip(xs).enumerate() {
                    let value = series.metric.value(r);
                    let top = scale.position(value);
                    scene.push(Shape::Rect {
                        x: x - width / 2.0,
                        y: top,
                        width,
                        height: ctx.plot_bottom() - top,
                        fill: Paint::Solid(self.fill_for(0, value, gradient)),
                        hover: Some(self.hover(i, r, series)),
                    });
                }
            }
            GeometryKind::Dots => {
                let series = &self.series[0];
                let cy = dot_center_y(ctx);
                for (i, (r, &x)) in records.iter().zip(xs).enumerate() {
                    let value = series.metric.value(r);
                    scene.push(Shape::Circle {
                        cx: x,
                        cy,
                        r: MARKER_RADIUS,
                        fill: self.fill_for(0, value, gradient),
                        hover: Some(self.hover(i, r, series)),
                    });
                }
            }
        }
    }

    fn stroke_for(&self, series_index: usize) -> Rgb {
        match self.color {
            ColorMode::Categorical => series_color(series_index),
            ColorMode::Gradient { at_max, .. } => at_max,
        }
    }

    fn fill_for(&self, series_index: usize, value: f64, gradient: Option<&Gradient>) -> Rgb {
        match gradient {
            Some(grad) => grad.color_at(value),
            None => series_color(series_index),
        }
    }

    fn hover(&self, index: usize, record: &FillupRecord, series: &SeriesSpec) -> Hover {
        Hover {
            record: index,
            tooltip: series.tooltip.format(record, self.date_prefixed_tooltips),
        }
    }
}

/// Fixed dot row of the frequency chart; also centers its legend.
fn dot_center_y(ctx: &ChartContext) -> f64 {
    (ctx.height as f64 - ctx.insets.top as f64 - ctx.insets.bottom as f64 / 2.0) / 2.0
}
