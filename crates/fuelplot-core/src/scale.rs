// File: crates/fuelplot-core/src/scale.rs
// Summary: Ordinal point, continuous time, and linear value scales.

use chrono::{Months, NaiveDateTime};

/// Evenly spaced placement of discrete keys along a pixel range, with
/// `padding` steps of slack at either end. Mirrors the point-scale layout
/// the source charts use for date axes: with `n` keys,
/// `step = (r1 - r0) / max(1, n - 1 + 2 * padding)` and key `i` sits at
/// `r0 + step * (padding + i)`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointScale {
    keys: Vec<String>,
    r0: f64,
    r1: f64,
    padding: f64,
}

impl PointScale {
    pub fn new(keys: Vec<String>, r0: f64, r1: f64, padding: f64) -> Self {
        Self { keys, r0, r1, padding }
    }

    pub fn step(&self) -> f64 {
        let slots = (self.keys.len() as f64 - 1.0 + 2.0 * self.padding).max(1.0);
        (self.r1 - self.r0) / slots
    }

    /// Pixel position of `key`, or `None` when the key is not in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = self.keys.iter().position(|k| k == key)?;
        Some(self.position_of_index(i))
    }

    pub fn position_of_index(&self, i: usize) -> f64 {
        self.r0 + self.step() * (self.padding + i as f64)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Continuous date scale mapping timestamps linearly onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    d0: NaiveDateTime,
    d1: NaiveDateTime,
    r0: f64,
    r1: f64,
    round: bool,
}

impl TimeScale {
    pub fn new(d0: NaiveDateTime, d1: NaiveDateTime, r0: f64, r1: f64) -> Self {
        Self { d0, d1, r0, r1, round: false }
    }

    /// Domain padded by whole months before the first and after the last
    /// record, with positions rounded to whole pixels.
    pub fn with_month_padding(
        first: NaiveDateTime,
        last: NaiveDateTime,
        months: u32,
        r0: f64,
        r1: f64,
    ) -> Self {
        let pad = Months::new(months);
        let d0 = first.checked_sub_months(pad).unwrap_or(first);
        let d1 = last.checked_add_months(pad).unwrap_or(last);
        Self { d0, d1, r0, r1, round: true }
    }

    pub fn position(&self, t: NaiveDateTime) -> f64 {
        let span = (self.d1.and_utc().timestamp() - self.d0.and_utc().timestamp()) as f64;
        let span = if span.abs() < f64::EPSILON { 1.0 } else { span };
        let offset = (t.and_utc().timestamp() - self.d0.and_utc().timestamp()) as f64;
        let px = self.r0 + offset / span * (self.r1 - self.r0);
        if self.round { px.round() } else { px }
    }

    pub fn domain(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.d0, self.d1)
    }
}

/// How a chart turns the data's min/max into its vertical domain bounds.
/// Each chart variant keeps its own policy; they are intentionally not
/// unified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundPolicy {
    /// Fixed zero bound.
    Zero,
    /// The extreme unchanged.
    Exact,
    /// `floor(extreme)`.
    Floor,
    /// `floor(extreme) * factor`.
    FloorScaled(f64),
    /// `floor(extreme * factor)`.
    ScaledFloor(f64),
    /// `extreme * factor`.
    Scaled(f64),
    /// Outward to the nearest ten.
    RoundToTen,
    /// Lower bound subtracts the constant, upper bound adds it.
    Offset(f64),
}

impl BoundPolicy {
    fn lower(&self, min: f64) -> f64 {
        match *self {
            BoundPolicy::Zero => 0.0,
            BoundPolicy::Exact => min,
            BoundPolicy::Floor => min.floor(),
            BoundPolicy::FloorScaled(f) => min.floor() * f,
            BoundPolicy::ScaledFloor(f) => (min * f).floor(),
            BoundPolicy::Scaled(f) => min * f,
            BoundPolicy::RoundToTen => (min / 10.0).floor() * 10.0,
            BoundPolicy::Offset(k) => min - k,
        }
    }

    fn upper(&self, max: f64) -> f64 {
        match *self {
            BoundPolicy::Zero => 0.0,
            BoundPolicy::Exact => max,
            BoundPolicy::Floor => max.floor(),
            BoundPolicy::FloorScaled(f) => max.floor() * f,
            BoundPolicy::ScaledFloor(f) => (max * f).floor(),
            BoundPolicy::Scaled(f) => max * f,
            BoundPolicy::RoundToTen => (max / 10.0).ceil() * 10.0,
            BoundPolicy::Offset(k) => max + k,
        }
    }
}

/// Per-chart vertical domain policy: one bound transform for each end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaddingPolicy {
    pub lower: BoundPolicy,
    pub upper: BoundPolicy,
}

impl PaddingPolicy {
    pub const fn new(lower: BoundPolicy, upper: BoundPolicy) -> Self {
        Self { lower, upper }
    }

    pub fn apply(&self, min: f64, max: f64) -> (f64, f64) {
        (self.lower.lower(min), self.upper.upper(max))
    }
}

/// Continuous linear scale. Vertical scales pass an inverted pixel range
/// (bottom, top) so larger values land higher on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
        Self { d0, d1, r0, r1 }
    }

    /// Build the scale from the data's min/max of a metric, transformed by
    /// the chart's padding policy. Never fails: an empty iterator yields a
    /// `[0, 1]` domain and a single value degenerates to `min == max`,
    /// which `position` guards against.
    pub fn from_data<I>(values: I, policy: &PaddingPolicy, r0: f64, r1: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return Self::new(0.0, 1.0, r0, r1);
        }
        let (d0, d1) = policy.apply(min, max);
        Self::new(d0, d1, r0, r1)
    }

    pub fn position(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        let span = if span.abs() < 1e-12 { 1e-12 } else { span };
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }
}
