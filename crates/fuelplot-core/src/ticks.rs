// File: crates/fuelplot-core/src/ticks.rs
// Summary: Tick layout helpers for linear and date axes.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

/// Step size following the 1/2/5 x 10^k rule for roughly `count` ticks.
pub fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let count = count.max(1) as f64;
    let step0 = (hi - lo).abs() / count;
    if step0 <= 0.0 {
        return 1.0;
    }
    let power = step0.log10().floor();
    let base = 10f64.powf(power);
    let error = step0 / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    base * factor
}

/// Round tick values covering `[lo, hi]`, ends included when they land on a
/// step boundary.
pub fn linear_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite()) || lo == hi {
        return vec![lo];
    }
    let (lo, hi, reversed) = if lo < hi { (lo, hi, false) } else { (hi, lo, true) };
    let step = tick_step(lo, hi, count);
    let start = (lo / step).ceil();
    let stop = (hi / step).floor();
    if stop < start {
        return Vec::new();
    }
    let mut out: Vec<f64> = (0..)
        .map(|i| (start + i as f64) * step)
        .take_while(|&v| v <= hi + step * 1e-9)
        .take((stop - start) as usize + 1)
        .collect();
    if reversed {
        out.reverse();
    }
    out
}

/// First-of-month boundaries inside `[from, to]`.
pub fn month_ticks(from: NaiveDateTime, to: NaiveDateTime) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut cursor) = from.date().with_day(1) else {
        return out;
    };
    if cursor < from.date() {
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => return out,
        }
    }
    while cursor <= to.date() {
        out.push(cursor);
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    out
}

/// Trimmed decimal formatting for tick and tooltip numbers; drops the
/// trailing `.0` and floating-point noise beyond nine decimals.
pub fn format_number(v: f64) -> String {
    let rounded = (v * 1e9).round() / 1e9;
    if rounded == rounded.trunc() && rounded.abs() < 1e15 {
        format!("{}", rounded.trunc() as i64)
    } else {
        format!("{rounded}")
    }
}
