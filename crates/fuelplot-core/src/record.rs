// File: crates/fuelplot-core/src/record.rs
// Summary: Fillup record model, derivation options, and the day-gap pass.

use chrono::NaiveDateTime;

/// Sentinel day-gap for the first record; there is no previous fillup to
/// measure against, so the source data treats it as a month.
pub const FIRST_FILLUP_DEFAULT_DAYS: f64 = 30.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Which formula produces `price_per_mile`. The two are only equivalent
/// when `mpg == mileage / gallons_filled` holds exactly, so the choice is
/// surfaced here instead of being silently unified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceFormula {
    /// `price_per_gallon / mpg`.
    #[default]
    PerGallonOverMpg,
    /// `(gallons_filled * price_per_gallon) / mileage`.
    FuelCostOverMileage,
}

impl PriceFormula {
    pub fn price_per_mile(&self, mileage: f64, gallons: f64, price_per_gallon: f64, mpg: f64) -> f64 {
        match self {
            PriceFormula::PerGallonOverMpg => price_per_gallon / mpg,
            PriceFormula::FuelCostOverMileage => (gallons * price_per_gallon) / mileage,
        }
    }
}

/// Whether `gas_utilization` is reported as a fraction or a percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GasUtilizationForm {
    #[default]
    Fraction,
    Percent,
}

impl GasUtilizationForm {
    pub fn gas_utilization(&self, mileage: f64, miles_remaining: f64) -> f64 {
        let fraction = mileage / (mileage + miles_remaining);
        match self {
            GasUtilizationForm::Fraction => fraction,
            GasUtilizationForm::Percent => fraction * 100.0,
        }
    }
}

/// Options applied while deriving per-record fields at parse time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeriveOptions {
    pub price_formula: PriceFormula,
    pub gas_utilization: GasUtilizationForm,
}

/// One row of the fuel log: a single real-world refueling event.
///
/// Records are ordered by ascending date (insertion order is assumed to be
/// chronological). `days_since_fillup` stays `None` until
/// [`annotate_days_since_fillup`] runs over the full sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct FillupRecord {
    /// Raw date string; ordinal axis key and tooltip prefix.
    pub date_key: String,
    pub date: NaiveDateTime,
    /// Odometer distance driven since the previous fillup.
    pub mileage: f64,
    /// Estimated remaining drivable distance at fillup time.
    pub miles_remaining: f64,
    pub gallons_filled: f64,
    pub price_per_gallon: f64,
    pub mpg: f64,
    pub price_per_mile: f64,
    pub gas_utilization: f64,
    pub days_since_fillup: Option<f64>,
}

impl FillupRecord {
    /// Total drivable distance on this tank: driven plus remaining.
    pub fn potential_miles(&self) -> f64 {
        self.mileage + self.miles_remaining
    }
}

/// Attach the day-gap metric to an ordered record sequence.
///
/// The first record gets [`FIRST_FILLUP_DEFAULT_DAYS`]; every later record
/// gets the exact calendar-day difference to its predecessor, fractional
/// when the log carries times of day.
pub fn annotate_days_since_fillup(records: &mut [FillupRecord]) {
    for i in 0..records.len() {
        if i == 0 {
            records[0].days_since_fillup = Some(FIRST_FILLUP_DEFAULT_DAYS);
            continue;
        }
        let gap = records[i].date.signed_duration_since(records[i - 1].date);
        records[i].days_since_fillup = Some(gap.num_seconds() as f64 / SECONDS_PER_DAY);
    }
}
