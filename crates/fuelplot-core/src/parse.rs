// File: crates/fuelplot-core/src/parse.rs
// Summary: Tab-separated fillup-log parser with fail-closed numeric coercion.

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;

use crate::error::{ChartError, Result};
use crate::record::{DeriveOptions, FillupRecord};

const COL_DATE: &str = "Date";
const COL_MILEAGE: &str = "Mileage";
const COL_GALLONS: &str = "Gallons Filled";
const COL_PRICE: &str = "Price Per Gallon";
const COL_REMAINING: &str = "Miles Remaining";
const COL_MPG: &str = "MPG";

/// Parse the fillup log at `path`. A missing or unreadable file surfaces as
/// [`ChartError::Read`] and the caller skips rendering entirely.
pub fn parse_tsv_path(path: &Path, opts: &DeriveOptions) -> Result<Vec<FillupRecord>> {
    let file = std::fs::File::open(path)?;
    parse_tsv(file, opts)
}

/// Parse a tab-separated fillup log with a header row.
///
/// Columns are looked up by exact name. Every numeric cell is coerced
/// strictly: a malformed value stops the parse and reports its row and
/// column rather than propagating NaN into the scales downstream.
pub fn parse_tsv<R: Read>(reader: R, opts: &DeriveOptions) -> Result<Vec<FillupRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ChartError::MissingColumn(name.to_string()))
    };

    let i_date = col(COL_DATE)?;
    let i_mileage = col(COL_MILEAGE)?;
    let i_gallons = col(COL_GALLONS)?;
    let i_price = col(COL_PRICE)?;
    let i_remaining = col(COL_REMAINING)?;
    let i_mpg = col(COL_MPG)?;

    let mut records = Vec::new();

    // Header occupies row 1; data rows start at 2.
    for (offset, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = offset + 2;

        let cell = |i: usize| rec.get(i).unwrap_or("").trim();
        let number = |i: usize, column: &'static str| -> Result<f64> {
            let value = cell(i);
            value.parse::<f64>().map_err(|_| ChartError::MalformedNumber {
                row,
                column,
                value: value.to_string(),
            })
        };

        let date_key = cell(i_date).to_string();
        let date = parse_date(&date_key).ok_or_else(|| ChartError::MalformedDate {
            row,
            value: date_key.clone(),
        })?;

        let mileage = number(i_mileage, COL_MILEAGE)?;
        let gallons_filled = number(i_gallons, COL_GALLONS)?;
        let price_per_gallon = number(i_price, COL_PRICE)?;
        let miles_remaining = number(i_remaining, COL_REMAINING)?;
        let mpg = number(i_mpg, COL_MPG)?;

        records.push(FillupRecord {
            date_key,
            date,
            mileage,
            miles_remaining,
            gallons_filled,
            price_per_gallon,
            mpg,
            price_per_mile: opts
                .price_formula
                .price_per_mile(mileage, gallons_filled, price_per_gallon, mpg),
            gas_utilization: opts.gas_utilization.gas_utilization(mileage, miles_remaining),
            days_since_fillup: None,
        });
    }

    Ok(records)
}

/// Accepts `YYYY/MM/DD` or `YYYY-MM-DD`, optionally with `HH:MM[:SS]`.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}
