// File: crates/fuelplot-core/src/error.rs
// Summary: Error type for the fillup-log chart pipeline.

use thiserror::Error;

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors raised while reading or parsing the fillup log. A read failure
/// aborts the whole render; a malformed cell fails closed with the row and
/// column instead of leaking NaN into the scales.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column `{0}` in header row")]
    MissingColumn(String),

    #[error("row {row}, column `{column}`: `{value}` is not a number")]
    MalformedNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: `{value}` is not a date")]
    MalformedDate { row: usize, value: String },

    #[error("the fillup log contains no records")]
    EmptyData,
}
