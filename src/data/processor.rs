//! Data Processor Module
//! Derives the processed_value column from the first input column.

use polars::prelude::*;
use thiserror::Error;

/// Name of the column appended by the transform.
pub const PROCESSED_COLUMN: &str = "processed_value";

/// Multiplier applied to the first column.
const SCALE_FACTOR: i64 = 100;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Input has no columns")]
    NoColumns,
}

/// Append `processed_value` = first column * 100 and return the widened
/// frame.
///
/// The source column is picked by position, not by name: reordering the
/// input columns changes which one gets scaled. A non-numeric first column
/// fails inside the arithmetic rather than being coerced.
pub fn append_scaled_column(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
    if df.width() == 0 {
        return Err(ProcessorError::NoColumns);
    }

    let out = df
        .clone()
        .lazy()
        .with_column((nth(0) * lit(SCALE_FACTOR)).alias(PROCESSED_COLUMN))
        .collect()?;
    Ok(out)
}
