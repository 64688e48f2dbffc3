//! CSV Loader Module
//! Handles CSV file reading and writing using Polars.

use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV error: {0}")]
    Csv(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a CSV file into a DataFrame, taking column names from the header
/// row and inferring value types from the data.
///
/// Malformed content (ragged rows, undecodable bytes) is an error; nothing
/// is dropped or coerced to null on the way in.
pub fn read_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .collect()?;
    Ok(df)
}

/// Write a DataFrame as CSV with a header row and no row-index column,
/// overwriting whatever is at `path`.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<(), LoaderError> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}

/// Write the two-row placeholder dataset used when the input file is
/// missing, and return it.
pub fn write_placeholder(path: &Path) -> Result<DataFrame, LoaderError> {
    let mut df = DataFrame::new(vec![
        Column::new("A".into(), [1i64, 2]),
        Column::new("B".into(), [3i64, 4]),
    ])?;
    write_csv(&mut df, path)?;
    Ok(df)
}
