//! Errors while loading and encoding student datasets
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The dataset file could not be opened
    #[error("cannot open `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid CSV or a field does not parse into its declared type
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("row {row}: unexpected value `{value}` in column `{column}`, expected `Yes` or `No`")]
    UnknownCategory {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: non-finite value in column `{column}`")]
    NonFinite { row: usize, column: &'static str },
    #[error("{feature} must lie within [{min}, {max}], got {value}")]
    OutOfRange {
        feature: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error(transparent)]
    BaseCrate(#[from] perfindex::Error),
}
