//! Error types in perfindex
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
    #[error("mismatched shapes: expected {expected} values, got {actual}")]
    MismatchedShapes { expected: usize, actual: usize },
    #[error("not enough samples")]
    NotEnoughSamples,
    #[error("the target column is empty, quantiles are undefined")]
    EmptyTargets,
    #[error("non-finite value in {0}")]
    NonFinite(String),
}
