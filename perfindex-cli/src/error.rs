//! Errors of a prediction run
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// Loading, encoding or validating student data failed
    #[error(transparent)]
    Data(#[from] perfindex_datasets::Error),
    /// No model could be fitted to the training split
    #[error("cannot fit model: {0}")]
    Fit(#[from] perfindex_linear::LinearError),
    #[error(transparent)]
    BaseCrate(#[from] perfindex::Error),
}
