//! An error when fitting a linear model
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearError>;

/// An error when fitting a linear model
///
/// Every variant except `BaseCrate` and `LinalgError` describes training data from which no
/// unique least squares solution can be derived.
#[derive(Error, Debug)]
pub enum LinearError {
    #[error(transparent)]
    BaseCrate(#[from] perfindex::Error),
    #[error("at least one feature is needed")]
    NoFeatures,
    #[error("{nparams} parameters need at least {nparams} samples, got {n_samples}")]
    NotEnoughSamples { n_samples: usize, nparams: usize },
    #[error("records and targets must be finite")]
    NonFiniteInput,
    #[error("feature `{0}` has no variance")]
    ConstantFeature(String),
    #[error("feature `{0}` is a linear combination of the preceding features")]
    CollinearFeature(String),
    #[error(transparent)]
    LinalgError(#[from] linfa_linalg::LinalgError),
}
