//! `perfindex` provides the building blocks to predict a student's academic *Performance Index*
//! from a handful of study habits.
//!
//! ## The Big Picture
//!
//! The workspace is split the usual way: this core crate holds the dataset container, the error
//! type, the training traits, regression metrics, correlation analysis and the quartile based
//! categorizer. The ordinary least squares model lives in `perfindex-linear`, loading and
//! encoding of the student CSV files in `perfindex-datasets` and the command line front-end in
//! `perfindex-cli`.
//!
//! ## Example
//!
//! ```rust
//! use ndarray::array;
//! use perfindex::prelude::*;
//!
//! let targets = array![20., 40., 60., 80., 100.];
//! let thresholds = QuartileThresholds::from_targets(&targets).unwrap();
//!
//! assert_eq!(thresholds.q1(), 40.);
//! assert_eq!(thresholds.categorize(80.), PerformanceLevel::Medium);
//! assert_eq!(thresholds.categorize(80.5), PerformanceLevel::High);
//! ```

pub mod categorize;
pub mod correlation;
pub mod dataset;
pub mod error;
mod metrics_regression;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, DatasetBase, DatasetView, Float};
pub use error::Error;

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::SingleTargetRegression;
}
