//! perfindex prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::dataset::{AsSingleTargets, Dataset, DatasetBase, DatasetView, Float, Records};

#[doc(no_inline)]
pub use crate::metrics_regression::SingleTargetRegression;

#[doc(no_inline)]
pub use crate::correlation::PearsonCorrelation;

#[doc(no_inline)]
pub use crate::categorize::{PerformanceLevel, QuartileThresholds};
