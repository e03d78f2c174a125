//! Quartile based categorization of predictions
//!
//! The first and third quartile of the observed targets split the target range into three
//! performance levels. The thresholds only depend on the observed targets, never on a fitted
//! model, so they are computed once per dataset.
use std::fmt;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::AsSingleTargets;
use crate::error::{Error, Result};
use crate::Float;

/// Performance level of a predicted target
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceLevel {
    /// Strictly below the first quartile
    Low,
    /// Between the first and third quartile, both inclusive
    Medium,
    /// Strictly above the third quartile
    High,
}

impl PerformanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::Low => "Low",
            PerformanceLevel::Medium => "Medium",
            PerformanceLevel::High => "High",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First and third quartile of a target variable
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartileThresholds<F> {
    q1: F,
    q3: F,
}

impl<F: Float> QuartileThresholds<F> {
    /// Create thresholds from known quartiles
    ///
    /// Fails if any quartile is not finite or `q1 > q3`.
    pub fn new(q1: F, q3: F) -> Result<Self> {
        if !q1.is_finite() || !q3.is_finite() {
            return Err(Error::NonFinite("quartile thresholds".into()));
        }
        if q1 > q3 {
            return Err(Error::Parameters(format!(
                "first quartile {} exceeds third quartile {}",
                q1, q3
            )));
        }

        Ok(QuartileThresholds { q1, q3 })
    }

    /// Compute the 25th and 75th percentile of all targets
    ///
    /// Percentiles are linearly interpolated between the two closest ranks. Fails with
    /// `EmptyTargets` when there are no targets.
    pub fn from_targets<T: AsSingleTargets<Elem = F>>(targets: &T) -> Result<Self> {
        let targets = targets.as_single_targets();
        if targets.is_empty() {
            return Err(Error::EmptyTargets);
        }
        if targets.iter().any(|x| !x.is_finite()) {
            return Err(Error::NonFinite("targets".into()));
        }

        let mut sorted = targets.to_vec();
        // all values are finite, so the ordering is total
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Self::new(
            quantile_sorted(&sorted, F::cast(0.25)),
            quantile_sorted(&sorted, F::cast(0.75)),
        )
    }

    pub fn q1(&self) -> F {
        self.q1
    }

    pub fn q3(&self) -> F {
        self.q3
    }

    /// Classify a prediction
    ///
    /// Both quartiles belong to the `Medium` level.
    pub fn categorize(&self, prediction: F) -> PerformanceLevel {
        if prediction > self.q3 {
            PerformanceLevel::High
        } else if prediction >= self.q1 {
            PerformanceLevel::Medium
        } else {
            PerformanceLevel::Low
        }
    }
}

/// Quantile `q` of ascending, non-empty `sorted` with linear interpolation
fn quantile_sorted<F: Float>(sorted: &[F], q: F) -> F {
    let position = q * F::cast(sorted.len() - 1);
    let lower = position.floor();
    let fraction = position - lower;

    let lower = lower.to_usize().unwrap_or(0).min(sorted.len() - 1);
    let upper = (lower + 1).min(sorted.len() - 1);

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    #[test]
    fn boundaries_belong_to_medium() {
        let thresholds = QuartileThresholds::new(40.0, 80.0).unwrap();

        assert_eq!(thresholds.categorize(80.0), PerformanceLevel::Medium);
        assert_eq!(thresholds.categorize(80.01), PerformanceLevel::High);
        assert_eq!(thresholds.categorize(40.0), PerformanceLevel::Medium);
        assert_eq!(thresholds.categorize(39.99), PerformanceLevel::Low);
        assert_eq!(thresholds.categorize(60.0), PerformanceLevel::Medium);
    }

    #[test]
    fn quartiles_are_interpolated() {
        // positions 0.75 and 2.25 for four values
        let targets: Array1<f64> = array![10., 20., 30., 40.];
        let thresholds = QuartileThresholds::from_targets(&targets).unwrap();

        assert_abs_diff_eq!(thresholds.q1(), 17.5);
        assert_abs_diff_eq!(thresholds.q3(), 32.5);
    }

    #[test]
    fn quartiles_ignore_input_order() {
        let sorted: Array1<f64> = array![1., 2., 3., 4., 5., 6., 7., 8., 9.];
        let shuffled: Array1<f64> = array![9., 1., 8., 2., 7., 3., 6., 4., 5.];

        let a = QuartileThresholds::from_targets(&sorted).unwrap();
        let b = QuartileThresholds::from_targets(&shuffled).unwrap();

        assert_eq!(a, b);
        assert_abs_diff_eq!(a.q1(), 3.0);
        assert_abs_diff_eq!(a.q3(), 7.0);
    }

    #[test]
    fn single_target_collapses_quartiles() {
        let targets: Array1<f64> = array![55.];
        let thresholds = QuartileThresholds::from_targets(&targets).unwrap();

        assert_eq!(thresholds.q1(), 55.);
        assert_eq!(thresholds.q3(), 55.);
        assert_eq!(thresholds.categorize(55.), PerformanceLevel::Medium);
    }

    #[test]
    fn empty_targets_are_rejected() {
        let targets: Array1<f64> = Array1::zeros(0);

        assert!(matches!(
            QuartileThresholds::from_targets(&targets),
            Err(Error::EmptyTargets)
        ));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let targets: Array1<f64> = array![1., f64::NAN, 3.];

        assert!(matches!(
            QuartileThresholds::from_targets(&targets),
            Err(Error::NonFinite(_))
        ));
        assert!(QuartileThresholds::new(f64::INFINITY, 1.).is_err());
        assert!(QuartileThresholds::new(80., 40.).is_err());
    }
}
