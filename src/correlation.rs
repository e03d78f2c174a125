//! Correlation analysis for dataset features
//!
//! Computes the Pearson correlation coefficient of every feature with the target variable. This
//! shows at a glance which features move together with the target, independent of any fitted
//! model.

use ndarray::{Array1, ArrayBase, Axis, Data, Ix2};

use crate::dataset::{AsSingleTargets, DatasetBase};
use crate::error::{Error, Result};
use crate::Float;

/// Pearson correlation coefficients between each feature and the target
///
/// A feature without variance has no defined correlation, its coefficient is `NaN`.
///
/// # Example
///
/// ```rust
/// use ndarray::array;
/// use perfindex::{correlation::PearsonCorrelation, Dataset};
///
/// let dataset: Dataset<f64> = Dataset::new(array![[1., 5.], [2., 3.], [3., 1.]], array![2., 4., 6.])
///     .with_feature_names(vec!["rising", "falling"]);
/// let correlation = PearsonCorrelation::from_dataset(&dataset).unwrap();
///
/// assert!((correlation.get_coeffs()[0] - 1.0).abs() < 1e-12);
/// assert!((correlation.get_coeffs()[1] + 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PearsonCorrelation<F> {
    pearson_coeffs: Array1<F>,
    feature_names: Vec<String>,
}

impl<F: Float> PearsonCorrelation<F> {
    /// Calculate the correlation of every feature with the target
    ///
    /// Needs at least two samples.
    pub fn from_dataset<D: Data<Elem = F>, T: AsSingleTargets<Elem = F>>(
        dataset: &DatasetBase<ArrayBase<D, Ix2>, T>,
    ) -> Result<Self> {
        let records = dataset.records();
        let targets = dataset.targets().as_single_targets();

        if targets.len() != records.nrows() {
            return Err(Error::MismatchedShapes {
                expected: records.nrows(),
                actual: targets.len(),
            });
        }
        if records.nrows() < 2 {
            return Err(Error::NotEnoughSamples);
        }

        let target_mean = targets.mean().ok_or(Error::NotEnoughSamples)?;
        let targets_centered = &targets - target_mean;
        let target_norm = targets_centered.mapv(|x| x * x).sum().sqrt();

        let pearson_coeffs = records.map_axis(Axis(0), |column| {
            let mean = column.mean().unwrap_or_else(F::zero);
            let centered = &column - mean;
            let norm = centered.mapv(|x| x * x).sum().sqrt();
            let denominator = norm * target_norm;

            if denominator > F::zero() {
                centered.dot(&targets_centered) / denominator
            } else {
                F::nan()
            }
        });

        Ok(PearsonCorrelation {
            pearson_coeffs,
            feature_names: dataset.feature_names(),
        })
    }

    /// Return the Pearson correlation coefficients
    ///
    /// The coefficients are in the order of the features of the dataset.
    pub fn get_coeffs(&self) -> &Array1<F> {
        &self.pearson_coeffs
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Features paired with their coefficient, strongest absolute correlation first
    ///
    /// Undefined (`NaN`) coefficients are placed at the end.
    pub fn ranked(&self) -> Vec<(&str, F)> {
        let mut ranked = self
            .feature_names
            .iter()
            .map(String::as_str)
            .zip(self.pearson_coeffs.iter().copied())
            .collect::<Vec<_>>();

        ranked.sort_by(|(_, a), (_, b)| match (a.is_nan(), b.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            (false, false) => b
                .abs()
                .partial_cmp(&a.abs())
                .unwrap_or(std::cmp::Ordering::Equal),
        });

        ranked
    }
}
