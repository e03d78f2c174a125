//! Common metrics for regression
//!
//! This module implements common comparison metrices for continuous variables.

use ndarray::{Array1, ArrayView1};

use crate::{
    dataset::AsSingleTargets,
    error::{Error, Result},
    Float,
};

/// Regression metrices trait for single targets.
///
/// It is possible to compute the listed metrics between:
/// * One-dimensional array - One-dimensional array
///
/// To compare predicted values against the ground truth, call the metric on the prediction:
/// ```ignore
/// let mse = prediction.mean_squared_error(&ground_truth)?;
/// ```
///
/// All metrics fail with `MismatchedShapes` when both arrays differ in length and with
/// `NotEnoughSamples` on empty arrays.
pub trait SingleTargetRegression<F: Float, T: AsSingleTargets<Elem = F>>:
    AsSingleTargets<Elem = F>
{
    /// Maximal error between two continuous variables
    fn max_error(&self, compare_to: &T) -> Result<F> {
        let diff = residuals(self.as_single_targets(), compare_to.as_single_targets())?;

        Ok(diff.iter().map(|x| x.abs()).fold(F::neg_infinity(), F::max))
    }

    /// Mean error between two continuous variables
    fn mean_absolute_error(&self, compare_to: &T) -> Result<F> {
        let diff = residuals(self.as_single_targets(), compare_to.as_single_targets())?;

        diff.mapv(|x| x.abs())
            .mean()
            .ok_or(Error::NotEnoughSamples)
    }

    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: &T) -> Result<F> {
        let diff = residuals(self.as_single_targets(), compare_to.as_single_targets())?;

        diff.mapv(|x| x * x).mean().ok_or(Error::NotEnoughSamples)
    }

    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable.
    ///
    /// `compare_to` is the ground truth. For a ground truth without variance the score is one for
    /// a perfect prediction and zero otherwise.
    fn r2(&self, compare_to: &T) -> Result<F> {
        let truth = compare_to.as_single_targets();
        let diff = residuals(self.as_single_targets(), truth.view())?;

        let mean = truth.mean().ok_or(Error::NotEnoughSamples)?;
        let residual_sum = diff.mapv(|x| x * x).sum();
        let total_sum = truth.mapv(|x| (x - mean) * (x - mean)).sum();

        Ok(unexplained_to_score(residual_sum, total_sum))
    }

    /// Same as R-Squared but with biased variance
    fn explained_variance(&self, compare_to: &T) -> Result<F> {
        let truth = compare_to.as_single_targets();
        let diff = residuals(self.as_single_targets(), truth.view())?;

        let residual_variance = diff.var(F::zero());
        let total_variance = truth.var(F::zero());

        Ok(unexplained_to_score(residual_variance, total_variance))
    }
}

impl<F: Float, D: ndarray::Data<Elem = F>, T: AsSingleTargets<Elem = F>>
    SingleTargetRegression<F, T> for ndarray::ArrayBase<D, ndarray::Ix1>
{
}

fn residuals<F: Float>(prediction: ArrayView1<F>, truth: ArrayView1<F>) -> Result<Array1<F>> {
    if prediction.len() != truth.len() {
        return Err(Error::MismatchedShapes {
            expected: truth.len(),
            actual: prediction.len(),
        });
    }
    if truth.is_empty() {
        return Err(Error::NotEnoughSamples);
    }

    Ok(&prediction - &truth)
}

fn unexplained_to_score<F: Float>(unexplained: F, total: F) -> F {
    if total == F::zero() {
        if unexplained == F::zero() {
            F::one()
        } else {
            F::zero()
        }
    } else {
        F::one() - unexplained / total
    }
}
