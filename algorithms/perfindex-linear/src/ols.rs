//! Ordinary Least Squares
#![allow(non_snake_case)]
use crate::error::{LinearError, Result};
use linfa_linalg::qr::QRInto;
use linfa_linalg::triangular::{SolveTriangularInplace, UPLO};
use ndarray::{s, Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use perfindex::dataset::{AsSingleTargets, DatasetBase};
use perfindex::traits::{Fit, PredictInplace};
use perfindex::Float;

/// An ordinary least squares linear regression model.
///
/// LinearRegression fits a linear model to minimize the residual sum of
/// squares between the observed targets in the dataset, and the targets
/// predicted by the linear approximation.
///
/// Ordinary least squares regression solves the overconstrained model
///
/// y = Ax + b
///
/// by finding x and b which minimize the L_2 norm ||y - Ax - b||_2.
///
/// The intercept is handled by centering records and targets, the remaining
/// least squares problem is solved with a QR decomposition of the column
/// scaled records. Degenerate problems (no features, fewer samples than
/// parameters, non-finite values, constant or collinear features) are
/// rejected with a `LinearError`.
///
/// ## Examples
///
/// Here's an example on how to train a linear regression model on the bundled
/// student performance sample
/// ```rust
/// use perfindex::traits::{Fit, Predict};
/// use perfindex::metrics::SingleTargetRegression;
/// use perfindex_linear::LinearRegression;
///
/// let dataset = perfindex_datasets::student_performance();
/// let model = LinearRegression::default().fit(&dataset).unwrap();
/// let pred = model.predict(dataset.records());
/// let r2 = pred.r2(dataset.targets()).unwrap();
/// println!("r2 from prediction: {}", r2);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    fit_intercept: bool,
}

/// A fitted linear regression model which can be used for making predictions.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLinearRegression<F> {
    intercept: F,
    params: Array1<F>,
}

impl Default for LinearRegression {
    fn default() -> Self {
        LinearRegression::new()
    }
}

/// Configure and fit a linear regression model
impl LinearRegression {
    /// Create a default linear regression model.
    /// By default, an intercept will be fitted.
    pub fn new() -> LinearRegression {
        LinearRegression {
            fit_intercept: true,
        }
    }

    /// Configure the linear regression model to fit an intercept.
    pub fn with_intercept(mut self, intercept: bool) -> Self {
        self.fit_intercept = intercept;
        self
    }
}

impl<F: Float, D: Data<Elem = F>, T: AsSingleTargets<Elem = F>>
    Fit<ArrayBase<D, Ix2>, T, LinearError> for LinearRegression
{
    type Object = FittedLinearRegression<F>;

    /// Fit a linear regression model given a feature matrix `X` and a target
    /// variable `y`.
    ///
    /// The feature matrix `X` must have shape `(n_samples, n_features)`
    ///
    /// The target variable `y` must have shape `(n_samples)`
    ///
    /// Returns a `FittedLinearRegression` object which contains the fitted
    /// parameters and can be used to `predict` values of the target variable
    /// for new feature values.
    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        let X = dataset.records();
        let y = dataset.targets().as_single_targets();

        let (n_samples, n_features) = X.dim();
        if y.len() != n_samples {
            return Err(perfindex::Error::MismatchedShapes {
                expected: n_samples,
                actual: y.len(),
            }
            .into());
        }
        if n_features == 0 {
            return Err(LinearError::NoFeatures);
        }

        let nparams = n_features + usize::from(self.fit_intercept);
        if n_samples < nparams {
            return Err(LinearError::NotEnoughSamples { n_samples, nparams });
        }
        if X.iter().chain(y.iter()).any(|x| !x.is_finite()) {
            return Err(LinearError::NonFiniteInput);
        }

        let feature_names = dataset.feature_names();
        let magnitude = column_norms(X);

        if self.fit_intercept {
            // If we are fitting the intercept, we first center X and y,
            // compute the models parameters based on the centered X and y
            // and the intercept as the residual of fitted parameters applied
            // to the X_offset and y_offset
            let X_offset: Array1<F> = X
                .mean_axis(Axis(0))
                .ok_or(perfindex::Error::NotEnoughSamples)?;
            let X_centered: Array2<F> = X - &X_offset;
            let y_offset: F = y.mean().ok_or(perfindex::Error::NotEnoughSamples)?;
            let y_centered: Array1<F> = &y - y_offset;

            let params =
                solve_least_squares(&X_centered, &y_centered, &magnitude, &feature_names)?;
            let intercept = y_offset - X_offset.dot(&params);

            Ok(FittedLinearRegression { intercept, params })
        } else {
            Ok(FittedLinearRegression {
                intercept: F::zero(),
                params: solve_least_squares(X, &y, &magnitude, &feature_names)?,
            })
        }
    }
}

fn column_norms<F: Float, D: Data<Elem = F>>(X: &ArrayBase<D, Ix2>) -> Array1<F> {
    X.map_axis(Axis(0), |column| column.dot(&column).sqrt())
}

/// Find the b that minimizes the 2-norm of X b - y with a QR decomposition
///
/// The columns are scaled to unit norm first, so the diagonal of R lies in
/// `[0, 1]` and is comparable against a fixed tolerance. A column whose norm
/// vanished relative to `magnitude` (its norm before centering) is constant,
/// a vanishing `R_jj` marks column `j` as a linear combination of the
/// preceding ones.
fn solve_least_squares<F, B, C>(
    X: &ArrayBase<B, Ix2>,
    y: &ArrayBase<C, Ix1>,
    magnitude: &Array1<F>,
    feature_names: &[String],
) -> Result<Array1<F>>
where
    F: Float,
    B: Data<Elem = F>,
    C: Data<Elem = F>,
{
    let tolerance = F::epsilon().sqrt();
    let n_features = X.ncols();

    let scale = column_norms(X);
    if let Some(idx) = scale
        .iter()
        .zip(magnitude.iter())
        .position(|(s, m)| *s <= tolerance * *m)
    {
        return Err(LinearError::ConstantFeature(feature_name(feature_names, idx)));
    }

    let (q, r) = (X / &scale).qr_into()?.into_decomp();
    let r = r.slice(s![..n_features, ..]);

    if let Some(idx) = r.diag().iter().position(|r_jj| !(r_jj.abs() > tolerance)) {
        return Err(LinearError::CollinearFeature(feature_name(feature_names, idx)));
    }

    let mut rhs = q
        .t()
        .dot(y)
        .slice(s![..n_features])
        .to_owned()
        .insert_axis(Axis(1));
    r.solve_triangular_inplace(&mut rhs, UPLO::Upper)?;

    Ok(rhs.remove_axis(Axis(1)) / &scale)
}

fn feature_name(feature_names: &[String], idx: usize) -> String {
    feature_names
        .get(idx)
        .cloned()
        .unwrap_or_else(|| format!("feature-{}", idx))
}

/// View the fitted parameters and make predictions with a fitted
/// linear regression model.
impl<F: Float> FittedLinearRegression<F> {
    /// Create a model from known parameters
    pub fn new(intercept: F, params: Array1<F>) -> Self {
        FittedLinearRegression { intercept, params }
    }

    /// Get the fitted parameters
    pub fn params(&self) -> &Array1<F> {
        &self.params
    }

    /// Get the fitted intercept, 0. if no intercept was fitted
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Predict the target of a single sample, `intercept + x . params`
    pub fn predict_one<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix1>) -> F {
        assert_eq!(
            x.len(),
            self.params.len(),
            "The number of features must match the number of fitted parameters."
        );

        self.intercept + x.dot(&self.params)
    }

    /// Contribution of every feature of a single sample to its prediction
    ///
    /// The contributions and the intercept sum up to `predict_one(x)`.
    pub fn contributions<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix1>) -> Array1<F> {
        assert_eq!(
            x.len(),
            self.params.len(),
            "The number of features must match the number of fitted parameters."
        );

        x * &self.params
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>>
    for FittedLinearRegression<F>
{
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the target variable according to linear model
    /// learned from the training data distribution.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<F>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );

        *y = x.dot(&self.params) + self.intercept;
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(x.nrows())
    }
}
