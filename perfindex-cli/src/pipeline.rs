//! The prediction pipeline
//!
//! A prediction runs through separate stages which only share the values they return:
//!
//! * [`split`] partitions the dataset into a training and an evaluation part
//! * [`fit`] trains ordinary least squares on the training part
//! * [`evaluate`] scores the fitted model on the evaluation part
//! * [`infer`] applies the fitted model to a query
//!
//! [`run_prediction`] chains them and categorizes the prediction against the quartiles of the
//! full dataset. The model is refitted for every request.
use ndarray::{Array1, Axis};
use perfindex::prelude::*;
use perfindex_datasets::{encode_factors, Feature, RawStudyFactors, StudyFactors};
use perfindex_linear::{FittedLinearRegression, LinearRegression};
use rand::SeedableRng;
use rand_isaac::Isaac64Rng;

use crate::error::{PipelineError, Result};
use crate::report::{
    ActualVsPredicted, BatchEntry, Coefficient, Contribution, CorrelationReport, CorrelationRow,
    Evaluation, PredictionReport,
};

/// Seed of the train/test permutation
pub const DEFAULT_SEED: u64 = 42;
/// Share of samples held back for evaluation
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub seed: u64,
    pub test_ratio: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            seed: DEFAULT_SEED,
            test_ratio: DEFAULT_TEST_RATIO,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.test_ratio > 0.0 && self.test_ratio < 1.0) {
            return Err(perfindex::Error::Parameters(format!(
                "test ratio should lie in (0, 1), got {}",
                self.test_ratio
            ))
            .into());
        }

        Ok(())
    }
}

/// Partition `dataset` into `(train, test)` with a permutation seeded by `config.seed`
pub fn split(dataset: &Dataset<f64>, config: &PipelineConfig) -> Result<(Dataset<f64>, Dataset<f64>)> {
    let mut rng = Isaac64Rng::seed_from_u64(config.seed);
    let (train, test) = dataset.train_test_split(config.test_ratio, &mut rng)?;

    tracing::debug!(
        train = train.nsamples(),
        test = test.nsamples(),
        seed = config.seed,
        "split dataset"
    );

    Ok((train, test))
}

/// Fit ordinary least squares with intercept
pub fn fit(train: &Dataset<f64>) -> Result<FittedLinearRegression<f64>> {
    let model = LinearRegression::default().fit(train)?;

    tracing::debug!(
        intercept = model.intercept(),
        params = %model.params(),
        "fitted linear model"
    );

    Ok(model)
}

/// Score `model` on samples it has not seen during training
///
/// `train_size` is only carried into the result.
pub fn evaluate(
    model: &FittedLinearRegression<f64>,
    test: &Dataset<f64>,
    train_size: usize,
) -> Result<Evaluation> {
    let predicted: Array1<f64> = model.predict(test.records());
    let actual = test.targets();

    let mean_squared_error = predicted.mean_squared_error(actual)?;
    let r2 = predicted.r2(actual)?;

    tracing::info!(mse = mean_squared_error, r2, "evaluated model");

    let actual_vs_predicted = actual
        .iter()
        .zip(predicted.iter())
        .map(|(&actual, &predicted)| ActualVsPredicted { actual, predicted })
        .collect();

    Ok(Evaluation {
        mean_squared_error,
        r2,
        train_size,
        test_size: test.nsamples(),
        actual_vs_predicted,
    })
}

/// Predict the performance index of a single query
pub fn infer(model: &FittedLinearRegression<f64>, query: &StudyFactors) -> f64 {
    model.predict_one(&query.to_array())
}

/// Run every stage for a single query
///
/// The query is checked against the admissible feature ranges before anything is fitted.
pub fn run_prediction(
    dataset: &Dataset<f64>,
    query: &StudyFactors,
    config: &PipelineConfig,
) -> Result<PredictionReport> {
    config.validate()?;
    query.validate()?;

    let thresholds = QuartileThresholds::from_targets(dataset.targets())?;

    let (train, test) = split(dataset, config)?;
    let model = fit(&train)?;
    let evaluation = evaluate(&model, &test, train.nsamples())?;

    let prediction = infer(&model, query);
    let level = thresholds.categorize(prediction);

    tracing::info!(prediction, level = %level, "predicted performance index");

    let coefficients = Feature::ALL
        .iter()
        .zip(model.params())
        .map(|(feature, value)| Coefficient {
            feature: *feature,
            label: feature.label(),
            value: *value,
        })
        .collect();

    Ok(PredictionReport {
        query: *query,
        prediction,
        level,
        thresholds,
        intercept: model.intercept(),
        coefficients,
        contributions: contributions(&model, query),
        evaluation,
    })
}

/// Contribution of every query value to the prediction, largest first
pub fn contributions(model: &FittedLinearRegression<f64>, query: &StudyFactors) -> Vec<Contribution> {
    let values = query.to_array();
    let mut contributions = Feature::ALL
        .iter()
        .zip(values.iter())
        .zip(model.params().iter())
        .zip(model.contributions(&values).iter())
        .map(|(((feature, value), coefficient), contribution)| Contribution {
            feature: *feature,
            label: feature.label(),
            value: *value,
            coefficient: *coefficient,
            contribution: *contribution,
        })
        .collect::<Vec<_>>();

    contributions.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));

    contributions
}

/// Run a prediction for every query row
///
/// A failing row is reported in its entry and does not stop the remaining rows.
pub fn run_batch(
    dataset: &Dataset<f64>,
    queries: &[RawStudyFactors],
    config: &PipelineConfig,
) -> Result<Vec<BatchEntry>> {
    config.validate()?;

    let entries = queries
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let row = idx + 1;
            let outcome = encode_factors(raw, row)
                .map_err(PipelineError::from)
                .and_then(|query| run_prediction(dataset, &query, config));

            match outcome {
                Ok(report) => BatchEntry {
                    row,
                    report: Some(report),
                    error: None,
                },
                Err(err) => {
                    tracing::warn!(row, error = %err, "query failed");

                    BatchEntry {
                        row,
                        report: None,
                        error: Some(err.to_string()),
                    }
                }
            }
        })
        .collect();

    Ok(entries)
}

/// Correlation of every feature with the performance index, next to the coefficients of a
/// model fitted on the whole dataset
///
/// Features without a defined correlation carry no variance. They are left out of the fit and
/// reported with a zero coefficient.
pub fn correlation_table(dataset: &Dataset<f64>) -> Result<CorrelationReport> {
    let correlation = PearsonCorrelation::from_dataset(dataset)?;
    let names = dataset.feature_names();

    let kept = (0..names.len())
        .filter(|&idx| !correlation.get_coeffs()[idx].is_nan())
        .collect::<Vec<_>>();
    let mut coefficients = Array1::<f64>::zeros(names.len());
    let intercept = if kept.is_empty() {
        dataset.targets().mean().unwrap_or(0.0)
    } else {
        let varying = Dataset::new(
            dataset.records().select(Axis(1), &kept),
            dataset.targets().to_owned(),
        )
        .with_feature_names(kept.iter().map(|&idx| names[idx].clone()).collect::<Vec<_>>());
        let model = fit(&varying)?;

        for (&idx, &param) in kept.iter().zip(model.params().iter()) {
            coefficients[idx] = param;
        }
        model.intercept()
    };

    if kept.len() < names.len() {
        tracing::warn!(
            dropped = names.len() - kept.len(),
            "features without variance left out of the fit"
        );
    }

    let rows = correlation
        .ranked()
        .into_iter()
        .filter_map(|(name, correlation)| {
            let idx = names.iter().position(|n| n == name)?;
            let feature = Feature::from_column(name)?;

            Some(CorrelationRow {
                feature,
                label: feature.label(),
                correlation,
                coefficient: coefficients[idx],
            })
        })
        .collect();

    Ok(CorrelationReport {
        rows,
        intercept,
        nsamples: dataset.nsamples(),
    })
}
