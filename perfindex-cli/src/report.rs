//! Results of the pipeline stages, ready to be rendered or serialized
use perfindex::{categorize::PerformanceLevel, categorize::QuartileThresholds};
use perfindex_datasets::{Feature, StudyFactors};
use serde::Serialize;

/// Scores of a fitted model on the evaluation split
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub mean_squared_error: f64,
    pub r2: f64,
    pub train_size: usize,
    pub test_size: usize,
    /// Observed and predicted target of every evaluation sample
    pub actual_vs_predicted: Vec<ActualVsPredicted>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActualVsPredicted {
    pub actual: f64,
    pub predicted: f64,
}

/// Fitted coefficient of a single feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coefficient {
    pub feature: Feature,
    pub label: &'static str,
    pub value: f64,
}

/// How much a single query value moves the prediction, `value * coefficient`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub feature: Feature,
    pub label: &'static str,
    pub value: f64,
    pub coefficient: f64,
    pub contribution: f64,
}

/// Everything known about a single prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub query: StudyFactors,
    pub prediction: f64,
    pub level: PerformanceLevel,
    pub thresholds: QuartileThresholds<f64>,
    pub intercept: f64,
    pub coefficients: Vec<Coefficient>,
    /// Sorted by contribution, largest first
    pub contributions: Vec<Contribution>,
    pub evaluation: Evaluation,
}

/// Outcome of a single row of a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// 1-based row of the query file
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PredictionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Correlation of a feature with the performance index next to its coefficient in a model
/// fitted on the whole dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationRow {
    pub feature: Feature,
    pub label: &'static str,
    pub correlation: f64,
    pub coefficient: f64,
}

/// Rows sorted by absolute correlation, undefined correlations last
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationReport {
    pub rows: Vec<CorrelationRow>,
    pub intercept: f64,
    pub nsamples: usize,
}
