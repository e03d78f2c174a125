use approx::assert_abs_diff_eq;
use ndarray::{Array1, Array2};
use perfindex::categorize::{PerformanceLevel, QuartileThresholds};
use perfindex::traits::Fit;
use perfindex::Dataset;
use perfindex_cli::pipeline::{self, PipelineConfig};
use perfindex_cli::PipelineError;
use perfindex_datasets::{
    Feature, RawStudyFactors, StudentDataset, StudentRecord, StudyFactors,
};
use perfindex_linear::{LinearError, LinearRegression};

/// Students whose performance index is exactly `2 * hours + 0.5 * previous scores`
fn linear_students(nsamples: usize) -> Dataset<f64> {
    let records = (0..nsamples)
        .map(|i| {
            let factors = StudyFactors {
                hours_studied: (i % 10) as u32,
                previous_scores: ((37 * i) % 61 + 40) as f64,
                extracurricular_activities: i % 3 == 0,
                sleep_hours: (4 + (7 * i) % 6) as u32,
                sample_question_papers_practiced: ((3 * i) % 10) as u32,
            };
            StudentRecord {
                factors,
                performance_index: 2.0 * f64::from(factors.hours_studied)
                    + 0.5 * factors.previous_scores,
            }
        })
        .collect();

    StudentDataset::new(records).to_dataset().unwrap()
}

fn query() -> StudyFactors {
    StudyFactors {
        hours_studied: 5,
        previous_scores: 70.,
        extracurricular_activities: true,
        sleep_hours: 7,
        sample_question_papers_practiced: 5,
    }
}

#[test]
fn recovers_known_coefficients() {
    let dataset = linear_students(40);
    let report = pipeline::run_prediction(&dataset, &query(), &PipelineConfig::default()).unwrap();

    let coefficients = report
        .coefficients
        .iter()
        .map(|c| c.value)
        .collect::<Array1<f64>>();
    assert_abs_diff_eq!(
        coefficients,
        Array1::from(vec![2.0, 0.5, 0.0, 0.0, 0.0]),
        epsilon = 1e-8
    );
    assert_abs_diff_eq!(report.intercept, 0.0, epsilon = 1e-8);
    assert_abs_diff_eq!(report.prediction, 45.0, epsilon = 1e-8);

    assert_eq!(report.evaluation.test_size, 8);
    assert_eq!(report.evaluation.train_size, 32);
    assert!(report.evaluation.r2 > 0.95);
    assert!(report.evaluation.mean_squared_error < 1e-10);
}

#[test]
fn same_seed_same_report() {
    let dataset = perfindex_datasets::student_performance();
    let config = PipelineConfig::default();

    let first = pipeline::run_prediction(&dataset, &query(), &config).unwrap();
    let second = pipeline::run_prediction(&dataset, &query(), &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.evaluation.actual_vs_predicted,
        second.evaluation.actual_vs_predicted
    );
}

#[test]
fn prediction_is_intercept_plus_weighted_factors() {
    let dataset = perfindex_datasets::student_performance();
    let report = pipeline::run_prediction(&dataset, &query(), &PipelineConfig::default()).unwrap();

    let weighted: f64 = report
        .coefficients
        .iter()
        .map(|c| c.value * query().value(c.feature))
        .sum();
    assert_abs_diff_eq!(report.prediction, report.intercept + weighted, epsilon = 1e-9);

    let contributed: f64 = report.contributions.iter().map(|c| c.contribution).sum();
    assert_abs_diff_eq!(report.prediction, report.intercept + contributed, epsilon = 1e-9);
    assert!(report
        .contributions
        .windows(2)
        .all(|w| w[0].contribution >= w[1].contribution));
}

#[test]
fn level_follows_the_quartiles_of_the_dataset() {
    let dataset = perfindex_datasets::student_performance();
    let thresholds = QuartileThresholds::from_targets(dataset.targets()).unwrap();

    assert_abs_diff_eq!(thresholds.q1(), 37.0);
    assert_abs_diff_eq!(thresholds.q3(), 74.0);
    assert_eq!(thresholds.categorize(74.0), PerformanceLevel::Medium);
    assert_eq!(thresholds.categorize(37.0), PerformanceLevel::Medium);
    assert_eq!(thresholds.categorize(74.01), PerformanceLevel::High);
    assert_eq!(thresholds.categorize(36.99), PerformanceLevel::Low);

    let report = pipeline::run_prediction(&dataset, &query(), &PipelineConfig::default()).unwrap();
    assert_eq!(report.thresholds, thresholds);
    assert_eq!(report.level, thresholds.categorize(report.prediction));
}

#[test]
fn single_training_sample_is_a_fit_error() {
    let dataset = linear_students(2);

    match pipeline::run_prediction(&dataset, &query(), &PipelineConfig::default()) {
        Err(PipelineError::Fit(LinearError::NotEnoughSamples { n_samples, nparams })) => {
            assert_eq!((n_samples, nparams), (1, 6));
        }
        other => panic!("expected fit error, got {:?}", other),
    }
}

#[test]
fn no_predictors_is_a_fit_error() {
    let dataset = Dataset::new(Array2::<f64>::zeros((10, 0)), Array1::linspace(0., 9., 10));

    assert!(matches!(
        LinearRegression::default().fit(&dataset),
        Err(LinearError::NoFeatures)
    ));
}

#[test]
fn empty_dataset_has_no_quartiles() {
    let dataset = StudentDataset::new(Vec::new()).to_dataset().unwrap();

    assert!(matches!(
        pipeline::run_prediction(&dataset, &query(), &PipelineConfig::default()),
        Err(PipelineError::BaseCrate(perfindex::Error::EmptyTargets))
    ));
}

#[test]
fn out_of_range_query_is_rejected() {
    let dataset = perfindex_datasets::student_performance();
    let mut query = query();
    query.hours_studied = 11;

    match pipeline::run_prediction(&dataset, &query, &PipelineConfig::default()) {
        Err(PipelineError::Data(perfindex_datasets::Error::OutOfRange { feature, .. })) => {
            assert_eq!(feature, Feature::HoursStudied.column());
        }
        other => panic!("expected range error, got {:?}", other),
    }
}

#[test]
fn batch_continues_after_failing_rows() {
    let dataset = perfindex_datasets::student_performance();
    let raw = |extracurricular: &str, sleep_hours| RawStudyFactors {
        hours_studied: 5,
        previous_scores: 70.,
        extracurricular_activities: extracurricular.to_string(),
        sleep_hours,
        sample_question_papers_practiced: 5,
    };
    let queries = vec![raw("Yes", 7), raw("Sometimes", 7), raw("No", 14), raw("No", 7)];

    let entries = pipeline::run_batch(&dataset, &queries, &PipelineConfig::default()).unwrap();

    assert_eq!(entries.len(), 4);
    assert_eq!(
        entries.iter().map(|e| e.row).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert!(entries[0].report.is_some());
    assert!(entries[1].error.as_deref().unwrap().contains("Sometimes"));
    assert!(entries[2].error.as_deref().unwrap().contains("Sleep Hours"));
    assert!(entries[3].report.is_some());

    let with_activities = entries[0].report.as_ref().unwrap();
    let without_activities = entries[3].report.as_ref().unwrap();
    assert_abs_diff_eq!(
        with_activities.prediction - without_activities.prediction,
        with_activities.coefficients[2].value,
        epsilon = 1e-9
    );
}

#[test]
fn correlation_table_is_ranked() {
    let dataset = perfindex_datasets::student_performance();
    let report = pipeline::correlation_table(&dataset).unwrap();

    let order = report.rows.iter().map(|r| r.feature).collect::<Vec<_>>();
    assert_eq!(
        order,
        vec![
            Feature::PreviousScores,
            Feature::HoursStudied,
            Feature::SleepHours,
            Feature::SampleQuestionPapersPracticed,
            Feature::ExtracurricularActivities,
        ]
    );
    assert_abs_diff_eq!(report.rows[0].correlation, 0.9288575702013183, epsilon = 1e-9);
    assert_eq!(report.nsamples, 200);

    let model = LinearRegression::default().fit(&dataset).unwrap();
    assert_abs_diff_eq!(report.rows[1].coefficient, model.params()[0]);
    assert_abs_diff_eq!(report.intercept, model.intercept());
}

#[test]
fn constant_feature_stays_in_the_correlation_table() {
    let dataset = linear_students(30);
    let mut records = dataset.records().clone();
    records.column_mut(3).fill(7.0);
    let dataset = Dataset::new(records, dataset.targets().clone())
        .with_feature_names(dataset.feature_names());

    let report = pipeline::correlation_table(&dataset).unwrap();

    assert_eq!(report.rows.len(), 5);
    let sleep = &report.rows[4];
    assert_eq!(sleep.feature, Feature::SleepHours);
    assert!(sleep.correlation.is_nan());
    assert_eq!(sleep.coefficient, 0.0);

    let coefficient = |feature: Feature| {
        report
            .rows
            .iter()
            .find(|r| r.feature == feature)
            .map(|r| r.coefficient)
            .unwrap()
    };
    assert_abs_diff_eq!(coefficient(Feature::HoursStudied), 2.0, epsilon = 1e-8);
    assert_abs_diff_eq!(coefficient(Feature::PreviousScores), 0.5, epsilon = 1e-8);
    assert_abs_diff_eq!(report.intercept, 0.0, epsilon = 1e-8);
}

#[test]
fn reports_serialize_to_json() {
    let dataset = perfindex_datasets::student_performance();
    let report = pipeline::run_prediction(&dataset, &query(), &PipelineConfig::default()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["level"], report.level.as_str().to_lowercase());
    assert_eq!(json["thresholds"]["q1"], 37.0);
    assert_eq!(json["coefficients"][0]["feature"], "hours_studied");
    assert_eq!(json["evaluation"]["actual_vs_predicted"].as_array().unwrap().len(), 40);
}
