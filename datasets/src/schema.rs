//! Explicit schema of the student performance dataset
//!
//! Columns are addressed through typed fields instead of string lookups. `Feature::column` and
//! `TARGET_COLUMN` define the CSV header names, the required column lists are built from them.
//! The serde renames repeat the names as literals and are tested against `Feature::column`.
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Header of the target column
pub const TARGET_COLUMN: &str = "Performance Index";

/// The five predictors, in the column order of records matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    HoursStudied,
    PreviousScores,
    ExtracurricularActivities,
    SleepHours,
    SampleQuestionPapersPracticed,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::HoursStudied,
        Feature::PreviousScores,
        Feature::ExtracurricularActivities,
        Feature::SleepHours,
        Feature::SampleQuestionPapersPracticed,
    ];

    /// Header of the column in dataset files
    pub const fn column(&self) -> &'static str {
        match self {
            Feature::HoursStudied => "Hours Studied",
            Feature::PreviousScores => "Previous Scores",
            Feature::ExtracurricularActivities => "Extracurricular Activities",
            Feature::SleepHours => "Sleep Hours",
            Feature::SampleQuestionPapersPracticed => "Sample Question Papers Practiced",
        }
    }

    /// Short human readable name used in tables and charts
    pub fn label(&self) -> &'static str {
        match self {
            Feature::HoursStudied => "Study hours",
            Feature::PreviousScores => "Previous scores",
            Feature::ExtracurricularActivities => "Extracurricular activities",
            Feature::SleepHours => "Sleep hours",
            Feature::SampleQuestionPapersPracticed => "Practice papers",
        }
    }

    /// Admissible range of a user supplied value, both ends inclusive
    pub fn range(&self) -> (f64, f64) {
        match self {
            Feature::HoursStudied => (0., 10.),
            Feature::PreviousScores => (0., 100.),
            Feature::ExtracurricularActivities => (0., 1.),
            Feature::SleepHours => (0., 12.),
            Feature::SampleQuestionPapersPracticed => (0., 10.),
        }
    }

    /// Look a feature up by its column header
    pub fn from_column(column: &str) -> Option<Feature> {
        Feature::ALL.iter().copied().find(|f| f.column() == column)
    }
}

/// Column headers as used for the feature names of numeric datasets
pub fn feature_names() -> Vec<&'static str> {
    Feature::ALL.iter().map(Feature::column).collect()
}

/// A student record as stored in the dataset file
///
/// The extracurricular column still holds its textual category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawStudentRecord {
    #[serde(rename = "Hours Studied")]
    pub hours_studied: u32,
    #[serde(rename = "Previous Scores")]
    pub previous_scores: f64,
    #[serde(rename = "Extracurricular Activities")]
    pub extracurricular_activities: String,
    #[serde(rename = "Sleep Hours")]
    pub sleep_hours: u32,
    #[serde(rename = "Sample Question Papers Practiced")]
    pub sample_question_papers_practiced: u32,
    #[serde(rename = "Performance Index")]
    pub performance_index: f64,
}

impl RawStudentRecord {
    pub const COLUMNS: [&'static str; 6] = [
        Feature::HoursStudied.column(),
        Feature::PreviousScores.column(),
        Feature::ExtracurricularActivities.column(),
        Feature::SleepHours.column(),
        Feature::SampleQuestionPapersPracticed.column(),
        TARGET_COLUMN,
    ];
}

/// Study factors as stored in a query file, the target column is absent
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawStudyFactors {
    #[serde(rename = "Hours Studied")]
    pub hours_studied: u32,
    #[serde(rename = "Previous Scores")]
    pub previous_scores: f64,
    #[serde(rename = "Extracurricular Activities")]
    pub extracurricular_activities: String,
    #[serde(rename = "Sleep Hours")]
    pub sleep_hours: u32,
    #[serde(rename = "Sample Question Papers Practiced")]
    pub sample_question_papers_practiced: u32,
}

impl RawStudyFactors {
    pub const COLUMNS: [&'static str; 5] = [
        Feature::HoursStudied.column(),
        Feature::PreviousScores.column(),
        Feature::ExtracurricularActivities.column(),
        Feature::SleepHours.column(),
        Feature::SampleQuestionPapersPracticed.column(),
    ];
}

/// The five predictors of a single student, encoded
///
/// This is both a dataset row without its target and the shape of a user query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyFactors {
    pub hours_studied: u32,
    pub previous_scores: f64,
    pub extracurricular_activities: bool,
    pub sleep_hours: u32,
    pub sample_question_papers_practiced: u32,
}

impl StudyFactors {
    /// Numeric value of a single feature, booleans are encoded as 0/1
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::HoursStudied => f64::from(self.hours_studied),
            Feature::PreviousScores => self.previous_scores,
            Feature::ExtracurricularActivities => {
                if self.extracurricular_activities {
                    1.
                } else {
                    0.
                }
            }
            Feature::SleepHours => f64::from(self.sleep_hours),
            Feature::SampleQuestionPapersPracticed => {
                f64::from(self.sample_question_papers_practiced)
            }
        }
    }

    /// Feature values in the column order of `Feature::ALL`
    pub fn to_array(&self) -> Array1<f64> {
        Feature::ALL.iter().map(|f| self.value(*f)).collect()
    }

    /// Checks every value against the admissible range of its feature
    pub fn validate(&self) -> Result<()> {
        for feature in Feature::ALL.iter() {
            let value = self.value(*feature);
            let (min, max) = feature.range();

            if !(value >= min && value <= max) {
                return Err(Error::OutOfRange {
                    feature: feature.column(),
                    value,
                    min,
                    max,
                });
            }
        }

        Ok(())
    }
}

/// An encoded student record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub factors: StudyFactors,
    pub performance_index: f64,
}
