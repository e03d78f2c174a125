//! Encoding of categorical columns into numeric predictors
use std::path::Path;

use ndarray::{Array1, Array2};
use perfindex::Dataset;

use crate::error::{Error, Result};
use crate::load;
use crate::schema::{
    feature_names, Feature, RawStudentRecord, RawStudyFactors, StudentRecord, StudyFactors,
    TARGET_COLUMN,
};

/// Accepted spellings of the extracurricular column
///
/// Already encoded values map onto themselves, so encoding an encoded file changes nothing.
const EXTRACURRICULAR: [(&str, bool); 4] =
    [("Yes", true), ("No", false), ("1", true), ("0", false)];

/// Encode a single extracurricular value, `None` for anything outside of `Yes`/`No`/`1`/`0`
pub fn encode_extracurricular(value: &str) -> Option<bool> {
    EXTRACURRICULAR
        .iter()
        .find(|(spelling, _)| *spelling == value)
        .map(|(_, encoded)| *encoded)
}

/// Encoded student records, ready to become a numeric dataset
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDataset {
    records: Vec<StudentRecord>,
}

impl StudentDataset {
    pub fn new(records: Vec<StudentRecord>) -> StudentDataset {
        StudentDataset { records }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert into a dataset with one row per student and the five features in column order
    pub fn to_dataset(&self) -> Result<Dataset<f64>> {
        let nfeatures = Feature::ALL.len();
        let values = self
            .records
            .iter()
            .flat_map(|record| record.factors.to_array().to_vec())
            .collect::<Vec<_>>();

        let records = Array2::from_shape_vec((self.records.len(), nfeatures), values)
            .map_err(perfindex::Error::from)?;
        let targets = self
            .records
            .iter()
            .map(|record| record.performance_index)
            .collect::<Array1<_>>();

        Ok(Dataset::new(records, targets).with_feature_names(feature_names()))
    }
}

/// Encode raw dataset rows
///
/// Row numbers in errors are 1-based and count data rows only.
pub fn encode(raw: &[RawStudentRecord]) -> Result<StudentDataset> {
    let records = raw
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let row = idx + 1;
            if !record.performance_index.is_finite() {
                return Err(Error::NonFinite {
                    row,
                    column: TARGET_COLUMN,
                });
            }

            Ok(StudentRecord {
                factors: encode_row(
                    record.hours_studied,
                    record.previous_scores,
                    &record.extracurricular_activities,
                    record.sleep_hours,
                    record.sample_question_papers_practiced,
                    row,
                )?,
                performance_index: record.performance_index,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StudentDataset::new(records))
}

/// Encode a single query row
pub fn encode_factors(raw: &RawStudyFactors, row: usize) -> Result<StudyFactors> {
    encode_row(
        raw.hours_studied,
        raw.previous_scores,
        &raw.extracurricular_activities,
        raw.sleep_hours,
        raw.sample_question_papers_practiced,
        row,
    )
}

fn encode_row(
    hours_studied: u32,
    previous_scores: f64,
    extracurricular: &str,
    sleep_hours: u32,
    sample_question_papers_practiced: u32,
    row: usize,
) -> Result<StudyFactors> {
    if !previous_scores.is_finite() {
        return Err(Error::NonFinite {
            row,
            column: Feature::PreviousScores.column(),
        });
    }

    let extracurricular_activities =
        encode_extracurricular(extracurricular).ok_or_else(|| Error::UnknownCategory {
            row,
            column: Feature::ExtracurricularActivities.column(),
            value: extracurricular.to_string(),
        })?;

    Ok(StudyFactors {
        hours_studied,
        previous_scores,
        extracurricular_activities,
        sleep_hours,
        sample_question_papers_practiced,
    })
}

/// Load, encode and convert a dataset file in one go
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset<f64>> {
    let raw = load::load(path)?;
    let encoded = encode(&raw)?;

    tracing::debug!(
        rows = encoded.len(),
        with_activities = encoded
            .records()
            .iter()
            .filter(|r| r.factors.extracurricular_activities)
            .count(),
        "encoded student records"
    );

    encoded.to_dataset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::from_reader;
    use ndarray::array;

    const CSV: &str = "Hours Studied,Previous Scores,Extracurricular Activities,Sleep Hours,Sample Question Papers Practiced,Performance Index
7,99,Yes,9,1,91.0
4,82,No,4,2,65.0
8,51,Yes,7,2,45.0
";

    #[test]
    fn yes_and_no_become_one_and_zero() {
        let dataset = encode(&from_reader(CSV.as_bytes()).unwrap())
            .unwrap()
            .to_dataset()
            .unwrap();

        assert_eq!(
            dataset.records(),
            &array![
                [7., 99., 1., 9., 1.],
                [4., 82., 0., 4., 2.],
                [8., 51., 1., 7., 2.]
            ]
        );
        assert_eq!(dataset.targets(), &array![91., 65., 45.]);
        assert_eq!(dataset.feature_names(), feature_names());
    }

    #[test]
    fn encoding_encoded_values_is_a_no_op() {
        let encoded_csv = CSV.replace(",Yes,", ",1,").replace(",No,", ",0,");

        let once = encode(&from_reader(CSV.as_bytes()).unwrap()).unwrap();
        let twice = encode(&from_reader(encoded_csv.as_bytes()).unwrap()).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let csv = CSV.replace("4,82,No", "4,82,Maybe");

        match encode(&from_reader(csv.as_bytes()).unwrap()) {
            Err(Error::UnknownCategory { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Extracurricular Activities");
                assert_eq!(value, "Maybe");
            }
            other => panic!("expected unknown category, got {:?}", other),
        }

        assert_eq!(encode_extracurricular("yes"), None);
        assert_eq!(encode_extracurricular(""), None);
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let csv = CSV.replace("45.0", "NaN");

        assert!(matches!(
            encode(&from_reader(csv.as_bytes()).unwrap()),
            Err(Error::NonFinite {
                row: 3,
                column: "Performance Index"
            })
        ));
    }

    #[test]
    fn empty_input_gives_empty_dataset() {
        let dataset = encode(&[]).unwrap().to_dataset().unwrap();

        assert_eq!(dataset.records().dim(), (0, 5));
        assert_eq!(dataset.targets().len(), 0);
    }

    #[test]
    fn queries_are_encoded_like_rows() {
        let raw = RawStudyFactors {
            hours_studied: 5,
            previous_scores: 70.,
            extracurricular_activities: "No".to_string(),
            sleep_hours: 7,
            sample_question_papers_practiced: 5,
        };

        let factors = encode_factors(&raw, 1).unwrap();
        assert_eq!(factors.to_array(), array![5., 70., 0., 7., 5.]);
    }
}
