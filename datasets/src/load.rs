//! Reading student records and queries from CSV files
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::schema::{RawStudentRecord, RawStudyFactors};

/// Load all student records of a dataset file
///
/// Files ending in `.gz` are decompressed on the fly. Every row must carry the five predictor
/// columns and the performance index, additional columns are ignored.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<RawStudentRecord>> {
    let path = path.as_ref();
    let records = from_reader(open(path)?)?;

    tracing::debug!(path = %path.display(), rows = records.len(), "loaded student records");

    Ok(records)
}

/// Read student records from any CSV source
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawStudentRecord>> {
    read_csv(reader, &RawStudentRecord::COLUMNS)
}

/// Load the study factors of a query file, one query per row
pub fn load_queries<P: AsRef<Path>>(path: P) -> Result<Vec<RawStudyFactors>> {
    let path = path.as_ref();
    let queries = queries_from_reader(open(path)?)?;

    tracing::debug!(path = %path.display(), rows = queries.len(), "loaded queries");

    Ok(queries)
}

/// Read query rows from any CSV source
pub fn queries_from_reader<R: Read>(reader: R) -> Result<Vec<RawStudyFactors>> {
    read_csv(reader, &RawStudyFactors::COLUMNS)
}

fn open(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = BufReader::new(file);

    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

fn read_csv<R: Read, T: DeserializeOwned>(
    reader: R,
    required_columns: &[&'static str],
) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(missing) = required_columns
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(Error::MissingColumn(*missing));
    }

    reader
        .deserialize()
        .map(|row| row.map_err(Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    const CSV: &str = "Hours Studied,Previous Scores,Extracurricular Activities,Sleep Hours,Sample Question Papers Practiced,Performance Index
7,99,Yes,9,1,91.0
4,82,No,4,2,65.0
";

    #[test]
    fn reads_typed_rows() {
        let records = from_reader(CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hours_studied, 7);
        assert_eq!(records[0].extracurricular_activities, "Yes");
        assert_eq!(records[1].previous_scores, 82.);
        assert_eq!(records[1].performance_index, 65.);
    }

    #[test]
    fn column_order_and_whitespace_do_not_matter() {
        let csv = "Performance Index, Sleep Hours,Hours Studied,Previous Scores,Extracurricular Activities,Sample Question Papers Practiced,Student
 50.0 , 6, 3, 70, No, 4, anna
";
        let records = from_reader(csv.as_bytes()).unwrap();

        assert_eq!(records[0].sleep_hours, 6);
        assert_eq!(records[0].hours_studied, 3);
        assert_eq!(records[0].extracurricular_activities, "No");
        assert_eq!(records[0].performance_index, 50.);
    }

    #[test]
    fn header_only_file_is_empty() {
        let header = CSV.lines().next().unwrap();
        let records = from_reader(header.as_bytes()).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn missing_column_is_named() {
        let csv = "Hours Studied,Previous Scores,Extracurricular Activities,Sleep Hours,Performance Index
7,99,Yes,9,91.0
";
        match from_reader(csv.as_bytes()) {
            Err(Error::MissingColumn(column)) => {
                assert_eq!(column, "Sample Question Papers Practiced")
            }
            other => panic!("expected missing column, got {:?}", other),
        }

        assert!(matches!(
            from_reader("".as_bytes()),
            Err(Error::MissingColumn("Hours Studied"))
        ));
    }

    #[test]
    fn malformed_number_is_rejected() {
        let csv = CSV.replace("7,99,Yes", "seven,99,Yes");

        assert!(matches!(from_reader(csv.as_bytes()), Err(Error::Csv(_))));
    }

    #[test]
    fn queries_do_not_need_a_target() {
        let csv = "Hours Studied,Previous Scores,Extracurricular Activities,Sleep Hours,Sample Question Papers Practiced
5,70,Yes,7,5
";
        let queries = queries_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].sample_question_papers_practiced, 5);
    }

    #[test]
    fn loads_plain_and_compressed_files() {
        let dir = std::env::temp_dir().join(format!("perfindex-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let plain = dir.join("students.csv");
        std::fs::write(&plain, CSV).unwrap();

        let compressed = dir.join("students.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&compressed).unwrap(), Compression::default());
        encoder.write_all(CSV.as_bytes()).unwrap();
        encoder.finish().unwrap();

        assert_eq!(load(&plain).unwrap(), load(&compressed).unwrap());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_reports_path() {
        match load("does/not/exist.csv") {
            Err(Error::Io { path, .. }) => assert_eq!(path, Path::new("does/not/exist.csv")),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
