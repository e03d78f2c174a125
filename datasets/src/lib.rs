//! `perfindex-datasets` loads student performance surveys and turns them into numeric datasets.
//!
//! ## The Big Picture
//!
//! Survey files are CSV tables with one student per row. Besides the performance index they
//! record five study factors, one of which is the categorical `Yes`/`No` column for
//! extracurricular activities. This crate takes such a file through three steps:
//!
//! * [`load`] reads the rows into typed [`RawStudentRecord`]s and checks that every required
//!   column is present
//! * [`encode`] maps the categorical column onto `1`/`0` and rejects values it does not know
//! * [`StudentDataset::to_dataset`] produces a [`perfindex::Dataset`] with named features
//!
//! [`load_dataset`] does all three in one call.
//!
//! ## Using the bundled sample
//!
//! A sample of 200 students is bundled behind the `student-performance` feature:
//! ```ignore
//! perfindex-datasets = { version = "0.1.0", features = ["student-performance"] }
//! ```
//! and then use it in your examples or tests as
//! ```ignore
//! let dataset = perfindex_datasets::student_performance();
//! ```
mod encode;
mod error;
pub mod generate;
mod load;
pub mod schema;

pub use encode::{encode, encode_extracurricular, encode_factors, load_dataset, StudentDataset};
pub use error::{Error, Result};
pub use load::{from_reader, load, load_queries, queries_from_reader};
pub use schema::{
    Feature, RawStudentRecord, RawStudyFactors, StudentRecord, StudyFactors, TARGET_COLUMN,
};

#[cfg(feature = "student-performance")]
/// Read in the bundled student performance sample
pub fn student_performance() -> perfindex::Dataset<f64> {
    let data = include_bytes!("../data/student_performance.csv.gz");
    let raw = from_reader(flate2::read::GzDecoder::new(&data[..])).unwrap();

    encode(&raw).unwrap().to_dataset().unwrap()
}
