//! `perfindex-cli` predicts a student's performance index from five study factors.
//!
//! The library part holds the prediction [`pipeline`], the [`report`] types it produces and
//! their plain text [`render`]ing. The `perfindex` binary wires them up to the command line:
//!
//! ```bash
//! # predict a single student
//! perfindex predict --hours-studied 5 --previous-scores 70 --extracurricular yes \
//!     --sleep-hours 7 --papers-practiced 5
//!
//! # predict every row of a CSV file
//! perfindex batch --queries queries.csv
//!
//! # how strongly each factor relates to the performance index
//! perfindex correlation --format json
//! ```
mod error;
pub mod pipeline;
pub mod render;
pub mod report;

pub use error::{PipelineError, Result};
pub use pipeline::PipelineConfig;
