//!
//! `perfindex-linear` provides the ordinary least squares regression used to predict a student's
//! performance index.
//!
//! ## The Big Picture
//!
//! `perfindex-linear` is a crate in the `perfindex` workspace. It implements the `Fit` and
//! `PredictInplace` traits of the core crate, so a fitted model can be evaluated with the
//! regression metrics found there.
//!
//! ## Current state
//!
//! `perfindex-linear` currently provides an implementation of ordinary least squares with an
//! optional intercept. Training data which admits no unique solution, for example collinear or
//! constant features, is reported as a `LinearError` instead of producing unstable parameters.
//!
//! ## Examples
//!
//! There is an usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ cargo run --example student_performance
//! ```

mod error;
mod ols;

pub use error::*;
pub use ols::*;
