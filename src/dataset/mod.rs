//! Datasets
//!
//! This module implements the dataset struct and various helper traits to extend its
//! functionality.
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, NdFloat};
use num_traits::{FromPrimitive, NumCast};

use std::iter::Sum;

mod impl_dataset;
mod impl_records;
mod impl_targets;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in records of a dataset and,
/// for regression tasks, in the targets as well.
pub trait Float: NdFloat + FromPrimitive + Default + Sum + approx::AbsDiffEq<Epsilon = Self> {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}

/// DatasetBase
///
/// This is the fundamental structure of a dataset. It contains a number of records about the data
/// and the targets which should be predicted from them, plus optional descriptive feature names.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional array with dimensionality (nsamples)
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
///
/// # Trait bounds
///
/// * `R: Records`: generic over owned feature matrices and views
/// * `T`: generic over any `ndarray` vector which can be used as targets. The `AsSingleTargets`
/// trait bound is omitted here to avoid some repetition in `src/dataset/impl_dataset.rs`
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<R, T>
where
    R: Records,
{
    pub records: R,
    pub targets: T,

    feature_names: Vec<String>,
}

/// Dataset
///
/// The most commonly used typed of dataset. It contains a number of records stored as an
/// `Array2` and a single continuous target per record stored as an `Array1`.
pub type Dataset<F> = DatasetBase<Array2<F>, Array1<F>>;

/// DatasetView
///
/// A read only view of a Dataset
pub type DatasetView<'a, F> = DatasetBase<ArrayView2<'a, F>, ArrayView1<'a, F>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}

/// Return a read-only view on a single continuous target variable
pub trait AsSingleTargets {
    type Elem;

    fn as_single_targets(&self) -> ArrayView1<'_, Self::Elem>;
}
