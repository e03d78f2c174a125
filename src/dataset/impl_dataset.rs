use super::{AsSingleTargets, Dataset, DatasetBase, DatasetView, Float, Records};
use crate::error::{Error, Result};
use ndarray::{ArrayBase, Axis, Data, Ix2};
use rand::{seq::SliceRandom, Rng};

/// Implementation without constraints on records and targets
///
/// This implementation block provides a method for the creation of datasets
/// from records and targets, as well as accessors.
impl<R: Records, T> DatasetBase<R, T> {
    /// Create a new dataset from records and targets
    ///
    /// # Example
    ///
    /// ```ignore
    /// let dataset = Dataset::new(records, targets);
    /// ```
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase {
            records,
            targets,
            feature_names: Vec::new(),
        }
    }

    /// Returns reference to records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Returns reference to targets
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// Returns feature names
    ///
    /// A feature name gives a human-readable string describing the purpose of a single feature.
    /// This allow the reader to understand its purpose while analysing results, for example
    /// correlation analysis or feature importance.
    pub fn feature_names(&self) -> Vec<String> {
        if !self.feature_names.is_empty() {
            self.feature_names.clone()
        } else {
            (0..self.records.nfeatures())
                .map(|idx| format!("feature-{}", idx))
                .collect()
        }
    }

    /// Updates the feature names of a dataset
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> DatasetBase<R, T> {
        let feature_names = names.into_iter().map(|x| x.into()).collect();

        self.feature_names = feature_names;

        self
    }

    /// Number of samples in the dataset
    pub fn nsamples(&self) -> usize {
        self.records.nsamples()
    }

    /// Number of features per sample
    pub fn nfeatures(&self) -> usize {
        self.records.nfeatures()
    }
}

impl<F: Float, D: Data<Elem = F>, T: AsSingleTargets<Elem = F>> DatasetBase<ArrayBase<D, Ix2>, T> {
    /// Creates a view of a dataset
    pub fn view(&self) -> DatasetView<'_, F> {
        DatasetBase::new(self.records.view(), self.targets.as_single_targets())
            .with_feature_names(self.feature_names.clone())
    }

    /// Copies the samples at `indices`, in the given order, into a new dataset
    pub fn select(&self, indices: &[usize]) -> Dataset<F> {
        let records = self.records.select(Axis(0), indices);
        let targets = self.targets.as_single_targets().select(Axis(0), indices);

        DatasetBase::new(records, targets).with_feature_names(self.feature_names.clone())
    }

    /// Split the dataset into a training and a test part
    ///
    /// The samples are permuted with `rng` and the first `ceil(test_ratio * nsamples)` of the
    /// permutation form the test set, the remaining ones the training set. Seeding `rng` with a
    /// fixed value makes the split reproducible.
    ///
    /// Returns `(train, test)`.
    pub fn train_test_split<Rg: Rng>(
        &self,
        test_ratio: f64,
        rng: &mut Rg,
    ) -> Result<(Dataset<F>, Dataset<F>)> {
        if !(test_ratio > 0.0 && test_ratio < 1.0) {
            return Err(Error::Parameters(format!(
                "test ratio should lie in (0, 1), got {}",
                test_ratio
            )));
        }

        let nsamples = self.nsamples();
        let ntest = ((nsamples as f64) * test_ratio).ceil() as usize;

        let mut indices = (0..nsamples).collect::<Vec<_>>();
        indices.shuffle(rng);
        let (test, train) = indices.split_at(ntest.min(nsamples));

        Ok((self.select(train), self.select(test)))
    }
}
