use super::AsSingleTargets;
use ndarray::{ArrayBase, ArrayView1, Data, Ix1};

/// A NdArray vector can act as single continuous targets
impl<F, S: Data<Elem = F>> AsSingleTargets for ArrayBase<S, Ix1> {
    type Elem = F;

    fn as_single_targets(&self) -> ArrayView1<'_, F> {
        self.view()
    }
}

/// Implement targets for references
impl<T: AsSingleTargets> AsSingleTargets for &T {
    type Elem = T::Elem;

    fn as_single_targets(&self) -> ArrayView1<'_, Self::Elem> {
        (*self).as_single_targets()
    }
}
