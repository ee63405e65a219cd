use super::*;
use std::fmt;

impl<T: PartialEq, const R: usize> PartialEq for Tensor<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims && self.data == other.data
    }
}

impl<T: Eq, const R: usize> Eq for Tensor<T, R> {}

impl<T: fmt::Debug, const R: usize> fmt::Debug for Tensor<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("dims", &self.dims)
            .field("data", &self.data)
            .finish()
    }
}
