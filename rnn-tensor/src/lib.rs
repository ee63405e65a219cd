//! Library crate for rnn_tensor
//!

mod constructive;
pub mod diagnostic;
mod error;
mod expr;
pub mod index;
mod iterator;
mod misc;
mod view;

pub use crate::error::TensorError;
pub use crate::expr::{BinaryExpr, BinaryOp, Difference, Expression, Product, Sum};
pub use crate::iterator::ExprIter;
pub use crate::view::RemapView;

pub type Result<T> = std::result::Result<T, error::TensorError>;

/// Represents a multi-dimensional tensor with element type T and a rank R fixed at compile time.
/// Supports multi-index access, lazy element-wise arithmetic and axis remapping views.
///
/// The tensor owns a single contiguous block of memory together with the size of each dimension. The first
/// dimension is laid out contiguously in memory, so a `[3, 2]` tensor has 3 columns and 2 rows:
///
/// ```rust
/// use rnn_tensor::Tensor;
///
/// let tensor = Tensor::<i32, 2>::from_parts([3, 2], (0..6).collect())?;
/// assert_eq!(*tensor.get(&[2, 0])?, 2);
/// assert_eq!(*tensor.get(&[0, 1])?, 3);
/// # Ok::<(), rnn_tensor::TensorError>(())
/// ```
///
/// Arithmetic on tensor references builds an expression which allocates nothing until it is materialized:
///
/// ```rust
/// use rnn_tensor::{Expression, Tensor};
///
/// let a = Tensor::<i32, 2>::from_parts([2, 2], vec![1, 2, 3, 4])?;
/// let b = Tensor::<i32, 2>::from_parts([2, 2], vec![5, 6, 7, 8])?;
///
/// let c = (&a + &b + &a).materialize()?;
/// assert_eq!(c.data(), &[7, 10, 13, 16]);
/// # Ok::<(), rnn_tensor::TensorError>(())
/// ```
///
/// # Invariants
/// `dims.iter().product() == data.len()` holds for every constructed tensor. Addressing keeps no state on the
/// tensor itself, so a shared reference can be read from anywhere.
#[derive(Clone)]
pub struct Tensor<T, const R: usize> {
    data: Vec<T>,
    dims: [usize; R],
}

impl<T, const R: usize> Tensor<T, R> {
    /// Returns the total number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the size of the given axis, or 0 if the axis does not exist.
    /// An invalid axis is reported through [`diagnostic`], the tensor is never modified.
    pub fn axis_size(&self, axis: usize) -> usize {
        self.try_axis_size(axis).unwrap_or_else(|err| {
            diagnostic::report(&err);
            0
        })
    }

    /// Returns the size of the given axis.
    pub fn try_axis_size(&self, axis: usize) -> Result<usize> {
        self.dims
            .get(axis)
            .copied()
            .ok_or(TensorError::AxisOutOfRange { axis, rank: R })
    }

    /// Returns the number of dimensions.
    pub const fn rank(&self) -> usize {
        R
    }

    /// Returns the size of each dimension.
    pub fn dim_sizes(&self) -> &[usize; R] {
        &self.dims
    }

    /// Returns the elements in storage order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements in storage order, mutably.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the tensor, returning its dimensions and storage.
    pub fn into_parts(self) -> ([usize; R], Vec<T>) {
        (self.dims, self.data)
    }

    /// Gets a reference to the element at the given coordinate.
    ///
    /// Exactly `R` indices are expected, each one smaller than its axis size.
    pub fn get(&self, indices: &[usize]) -> Result<&T> {
        let offset = index::flat_offset(&self.dims, indices)?;
        Ok(&self.data[offset])
    }

    /// Gets a mutable reference to the element at the given coordinate.
    pub fn get_mut(&mut self, indices: &[usize]) -> Result<&mut T> {
        let offset = index::flat_offset(&self.dims, indices)?;
        Ok(&mut self.data[offset])
    }

    /// Writes the element at the given coordinate.
    pub fn set(&mut self, indices: &[usize], value: T) -> Result<()> {
        *self.get_mut(indices)? = value;
        Ok(())
    }

    /// Gets the element at the given coordinate, falling back to the first element when the coordinate is
    /// invalid. The failure is reported through [`diagnostic`] instead of being returned.
    ///
    /// # Panics
    /// Panics if the coordinate is invalid and the tensor holds no elements at all.
    pub fn at(&self, indices: &[usize]) -> &T {
        let offset = index::flat_offset(&self.dims, indices).unwrap_or_else(|err| {
            diagnostic::report(&err);
            0
        });
        &self.data[offset]
    }

    /// Gets the element at the given coordinate, falling back to `fallback` when the coordinate is invalid.
    /// Unlike [`Tensor::at`] this never panics, empty tensors included.
    pub fn at_or<'a>(&'a self, indices: &[usize], fallback: &'a T) -> &'a T {
        match index::flat_offset(&self.dims, indices) {
            Ok(offset) => &self.data[offset],
            Err(err) => {
                diagnostic::report(&err);
                fallback
            }
        }
    }

    /// Mutable counterpart of [`Tensor::at`].
    ///
    /// # Panics
    /// Panics if the coordinate is invalid and the tensor holds no elements at all.
    pub fn at_mut(&mut self, indices: &[usize]) -> &mut T {
        let offset = index::flat_offset(&self.dims, indices).unwrap_or_else(|err| {
            diagnostic::report(&err);
            0
        });
        &mut self.data[offset]
    }
}

impl<T, const R: usize> std::ops::Index<usize> for Tensor<T, R> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const R: usize> std::ops::IndexMut<usize> for Tensor<T, R> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}
