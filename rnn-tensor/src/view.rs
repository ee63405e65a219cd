use super::*;

/// A read-only view of a tensor with its axes selected and reordered.
///
/// Axis `j` of the view is axis `axes[j]` of the underlying tensor. Nothing is copied: elements are read from
/// the tensor's storage on evaluation, so the view is usually materialized into a new tensor:
///
/// ```rust
/// use rnn_tensor::{Expression, Tensor};
///
/// let tensor = Tensor::<i32, 2>::from_parts([3, 2], (0..6).collect())?;
/// let transposed = tensor.remap([1, 0])?.materialize()?;
///
/// assert_eq!(transposed.dim_sizes(), &[2, 3]);
/// assert_eq!(transposed.get(&[1, 2])?, tensor.get(&[2, 1])?);
/// # Ok::<(), rnn_tensor::TensorError>(())
/// ```
#[derive(Debug)]
pub struct RemapView<'a, T, const R: usize, const S: usize> {
    tensor: &'a Tensor<T, R>,
    axes: [usize; S],
    dims: [usize; S],
}

impl<T, const R: usize, const S: usize> Clone for RemapView<'_, T, R, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const R: usize, const S: usize> Copy for RemapView<'_, T, R, S> {}

impl<T, const R: usize> Tensor<T, R> {
    /// Creates a view whose axes are the given axes of this tensor, in the given order.
    ///
    /// A permutation of all axes reorders the tensor, e.g. `remap([1, 0])` transposes a matrix. When fewer than
    /// `R` axes are selected, the view covers the block where every unselected axis has index 0, so each of
    /// those axes must have at least one element.
    pub fn remap<const S: usize>(&self, axes: [usize; S]) -> Result<RemapView<'_, T, R, S>> {
        let mut seen = [false; R];
        for &axis in &axes {
            if axis >= R {
                return Err(TensorError::AxisOutOfRange { axis, rank: R });
            }
            if seen[axis] {
                return Err(TensorError::DuplicateAxis(axis));
            }
            seen[axis] = true;
        }

        if let Some(axis) = (0..R).find(|&axis| !seen[axis] && self.dims[axis] == 0) {
            return Err(TensorError::EmptyAxis(axis));
        }

        Ok(RemapView {
            tensor: self,
            dims: axes.map(|axis| self.dims[axis]),
            axes,
        })
    }

    /// Creates a view with two axes swapped.
    pub fn transpose(&self, axis0: usize, axis1: usize) -> Result<RemapView<'_, T, R, R>> {
        for axis in [axis0, axis1] {
            if axis >= R {
                return Err(TensorError::AxisOutOfRange { axis, rank: R });
            }
        }

        let mut axes: [usize; R] = std::array::from_fn(|axis| axis);
        axes.swap(axis0, axis1);

        self.remap(axes)
    }
}

impl<'a, T, const R: usize, const S: usize> RemapView<'a, T, R, S> {
    /// Returns the remapped axes of the underlying tensor.
    pub fn axes(&self) -> &[usize; S] {
        &self.axes
    }

    /// Returns the tensor this view reads from.
    pub fn tensor(&self) -> &'a Tensor<T, R> {
        self.tensor
    }

    // Maps an offset in the view's shape to the offset of the same element in the tensor's storage
    fn source_offset(&self, index: usize) -> usize {
        let coords = index::unravel(&self.dims, index);

        let mut source = [0; R];
        for (&axis, &coord) in self.axes.iter().zip(&coords) {
            source[axis] = coord;
        }

        index::flat_offset_unchecked(&self.tensor.dims, &source)
    }
}

impl<T: Clone, const R: usize, const S: usize> Expression<S> for RemapView<'_, T, R, S> {
    type Item = T;

    fn dim_sizes(&self) -> [usize; S] {
        self.dims
    }

    fn eval(&self, index: usize) -> T {
        self.tensor.data[self.source_offset(index)].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_3x2() -> Result<Tensor<i32, 2>> {
        Tensor::from_parts([3, 2], (0..6).collect())
    }

    #[test]
    fn test_transpose_view() -> Result<()> {
        let tensor = create_3x2()?;

        let transposed = Tensor::from_expr(tensor.remap([1, 0])?)?;

        assert_eq!(transposed.dim_sizes(), &[2, 3]);
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(transposed.get(&[r, c])?, tensor.get(&[c, r])?);
            }
        }
        assert_eq!(transposed.data(), &[0, 3, 1, 4, 2, 5]);

        Ok(())
    }

    #[test]
    fn test_identity_remap() -> Result<()> {
        let tensor = create_3x2()?;

        assert_eq!(tensor.remap([0, 1])?.materialize()?, tensor);

        Ok(())
    }

    #[test]
    fn test_rank_three_permutation() -> Result<()> {
        let tensor = Tensor::<i32, 3>::from_parts([2, 3, 4], (0..24).collect())?;

        let view = tensor.remap([2, 0, 1])?;
        assert_eq!(view.dim_sizes(), [4, 2, 3]);
        assert_eq!(view.axes(), &[2, 0, 1]);

        let permuted = view.materialize()?;
        for i in 0..4 {
            for j in 0..2 {
                for k in 0..3 {
                    assert_eq!(permuted.get(&[i, j, k])?, tensor.get(&[j, k, i])?);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn test_selection_pins_dropped_axes() -> Result<()> {
        let tensor = Tensor::<i32, 3>::from_parts([2, 3, 4], (0..24).collect())?;

        let slice = tensor.remap([2, 1])?.materialize()?;

        assert_eq!(slice.dim_sizes(), &[4, 3]);
        assert_eq!(*slice.get(&[3, 2])?, *tensor.get(&[0, 2, 3])?);
        assert_eq!(*slice.get(&[1, 1])?, 8);

        Ok(())
    }

    #[test]
    fn test_selection_of_empty_tensor() -> Result<()> {
        let columns = Tensor::<i32, 2>::new([0, 3]);
        assert!(matches!(columns.remap([1]), Err(TensorError::EmptyAxis(0))));
        // the empty axis itself may be selected
        assert_eq!(columns.remap([0])?.materialize()?.size(), 0);
        assert_eq!(columns.remap([1, 0])?.materialize()?.dim_sizes(), &[3, 0]);

        let rows = Tensor::<i32, 2>::new([2, 0]);
        assert!(matches!(rows.remap::<0>([]), Err(TensorError::EmptyAxis(1))));

        Ok(())
    }

    #[test]
    fn test_swap_axes() -> Result<()> {
        let tensor = Tensor::<i32, 3>::from_parts([2, 3, 4], (0..24).collect())?;

        let swapped = tensor.transpose(0, 2)?;
        assert_eq!(swapped.axes(), &[2, 1, 0]);
        assert_eq!(swapped.dim_sizes(), [4, 3, 2]);
        assert_eq!(swapped.eval(1), *tensor.get(&[0, 0, 1])?);

        Ok(())
    }

    #[test]
    fn test_view_in_expression() -> Result<()> {
        let square = Tensor::<i32, 2>::from_parts([2, 2], vec![1, 2, 3, 4])?;

        let symmetric = (square.remap([1, 0])? + &square).materialize()?;

        assert_eq!(symmetric.data(), &[2, 5, 5, 8]);

        Ok(())
    }

    #[test]
    fn test_invalid_axes() -> Result<()> {
        let tensor = create_3x2()?;

        assert!(matches!(
            tensor.remap([0, 2]),
            Err(TensorError::AxisOutOfRange { axis: 2, rank: 2 })
        ));
        assert!(matches!(
            tensor.remap([1, 1]),
            Err(TensorError::DuplicateAxis(1))
        ));
        assert!(matches!(
            tensor.transpose(0, 5),
            Err(TensorError::AxisOutOfRange { axis: 5, rank: 2 })
        ));

        Ok(())
    }
}
