use super::*;

impl<T: Default + Clone, const R: usize> Tensor<T, R> {
    /// Creates a tensor with the given dimensions, filled with default values.
    pub fn new(dims: [usize; R]) -> Self {
        Tensor {
            data: vec![T::default(); index::element_count(&dims)],
            dims,
        }
    }

    /// Creates a tensor from a dimension list whose length is only known at runtime.
    /// Returns an error if the list does not have exactly `R` entries.
    pub fn from_shape(dims: &[usize]) -> Result<Self> {
        let dims: [usize; R] = dims.try_into().map_err(|_| TensorError::InvalidArguments {
            supplied: dims.len(),
            expected: R,
        })?;

        Ok(Self::new(dims))
    }
}

impl<T, const R: usize> Tensor<T, R> {
    /// Creates a tensor from its dimensions and the data laid out in storage order.
    /// Returns an error if the data length is not the product of the dimensions.
    pub fn from_parts(dims: [usize; R], data: Vec<T>) -> Result<Self> {
        let expected = index::element_count(&dims);
        if data.len() != expected {
            return Err(TensorError::DataLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Tensor { data, dims })
    }

    /// Materializes an expression into a new tensor with its own storage.
    /// Elements are evaluated once each, in storage order.
    pub fn from_expr<E>(expr: E) -> Result<Self>
    where
        E: Expression<R, Item = T>,
    {
        expr.check_shape()?;

        Self::from_parts(expr.dim_sizes(), ExprIter::new(&expr).collect())
    }
}

impl<T: Default + Clone, const R: usize> Default for Tensor<T, R> {
    /// Creates a tensor where every axis has size 0.
    fn default() -> Self {
        Self::new([0; R])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let tensor = Tensor::<i32, 2>::new([3, 2]);
        assert_eq!(tensor.dim_sizes(), &[3, 2]);
        assert_eq!(tensor.data(), &[0; 6]);
    }

    #[test]
    fn test_default_is_empty() {
        let tensor = Tensor::<f64, 3>::default();
        assert_eq!(tensor.rank(), 3);
        assert_eq!(tensor.size(), 0);
        assert_eq!(tensor.dim_sizes(), &[0, 0, 0]);
    }

    #[test]
    fn test_empty_with_huge_axes() -> Result<()> {
        let tensor = Tensor::<u8, 3>::new([usize::MAX, 2, 0]);
        assert_eq!(tensor.size(), 0);

        let tensor = Tensor::<u8, 3>::from_parts([usize::MAX, 2, 0], vec![])?;
        assert_eq!(tensor.dim_sizes(), &[usize::MAX, 2, 0]);

        Ok(())
    }

    #[test]
    fn test_from_shape() -> Result<()> {
        let tensor = Tensor::<u8, 3>::from_shape(&[2, 2, 5])?;
        assert_eq!(tensor.size(), 20);

        assert_eq!(
            Tensor::<u8, 3>::from_shape(&[2, 2]),
            Err(TensorError::InvalidArguments {
                supplied: 2,
                expected: 3
            })
        );

        Ok(())
    }

    #[test]
    fn test_from_parts() -> Result<()> {
        let tensor = Tensor::from_parts([2, 3], vec![1, 2, 3, 4, 5, 6])?;
        assert_eq!(tensor.size(), 6);
        assert_eq!(tensor.into_parts(), ([2, 3], vec![1, 2, 3, 4, 5, 6]));

        assert_eq!(
            Tensor::from_parts([2, 3], vec![1, 2, 3]),
            Err(TensorError::DataLength {
                expected: 6,
                actual: 3
            })
        );

        Ok(())
    }

    #[test]
    fn test_from_tensor_expression() -> Result<()> {
        let tensor = Tensor::from_parts([2, 2], vec![1.5, 2.5, 3.5, 4.5])?;

        let copy = Tensor::from_expr(&tensor)?;

        assert_eq!(copy, tensor);

        Ok(())
    }
}
