/// Errors raised while addressing, building or composing tensors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TensorError {
    #[error("index {index} out of range for axis {axis} with size {size}")]
    OutOfRange { axis: usize, size: usize, index: usize },

    #[error("axis {axis} does not exist in a tensor of rank {rank}")]
    AxisOutOfRange { axis: usize, rank: usize },

    #[error("invalid number of indices: {supplied} supplied, {expected} expected")]
    InvalidArguments { supplied: usize, expected: usize },

    #[error("shape mismatch: {lhs:?} vs {rhs:?}")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("data length {actual} does not match dimensions with {expected} elements")]
    DataLength { expected: usize, actual: usize },

    #[error("axis {0} is selected more than once")]
    DuplicateAxis(usize),

    #[error("axis {0} is left out of the view but has size 0")]
    EmptyAxis(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TensorError::OutOfRange {
            axis: 1,
            size: 3,
            index: 5,
        };
        assert_eq!(err.to_string(), "index 5 out of range for axis 1 with size 3");

        let err = TensorError::InvalidArguments {
            supplied: 1,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid number of indices: 1 supplied, 2 expected"
        );

        let err = TensorError::ShapeMismatch {
            lhs: vec![2, 2],
            rhs: vec![4],
        };
        assert_eq!(err.to_string(), "shape mismatch: [2, 2] vs [4]");
    }
}
