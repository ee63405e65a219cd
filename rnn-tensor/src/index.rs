//! Conversion between multi-dimensional coordinates and flat storage offsets.
//!
//! The first axis varies fastest: the offset of `(i0, i1, ..., iR-1)` is
//! `i0 + i1 * d0 + i2 * d0 * d1 + ...` where `dk` is the size of axis `k`.

use crate::{Result, TensorError};

/// Resolves a coordinate into a flat offset, validating the number of indices and each index against its axis.
pub fn flat_offset(dims: &[usize], indices: &[usize]) -> Result<usize> {
    if indices.len() != dims.len() {
        return Err(TensorError::InvalidArguments {
            supplied: indices.len(),
            expected: dims.len(),
        });
    }

    for (axis, (&index, &size)) in indices.iter().zip(dims).enumerate() {
        if index >= size {
            return Err(TensorError::OutOfRange { axis, size, index });
        }
    }

    // every axis holds at least one element here, so the strides fit the storage length
    let mut offset = 0;
    let mut stride = 1;
    for (&index, &size) in indices.iter().zip(dims) {
        offset += index * stride;
        stride *= size;
    }

    Ok(offset)
}

/// Returns the number of elements addressed by the given dimensions.
///
/// Any axis of size 0 makes the count 0, whatever the sizes of the other axes are.
pub fn element_count(dims: &[usize]) -> usize {
    if dims.contains(&0) {
        0
    } else {
        dims.iter().product()
    }
}

/// Resolves an already validated coordinate into a flat offset.
pub(crate) fn flat_offset_unchecked<const R: usize>(dims: &[usize; R], indices: &[usize; R]) -> usize {
    indices
        .iter()
        .zip(dims)
        .fold((0, 1), |(offset, stride), (&index, &size)| (offset + index * stride, stride * size))
        .0
}

/// Splits a flat offset into the coordinate it addresses in a tensor with the given dimensions.
///
/// The offset must be smaller than the product of `dims`.
pub fn unravel<const R: usize>(dims: &[usize; R], mut offset: usize) -> [usize; R] {
    let mut coords = [0; R];
    for (coord, &size) in coords.iter_mut().zip(dims) {
        *coord = offset % size;
        offset /= size;
    }
    coords
}
