use super::*;

/// An iterator over the values of an expression in storage order.
pub struct ExprIter<'a, E, const R: usize> {
    expr: &'a E,
    current_index: usize,
    len: usize,
}

impl<'a, E: Expression<R>, const R: usize> ExprIter<'a, E, R> {
    /// Creates an iterator evaluating every element of the expression once.
    pub fn new(expr: &'a E) -> Self {
        ExprIter {
            expr,
            current_index: 0,
            len: expr.size(),
        }
    }
}

impl<E: Expression<R>, const R: usize> Iterator for ExprIter<'_, E, R> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.len {
            return None;
        }
        let item = self.expr.eval(self.current_index);
        self.current_index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.current_index;
        (remaining, Some(remaining))
    }
}

impl<E: Expression<R>, const R: usize> ExactSizeIterator for ExprIter<'_, E, R> {}

impl<T, const R: usize> Tensor<T, R> {
    /// Returns an iterator over the elements of the tensor in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator over the coordinates and elements of the tensor in storage order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ([usize; R], &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(offset, item)| (index::unravel(&self.dims, offset), item))
    }
}

impl<'a, T, const R: usize> IntoIterator for &'a Tensor<T, R> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
