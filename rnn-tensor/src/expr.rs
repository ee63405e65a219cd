//! Lazy element-wise expressions over tensors.
//!
//! Arithmetic on tensor references does not compute anything: `&a + &b + &c` builds a nested [`BinaryExpr`]
//! holding borrowed operands, composed at the type level so evaluation is statically dispatched. Values are
//! produced only when the expression is materialized into a [`Tensor`], one element at a time and without
//! intermediate storage.

use super::*;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

/// A value-producing node which can be evaluated element by element.
pub trait Expression<const R: usize> {
    /// The type of the produced elements.
    type Item;

    /// Returns the size of each dimension of the produced tensor.
    fn dim_sizes(&self) -> [usize; R];

    /// Returns the total number of produced elements.
    fn size(&self) -> usize {
        index::element_count(&self.dim_sizes())
    }

    /// Produces the element at the given flat offset, `index < self.size()`.
    fn eval(&self, index: usize) -> Self::Item;

    /// Checks that all operands of the expression agree on their shapes.
    fn check_shape(&self) -> Result<()> {
        Ok(())
    }

    /// Evaluates the expression into a new tensor.
    fn materialize(&self) -> Result<Tensor<Self::Item, R>> {
        Tensor::from_expr(self)
    }
}

impl<E: Expression<R> + ?Sized, const R: usize> Expression<R> for &E {
    type Item = E::Item;

    fn dim_sizes(&self) -> [usize; R] {
        (**self).dim_sizes()
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn eval(&self, index: usize) -> Self::Item {
        (**self).eval(index)
    }

    fn check_shape(&self) -> Result<()> {
        (**self).check_shape()
    }
}

impl<T: Clone, const R: usize> Expression<R> for Tensor<T, R> {
    type Item = T;

    fn dim_sizes(&self) -> [usize; R] {
        self.dims
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn eval(&self, index: usize) -> T {
        self.data[index].clone()
    }
}

/// An element-wise operation combining the values of two expressions.
pub trait BinaryOp<A, B> {
    type Output;

    fn apply(lhs: A, rhs: B) -> Self::Output;
}

macro_rules! impl_binary_op {
    ($($(#[$doc:meta])* $marker:ident => $op_trait:ident :: $method:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $marker;

            impl<A: $op_trait<B>, B> BinaryOp<A, B> for $marker {
                type Output = A::Output;

                #[inline]
                fn apply(lhs: A, rhs: B) -> Self::Output {
                    lhs.$method(rhs)
                }
            }
        )+
    };
}

impl_binary_op!(
    /// Element-wise addition: `lhs + rhs`.
    Sum => Add::add,
    /// Element-wise subtraction: `lhs - rhs`.
    Difference => Sub::sub,
    /// Element-wise (Hadamard) product: `lhs * rhs`.
    Product => Mul::mul,
);

/// An expression combining two operand expressions of the same shape element by element.
///
/// The node stores nothing but its operands, so a chain of operations over borrowed tensors is no larger than
/// the references it holds.
#[derive(Clone, Copy, Debug)]
pub struct BinaryExpr<Lhs, Rhs, Op> {
    lhs: Lhs,
    rhs: Rhs,
    op: PhantomData<Op>,
}

impl<Lhs, Rhs, Op> BinaryExpr<Lhs, Rhs, Op> {
    /// Combines two operands with the operation `Op`; shapes are checked when the expression is materialized.
    pub fn new(lhs: Lhs, rhs: Rhs) -> Self {
        Self {
            lhs,
            rhs,
            op: PhantomData,
        }
    }
}

impl<Lhs, Rhs, Op, const R: usize> Expression<R> for BinaryExpr<Lhs, Rhs, Op>
where
    Lhs: Expression<R>,
    Rhs: Expression<R>,
    Op: BinaryOp<Lhs::Item, Rhs::Item>,
{
    type Item = Op::Output;

    fn dim_sizes(&self) -> [usize; R] {
        self.lhs.dim_sizes()
    }

    fn size(&self) -> usize {
        self.lhs.size()
    }

    #[inline]
    fn eval(&self, index: usize) -> Self::Item {
        Op::apply(self.lhs.eval(index), self.rhs.eval(index))
    }

    fn check_shape(&self) -> Result<()> {
        self.lhs.check_shape()?;
        self.rhs.check_shape()?;

        let (lhs, rhs) = (self.lhs.dim_sizes(), self.rhs.dim_sizes());
        if lhs != rhs {
            return Err(TensorError::ShapeMismatch {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
            });
        }

        Ok(())
    }
}

// Arithmetic operators for every expression type, each one building a new lazy node
macro_rules! impl_expression_ops {
    ($(impl[$($generics:tt)*] $ty:ty;)+) => {
        $(
            impl<$($generics)*, Operand> Add<Operand> for $ty {
                type Output = BinaryExpr<Self, Operand, Sum>;

                fn add(self, rhs: Operand) -> Self::Output {
                    BinaryExpr::new(self, rhs)
                }
            }

            impl<$($generics)*, Operand> Sub<Operand> for $ty {
                type Output = BinaryExpr<Self, Operand, Difference>;

                fn sub(self, rhs: Operand) -> Self::Output {
                    BinaryExpr::new(self, rhs)
                }
            }

            impl<$($generics)*, Operand> Mul<Operand> for $ty {
                type Output = BinaryExpr<Self, Operand, Product>;

                fn mul(self, rhs: Operand) -> Self::Output {
                    BinaryExpr::new(self, rhs)
                }
            }
        )+
    };
}

impl_expression_ops!(
    impl['a, T, const R: usize] &'a Tensor<T, R>;
    impl[Lhs, Rhs, Op] BinaryExpr<Lhs, Rhs, Op>;
    impl['a, T, const R: usize, const S: usize] RemapView<'a, T, R, S>;
);
