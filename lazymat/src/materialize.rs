//! Materialization of deferred expressions into dense storage
//!
//! Evaluating an expression tree visits every output coordinate exactly
//! once, in row-major order, and writes the result into a freshly
//! allocated [`Matrix`]. There is no partial or incremental evaluation.

use core::ops::{Add, AddAssign, MulAssign, Sub, SubAssign};

use lazymat_core::validation::validate_element_count;
use lazymat_core::{Difference, MatrixExpr, MulOperand, Sum};
use log::debug;
use num_traits::AsPrimitive;

use crate::Matrix;

impl<T> Matrix<T> {
    /// Evaluate an expression with the same element type
    ///
    /// Panics if the expression's element count overflows `usize`.
    #[track_caller]
    pub fn from_expr<E>(expr: E) -> Self
    where
        E: MatrixExpr<Element = T>,
    {
        Self::from_expr_with(expr, |value| value)
    }

    /// Evaluate an expression, converting each element with an `as` cast
    ///
    /// Conversion truncates toward the target type without overflow
    /// checks, e.g. `f64` 2.9 becomes `i32` 2.
    #[track_caller]
    pub fn from_expr_as<E>(expr: E) -> Self
    where
        E: MatrixExpr,
        E::Element: AsPrimitive<T>,
        T: Copy + 'static,
    {
        Self::from_expr_with(expr, |value| value.as_())
    }

    /// Replace this matrix with the evaluated expression
    #[track_caller]
    pub fn assign<E>(&mut self, expr: E)
    where
        E: MatrixExpr<Element = T>,
    {
        *self = Self::from_expr(expr);
    }

    #[track_caller]
    fn from_expr_with<E, F>(expr: E, mut narrow: F) -> Self
    where
        E: MatrixExpr,
        F: FnMut(E::Element) -> T,
    {
        let shape = expr.shape();
        let len = match validate_element_count(shape) {
            Ok(len) => len,
            Err(err) => panic!("{err}"),
        };
        debug!("materializing {shape} expression");

        let mut data = Vec::with_capacity(len);
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                data.push(narrow(expr.value_at(row, col)));
            }
        }

        Self::from_parts(shape, data)
    }
}

/// `self += rhs`: evaluates the sum into fresh storage, then replaces `self`
impl<T, E> AddAssign<E> for Matrix<T>
where
    T: Clone + Add<E::Element, Output = T>,
    E: MatrixExpr,
{
    #[track_caller]
    fn add_assign(&mut self, rhs: E) {
        let sum = Matrix::from_expr(Sum::new(&*self, rhs));
        *self = sum;
    }
}

/// `self -= rhs`, evaluated like [`AddAssign`]
impl<T, E> SubAssign<E> for Matrix<T>
where
    T: Clone + Sub<E::Element, Output = T>,
    E: MatrixExpr,
{
    #[track_caller]
    fn sub_assign(&mut self, rhs: E) {
        let difference = Matrix::from_expr(Difference::new(&*self, rhs));
        *self = difference;
    }
}

/// `self *= rhs` for a matrix or scalar right operand
///
/// The left operand is a copy of `self`, so a dimension mismatch panics
/// before `self` is touched. A matrix product may change the shape.
impl<T, R> MulAssign<R> for Matrix<T>
where
    T: Clone,
    R: MulOperand<Matrix<T>>,
    R::Output: MatrixExpr<Element = T>,
{
    #[track_caller]
    fn mul_assign(&mut self, rhs: R) {
        let product = Matrix::from_expr(rhs.mul_onto(self.clone()));
        *self = product;
    }
}

/// Evaluate any expression into a [`Matrix`]
pub trait Materialize: MatrixExpr {
    /// Evaluate every coordinate into dense storage
    fn materialize(&self) -> Matrix<Self::Element> {
        Matrix::from_expr(self)
    }
}

impl<E: MatrixExpr + ?Sized> Materialize for E {}
