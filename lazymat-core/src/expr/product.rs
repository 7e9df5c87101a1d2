//! Product nodes
//!
//! Three mutually exclusive forms, chosen by operand kind when the
//! expression is built:
//!
//! | Node | Operands | Shape |
//! |---|---|---|
//! | [`MatrixProduct`] | matrix * matrix | `(lhs.rows, rhs.cols)` |
//! | [`ScaledLeft`] | scalar * matrix | shape of the matrix |
//! | [`ScaledRight`] | matrix * scalar | shape of the matrix |

use core::ops::{Add, Mul};

use log::trace;
use num_traits::Zero;

use crate::validation::{validate_coordinate, validate_shared_dim};
use crate::{MatrixExpr, Result, Scalar, Shape};

/// Deferred matrix product using the naive dot product per element
///
/// `O` is the element type of the result. The accumulator of every dot
/// product starts from `identity`, the additive identity of `O`.
/// Materializing the full product costs `rows * cols * shared_dim`
/// multiplications.
#[derive(Debug, Clone, Copy)]
pub struct MatrixProduct<L, R, O> {
    lhs: L,
    rhs: R,
    shape: Shape,
    shared_dim: usize,
    identity: O,
}

impl<L: MatrixExpr, R: MatrixExpr, O> MatrixProduct<L, R, O> {
    /// Bind two operands with an explicit additive identity
    ///
    /// For element types that have no [`Zero`] implementation.
    pub fn try_with_identity(lhs: L, rhs: R, identity: O) -> Result<Self> {
        let shape = validate_shared_dim(lhs.shape(), rhs.shape())?;
        let shared_dim = lhs.ncols();
        trace!("matrix product node {shape} over shared dimension {shared_dim}");
        Ok(Self {
            lhs,
            rhs,
            shape,
            shared_dim,
            identity,
        })
    }
}

impl<L: MatrixExpr, R: MatrixExpr, O: Zero> MatrixProduct<L, R, O> {
    /// Bind two operands whose shared dimension agrees
    pub fn try_new(lhs: L, rhs: R) -> Result<Self> {
        Self::try_with_identity(lhs, rhs, O::zero())
    }

    /// Bind two operands, panicking when the shared dimension disagrees
    #[track_caller]
    pub fn new(lhs: L, rhs: R) -> Self {
        match Self::try_new(lhs, rhs) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<L, R, O> MatrixProduct<L, R, O> {
    /// Left operand
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// Right operand
    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    /// Left column count, equal to the right row count
    pub fn shared_dim(&self) -> usize {
        self.shared_dim
    }
}

impl<L, R, O> MatrixExpr for MatrixProduct<L, R, O>
where
    L: MatrixExpr,
    R: MatrixExpr,
    L::Element: Mul<R::Element, Output = O>,
    O: Clone + Add<Output = O>,
{
    type Element = O;

    fn nrows(&self) -> usize {
        self.shape.rows
    }

    fn ncols(&self) -> usize {
        self.shape.cols
    }

    fn value_at(&self, row: usize, col: usize) -> O {
        // With an empty shared dimension no operand is consulted, so the
        // coordinate has to be checked here.
        if let Err(err) = validate_coordinate(self.shape, row, col) {
            panic!("{err}");
        }
        (0..self.shared_dim).fold(self.identity.clone(), |acc, k| {
            acc + self.lhs.value_at(row, k) * self.rhs.value_at(k, col)
        })
    }

    fn shape(&self) -> Shape {
        self.shape
    }
}

/// Deferred `scalar * expr`
#[derive(Debug, Clone, Copy)]
pub struct ScaledLeft<S, E> {
    scalar: S,
    expr: E,
}

impl<S: Scalar, E: MatrixExpr> ScaledLeft<S, E> {
    /// Bind a scalar on the left of an expression
    pub fn new(scalar: S, expr: E) -> Self {
        trace!("scalar-left product node {}", expr.shape());
        Self { scalar, expr }
    }
}

impl<S: Copy, E> ScaledLeft<S, E> {
    /// The scalar factor
    pub fn scalar(&self) -> S {
        self.scalar
    }

    /// The scaled expression
    pub fn expr(&self) -> &E {
        &self.expr
    }
}

impl<S, E> MatrixExpr for ScaledLeft<S, E>
where
    S: Scalar + Mul<E::Element>,
    E: MatrixExpr,
{
    type Element = S::Output;

    fn nrows(&self) -> usize {
        self.expr.nrows()
    }

    fn ncols(&self) -> usize {
        self.expr.ncols()
    }

    fn value_at(&self, row: usize, col: usize) -> Self::Element {
        self.scalar * self.expr.value_at(row, col)
    }
}

/// Deferred `expr * scalar`
#[derive(Debug, Clone, Copy)]
pub struct ScaledRight<E, S> {
    expr: E,
    scalar: S,
}

impl<E: MatrixExpr, S: Scalar> ScaledRight<E, S> {
    /// Bind a scalar on the right of an expression
    pub fn new(expr: E, scalar: S) -> Self {
        trace!("scalar-right product node {}", expr.shape());
        Self { expr, scalar }
    }
}

impl<E, S: Copy> ScaledRight<E, S> {
    /// The scaled expression
    pub fn expr(&self) -> &E {
        &self.expr
    }

    /// The scalar factor
    pub fn scalar(&self) -> S {
        self.scalar
    }
}

impl<E, S> MatrixExpr for ScaledRight<E, S>
where
    E: MatrixExpr,
    E::Element: Mul<S>,
    S: Scalar,
{
    type Element = <E::Element as Mul<S>>::Output;

    fn nrows(&self) -> usize {
        self.expr.nrows()
    }

    fn ncols(&self) -> usize {
        self.expr.ncols()
    }

    fn value_at(&self, row: usize, col: usize) -> Self::Element {
        self.expr.value_at(row, col) * self.scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Counting, Grid};
    use crate::LazyMatError;

    const A: Grid<2, 2> = Grid([[1, 2], [3, 4]]);
    const B: Grid<2, 2> = Grid([[5, 6], [7, 8]]);

    #[test]
    fn test_matrix_product_values() {
        let product: MatrixProduct<_, _, i32> = MatrixProduct::new(&A, &B);
        assert_eq!(product.shape(), Shape::new(2, 2));
        assert_eq!(product.value_at(0, 0), 19);
        assert_eq!(product.value_at(0, 1), 22);
        assert_eq!(product.value_at(1, 0), 43);
        assert_eq!(product.value_at(1, 1), 50);
    }

    #[test]
    fn test_matrix_product_shape() {
        let lhs = Grid([[1, 2, 3], [4, 5, 6]]);
        let rhs = Grid([[1, 0, 0, 1], [0, 1, 0, 1], [0, 0, 1, 1]]);
        let product: MatrixProduct<_, _, i32> = MatrixProduct::new(&lhs, &rhs);

        assert_eq!(product.shape(), Shape::new(2, 4));
        assert_eq!(product.shared_dim(), 3);
        assert_eq!(product.value_at(1, 3), 15);
    }

    #[test]
    fn test_dimension_mismatch_is_detected_before_evaluation() {
        let lhs = Counting::new(Grid([[1, 2, 3], [4, 5, 6]]));
        let rhs = Counting::new(Grid([[1, 2], [3, 4], [5, 6], [7, 8]]));

        let result: Result<MatrixProduct<_, _, i32>> = MatrixProduct::try_new(&lhs, &rhs);
        assert_eq!(
            result.err(),
            Some(LazyMatError::DimensionMismatch {
                lhs: Shape::new(2, 3),
                rhs: Shape::new(4, 2),
            })
        );
        assert_eq!(lhs.lookups(), 0);
        assert_eq!(rhs.lookups(), 0);
    }

    #[test]
    fn test_explicit_identity_seeds_accumulator() {
        let product = MatrixProduct::try_with_identity(&A, &B, 100).unwrap();
        assert_eq!(product.value_at(0, 0), 119);
    }

    #[test]
    fn test_empty_shared_dimension_yields_identity() {
        let lhs = Grid::<2, 0>([[], []]);
        let rhs = Grid::<0, 3>([]);
        let product: MatrixProduct<_, _, i32> = MatrixProduct::new(&lhs, &rhs);

        assert_eq!(product.shape(), Shape::new(2, 3));
        assert_eq!(product.value_at(1, 2), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_product_lookup_out_of_range() {
        let lhs = Grid::<2, 0>([[], []]);
        let rhs = Grid::<0, 3>([]);
        let product: MatrixProduct<_, _, i32> = MatrixProduct::new(&lhs, &rhs);
        product.value_at(2, 0);
    }

    #[test]
    fn test_scalar_products_keep_shape() {
        let lhs = Grid([[1, 2, 3], [4, 5, 6]]);
        let left = ScaledLeft::new(10, &lhs);
        let right = ScaledRight::new(&lhs, 10);

        assert_eq!(left.shape(), Shape::new(2, 3));
        assert_eq!(right.shape(), Shape::new(2, 3));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(left.value_at(row, col), right.value_at(row, col));
                assert_eq!(right.value_at(row, col), 10 * lhs.value_at(row, col));
            }
        }
    }

    #[test]
    fn test_one_by_one_matrix_is_not_a_scalar() {
        // 1x1 on the left of a 2x2 is a dimension mismatch, not a scaling
        let one = Grid([[3]]);
        let result: Result<MatrixProduct<_, _, i32>> = MatrixProduct::try_new(&one, &A);
        assert!(matches!(result, Err(LazyMatError::DimensionMismatch { .. })));
    }
}
