//! Element-wise sum and difference nodes

use core::ops::{Add, Sub};

use log::trace;

use crate::validation::validate_same_shape;
use crate::{MatrixExpr, Result, Shape};

/// Deferred `lhs + rhs`
#[derive(Debug, Clone, Copy)]
pub struct Sum<L, R> {
    lhs: L,
    rhs: R,
    shape: Shape,
}

impl<L: MatrixExpr, R: MatrixExpr> Sum<L, R> {
    /// Bind two operands of identical shape
    pub fn try_new(lhs: L, rhs: R) -> Result<Self> {
        let shape = validate_same_shape(lhs.shape(), rhs.shape())?;
        trace!("sum node {shape}");
        Ok(Self { lhs, rhs, shape })
    }

    /// Bind two operands of identical shape, panicking on mismatch
    #[track_caller]
    pub fn new(lhs: L, rhs: R) -> Self {
        match Self::try_new(lhs, rhs) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<L, R> Sum<L, R> {
    /// Left operand
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// Right operand
    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<L, R> MatrixExpr for Sum<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr,
    L::Element: Add<R::Element>,
{
    type Element = <L::Element as Add<R::Element>>::Output;

    fn nrows(&self) -> usize {
        self.shape.rows
    }

    fn ncols(&self) -> usize {
        self.shape.cols
    }

    fn value_at(&self, row: usize, col: usize) -> Self::Element {
        self.lhs.value_at(row, col) + self.rhs.value_at(row, col)
    }

    fn shape(&self) -> Shape {
        self.shape
    }
}

/// Deferred `lhs - rhs`
#[derive(Debug, Clone, Copy)]
pub struct Difference<L, R> {
    lhs: L,
    rhs: R,
    shape: Shape,
}

impl<L: MatrixExpr, R: MatrixExpr> Difference<L, R> {
    /// Bind two operands of identical shape
    pub fn try_new(lhs: L, rhs: R) -> Result<Self> {
        let shape = validate_same_shape(lhs.shape(), rhs.shape())?;
        trace!("difference node {shape}");
        Ok(Self { lhs, rhs, shape })
    }

    /// Bind two operands of identical shape, panicking on mismatch
    #[track_caller]
    pub fn new(lhs: L, rhs: R) -> Self {
        match Self::try_new(lhs, rhs) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<L, R> Difference<L, R> {
    /// Left operand
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// Right operand
    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<L, R> MatrixExpr for Difference<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr,
    L::Element: Sub<R::Element>,
{
    type Element = <L::Element as Sub<R::Element>>::Output;

    fn nrows(&self) -> usize {
        self.shape.rows
    }

    fn ncols(&self) -> usize {
        self.shape.cols
    }

    fn value_at(&self, row: usize, col: usize) -> Self::Element {
        self.lhs.value_at(row, col) - self.rhs.value_at(row, col)
    }

    fn shape(&self) -> Shape {
        self.shape
    }
}
