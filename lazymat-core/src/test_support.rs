//! Fixed-size conformers for unit tests

use core::cell::Cell;

use crate::MatrixExpr;

/// Stack-allocated matrix of `i32`
#[derive(Debug, Clone, Copy)]
pub struct Grid<const R: usize, const C: usize>(pub [[i32; C]; R]);

impl<const R: usize, const C: usize> MatrixExpr for Grid<R, C> {
    type Element = i32;

    fn nrows(&self) -> usize {
        R
    }

    fn ncols(&self) -> usize {
        C
    }

    fn value_at(&self, row: usize, col: usize) -> i32 {
        self.0[row][col]
    }
}

/// Wraps a conformer and counts how often it is queried
pub struct Counting<E> {
    inner: E,
    lookups: Cell<usize>,
}

impl<E> Counting<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            lookups: Cell::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl<E: MatrixExpr> MatrixExpr for Counting<E> {
    type Element = E::Element;

    fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    fn value_at(&self, row: usize, col: usize) -> E::Element {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.value_at(row, col)
    }
}
