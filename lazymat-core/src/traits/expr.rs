//! The shape-and-lookup contract
//!
//! Every matrix-like value in lazymat, whether it owns memory or describes a
//! deferred computation, implements [`MatrixExpr`].

#[cfg(feature = "alloc")]
use alloc::string::{String, ToString};

use crate::render::{RenderConfig, Rendered};
use crate::validation::validate_coordinate;
use crate::{Result, Shape};

/// Something with a shape that can produce the value at a coordinate
///
/// Implementations must be referentially transparent: calling
/// [`value_at`](MatrixExpr::value_at) any number of times with the same
/// coordinate yields the same value. Deferred nodes rely on this to evaluate
/// their operands on demand.
pub trait MatrixExpr {
    /// The element type produced by lookups
    type Element;

    /// Number of rows
    fn nrows(&self) -> usize;

    /// Number of columns
    fn ncols(&self) -> usize;

    /// Value at `(row, col)`
    ///
    /// Requires `row < nrows()` and `col < ncols()`. Out-of-range
    /// coordinates are a contract violation and panic at the storage
    /// that is eventually reached; use [`try_value_at`](MatrixExpr::try_value_at)
    /// for a checked lookup.
    fn value_at(&self, row: usize, col: usize) -> Self::Element;

    /// Dimensions as a [`Shape`]
    fn shape(&self) -> Shape {
        Shape::new(self.nrows(), self.ncols())
    }

    /// Checked lookup
    ///
    /// Validates the coordinate against [`shape`](MatrixExpr::shape) before
    /// evaluating anything.
    fn try_value_at(&self, row: usize, col: usize) -> Result<Self::Element> {
        validate_coordinate(self.shape(), row, col)?;
        Ok(self.value_at(row, col))
    }

    /// Display adapter with the default layout
    ///
    /// Row-major, each value followed by a space, one line per row. Zero
    /// rows render as nothing.
    fn render(&self) -> Rendered<'_, Self> {
        Rendered::new(self, RenderConfig::default())
    }

    /// Display adapter with a custom layout
    fn render_with(&self, config: RenderConfig) -> Rendered<'_, Self> {
        Rendered::new(self, config)
    }

    /// Render into an owned string with the default layout
    #[cfg(feature = "alloc")]
    fn to_text(&self) -> String
    where
        Self::Element: core::fmt::Display,
    {
        self.render().to_string()
    }
}

impl<E: MatrixExpr + ?Sized> MatrixExpr for &E {
    type Element = E::Element;

    #[inline]
    fn nrows(&self) -> usize {
        (**self).nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        (**self).ncols()
    }

    #[inline]
    fn value_at(&self, row: usize, col: usize) -> Self::Element {
        (**self).value_at(row, col)
    }

    fn shape(&self) -> Shape {
        (**self).shape()
    }
}
