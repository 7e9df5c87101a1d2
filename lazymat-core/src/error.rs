//! Error types for lazymat operations

use crate::Shape;
use thiserror::Error;

/// Precondition violations detected while building or querying expressions
///
/// Shape and dimension checks run when a node is constructed, before any
/// element is evaluated. Coordinate checks run at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LazyMatError {
    /// Operands of an element-wise operation differ in shape
    #[error("shape mismatch: {lhs} vs {rhs}")]
    ShapeMismatch { lhs: Shape, rhs: Shape },
    /// Left column count differs from right row count in a matrix product
    #[error("dimension mismatch: cannot multiply {lhs} by {rhs}")]
    DimensionMismatch { lhs: Shape, rhs: Shape },
    /// Coordinate outside the shape of the expression
    #[error("coordinate ({row}, {col}) out of range for {shape}")]
    OutOfRange { row: usize, col: usize, shape: Shape },
    /// Row of a nested literal has a different length than the first row
    #[error("row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Flat buffer length does not match rows * cols
    #[error("buffer holds {actual} elements, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
    /// rows * cols does not fit in usize
    #[error("{rows}x{cols} overflows the addressable element count")]
    SizeOverflow { rows: usize, cols: usize },
    /// Reduction over a store with no elements
    #[error("reduction over an empty matrix")]
    EmptyReduction,
}

/// Result type for lazymat operations
pub type Result<T> = core::result::Result<T, LazyMatError>;
