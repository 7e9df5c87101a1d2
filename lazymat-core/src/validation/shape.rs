//! Operand compatibility checks for binary nodes

use crate::{LazyMatError, Shape};

/// Validate that element-wise operands have identical shapes
///
/// Required by [`Sum`](crate::Sum) and [`Difference`](crate::Difference).
pub const fn validate_same_shape(lhs: Shape, rhs: Shape) -> Result<Shape, LazyMatError> {
    if lhs.rows != rhs.rows || lhs.cols != rhs.cols {
        return Err(LazyMatError::ShapeMismatch { lhs, rhs });
    }
    Ok(lhs)
}

/// Validate the shared dimension of a matrix product
///
/// The left column count must equal the right row count. Returns the
/// output shape `(lhs.rows, rhs.cols)`.
pub const fn validate_shared_dim(lhs: Shape, rhs: Shape) -> Result<Shape, LazyMatError> {
    if lhs.cols != rhs.rows {
        return Err(LazyMatError::DimensionMismatch { lhs, rhs });
    }
    Ok(Shape::new(lhs.rows, rhs.cols))
}
