//! Coordinate and buffer bounds validation

use crate::{LazyMatError, Shape};

/// Validate that a coordinate lies inside a shape
///
/// Both indices are checked independently, so a column equal to the
/// column count never aliases the first element of the next row.
pub const fn validate_coordinate(shape: Shape, row: usize, col: usize) -> Result<(), LazyMatError> {
    if !shape.contains(row, col) {
        return Err(LazyMatError::OutOfRange { row, col, shape });
    }
    Ok(())
}

/// Element count of a shape, failing when `rows * cols` overflows
pub const fn validate_element_count(shape: Shape) -> Result<usize, LazyMatError> {
    match shape.checked_len() {
        Some(len) => Ok(len),
        None => Err(LazyMatError::SizeOverflow {
            rows: shape.rows,
            cols: shape.cols,
        }),
    }
}

/// Validate a flat row-major buffer against its declared dimensions
///
/// Returns the element count with overflow protection on `rows * cols`.
pub const fn validate_buffer_len(rows: usize, cols: usize, len: usize) -> Result<usize, LazyMatError> {
    let expected = match rows.checked_mul(cols) {
        Some(expected) => expected,
        None => return Err(LazyMatError::SizeOverflow { rows, cols }),
    };

    if len != expected {
        return Err(LazyMatError::BufferLength {
            expected,
            actual: len,
        });
    }

    Ok(expected)
}

/// Validate one row of a nested literal against the first row's length
pub const fn validate_row_len(row: usize, expected: usize, actual: usize) -> Result<(), LazyMatError> {
    if expected != actual {
        return Err(LazyMatError::RaggedRows {
            row,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coordinate() {
        let shape = Shape::new(2, 2);
        assert_eq!(validate_coordinate(shape, 1, 1), Ok(()));

        // (0, 2) would land on (1, 0) in a row-major buffer
        assert_eq!(
            validate_coordinate(shape, 0, 2),
            Err(LazyMatError::OutOfRange { row: 0, col: 2, shape })
        );
        assert_eq!(
            validate_coordinate(Shape::new(0, 0), 0, 0),
            Err(LazyMatError::OutOfRange {
                row: 0,
                col: 0,
                shape: Shape::new(0, 0),
            })
        );
    }

    #[test]
    fn test_validate_buffer_len() {
        assert_eq!(validate_buffer_len(2, 3, 6), Ok(6));
        assert_eq!(validate_buffer_len(0, 0, 0), Ok(0));
        assert_eq!(
            validate_buffer_len(2, 3, 5),
            Err(LazyMatError::BufferLength {
                expected: 6,
                actual: 5,
            })
        );
        assert_eq!(
            validate_buffer_len(usize::MAX, 2, 0),
            Err(LazyMatError::SizeOverflow {
                rows: usize::MAX,
                cols: 2,
            })
        );
    }

    #[test]
    fn test_validate_element_count() {
        assert_eq!(validate_element_count(Shape::new(3, 4)), Ok(12));
        assert_eq!(validate_element_count(Shape::new(usize::MAX, 0)), Ok(0));
        assert_eq!(
            validate_element_count(Shape::new(usize::MAX, usize::MAX)),
            Err(LazyMatError::SizeOverflow {
                rows: usize::MAX,
                cols: usize::MAX,
            })
        );
    }

    #[test]
    fn test_validate_row_len() {
        assert_eq!(validate_row_len(1, 3, 3), Ok(()));
        assert_eq!(
            validate_row_len(2, 3, 2),
            Err(LazyMatError::RaggedRows {
                row: 2,
                expected: 3,
                actual: 2,
            })
        );
    }
}
