//! Dense row-major storage
//!
//! [`Matrix`] is the only type in lazymat that owns element memory. It is
//! both a leaf of expression trees and the target that deferred
//! expressions are materialized into.

use std::ops::{Index, IndexMut};

use lazymat_core::validation::{validate_buffer_len, validate_coordinate, validate_row_len};
use lazymat_core::{impl_expr_display, impl_expr_ops, LazyMatError, MatrixExpr, Result, Shape};

/// Dense matrix with contiguous row-major storage
///
/// Element `(r, c)` lives at index `r * cols + c` of the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixParts<T>"))]
pub struct Matrix<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Create an empty 0x0 matrix
    pub const fn new() -> Self {
        Self {
            shape: Shape::new(0, 0),
            data: Vec::new(),
        }
    }

    /// Create a matrix from dimensions and a flat row-major buffer
    ///
    /// The buffer must hold exactly `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        validate_buffer_len(rows, cols, data.len())?;
        Ok(Self {
            shape: Shape::new(rows, cols),
            data,
        })
    }

    /// Create a matrix by evaluating `f(row, col)` for every coordinate
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows.saturating_mul(cols));
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self {
            shape: Shape::new(rows, cols),
            data,
        }
    }

    /// Create a matrix from nested rows
    ///
    /// Every row must have the length of the first one. No rows yields an
    /// empty 0x0 matrix.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self>
    where
        T: Clone,
    {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len().saturating_mul(cols));

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            validate_row_len(index, cols, row.len())?;
            data.extend_from_slice(row);
        }

        Ok(Self {
            shape: Shape::new(rows.len(), cols),
            data,
        })
    }

    /// Get the number of rows
    pub fn nrows(&self) -> usize {
        self.shape.rows
    }

    /// Get the number of columns
    pub fn ncols(&self) -> usize {
        self.shape.cols
    }

    /// Get matrix dimensions
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// True when the matrix holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(row, col)`, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if !self.shape.contains(row, col) {
            return None;
        }
        self.data.get(self.shape.linear_index(row, col))
    }

    /// Overwrite the element at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_coordinate(self.shape, row, col)?;
        let index = self.shape.linear_index(row, col);
        self.data[index] = value;
        Ok(())
    }

    /// Row-major view of the buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Take the row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        let cols = self.shape.cols;
        (0..self.shape.rows).map(move |row| &self.data[row * cols..(row + 1) * cols])
    }

    /// Largest stored element
    ///
    /// Uses `PartialOrd`; an unordered element such as NaN never replaces
    /// the running maximum.
    pub fn max(&self) -> Result<T>
    where
        T: PartialOrd + Clone,
    {
        let (first, rest) = self.data.split_first().ok_or(LazyMatError::EmptyReduction)?;
        let max = rest
            .iter()
            .fold(first, |max, value| if value > max { value } else { max });
        Ok(max.clone())
    }

    /// Assemble from a buffer already known to hold `shape.len()` elements
    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.len(), data.len());
        Self { shape, data }
    }

    #[track_caller]
    fn offset(&self, row: usize, col: usize) -> usize {
        if let Err(err) = validate_coordinate(self.shape, row, col) {
            panic!("{err}");
        }
        self.shape.linear_index(row, col)
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let index = self.offset(row, col);
        &mut self.data[index]
    }
}

impl<T: Clone> MatrixExpr for Matrix<T> {
    type Element = T;

    #[inline]
    fn nrows(&self) -> usize {
        self.shape.rows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.shape.cols
    }

    #[inline]
    #[track_caller]
    fn value_at(&self, row: usize, col: usize) -> T {
        self[(row, col)].clone()
    }

    fn shape(&self) -> Shape {
        self.shape
    }
}

impl_expr_ops!(['a, T,] &'a Matrix<T>);
impl_expr_display!([T,] Matrix<T>);

impl<T: Clone, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self {
            shape: Shape::new(R, C),
            data: rows.iter().flatten().cloned().collect(),
        }
    }
}

impl<T: Clone> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = LazyMatError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

/// Unvalidated serialized form of a [`Matrix`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MatrixParts<T> {
    shape: Shape,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<MatrixParts<T>> for Matrix<T> {
    type Error = LazyMatError;

    fn try_from(parts: MatrixParts<T>) -> Result<Self> {
        Self::from_vec(parts.shape.rows, parts.shape.cols, parts.data)
    }
}
