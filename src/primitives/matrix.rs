//! Dense row-major matrix with elementary row operations.
//!
//! ## Purpose
//!
//! This module provides [`Matrix`], the value type every algorithm in the
//! crate consumes and produces. It owns a contiguous row-major buffer and
//! exposes the three elementary row operations used by elimination
//! (swap, scale, add a multiple) plus the structural derivations needed by
//! determinants and inverses (minors, sub-blocks, concatenation, transpose).
//!
//! ## Design notes
//!
//! * **Fixed shape**: `rows x cols` is set at construction; cells are mutable,
//!   dimensions never change.
//! * **Checked API**: `get`, `set`, `row`, `col` and the row operations
//!   validate indices and return [`LinalgError::OutOfRange`].
//! * **Unchecked hot path**: `Index<(usize, usize)>` panics like slice
//!   indexing and is used inside algorithms after shapes were validated.
//! * **Value semantics**: derivations return new matrices; callers that need
//!   an untouched original keep their own copy (`Clone`).
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols`.
//! * Construction from nested rows rejects ragged input.
//! * A `0 x 0` matrix only arises as the minor of a `1 x 1` matrix.
//!
//! ## Non-goals
//!
//! * No sparse storage, no views or slicing without copy.
//! * No operator overloading for arithmetic (see `math::ops`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use core::fmt;
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LinalgError;

// ============================================================================
// Matrix
// ============================================================================

/// Dense real matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Identity matrix of dimension `n`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Build a matrix from rows of equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(LinalgError::EmptyInput);
        }

        let n_cols = rows[0].len();
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(LinalgError::invalid(format!(
                    "ragged rows: row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Build a matrix from a flat row-major slice.
    pub fn from_row_slice(rows: usize, cols: usize, values: &[T]) -> Result<Self, LinalgError> {
        if values.len() != rows * cols {
            return Err(LinalgError::invalid(format!(
                "buffer of length {} does not fit shape {}x{}",
                values.len(),
                rows,
                cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            data: values.to_vec(),
        })
    }

    /// Single-column matrix from a vector of values.
    pub fn column_vector(values: &[T]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    // ========================================================================
    // Shape
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether `rows == cols`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Fail with [`LinalgError::NotSquare`] unless `rows == cols`.
    #[inline]
    pub fn ensure_square(&self) -> Result<(), LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Read a cell.
    pub fn get(&self, i: usize, j: usize) -> Result<T, LinalgError> {
        self.check_row(i)?;
        self.check_col(j)?;
        Ok(self.data[i * self.cols + j])
    }

    /// Overwrite a cell.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), LinalgError> {
        self.check_row(i)?;
        self.check_col(j)?;
        self.data[i * self.cols + j] = value;
        Ok(())
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Result<Vec<T>, LinalgError> {
        self.check_row(i)?;
        Ok(self.row_slice(i).to_vec())
    }

    /// Copy of column `j`.
    pub fn col(&self, j: usize) -> Result<Vec<T>, LinalgError> {
        self.check_col(j)?;
        Ok((0..self.rows).map(|i| self.data[i * self.cols + j]).collect())
    }

    /// Replace row `i` with `values` (length must equal `cols`).
    pub fn set_row(&mut self, i: usize, values: &[T]) -> Result<(), LinalgError> {
        self.check_row(i)?;
        if values.len() != self.cols {
            return Err(LinalgError::invalid(format!(
                "row has {} values, matrix has {} columns",
                values.len(),
                self.cols
            )));
        }
        let start = i * self.cols;
        self.data[start..start + self.cols].copy_from_slice(values);
        Ok(())
    }

    /// Replace column `j` with `values` (length must equal `rows`).
    pub fn set_col(&mut self, j: usize, values: &[T]) -> Result<(), LinalgError> {
        self.check_col(j)?;
        if values.len() != self.rows {
            return Err(LinalgError::invalid(format!(
                "column has {} values, matrix has {} rows",
                values.len(),
                self.rows
            )));
        }
        for (i, &v) in values.iter().enumerate() {
            self.data[i * self.cols + j] = v;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    // ========================================================================
    // Elementary Row Operations
    // ========================================================================

    /// Exchange rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), LinalgError> {
        self.check_row(i)?;
        self.check_row(j)?;
        if i != j {
            for c in 0..self.cols {
                self.data.swap(i * self.cols + c, j * self.cols + c);
            }
        }
        Ok(())
    }

    /// Multiply row `i` by a non-zero constant.
    pub fn scale_row(&mut self, i: usize, factor: T) -> Result<(), LinalgError> {
        self.check_row(i)?;
        if factor == T::zero() {
            return Err(LinalgError::invalid("row scale factor must be non-zero"));
        }
        let start = i * self.cols;
        for v in &mut self.data[start..start + self.cols] {
            *v = *v * factor;
        }
        Ok(())
    }

    /// `row[target] += factor * row[source]` with a non-zero factor.
    pub fn add_row_multiple(
        &mut self,
        target: usize,
        source: usize,
        factor: T,
    ) -> Result<(), LinalgError> {
        self.check_row(target)?;
        self.check_row(source)?;
        if factor == T::zero() {
            return Err(LinalgError::invalid("row multiple factor must be non-zero"));
        }
        for c in 0..self.cols {
            let s = self.data[source * self.cols + c];
            let t = &mut self.data[target * self.cols + c];
            *t = *t + factor * s;
        }
        Ok(())
    }

    // ========================================================================
    // Derived Matrices
    // ========================================================================

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        t
    }

    /// Minor: copy with row `row` and column `col` removed.
    pub fn remove_row_col(&self, row: usize, col: usize) -> Result<Self, LinalgError> {
        self.check_row(row)?;
        self.check_col(col)?;
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.cols).filter(|&j| j != col) {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Ok(Self {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        })
    }

    /// Copy without the last column (the coefficient block of `[A|b]`).
    pub fn remove_last_col(&self) -> Result<Self, LinalgError> {
        if self.cols == 0 {
            return Err(LinalgError::invalid("matrix has no columns to remove"));
        }
        self.columns_range(0, self.cols - 1)
    }

    /// Sub-block with inclusive row and column bounds.
    pub fn sub_matrix(
        &self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<Self, LinalgError> {
        self.check_row(row_end)?;
        self.check_col(col_end)?;
        if row_start > row_end || col_start > col_end {
            return Err(LinalgError::invalid(format!(
                "start index exceeds end index (rows {}..={}, cols {}..={})",
                row_start, row_end, col_start, col_end
            )));
        }

        let n_rows = row_end - row_start + 1;
        let n_cols = col_end - col_start + 1;
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for i in row_start..=row_end {
            data.extend_from_slice(&self.row_slice(i)[col_start..=col_end]);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Horizontal concatenation `[a | b]`.
    pub fn augment(a: &Self, b: &Self) -> Result<Self, LinalgError> {
        if a.rows != b.rows {
            return Err(LinalgError::invalid(format!(
                "cannot augment {}x{} with {}x{}: row counts differ",
                a.rows, a.cols, b.rows, b.cols
            )));
        }

        let cols = a.cols + b.cols;
        let mut data = Vec::with_capacity(a.rows * cols);
        for i in 0..a.rows {
            data.extend_from_slice(a.row_slice(i));
            data.extend_from_slice(b.row_slice(i));
        }
        Ok(Self {
            rows: a.rows,
            cols,
            data,
        })
    }

    /// Copy with column `col` replaced by a single-column matrix.
    pub fn replace_col(&self, col: usize, column: &Self) -> Result<Self, LinalgError> {
        self.check_col(col)?;
        if column.cols != 1 || column.rows != self.rows {
            return Err(LinalgError::invalid(format!(
                "replacement column must be {}x1, got {}x{}",
                self.rows, column.rows, column.cols
            )));
        }
        let mut result = self.clone();
        for i in 0..self.rows {
            result.data[i * self.cols + col] = column.data[i];
        }
        Ok(result)
    }

    /// Columns `start..end` (exclusive) as a new matrix.
    pub(crate) fn columns_range(&self, start: usize, end: usize) -> Result<Self, LinalgError> {
        if start > end || end > self.cols {
            return Err(LinalgError::OutOfRange {
                axis: "column",
                index: end,
                len: self.cols,
            });
        }
        let n_cols = end - start;
        let mut data = Vec::with_capacity(self.rows * n_cols);
        for i in 0..self.rows {
            data.extend_from_slice(&self.row_slice(i)[start..end]);
        }
        Ok(Self {
            rows: self.rows,
            cols: n_cols,
            data,
        })
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Same shape and every cell within `tol` of the other.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }

    // ========================================================================
    // Bounds
    // ========================================================================

    #[inline]
    fn check_row(&self, i: usize) -> Result<(), LinalgError> {
        if i >= self.rows {
            return Err(LinalgError::OutOfRange {
                axis: "row",
                index: i,
                len: self.rows,
            });
        }
        Ok(())
    }

    #[inline]
    fn check_col(&self, j: usize) -> Result<(), LinalgError> {
        if j >= self.cols {
            return Err(LinalgError::OutOfRange {
                axis: "column",
                index: j,
                len: self.cols,
            });
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &mut self.data[i * self.cols + j]
    }
}

/// Cells right-aligned in 12 columns with 3 decimals, one row per line.
impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                let v = self.data[i * self.cols + j].to_f64().unwrap_or(f64::NAN);
                write!(f, "{:12.3}", v)?;
            }
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
