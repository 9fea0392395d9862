//! Sparse matrix type for Jacobian/sensitivity data.
//!
//! Storage is a coordinate map keyed `(col, row)`, so iteration order is
//! column-major. The on-disk entry order of the jacobian format is
//! column-major, which makes encoding a plain walk over the map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Matrix;

/// A sparse 2D matrix of `f64` values with explicit shape.
///
/// Absent positions read as `0.0`. Setting the same position twice keeps
/// the last value (replacement, not accumulation).
///
/// # Examples
///
/// ```
/// use derivada::primitives::SparseMatrix;
///
/// let mut m = SparseMatrix::new(2, 3);
/// m.set(0, 0, 1.5);
/// m.set(1, 2, -3.25);
/// assert_eq!(m.nnz(), 2);
/// assert_eq!(m.get(0, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: BTreeMap<(usize, usize), f64>,
}

impl SparseMatrix {
    /// Creates an empty sparse matrix with the given shape.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: BTreeMap::new(),
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Stores `value` at (row, col), replacing any previous value there.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.rows && col < self.cols,
            "sparse index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.entries.insert((col, row), value);
    }

    /// Gets the value at (row, col), `0.0` if no entry is stored there.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "sparse index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.entries.get(&(col, row)).copied().unwrap_or(0.0)
    }

    /// Returns true if a value is stored at (row, col).
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(col, row))
    }

    /// Iterates stored entries as `(row, col, value)` in column-major order
    /// (all of column 0 top to bottom, then column 1, ...).
    pub fn iter_col_major(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.entries
            .iter()
            .map(|(&(col, row), &value)| (row, col, value))
    }

    /// Materializes a dense copy with zeros in the unstored positions.
    ///
    /// Pure conversion; the sparse matrix is left untouched.
    #[must_use]
    pub fn to_dense(&self) -> Matrix<f64> {
        let mut dense = Matrix::zeros(self.rows, self.cols);
        for (row, col, value) in self.iter_col_major() {
            dense.set(row, col, value);
        }
        dense
    }
}

#[cfg(test)]
#[path = "sparse_tests.rs"]
mod tests;
