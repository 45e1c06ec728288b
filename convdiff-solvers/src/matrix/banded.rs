//! Constant-band tridiagonal matrix
//!
//! A three-point finite-difference stencil produces a coefficient matrix
//! whose every row carries the same `(left, center, right)` band. Storing
//! the three coefficients plus the dimension is enough to answer any
//! `(i, j)` query, so the full matrix never has to be materialized: O(1)
//! memory instead of O(n²), and row iteration is O(1) per row.
//!
//! [`to_dense`](TridiagonalMatrix::to_dense) materializes the explicit
//! matrix with identical indexing semantics for anyone who wants to verify
//! against it.

use crate::traits::RowMatrix;
use ndarray::Array2;

/// Tridiagonal matrix with constant bands.
///
/// Entry `(i, i)` is `center`, `(i, i-1)` is `left`, `(i, i+1)` is `right`,
/// everything else is zero. Boundary rows 0 and `dim - 1` carry the same
/// band, truncated at the matrix edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TridiagonalMatrix {
    dim: usize,
    left: f64,
    center: f64,
    right: f64,
}

impl TridiagonalMatrix {
    /// Create a `dim x dim` matrix from the three band coefficients
    pub fn new(dim: usize, left: f64, center: f64, right: f64) -> Self {
        Self {
            dim,
            left,
            center,
            right,
        }
    }

    /// Matrix dimension (rows == columns)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The `(left, center, right)` band coefficients
    pub fn bands(&self) -> (f64, f64, f64) {
        (self.left, self.center, self.right)
    }

    /// Materialize the explicit dense matrix.
    ///
    /// Intended for verification: the result has identical `(i, j)`
    /// semantics to [`coeff`](RowMatrix::coeff).
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.dim, self.dim));
        for i in 0..self.dim {
            if i > 0 {
                dense[[i, i - 1]] = self.left;
            }
            dense[[i, i]] = self.center;
            if i + 1 < self.dim {
                dense[[i, i + 1]] = self.right;
            }
        }
        dense
    }
}

impl RowMatrix for TridiagonalMatrix {
    fn num_rows(&self) -> usize {
        self.dim
    }

    fn num_cols(&self) -> usize {
        self.dim
    }

    fn coeff(&self, row: usize, col: usize) -> f64 {
        if row >= self.dim || col >= self.dim {
            return 0.0;
        }
        if col + 1 == row {
            self.left
        } else if col == row {
            self.center
        } else if col == row + 1 {
            self.right
        } else {
            0.0
        }
    }

    fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let left = (row > 0).then(|| (row - 1, self.left));
        let center = (row < self.dim).then(|| (row, self.center));
        let right = (row + 1 < self.dim).then(|| (row + 1, self.right));
        left.into_iter().chain(center).chain(right)
    }
}
