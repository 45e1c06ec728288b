//! Core trait for matrix access used by the relaxation solvers.
//!
//! This module defines [`RowMatrix`], the abstraction that lets solvers
//! consume banded representations, dense `ndarray` matrices, or any other
//! layout interchangeably. A sweep only ever asks a matrix for its
//! dimensions and for the entries of one row at a time, so the solver code
//! stays decoupled from how the coefficients are stored.

use ndarray::Array1;

/// Row-wise access to a real coefficient matrix.
///
/// Implementations report the nonzero entries of each row as
/// `(column, value)` pairs. Entries outside the stored pattern are zero.
pub trait RowMatrix: Send + Sync {
    /// Number of rows in the matrix
    fn num_rows(&self) -> usize;

    /// Number of columns in the matrix
    fn num_cols(&self) -> usize;

    /// Entry at `(row, col)`; zero when outside the stored pattern
    fn coeff(&self, row: usize, col: usize) -> f64;

    /// Iterate the stored entries of one row as `(column, value)` pairs.
    ///
    /// Columns must be reported in increasing order. A dense implementation
    /// may report explicit zeros; consumers sum over whatever is reported,
    /// so the result is unchanged.
    fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_;

    /// Check if the matrix is square
    fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }

    /// Apply the matrix: y = A * x
    fn apply(&self, x: &Array1<f64>) -> Array1<f64> {
        let mut y = Array1::zeros(self.num_rows());
        for i in 0..self.num_rows() {
            let mut acc = 0.0;
            for (j, value) in self.row_entries(i) {
                acc += value * x[j];
            }
            y[i] = acc;
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::TridiagonalMatrix;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_apply_matches_dense_product() {
        let a = TridiagonalMatrix::new(4, -1.0, 2.0, -1.0);
        let x = array![1.0, 2.0, 3.0, 4.0];

        let y = a.apply(&x);
        let dense = a.to_dense();
        let expected = dense.dot(&x);

        for i in 0..4 {
            assert_relative_eq!(y[i], expected[i]);
        }
    }

    #[test]
    fn test_is_square() {
        let a = TridiagonalMatrix::new(3, 1.0, -2.0, 1.0);
        assert!(a.is_square());
    }
}
