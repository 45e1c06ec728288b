//! Dense matrix access
//!
//! `ndarray::Array2<f64>` implements [`RowMatrix`] directly, so the same
//! sweep can run against an explicitly filled matrix. The dense path
//! reports every entry of a row, zeros included; the sums are unchanged.

use crate::traits::RowMatrix;
use ndarray::{Array2, Axis};

impl RowMatrix for Array2<f64> {
    fn num_rows(&self) -> usize {
        self.nrows()
    }

    fn num_cols(&self) -> usize {
        self.ncols()
    }

    fn coeff(&self, row: usize, col: usize) -> f64 {
        self[[row, col]]
    }

    fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.index_axis(Axis(0), row)
            .into_iter()
            .copied()
            .enumerate()
    }
}
