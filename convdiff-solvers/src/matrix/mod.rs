//! Matrix representations consumed by the relaxation solvers
//!
//! - [`TridiagonalMatrix`]: constant-band storage for three-point stencils
//! - [`RowMatrix`](crate::traits::RowMatrix) for `ndarray::Array2<f64>`:
//!   the naive dense fill, mostly useful to cross-check the banded
//!   representation in tests

mod banded;
mod dense;

pub use banded::TridiagonalMatrix;
