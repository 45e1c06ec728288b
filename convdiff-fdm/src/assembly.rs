//! System assembly
//!
//! Turns a stencil into the coefficient matrix and produces the seed field
//! the relaxation starts from.

use crate::grid::Grid1d;
use crate::scheme::Stencil;
use ndarray::Array1;
use solvers::TridiagonalMatrix;

/// Build the `(n+1) x (n+1)` coefficient matrix for a stencil.
///
/// Every row carries the stencil band, including boundary rows 0 and `n`;
/// those rows are never consulted by the solver (the endpoints are fixed by
/// the boundary conditions), but filling them keeps the matrix uniform.
pub fn system_matrix(grid: &Grid1d, stencil: Stencil) -> TridiagonalMatrix {
    TridiagonalMatrix::new(
        grid.num_points(),
        stencil.left,
        stencil.center,
        stencil.right,
    )
}

/// Seed field: linear interpolation between the boundary values.
///
/// `field[i] = t0 + i * (tn - t0) / n`, so `field[0] == t0` and
/// `field[n] == tn` exactly.
pub fn initial_field(intervals: usize, t0: f64, tn: f64) -> Array1<f64> {
    let dt = (tn - t0) / intervals as f64;
    let mut field = Array1::from_iter((0..=intervals).map(|i| t0 + i as f64 * dt));
    // The ramp can round past the far boundary; the endpoint must be exact
    // because the solver holds it fixed from here on.
    field[intervals] = tn;
    field
}
