//! One convection-diffusion combination
//!
//! A [`ConvectionDiffusion`] bundles everything one solve needs: the
//! discretization scheme, the Peclet number, the grid, and the two fixed
//! boundary values. Construction validates the configuration; `solve`
//! assembles the system, seeds the field, and runs the relaxation.

use crate::assembly;
use crate::error::FdmError;
use crate::grid::Grid1d;
use crate::scheme::Scheme;
use ndarray::Array1;
use solvers::{RelaxationConfig, gauss_seidel};

/// A steady-state 1-D convection-diffusion boundary-value problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvectionDiffusion {
    scheme: Scheme,
    peclet: f64,
    grid: Grid1d,
    t0: f64,
    tn: f64,
}

/// A converged field with its grid coordinates and solver diagnostics.
#[derive(Debug, Clone)]
pub struct FieldSolution {
    /// Node positions
    pub x: Array1<f64>,
    /// Field values, one per node; endpoints equal the boundary values
    pub values: Array1<f64>,
    /// Number of relaxation sweeps performed
    pub sweeps: usize,
    /// Largest absolute change during the final sweep
    pub last_change: f64,
}

impl ConvectionDiffusion {
    /// Set up a problem, failing fast on invalid configuration.
    ///
    /// The grid is validated at its own construction; this checks the
    /// remaining inputs: `peclet > 0` and finite boundary values.
    pub fn new(
        scheme: Scheme,
        peclet: f64,
        grid: Grid1d,
        t0: f64,
        tn: f64,
    ) -> Result<Self, FdmError> {
        if !(peclet > 0.0) || !peclet.is_finite() {
            return Err(FdmError::NonPositivePeclet(peclet));
        }
        if !t0.is_finite() {
            return Err(FdmError::NonFiniteBoundary(t0));
        }
        if !tn.is_finite() {
            return Err(FdmError::NonFiniteBoundary(tn));
        }
        Ok(Self {
            scheme,
            peclet,
            grid,
            t0,
            tn,
        })
    }

    /// The discretization scheme
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The Peclet number
    pub fn peclet(&self) -> f64 {
        self.peclet
    }

    /// The grid
    pub fn grid(&self) -> Grid1d {
        self.grid
    }

    /// Boundary values `(t0, tn)`
    pub fn boundary_values(&self) -> (f64, f64) {
        (self.t0, self.tn)
    }

    /// Assemble and relax until convergence.
    ///
    /// The system is homogeneous (`A * t = 0` away from the boundaries), so
    /// the right-hand side is all zeros; the boundary values travel in the
    /// seed field's endpoints, which the solver holds fixed.
    pub fn solve(&self, config: &RelaxationConfig) -> Result<FieldSolution, FdmError> {
        let stencil = self.scheme.stencil(self.peclet, self.grid.spacing());
        let matrix = assembly::system_matrix(&self.grid, stencil);
        let rhs = Array1::zeros(self.grid.num_points());
        let seed = assembly::initial_field(self.grid.intervals(), self.t0, self.tn);

        log::debug!(
            "solving {} at Pe = {}, n = {}",
            self.scheme.label(),
            self.peclet,
            self.grid.intervals()
        );

        let solution = gauss_seidel(&matrix, &rhs, &seed, config)?;

        Ok(FieldSolution {
            x: self.grid.positions(),
            values: solution.x,
            sweeps: solution.sweeps,
            last_change: solution.last_change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_non_positive_peclet() {
        let grid = Grid1d::unit(5).unwrap();
        assert!(matches!(
            ConvectionDiffusion::new(Scheme::CenteredCentered, 0.0, grid, 1.0, 0.0),
            Err(FdmError::NonPositivePeclet(_))
        ));
        assert!(matches!(
            ConvectionDiffusion::new(Scheme::CenteredCentered, -2.0, grid, 1.0, 0.0),
            Err(FdmError::NonPositivePeclet(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_boundaries() {
        let grid = Grid1d::unit(5).unwrap();
        assert!(matches!(
            ConvectionDiffusion::new(Scheme::CenteredCentered, 1.0, grid, f64::NAN, 0.0),
            Err(FdmError::NonFiniteBoundary(_))
        ));
    }

    #[test]
    fn test_single_interval_is_boundary_only() {
        let grid = Grid1d::unit(1).unwrap();
        let problem = ConvectionDiffusion::new(Scheme::CenteredCentered, 1.0, grid, 1.0, 0.0)
            .unwrap();

        let solution = problem.solve(&RelaxationConfig::default()).unwrap();

        assert_eq!(solution.values.len(), 2);
        assert_relative_eq!(solution.values[0], 1.0);
        assert_relative_eq!(solution.values[1], 0.0);
        assert_eq!(solution.sweeps, 1);
    }

    #[test]
    fn test_solution_carries_grid_coordinates() {
        let grid = Grid1d::new(0.0, 2.0, 4).unwrap();
        let problem = ConvectionDiffusion::new(Scheme::ForwardCentered, 1.0, grid, 1.0, 0.0)
            .unwrap();

        let solution = problem.solve(&RelaxationConfig::default()).unwrap();

        assert_eq!(solution.x.len(), solution.values.len());
        assert_relative_eq!(solution.x[0], 0.0);
        assert_relative_eq!(solution.x[4], 2.0);
    }
}
