//! Steady-state 1-D convection-diffusion approximation
//!
//! This crate discretizes the steady convection-diffusion balance on a
//! uniform 1-D grid with fixed endpoint values and solves it by
//! Gauss-Seidel relaxation from the `convdiff-solvers` crate.
//!
//! # Features
//!
//! - **Two discretization schemes**: centered-centered and
//!   forward-centered (upwind) first-derivative stencils
//! - **Validated setup**: Peclet number, grid, and boundary values checked
//!   before any iteration
//! - **Per-combination outcomes**: parameter sweeps record divergence
//!   instead of aborting the study
//! - **Numerical-diffusion measurement**: pointwise difference between the
//!   two schemes' solutions
//!
//! # Example
//!
//! ```
//! use fdm::{ConvectionDiffusion, Grid1d, Scheme};
//! use solvers::RelaxationConfig;
//!
//! let grid = Grid1d::unit(5)?;
//! let problem = ConvectionDiffusion::new(Scheme::CenteredCentered, 1.0, grid, 1.0, 0.0)?;
//! let solution = problem.solve(&RelaxationConfig::default())?;
//!
//! assert_eq!(solution.values.len(), 6);
//! assert_eq!(solution.values[0], 1.0);
//! # Ok::<(), fdm::FdmError>(())
//! ```

pub mod assembly;
pub mod error;
pub mod grid;
pub mod problem;
pub mod scheme;
pub mod sweep;

// Re-export main types
pub use error::FdmError;
pub use grid::Grid1d;
pub use problem::{ConvectionDiffusion, FieldSolution};
pub use scheme::{Scheme, Stencil};
pub use sweep::{CaseOutcome, SweepPlan, scheme_difference};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
