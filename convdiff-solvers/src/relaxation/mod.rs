//! Iterative relaxation solvers
//!
//! - [`gauss_seidel`]: Gauss-Seidel sweeps for systems with fixed endpoint
//!   values, the workhorse for two-point boundary-value discretizations

mod gauss_seidel;

pub use gauss_seidel::{RelaxationConfig, RelaxationError, RelaxationSolution, gauss_seidel};
