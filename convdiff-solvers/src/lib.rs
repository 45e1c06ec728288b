//! Relaxation solvers for finite-difference boundary-value systems
//!
//! This crate provides the iterative machinery for solving the banded
//! linear systems that three-point finite-difference discretizations
//! produce, independent of any particular governing equation.
//!
//! # Features
//!
//! - **Gauss-Seidel relaxation**: in-order sweeps with eager divergence
//!   detection and an explicit sweep budget
//! - **Banded matrices**: constant-band tridiagonal storage with full
//!   `(i, j)` indexed access and dense materialization for verification
//! - **Layout-independent sweeps**: solvers consume the [`RowMatrix`]
//!   trait, so banded and dense representations are interchangeable
//!
//! # Example
//!
//! ```
//! use solvers::{RelaxationConfig, TridiagonalMatrix, gauss_seidel};
//! use ndarray::{Array1, array};
//!
//! // -x[i-1] + 2 x[i] - x[i+1] = 0 with fixed endpoints
//! let matrix = TridiagonalMatrix::new(4, -1.0, 2.0, -1.0);
//! let rhs = Array1::zeros(4);
//! let seed = array![1.0, 0.0, 0.0, 0.0];
//!
//! let solution = gauss_seidel(&matrix, &rhs, &seed, &RelaxationConfig::default())?;
//! assert_eq!(solution.x[0], 1.0);
//! # Ok::<(), solvers::RelaxationError>(())
//! ```

pub mod matrix;
pub mod relaxation;
pub mod traits;

// Re-export main types
pub use matrix::TridiagonalMatrix;
pub use relaxation::{RelaxationConfig, RelaxationError, RelaxationSolution, gauss_seidel};
pub use traits::RowMatrix;
