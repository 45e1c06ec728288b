//! Gauss-Seidel relaxation solver
//!
//! Solves `A * x = b` for systems whose first and last unknowns are fixed
//! Dirichlet values, by repeated in-order sweeps over the interior rows.
//! Within one sweep, row `i` mixes values already updated this sweep
//! (columns left of the diagonal) with values from the previous sweep
//! (columns right of it) - the forward-substitution form of Gauss-Seidel,
//! as opposed to a Jacobi sweep that would use only previous-sweep values.
//!
//! The sweep is written against [`RowMatrix`] row iteration, never against
//! a particular storage layout: a banded matrix and its dense image produce
//! bit-identical results.

use crate::traits::RowMatrix;
use ndarray::Array1;
use thiserror::Error;

/// Gauss-Seidel solver configuration
#[derive(Debug, Clone)]
pub struct RelaxationConfig {
    /// Convergence threshold for the largest per-sweep change
    pub tolerance: f64,
    /// Maximum number of sweeps before giving up
    pub max_sweeps: usize,
    /// Print progress every N sweeps (0 = no output)
    pub print_interval: usize,
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        Self {
            tolerance: 5e-6,
            max_sweeps: 100_000,
            print_interval: 0,
        }
    }
}

/// Gauss-Seidel solver result
#[derive(Debug, Clone)]
pub struct RelaxationSolution {
    /// Solution vector, endpoints identical to the initial guess
    pub x: Array1<f64>,
    /// Number of sweeps performed
    pub sweeps: usize,
    /// Largest absolute change observed during the final sweep
    pub last_change: f64,
    /// Largest absolute change per sweep, one entry per sweep
    pub change_history: Vec<f64>,
}

/// Relaxation solver errors
#[derive(Debug, Error)]
pub enum RelaxationError {
    /// An update produced a non-finite value. The solve aborts immediately;
    /// no partial solution is returned.
    #[error("update for row {row} produced a non-finite value during sweep {sweep}")]
    Diverged {
        /// Row whose update went non-finite
        row: usize,
        /// Sweep during which it happened (1-based)
        sweep: usize,
    },

    /// The sweep budget ran out before the change dropped below tolerance.
    /// Distinct from [`Diverged`](RelaxationError::Diverged): the iteration
    /// was still producing finite values, just not settling.
    #[error("no convergence within {max_sweeps} sweeps (last max change {last_change:.3e})")]
    SweepBudgetExhausted {
        /// The exhausted budget
        max_sweeps: usize,
        /// Largest change during the final sweep
        last_change: f64,
    },

    /// Tolerance must be strictly positive.
    #[error("tolerance must be positive, got {0}")]
    NonPositiveTolerance(f64),

    /// The sweep budget must allow at least one sweep.
    #[error("sweep budget must be at least 1")]
    ZeroSweepBudget,

    /// The coefficient matrix must be square.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Matrix and vector sizes disagree.
    #[error("dimension mismatch: matrix has {expected} rows, vector has {actual} entries")]
    DimensionMismatch {
        /// Matrix dimension
        expected: usize,
        /// Offending vector length
        actual: usize,
    },

    /// The system needs both endpoints, so at least two points.
    #[error("system has {0} points, need at least 2")]
    TooFewPoints(usize),
}

/// Solve `A * x = b` by Gauss-Seidel relaxation with fixed endpoints.
///
/// The first and last entries of `x0` are Dirichlet values: they are copied
/// through unchanged on every sweep and never updated. Interior rows are
/// updated in increasing index order using
/// `x[i] = (b[i] - sum_new - sum_old) / A[i, i]`, where `sum_new` runs over
/// columns below the diagonal (current sweep's values) and `sum_old` over
/// columns above it (previous sweep's values).
///
/// Convergence is declared once the largest absolute interior change of a
/// sweep drops below `config.tolerance`. A non-finite update aborts the
/// solve immediately with [`RelaxationError::Diverged`]; running out of
/// sweeps yields [`RelaxationError::SweepBudgetExhausted`].
///
/// # Arguments
/// * `matrix` - Coefficient matrix A
/// * `rhs` - Right-hand side b (all zeros for a homogeneous system)
/// * `x0` - Initial guess; endpoints double as the boundary values
/// * `config` - Solver configuration
pub fn gauss_seidel<M: RowMatrix>(
    matrix: &M,
    rhs: &Array1<f64>,
    x0: &Array1<f64>,
    config: &RelaxationConfig,
) -> Result<RelaxationSolution, RelaxationError> {
    validate(matrix, rhs, x0, config)?;

    let last = x0.len() - 1;
    let mut current = x0.clone();
    let mut next = x0.clone();
    let mut change_history = Vec::new();

    for sweep in 1..=config.max_sweeps {
        let mut max_change = 0.0_f64;

        next[0] = current[0];
        for i in 1..last {
            let mut diagonal = 0.0;
            let mut sum_new = 0.0;
            let mut sum_old = 0.0;
            for (j, a_ij) in matrix.row_entries(i) {
                if j < i {
                    sum_new += next[j] * a_ij;
                } else if j > i {
                    sum_old += current[j] * a_ij;
                } else {
                    diagonal = a_ij;
                }
            }

            let value = (rhs[i] - sum_old - sum_new) / diagonal;
            if !value.is_finite() {
                return Err(RelaxationError::Diverged { row: i, sweep });
            }

            max_change = max_change.max((current[i] - value).abs());
            next[i] = value;
        }
        next[last] = current[last];

        std::mem::swap(&mut current, &mut next);
        change_history.push(max_change);

        if config.print_interval > 0 && sweep % config.print_interval == 0 {
            log::info!("Gauss-Seidel sweep {}: max change = {:.6e}", sweep, max_change);
        }

        if max_change < config.tolerance {
            return Ok(RelaxationSolution {
                x: current,
                sweeps: sweep,
                last_change: max_change,
                change_history,
            });
        }
    }

    Err(RelaxationError::SweepBudgetExhausted {
        max_sweeps: config.max_sweeps,
        last_change: change_history.last().copied().unwrap_or(f64::INFINITY),
    })
}

fn validate<M: RowMatrix>(
    matrix: &M,
    rhs: &Array1<f64>,
    x0: &Array1<f64>,
    config: &RelaxationConfig,
) -> Result<(), RelaxationError> {
    if !(config.tolerance > 0.0) {
        return Err(RelaxationError::NonPositiveTolerance(config.tolerance));
    }
    if config.max_sweeps == 0 {
        return Err(RelaxationError::ZeroSweepBudget);
    }
    if !matrix.is_square() {
        return Err(RelaxationError::NotSquare {
            rows: matrix.num_rows(),
            cols: matrix.num_cols(),
        });
    }
    if x0.len() < 2 {
        return Err(RelaxationError::TooFewPoints(x0.len()));
    }
    if matrix.num_rows() != x0.len() {
        return Err(RelaxationError::DimensionMismatch {
            expected: matrix.num_rows(),
            actual: x0.len(),
        });
    }
    if rhs.len() != x0.len() {
        return Err(RelaxationError::DimensionMismatch {
            expected: x0.len(),
            actual: rhs.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::TridiagonalMatrix;
    use approx::assert_relative_eq;
    use ndarray::{Array1, array};

    #[test]
    fn test_converges_to_linear_profile() {
        // -x[i-1] + 2x[i] - x[i+1] = 0 with x[0] = 1, x[3] = 0 has the
        // linear solution (1, 2/3, 1/3, 0).
        let a = TridiagonalMatrix::new(4, -1.0, 2.0, -1.0);
        let rhs = Array1::zeros(4);
        let x0 = array![1.0, 0.0, 0.0, 0.0];
        let config = RelaxationConfig {
            tolerance: 1e-10,
            ..Default::default()
        };

        let solution = gauss_seidel(&a, &rhs, &x0, &config).unwrap();

        assert!(solution.sweeps > 0);
        assert_relative_eq!(solution.x[0], 1.0);
        assert_relative_eq!(solution.x[1], 2.0 / 3.0, epsilon = 1e-8);
        assert_relative_eq!(solution.x[2], 1.0 / 3.0, epsilon = 1e-8);
        assert_relative_eq!(solution.x[3], 0.0);
        assert!(solution.last_change < 1e-10);
        assert_eq!(solution.change_history.len(), solution.sweeps);
    }

    #[test]
    fn test_band_and_dense_agree_bitwise() {
        let band = TridiagonalMatrix::new(6, -1.0, 2.5, -1.0);
        let dense = band.to_dense();
        let rhs = Array1::zeros(6);
        let x0 = array![2.0, 0.0, 0.0, 0.0, 0.0, -1.0];
        let config = RelaxationConfig::default();

        let from_band = gauss_seidel(&band, &rhs, &x0, &config).unwrap();
        let from_dense = gauss_seidel(&dense, &rhs, &x0, &config).unwrap();

        assert_eq!(from_band.sweeps, from_dense.sweeps);
        assert_eq!(from_band.x, from_dense.x);
    }

    #[test]
    fn test_zero_diagonal_diverges() {
        let a = TridiagonalMatrix::new(4, 1.0, 0.0, 1.0);
        let rhs = Array1::zeros(4);
        let x0 = array![1.0, 0.0, 0.0, 0.0];

        let err = gauss_seidel(&a, &rhs, &x0, &RelaxationConfig::default()).unwrap_err();

        match err {
            RelaxationError::Diverged { row, sweep } => {
                assert_eq!(row, 1);
                assert_eq!(sweep, 1);
            }
            other => panic!("expected Diverged, got {other:?}"),
        }
    }

    #[test]
    fn test_sweep_budget_exhausted() {
        let a = TridiagonalMatrix::new(5, -1.0, 2.0, -1.0);
        let rhs = Array1::zeros(5);
        let x0 = array![1.0, 0.0, 0.0, 0.0, 0.0];
        let config = RelaxationConfig {
            tolerance: 1e-14,
            max_sweeps: 2,
            print_interval: 0,
        };

        let err = gauss_seidel(&a, &rhs, &x0, &config).unwrap_err();

        match err {
            RelaxationError::SweepBudgetExhausted {
                max_sweeps,
                last_change,
            } => {
                assert_eq!(max_sweeps, 2);
                assert!(last_change.is_finite());
            }
            other => panic!("expected SweepBudgetExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_endpoints_held_fixed() {
        let a = TridiagonalMatrix::new(5, -1.0, 2.0, -1.0);
        let rhs = Array1::zeros(5);
        let x0 = array![7.5, 0.0, 0.0, 0.0, -3.25];

        let solution = gauss_seidel(&a, &rhs, &x0, &RelaxationConfig::default()).unwrap();

        assert_eq!(solution.x[0], 7.5);
        assert_eq!(solution.x[4], -3.25);
    }

    #[test]
    fn test_two_point_system_is_trivial() {
        // No interior points: the first sweep observes zero change.
        let a = TridiagonalMatrix::new(2, -1.0, 2.0, -1.0);
        let rhs = Array1::zeros(2);
        let x0 = array![1.0, 0.0];

        let solution = gauss_seidel(&a, &rhs, &x0, &RelaxationConfig::default()).unwrap();

        assert_eq!(solution.sweeps, 1);
        assert_eq!(solution.x, x0);
    }

    #[test]
    fn test_invalid_configuration_fails_fast() {
        let a = TridiagonalMatrix::new(4, -1.0, 2.0, -1.0);
        let rhs = Array1::zeros(4);
        let x0 = array![1.0, 0.0, 0.0, 0.0];

        let bad_tol = RelaxationConfig {
            tolerance: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            gauss_seidel(&a, &rhs, &x0, &bad_tol),
            Err(RelaxationError::NonPositiveTolerance(_))
        ));

        let no_budget = RelaxationConfig {
            max_sweeps: 0,
            ..Default::default()
        };
        assert!(matches!(
            gauss_seidel(&a, &rhs, &x0, &no_budget),
            Err(RelaxationError::ZeroSweepBudget)
        ));

        let short = array![1.0, 0.0, 0.0];
        assert!(matches!(
            gauss_seidel(&a, &rhs, &short, &RelaxationConfig::default()),
            Err(RelaxationError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_resolving_is_deterministic() {
        let a = TridiagonalMatrix::new(6, -1.0, 2.0, -1.0);
        let rhs = Array1::zeros(6);
        let x0 = array![1.0, 0.8, 0.6, 0.4, 0.2, 0.0];
        let config = RelaxationConfig::default();

        let first = gauss_seidel(&a, &rhs, &x0, &config).unwrap();
        let second = gauss_seidel(&a, &rhs, &x0, &config).unwrap();

        assert_eq!(first.x, second.x);
        assert_eq!(first.sweeps, second.sweeps);
    }
}
