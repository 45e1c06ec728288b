//! Error types for the convection-diffusion problem layer.
//!
//! Configuration mistakes (bad Peclet number, degenerate grid) fail fast
//! before any iteration begins; numerical failures come back from the
//! relaxation solver and pass through unchanged.

use solvers::RelaxationError;
use thiserror::Error;

/// Errors that can occur while setting up or solving a problem.
#[derive(Debug, Error)]
pub enum FdmError {
    /// The Peclet number must be strictly positive.
    #[error("Peclet number must be positive, got {0}")]
    NonPositivePeclet(f64),

    /// The domain bounds are inverted, equal, or non-finite.
    #[error("invalid domain [{x0}, {xn}]: bounds must be finite with x0 < xn")]
    InvalidDomain {
        /// Left bound
        x0: f64,
        /// Right bound
        xn: f64,
    },

    /// A grid needs at least one interval.
    #[error("grid needs at least 1 interval, got {0}")]
    TooFewIntervals(usize),

    /// Boundary values must be finite.
    #[error("boundary value {0} is not finite")]
    NonFiniteBoundary(f64),

    /// The relaxation solver failed: divergence, exhausted sweep budget, or
    /// an invalid solver configuration.
    #[error(transparent)]
    Relaxation(#[from] RelaxationError),
}

impl FdmError {
    /// True when the failure is numerical (per-combination, recoverable by
    /// the caller) rather than a configuration mistake.
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            FdmError::Relaxation(
                RelaxationError::Diverged { .. } | RelaxationError::SweepBudgetExhausted { .. }
            )
        )
    }
}
