//! Finite-difference discretization schemes
//!
//! The governing equation is the steady 1-D convection-diffusion balance:
//! diffusion scaled by `1 / Pe` against first-order convection. Both
//! schemes discretize the second derivative with the centered three-point
//! formula; they differ in the first-derivative term.

use serde::{Deserialize, Serialize};

/// Three-point stencil coefficients relating a node to its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stencil {
    /// Coefficient of the left neighbor `T[i-1]`
    pub left: f64,
    /// Coefficient of the node itself `T[i]`
    pub center: f64,
    /// Coefficient of the right neighbor `T[i+1]`
    pub right: f64,
}

/// Discretization of the convective first-derivative term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// Centered first derivative: second-order, but prone to oscillation
    /// and divergence as the Peclet number grows
    CenteredCentered,
    /// Forward (upwind) first derivative: first-order, introduces numerical
    /// diffusion but tolerates stronger convection
    ForwardCentered,
}

impl Scheme {
    /// Stencil for Peclet number `peclet` and grid spacing `dx`.
    ///
    /// Pure arithmetic. The caller guarantees `peclet > 0` and `dx > 0`;
    /// both divisions are otherwise undefined.
    pub fn stencil(&self, peclet: f64, dx: f64) -> Stencil {
        let dx2 = dx * dx;
        match self {
            Scheme::CenteredCentered => Stencil {
                left: 1.0 / (peclet * dx2) + 1.0 / (2.0 * dx),
                center: -2.0 / (peclet * dx2),
                right: 1.0 / (peclet * dx2) - 1.0 / (2.0 * dx),
            },
            Scheme::ForwardCentered => Stencil {
                left: 1.0 / (peclet * dx2),
                center: 1.0 / dx - 2.0 / (peclet * dx2),
                right: 1.0 / (peclet * dx2) - 1.0 / dx,
            },
        }
    }

    /// Human-readable label for log and report lines
    pub fn label(&self) -> &'static str {
        match self {
            Scheme::CenteredCentered => "centered-centered",
            Scheme::ForwardCentered => "forward-centered",
        }
    }
}
