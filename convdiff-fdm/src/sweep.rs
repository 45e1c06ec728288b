//! Parameter-study orchestration
//!
//! A [`SweepPlan`] enumerates the cross product of schemes, Peclet numbers,
//! and grid sizes, solves every combination, and records the outcome of
//! each. A diverging combination is caught here, not propagated: its error
//! lands in the corresponding [`CaseOutcome`] and the remaining cases still
//! run. What to substitute for a failed case (a placeholder curve, a gap in
//! a table) is the consumer's decision.
//!
//! Independent combinations share nothing, so with the `rayon` feature the
//! sweep fans out across threads, one case per task.

use crate::error::FdmError;
use crate::grid::Grid1d;
use crate::problem::{ConvectionDiffusion, FieldSolution};
use crate::scheme::Scheme;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use solvers::RelaxationConfig;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Declarative description of a parameter study.
///
/// Carries everything that used to be a module-level constant in ad-hoc
/// study scripts: the parameter lists, the domain, the boundary values,
/// and the convergence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPlan {
    /// Discretization schemes to compare
    pub schemes: Vec<Scheme>,
    /// Peclet numbers to sweep
    pub peclet_values: Vec<f64>,
    /// Grid sizes (interval counts) to sweep
    pub grid_sizes: Vec<usize>,
    /// Left domain bound
    pub x0: f64,
    /// Right domain bound
    pub xn: f64,
    /// Boundary value at `x0`
    pub t0: f64,
    /// Boundary value at `xn`
    pub tn: f64,
    /// Convergence threshold for the relaxation solver
    pub tolerance: f64,
    /// Sweep budget for the relaxation solver
    pub max_sweeps: usize,
}

impl Default for SweepPlan {
    /// The classic study: both schemes over seven Peclet numbers on coarse
    /// and fine grids of the unit interval, temperature dropping from 1 to 0.
    fn default() -> Self {
        Self {
            schemes: vec![Scheme::CenteredCentered, Scheme::ForwardCentered],
            peclet_values: vec![0.1, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0],
            grid_sizes: vec![5, 20],
            x0: 0.0,
            xn: 1.0,
            t0: 1.0,
            tn: 0.0,
            tolerance: 5e-6,
            max_sweeps: 100_000,
        }
    }
}

/// Result of one (scheme, Peclet, grid size) combination.
#[derive(Debug)]
pub struct CaseOutcome {
    /// Discretization scheme used
    pub scheme: Scheme,
    /// Peclet number used
    pub peclet: f64,
    /// Number of grid intervals used
    pub intervals: usize,
    /// The converged field, or why this combination produced none
    pub result: Result<FieldSolution, FdmError>,
}

impl CaseOutcome {
    /// True when this combination produced a converged field
    pub fn converged(&self) -> bool {
        self.result.is_ok()
    }
}

impl SweepPlan {
    /// Solver configuration shared by every case in the plan
    pub fn solver_config(&self) -> RelaxationConfig {
        RelaxationConfig {
            tolerance: self.tolerance,
            max_sweeps: self.max_sweeps,
            print_interval: 0,
        }
    }

    /// Number of combinations the plan enumerates
    pub fn num_cases(&self) -> usize {
        self.schemes.len() * self.peclet_values.len() * self.grid_sizes.len()
    }

    /// Solve every combination, recording one outcome per case.
    ///
    /// Outcomes come back in enumeration order (grid size, then scheme,
    /// then Peclet number) regardless of how the work was scheduled.
    pub fn run(&self) -> Vec<CaseOutcome> {
        let cases = self.cases();

        #[cfg(feature = "rayon")]
        let outcomes: Vec<CaseOutcome> = cases
            .par_iter()
            .map(|&(scheme, peclet, intervals)| self.solve_case(scheme, peclet, intervals))
            .collect();

        #[cfg(not(feature = "rayon"))]
        let outcomes: Vec<CaseOutcome> = cases
            .iter()
            .map(|&(scheme, peclet, intervals)| self.solve_case(scheme, peclet, intervals))
            .collect();

        for outcome in &outcomes {
            match &outcome.result {
                Ok(solution) => log::debug!(
                    "{} Pe = {} n = {}: converged in {} sweeps",
                    outcome.scheme.label(),
                    outcome.peclet,
                    outcome.intervals,
                    solution.sweeps
                ),
                Err(err) => log::warn!(
                    "{} Pe = {} n = {}: {}",
                    outcome.scheme.label(),
                    outcome.peclet,
                    outcome.intervals,
                    err
                ),
            }
        }

        outcomes
    }

    fn cases(&self) -> Vec<(Scheme, f64, usize)> {
        let mut cases = Vec::with_capacity(self.num_cases());
        for &intervals in &self.grid_sizes {
            for &scheme in &self.schemes {
                for &peclet in &self.peclet_values {
                    cases.push((scheme, peclet, intervals));
                }
            }
        }
        cases
    }

    fn solve_case(&self, scheme: Scheme, peclet: f64, intervals: usize) -> CaseOutcome {
        let result = Grid1d::new(self.x0, self.xn, intervals)
            .and_then(|grid| ConvectionDiffusion::new(scheme, peclet, grid, self.t0, self.tn))
            .and_then(|problem| problem.solve(&self.solver_config()));

        CaseOutcome {
            scheme,
            peclet,
            intervals,
            result,
        }
    }
}

/// Pointwise difference between the two schemes' solutions of the same
/// problem: `centered - upwind`, one value per node.
///
/// The magnitude of this curve measures the numerical diffusion the upwind
/// scheme introduces on top of the physical diffusion; it grows with the
/// Peclet number. Fails if either scheme fails to converge.
pub fn scheme_difference(
    peclet: f64,
    grid: Grid1d,
    t0: f64,
    tn: f64,
    config: &RelaxationConfig,
) -> Result<Array1<f64>, FdmError> {
    let centered =
        ConvectionDiffusion::new(Scheme::CenteredCentered, peclet, grid, t0, tn)?.solve(config)?;
    let upwind =
        ConvectionDiffusion::new(Scheme::ForwardCentered, peclet, grid, t0, tn)?.solve(config)?;

    Ok(&centered.values - &upwind.values)
}
