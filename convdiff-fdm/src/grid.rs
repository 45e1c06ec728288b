//! Uniform 1-D grids
//!
//! A grid spans `[x0, xn]` with `n` equal intervals, so `n + 1` nodes and
//! spacing `dx = (xn - x0) / n`.

use crate::error::FdmError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A validated uniform 1-D grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid1d {
    x0: f64,
    xn: f64,
    intervals: usize,
}

impl Grid1d {
    /// Create a grid over `[x0, xn]` with `intervals` equal intervals.
    ///
    /// Fails when `intervals < 1` or the bounds are not finite with
    /// `x0 < xn`, so spacing is guaranteed strictly positive afterwards.
    pub fn new(x0: f64, xn: f64, intervals: usize) -> Result<Self, FdmError> {
        if intervals < 1 {
            return Err(FdmError::TooFewIntervals(intervals));
        }
        if !x0.is_finite() || !xn.is_finite() || x0 >= xn {
            return Err(FdmError::InvalidDomain { x0, xn });
        }
        Ok(Self { x0, xn, intervals })
    }

    /// Grid over the unit interval `[0, 1]`
    pub fn unit(intervals: usize) -> Result<Self, FdmError> {
        Self::new(0.0, 1.0, intervals)
    }

    /// Left domain bound
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Right domain bound
    pub fn xn(&self) -> f64 {
        self.xn
    }

    /// Number of intervals `n`
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Number of nodes, `n + 1`
    pub fn num_points(&self) -> usize {
        self.intervals + 1
    }

    /// Node spacing `dx`
    pub fn spacing(&self) -> f64 {
        (self.xn - self.x0) / self.intervals as f64
    }

    /// Node positions `x0 + i * dx` for `i in 0..=n`
    pub fn positions(&self) -> Array1<f64> {
        let dx = self.spacing();
        Array1::from_iter((0..=self.intervals).map(|i| self.x0 + i as f64 * dx))
    }
}
