// SPDX-License-Identifier: MIT OR Apache-2.0
//! Power iteration for the dominant eigenvector of a symmetric matrix.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProjectionError, Result};
use crate::linalg::{displacement, mat_vec_mul, normalize, rayleigh_quotient, SquareMatrix};

/// Default hard cap on refinement steps.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Default displacement between successive iterates treated as converged.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Stopping rules for power iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerIterationConfig {
    /// Maximum number of matrix-vector products. Never unbounded.
    pub max_iterations: usize,
    /// Stop once successive normalized iterates are closer than this.
    pub tolerance: f64,
}

impl Default for PowerIterationConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl PowerIterationConfig {
    /// Cheaper settings for interactive redraws.
    pub const fn fast() -> Self {
        Self {
            max_iterations: 30,
            tolerance: 1e-6,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ProjectionError::InvalidConfig(
                "max_iterations must be greater than 0".into(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ProjectionError::InvalidConfig(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Result of one power-iteration run.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenEstimate {
    /// Unit-length estimate, or the zero vector when the matrix annihilates it.
    pub vector: Vec<f64>,
    /// Rayleigh quotient `vᵀ·M·v` of the final iterate.
    pub eigenvalue: f64,
    /// Matrix-vector products performed.
    pub iterations: usize,
    /// Whether the tolerance was reached before the cap.
    pub converged: bool,
}

/// Estimate the dominant eigenvector of `matrix`.
///
/// Starts from a random unit vector drawn from `rng` and repeatedly applies
/// `v <- normalize(M·v)`. Hitting the iteration cap is not an error; the last
/// iterate is returned with `converged == false`.
pub fn power_iteration<R: Rng + ?Sized>(
    matrix: &SquareMatrix,
    config: &PowerIterationConfig,
    rng: &mut R,
) -> EigenEstimate {
    let dim = matrix.dim();
    let start: Vec<f64> = (0..dim).map(|_| rng.random_range(-0.5..0.5)).collect();
    let mut v = normalize(start);

    let mut iterations = 0;
    let mut converged = false;
    while iterations < config.max_iterations {
        iterations += 1;
        let next = normalize(mat_vec_mul(matrix, &v));
        let diff = displacement(&v, &next);
        v = next;
        if diff < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        debug!(
            dim,
            iterations,
            tolerance = config.tolerance,
            "power iteration hit iteration cap"
        );
    }

    let eigenvalue = rayleigh_quotient(matrix, &v);
    EigenEstimate {
        vector: v,
        eigenvalue,
        iterations,
        converged,
    }
}
