// SPDX-License-Identifier: MIT OR Apache-2.0
//! Principal component projection onto two axes.
//!
//! The top two eigenvectors of the sample covariance are found with power
//! iteration and deflation; each centered row is then expressed in that basis.
//! Output is positional: `points[i]` belongs to `data[i]`.
//!
//! Power iteration starts from a random vector, so coordinates are only
//! reproducible for a fixed RNG seed. Degenerate covariance (for example every
//! row identical) can rotate or reflect the result between runs.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProjectionError, Result};
use crate::linalg::{center, column_means, covariance, deflate, dot, SquareMatrix};
use crate::power::{power_iteration, PowerIterationConfig};

/// A projected point. Carries no identity; zip it back by index.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Full output of a fit: the points plus the basis that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub points: Vec<Point2D>,
    /// First and second principal directions (unit length unless degenerate).
    pub components: [Vec<f64>; 2],
    /// Rayleigh quotients of the two components against the covariance.
    pub eigenvalues: [f64; 2],
    /// Per-dimension mean subtracted before projecting.
    pub mean: Vec<f64>,
}

impl Projection {
    fn empty() -> Self {
        Self {
            points: Vec::new(),
            components: [Vec::new(), Vec::new()],
            eigenvalues: [0.0, 0.0],
            mean: Vec::new(),
        }
    }

    /// Share of total variance captured by the two components, in `[0, 1]`.
    ///
    /// Returns `None` when the data has no variance.
    pub fn explained_variance(&self, total_variance: f64) -> Option<f64> {
        if total_variance <= 0.0 {
            return None;
        }
        let captured = self.eigenvalues[0].max(0.0) + self.eigenvalues[1].max(0.0);
        Some((captured / total_variance).clamp(0.0, 1.0))
    }
}

/// PCA projector with configurable power-iteration stopping rules.
#[derive(Debug, Clone, Default)]
pub struct PcaProjector {
    config: PowerIterationConfig,
}

impl PcaProjector {
    pub fn new(config: PowerIterationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &PowerIterationConfig {
        &self.config
    }

    /// Project every row to 2D.
    pub fn project<V, R>(&self, data: &[V], rng: &mut R) -> Result<Vec<Point2D>>
    where
        V: AsRef<[f64]>,
        R: Rng + ?Sized,
    {
        self.fit(data, rng).map(|p| p.points)
    }

    /// Project every row and keep the fitted basis.
    pub fn fit<V, R>(&self, data: &[V], rng: &mut R) -> Result<Projection>
    where
        V: AsRef<[f64]>,
        R: Rng + ?Sized,
    {
        let dim = check_rectangular(data)?;

        match data.len() {
            0 => return Ok(Projection::empty()),
            1 => {
                return Ok(Projection {
                    points: vec![Point2D::ORIGIN],
                    components: [vec![0.0; dim], vec![0.0; dim]],
                    eigenvalues: [0.0, 0.0],
                    mean: data[0].as_ref().to_vec(),
                });
            },
            _ => {},
        }

        let mean = column_means(data, dim);
        let centered = center(data, &mean);
        let cov = covariance(&centered, dim);

        let first = power_iteration(&cov, &self.config, rng);
        let deflated = deflate(&cov, &first.vector, first.eigenvalue);
        let second = power_iteration(&deflated, &self.config, rng);

        debug!(
            rows = data.len(),
            dim,
            lambda1 = first.eigenvalue,
            lambda2 = second.eigenvalue,
            converged1 = first.converged,
            converged2 = second.converged,
            "fitted principal components"
        );

        let points = centered
            .iter()
            .map(|row| Point2D::new(dot(row, &first.vector), dot(row, &second.vector)))
            .collect();

        Ok(Projection {
            points,
            components: [first.vector, second.vector],
            eigenvalues: [first.eigenvalue, second.eigenvalue],
            mean,
        })
    }
}

/// Project with default settings and the thread-local RNG.
pub fn project<V: AsRef<[f64]>>(data: &[V]) -> Result<Vec<Point2D>> {
    PcaProjector::default().project(data, &mut rand::rng())
}

/// Project with default settings and a caller-supplied RNG.
pub fn project_with_rng<V, R>(data: &[V], rng: &mut R) -> Result<Vec<Point2D>>
where
    V: AsRef<[f64]>,
    R: Rng + ?Sized,
{
    PcaProjector::default().project(data, rng)
}

/// Sum of per-dimension sample variances (the covariance trace).
pub fn total_variance<V: AsRef<[f64]>>(data: &[V]) -> Result<f64> {
    let dim = check_rectangular(data)?;
    if data.len() < 2 {
        return Ok(0.0);
    }
    let mean = column_means(data, dim);
    let cov = covariance(&center(data, &mean), dim);
    Ok((0..dim).map(|i| cov.get(i, i)).sum())
}

/// Covariance matrix of the rows, or `None` for fewer than two rows.
pub fn covariance_matrix<V: AsRef<[f64]>>(data: &[V]) -> Result<Option<SquareMatrix>> {
    let dim = check_rectangular(data)?;
    if data.len() < 2 {
        return Ok(None);
    }
    let mean = column_means(data, dim);
    Ok(Some(covariance(&center(data, &mean), dim)))
}

fn check_rectangular<V: AsRef<[f64]>>(data: &[V]) -> Result<usize> {
    let Some(first) = data.first() else {
        return Ok(0);
    };
    let expected = first.as_ref().len();
    for (row, v) in data.iter().enumerate().skip(1) {
        let got = v.as_ref().len();
        if got != expected {
            return Err(ProjectionError::DimensionMismatch { row, expected, got });
        }
    }
    Ok(expected)
}
