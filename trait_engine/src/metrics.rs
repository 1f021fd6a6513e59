// SPDX-License-Identifier: MIT OR Apache-2.0
//! Distance and dominant-component helpers over plain score slices.

use crate::error::{Result, TraitError};

/// Euclidean (L2) distance between two equal-length vectors.
///
/// Mismatched lengths are rejected rather than truncated.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(TraitError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    let sum_sq: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum();
    Ok(sum_sq.sqrt())
}

/// Index of the largest component. The lowest index wins ties.
pub fn dominant_component(v: &[f64]) -> Result<usize> {
    let (first, rest) = v.split_first().ok_or(TraitError::EmptyVector)?;
    let mut best = 0;
    let mut best_value = *first;
    for (i, &x) in rest.iter().enumerate() {
        if x > best_value {
            best = i + 1;
            best_value = x;
        }
    }
    Ok(best)
}

/// Largest possible distance between two vectors of `dimensions` scores in `[min, max]`.
pub fn max_distance(dimensions: usize, min: f64, max: f64) -> f64 {
    let span = max - min;
    (dimensions as f64 * span * span).sqrt()
}

/// Map a distance to a similarity in `[0, 1]`, where 1 means identical.
pub fn similarity(distance: f64, max_distance: f64) -> f64 {
    if max_distance <= 0.0 {
        return 1.0;
    }
    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}
