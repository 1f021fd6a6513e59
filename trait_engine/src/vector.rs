// SPDX-License-Identifier: MIT OR Apache-2.0
//! Validated six-dimensional trait vectors.

use serde::{Deserialize, Serialize};

use crate::dimension::{TraitDimension, MAX_SCORE, MIN_SCORE, TRAIT_COUNT};
use crate::error::{Result, TraitError};
use crate::metrics::{dominant_component, euclidean_distance};

/// Raw quiz answers keyed by dimension name, before range validation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TraitScores {
    pub sporty: f64,
    pub creative: f64,
    pub social: f64,
    pub logical: f64,
    pub adventurous: f64,
    pub calm: f64,
}

/// A quiz result: one score in `[0, 10]` per [`TraitDimension`], in fixed order.
///
/// Immutable once built. Serializes as a map of dimension names so stored
/// answers stay readable; deserializing re-runs range validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TraitScores", into = "TraitScores")]
pub struct TraitVector([f64; TRAIT_COUNT]);

impl TraitVector {
    pub fn new(scores: [f64; TRAIT_COUNT]) -> Result<Self> {
        for (dimension, &value) in TraitDimension::ALL.iter().zip(scores.iter()) {
            if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(TraitError::ScoreOutOfRange {
                    dimension: *dimension,
                    value,
                });
            }
        }
        Ok(Self(scores))
    }

    pub fn from_slice(scores: &[f64]) -> Result<Self> {
        let array: [f64; TRAIT_COUNT] =
            scores
                .try_into()
                .map_err(|_| TraitError::DimensionMismatch {
                    expected: TRAIT_COUNT,
                    got: scores.len(),
                })?;
        Self::new(array)
    }

    #[inline]
    pub const fn get(&self, dimension: TraitDimension) -> f64 {
        self.0[dimension.index()]
    }

    #[inline]
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitDimension, f64)> + '_ {
        TraitDimension::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Highest-scoring dimension; the earlier dimension wins ties.
    pub fn dominant_trait(&self) -> TraitDimension {
        dominant_component(&self.0)
            .ok()
            .and_then(TraitDimension::from_index)
            .unwrap_or(TraitDimension::Sporty)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        // Both sides are fixed-length arrays, so the length check cannot fail.
        euclidean_distance(&self.0, &other.0).unwrap_or(0.0)
    }
}

impl AsRef<[f64]> for TraitVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<TraitScores> for TraitVector {
    type Error = TraitError;

    fn try_from(s: TraitScores) -> Result<Self> {
        Self::new([
            s.sporty,
            s.creative,
            s.social,
            s.logical,
            s.adventurous,
            s.calm,
        ])
    }
}

impl From<TraitVector> for TraitScores {
    fn from(v: TraitVector) -> Self {
        let [sporty, creative, social, logical, adventurous, calm] = v.0;
        Self {
            sporty,
            creative,
            social,
            logical,
            adventurous,
            calm,
        }
    }
}

impl TryFrom<&[f64]> for TraitVector {
    type Error = TraitError;

    fn try_from(scores: &[f64]) -> Result<Self> {
        Self::from_slice(scores)
    }
}
