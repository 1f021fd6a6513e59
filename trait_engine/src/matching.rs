// SPDX-License-Identifier: MIT OR Apache-2.0
//! Nearest-neighbor ranking and pairwise similarity links.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TraitError};
use crate::metrics::{euclidean_distance, similarity};

/// One ranked neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitMatch {
    /// Caller-supplied identifier of the candidate.
    pub key: i64,
    /// Euclidean distance to the target; lower is closer.
    pub distance: f64,
}

impl TraitMatch {
    pub const fn new(key: i64, distance: f64) -> Self {
        Self { key, distance }
    }
}

/// Options for [`rank_neighbors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Keep only the closest `top_k`. `None` returns every candidate.
    pub top_k: Option<usize>,
    /// Candidate to skip, usually the target itself.
    pub exclude_key: Option<i64>,
    /// Candidate count at which distances are computed with rayon.
    pub parallel_threshold: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            top_k: Some(5),
            exclude_key: None,
            parallel_threshold: 5000,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every candidate, fully ranked.
    pub fn all() -> Self {
        Self {
            top_k: None,
            ..Self::default()
        }
    }

    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub const fn excluding(mut self, key: i64) -> Self {
        self.exclude_key = Some(key);
        self
    }

    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Rank `candidates` by ascending distance to `target`.
///
/// Equal distances keep their input order. Any candidate whose length differs
/// from `target` fails the whole call; no partial ranking is returned.
pub fn rank_neighbors<V>(
    target: &[f64],
    candidates: &[(i64, V)],
    options: &MatchOptions,
) -> Result<Vec<TraitMatch>>
where
    V: AsRef<[f64]> + Sync,
{
    if options.top_k == Some(0) {
        return Err(TraitError::InvalidTopK);
    }

    let measure = |(key, v): &(i64, V)| -> Option<Result<TraitMatch>> {
        if options.exclude_key == Some(*key) {
            return None;
        }
        Some(euclidean_distance(target, v.as_ref()).map(|d| TraitMatch::new(*key, d)))
    };

    let mut results: Vec<TraitMatch> = if candidates.len() >= options.parallel_threshold {
        candidates
            .par_iter()
            .filter_map(measure)
            .collect::<Result<Vec<_>>>()?
    } else {
        candidates
            .iter()
            .filter_map(measure)
            .collect::<Result<Vec<_>>>()?
    };

    // Stable sort: ties keep input order
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    if let Some(k) = options.top_k {
        results.truncate(k);
    }
    Ok(results)
}

/// An undirected edge between two similar entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityLink {
    pub source: i64,
    pub target: i64,
    /// `1 - distance / max_distance`, in `[0, 1]`.
    pub similarity: f64,
}

/// Link every pair `(i, j)` with `i < j` whose similarity is strictly above `threshold`.
pub fn similarity_links<V>(
    entries: &[(i64, V)],
    threshold: f64,
    max_distance: f64,
) -> Result<Vec<SimilarityLink>>
where
    V: AsRef<[f64]>,
{
    let mut links = Vec::new();
    for (i, (source, a)) in entries.iter().enumerate() {
        for (target, b) in &entries[i + 1..] {
            let s = similarity(euclidean_distance(a.as_ref(), b.as_ref())?, max_distance);
            if s > threshold {
                links.push(SimilarityLink {
                    source: *source,
                    target: *target,
                    similarity: s,
                });
            }
        }
    }
    Ok(links)
}
