// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-memory keyed store of quiz results.
//!
//! The index owns no persistence; callers load it from their own storage and
//! push updates as answers arrive. Iteration order is ascending key order, so
//! atlas layouts are stable for a given population.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use rand::Rng;
use tracing::instrument;

use crate::atlas::{build_atlas, Atlas};
use crate::config::EngineConfig;
use crate::dimension::TraitDimension;
use crate::error::{Result, TraitError};
use crate::matching::{rank_neighbors, MatchOptions, TraitMatch};
use crate::vector::TraitVector;

/// Thread-safe map from caller key to [`TraitVector`].
pub struct TraitIndex {
    entries: RwLock<BTreeMap<i64, TraitVector>>,
    config: EngineConfig,
}

impl Default for TraitIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TraitIndex {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: RwLock::new(BTreeMap::new()),
            config,
        })
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Insert or replace. Returns the previous vector for `key`, if any.
    #[instrument(skip(self, vector))]
    pub fn upsert(&self, key: i64, vector: TraitVector) -> Option<TraitVector> {
        self.entries.write().insert(key, vector)
    }

    pub fn get(&self, key: i64) -> Option<TraitVector> {
        self.entries.read().get(&key).copied()
    }

    #[instrument(skip(self))]
    pub fn remove(&self, key: i64) -> Option<TraitVector> {
        self.entries.write().remove(&key)
    }

    pub fn contains(&self, key: i64) -> bool {
        self.entries.read().contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every entry, returning how many were removed.
    #[instrument(skip(self))]
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        count
    }

    pub fn keys(&self) -> Vec<i64> {
        self.entries.read().keys().copied().collect()
    }

    /// Copy of all entries in key order.
    pub fn snapshot(&self) -> Vec<(i64, TraitVector)> {
        self.entries.read().iter().map(|(k, v)| (*k, *v)).collect()
    }

    pub fn dominant_trait(&self, key: i64) -> Result<TraitDimension> {
        self.get(key)
            .map(|v| v.dominant_trait())
            .ok_or(TraitError::NotFound(key))
    }

    /// Closest other entries to `key`, using the configured `top_k`.
    pub fn matches_for(&self, key: i64) -> Result<Vec<TraitMatch>> {
        self.matches_for_with(key, &self.config.match_options())
    }

    /// Closest other entries to `key`. `key` itself is always excluded.
    #[instrument(skip(self, options), fields(top_k = ?options.top_k))]
    pub fn matches_for_with(&self, key: i64, options: &MatchOptions) -> Result<Vec<TraitMatch>> {
        let entries = self.snapshot();
        let target = entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or(TraitError::NotFound(key))?;
        let options = options.excluding(key);
        rank_neighbors(target.as_slice(), &entries, &options)
    }

    /// Closest entries to an arbitrary vector, e.g. before it is stored.
    #[instrument(skip(self, vector, options))]
    pub fn matches_for_vector(
        &self,
        vector: &TraitVector,
        options: &MatchOptions,
    ) -> Result<Vec<TraitMatch>> {
        let entries = self.snapshot();
        rank_neighbors(vector.as_slice(), &entries, options)
    }

    /// Lay out every entry for the admin view.
    #[instrument(skip(self, rng))]
    pub fn atlas<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Atlas> {
        let entries = self.snapshot();
        build_atlas(&entries, &self.config, rng)
    }
}
