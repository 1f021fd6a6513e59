// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration for matching and the admin atlas.

use serde::{Deserialize, Serialize};
use trait_projection::{PowerIterationConfig, Viewport};

use crate::error::{Result, TraitError};
use crate::matching::MatchOptions;

/// Number of matches returned environment variable.
pub const ENV_TOP_K: &str = "KINDRED_TOP_K";
/// Similarity above which the atlas draws a link environment variable.
pub const ENV_LINK_THRESHOLD: &str = "KINDRED_LINK_THRESHOLD";
/// Candidate count that switches ranking to parallel environment variable.
pub const ENV_PARALLEL_THRESHOLD: &str = "KINDRED_PARALLEL_THRESHOLD";
/// Power iteration cap environment variable.
pub const ENV_MAX_ITERATIONS: &str = "KINDRED_MAX_ITERATIONS";
/// Power iteration tolerance environment variable.
pub const ENV_TOLERANCE: &str = "KINDRED_TOLERANCE";

/// Helpers for reading typed values from environment variables.
pub mod env_parse {
    use std::str::FromStr;

    use crate::error::{Result, TraitError};

    /// Parse any `FromStr` value from an environment variable.
    ///
    /// Returns `None` when the variable is unset.
    pub fn parse<T>(key: &str) -> Option<Result<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        std::env::var(key).ok().map(|val| {
            val.trim()
                .parse()
                .map_err(|e| TraitError::Configuration(format!("invalid {key}: {e}")))
        })
    }
}

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Matches returned per lookup.
    pub top_k: usize,
    /// Pairs more similar than this (0.0 to 1.0) are linked in the atlas.
    pub link_threshold: f64,
    /// Candidate count at which ranking switches to rayon.
    pub parallel_threshold: usize,
    /// Drawing area for atlas coordinates.
    pub viewport: Viewport,
    /// Stopping rules for the PCA eigenvector search.
    pub power_iteration: PowerIterationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            link_threshold: 0.7,
            parallel_threshold: 5000,
            viewport: Viewport::default(),
            power_iteration: PowerIterationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Cheaper projection and fewer links for frequent live redraws.
    pub fn interactive() -> Self {
        Self {
            link_threshold: 0.8,
            power_iteration: PowerIterationConfig::fast(),
            ..Self::default()
        }
    }

    /// Parallel ranking kicks in early; for large user populations.
    pub fn high_throughput() -> Self {
        Self {
            parallel_threshold: 1000,
            ..Self::default()
        }
    }

    /// Defaults overridden by any `KINDRED_*` variables that are set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(result) = env_parse::parse(ENV_TOP_K) {
            config.top_k = result?;
        }
        if let Some(result) = env_parse::parse(ENV_LINK_THRESHOLD) {
            config.link_threshold = result?;
        }
        if let Some(result) = env_parse::parse(ENV_PARALLEL_THRESHOLD) {
            config.parallel_threshold = result?;
        }
        if let Some(result) = env_parse::parse(ENV_MAX_ITERATIONS) {
            config.power_iteration.max_iterations = result?;
        }
        if let Some(result) = env_parse::parse(ENV_TOLERANCE) {
            config.power_iteration.tolerance = result?;
        }

        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejecting environment configuration");
            return Err(e);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(TraitError::Configuration(
                "top_k must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.link_threshold) {
            return Err(TraitError::Configuration(format!(
                "link_threshold must be between 0.0 and 1.0, got {}",
                self.link_threshold
            )));
        }
        if self.parallel_threshold == 0 {
            return Err(TraitError::Configuration(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }
        self.viewport.validate()?;
        self.power_iteration.validate()?;
        Ok(())
    }

    /// Ranking options derived from this config.
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions::new()
            .with_top_k(self.top_k)
            .with_parallel_threshold(self.parallel_threshold)
    }
}
