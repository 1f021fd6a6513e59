// SPDX-License-Identifier: MIT OR Apache-2.0
//! The admin atlas: every quiz result placed on a plane, colored by its
//! dominant trait, with links between similar pairs.

use rand::Rng;
use serde::{Deserialize, Serialize};
use trait_projection::{fit_to_viewport, PcaProjector};

use crate::config::EngineConfig;
use crate::dimension::{TraitDimension, MAX_SCORE, MIN_SCORE, TRAIT_COUNT};
use crate::error::Result;
use crate::matching::{similarity_links, SimilarityLink};
use crate::metrics::max_distance;
use crate::vector::TraitVector;

/// One positioned entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtlasNode {
    pub key: i64,
    pub x: f64,
    pub y: f64,
    /// Drives the node color.
    pub dominant: TraitDimension,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Atlas {
    /// Same order as the input entries.
    pub nodes: Vec<AtlasNode>,
    pub links: Vec<SimilarityLink>,
}

impl Atlas {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, key: i64) -> Option<&AtlasNode> {
        self.nodes.iter().find(|n| n.key == key)
    }
}

/// Lay out `entries` for display.
///
/// Fewer than two entries give an empty atlas; a lone point carries no layout
/// information.
pub fn build_atlas<R: Rng + ?Sized>(
    entries: &[(i64, TraitVector)],
    config: &EngineConfig,
    rng: &mut R,
) -> Result<Atlas> {
    if entries.len() < 2 {
        return Ok(Atlas::default());
    }

    let vectors: Vec<&TraitVector> = entries.iter().map(|(_, v)| v).collect();
    let projector = PcaProjector::new(config.power_iteration)?;
    let projected = projector.project(&vectors, rng)?;
    let fitted = fit_to_viewport(&projected, &config.viewport);

    let nodes = entries
        .iter()
        .zip(fitted)
        .map(|((key, vector), p)| AtlasNode {
            key: *key,
            x: p.x,
            y: p.y,
            dominant: vector.dominant_trait(),
        })
        .collect();

    let links = similarity_links(
        entries,
        config.link_threshold,
        max_distance(TRAIT_COUNT, MIN_SCORE, MAX_SCORE),
    )?;

    tracing::debug!(
        nodes = entries.len(),
        links = links.len(),
        "built trait atlas"
    );

    Ok(Atlas { nodes, links })
}
