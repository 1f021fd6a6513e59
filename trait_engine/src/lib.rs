// SPDX-License-Identifier: MIT OR Apache-2.0
//! Trait Engine - personality vectors, matching and the admin atlas
//!
//! Quiz answers are six scores in `[0, 10]`, one per [`TraitDimension`].
//! This crate validates them, ranks nearest neighbors by Euclidean distance,
//! and lays the whole population out on a plane via PCA for the admin view.
//!
//! # Features
//!
//! - **Validated vectors**: [`TraitVector`] enforces length and range once, at construction
//! - **Metrics**: [`euclidean_distance`] and [`dominant_component`] over plain slices
//! - **Matching**: [`rank_neighbors`] sorts candidates ascending by distance, top-K optional
//! - **Atlas**: [`build_atlas`] projects, fits to a viewport and links similar pairs
//! - **Index**: [`TraitIndex`] keeps keyed vectors in memory behind a `RwLock`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use trait_engine::{TraitIndex, TraitVector};
//!
//! let index = TraitIndex::new();
//! index.upsert(1, TraitVector::new([8.0, 2.0, 9.0, 1.0, 3.0, 5.0])?);
//! index.upsert(2, TraitVector::new([7.0, 3.0, 9.0, 1.0, 4.0, 5.0])?);
//!
//! let matches = index.matches_for(1)?;
//! let atlas = index.atlas(&mut rand::rng())?;
//! ```
//!
//! Identity stays with the caller: keys are opaque integers, and projection
//! output is matched back to input by position.

#![allow(clippy::cast_precision_loss)] // usize dimension counts into f64 are tiny
#![allow(clippy::missing_errors_doc)] // Error conditions are self-evident from Result types
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_panics_doc)]

mod atlas;
mod config;
mod dimension;
mod error;
mod index;
mod matching;
mod metrics;
mod vector;

pub use atlas::{build_atlas, Atlas, AtlasNode};
pub use config::{
    env_parse, EngineConfig, ENV_LINK_THRESHOLD, ENV_MAX_ITERATIONS, ENV_PARALLEL_THRESHOLD,
    ENV_TOLERANCE, ENV_TOP_K,
};
pub use dimension::{TraitDimension, MAX_SCORE, MIN_SCORE, TRAIT_COUNT};
pub use error::{Result, TraitError};
pub use index::TraitIndex;
pub use matching::{rank_neighbors, similarity_links, MatchOptions, SimilarityLink, TraitMatch};
pub use metrics::{dominant_component, euclidean_distance, max_distance, similarity};
pub use vector::{TraitScores, TraitVector};

// Re-export projection types so callers need only one dependency.
pub use trait_projection::{Point2D, PowerIterationConfig, Viewport};
