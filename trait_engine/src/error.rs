// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;
use trait_projection::ProjectionError;

use crate::dimension::TraitDimension;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TraitError {
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("empty vector provided")]
    EmptyVector,

    #[error("{dimension} must be a number between 0 and 10, got {value}")]
    ScoreOutOfRange {
        dimension: TraitDimension,
        value: f64,
    },

    #[error("unknown trait dimension: {0}")]
    UnknownDimension(String),

    #[error("invalid top_k value (must be > 0)")]
    InvalidTopK,

    #[error("no trait vector stored for key {0}")]
    NotFound(i64),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("projection error: {0}")]
    Projection(#[from] ProjectionError),
}

pub type Result<T> = std::result::Result<T, TraitError>;
