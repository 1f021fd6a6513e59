// SPDX-License-Identifier: MIT OR Apache-2.0
//! The six quiz dimensions and their fixed ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraitError;

/// Number of trait dimensions in a quiz answer.
pub const TRAIT_COUNT: usize = 6;
/// Lowest allowed score on any dimension.
pub const MIN_SCORE: f64 = 0.0;
/// Highest allowed score on any dimension.
pub const MAX_SCORE: f64 = 10.0;

/// One axis of the personality vector.
///
/// Declaration order is the component order of every vector; index 0 is
/// `Sporty`. Tie-breaks and serialization both depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitDimension {
    Sporty,
    Creative,
    Social,
    Logical,
    Adventurous,
    Calm,
}

impl TraitDimension {
    pub const ALL: [Self; TRAIT_COUNT] = [
        Self::Sporty,
        Self::Creative,
        Self::Social,
        Self::Logical,
        Self::Adventurous,
        Self::Calm,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < TRAIT_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sporty => "sporty",
            Self::Creative => "creative",
            Self::Social => "social",
            Self::Logical => "logical",
            Self::Adventurous => "adventurous",
            Self::Calm => "calm",
        }
    }

    /// Prompt shown for this dimension in the quiz.
    pub const fn question(self) -> &'static str {
        match self {
            Self::Sporty => "How sporty are you?",
            Self::Creative => "How creative are you?",
            Self::Social => "How social are you?",
            Self::Logical => "How logical are you?",
            Self::Adventurous => "How adventurous are you?",
            Self::Calm => "How calm are you?",
        }
    }
}

impl fmt::Display for TraitDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraitDimension {
    type Err = TraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| TraitError::UnknownDimension(s.to_string()))
    }
}
