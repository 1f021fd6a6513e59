// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Errors from projection operations.
///
/// Degenerate inputs (empty sets, singletons, zero variance) are not errors;
/// the only failure is a row whose length disagrees with the first row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("dimension mismatch at row {row}: expected {expected}, got {got}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
