// SPDX-License-Identifier: MIT OR Apache-2.0
//! Trait Projection - 2D layout of trait vectors via PCA
//!
//! Reduces N D-dimensional vectors to N points on a plane using the top two
//! principal components of the sample covariance. Eigenvectors are estimated
//! with power iteration plus deflation, which is all a six-dimensional
//! covariance needs. No matrix-decomposition dependency.
//!
//! # Example
//!
//! ```rust,ignore
//! use trait_projection::{fit_to_viewport, project, Viewport};
//!
//! let data = vec![
//!     vec![10.0, 0.0, 0.0, 0.0, 0.0, 0.0],
//!     vec![0.0, 10.0, 0.0, 0.0, 0.0, 0.0],
//!     vec![5.0, 5.0, 0.0, 0.0, 0.0, 0.0],
//! ];
//! let points = project(&data)?;
//! let on_screen = fit_to_viewport(&points, &Viewport::default());
//! ```
//!
//! # Determinism
//!
//! The starting vector for power iteration is random. Pass a seeded RNG to
//! [`PcaProjector::project`] or [`project_with_rng`] for reproducible output;
//! [`project`] uses the thread-local generator, so concurrent calls never
//! share mutable RNG state.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

mod error;
mod layout;
mod linalg;
mod pca;
mod power;

pub use error::{ProjectionError, Result};
pub use layout::{fit_to_viewport, Viewport};
pub use linalg::SquareMatrix;
pub use pca::{
    covariance_matrix, project, project_with_rng, total_variance, PcaProjector, Point2D,
    Projection,
};
pub use power::{
    power_iteration, EigenEstimate, PowerIterationConfig, DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE,
};
