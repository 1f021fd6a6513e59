// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fit projected points into a drawing area centered on the origin.

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::pca::Point2D;

/// Drawing area the projected cloud is scaled into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Margin removed from each side before scaling.
    pub padding: f64,
    /// Fraction of the padded area actually used (0.0 to 1.0).
    pub spread: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 100.0,
            spread: 0.6,
        }
    }
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: 100.0,
            spread: 0.6,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ProjectionError::InvalidConfig(
                "viewport width and height must be positive".into(),
            ));
        }
        if self.padding < 0.0 || 2.0 * self.padding >= self.width.min(self.height) {
            return Err(ProjectionError::InvalidConfig(format!(
                "padding {} leaves no drawable area",
                self.padding
            )));
        }
        if !(0.0..=1.0).contains(&self.spread) {
            return Err(ProjectionError::InvalidConfig(format!(
                "spread must be between 0.0 and 1.0, got {}",
                self.spread
            )));
        }
        Ok(())
    }

    fn graph_width(&self) -> f64 {
        (self.width - 2.0 * self.padding) * self.spread
    }

    fn graph_height(&self) -> f64 {
        (self.height - 2.0 * self.padding) * self.spread
    }
}

/// Min-max normalize each axis and scale into `viewport`, centered on (0, 0).
///
/// An axis with zero range is treated as range 1, so a single point or a
/// collapsed cloud lands on the left/top edge of the box rather than
/// producing NaN.
pub fn fit_to_viewport(points: &[Point2D], viewport: &Viewport) -> Vec<Point2D> {
    if points.is_empty() {
        return Vec::new();
    }

    let (x_min, x_max) = bounds(points.iter().map(|p| p.x));
    let (y_min, y_max) = bounds(points.iter().map(|p| p.y));
    let x_range = nonzero_range(x_max - x_min);
    let y_range = nonzero_range(y_max - y_min);

    let w = viewport.graph_width();
    let h = viewport.graph_height();

    points
        .iter()
        .map(|p| {
            Point2D::new(
                ((p.x - x_min) / x_range - 0.5) * w,
                ((p.y - y_min) / y_range - 0.5) * h,
            )
        })
        .collect()
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn nonzero_range(range: f64) -> f64 {
    if range == 0.0 {
        1.0
    } else {
        range
    }
}
