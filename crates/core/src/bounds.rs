//! Rectangular field extent.
//!
//! Bounds are continuous (`f64` extents), fixed at construction, and used
//! by the reflection rule: a particle whose coordinate leaves
//! `[0, extent]` on an axis has that axis's velocity negated.

use crate::error::FieldError;
use crate::prng::Xorshift64;
use glam::DVec2;

/// The rectangular extent `[0, width] x [0, height]` of a particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    /// Creates bounds with the given extents.
    ///
    /// Returns `FieldError::InvalidConfiguration` if either extent is
    /// non-positive or non-finite.
    pub fn new(width: f64, height: f64) -> Result<Self, FieldError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(FieldError::InvalidConfiguration(format!(
                "bounds must be positive and finite, got {width} x {height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Field width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Field height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns true if `point` lies within the extent, edges inclusive.
    pub fn contains(&self, point: DVec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Draws a uniformly random point within the extent.
    pub fn random_point(&self, rng: &mut Xorshift64) -> DVec2 {
        DVec2::new(
            rng.next_range(0.0, self.width),
            rng.next_range(0.0, self.height),
        )
    }
}
