/// Viewport: the device-pixel rectangle a frame is rendered into.
///
/// Origin is the lower-left corner (GL convention), Y up.

use glam::DVec2;
use crate::error::{Error, Result};

/// Device-pixel viewport rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport anchored at the origin
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width / height
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Reject empty or non-finite viewports
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "viewport must have finite origin and positive size, got {}x{} at ({}, {})",
                self.width, self.height, self.x, self.y
            )))
        }
    }

    /// Whether a viewport-space point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
