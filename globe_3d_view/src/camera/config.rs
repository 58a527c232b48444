/// Draw context configuration

use crate::error::{Error, Result};
use super::clip_distance::ClipDistanceParams;

/// What `project` does with points outside the near/far depth range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthClipping {
    /// Points in front of near or beyond far fail with `InvalidArgument`
    #[default]
    Clip,
    /// Such points project with a depth outside [0, 1]
    Unclipped,
}

/// Draw context configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DrawContextConfig {
    /// Field of view across the viewport's shorter dimension, degrees
    pub field_of_view_degrees: f64,
    /// Depth buffer bits the near distance is tuned for
    pub depth_bits: u32,
    /// Depth resolution to keep at the far plane, metres
    pub far_resolution: f64,
    /// Altitude whose horizon the far plane always reaches, metres
    pub atmosphere_altitude: f64,
    pub min_far_distance: f64,
    pub min_near_distance: f64,
    /// Multiplier applied to elevation bounds
    pub vertical_exaggeration: f64,
    /// Device pixels per window unit
    pub pixel_ratio: f64,
    pub depth_clipping: DepthClipping,
}

impl Default for DrawContextConfig {
    fn default() -> Self {
        Self {
            field_of_view_degrees: 2.0 * 0.5_f64.atan().to_degrees(),
            depth_bits: 24,
            far_resolution: 10.0,
            atmosphere_altitude: 160000.0,
            min_far_distance: 1e3,
            min_near_distance: 1.0,
            vertical_exaggeration: 1.0,
            pixel_ratio: 1.0,
            depth_clipping: DepthClipping::Clip,
        }
    }
}

impl DrawContextConfig {
    /// Reject values that would make every frame fail or produce garbage
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidArgument(msg));

        if !(self.field_of_view_degrees > 0.0 && self.field_of_view_degrees < 180.0) {
            return invalid(format!(
                "field_of_view_degrees must be in (0, 180), got {}",
                self.field_of_view_degrees
            ));
        }
        if !(1..=32).contains(&self.depth_bits) {
            return invalid(format!("depth_bits must be in 1..=32, got {}", self.depth_bits));
        }
        if !(self.far_resolution.is_finite() && self.far_resolution > 0.0) {
            return invalid(format!("far_resolution must be positive, got {}", self.far_resolution));
        }
        if !(self.atmosphere_altitude.is_finite() && self.atmosphere_altitude >= 0.0) {
            return invalid(format!(
                "atmosphere_altitude must be non-negative, got {}",
                self.atmosphere_altitude
            ));
        }
        if !(self.min_near_distance.is_finite() && self.min_near_distance > 0.0) {
            return invalid(format!(
                "min_near_distance must be positive, got {}",
                self.min_near_distance
            ));
        }
        if !(self.min_far_distance.is_finite() && self.min_far_distance > self.min_near_distance) {
            return invalid(format!(
                "min_far_distance must exceed min_near_distance, got {} <= {}",
                self.min_far_distance, self.min_near_distance
            ));
        }
        if !self.vertical_exaggeration.is_finite() || self.vertical_exaggeration < 0.0 {
            return invalid(format!(
                "vertical_exaggeration must be non-negative, got {}",
                self.vertical_exaggeration
            ));
        }
        if !(self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0) {
            return invalid(format!("pixel_ratio must be positive, got {}", self.pixel_ratio));
        }
        Ok(())
    }

    pub(crate) fn clip_distance_params(&self) -> ClipDistanceParams {
        ClipDistanceParams {
            depth_bits: self.depth_bits,
            far_resolution: self.far_resolution,
            atmosphere_altitude: self.atmosphere_altitude,
            min_far_distance: self.min_far_distance,
            min_near_distance: self.min_near_distance,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
