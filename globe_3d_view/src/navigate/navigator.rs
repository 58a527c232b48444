/// Navigator: per-frame camera pose provider.

use glam::{DMat4, DVec3};
use crate::error::{Error, Result};
use crate::globe::Globe;

/// Sine of the smallest angle allowed between `up` and the view direction
const MIN_UP_SINE: f64 = 1e-9;

/// Camera pose for one frame, in globe Cartesian coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorPose {
    pub eye_point: DVec3,
    pub look_at_point: DVec3,
    /// Approximate up direction; need not be orthogonal to the view direction
    pub up: DVec3,
    /// Distance from the eye to the look-at point
    pub range: f64,
}

impl NavigatorPose {
    /// Pose from eye, target and up; the range is the eye-to-target distance
    pub fn new(eye_point: DVec3, look_at_point: DVec3, up: DVec3) -> Self {
        Self { eye_point, look_at_point, up, range: eye_point.distance(look_at_point) }
    }

    /// Unit view direction, zero if eye and target coincide
    pub fn forward(&self) -> DVec3 {
        (self.look_at_point - self.eye_point).normalize_or_zero()
    }

    /// Reject non-finite components and degenerate look-at frames
    pub fn validate(&self) -> Result<()> {
        if !self.eye_point.is_finite() {
            return Err(Error::non_finite("eye point"));
        }
        if !self.look_at_point.is_finite() {
            return Err(Error::non_finite("look-at point"));
        }
        if !self.up.is_finite() {
            return Err(Error::non_finite("up vector"));
        }

        let forward = self.forward();
        if forward == DVec3::ZERO {
            return Err(Error::DegenerateGeometry(
                "eye point and look-at point coincide".to_string(),
            ));
        }
        let up = self.up.normalize_or_zero();
        if forward.cross(up).length() < MIN_UP_SINE {
            return Err(Error::DegenerateGeometry(
                "up vector is zero or parallel to the view direction".to_string(),
            ));
        }
        Ok(())
    }

    /// World-to-eye transform: eye at the origin looking down -Z, +Y up
    pub fn modelview(&self) -> Result<DMat4> {
        self.validate()?;
        Ok(DMat4::look_at_rh(self.eye_point, self.look_at_point, self.up.normalize()))
    }
}

/// Source of the camera pose.
///
/// Queried once per `DrawContext::reset`. The globe is passed so navigators
/// expressed in geographic terms can place themselves on its surface.
pub trait Navigator {
    fn pose(&self, globe: &Globe) -> Result<NavigatorPose>;
}

/// A fixed pose is its own navigator
impl Navigator for NavigatorPose {
    fn pose(&self, _globe: &Globe) -> Result<NavigatorPose> {
        Ok(*self)
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod tests;
