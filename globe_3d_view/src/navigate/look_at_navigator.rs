/// LookAtNavigator: orbits a geographic look-at position.
///
/// The eye sits `range` metres from the look-at position. Heading turns the
/// view clockwise from north, tilt leans the eye away from the local
/// vertical, and roll turns the camera about its view axis.

use crate::error::{Error, Result};
use crate::globe::{Globe, Position, normalize_latitude, normalize_longitude};
use super::{Navigator, NavigatorPose};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAtNavigator {
    /// Point the camera looks at (degrees, metres)
    pub look_at_position: Position,
    /// Eye distance from the look-at position, metres
    pub range: f64,
    /// Degrees clockwise from north
    pub heading: f64,
    /// Degrees from the local vertical, 0 looks straight down
    pub tilt: f64,
    /// Degrees about the view axis
    pub roll: f64,
}

impl Default for LookAtNavigator {
    fn default() -> Self {
        Self {
            look_at_position: Position::new(30.0, -110.0, 0.0),
            range: 10e6,
            heading: 0.0,
            tilt: 0.0,
            roll: 0.0,
        }
    }
}

impl LookAtNavigator {
    pub fn new(look_at_position: Position, range: f64) -> Self {
        Self { look_at_position, range, ..Self::default() }
    }

    /// Clamp or wrap every field into its valid range
    pub fn apply_limits(&mut self) {
        let position = &mut self.look_at_position;
        position.latitude = normalize_latitude(position.latitude);
        position.longitude = normalize_longitude(position.longitude);
        self.heading = normalize_longitude(self.heading);
        self.roll = normalize_longitude(self.roll);
        self.tilt = self.tilt.clamp(0.0, 90.0);
        self.range = self.range.max(1.0);
    }

    fn validate(&self) -> Result<()> {
        if !self.look_at_position.is_finite() {
            return Err(Error::non_finite("look-at position"));
        }
        if !(self.heading.is_finite() && self.tilt.is_finite() && self.roll.is_finite()) {
            return Err(Error::non_finite("navigator orientation"));
        }
        if !(self.range.is_finite() && self.range > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "navigator range must be positive, got {}",
                self.range
            )));
        }
        Ok(())
    }
}

impl Navigator for LookAtNavigator {
    fn pose(&self, globe: &Globe) -> Result<NavigatorPose> {
        self.validate()?;

        let ellipsoid = globe.ellipsoid();
        let Position { latitude, longitude, .. } = self.look_at_position;
        let look_at_point = globe.point_from_position(&self.look_at_position);

        let normal = ellipsoid.surface_normal_at_location(latitude, longitude);
        let north = ellipsoid.north_tangent_at_location(latitude, longitude);
        let east = ellipsoid.east_tangent_at_location(longitude);

        let (sin_heading, cos_heading) = self.heading.to_radians().sin_cos();
        let (sin_tilt, cos_tilt) = self.tilt.to_radians().sin_cos();
        let (sin_roll, cos_roll) = self.roll.to_radians().sin_cos();

        // Horizontal direction the camera faces
        let heading_direction = north * cos_heading + east * sin_heading;

        let eye_point = look_at_point + (normal * cos_tilt - heading_direction * sin_tilt) * self.range;
        let up = heading_direction * cos_tilt + normal * sin_tilt;

        let forward = (look_at_point - eye_point) / self.range;
        let right = forward.cross(up);
        let up = up * cos_roll + right * sin_roll;

        Ok(NavigatorPose { eye_point, look_at_point, up, range: self.range })
    }
}

#[cfg(test)]
#[path = "look_at_navigator_tests.rs"]
mod tests;
