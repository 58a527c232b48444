/// Line: origin plus direction, used for picking rays.
///
/// The direction is stored as given; rays built by the draw context are
/// normalized, so `point_at(t)` is then `t` metres from the origin.

use glam::DVec3;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Line {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Line from `start` through `end`, direction `end - start`
    pub fn from_segment(start: DVec3, end: DVec3) -> Self {
        Self { origin: start, direction: end - start }
    }

    /// Ray from `origin` towards `through` with a unit direction.
    ///
    /// Fails when the points coincide or any component is not finite.
    pub fn ray(origin: DVec3, through: DVec3) -> Result<Self> {
        if !origin.is_finite() {
            return Err(Error::non_finite("ray origin"));
        }
        if !through.is_finite() {
            return Err(Error::non_finite("ray target"));
        }
        match (through - origin).try_normalize() {
            Some(direction) => Ok(Self { origin, direction }),
            None => Err(Error::DegenerateGeometry(
                "ray origin and target coincide".to_string(),
            )),
        }
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.direction.is_finite()
    }

    /// Point on the line nearest to `point`.
    ///
    /// A zero direction collapses the line to its origin.
    pub fn nearest_point_to(&self, point: DVec3) -> DVec3 {
        let length_squared = self.direction.length_squared();
        if length_squared == 0.0 {
            return self.origin;
        }
        let t = (point - self.origin).dot(self.direction) / length_squared;
        self.point_at(t)
    }

    pub fn distance_to(&self, point: DVec3) -> f64 {
        self.nearest_point_to(point).distance(point)
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
