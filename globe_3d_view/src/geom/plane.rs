/// Plane: a half-space bounded by `normal · p + distance = 0`.
///
/// The normal points into the half-space considered "inside": a point is on
/// the inner side when `distance_to_point(p) >= 0`. Frustum planes follow the
/// same convention.

use glam::{DMat4, DVec3, DVec4};
use super::Line;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Normal vector, unit length once normalized
    pub normal: DVec3,
    /// Signed distance term of the implicit equation
    pub distance: f64,
}

impl Plane {
    /// Plane from raw coefficients `(a, b, c, d)`, not normalized
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { normal: DVec3::new(a, b, c), distance: d }
    }

    pub fn from_vec4(v: DVec4) -> Self {
        Self { normal: v.truncate(), distance: v.w }
    }

    /// Normalized plane from raw coefficients
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(a, b, c, d).normalized()
    }

    /// Plane through `point` facing `normal`
    pub fn from_point_normal(point: DVec3, normal: DVec3) -> Self {
        let n = normal.normalize_or_zero();
        Self { normal: n, distance: -n.dot(point) }
    }

    pub fn as_vec4(&self) -> DVec4 {
        self.normal.extend(self.distance)
    }

    /// Dot product with a homogeneous vector
    #[inline]
    pub fn dot(&self, v: DVec4) -> f64 {
        self.as_vec4().dot(v)
    }

    /// Signed distance from the plane to a point.
    ///
    /// Positive on the side the normal points to. Only a true Euclidean
    /// distance when the plane is normalized.
    #[inline]
    pub fn distance_to_point(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.distance
    }

    /// Scale the plane so its normal has unit length.
    ///
    /// A plane with a zero normal is returned unchanged.
    pub fn normalized(&self) -> Self {
        let length = self.normal.length();
        if length > 0.0 {
            Self { normal: self.normal / length, distance: self.distance / length }
        } else {
            *self
        }
    }

    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.normal.length() - 1.0).abs() <= tolerance
    }

    /// Multiply the plane's coefficient vector by `matrix`.
    ///
    /// To move a plane by a point transform `T`, pass the transpose of
    /// `T`'s inverse. Eye-space planes become model-space planes when
    /// multiplied by the transpose of the modelview. The result is not
    /// re-normalized.
    pub fn transform_by_matrix(&self, matrix: &DMat4) -> Self {
        Self::from_vec4(*matrix * self.as_vec4())
    }

    /// Parameter `t` along `line` where it crosses the plane.
    ///
    /// `None` when the line is parallel to the plane and not on it. A line
    /// lying in the plane returns its origin (`t = 0`).
    pub fn intersect_line(&self, line: &Line) -> Option<f64> {
        let denominator = self.normal.dot(line.direction);
        let numerator = self.distance_to_point(line.origin);
        if denominator == 0.0 {
            return (numerator == 0.0).then_some(0.0);
        }
        let t = -numerator / denominator;
        t.is_finite().then_some(t)
    }

    /// Side of the plane each point is on: 1 inside, -1 outside, 0 on it.
    ///
    /// Returns the shared side when both points agree, 0 otherwise.
    pub fn on_same_side(&self, a: DVec3, b: DVec3) -> i32 {
        let da = self.distance_to_point(a);
        let db = self.distance_to_point(b);
        if da > 0.0 && db > 0.0 {
            1
        } else if da < 0.0 && db < 0.0 {
            -1
        } else {
            0
        }
    }

    /// Clip the segment `a`-`b` to the inner half-space.
    ///
    /// Returns the remaining segment, or `None` when it lies wholly outside.
    pub fn clip_segment(&self, a: DVec3, b: DVec3) -> Option<(DVec3, DVec3)> {
        let da = self.distance_to_point(a);
        let db = self.distance_to_point(b);

        match (da >= 0.0, db >= 0.0) {
            (true, true) => Some((a, b)),
            (false, false) => None,
            _ => {
                let t = da / (da - db);
                let crossing = a + (b - a) * t;
                if da >= 0.0 {
                    Some((a, crossing))
                } else {
                    Some((crossing, b))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
