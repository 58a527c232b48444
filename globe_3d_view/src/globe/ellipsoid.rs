/// Ellipsoid: reference surface geodesy.
///
/// Geodetic position to Cartesian point and back, surface frames, and
/// ray intersection. Axes: +Y polar, +Z through (0°, 0°), +X through
/// (0°, 90°E).

use glam::DVec3;
use crate::geom::Line;
use super::Position;

/// Iteration cap for the geodetic inverse
const MAX_INVERSE_ITERATIONS: usize = 16;

/// Convergence threshold on latitude, radians
const INVERSE_TOLERANCE: f64 = 1e-14;

/// Oblate ellipsoid of revolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis, metres
    pub equatorial_radius: f64,
    /// Semi-minor axis, metres
    pub polar_radius: f64,
    /// First eccentricity squared
    pub eccentricity_squared: f64,
}

impl Ellipsoid {
    /// WGS 84 reference ellipsoid
    pub fn wgs84() -> Self {
        Self::from_equatorial_radius(6378137.0, 0.00669437999013)
    }

    pub fn from_equatorial_radius(equatorial_radius: f64, eccentricity_squared: f64) -> Self {
        Self {
            equatorial_radius,
            polar_radius: equatorial_radius * (1.0 - eccentricity_squared).sqrt(),
            eccentricity_squared,
        }
    }

    /// Sphere of the given radius
    pub fn sphere(radius: f64) -> Self {
        Self::from_equatorial_radius(radius, 0.0)
    }

    pub fn maximum_radius(&self) -> f64 {
        self.equatorial_radius.max(self.polar_radius)
    }

    /// Prime vertical radius of curvature at a geodetic latitude (radians)
    fn prime_vertical_radius(&self, latitude: f64) -> f64 {
        let sin_lat = latitude.sin();
        self.equatorial_radius / (1.0 - self.eccentricity_squared * sin_lat * sin_lat).sqrt()
    }

    /// Cartesian point for a geodetic position (degrees, metres)
    pub fn point_from_position(&self, latitude: f64, longitude: f64, altitude: f64) -> DVec3 {
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        let n = self.prime_vertical_radius(lat);

        DVec3::new(
            (n + altitude) * cos_lat * sin_lon,
            (n * (1.0 - self.eccentricity_squared) + altitude) * sin_lat,
            (n + altitude) * cos_lat * cos_lon,
        )
    }

    /// Geodetic position for a Cartesian point.
    ///
    /// Fixed-point iteration on latitude; converges in a handful of steps
    /// for any point outside the ellipsoid's core. The origin maps to
    /// (0°, 0°) at minus the equatorial radius.
    pub fn position_from_point(&self, point: DVec3) -> Position {
        let e2 = self.eccentricity_squared;
        let radial = point.x.hypot(point.z);

        if radial == 0.0 {
            if point.y == 0.0 {
                return Position::new(0.0, 0.0, -self.equatorial_radius);
            }
            let latitude = 90.0_f64.copysign(point.y);
            return Position::new(latitude, 0.0, point.y.abs() - self.polar_radius);
        }

        let longitude = point.x.atan2(point.z);
        let mut latitude = point.y.atan2(radial * (1.0 - e2));
        for _ in 0..MAX_INVERSE_ITERATIONS {
            let n = self.prime_vertical_radius(latitude);
            let altitude = self.altitude_at(point.y, radial, latitude, n);
            let next = point.y.atan2(radial * (1.0 - e2 * n / (n + altitude)));
            let delta = (next - latitude).abs();
            latitude = next;
            if delta < INVERSE_TOLERANCE {
                break;
            }
        }

        let n = self.prime_vertical_radius(latitude);
        let altitude = self.altitude_at(point.y, radial, latitude, n);
        Position::new(latitude.to_degrees(), longitude.to_degrees(), altitude)
    }

    /// Height above the surface; the form used depends on latitude to avoid
    /// dividing by a small cosine near the poles
    fn altitude_at(&self, y: f64, radial: f64, latitude: f64, n: f64) -> f64 {
        if latitude.abs() < std::f64::consts::FRAC_PI_4 {
            radial / latitude.cos() - n
        } else {
            y / latitude.sin() - n * (1.0 - self.eccentricity_squared)
        }
    }

    /// Unit geodetic normal at a location (degrees)
    pub fn surface_normal_at_location(&self, latitude: f64, longitude: f64) -> DVec3 {
        let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();
        DVec3::new(cos_lat * sin_lon, sin_lat, cos_lat * cos_lon)
    }

    /// Unit vector pointing north along the surface at a location (degrees)
    pub fn north_tangent_at_location(&self, latitude: f64, longitude: f64) -> DVec3 {
        let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();
        DVec3::new(-sin_lat * sin_lon, cos_lat, -sin_lat * cos_lon)
    }

    /// Unit vector pointing east along the surface at a longitude (degrees)
    pub fn east_tangent_at_location(&self, longitude: f64) -> DVec3 {
        let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();
        DVec3::new(cos_lon, 0.0, -sin_lon)
    }

    /// Distance from a point at `altitude` to its horizon on the sphere of
    /// maximum radius. Zero at or below the surface.
    pub fn horizon_distance(&self, altitude: f64) -> f64 {
        if altitude > 0.0 {
            (altitude * (2.0 * self.maximum_radius() + altitude)).sqrt()
        } else {
            0.0
        }
    }

    /// Angular radius of the visible cap seen from `altitude`, degrees
    pub fn horizon_angle(&self, altitude: f64) -> f64 {
        if altitude > 0.0 {
            let radius = self.maximum_radius();
            (radius / (radius + altitude)).acos().to_degrees()
        } else {
            0.0
        }
    }

    /// Nearest non-negative line parameter where `line` meets the surface.
    ///
    /// The polar axis is stretched by a/b so the problem becomes a sphere
    /// of the equatorial radius. A line starting inside the ellipsoid
    /// returns the exit point.
    pub fn intersect_line(&self, line: &Line) -> Option<f64> {
        if !line.is_finite() || self.polar_radius <= 0.0 {
            return None;
        }
        let stretch = DVec3::new(1.0, self.equatorial_radius / self.polar_radius, 1.0);
        let origin = line.origin * stretch;
        let direction = line.direction * stretch;

        let a = direction.length_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * origin.dot(direction);
        let c = origin.length_squared() - self.equatorial_radius * self.equatorial_radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = (-b - root) / (2.0 * a);
        let far = (-b + root) / (2.0 * a);
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::wgs84()
    }
}

#[cfg(test)]
#[path = "ellipsoid_tests.rs"]
mod tests;
