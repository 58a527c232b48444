/// Sector: a latitude/longitude rectangle in degrees.
///
/// Used as the region of interest for elevation bounds queries.

use super::{Location, normalize_latitude};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl Sector {
    /// The whole globe
    pub const FULL_SPHERE: Sector = Sector {
        min_latitude: -90.0,
        max_latitude: 90.0,
        min_longitude: -180.0,
        max_longitude: 180.0,
    };

    pub fn new(min_latitude: f64, max_latitude: f64, min_longitude: f64, max_longitude: f64) -> Self {
        Self { min_latitude, max_latitude, min_longitude, max_longitude }
    }

    pub fn is_empty(&self) -> bool {
        self.min_latitude >= self.max_latitude || self.min_longitude >= self.max_longitude
    }

    pub fn delta_latitude(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    pub fn delta_longitude(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    pub fn centroid(&self) -> Location {
        Location::new(
            0.5 * (self.min_latitude + self.max_latitude),
            0.5 * (self.min_longitude + self.max_longitude),
        )
    }

    /// Whether the location lies in the sector (edges inclusive)
    pub fn contains(&self, location: Location) -> bool {
        location.latitude >= self.min_latitude
            && location.latitude <= self.max_latitude
            && location.longitude >= self.min_longitude
            && location.longitude <= self.max_longitude
    }

    /// Sector enclosing a spherical cap of `radius_degrees` around `center`.
    ///
    /// A cap reaching a pole or crossing the antimeridian spans the full
    /// longitude range. A radius of 180 degrees or more is the full sphere.
    pub fn horizon_cap(center: Location, radius_degrees: f64) -> Self {
        if !(radius_degrees < 180.0) || !center.is_finite() {
            return Self::FULL_SPHERE;
        }
        let radius = radius_degrees.max(0.0);
        let center = center.normalized();

        let min_latitude = center.latitude - radius;
        let max_latitude = center.latitude + radius;
        if min_latitude <= -90.0 || max_latitude >= 90.0 {
            return Self::new(
                normalize_latitude(min_latitude),
                normalize_latitude(max_latitude),
                -180.0,
                180.0,
            );
        }

        // Longitude half-width of the cap at its widest latitude
        let sin_ratio = radius.to_radians().sin() / center.latitude.to_radians().cos();
        let delta_longitude = if sin_ratio >= 1.0 { 180.0 } else { sin_ratio.asin().to_degrees() };

        let min_longitude = center.longitude - delta_longitude;
        let max_longitude = center.longitude + delta_longitude;
        if min_longitude < -180.0 || max_longitude > 180.0 {
            return Self::new(min_latitude, max_latitude, -180.0, 180.0);
        }

        Self::new(min_latitude, max_latitude, min_longitude, max_longitude)
    }
}

impl Default for Sector {
    fn default() -> Self {
        Self::FULL_SPHERE
    }
}

#[cfg(test)]
#[path = "sector_tests.rs"]
mod tests;
