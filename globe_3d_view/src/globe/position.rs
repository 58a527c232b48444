/// Geographic locations and positions, in degrees and metres.

/// Clamp a latitude to [-90, 90] degrees
pub fn normalize_latitude(degrees: f64) -> f64 {
    degrees.clamp(-90.0, 90.0)
}

/// Wrap a longitude into [-180, 180] degrees
pub fn normalize_longitude(degrees: f64) -> f64 {
    if (-180.0..=180.0).contains(&degrees) {
        return degrees;
    }
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps 180 + 360k to -180; keep the sign of the input
    if wrapped == -180.0 && degrees > 0.0 {
        180.0
    } else {
        wrapped
    }
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Latitude clamped and longitude wrapped to their canonical ranges
    pub fn normalized(&self) -> Self {
        Self {
            latitude: normalize_latitude(self.latitude),
            longitude: normalize_longitude(self.longitude),
        }
    }
}

/// Location plus altitude above the ellipsoid
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres above the ellipsoid surface
    pub altitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self { latitude, longitude, altitude }
    }

    pub fn from_location(location: Location, altitude: f64) -> Self {
        Self::new(location.latitude, location.longitude, altitude)
    }

    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }

    pub fn is_finite(&self) -> bool {
        self.location().is_finite() && self.altitude.is_finite()
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
