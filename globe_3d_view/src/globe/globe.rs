/// Globe: an ellipsoid plus the elevation source describing its terrain.

use glam::DVec3;
use crate::geom::Line;
use super::{ElevationBounds, ElevationSource, Ellipsoid, Position, Sector, ZeroElevation};

/// Reference ellipsoid with injected terrain bounds.
///
/// The elevation source is a trait object so hosts and tests can plug in
/// tile-backed bounds, a closure, or fixed values.
pub struct Globe {
    ellipsoid: Ellipsoid,
    elevation_source: Box<dyn ElevationSource>,
}

impl Globe {
    pub fn new<E: ElevationSource + 'static>(ellipsoid: Ellipsoid, elevation_source: E) -> Self {
        Self { ellipsoid, elevation_source: Box::new(elevation_source) }
    }

    /// WGS 84 globe with the given terrain
    pub fn wgs84<E: ElevationSource + 'static>(elevation_source: E) -> Self {
        Self::new(Ellipsoid::wgs84(), elevation_source)
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Replace the terrain source
    pub fn set_elevation_source<E: ElevationSource + 'static>(&mut self, elevation_source: E) {
        self.elevation_source = Box::new(elevation_source);
    }

    pub fn min_and_max_elevations_for_sector(&self, sector: &Sector) -> ElevationBounds {
        self.elevation_source.min_and_max_elevations_for_sector(sector)
    }

    pub fn point_from_position(&self, position: &Position) -> DVec3 {
        self.ellipsoid
            .point_from_position(position.latitude, position.longitude, position.altitude)
    }

    pub fn position_from_point(&self, point: DVec3) -> Position {
        self.ellipsoid.position_from_point(point)
    }

    /// First point where `line` meets the ellipsoid surface
    pub fn intersect_line(&self, line: &Line) -> Option<DVec3> {
        self.ellipsoid.intersect_line(line).map(|t| line.point_at(t))
    }
}

impl Default for Globe {
    fn default() -> Self {
        Self::wgs84(ZeroElevation)
    }
}

impl std::fmt::Debug for Globe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Globe")
            .field("ellipsoid", &self.ellipsoid)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "globe_tests.rs"]
mod tests;
