/// Elevation bounds and the injected elevation source.
///
/// The draw context only needs the lowest and highest terrain in the region
/// around the eye to size its clip distances. Where those numbers come from
/// (tiles, a mock, a constant) is the host's business.

use super::Sector;

/// Minimum and maximum elevation of a region, in metres
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElevationBounds {
    pub min: f64,
    pub max: f64,
}

impl ElevationBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Finite and ordered
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Both bounds multiplied by a vertical exaggeration factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self { min: self.min * factor, max: self.max * factor }
    }
}

/// Source of elevation bounds for a sector.
///
/// Closures `Fn(&Sector) -> ElevationBounds` implement this trait, so a test
/// can inject fixed bounds without a tile pipeline.
pub trait ElevationSource: Send + Sync {
    fn min_and_max_elevations_for_sector(&self, sector: &Sector) -> ElevationBounds;
}

impl<F> ElevationSource for F
where
    F: Fn(&Sector) -> ElevationBounds + Send + Sync,
{
    fn min_and_max_elevations_for_sector(&self, sector: &Sector) -> ElevationBounds {
        self(sector)
    }
}

/// Smooth ellipsoid, no terrain
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroElevation;

impl ElevationSource for ZeroElevation {
    fn min_and_max_elevations_for_sector(&self, _sector: &Sector) -> ElevationBounds {
        ElevationBounds::default()
    }
}

/// Same bounds for every sector
#[derive(Debug, Clone, Copy)]
pub struct FixedElevationBounds(pub ElevationBounds);

impl FixedElevationBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self(ElevationBounds::new(min, max))
    }
}

impl ElevationSource for FixedElevationBounds {
    fn min_and_max_elevations_for_sector(&self, _sector: &Sector) -> ElevationBounds {
        self.0
    }
}

#[cfg(test)]
#[path = "elevation_tests.rs"]
mod tests;
