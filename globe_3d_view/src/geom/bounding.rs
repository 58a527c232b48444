/// Bounding volumes tested against frustum planes.

use glam::{DMat4, DVec3};
use super::Plane;

/// A volume that can report its extent along a plane normal.
///
/// The frustum only needs the most-inside and most-outside signed distances
/// to classify a volume against each plane.
pub trait BoundingVolume {
    /// Largest signed distance of any point of the volume to `plane`
    fn max_signed_distance(&self, plane: &Plane) -> f64;

    /// Smallest signed distance of any point of the volume to `plane`
    fn min_signed_distance(&self, plane: &Plane) -> f64;
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner (x, y, z)
    pub min: DVec3,
    /// Maximum corner (x, y, z)
    pub max: DVec3,
}

impl BoundingBox {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all `points`, or `None` for an empty slice
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self { min: *first, max: *first };
        for p in rest {
            bounds.min = bounds.min.min(*p);
            bounds.max = bounds.max.max(*p);
        }
        Some(bounds)
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> DVec3 {
        (self.max - self.min) * 0.5
    }

    /// Box enclosing this box after transformation by `matrix`.
    ///
    /// Arvo's method: each matrix axis is scaled by the box extents on that
    /// axis, giving a tight result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &DMat4) -> Self {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        Self { min: new_min, max: new_max }
    }

    pub fn contains_point(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Corner furthest along the plane normal
    fn positive_vertex(&self, normal: DVec3) -> DVec3 {
        DVec3::select(normal.cmpge(DVec3::ZERO), self.max, self.min)
    }

    /// Corner furthest against the plane normal
    fn negative_vertex(&self, normal: DVec3) -> DVec3 {
        DVec3::select(normal.cmpge(DVec3::ZERO), self.min, self.max)
    }
}

impl BoundingVolume for BoundingBox {
    fn max_signed_distance(&self, plane: &Plane) -> f64 {
        plane.distance_to_point(self.positive_vertex(plane.normal))
    }

    fn min_signed_distance(&self, plane: &Plane) -> f64 {
        plane.distance_to_point(self.negative_vertex(plane.normal))
    }
}

/// Sphere bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: DVec3,
    pub radius: f64,
}

impl BoundingSphere {
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains_point(&self, point: DVec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

impl From<&BoundingBox> for BoundingSphere {
    fn from(bounds: &BoundingBox) -> Self {
        Self { center: bounds.center(), radius: bounds.half_extents().length() }
    }
}

// Distances assume a normalized plane.
impl BoundingVolume for BoundingSphere {
    fn max_signed_distance(&self, plane: &Plane) -> f64 {
        plane.distance_to_point(self.center) + self.radius
    }

    fn min_signed_distance(&self, plane: &Plane) -> f64 {
        plane.distance_to_point(self.center) - self.radius
    }
}

#[cfg(test)]
#[path = "bounding_tests.rs"]
mod tests;
