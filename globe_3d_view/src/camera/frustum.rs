/// Frustum: six clipping planes bounding the visible volume.
///
/// Every plane's normal points inward: a point is inside the frustum when
/// its signed distance to all six planes is >= 0.
///
/// Planes extracted from a modelview-projection matrix are already in model
/// coordinates; planes extracted from a projection alone are in eye
/// coordinates and can be carried to model coordinates with
/// `transform_by_matrix(&modelview.transpose())`.

use glam::{DMat4, DVec3};
use crate::geom::{BoundingBox, BoundingSphere, BoundingVolume, Plane};

/// Result of a 3-way frustum/volume classification.
///
/// - `Outside` → the volume can be skipped entirely
/// - `Inside` → the volume needs no further clipping
/// - `Partial` → the volume straddles at least one plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Volume is entirely outside the frustum
    Outside,
    /// Volume is entirely inside the frustum
    Inside,
    /// Volume partially overlaps the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes.
///
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Plane; 6],
}

impl Frustum {
    pub fn new(left: Plane, right: Plane, bottom: Plane, top: Plane, near: Plane, far: Plane) -> Self {
        Self { planes: [left, right, bottom, top, near, far] }
    }

    /// Extract normalized frustum planes from a combined transform.
    ///
    /// Gribb & Hartmann: each plane is the fourth row of the matrix plus or
    /// minus one of the first three. With a modelview-projection matrix the
    /// planes come out in model coordinates.
    pub fn from_view_projection(m: &DMat4) -> Self {
        let r0 = m.row(0);
        let r1 = m.row(1);
        let r2 = m.row(2);
        let r3 = m.row(3);

        Self {
            planes: [
                r3 + r0, // left
                r3 - r0, // right
                r3 + r1, // bottom
                r3 - r1, // top
                r3 + r2, // near
                r3 - r2, // far
            ]
            .map(|v| Plane::from_vec4(v).normalized()),
        }
    }

    /// Eye-space frustum of a projection matrix
    pub fn from_projection(projection: &DMat4) -> Self {
        Self::from_view_projection(projection)
    }

    /// Multiply every plane by `matrix` (see `Plane::transform_by_matrix`).
    ///
    /// The result is not normalized.
    pub fn transform_by_matrix(&self, matrix: &DMat4) -> Self {
        Self { planes: self.planes.map(|p| p.transform_by_matrix(matrix)) }
    }

    pub fn normalized(&self) -> Self {
        Self { planes: self.planes.map(|p| p.normalized()) }
    }

    // ===== PLANE ACCESS =====

    pub fn left(&self) -> &Plane {
        &self.planes[PLANE_LEFT]
    }

    pub fn right(&self) -> &Plane {
        &self.planes[PLANE_RIGHT]
    }

    pub fn bottom(&self) -> &Plane {
        &self.planes[PLANE_BOTTOM]
    }

    pub fn top(&self) -> &Plane {
        &self.planes[PLANE_TOP]
    }

    pub fn near(&self) -> &Plane {
        &self.planes[PLANE_NEAR]
    }

    pub fn far(&self) -> &Plane {
        &self.planes[PLANE_FAR]
    }

    // ===== CONTAINMENT =====

    pub fn contains_point(&self, point: DVec3) -> bool {
        self.planes.iter().all(|p| p.distance_to_point(point) >= 0.0)
    }

    /// Test if a bounding volume intersects this frustum.
    ///
    /// Conservative: reports `false` only when the volume lies entirely on
    /// the outer side of at least one plane. May return false positives
    /// near frustum corners, never false negatives.
    pub fn intersects(&self, volume: &dyn BoundingVolume) -> bool {
        self.planes.iter().all(|p| volume.max_signed_distance(p) >= 0.0)
    }

    /// Positive-vertex test of an axis-aligned box
    pub fn intersects_aabb(&self, aabb: &BoundingBox) -> bool {
        self.intersects(aabb)
    }

    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.intersects(sphere)
    }

    /// Classify a bounding volume against the frustum (3-way test).
    ///
    /// - the volume's furthest-inside point is outside any plane → `Outside`
    /// - its furthest-outside point is outside any plane → at least `Partial`
    /// - otherwise → `Inside`
    pub fn classify(&self, volume: &dyn BoundingVolume) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            if volume.max_signed_distance(plane) < 0.0 {
                return FrustumTest::Outside;
            }
            if volume.min_signed_distance(plane) < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }

    pub fn classify_aabb(&self, aabb: &BoundingBox) -> FrustumTest {
        self.classify(aabb)
    }

    /// Whether any part of the segment `a`-`b` lies inside the frustum
    pub fn intersects_segment(&self, a: DVec3, b: DVec3) -> bool {
        let mut segment = (a, b);
        for plane in &self.planes {
            match plane.clip_segment(segment.0, segment.1) {
                Some(clipped) => segment = clipped,
                None => return false,
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
