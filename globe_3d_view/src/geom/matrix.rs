//! Matrix helpers on top of glam's `DMat4`.
//!
//! Convention: column-major storage, column vectors, composition right to
//! left (`projection * modelview`). Eye space looks down -Z with +Y up and
//! clip-space depth runs from -1 (near) to +1 (far).

use glam::{DMat3, DMat4, DVec2, DVec3, DVec4};
use crate::error::{Error, Result};
use super::Viewport;

/// Invert a matrix, or `None` when it is singular.
///
/// A zero or non-finite determinant, or an inverse with non-finite
/// components, counts as singular. glam's own `inverse()` would return
/// NaN/Infinity in that case.
pub fn try_invert(m: &DMat4) -> Option<DMat4> {
    let det = m.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let inverse = m.inverse();
    inverse.is_finite().then_some(inverse)
}

/// Inverse-transpose of the upper 3x3, embedded in a 4x4 with no translation.
///
/// Transforms normal vectors correctly even when `m` carries non-uniform
/// scale. `None` when the upper 3x3 is singular.
pub fn normal_transform(m: &DMat4) -> Option<DMat4> {
    let upper = DMat3::from_mat4(*m);
    let det = upper.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let normal = upper.inverse().transpose();
    normal.is_finite().then(|| DMat4::from_mat3(normal))
}

/// Multiply `(point, 1)` by `m` without the perspective divide.
#[inline]
pub fn transform_homogeneous(m: &DMat4, point: DVec3) -> DVec4 {
    *m * point.extend(1.0)
}

/// Half-extents of the perspective near rectangle at unit distance.
///
/// The field of view spans the viewport's shorter dimension; the longer one
/// is widened to keep square pixels.
pub fn frustum_half_extents(field_of_view_degrees: f64, viewport: &Viewport) -> DVec2 {
    let tan_half = (field_of_view_degrees.to_radians() * 0.5).tan();
    let aspect = viewport.aspect_ratio();
    if aspect >= 1.0 {
        DVec2::new(tan_half * aspect, tan_half)
    } else {
        DVec2::new(tan_half, tan_half / aspect)
    }
}

/// Perspective projection for a viewport with dynamic near/far distances.
///
/// Points at `near` map to clip depth -1 and points at `far` to +1.
pub fn perspective_for_viewport(
    field_of_view_degrees: f64,
    viewport: &Viewport,
    near: f64,
    far: f64,
) -> Result<DMat4> {
    viewport.validate()?;
    if !(field_of_view_degrees > 0.0 && field_of_view_degrees < 180.0) {
        return Err(Error::InvalidArgument(format!(
            "field of view must be in (0, 180) degrees, got {}",
            field_of_view_degrees
        )));
    }
    validate_depth_range(near, far)?;
    if near <= 0.0 {
        return Err(Error::DegenerateGeometry(format!(
            "perspective near distance must be positive, got {}",
            near
        )));
    }

    let half = frustum_half_extents(field_of_view_degrees, viewport);
    let fov_y = 2.0 * half.y.atan();
    Ok(DMat4::perspective_rh_gl(fov_y, viewport.aspect_ratio(), near, far))
}

/// Orthographic projection of an explicit eye-space box.
pub fn orthographic(
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
) -> Result<DMat4> {
    if !(left < right && bottom < top) {
        return Err(Error::DegenerateGeometry(format!(
            "orthographic box is empty: x [{}, {}], y [{}, {}]",
            left, right, bottom, top
        )));
    }
    validate_depth_range(near, far)?;
    Ok(DMat4::orthographic_rh_gl(left, right, bottom, top, near, far))
}

/// Orthographic projection mapping eye-space units to viewport pixels.
///
/// Used for screen-space overlays drawn in the same frame.
pub fn screen_projection(viewport: &Viewport, near: f64, far: f64) -> Result<DMat4> {
    viewport.validate()?;
    orthographic(
        viewport.x,
        viewport.x + viewport.width,
        viewport.y,
        viewport.y + viewport.height,
        near,
        far,
    )
}

fn validate_depth_range(near: f64, far: f64) -> Result<()> {
    if !near.is_finite() || !far.is_finite() || near >= far {
        return Err(Error::DegenerateGeometry(format!(
            "clip range collapsed: near {} far {}",
            near, far
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
