/// Clip distance selection for a globe view.
///
/// The far distance reaches the horizon of the highest terrain or the top
/// of the atmosphere, whichever is higher. The near distance is as far out
/// as the depth buffer's precision at the far plane allows, then pulled in
/// so the near rectangle's corners never cut the highest terrain below the
/// eye. An eye at or below that terrain gets the minimum near distance.

use glam::DVec2;
use crate::error::{Error, Result};
use crate::globe::{ElevationBounds, Ellipsoid};

const MAX_DEPTH_BITS: u32 = 64;

/// Near and far clip distances in metres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipDistances {
    pub near: f64,
    pub far: f64,
}

/// Inputs for one clip distance computation
#[derive(Debug, Clone, Copy)]
pub struct ClipDistanceInputs {
    /// Eye altitude above the ellipsoid, metres
    pub eye_altitude: f64,
    /// Terrain bounds around the eye, already scaled by vertical exaggeration
    pub elevation: ElevationBounds,
    /// Half-extents of the near rectangle at unit distance
    pub frustum_half_extents: DVec2,
}

/// Tuning for `compute`; normally taken from `DrawContextConfig`
#[derive(Debug, Clone, Copy)]
pub struct ClipDistanceParams {
    pub depth_bits: u32,
    pub far_resolution: f64,
    pub atmosphere_altitude: f64,
    pub min_far_distance: f64,
    pub min_near_distance: f64,
}

/// Nearest distance keeping `far_resolution` metres of depth resolution at
/// `far_distance` with a `depth_bits` integer depth buffer.
///
/// Buffers wider than 64 bits are treated as 64 bits.
pub fn near_distance_for_far_distance(far_distance: f64, far_resolution: f64, depth_bits: u32) -> f64 {
    let max_depth_value = 2f64.powi(depth_bits.min(MAX_DEPTH_BITS) as i32) - 1.0;
    far_distance / (max_depth_value / (1.0 - far_resolution / far_distance) - max_depth_value + 1.0)
}

/// Largest near distance whose near-rectangle corners stay above a surface
/// `distance_to_surface` metres below the eye.
pub fn max_near_distance_for_surface(distance_to_surface: f64, half_extents: DVec2) -> f64 {
    distance_to_surface / (1.0 + half_extents.length_squared()).sqrt()
}

/// Compute near/far for an eye above `ellipsoid`.
///
/// Fails with `DegenerateGeometry` when the inputs collapse the range
/// (near >= far, or anything non-finite).
pub fn compute(
    ellipsoid: &Ellipsoid,
    inputs: &ClipDistanceInputs,
    params: &ClipDistanceParams,
) -> Result<ClipDistances> {
    let elevation = inputs.elevation;
    if !elevation.is_valid() {
        return Err(Error::DegenerateGeometry(format!(
            "elevation bounds invalid: min {} max {}",
            elevation.min, elevation.max
        )));
    }

    let eye_horizon = ellipsoid.horizon_distance(inputs.eye_altitude);
    let terrain_horizon = ellipsoid.horizon_distance(params.atmosphere_altitude.max(elevation.max));
    let far = (eye_horizon + terrain_horizon).max(params.min_far_distance);

    let mut near = near_distance_for_far_distance(far, params.far_resolution, params.depth_bits);

    // Eye at or below the highest terrain: terrain may be arbitrarily close
    let distance_to_surface = inputs.eye_altitude - elevation.max;
    if distance_to_surface > 0.0 {
        let max_near = max_near_distance_for_surface(distance_to_surface, inputs.frustum_half_extents);
        near = near.min(max_near);
    } else {
        near = params.min_near_distance;
    }
    near = near.max(params.min_near_distance);

    if !near.is_finite() || !far.is_finite() || near >= far {
        return Err(Error::DegenerateGeometry(format!(
            "clip range collapsed: near {} far {}",
            near, far
        )));
    }

    Ok(ClipDistances { near, far })
}

#[cfg(test)]
#[path = "clip_distance_tests.rs"]
mod tests;
