use glam::DVec2;
use crate::error::Error;
use crate::globe::{ElevationBounds, Ellipsoid};
use super::*;

fn params() -> ClipDistanceParams {
    ClipDistanceParams {
        depth_bits: 24,
        far_resolution: 10.0,
        atmosphere_altitude: 160000.0,
        min_far_distance: 1e3,
        min_near_distance: 1.0,
    }
}

fn inputs(eye_altitude: f64, min: f64, max: f64) -> ClipDistanceInputs {
    ClipDistanceInputs {
        eye_altitude,
        elevation: ElevationBounds::new(min, max),
        frustum_half_extents: DVec2::splat(0.5),
    }
}

// ============================================================================
// Building blocks
// ============================================================================

#[test]
fn test_near_distance_keeps_far_resolution() {
    let far = 16522751.521687;
    let near = near_distance_for_far_distance(far, 10.0, 24);
    assert!((near - 1481327.834766).abs() < 1e-3, "near {}", near);

    // Fewer depth bits force the near plane further out
    assert!(near_distance_for_far_distance(far, 10.0, 16) > near);
    // Coarser resolution lets it come closer
    assert!(near_distance_for_far_distance(far, 100.0, 24) < near);
}

#[test]
fn test_near_distance_wide_depth_buffers() {
    let far = 1e7;
    let near_32 = near_distance_for_far_distance(far, 10.0, 32);
    let near_64 = near_distance_for_far_distance(far, 10.0, 64);
    let near_max = near_distance_for_far_distance(far, 10.0, u32::MAX);

    assert!(near_64.is_finite() && near_64 > 0.0, "near {}", near_64);
    assert!(near_64 < near_32);
    assert_eq!(near_max, near_64);
}

#[test]
fn test_compute_accepts_wide_depth_buffer() {
    let params = ClipDistanceParams { depth_bits: 64, ..params() };
    let clip = compute(&Ellipsoid::wgs84(), &inputs(10e6, 125.0, 350.0), &params).unwrap();
    assert!(clip.near >= 1.0 && clip.near < clip.far);
}

#[test]
fn test_max_near_distance_for_surface() {
    let max_near = max_near_distance_for_surface(650.0, DVec2::splat(0.5));
    assert!((max_near - 650.0 / 1.5_f64.sqrt()).abs() < 1e-12);
    assert_eq!(max_near_distance_for_surface(10.0, DVec2::ZERO), 10.0);
}

// ============================================================================
// compute
// ============================================================================

#[test]
fn test_compute_high_altitude_view() {
    let clip = compute(&Ellipsoid::wgs84(), &inputs(10e6, 125.0, 350.0), &params()).unwrap();

    assert!((clip.far - 16522751.521687).abs() < 1e-3, "far {}", clip.far);
    assert!((clip.near - 1481327.834766).abs() < 1e-3, "near {}", clip.near);
}

#[test]
fn test_compute_near_terrain_pulls_near_in() {
    let clip = compute(&Ellipsoid::wgs84(), &inputs(1000.0, 125.0, 350.0), &params()).unwrap();

    assert!((clip.far - 1550516.828441).abs() < 1e-3, "far {}", clip.far);
    let expected = max_near_distance_for_surface(650.0, DVec2::splat(0.5));
    assert_eq!(clip.near, expected);
}

#[test]
fn test_compute_eye_below_terrain_uses_minimum_near() {
    let clip = compute(&Ellipsoid::wgs84(), &inputs(100.0, 125.0, 350.0), &params()).unwrap();
    assert_eq!(clip.near, 1.0);
    assert!(clip.far > 1e6 && clip.far < 1550516.828441, "far {}", clip.far);
}

#[test]
fn test_compute_near_is_continuous_across_terrain_top() {
    let wgs84 = Ellipsoid::wgs84();
    let just_above = compute(&wgs84, &inputs(300.0, 125.0, 299.0), &params()).unwrap();
    let level = compute(&wgs84, &inputs(300.0, 125.0, 300.0), &params()).unwrap();
    let below = compute(&wgs84, &inputs(300.0, 125.0, 350.0), &params()).unwrap();

    assert_eq!(just_above.near, 1.0);
    assert_eq!(level.near, 1.0);
    assert_eq!(below.near, 1.0);
}

#[test]
fn test_compute_clamps_near_to_minimum() {
    let clip = compute(&Ellipsoid::wgs84(), &inputs(350.5, 0.0, 350.0), &params()).unwrap();
    assert_eq!(clip.near, 1.0);
}

#[test]
fn test_compute_clamps_far_to_minimum() {
    let tiny = Ellipsoid::sphere(1.0);
    let params = ClipDistanceParams { atmosphere_altitude: 0.0, ..params() };
    let clip = compute(&tiny, &inputs(0.0, 0.0, 0.0), &params).unwrap();

    assert_eq!(clip.far, 1e3);
    assert_eq!(clip.near, 1.0);
}

#[test]
fn test_compute_far_grows_with_altitude() {
    let wgs84 = Ellipsoid::wgs84();
    let mut previous = 0.0;
    for altitude in [1e3, 1e4, 1e5, 1e6, 1e7] {
        let clip = compute(&wgs84, &inputs(altitude, 0.0, 0.0), &params()).unwrap();
        assert!(clip.far > previous);
        assert!(clip.near < clip.far);
        previous = clip.far;
    }
}

#[test]
fn test_compute_rejects_inverted_bounds() {
    let result = compute(&Ellipsoid::wgs84(), &inputs(1e6, 350.0, 125.0), &params());
    assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
}

#[test]
fn test_compute_rejects_collapsed_range() {
    let params = ClipDistanceParams { min_near_distance: 1e9, ..params() };
    let result = compute(&Ellipsoid::wgs84(), &inputs(1e6, 0.0, 0.0), &params);
    assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
}
