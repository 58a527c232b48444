use glam::{DMat4, DVec3};
use crate::geom::Plane;
use super::*;

fn unit_box() -> BoundingBox {
    BoundingBox::new(DVec3::splat(-1.0), DVec3::splat(1.0))
}

// ============================================================================
// BoundingBox
// ============================================================================

#[test]
fn test_from_points() {
    let bounds = BoundingBox::from_points(&[
        DVec3::new(1.0, -2.0, 3.0),
        DVec3::new(-4.0, 5.0, 0.0),
        DVec3::new(2.0, 0.0, -6.0),
    ])
    .unwrap();

    assert_eq!(bounds.min, DVec3::new(-4.0, -2.0, -6.0));
    assert_eq!(bounds.max, DVec3::new(2.0, 5.0, 3.0));
    assert!(BoundingBox::from_points(&[]).is_none());
}

#[test]
fn test_center_and_half_extents() {
    let bounds = BoundingBox::new(DVec3::new(0.0, 2.0, -4.0), DVec3::new(4.0, 6.0, 0.0));
    assert_eq!(bounds.center(), DVec3::new(2.0, 4.0, -2.0));
    assert_eq!(bounds.half_extents(), DVec3::splat(2.0));
}

#[test]
fn test_transformed_translation_and_scale() {
    let m = DMat4::from_scale_rotation_translation(
        DVec3::new(2.0, 3.0, 1.0),
        glam::DQuat::IDENTITY,
        DVec3::new(10.0, 0.0, -5.0),
    );
    let moved = unit_box().transformed(&m);

    assert_eq!(moved.min, DVec3::new(8.0, -3.0, -6.0));
    assert_eq!(moved.max, DVec3::new(12.0, 3.0, -4.0));
}

#[test]
fn test_transformed_rotation_encloses_corners() {
    let m = DMat4::from_rotation_y(std::f64::consts::FRAC_PI_4);
    let moved = unit_box().transformed(&m);

    let expected = std::f64::consts::SQRT_2;
    assert!((moved.max.x - expected).abs() < 1e-12);
    assert!((moved.min.z + expected).abs() < 1e-12);
    assert!((moved.max.y - 1.0).abs() < 1e-12);
}

#[test]
fn test_contains_point_edges_inclusive() {
    let bounds = unit_box();
    assert!(bounds.contains_point(DVec3::ZERO));
    assert!(bounds.contains_point(DVec3::new(1.0, -1.0, 1.0)));
    assert!(!bounds.contains_point(DVec3::new(1.0001, 0.0, 0.0)));
}

#[test]
fn test_box_signed_distances() {
    let plane = Plane::new(1.0, 0.0, 0.0, -0.5); // x = 0.5 facing +X
    let bounds = unit_box();

    assert_eq!(bounds.max_signed_distance(&plane), 0.5);
    assert_eq!(bounds.min_signed_distance(&plane), -1.5);

    let flipped = Plane::new(-1.0, 0.0, 0.0, 0.5);
    assert_eq!(bounds.max_signed_distance(&flipped), 1.5);
    assert_eq!(bounds.min_signed_distance(&flipped), -0.5);
}

// ============================================================================
// BoundingSphere
// ============================================================================

#[test]
fn test_sphere_signed_distances() {
    let sphere = BoundingSphere::new(DVec3::new(0.0, 5.0, 0.0), 2.0);
    let plane = Plane::new(0.0, 1.0, 0.0, 0.0);

    assert_eq!(sphere.max_signed_distance(&plane), 7.0);
    assert_eq!(sphere.min_signed_distance(&plane), 3.0);
}

#[test]
fn test_sphere_from_box() {
    let sphere = BoundingSphere::from(&unit_box());
    assert_eq!(sphere.center, DVec3::ZERO);
    assert!((sphere.radius - 3.0_f64.sqrt()).abs() < 1e-12);
    assert!(sphere.contains_point(DVec3::splat(0.99)));
    assert!(!sphere.contains_point(DVec3::splat(1.01)));
}
