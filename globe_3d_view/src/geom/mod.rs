//! Geometry module: matrices, planes, lines, and bounding volumes.
//!
//! Vectors and matrices are glam's f64 types (`DVec2`, `DVec3`, `DMat4`).
//! Globe coordinates reach 1.6e7 m, which f32 cannot resolve to the
//! sub-millimetre level picking needs.

pub mod matrix;
mod plane;
mod line;
mod bounding;
mod viewport;

pub use plane::Plane;
pub use line::Line;
pub use bounding::{BoundingVolume, BoundingBox, BoundingSphere};
pub use viewport::Viewport;
