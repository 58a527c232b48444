/// ViewUniforms: per-frame matrices packed for GPU upload.
///
/// The frame state is computed in f64; shaders consume f32. A globe-sized
/// translation does not survive the cast, so a relative-to-eye
/// view-projection is provided as well: vertices expressed relative to the
/// eye point go through `view_projection_rte` without losing precision.

use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DVec3, Mat4, Vec4};

/// Uniform block layout, std140-compatible
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    /// View-projection for eye-relative vertex positions
    pub view_projection_rte: Mat4,
    pub normal_transform: Mat4,
    /// Eye point in model coordinates, w = 1
    pub eye_point: Vec4,
}

impl ViewUniforms {
    pub fn new(
        modelview: &DMat4,
        projection: &DMat4,
        normal_transform: &DMat4,
        eye_point: DVec3,
    ) -> Self {
        let view_projection = *projection * *modelview;
        // modelview = rotation * translate(-eye); undoing the translation
        // in f64 leaves the rotation only
        let rotation = *modelview * DMat4::from_translation(eye_point);

        Self {
            view: modelview.as_mat4(),
            projection: projection.as_mat4(),
            view_projection: view_projection.as_mat4(),
            view_projection_rte: (*projection * rotation).as_mat4(),
            normal_transform: normal_transform.as_mat4(),
            eye_point: eye_point.as_vec3().extend(1.0),
        }
    }

    /// Raw bytes for a uniform buffer write
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "view_uniforms_tests.rs"]
mod tests;
