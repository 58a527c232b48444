//! Camera module: the per-frame draw context and its building blocks.
//!
//! `DrawContext` owns the view state of the current frame. Clip distance
//! selection, the frustum and the GPU uniform block are usable on their own.

mod frustum;
pub mod clip_distance;
mod config;
mod view_uniforms;
mod draw_context;

pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use clip_distance::{ClipDistances, ClipDistanceInputs, ClipDistanceParams};
pub use config::{DepthClipping, DrawContextConfig};
pub use view_uniforms::ViewUniforms;
pub use draw_context::{DrawContext, FrameState};
