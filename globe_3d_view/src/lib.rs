/*!
# Globe3D View

Per-frame view and projection core of a 3D globe renderer.

Once per frame a [`DrawContext`](globe3d::DrawContext) is reset from the
viewport, a navigator pose and the globe. It then answers every
projection question the renderer and the picking code ask during that
frame.

## Architecture

- **DrawContext**: owns the current `FrameState`, recomputed on `reset`
- **FrameState**: modelview, projection, clip distances, frustum, pixel size
- **Navigator**: source of the camera pose (`LookAtNavigator` built in)
- **Globe**: reference ellipsoid plus an injected elevation source
- **Frustum / Plane / Line**: model-space geometry for culling and picking

All math is f64 (glam `DVec3`, `DMat4`); f32 copies are produced only for
GPU upload via `ViewUniforms`.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod geom;
pub mod globe;
pub mod navigate;
pub mod camera;

// Main globe3d namespace module
pub mod globe3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Draw context
    pub use crate::camera::{
        DepthClipping, DrawContext, DrawContextConfig, FrameState, Frustum, FrustumTest,
        ViewUniforms,
    };

    // Geometry
    pub use crate::geom::{BoundingBox, BoundingSphere, BoundingVolume, Line, Plane, Viewport};

    // Globe model
    pub use crate::globe::{
        ElevationBounds, ElevationSource, Ellipsoid, FixedElevationBounds, Globe, Location,
        Position, Sector, ZeroElevation,
    };

    // Camera pose
    pub use crate::navigate::{LookAtNavigator, Navigator, NavigatorPose};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
