/// DrawContext: per-frame view and projection state.
///
/// Once per frame the render loop calls `reset` with the viewport, a
/// navigator and the globe. The context builds a complete `FrameState`:
/// modelview, projection and their product, the normal transform, the eye
/// point, dynamic near/far distances, a linear pixel-size model and the
/// model-space frustum. Every query reads that state until the next reset.
///
/// A reset replaces the previous frame wholesale. A failed reset leaves no
/// frame at all, so later queries fail with `InvalidState` instead of
/// reading stale or non-finite values.
///
/// Coordinate conventions:
/// - Model space: globe Cartesian, metres, +Y polar axis
/// - Screen space: viewport device pixels, origin lower-left, depth in [0, 1]
/// - Window space: host surface units, origin top-left, Y down

use glam::{DMat4, DVec2, DVec3, DVec4};
use crate::error::{Error, Result};
use crate::geom::{matrix, Line, Viewport};
use crate::globe::{Globe, Position, Sector};
use crate::navigate::Navigator;
use crate::{engine_debug, engine_error, engine_trace};
use super::clip_distance::{self, ClipDistanceInputs, ClipDistances};
use super::config::{DepthClipping, DrawContextConfig};
use super::frustum::Frustum;
use super::view_uniforms::ViewUniforms;

const LOG_SOURCE: &str = "globe3d::DrawContext";

// ============================================================================
// FrameState
// ============================================================================

/// Immutable view state of one frame.
///
/// `Clone + Send + Sync`: hand a copy to another thread (e.g. for picking)
/// with `DrawContext::snapshot`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    frame_number: u64,
    viewport: Viewport,
    modelview: DMat4,
    projection: DMat4,
    modelview_projection: DMat4,
    modelview_projection_inverse: DMat4,
    modelview_normal_transform: DMat4,
    eye_point: DVec3,
    eye_position: Position,
    clip_distances: ClipDistances,
    pixel_size_scale: f64,
    pixel_size_offset: f64,
    frustum_in_model_coordinates: Frustum,
    pixel_ratio: f64,
    depth_clipping: DepthClipping,
}

impl FrameState {
    /// Derive every per-frame quantity from scratch.
    pub fn compute(
        config: &DrawContextConfig,
        viewport: Viewport,
        navigator: &dyn Navigator,
        globe: &Globe,
        frame_number: u64,
    ) -> Result<Self> {
        viewport.validate()?;

        let pose = navigator.pose(globe)?;
        let modelview = pose.modelview()?;
        let eye_point = pose.eye_point;
        let eye_position = globe.position_from_point(eye_point);

        // Terrain bounds over the part of the globe visible from the eye
        let horizon = globe.ellipsoid().horizon_angle(eye_position.altitude);
        let sector = Sector::horizon_cap(eye_position.location(), horizon);
        let elevation = globe
            .min_and_max_elevations_for_sector(&sector)
            .scaled(config.vertical_exaggeration);

        let half_extents = matrix::frustum_half_extents(config.field_of_view_degrees, &viewport);
        let clip_distances = clip_distance::compute(
            globe.ellipsoid(),
            &ClipDistanceInputs {
                eye_altitude: eye_position.altitude,
                elevation,
                frustum_half_extents: half_extents,
            },
            &config.clip_distance_params(),
        )?;

        let projection = matrix::perspective_for_viewport(
            config.field_of_view_degrees,
            &viewport,
            clip_distances.near,
            clip_distances.far,
        )?;

        let modelview_projection = projection * modelview;
        let modelview_projection_inverse = matrix::try_invert(&modelview_projection)
            .ok_or_else(|| Error::singular("modelview-projection matrix"))?;
        let modelview_normal_transform = matrix::normal_transform(&modelview)
            .ok_or_else(|| Error::singular("modelview rotation"))?;

        let (pixel_size_scale, pixel_size_offset) = pixel_size_model(&projection, &viewport)?;

        let frustum_in_model_coordinates = Frustum::from_view_projection(&modelview_projection);

        Ok(Self {
            frame_number,
            viewport,
            modelview,
            projection,
            modelview_projection,
            modelview_projection_inverse,
            modelview_normal_transform,
            eye_point,
            eye_position,
            clip_distances,
            pixel_size_scale,
            pixel_size_offset,
            frustum_in_model_coordinates,
            pixel_ratio: config.pixel_ratio,
            depth_clipping: config.depth_clipping,
        })
    }

    // ===== GETTERS =====

    /// Sequence number of the reset that produced this frame, starting at 1
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Model to eye transform
    pub fn modelview(&self) -> &DMat4 {
        &self.modelview
    }

    /// Eye to clip transform
    pub fn projection(&self) -> &DMat4 {
        &self.projection
    }

    /// `projection * modelview`
    pub fn modelview_projection(&self) -> &DMat4 {
        &self.modelview_projection
    }

    pub fn modelview_projection_inverse(&self) -> &DMat4 {
        &self.modelview_projection_inverse
    }

    /// Inverse-transpose of the modelview's upper 3x3, no translation
    pub fn modelview_normal_transform(&self) -> &DMat4 {
        &self.modelview_normal_transform
    }

    /// Eye position in model coordinates
    pub fn eye_point(&self) -> DVec3 {
        self.eye_point
    }

    /// Eye position in geographic coordinates
    pub fn eye_position(&self) -> &Position {
        &self.eye_position
    }

    pub fn clip_distances(&self) -> ClipDistances {
        self.clip_distances
    }

    pub fn near_distance(&self) -> f64 {
        self.clip_distances.near
    }

    pub fn far_distance(&self) -> f64 {
        self.clip_distances.far
    }

    pub fn pixel_size_scale(&self) -> f64 {
        self.pixel_size_scale
    }

    pub fn pixel_size_offset(&self) -> f64 {
        self.pixel_size_offset
    }

    /// Inward-facing frustum planes in model coordinates
    pub fn frustum_in_model_coordinates(&self) -> &Frustum {
        &self.frustum_in_model_coordinates
    }

    // ===== PROJECTION =====

    /// Project a model point to screen coordinates.
    ///
    /// Returns viewport pixels (origin lower-left) and a depth in [0, 1].
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the point is not finite, lies behind the eye,
    ///   or (with `DepthClipping::Clip`) lies outside the near/far range
    /// - `DegenerateGeometry` if the point lies in the eye plane (w = 0)
    pub fn project(&self, model_point: DVec3) -> Result<DVec3> {
        if !model_point.is_finite() {
            return Err(Error::non_finite("model point"));
        }
        let clip = matrix::transform_homogeneous(&self.modelview_projection, model_point);
        let ndc = self.clip_to_ndc(clip)?;
        Ok(self.ndc_to_screen(ndc))
    }

    /// Project a model point with its depth pushed by `depth_offset`.
    ///
    /// The eye-space Z term of the clip depth is scaled by
    /// `1 + depth_offset`; negative offsets pull the point toward the eye.
    /// The biased depth is clamped to the depth range. Acceptance is the
    /// same as `project`.
    pub fn project_with_depth(&self, model_point: DVec3, depth_offset: f64) -> Result<DVec3> {
        if !model_point.is_finite() {
            return Err(Error::non_finite("model point"));
        }
        if !depth_offset.is_finite() {
            return Err(Error::non_finite("depth offset"));
        }

        let clip = matrix::transform_homogeneous(&self.modelview_projection, model_point);
        let mut ndc = self.clip_to_ndc(clip)?;

        let eye = matrix::transform_homogeneous(&self.modelview, model_point);
        let depth_row = self.projection.row(2);
        let biased_z = depth_row.x * eye.x
            + depth_row.y * eye.y
            + depth_row.z * eye.z * (1.0 + depth_offset)
            + depth_row.w * eye.w;
        ndc.z = (biased_z / clip.w).clamp(-1.0, 1.0);

        Ok(self.ndc_to_screen(ndc))
    }

    /// Convert a window point to viewport coordinates.
    ///
    /// The window origin is the top-left corner with Y down, in units of
    /// `pixel_ratio` device pixels. The result has its origin at the
    /// viewport's lower-left corner, Y up.
    pub fn convert_point_to_viewport(&self, window_point: DVec2) -> Result<DVec2> {
        if !window_point.is_finite() {
            return Err(Error::non_finite("window point"));
        }
        let device = window_point * self.pixel_ratio;
        Ok(DVec2::new(
            device.x,
            self.viewport.y + self.viewport.height - device.y,
        ))
    }

    /// Map a screen point (viewport pixels, depth in [0, 1]) back to model
    /// coordinates. Inverse of `project`.
    pub fn unproject(&self, screen_point: DVec3) -> Result<DVec3> {
        if !screen_point.is_finite() {
            return Err(Error::non_finite("screen point"));
        }
        let vp = &self.viewport;
        let ndc = DVec4::new(
            (screen_point.x - vp.x) / vp.width * 2.0 - 1.0,
            (screen_point.y - vp.y) / vp.height * 2.0 - 1.0,
            screen_point.z * 2.0 - 1.0,
            1.0,
        );
        let model = self.modelview_projection_inverse * ndc;
        if model.w == 0.0 {
            return Err(Error::DegenerateGeometry(
                "unprojected point is at infinity".to_string(),
            ));
        }
        Ok(model.truncate() / model.w)
    }

    /// Picking ray through a window point.
    ///
    /// The origin is the eye point. The direction is the unit vector from
    /// the point's unprojection on the near plane to its unprojection on
    /// the far plane.
    pub fn ray_through_screen_point(&self, window_point: DVec2) -> Result<Line> {
        let point = self.convert_point_to_viewport(window_point)?;

        let near_point = self.unproject(point.extend(0.0))?;
        let far_point = self.unproject(point.extend(1.0))?;

        let direction = (far_point - near_point).try_normalize().ok_or_else(|| {
            Error::DegenerateGeometry("near and far unprojections coincide".to_string())
        })?;

        Ok(Line::new(self.eye_point, direction))
    }

    /// Model-space size of one device pixel at `distance` from the eye
    #[inline]
    pub fn pixel_size_at_distance(&self, distance: f64) -> f64 {
        self.pixel_size_scale * distance + self.pixel_size_offset
    }

    /// f32 matrices for GPU upload
    pub fn view_uniforms(&self) -> ViewUniforms {
        ViewUniforms::new(
            &self.modelview,
            &self.projection,
            &self.modelview_normal_transform,
            self.eye_point,
        )
    }

    // ===== INTERNAL =====

    fn clip_to_ndc(&self, clip: DVec4) -> Result<DVec3> {
        if clip.w == 0.0 {
            return Err(Error::DegenerateGeometry(
                "point lies in the eye plane (w = 0)".to_string(),
            ));
        }
        if clip.w < 0.0 {
            return Err(Error::InvalidArgument("point is behind the eye".to_string()));
        }

        let ndc = clip.truncate() / clip.w;
        if self.depth_clipping == DepthClipping::Clip && !(-1.0..=1.0).contains(&ndc.z) {
            return Err(Error::InvalidArgument(format!(
                "point is outside the near/far range (depth {})",
                ndc.z * 0.5 + 0.5
            )));
        }
        Ok(ndc)
    }

    fn ndc_to_screen(&self, ndc: DVec3) -> DVec3 {
        let vp = &self.viewport;
        DVec3::new(
            vp.x + (ndc.x * 0.5 + 0.5) * vp.width,
            vp.y + (ndc.y * 0.5 + 0.5) * vp.height,
            ndc.z * 0.5 + 0.5,
        )
    }
}

/// Linear pixel size model `size(d) = scale * d + offset`.
///
/// Unprojects the near and far corners of the NDC cube through the inverse
/// projection and fits the frustum width against distance, per device
/// pixel. A perspective projection gives `offset ≈ 0`; an orthographic one
/// gives `scale ≈ 0`.
fn pixel_size_model(projection: &DMat4, viewport: &Viewport) -> Result<(f64, f64)> {
    let inverse = matrix::try_invert(projection).ok_or_else(|| Error::singular("projection matrix"))?;

    let near_bottom_left = inverse.project_point3(DVec3::new(-1.0, -1.0, -1.0));
    let near_top_right = inverse.project_point3(DVec3::new(1.0, 1.0, -1.0));
    let far_bottom_left = inverse.project_point3(DVec3::new(-1.0, -1.0, 1.0));
    let far_top_right = inverse.project_point3(DVec3::new(1.0, 1.0, 1.0));

    let near_width = (near_top_right.x - near_bottom_left.x).abs();
    let far_width = (far_top_right.x - far_bottom_left.x).abs();
    let near_distance = -near_bottom_left.z;
    let far_distance = -far_bottom_left.z;

    let width_scale = (far_width - near_width) / (far_distance - near_distance);
    let width_offset = near_width - width_scale * near_distance;

    let scale = width_scale / viewport.width;
    let offset = width_offset / viewport.width;
    if !scale.is_finite() || !offset.is_finite() {
        return Err(Error::DegenerateGeometry("pixel size model is not finite".to_string()));
    }
    Ok((scale, offset))
}

// ============================================================================
// DrawContext
// ============================================================================

/// Per-frame view state owner.
///
/// # Example
///
/// ```no_run
/// use globe_3d_view::globe3d::{
///     DrawContext, FixedElevationBounds, Globe, LookAtNavigator, Viewport,
/// };
/// use globe_3d_view::glam::{DVec2, DVec3};
///
/// let globe = Globe::wgs84(FixedElevationBounds::new(125.0, 350.0));
/// let navigator = LookAtNavigator::default();
/// let mut dc = DrawContext::new();
///
/// dc.reset(Viewport::from_size(848.0, 848.0), &navigator, &globe)?;
/// let screen = dc.project(DVec3::new(-1405324.651, 5668987.866, -2535930.346))?;
/// let ray = dc.ray_through_screen_point(DVec2::new(13.5, 635.0))?;
/// let picked = globe.intersect_line(&ray);
/// # Ok::<(), globe_3d_view::globe3d::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DrawContext {
    config: DrawContextConfig,
    frame: Option<FrameState>,
    frames_computed: u64,
}

impl DrawContext {
    /// Draw context with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw context with a validated configuration
    pub fn with_config(config: DrawContextConfig) -> Result<Self> {
        config.validate().map_err(Self::log_and_return_error)?;
        engine_debug!(LOG_SOURCE, "Configured: {:?}", config);
        Ok(Self { config, frame: None, frames_computed: 0 })
    }

    pub fn config(&self) -> &DrawContextConfig {
        &self.config
    }

    /// Recompute the frame for `viewport`, `navigator` and `globe`.
    ///
    /// The previous frame is dropped first; on failure no frame remains.
    pub fn reset(
        &mut self,
        viewport: Viewport,
        navigator: &dyn Navigator,
        globe: &Globe,
    ) -> Result<&FrameState> {
        self.frame = None;
        let frame_number = self.frames_computed + 1;

        let frame = FrameState::compute(&self.config, viewport, navigator, globe, frame_number)
            .map_err(Self::log_and_return_error)?;

        engine_trace!(
            LOG_SOURCE,
            "Frame {}: {}x{} near {:.3} far {:.3} eye altitude {:.3}",
            frame_number,
            viewport.width,
            viewport.height,
            frame.near_distance(),
            frame.far_distance(),
            frame.eye_position().altitude
        );

        self.frames_computed = frame_number;
        Ok(&*self.frame.insert(frame))
    }

    /// Current frame
    ///
    /// # Errors
    ///
    /// `InvalidState` before the first successful reset or after a failed one.
    pub fn frame(&self) -> Result<&FrameState> {
        self.frame.as_ref().ok_or_else(|| {
            Error::InvalidState("no frame computed; call reset first".to_string())
        })
    }

    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    /// Owned copy of the current frame for use on another thread
    pub fn snapshot(&self) -> Option<FrameState> {
        self.frame.clone()
    }

    /// Drop the current frame
    pub fn invalidate(&mut self) {
        self.frame = None;
    }

    /// Number of successful resets so far
    pub fn frames_computed(&self) -> u64 {
        self.frames_computed
    }

    // ===== FRAME QUERIES =====

    pub fn project(&self, model_point: DVec3) -> Result<DVec3> {
        self.frame()?.project(model_point)
    }

    pub fn project_with_depth(&self, model_point: DVec3, depth_offset: f64) -> Result<DVec3> {
        self.frame()?.project_with_depth(model_point, depth_offset)
    }

    pub fn convert_point_to_viewport(&self, window_point: DVec2) -> Result<DVec2> {
        self.frame()?.convert_point_to_viewport(window_point)
    }

    pub fn unproject(&self, screen_point: DVec3) -> Result<DVec3> {
        self.frame()?.unproject(screen_point)
    }

    pub fn ray_through_screen_point(&self, window_point: DVec2) -> Result<Line> {
        self.frame()?.ray_through_screen_point(window_point)
    }

    pub fn pixel_size_at_distance(&self, distance: f64) -> Result<f64> {
        Ok(self.frame()?.pixel_size_at_distance(distance))
    }

    /// Log an error before handing it back to the caller
    fn log_and_return_error(error: Error) -> Error {
        engine_error!(LOG_SOURCE, "{}", error);
        error
    }
}

#[cfg(test)]
#[path = "draw_context_tests.rs"]
mod tests;
