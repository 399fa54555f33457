use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Closest the camera may zoom toward the pivot.
pub const MIN_RADIUS: f32 = 2.0;
/// Farthest the camera may zoom away from the pivot.
pub const MAX_RADIUS: f32 = 10.0;
/// Lowest elevation (degrees above the horizontal plane).
pub const MIN_ELEVATION: f32 = 30.0;
/// Highest elevation (degrees, straight down onto the pivot).
pub const MAX_ELEVATION: f32 = 90.0;
/// Degrees of rotation per pixel of drag.
pub const ROTATION_SENSITIVITY: f32 = 0.5;
/// Radius change per pixel of vertical drag.
pub const ZOOM_SENSITIVITY: f32 = 0.02;
/// World units of pivot travel per pixel of drag. Negative so the scene
/// follows the pointer.
pub const PAN_SENSITIVITY: f32 = -0.01;
/// Vertical field of view in degrees.
pub const FIELD_OF_VIEW: f32 = 75.0;
/// Near clipping plane distance.
pub const Z_NEAR: f32 = 0.1;
/// Far clipping plane distance.
pub const Z_FAR: f32 = 1000.0;
/// Radius the rig starts with.
pub const INITIAL_RADIUS: f32 = 4.0;

/// How the projection aspect ratio is derived from the viewport.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AspectMode {
    /// `width / height` of the viewport.
    #[default]
    Viewport,
    /// `height / height`, i.e. always 1.0. Reproduces the legacy
    /// controller, which stretched the scene on non-square windows.
    Square,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, orbit limits and drag sensitivities.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Aspect ratio policy.
    #[schemars(skip)]
    pub aspect_mode: AspectMode,
    /// Radius the rig starts with.
    #[schemars(skip)]
    pub initial_radius: f32,
    /// Lower zoom bound.
    #[schemars(title = "Min Distance", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub min_radius: f32,
    /// Upper zoom bound.
    #[schemars(title = "Max Distance", range(min = 0.5, max = 100.0), extend("step" = 0.5))]
    pub max_radius: f32,
    /// Lower elevation bound in degrees.
    #[schemars(title = "Min Elevation", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub min_elevation: f32,
    /// Upper elevation bound in degrees.
    #[schemars(title = "Max Elevation", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub max_elevation: f32,
    /// Degrees of rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub rotation_sensitivity: f32,
    /// Radius change per pixel of vertical drag.
    #[schemars(title = "Zoom Speed", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub zoom_sensitivity: f32,
    /// Pivot travel per pixel of drag (negative drags the scene with the
    /// pointer).
    #[schemars(title = "Pan Speed", range(min = -0.1, max = 0.1), extend("step" = 0.005))]
    pub pan_sensitivity: f32,
    /// Leave the camera untouched when a recompute lands on the exact same
    /// eye and target.
    #[schemars(skip)]
    pub skip_unchanged: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: FIELD_OF_VIEW,
            znear: Z_NEAR,
            zfar: Z_FAR,
            aspect_mode: AspectMode::Viewport,
            initial_radius: INITIAL_RADIUS,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_elevation: MIN_ELEVATION,
            max_elevation: MAX_ELEVATION,
            rotation_sensitivity: ROTATION_SENSITIVITY,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            pan_sensitivity: PAN_SENSITIVITY,
            skip_unchanged: true,
        }
    }
}

impl CameraOptions {
    /// Check that these options describe a usable camera.
    ///
    /// # Errors
    ///
    /// [`OrbitError::InvalidOptions`] for non-finite values, inverted or
    /// out-of-range bounds, or a degenerate projection.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let fields = [
            ("fovy", self.fovy),
            ("znear", self.znear),
            ("zfar", self.zfar),
            ("initial_radius", self.initial_radius),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("min_elevation", self.min_elevation),
            ("max_elevation", self.max_elevation),
            ("rotation_sensitivity", self.rotation_sensitivity),
            ("zoom_sensitivity", self.zoom_sensitivity),
            ("pan_sensitivity", self.pan_sensitivity),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite")));
        }

        if self.fovy <= 0.0 || self.fovy >= 180.0 {
            return Err(invalid(format!(
                "fovy must lie in (0, 180), got {}",
                self.fovy
            )));
        }
        if self.znear <= 0.0 || self.znear >= self.zfar {
            return Err(invalid(format!(
                "clip planes must satisfy 0 < znear < zfar, got {} / {}",
                self.znear, self.zfar
            )));
        }
        if self.min_radius <= 0.0 || self.min_radius > self.max_radius {
            return Err(invalid(format!(
                "radius bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.min_radius, self.max_radius
            )));
        }
        if !(self.min_radius..=self.max_radius).contains(&self.initial_radius) {
            return Err(invalid(format!(
                "initial_radius {} lies outside [{}, {}]",
                self.initial_radius, self.min_radius, self.max_radius
            )));
        }
        if self.min_elevation < -90.0
            || self.max_elevation > 90.0
            || self.min_elevation > self.max_elevation
        {
            return Err(invalid(format!(
                "elevation bounds must satisfy -90 <= min <= max <= 90, got \
                 [{}, {}]",
                self.min_elevation, self.max_elevation
            )));
        }
        Ok(())
    }

    /// Clamp a radius into `[min_radius, max_radius]`.
    #[must_use]
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius.clamp(self.min_radius, self.max_radius)
    }

    /// Clamp an elevation into `[min_elevation, max_elevation]`.
    #[must_use]
    pub fn clamp_elevation(&self, elevation: f32) -> f32 {
        elevation.clamp(self.min_elevation, self.max_elevation)
    }
}

fn invalid(msg: String) -> OrbitError {
    OrbitError::InvalidOptions(msg)
}
