//! Camera and input configuration with TOML preset support.
//!
//! Every constant the controller uses (clip planes, orbit limits, drag
//! sensitivities, release policy) lives here. Options serialize to/from
//! TOML so hosts can ship presets alongside their scenes.

mod camera;
mod input;

use std::path::Path;

pub use camera::{
    AspectMode, CameraOptions, FIELD_OF_VIEW, INITIAL_RADIUS, MAX_ELEVATION,
    MAX_RADIUS, MIN_ELEVATION, MIN_RADIUS, PAN_SENSITIVITY,
    ROTATION_SENSITIVITY, ZOOM_SENSITIVITY, Z_FAR, Z_NEAR,
};
pub use input::{InputOptions, ReleaseMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, orbit limits and sensitivities.
    pub camera: CameraOptions,
    /// Pointer handling options.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse and validate options from TOML text. Missing fields use
    /// defaults.
    ///
    /// # Errors
    ///
    /// [`OrbitError::OptionsParse`] for malformed TOML,
    /// [`OrbitError::InvalidOptions`] if validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, OrbitError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// As [`Options::from_toml_str`], plus [`OrbitError::Io`] if the file
    /// cannot be read.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::debug!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`OrbitError::Io`] if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)
    }

    /// Check every section for consistency.
    ///
    /// # Errors
    ///
    /// [`OrbitError::InvalidOptions`] describing the first problem found.
    pub fn validate(&self) -> Result<(), OrbitError> {
        self.camera.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn defaults_match_named_constants() {
        let camera = CameraOptions::default();
        assert_eq!(camera.min_radius, MIN_RADIUS);
        assert_eq!(camera.max_radius, MAX_RADIUS);
        assert_eq!(camera.min_elevation, 30.0);
        assert_eq!(camera.max_elevation, 90.0);
        assert_eq!(camera.rotation_sensitivity, 0.5);
        assert_eq!(camera.zoom_sensitivity, 0.02);
        assert_eq!(camera.pan_sensitivity, -0.01);
        assert_eq!(camera.fovy, 75.0);
        assert_eq!(camera.znear, 0.1);
        assert_eq!(camera.zfar, 1000.0);
        assert_eq!(camera.initial_radius, 4.0);
        assert_eq!(camera.aspect_mode, AspectMode::Viewport);
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
max_radius = 25.0

[input]
release_mode = "per_button"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.max_radius, 25.0);
        assert_eq!(opts.input.release_mode, ReleaseMode::PerButton);
        // Everything else should be default
        assert_eq!(opts.camera.min_radius, MIN_RADIUS);
        assert_eq!(opts.camera.pan_sensitivity, PAN_SENSITIVITY);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, OrbitError::OptionsParse(_)));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let toml_str = r"
[camera]
min_radius = 8.0
max_radius = 3.0
";
        let err = Options::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, OrbitError::InvalidOptions(_)));

        let mut camera = CameraOptions::default();
        camera.min_elevation = 60.0;
        camera.max_elevation = 45.0;
        assert!(camera.validate().is_err());
    }

    #[test]
    fn degenerate_projection_is_rejected() {
        let mut camera = CameraOptions::default();
        camera.znear = 0.0;
        assert!(camera.validate().is_err());

        let mut camera = CameraOptions::default();
        camera.fovy = 180.0;
        assert!(camera.validate().is_err());

        let mut camera = CameraOptions::default();
        camera.zoom_sensitivity = f32::NAN;
        let err = camera.validate().unwrap_err();
        assert!(err.to_string().contains("zoom_sensitivity"));
    }

    #[test]
    fn initial_radius_must_respect_bounds() {
        let mut camera = CameraOptions::default();
        camera.initial_radius = 12.0;
        assert!(camera.validate().is_err());
        camera.max_radius = 12.0;
        assert!(camera.validate().is_ok());
    }

    #[test]
    fn clamp_helpers_respect_bounds() {
        let camera = CameraOptions::default();
        assert_eq!(camera.clamp_radius(0.5), MIN_RADIUS);
        assert_eq!(camera.clamp_radius(50.0), MAX_RADIUS);
        assert_eq!(camera.clamp_radius(5.5), 5.5);
        assert_eq!(camera.clamp_elevation(0.0), MIN_ELEVATION);
        assert_eq!(camera.clamp_elevation(120.0), MAX_ELEVATION);
    }

    #[test]
    fn save_then_load_preserves_options() {
        let mut opts = Options::default();
        opts.camera.aspect_mode = AspectMode::Square;
        opts.camera.rotation_sensitivity = 0.25;
        opts.input.release_mode = ReleaseMode::PerButton;

        let path = std::env::temp_dir()
            .join(format!("orbit-camera-{}", std::process::id()))
            .join("preset.toml");
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(opts, loaded);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("orbit-camera-missing/none.toml");
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, OrbitError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("input"));

        // Camera exposes sensitivities and limits but not clip planes
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("rotation_sensitivity").is_some());
        assert!(camera.get("max_radius").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("skip_unchanged").is_none());
    }
}
