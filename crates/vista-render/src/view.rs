//! View-wide settings and the state shared by every renderable.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use vista_core::{Result, Validate, VistaError};
use vista_math::{Point3, Vector3};
use vista_mesh::{StereoMode, TessellationContext};

use crate::camera::Camera;
use crate::display_list::ModelCache;

/// User-tunable view settings, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Global scale factor applied to positions and sizes.
    pub gcf: f64,
    /// Per-axis global scale.
    pub gcfvec: Vector3,
    /// Render for red/cyan glasses.
    pub anaglyph: bool,
    /// With `anaglyph`, keep (desaturated) colors instead of going gray.
    pub coloranaglyph: bool,
    /// Added to every selected level of detail.
    pub lod_adjust: i32,
    /// Viewport height in pixels.
    pub viewport_height: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            gcf: 1.0,
            gcfvec: Vector3::ONE,
            anaglyph: false,
            coloranaglyph: false,
            lod_adjust: 0,
            viewport_height: 600.0,
        }
    }
}

impl ViewConfig {
    /// Parse and validate a JSON config; missing fields take their defaults.
    ///
    /// # Errors
    /// [`VistaError::Parse`] for malformed JSON, [`VistaError::Configuration`]
    /// for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| VistaError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file; see [`ViewConfig::from_json`].
    ///
    /// # Errors
    /// [`VistaError::Io`] when the file cannot be read, otherwise as
    /// [`ViewConfig::from_json`].
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("loading view config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn stereo_mode(&self) -> StereoMode {
        match (self.anaglyph, self.coloranaglyph) {
            (false, _) => StereoMode::Off,
            (true, true) => StereoMode::ColorAnaglyph,
            (true, false) => StereoMode::GrayAnaglyph,
        }
    }

    pub fn tessellation_context(&self) -> TessellationContext {
        TessellationContext {
            gcf: self.gcf,
            gcfvec: self.gcfvec,
            stereo: self.stereo_mode(),
        }
    }
}

impl Validate for ViewConfig {
    fn validate(&self) -> Result<()> {
        if !(self.gcf.is_finite() && self.gcf > 0.0) {
            return Err(VistaError::Configuration(format!(
                "gcf must be positive and finite, got {}",
                self.gcf
            )));
        }
        if !self.gcfvec.is_finite() || self.gcfvec.min_element() <= 0.0 {
            return Err(VistaError::Configuration(format!(
                "gcfvec components must be positive and finite, got {}",
                self.gcfvec
            )));
        }
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.0) {
            return Err(VistaError::Configuration(format!(
                "viewport height must be positive, got {}",
                self.viewport_height
            )));
        }
        Ok(())
    }
}

/// Settings, camera and compiled models shared by all objects of a scene.
#[derive(Debug, Clone, Default)]
pub struct View {
    config: ViewConfig,
    camera: Camera,
    models: ModelCache,
}

impl View {
    /// # Errors
    /// Returns [`VistaError::Configuration`] when `config` fails validation.
    pub fn new(config: ViewConfig, camera: Camera) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            camera,
            models: ModelCache::new(),
        })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn gcf(&self) -> f64 {
        self.config.gcf
    }

    pub fn lod_adjust(&self) -> i32 {
        self.config.lod_adjust
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn models(&self) -> &ModelCache {
        &self.models
    }

    pub fn models_mut(&mut self) -> &mut ModelCache {
        &mut self.models
    }

    pub fn tessellation_context(&self) -> TessellationContext {
        self.config.tessellation_context()
    }

    /// Approximate on-screen radius, in pixels, of a sphere at `pos`.
    ///
    /// Returns `-1.0` when the sphere's center is not in front of the camera.
    pub fn pixel_coverage(&self, pos: Point3, radius: f64) -> f64 {
        let gcf = self.config.gcf;
        let dist = (pos * gcf - self.camera.eye).dot(self.camera.forward());
        if dist <= 0.0 {
            return -1.0;
        }
        (radius * gcf / dist) / (self.camera.fov_y / 2.0).tan() * self.config.viewport_height / 2.0
    }
}
