//! Offline preview and trace configuration.

use std::path::PathBuf;

use crate::error::{OceanError, Result};

/// Top-down preview image of the shaded surface
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Image width and height (pixels)
    pub size_px: u32,

    /// Half-width of the rendered square in world units
    pub extent_m: f64,

    pub output: PathBuf,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            size_px: 512,
            extent_m: 10.0,
            output: PathBuf::from("ocean.png"),
        }
    }
}

impl PreviewConfig {
    /// World units covered by one pixel
    pub fn meters_per_pixel(&self) -> f64 {
        2.0 * self.extent_m / self.size_px.max(1) as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.size_px == 0 {
            return Err(OceanError::InvalidPreview("size must be > 0 pixels".into()));
        }
        if !(self.extent_m.is_finite() && self.extent_m > 0.0) {
            return Err(OceanError::InvalidPreview(format!(
                "extent must be finite and > 0, got {}",
                self.extent_m
            )));
        }
        Ok(())
    }
}

/// Audio-driven float trace
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Frame rate used to slice the audio (FPS)
    pub fps: u32,

    /// Stop after this many frames (None = whole file)
    pub max_frames: Option<usize>,

    /// Sample point of the floating object
    pub position: [f64; 2],

    /// Depth of the object below the surface (world units)
    pub draft_m: f64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            max_frames: None,
            position: [0.0, 0.0],
            draft_m: 0.0,
        }
    }
}
