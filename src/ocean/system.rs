//! High-level ocean system resolving per-frame wave parameters.

use glam::DVec3;

use super::{OceanGrid, WaveField, WaveFieldParams, Wavelength};
use crate::error::{ensure_finite, Result};
use crate::frame::FrameContext;
use crate::params::{GridSpec, OceanSettings};

/// Position and up-vector for an object riding the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPose {
    pub position: DVec3,
    pub up: DVec3,
}

/// Validated wave field plus the patch it deforms
pub struct OceanSystem {
    pub grid: OceanGrid,
    field: WaveField,
    wavelength: Wavelength,
    base_amplitude: f64,
}

impl OceanSystem {
    /// Validate settings once; every per-frame call after this is total.
    pub fn new(settings: &OceanSettings, grid: &GridSpec) -> Result<Self> {
        let field = WaveField::new(&settings.directions, settings.output_scale)?;
        let wavelength = Wavelength::new(settings.wavelength_m)?;
        let base_amplitude = ensure_finite("base_amplitude", settings.base_amplitude)?;

        log::debug!(
            "ocean: wavelength {} m, period {:.3} s, {} samples",
            wavelength.get(),
            wavelength.period(),
            grid.vertex_count()
        );

        Ok(Self {
            grid: OceanGrid::new(grid),
            field,
            wavelength,
            base_amplitude,
        })
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    /// Wave parameters for a frame.
    ///
    /// Audio amplitude replaces the base amplitude when present; a
    /// non-finite audio value degrades to a flat field. A non-finite frame
    /// time falls back to `t = 0` so heights stay finite; hosts should build
    /// frames with [`FrameContext::checked`] to reject it instead.
    pub fn params_for(&self, frame: &FrameContext) -> WaveFieldParams {
        let amplitude = match frame.audio_amplitude {
            Some(a) if a.is_finite() => a,
            Some(_) => 0.0,
            None => self.base_amplitude,
        };
        let time = if frame.time_s.is_finite() {
            frame.time_s
        } else {
            log::warn!("non-finite frame time {}, using 0", frame.time_s);
            0.0
        };
        WaveFieldParams {
            amplitude,
            wavelength: self.wavelength,
            time,
        }
    }

    /// Deform the grid for this frame and return the parameters used
    pub fn update(&mut self, frame: &FrameContext) -> WaveFieldParams {
        let params = self.params_for(frame);
        self.grid.update(&self.field, &params);
        params
    }

    /// Single-point placement of a floating object
    pub fn float_pose(&self, x: f64, z: f64, draft: f64, frame: &FrameContext) -> FloatPose {
        let params = self.params_for(frame);
        FloatPose {
            position: DVec3::new(x, self.field.float_height(x, z, &params, draft), z),
            up: self.field.surface_normal(x, z, &params),
        }
    }
}
