//! Wave-field parameters and the sample grid used for mesh deformation.

use crate::ocean::DEFAULT_DIRECTIONS;

/// Wave-field knobs
#[derive(Debug, Clone)]
pub struct OceanSettings {
    /// Wavelength shared by every component (world units, must be > 0)
    /// music scene value: 5.0
    pub wavelength_m: f64,

    /// Amplitude used when no audio envelope is attached (dimensionless,
    /// divided by the wavenumber before use)
    /// music scene value: 0.2
    pub base_amplitude: f64,

    /// Output multiplier applied to the summed height
    /// 1.0 = raw sum, 0.5 = halved variant
    pub output_scale: f64,

    /// Wave directions in the x/z plane (normalized on build)
    pub directions: Vec<[f64; 2]>,
}

impl Default for OceanSettings {
    fn default() -> Self {
        Self {
            wavelength_m: 5.0,
            base_amplitude: 0.2,
            output_scale: 1.0,
            directions: DEFAULT_DIRECTIONS.to_vec(),
        }
    }
}

/// Flat patch of sample points the host deforms every frame
#[derive(Debug, Clone)]
pub struct GridSpec {
    /// Cells per side (vertices per side = resolution + 1)
    pub resolution: usize,

    /// Spacing between samples (world units)
    pub spacing_m: f32,

    /// Corner of the patch in the x/z plane
    pub origin: [f32; 2],
}

impl Default for GridSpec {
    fn default() -> Self {
        // 100x100 patch stepping 0.1 from (-1, -1)
        Self {
            resolution: 100,
            spacing_m: 0.1,
            origin: [-1.0, -1.0],
        }
    }
}

impl GridSpec {
    /// Single sample at the origin, for point queries that never deform a mesh
    pub fn point() -> Self {
        Self {
            resolution: 0,
            ..Self::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        (self.resolution + 1).pow(2)
    }
}
