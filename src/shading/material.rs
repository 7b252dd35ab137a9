//! Material parameters for cel and flat shading.
//!
//! A shared base material is never mutated. Per-draw overrides go through
//! [`MaterialBuilder`] (validated) or [`MaterialParams::with_color`], both of
//! which return a new value.

use glam::DVec4;

use crate::error::{ensure_finite, OceanError, Result};

/// Validated shading parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    ambient: f64,
    diffusivity: f64,
    specularity: f64,
    smoothness: f64,
    low_threshold: f64,
    high_threshold: f64,
    low_specular: f64,
    high_specular: f64,
    color: DVec4,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            ambient: 0.0,
            diffusivity: 1.0,
            specularity: 1.0,
            smoothness: 40.0,
            low_threshold: -0.01,
            high_threshold: 0.01,
            low_specular: 0.9,
            high_specular: 0.95,
            color: DVec4::ONE,
        }
    }
}

impl MaterialParams {
    pub fn builder() -> MaterialBuilder {
        MaterialBuilder {
            params: Self::default(),
        }
    }

    /// Start an override from this material
    pub fn to_builder(&self) -> MaterialBuilder {
        MaterialBuilder { params: *self }
    }

    /// Copy with a different base colour.
    pub fn with_color(&self, color: DVec4) -> Self {
        Self { color, ..*self }
    }

    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    pub fn specularity(&self) -> f64 {
        self.specularity
    }

    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    /// `(low, high)` bounds on `n · l`
    pub fn diffuse_band(&self) -> (f64, f64) {
        (self.low_threshold, self.high_threshold)
    }

    /// `(low, high)` bounds on the shaped specular response
    pub fn specular_band(&self) -> (f64, f64) {
        (self.low_specular, self.high_specular)
    }

    pub fn color(&self) -> DVec4 {
        self.color
    }

    // Presets from the reference scenes.

    /// Glossy cel material with a tight terminator and small highlight
    pub fn sphere() -> Self {
        Self {
            ambient: 0.7,
            diffusivity: 0.3,
            specularity: 0.35,
            smoothness: 40.0,
            low_threshold: -0.01,
            high_threshold: 0.01,
            low_specular: 0.9,
            high_specular: 0.95,
            color: DVec4::ONE,
        }
    }

    /// Matte cel material
    pub fn axis() -> Self {
        Self {
            ambient: 0.6,
            diffusivity: 0.5,
            specularity: 0.0,
            ..Self::default()
        }
    }

    /// Cel material for the wave grid, light blue
    pub fn ocean() -> Self {
        Self {
            color: DVec4::new(0.68, 0.85, 0.90, 1.0),
            ..Self::sphere()
        }
    }

    /// Flat unlit black used by outline shells
    pub fn outline() -> Self {
        Self {
            ambient: 0.0,
            diffusivity: 0.0,
            specularity: 0.0,
            color: DVec4::new(0.0, 0.0, 0.0, 1.0),
            ..Self::default()
        }
    }

    /// Fully ambient grey backdrop
    pub fn background() -> Self {
        Self {
            ambient: 1.0,
            diffusivity: 0.0,
            specularity: 0.0,
            color: DVec4::new(0.69, 0.69, 0.69, 1.0),
            ..Self::default()
        }
    }

    /// Dark base for textured figures; threshold band sits above the terminator
    pub fn textured() -> Self {
        Self {
            ambient: 0.8,
            diffusivity: 0.4,
            specularity: 0.0,
            low_threshold: 0.1,
            high_threshold: 0.11,
            color: DVec4::new(0.1, 0.1, 0.1, 1.0),
            ..Self::default()
        }
    }
}

/// Override-and-build for [`MaterialParams`]
#[derive(Debug, Clone, Copy)]
pub struct MaterialBuilder {
    params: MaterialParams,
}

impl MaterialBuilder {
    pub fn ambient(mut self, v: f64) -> Self {
        self.params.ambient = v;
        self
    }

    pub fn diffusivity(mut self, v: f64) -> Self {
        self.params.diffusivity = v;
        self
    }

    pub fn specularity(mut self, v: f64) -> Self {
        self.params.specularity = v;
        self
    }

    pub fn smoothness(mut self, v: f64) -> Self {
        self.params.smoothness = v;
        self
    }

    pub fn thresholds(mut self, low: f64, high: f64) -> Self {
        self.params.low_threshold = low;
        self.params.high_threshold = high;
        self
    }

    pub fn specular_thresholds(mut self, low: f64, high: f64) -> Self {
        self.params.low_specular = low;
        self.params.high_specular = high;
        self
    }

    pub fn color(mut self, color: DVec4) -> Self {
        self.params.color = color;
        self
    }

    /// Validate and produce the material.
    ///
    /// Equal thresholds are accepted and shade as a hard step; inverted ones
    /// are rejected.
    pub fn build(self) -> Result<MaterialParams> {
        let p = self.params;
        for (name, value) in [
            ("ambient", p.ambient),
            ("diffusivity", p.diffusivity),
            ("specularity", p.specularity),
            ("smoothness", p.smoothness),
            ("low_threshold", p.low_threshold),
            ("high_threshold", p.high_threshold),
            ("low_specular", p.low_specular),
            ("high_specular", p.high_specular),
        ] {
            ensure_finite(name, value)?;
        }
        if !p.color.is_finite() {
            return Err(OceanError::NonFinite {
                name: "color",
                value: f64::NAN,
            });
        }
        if p.low_threshold > p.high_threshold {
            return Err(OceanError::InvertedThresholds {
                band: "diffuse",
                low: p.low_threshold,
                high: p.high_threshold,
            });
        }
        if p.low_specular > p.high_specular {
            return Err(OceanError::InvertedThresholds {
                band: "specular",
                low: p.low_specular,
                high: p.high_specular,
            });
        }
        if p.smoothness <= 0.0 {
            return Err(OceanError::InvalidSmoothness(p.smoothness));
        }
        Ok(p)
    }
}
