//! Summed vertical Gerstner-style waves.
//!
//! Each component contributes `d.y * (A / k) * cos(k * (d · (x, z) - c * t))`
//! where `k = 2π / wavelength` and `c = sqrt(g / k)`. Only the vertical term is
//! modelled; there is no horizontal displacement.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};

use crate::error::{ensure_finite, OceanError, Result};

/// Gravitational acceleration used to derive phase speed (m/s²)
pub const GRAVITY_M_PER_S2: f64 = 9.8;

/// Reference wave directions in the x/z plane
pub const DEFAULT_DIRECTIONS: [[f64; 2]; 3] = [[1.0, 1.0], [0.0, 1.0], [1.0, 0.0]];

/// Strictly positive, finite wavelength (world units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wavelength(f64);

impl Wavelength {
    pub fn new(meters: f64) -> Result<Self> {
        if meters.is_finite() && meters > 0.0 {
            Ok(Self(meters))
        } else {
            Err(OceanError::InvalidWavelength(meters))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Angular wavenumber `k = 2π / λ`
    pub fn wavenumber(self) -> f64 {
        TAU / self.0
    }

    /// Phase speed `c = sqrt(g / k)`
    pub fn phase_speed(self) -> f64 {
        (GRAVITY_M_PER_S2 / self.wavenumber()).sqrt()
    }

    /// Time for a crest to travel one wavelength (seconds)
    pub fn period(self) -> f64 {
        self.0 / self.phase_speed()
    }
}

/// Knobs shared by every component for one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveFieldParams {
    /// User-facing amplitude; negative values invert the field
    pub amplitude: f64,
    pub wavelength: Wavelength,
    /// Seconds; may run backward
    pub time: f64,
}

impl WaveFieldParams {
    /// Validate raw scalars into evaluation parameters.
    pub fn new(amplitude: f64, wavelength: f64, time: f64) -> Result<Self> {
        Ok(Self {
            amplitude: ensure_finite("amplitude", amplitude)?,
            wavelength: Wavelength::new(wavelength)?,
            time: ensure_finite("time", time)?,
        })
    }

    pub fn with_amplitude(self, amplitude: f64) -> Self {
        Self { amplitude, ..self }
    }

    pub fn with_time(self, time: f64) -> Self {
        Self { time, ..self }
    }
}

/// One directional wave. Direction is normalized at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveComponent {
    direction: DVec2,
}

impl WaveComponent {
    pub fn new(direction: DVec2) -> Option<Self> {
        direction
            .try_normalize()
            .map(|direction| Self { direction })
    }

    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    fn phase(&self, x: f64, z: f64, k: f64, c: f64, t: f64) -> f64 {
        k * (self.direction.dot(DVec2::new(x, z)) - c * t)
    }
}

/// Deterministic height field built from a fixed list of components
#[derive(Debug, Clone, PartialEq)]
pub struct WaveField {
    components: Vec<WaveComponent>,
    output_scale: f64,
}

impl Default for WaveField {
    fn default() -> Self {
        let components = DEFAULT_DIRECTIONS
            .iter()
            .filter_map(|&d| WaveComponent::new(DVec2::from_array(d)))
            .collect();
        Self {
            components,
            output_scale: 1.0,
        }
    }
}

impl WaveField {
    /// Build a field from raw direction vectors.
    ///
    /// Fails on an empty list, a non-finite or zero-length direction, or a
    /// non-finite scale.
    pub fn new(directions: &[[f64; 2]], output_scale: f64) -> Result<Self> {
        if directions.is_empty() {
            return Err(OceanError::NoWaveComponents);
        }
        let components = directions
            .iter()
            .enumerate()
            .map(|(index, &d)| {
                for c in d {
                    ensure_finite("direction", c)?;
                }
                WaveComponent::new(DVec2::from_array(d)).ok_or(OceanError::ZeroDirection { index })
            })
            .collect::<Result<Vec<_>>>()?;
        let output_scale = ensure_finite("output_scale", output_scale)?;
        log::debug!(
            "wave field: {} components, output scale {}",
            components.len(),
            output_scale
        );
        Ok(Self {
            components,
            output_scale,
        })
    }

    /// Same components, different output multiplier (e.g. 0.5 for the halved variant)
    pub fn with_output_scale(&self, output_scale: f64) -> Result<Self> {
        Ok(Self {
            components: self.components.clone(),
            output_scale: ensure_finite("output_scale", output_scale)?,
        })
    }

    pub fn components(&self) -> &[WaveComponent] {
        &self.components
    }

    pub fn output_scale(&self) -> f64 {
        self.output_scale
    }

    /// Vertical displacement at `(x, z)`.
    pub fn height(&self, x: f64, z: f64, params: &WaveFieldParams) -> f64 {
        let k = params.wavelength.wavenumber();
        let c = params.wavelength.phase_speed();
        let a = params.amplitude / k;

        let sum: f64 = self
            .components
            .iter()
            .map(|w| {
                let f = w.phase(x, z, k, c, params.time);
                w.direction.y * a * f.cos()
            })
            .sum();

        self.output_scale * sum
    }

    /// Surface normal from the analytic gradient of [`Self::height`].
    pub fn surface_normal(&self, x: f64, z: f64, params: &WaveFieldParams) -> DVec3 {
        let k = params.wavelength.wavenumber();
        let c = params.wavelength.phase_speed();

        // a * k == amplitude, so the chain rule leaves only the raw amplitude
        let (dx, dz) = self.components.iter().fold((0.0, 0.0), |(dx, dz), w| {
            let f = w.phase(x, z, k, c, params.time);
            let s = -w.direction.y * params.amplitude * f.sin();
            (dx + s * w.direction.x, dz + s * w.direction.y)
        });

        DVec3::new(-self.output_scale * dx, 1.0, -self.output_scale * dz).normalize()
    }

    /// Vertical placement of a floating object sitting `draft` below the surface.
    pub fn float_height(&self, x: f64, z: f64, params: &WaveFieldParams, draft: f64) -> f64 {
        self.height(x, z, params) - draft
    }

    /// Temporal period of the field (all components share `k`).
    pub fn period(&self, params: &WaveFieldParams) -> f64 {
        params.wavelength.period()
    }
}

/// One-shot query using the reference directions.
pub fn height(x: f64, z: f64, time: f64, amplitude: f64, wavelength: f64) -> Result<f64> {
    let params = WaveFieldParams::new(amplitude, wavelength, time)?;
    Ok(WaveField::default().height(x, z, &params))
}
