//! GPU uniform layouts and an offline top-down preview renderer.

use bytemuck::{Pod, Zeroable};
use glam::{DVec3, DVec4};
use image::{Rgba, RgbaImage};

use crate::error::{ensure_finite, Result};
use crate::frame::FrameContext;
use crate::ocean::{OceanSystem, WaveField, WaveFieldParams};
use crate::params::PreviewConfig;
use crate::shading::{LightEnvironment, LightingSample, MaterialParams, ShadingModel};

/// Largest component count a shader-side wave loop accepts
pub const MAX_WAVES: usize = 8;

/// Per-frame wave uniforms, uploaded before each ocean draw
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaveUniforms {
    /// xy = normalized direction, zw unused
    pub directions: [[f32; 4]; MAX_WAVES],
    pub amplitude: f32,
    pub wavelength: f32,
    pub time: f32,
    pub output_scale: f32,
    pub component_count: u32,
    pub _padding: [u32; 3], // Padding for alignment
}

impl WaveUniforms {
    pub fn new(field: &WaveField, params: &WaveFieldParams) -> Self {
        let components = field.components();
        if components.len() > MAX_WAVES {
            log::warn!(
                "{} wave components, uploading the first {}",
                components.len(),
                MAX_WAVES
            );
        }

        let mut directions = [[0.0; 4]; MAX_WAVES];
        for (slot, w) in directions.iter_mut().zip(components) {
            let d = w.direction();
            *slot = [d.x as f32, d.y as f32, 0.0, 0.0];
        }

        Self {
            directions,
            amplitude: params.amplitude as f32,
            wavelength: params.wavelength.get() as f32,
            time: params.time as f32,
            output_scale: field.output_scale() as f32,
            component_count: components.len().min(MAX_WAVES) as u32,
            _padding: [0; 3],
        }
    }
}

/// Cel material uniforms (one per draw, override applied on the CPU)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CelUniforms {
    pub color: [f32; 4],
    /// xyz = direction toward the light, w = ambient scale
    pub light_dir: [f32; 4],
    pub light_color: [f32; 4],
    pub ambient: f32,
    pub diffusivity: f32,
    pub specularity: f32,
    pub smoothness: f32,
    pub low_threshold: f32,
    pub high_threshold: f32,
    pub low_specular: f32,
    pub high_specular: f32,
}

impl CelUniforms {
    pub fn new(material: &MaterialParams, env: &LightEnvironment) -> Self {
        let (low_threshold, high_threshold) = material.diffuse_band();
        let (low_specular, high_specular) = material.specular_band();
        Self {
            color: material.color().as_vec4().to_array(),
            light_dir: env.light_dir.extend(env.ambient_scale).as_vec4().to_array(),
            light_color: env.light_color.extend(1.0).as_vec4().to_array(),
            ambient: material.ambient() as f32,
            diffusivity: material.diffusivity() as f32,
            specularity: material.specularity() as f32,
            smoothness: material.smoothness() as f32,
            low_threshold: low_threshold as f32,
            high_threshold: high_threshold as f32,
            low_specular: low_specular as f32,
            high_specular: high_specular as f32,
        }
    }
}

/// Clamp linear RGBA into an 8-bit pixel
pub fn to_rgba8(color: DVec4) -> Rgba<u8> {
    let c = color.clamp(DVec4::ZERO, DVec4::ONE) * 255.0;
    Rgba([
        c.x.round() as u8,
        c.y.round() as u8,
        c.z.round() as u8,
        c.w.round() as u8,
    ])
}

/// Shade the surface as seen from straight above
pub fn render_preview(
    ocean: &OceanSystem,
    frame: &FrameContext,
    model: &dyn ShadingModel,
    material: &MaterialParams,
    env: &LightEnvironment,
    config: &PreviewConfig,
) -> RgbaImage {
    let params = ocean.params_for(frame);
    let step = config.meters_per_pixel();
    let origin = -config.extent_m + 0.5 * step;

    RgbaImage::from_fn(config.size_px, config.size_px, |px, py| {
        let x = origin + px as f64 * step;
        let z = origin + py as f64 * step;
        let normal = ocean.field().surface_normal(x, z, &params);
        let sample = LightingSample::new(normal, env.light_dir, DVec3::Y);
        to_rgba8(model.shade(&sample, material, env))
    })
}

/// Render and write the preview to `config.output`.
///
/// Fails before touching the file when the frame time or the image
/// configuration is unusable.
pub fn save_preview(
    ocean: &OceanSystem,
    frame: &FrameContext,
    model: &dyn ShadingModel,
    material: &MaterialParams,
    env: &LightEnvironment,
    config: &PreviewConfig,
) -> Result<()> {
    ensure_finite("time", frame.time_s)?;
    config.validate()?;
    let image = render_preview(ocean, frame, model, material, env, config);
    image.save(&config.output)?;
    log::info!(
        "preview: {}x{} -> {}",
        config.size_px,
        config.size_px,
        config.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{GridSpec, OceanSettings};
    use crate::shading::{CelShadingModel, PhongShading};

    fn ocean() -> OceanSystem {
        let grid = GridSpec {
            resolution: 1,
            ..GridSpec::default()
        };
        OceanSystem::new(&OceanSettings::default(), &grid).unwrap()
    }

    #[test]
    fn uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<WaveUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<CelUniforms>() % 16, 0);
    }

    #[test]
    fn wave_uniforms_mirror_field() {
        let field = WaveField::default();
        let params = WaveFieldParams::new(0.3, 5.0, 12.0).unwrap();
        let u = WaveUniforms::new(&field, &params);

        assert_eq!(u.component_count, 3);
        assert_eq!(u.wavelength, 5.0);
        assert_eq!(u.directions[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(u.directions[3], [0.0; 4]);
    }

    #[test]
    fn wave_uniforms_truncate_long_lists() {
        let dirs = vec![[1.0, 1.0]; MAX_WAVES + 2];
        let field = WaveField::new(&dirs, 1.0).unwrap();
        let params = WaveFieldParams::new(1.0, 1.0, 0.0).unwrap();
        assert_eq!(WaveUniforms::new(&field, &params).component_count, MAX_WAVES as u32);
    }

    #[test]
    fn cel_uniforms_carry_thresholds() {
        let u = CelUniforms::new(&MaterialParams::sphere(), &LightEnvironment::default());
        assert_eq!(u.low_threshold, -0.01);
        assert_eq!(u.high_specular, 0.95);
        assert_eq!(u.light_dir[3], 1.0);
    }

    #[test]
    fn to_rgba8_clamps() {
        assert_eq!(to_rgba8(DVec4::new(1.35, 0.5, -0.2, 1.0)), Rgba([255, 128, 0, 255]));
    }

    #[test]
    fn flat_sea_renders_uniformly() {
        let ocean = ocean();
        let frame = FrameContext::new(0.0).with_audio(0.0);
        let config = PreviewConfig {
            size_px: 8,
            ..PreviewConfig::default()
        };
        let image = render_preview(
            &ocean,
            &frame,
            &CelShadingModel,
            &MaterialParams::ocean(),
            &LightEnvironment::default(),
            &config,
        );
        let first = *image.get_pixel(0, 0);
        assert!(image.pixels().all(|p| *p == first));
    }

    #[test]
    fn cel_preview_uses_fewer_shades_than_phong() {
        let ocean = ocean();
        let frame = FrameContext::new(1.0).with_audio(1.0);
        let config = PreviewConfig {
            size_px: 32,
            extent_m: 5.0,
            ..PreviewConfig::default()
        };
        let env = LightEnvironment::directional(DVec3::new(1.0, 0.2, 0.0));
        let material = MaterialParams::ocean();

        let count = |model: &dyn ShadingModel| {
            let image = render_preview(&ocean, &frame, model, &material, &env, &config);
            let mut shades: Vec<[u8; 4]> = image.pixels().map(|p| p.0).collect();
            shades.sort_unstable();
            shades.dedup();
            shades.len()
        };

        assert!(count(&CelShadingModel) < count(&PhongShading));
    }

    #[test]
    fn save_rejects_non_finite_time_without_writing() {
        let output = std::env::temp_dir().join("celocean-non-finite-time.png");
        let _ = std::fs::remove_file(&output);
        let config = PreviewConfig {
            size_px: 4,
            output: output.clone(),
            ..PreviewConfig::default()
        };
        let result = save_preview(
            &ocean(),
            &FrameContext::new(f64::INFINITY).with_audio(1.0),
            &CelShadingModel,
            &MaterialParams::ocean(),
            &LightEnvironment::default(),
            &config,
        );
        assert!(matches!(
            result,
            Err(crate::error::OceanError::NonFinite { name: "time", .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn save_rejects_negative_extent() {
        let config = PreviewConfig {
            size_px: 4,
            extent_m: -1.0,
            output: std::env::temp_dir().join("celocean-negative-extent.png"),
        };
        let result = save_preview(
            &ocean(),
            &FrameContext::new(0.0),
            &CelShadingModel,
            &MaterialParams::ocean(),
            &LightEnvironment::default(),
            &config,
        );
        assert!(matches!(result, Err(crate::error::OceanError::InvalidPreview(_))));
    }
}
