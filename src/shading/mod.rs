//! Cel shading and inverted-hull outlines.

mod cel;
mod light;
mod material;
mod outline;

pub use cel::{band, CelShadingModel, LightingSample, PhongShading, ShadingModel};
pub use light::{orbiting_light, DayNightCycle, LightEnvironment};
pub use material::{MaterialBuilder, MaterialParams};
pub use outline::{CullFace, DrawPlan, OutlinePass, OutlinePolicy, OutlineShell, ShellKind};
