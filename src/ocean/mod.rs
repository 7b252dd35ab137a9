//! Procedural ocean surface: summed directional waves, optionally audio-driven.

mod grid;
mod system;
mod wave;

pub use grid::{OceanGrid, Vertex};
pub use system::{FloatPose, OceanSystem};
pub use wave::{
    height, WaveComponent, WaveField, WaveFieldParams, Wavelength, DEFAULT_DIRECTIONS,
    GRAVITY_M_PER_S2,
};
