//! Celocean library - audio-reactive wave field with cel shading

pub mod audio;
pub mod cli;
pub mod error;
pub mod frame;
pub mod ocean;
pub mod params;
pub mod rendering;
pub mod shading;

pub use error::{OceanError, Result};
