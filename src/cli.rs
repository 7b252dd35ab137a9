//! Command-line argument parsing and exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic)
//! - 10: configuration rejected (wavelength, thresholds, analyser)
//! - 11: output I/O error (preview image)
//! - 12: audio input error (WAV decode)

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::OceanError;
use crate::params::{EnvelopeMapping, OceanSettings, PreviewConfig, TraceConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "celocean")]
#[command(about = "Audio-reactive wave field with cel shading", long_about = None)]
pub struct Cli {
    /// Wavelength shared by every wave (world units, > 0)
    #[arg(long, global = true, value_name = "METERS", default_value_t = 5.0)]
    pub wavelength: f64,

    /// Multiplier on the summed height (0.5 = halved variant)
    #[arg(long, global = true, default_value_t = 1.0)]
    pub output_scale: f64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the surface height at one point
    Height(HeightArgs),

    /// Drive the waves from a WAV file and trace a floating object per frame
    Trace(TraceArgs),

    /// Render a top-down shaded preview PNG
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
pub struct HeightArgs {
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub x: f64,

    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub z: f64,

    /// Time in seconds
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub time: f64,

    #[arg(long, allow_hyphen_values = true, default_value_t = 0.2)]
    pub amplitude: f64,
}

#[derive(Args, Debug)]
pub struct TraceArgs {
    /// WAV file to analyse
    pub wav: PathBuf,

    /// Frames per second used to slice the audio
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<usize>,

    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub x: f64,

    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub z: f64,

    /// Depth of the object below the surface
    #[arg(long, default_value_t = 0.0)]
    pub draft: f64,

    /// Multiplier on the audio level
    #[arg(long, default_value_t = 1.0)]
    pub gain: f64,

    /// Byte divisor for the low-frequency bin
    #[arg(long, default_value_t = 455.0)]
    pub divisor: f64,
}

impl TraceArgs {
    pub fn trace_config(&self) -> TraceConfig {
        TraceConfig {
            fps: self.fps,
            max_frames: self.frames,
            position: [self.x, self.z],
            draft_m: self.draft,
        }
    }

    pub fn envelope_mapping(&self) -> EnvelopeMapping {
        EnvelopeMapping {
            divisor: self.divisor,
            gain: self.gain,
            ..EnvelopeMapping::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Output file path
    #[arg(short, long, default_value = "ocean.png")]
    pub out: PathBuf,

    /// Time in seconds
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub time: f64,

    #[arg(long, allow_hyphen_values = true, default_value_t = 1.0)]
    pub amplitude: f64,

    /// Image width and height in pixels
    #[arg(long, default_value_t = 512)]
    pub size: u32,

    /// Half-width of the rendered area (world units)
    #[arg(long, default_value_t = 10.0)]
    pub extent: f64,

    /// Lighting model
    #[arg(long, value_enum, default_value_t = Shading::Cel)]
    pub shading: Shading,

    /// Revolve the light with time instead of the fixed (1, 1, 1) light
    #[arg(long)]
    pub orbit: bool,

    /// Apply the day/night ambient and tint cycle
    #[arg(long)]
    pub day_night: bool,
}

impl PreviewArgs {
    pub fn preview_config(&self) -> PreviewConfig {
        PreviewConfig {
            size_px: self.size,
            extent_m: self.extent,
            output: self.out.clone(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    Cel,
    Phong,
}

impl Cli {
    /// Wave settings from the global flags
    pub fn ocean_settings(&self) -> OceanSettings {
        OceanSettings {
            wavelength_m: self.wavelength,
            output_scale: self.output_scale,
            ..OceanSettings::default()
        }
    }
}

/// Errors produced by CLI operations, each mapped to a distinct exit code
#[derive(Debug)]
pub enum CliError {
    Config(OceanError),
    Io(OceanError),
    Audio(OceanError),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 10,
            CliError::Io(_) => 11,
            CliError::Audio(_) => 12,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) | CliError::Io(e) | CliError::Audio(e) => write!(f, "{e}"),
        }
    }
}

impl From<OceanError> for CliError {
    fn from(e: OceanError) -> Self {
        match e {
            OceanError::Audio(_) => CliError::Audio(e),
            OceanError::Image(_) => CliError::Io(e),
            other => CliError::Config(other),
        }
    }
}
