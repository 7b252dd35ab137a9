//! Parameter definitions with units and documented semantics.
//!
//! Reference-scene constants live here with:
//! - Units (world meters, seconds, Hz, dB)
//! - Documented ranges and meanings
//! - `validate()` or a validating constructor downstream

mod audio;
mod ocean;
mod render;

// Re-export all types
pub use audio::{AnalyserConfig, EnvelopeMapping};
pub use ocean::{GridSpec, OceanSettings};
pub use render::{PreviewConfig, TraceConfig};
