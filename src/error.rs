//! Error types for wave-field, shading and audio configuration.

use thiserror::Error;

/// Errors produced while validating configuration or decoding inputs.
///
/// Per-frame evaluation never fails; everything here is raised once, when a
/// value is constructed.
#[derive(Debug, Error)]
pub enum OceanError {
    /// Wavelength must be finite and strictly positive (it is divided by).
    #[error("invalid wavelength {0}: must be finite and > 0")]
    InvalidWavelength(f64),

    /// A scalar parameter was NaN or infinite.
    #[error("parameter '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// A wave field needs at least one component.
    #[error("wave field has no components")]
    NoWaveComponents,

    /// A wave direction could not be normalized.
    #[error("wave component {index} has a zero-length direction")]
    ZeroDirection { index: usize },

    /// A pair of band thresholds was inverted.
    #[error("inverted {band} thresholds: low {low} > high {high}")]
    InvertedThresholds {
        band: &'static str,
        low: f64,
        high: f64,
    },

    /// Specular exponent must be strictly positive.
    #[error("invalid smoothness {0}: must be > 0")]
    InvalidSmoothness(f64),

    /// Outline shell scale fell on the wrong side of 1.
    #[error("invalid {kind} outline scale {scale}: {expected}")]
    InvalidOutlineScale {
        kind: &'static str,
        scale: f64,
        expected: &'static str,
    },

    /// Frequency analyser configuration was rejected.
    #[error("invalid analyser config: {0}")]
    InvalidAnalyser(String),

    /// Envelope mapping divisor/gain were rejected.
    #[error("invalid envelope mapping: {0}")]
    InvalidEnvelope(String),

    /// Preview image size or extent was rejected.
    #[error("invalid preview config: {0}")]
    InvalidPreview(String),

    /// WAV input could not be read.
    #[error("audio decode failed: {0}")]
    Audio(#[from] hound::Error),

    /// Preview image could not be written.
    #[error("image write failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, OceanError>;

/// Rejects NaN and infinities for a named parameter.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OceanError::NonFinite { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_wavelength_mentions_value() {
        let msg = OceanError::InvalidWavelength(-2.0).to_string();
        assert!(msg.contains("-2"), "missing value in: {msg}");
    }

    #[test]
    fn inverted_thresholds_mentions_band_and_bounds() {
        let msg = OceanError::InvertedThresholds {
            band: "diffuse",
            low: 0.5,
            high: 0.1,
        }
        .to_string();
        assert!(msg.contains("diffuse"), "missing band in: {msg}");
        assert!(msg.contains("0.5") && msg.contains("0.1"), "missing bounds in: {msg}");
    }

    #[test]
    fn ensure_finite_rejects_nan_and_inf() {
        assert!(ensure_finite("time", 1.5).is_ok());
        assert!(matches!(
            ensure_finite("time", f64::NAN),
            Err(OceanError::NonFinite { name: "time", .. })
        ));
        assert!(ensure_finite("time", f64::INFINITY).is_err());
    }

    #[test]
    fn ocean_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OceanError>();
    }
}
