//! Audio analysis configuration and envelope mapping.

use crate::error::{OceanError, Result};

/// Frequency analyser configuration (browser analyser-node semantics)
#[derive(Debug, Clone)]
pub struct AnalyserConfig {
    /// FFT window size (power of 2, 32..=32768)
    /// music scene value: 2048
    pub fft_size: usize,

    /// Weight of the previous frame's magnitude, 0 = no smoothing
    pub smoothing_time_constant: f32,

    /// Magnitude mapped to byte 0 (dB)
    pub min_decibels: f32,

    /// Magnitude mapped to byte 255 (dB)
    pub max_decibels: f32,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            smoothing_time_constant: 0.8,
            min_decibels: -100.0,
            max_decibels: -30.0,
        }
    }
}

impl AnalyserConfig {
    /// Number of byte bins produced per analysis
    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<()> {
        if !self.fft_size.is_power_of_two() || !(32..=32768).contains(&self.fft_size) {
            return Err(OceanError::InvalidAnalyser(format!(
                "FFT size must be a power of 2 in 32..=32768, got {}",
                self.fft_size
            )));
        }
        if !(0.0..=1.0).contains(&self.smoothing_time_constant) {
            return Err(OceanError::InvalidAnalyser(format!(
                "smoothing must be in [0, 1], got {}",
                self.smoothing_time_constant
            )));
        }
        if !(self.min_decibels < self.max_decibels) {
            return Err(OceanError::InvalidAnalyser(format!(
                "min decibels {} must be below max {}",
                self.min_decibels, self.max_decibels
            )));
        }
        Ok(())
    }
}

/// Byte magnitude → wave amplitude
#[derive(Debug, Clone)]
pub struct EnvelopeMapping {
    /// Divisor for the byte bin. Larger than 255 on purpose so loud input
    /// reads as waves rather than a level meter.
    pub divisor: f64,

    /// User-adjustable multiplier on the normalized level
    pub gain: f64,

    /// Which byte bin drives the waves (0 = lowest band)
    pub bin: usize,
}

impl Default for EnvelopeMapping {
    fn default() -> Self {
        Self {
            divisor: 455.0,
            gain: 1.0,
            bin: 0,
        }
    }
}

impl EnvelopeMapping {
    /// `min(byte / divisor, 1) * gain`
    pub fn map(&self, byte: u8) -> f64 {
        (byte as f64 / self.divisor).min(1.0) * self.gain
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.divisor.is_finite() && self.divisor > 0.0) {
            return Err(OceanError::InvalidEnvelope(format!(
                "divisor must be > 0, got {}",
                self.divisor
            )));
        }
        if !(self.gain.is_finite() && self.gain >= 0.0) {
            return Err(OceanError::InvalidEnvelope(format!(
                "gain must be >= 0, got {}",
                self.gain
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configs_are_valid() {
        assert!(AnalyserConfig::default().validate().is_ok());
        assert!(EnvelopeMapping::default().validate().is_ok());
        assert_eq!(AnalyserConfig::default().bin_count(), 1024);
    }

    #[test]
    fn analyser_rejects_bad_sizes() {
        for fft_size in [0, 1000, 16, 65536] {
            let config = AnalyserConfig {
                fft_size,
                ..AnalyserConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {fft_size}");
        }
    }

    #[test]
    fn analyser_rejects_inverted_decibels() {
        let config = AnalyserConfig {
            min_decibels: -30.0,
            max_decibels: -100.0,
            ..AnalyserConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn full_scale_byte_stays_under_one() {
        let mapping = EnvelopeMapping::default();
        assert_eq!(mapping.map(0), 0.0);
        let loud = mapping.map(255);
        assert!((loud - 255.0 / 455.0).abs() < 1e-12);
        assert!(loud < 1.0);
    }

    #[test]
    fn gain_scales_and_clamps() {
        let mapping = EnvelopeMapping {
            divisor: 100.0,
            gain: 2.0,
            ..EnvelopeMapping::default()
        };
        assert_eq!(mapping.map(50), 1.0);
        assert_eq!(mapping.map(200), 2.0);
    }

    #[test]
    fn envelope_rejects_zero_divisor() {
        let mapping = EnvelopeMapping {
            divisor: 0.0,
            ..EnvelopeMapping::default()
        };
        assert!(matches!(mapping.validate(), Err(OceanError::InvalidEnvelope(_))));
    }
}
