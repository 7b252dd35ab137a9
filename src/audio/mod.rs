//! Audio envelope feeding the wave amplitude.
//!
//! An analyser turns the latest window of samples into byte-valued frequency
//! bins; [`AudioEnvelope`] picks one bin per frame and maps it to an amplitude.

mod envelope;
mod fft;
mod wav;

pub use envelope::AudioEnvelope;
pub use fft::{blackman_window, FrequencyAnalyser};
pub use wav::WavStream;

/// Anything that can report a byte-valued frequency magnitude once per frame
pub trait MagnitudeSource {
    /// Magnitude of `bin` in `0..=255`, or `None` if unavailable
    fn bin_magnitude(&mut self, bin: usize) -> Option<u8>;
}
