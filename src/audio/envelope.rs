//! Per-frame amplitude from an audio magnitude source.

use super::MagnitudeSource;
use crate::error::Result;
use crate::frame::FrameContext;
use crate::params::EnvelopeMapping;

/// Maps one frequency bin to the wave amplitude.
///
/// No source, a stream that has not started, or a missing bin all read as
/// silence (`0.0`), never as an error.
pub struct AudioEnvelope<S> {
    source: Option<S>,
    mapping: EnvelopeMapping,
    started: bool,
}

impl<S: MagnitudeSource> AudioEnvelope<S> {
    pub fn new(mapping: EnvelopeMapping) -> Result<Self> {
        mapping.validate()?;
        Ok(Self {
            source: None,
            mapping,
            started: false,
        })
    }

    pub fn with_source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    pub fn source_mut(&mut self) -> Option<&mut S> {
        self.source.as_mut()
    }

    /// Begin reacting to the source (user pressed play)
    pub fn start(&mut self) {
        if self.source.is_none() {
            log::warn!("audio envelope started without a source; waves stay flat");
        }
        self.started = true;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Amplitude for this frame
    pub fn sample(&mut self) -> f64 {
        if !self.started {
            return 0.0;
        }
        let bin = self.mapping.bin;
        let Some(byte) = self.source.as_mut().and_then(|s| s.bin_magnitude(bin)) else {
            return 0.0;
        };
        let amplitude = self.mapping.map(byte);
        log::trace!("audio bin {} = {} -> amplitude {:.4}", bin, byte, amplitude);
        amplitude
    }

    /// Attach this frame's amplitude to the frame context
    pub fn apply(&mut self, frame: FrameContext) -> FrameContext {
        frame.with_audio(self.sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<u8>);

    impl MagnitudeSource for Fixed {
        fn bin_magnitude(&mut self, _bin: usize) -> Option<u8> {
            self.0
        }
    }

    fn envelope(level: Option<u8>) -> AudioEnvelope<Fixed> {
        AudioEnvelope::new(EnvelopeMapping::default())
            .unwrap()
            .with_source(Fixed(level))
    }

    #[test]
    fn silent_before_start() {
        let mut env = envelope(Some(200));
        assert_eq!(env.sample(), 0.0);
    }

    #[test]
    fn maps_bin_after_start() {
        let mut env = envelope(Some(91));
        env.start();
        assert!((env.sample() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn missing_source_is_silence() {
        let mut env: AudioEnvelope<Fixed> = AudioEnvelope::new(EnvelopeMapping::default()).unwrap();
        env.start();
        assert_eq!(env.sample(), 0.0);
    }

    #[test]
    fn missing_bin_is_silence() {
        let mut env = envelope(None);
        env.start();
        assert_eq!(env.sample(), 0.0);
    }

    #[test]
    fn apply_sets_frame_amplitude() {
        let mut env = envelope(Some(255));
        env.start();
        let frame = env.apply(FrameContext::new(4.0));
        assert_eq!(frame.time_s, 4.0);
        let a = frame.audio_amplitude.unwrap();
        assert!(a > 0.0 && a < 1.0);
    }

    #[test]
    fn invalid_mapping_rejected() {
        let mapping = EnvelopeMapping {
            gain: -1.0,
            ..EnvelopeMapping::default()
        };
        assert!(AudioEnvelope::<Fixed>::new(mapping).is_err());
    }
}
