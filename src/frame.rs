//! Per-frame inputs passed explicitly into every evaluation.

use crate::error::{ensure_finite, Result};

/// Everything that changes between frames, resolved by the host up front
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameContext {
    /// Animation time in seconds (already frozen if paused). Must be finite.
    pub time_s: f64,

    /// Amplitude from the audio envelope, `None` when no envelope is attached
    pub audio_amplitude: Option<f64>,
}

impl FrameContext {
    pub fn new(time_s: f64) -> Self {
        Self {
            time_s,
            audio_amplitude: None,
        }
    }

    /// Frame at a host-supplied time, rejecting NaN and infinities
    pub fn checked(time_s: f64) -> Result<Self> {
        Ok(Self::new(ensure_finite("time", time_s)?))
    }

    pub fn with_audio(self, amplitude: f64) -> Self {
        Self {
            audio_amplitude: Some(amplitude),
            ..self
        }
    }
}

/// Animation clock with a pause toggle
///
/// While paused the clock holds its last time; on resume it jumps to the
/// host's current time rather than continuing from where it stopped.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    time_s: f64,
    paused: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("clock paused: {}", self.paused);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance to the host's animation time (milliseconds) and return the frame
    pub fn tick(&mut self, animation_time_ms: f64) -> FrameContext {
        if !self.paused && animation_time_ms.is_finite() {
            self.time_s = animation_time_ms / 1000.0;
        }
        FrameContext::new(self.time_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_converts_milliseconds() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(2500.0).time_s, 2.5);
    }

    #[test]
    fn paused_clock_holds_time() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        clock.toggle_pause();
        assert!(clock.is_paused());
        assert_eq!(clock.tick(5000.0).time_s, 1.0);

        clock.toggle_pause();
        assert_eq!(clock.tick(6000.0).time_s, 6.0);
    }

    #[test]
    fn host_rewind_is_followed() {
        let mut clock = FrameClock::new();
        clock.tick(8000.0);
        assert_eq!(clock.tick(3000.0).time_s, 3.0);
    }

    #[test]
    fn non_finite_host_time_is_ignored() {
        let mut clock = FrameClock::new();
        clock.tick(1500.0);
        assert_eq!(clock.tick(f64::NAN).time_s, 1.5);
    }

    #[test]
    fn checked_rejects_non_finite_time() {
        assert_eq!(FrameContext::checked(2.0).unwrap().time_s, 2.0);
        for t in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(matches!(
                FrameContext::checked(t),
                Err(crate::error::OceanError::NonFinite { name: "time", .. })
            ));
        }
    }

    #[test]
    fn audio_is_opt_in() {
        let frame = FrameContext::new(1.0);
        assert_eq!(frame.audio_amplitude, None);
        assert_eq!(frame.with_audio(0.3).audio_amplitude, Some(0.3));
    }
}
