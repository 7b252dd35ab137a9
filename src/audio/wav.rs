//! Offline audio input: WAV files decoded to mono for per-frame analysis.

use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::error::Result;

/// Decoded mono samples with their sample rate
#[derive(Debug, Clone)]
pub struct WavStream {
    samples: Vec<f32>,
    sample_rate_hz: u32,
}

impl WavStream {
    /// Decode a WAV file, averaging channels down to mono
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = WavReader::open(path.as_ref())?;
        let spec = reader.spec();
        let channels = spec.channels.max(1) as usize;

        let interleaved: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader.samples::<f32>().collect::<std::result::Result<_, _>>()?,
            SampleFormat::Int => {
                let scale = 1.0 / (1u64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 * scale))
                    .collect::<std::result::Result<_, _>>()?
            }
        };

        let samples: Vec<f32> = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();

        log::info!(
            "audio: {} @ {}Hz, {} ch, {:.1}s",
            path.as_ref().display(),
            spec.sample_rate,
            channels,
            samples.len() as f32 / spec.sample_rate.max(1) as f32
        );

        Ok(Self::from_samples(samples, spec.sample_rate))
    }

    pub fn from_samples(samples: Vec<f32>, sample_rate_hz: u32) -> Self {
        Self {
            samples,
            sample_rate_hz,
        }
    }

    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    pub fn duration_s(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate_hz.max(1) as f64
    }

    /// Number of whole or partial frames at `fps`
    pub fn frame_count(&self, fps: u32) -> usize {
        (self.duration_s() * fps as f64).ceil() as usize
    }

    /// Samples played during frame `index` at `fps` (empty past the end)
    pub fn frame_window(&self, index: usize, fps: u32) -> &[f32] {
        let fps = fps.max(1) as u64;
        let rate = self.sample_rate_hz as u64;
        let len = self.samples.len();
        let start = ((index as u64 * rate / fps) as usize).min(len);
        let end = (((index as u64 + 1) * rate / fps) as usize).min(len);
        &self.samples[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_windows_tile_the_stream() {
        let stream = WavStream::from_samples(vec![0.25; 44100], 44100);
        assert_eq!(stream.frame_count(60), 60);

        let total: usize = (0..60).map(|i| stream.frame_window(i, 60).len()).sum();
        assert_eq!(total, 44100);
        assert_eq!(stream.frame_window(0, 60).len(), 735);
        assert!(stream.frame_window(60, 60).is_empty());
    }

    #[test]
    fn reads_back_written_file() {
        let path = std::env::temp_dir().join("celocean_wav_roundtrip_test.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        {
            let mut writer = hound::WavWriter::create(&path, spec).unwrap();
            for _ in 0..800 {
                writer.write_sample(16384i16).unwrap();
                writer.write_sample(0i16).unwrap();
            }
            writer.finalize().unwrap();
        }

        let stream = WavStream::open(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(stream.sample_rate_hz(), 8000);
        assert!((stream.duration_s() - 0.1).abs() < 1e-9);
        // Left at half scale, right silent -> mono at a quarter
        assert!(stream.frame_window(0, 10).iter().all(|&s| (s - 0.25).abs() < 1e-6));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(WavStream::open("/definitely/not/here.wav").is_err());
    }
}
