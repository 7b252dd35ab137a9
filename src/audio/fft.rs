//! Byte-valued frequency analysis over the most recent window of samples.

use std::collections::VecDeque;
use std::f32::consts::PI;
use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

use super::MagnitudeSource;
use crate::error::Result;
use crate::params::AnalyserConfig;

/// Windowed FFT with per-bin smoothing, quantized to bytes over a dB range
pub struct FrequencyAnalyser {
    config: AnalyserConfig,
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    /// Most recent `fft_size` samples, zero-filled until audio arrives
    history: VecDeque<f32>,
    smoothed: Vec<f32>,
    scratch: Vec<Complex<f32>>,
}

impl FrequencyAnalyser {
    pub fn new(config: AnalyserConfig) -> Result<Self> {
        config.validate()?;

        let n = config.fft_size;
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);

        log::debug!(
            "analyser: {} point FFT, {} bins, dB range [{}, {}]",
            n,
            config.bin_count(),
            config.min_decibels,
            config.max_decibels
        );

        Ok(Self {
            fft,
            window: (0..n).map(|i| blackman_window(i, n)).collect(),
            history: std::iter::repeat(0.0).take(n).collect(),
            smoothed: vec![0.0; config.bin_count()],
            scratch: vec![Complex::new(0.0, 0.0); n],
            config,
        })
    }

    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    /// Append mono samples, keeping only the latest window
    pub fn push_samples(&mut self, samples: &[f32]) {
        let n = self.config.fft_size;
        let skip = samples.len().saturating_sub(n);
        for &s in &samples[skip..] {
            if self.history.len() == n {
                self.history.pop_front();
            }
            self.history.push_back(s);
        }
    }

    /// Run one analysis step and quantize every bin to `0..=255`
    pub fn byte_frequency_data(&mut self) -> Vec<u8> {
        let n = self.config.fft_size;
        for (slot, (&sample, &w)) in self
            .scratch
            .iter_mut()
            .zip(self.history.iter().zip(&self.window))
        {
            *slot = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let tau = self.config.smoothing_time_constant;
        let min_db = self.config.min_decibels;
        let range_db = self.config.max_decibels - min_db;
        let norm = 1.0 / n as f32;

        self.smoothed
            .iter_mut()
            .zip(&self.scratch)
            .map(|(prev, bin)| {
                let magnitude = bin.norm() * norm;
                *prev = tau * *prev + (1.0 - tau) * magnitude;
                let db = 20.0 * prev.log10();
                let scaled = 255.0 / range_db * (db - min_db);
                // -inf dB (silence) and NaN both clamp to 0
                if scaled.is_nan() {
                    0
                } else {
                    scaled.clamp(0.0, 255.0) as u8
                }
            })
            .collect()
    }
}

impl MagnitudeSource for FrequencyAnalyser {
    fn bin_magnitude(&mut self, bin: usize) -> Option<u8> {
        self.byte_frequency_data().get(bin).copied()
    }
}

/// Blackman window (a0 = 0.42, a1 = 0.5, a2 = 0.08)
pub fn blackman_window(index: usize, size: usize) -> f32 {
    let x = index as f32 / size as f32;
    0.42 - 0.5 * (2.0 * PI * x).cos() + 0.08 * (4.0 * PI * x).cos()
}
