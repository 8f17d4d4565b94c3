//! Short-time Fourier transform
//!
//! Frames a signal into overlapping windows, tapers each frame, and stacks
//! the one-sided power spectra into a time × frequency matrix

use ndarray::Array2;
use thiserror::Error;

use super::windows::{apply_window_inplace, generate_window, WindowType};
use crate::transform::DftEngine;

#[derive(Error, Debug)]
pub enum StftError {
    #[error("invalid STFT configuration: {0}")]
    InvalidConfig(String),
}

/// Short-time transform configuration
#[derive(Debug, Clone)]
pub struct StftConfig {
    /// Frame length in samples
    pub window_size: usize,

    /// Hop between successive frame starts, in samples
    pub step: usize,

    /// Window taper applied to each frame
    pub window_type: WindowType,

    /// Sample rate in Hz (used only for the time/frequency axis mapping)
    pub sample_rate: f64,
}

impl Default for StftConfig {
    fn default() -> Self {
        Self {
            window_size: 256,
            step: 128,
            window_type: WindowType::Hamming,
            sample_rate: 48000.0,
        }
    }
}

/// Short-time Fourier transform analyzer
pub struct Stft {
    config: StftConfig,
    engine: DftEngine,
    window: Vec<f64>,
}

impl Stft {
    /// Create a new analyzer
    ///
    /// Fails when `window_size` or `step` is zero; either would make the
    /// framing loop meaningless.
    pub fn new(config: StftConfig) -> Result<Self, StftError> {
        if config.window_size == 0 {
            return Err(StftError::InvalidConfig("window_size must be positive".into()));
        }
        if config.step == 0 {
            return Err(StftError::InvalidConfig("step must be positive".into()));
        }

        let engine = DftEngine::new(config.window_size);
        let window = generate_window(config.window_type, config.window_size);

        Ok(Self {
            config,
            engine,
            window,
        })
    }

    /// Get current configuration
    pub fn config(&self) -> &StftConfig {
        &self.config
    }

    /// Number of frames produced for a signal of `signal_len` samples
    ///
    /// Signals shorter than one window produce zero frames; so does a signal
    /// of exactly one window, matching the framing loop below.
    pub fn num_frames(&self, signal_len: usize) -> usize {
        if signal_len < self.config.window_size {
            0
        } else {
            (signal_len - self.config.window_size) / self.config.step
        }
    }

    /// Number of one-sided frequency bins (window_size/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.engine.num_bins()
    }

    /// Compute the power spectrogram
    ///
    /// Rows are frames in time order, columns are frequency bins. A signal
    /// too short for a single frame yields a 0 × num_bins matrix.
    pub fn spectrogram(&self, signal: &[f64]) -> Array2<f64> {
        let frames = self.num_frames(signal.len());
        let bins = self.num_bins();
        let mut result = Array2::zeros((frames, bins));

        tracing::debug!(frames, bins, "framing signal for short-time transform");

        let mut frame = vec![0.0; self.config.window_size];
        for i in 0..frames {
            let start = i * self.config.step;
            frame.copy_from_slice(&signal[start..start + self.config.window_size]);
            apply_window_inplace(&mut frame, &self.window);

            let power = self.engine.power_spectrum(&frame);
            for (dst, &src) in result.row_mut(i).iter_mut().zip(power.iter()) {
                *dst = src;
            }
        }

        result
    }

    /// Frequency axis in Hz: bin k maps to k·fs/window_size
    pub fn frequency_axis(&self) -> Vec<f64> {
        self.engine.frequency_axis(self.config.sample_rate)
    }

    /// Time axis in seconds for the frames of a signal of `signal_len`
    /// samples: evenly spaced over [0, signal_len/fs]
    pub fn time_axis(&self, signal_len: usize) -> Vec<f64> {
        let frames = self.num_frames(signal_len);
        let end = signal_len as f64 / self.config.sample_rate;
        linspace(0.0, end, frames)
    }
}

/// Compute the power spectrogram of a signal with the default sample rate
///
/// Convenience wrapper over [`Stft`] for callers that only need the matrix.
pub fn stft(
    signal: &[f64],
    window_size: usize,
    step: usize,
    window_type: WindowType,
) -> Result<Array2<f64>, StftError> {
    let analyzer = Stft::new(StftConfig {
        window_size,
        step,
        window_type,
        ..StftConfig::default()
    })?;
    Ok(analyzer.spectrogram(signal))
}

/// Compute the power spectrogram with a caller-supplied window function
///
/// `window_fn` maps a frame length to that many taper weights, so any taper
/// can be plugged in without extending [`WindowType`].
pub fn stft_with<F>(
    signal: &[f64],
    window_size: usize,
    step: usize,
    window_fn: F,
) -> Result<Array2<f64>, StftError>
where
    F: Fn(usize) -> Vec<f64>,
{
    if window_size == 0 {
        return Err(StftError::InvalidConfig("window_size must be positive".into()));
    }
    if step == 0 {
        return Err(StftError::InvalidConfig("step must be positive".into()));
    }

    let engine = DftEngine::new(window_size);
    let window = window_fn(window_size);

    let frames = if signal.len() < window_size {
        0
    } else {
        (signal.len() - window_size) / step
    };
    let mut result = Array2::zeros((frames, engine.num_bins()));

    let mut frame = vec![0.0; window_size];
    for i in 0..frames {
        let start = i * step;
        frame.copy_from_slice(&signal[start..start + window_size]);
        apply_window_inplace(&mut frame, &window);

        let power = engine.power_spectrum(&frame);
        for (dst, &src) in result.row_mut(i).iter_mut().zip(power.iter()) {
            *dst = src;
        }
    }

    Ok(result)
}

/// `count` evenly spaced points over [start, end], endpoints included
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + span * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(n: usize, freq_hz: f64, sample_rate: f64) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_spectrogram_shape() {
        let analyzer = Stft::new(StftConfig {
            window_size: 64,
            step: 32,
            window_type: WindowType::Hamming,
            sample_rate: 256.0,
        })
        .unwrap();

        let signal = sine(256, 16.0, 256.0);
        let spec = analyzer.spectrogram(&signal);

        assert_eq!(spec.nrows(), 6); // (256 - 64) / 32
        assert_eq!(spec.ncols(), 33); // 64/2 + 1
    }

    #[test]
    fn test_short_signal_yields_empty_spectrogram() {
        let analyzer = Stft::new(StftConfig {
            window_size: 64,
            step: 32,
            ..StftConfig::default()
        })
        .unwrap();

        assert_eq!(analyzer.spectrogram(&[1.0; 10]).nrows(), 0);
        // Exactly one window long still frames nothing
        assert_eq!(analyzer.spectrogram(&[1.0; 64]).nrows(), 0);
    }

    #[test]
    fn test_spectral_peak_location() {
        let fs = 256.0;
        let f0 = 16.0;
        let analyzer = Stft::new(StftConfig {
            window_size: 64,
            step: 32,
            window_type: WindowType::Hamming,
            sample_rate: fs,
        })
        .unwrap();

        let spec = analyzer.spectrogram(&sine(256, f0, fs));
        let expected_bin = (f0 * 64.0 / fs).round() as usize;

        for row in spec.rows() {
            let (peak_bin, _) = row
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
                .unwrap();
            assert_eq!(peak_bin, expected_bin);
        }
    }

    #[test]
    fn test_axes_mapping() {
        let analyzer = Stft::new(StftConfig {
            window_size: 64,
            step: 32,
            window_type: WindowType::Hamming,
            sample_rate: 256.0,
        })
        .unwrap();

        let freqs = analyzer.frequency_axis();
        assert_eq!(freqs.len(), 33);
        assert!((freqs[1] - 4.0).abs() < 1e-12); // fs / window_size

        let times = analyzer.time_axis(256);
        assert_eq!(times.len(), 6);
        assert_eq!(times[0], 0.0);
        assert!((times[5] - 1.0).abs() < 1e-12); // 256 samples at 256 Hz
    }

    #[test]
    fn test_rejects_zero_config() {
        assert!(Stft::new(StftConfig {
            window_size: 0,
            ..StftConfig::default()
        })
        .is_err());
        assert!(Stft::new(StftConfig {
            step: 0,
            ..StftConfig::default()
        })
        .is_err());
    }

    #[test]
    fn test_custom_window_function() {
        let signal = sine(256, 16.0, 256.0);

        let via_enum = stft(&signal, 64, 32, WindowType::Hamming).unwrap();
        let via_custom =
            stft_with(&signal, 64, 32, |len| generate_window(WindowType::Hamming, len)).unwrap();

        assert_eq!(via_enum, via_custom);
    }
}
