//! DFT engine for real-valued frames
//!
//! The transform is the direct O(N²) summation. That is deliberate: the
//! correlation and spectrogram outputs are defined against direct-summation
//! numerics, and a log-linear algorithm is out of contract.

use num_complex::Complex;
use std::f64::consts::PI;

/// Discrete Fourier transform of a real signal.
///
/// X[k] = Σ_{n=0}^{N-1} x[n]·exp(-2πi·k·n/N), computed by direct summation.
/// An empty input yields an empty spectrum.
pub fn dft(signal: &[f64]) -> Vec<Complex<f64>> {
    let n = signal.len();
    let mut spectrum = Vec::with_capacity(n);
    for k in 0..n {
        let mut acc = Complex::new(0.0, 0.0);
        for (i, &x) in signal.iter().enumerate() {
            let angle = -2.0 * PI * (k as f64) * (i as f64) / n as f64;
            acc += x * Complex::new(angle.cos(), angle.sin());
        }
        spectrum.push(acc);
    }
    spectrum
}

/// Inverse discrete Fourier transform.
///
/// x[n] = (1/N)·Σ_{k=0}^{N-1} X[k]·exp(+2πi·k·n/N), direct summation.
pub fn idft(spectrum: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = spectrum.len();
    let mut signal = Vec::with_capacity(n);
    for i in 0..n {
        let mut acc = Complex::new(0.0, 0.0);
        for (k, &x) in spectrum.iter().enumerate() {
            let angle = 2.0 * PI * (k as f64) * (i as f64) / n as f64;
            acc += x * Complex::new(angle.cos(), angle.sin());
        }
        signal.push(acc / n as f64);
    }
    signal
}

/// DFT engine for fixed-size real frames
///
/// Precomputes the twiddle table once per frame length so repeated framing
/// (the short-time transform) does not re-evaluate the complex exponentials.
/// The summation itself stays direct.
pub struct DftEngine {
    /// Frame size (number of samples)
    size: usize,

    /// Twiddle table: exp(-2πi·j/N) for j = 0..N
    twiddles: Vec<Complex<f64>>,
}

impl DftEngine {
    /// Create new DFT engine for frames of `size` samples
    pub fn new(size: usize) -> Self {
        let twiddles = (0..size)
            .map(|j| {
                let angle = -2.0 * PI * j as f64 / size as f64;
                Complex::new(angle.cos(), angle.sin())
            })
            .collect();

        Self { size, twiddles }
    }

    /// Compute the forward transform of a real frame
    ///
    /// Frames shorter than the engine size are zero-padded; longer frames
    /// are truncated.
    pub fn forward(&self, frame: &[f64]) -> Vec<Complex<f64>> {
        let n = self.size;
        let used = frame.len().min(n);

        let mut spectrum = Vec::with_capacity(n);
        for k in 0..n {
            let mut acc = Complex::new(0.0, 0.0);
            for (i, &x) in frame[..used].iter().enumerate() {
                acc += x * self.twiddles[(k * i) % n];
            }
            spectrum.push(acc);
        }
        spectrum
    }

    /// Compute the one-sided power spectrum |X[k]|² for k = 0..size/2
    pub fn power_spectrum(&self, frame: &[f64]) -> Vec<f64> {
        self.forward(frame)
            .iter()
            .take(self.num_bins())
            .map(|c| c.norm_sqr())
            .collect()
    }

    /// Get frame size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get number of one-sided frequency bins (size/2 + 1)
    pub fn num_bins(&self) -> usize {
        self.size / 2 + 1
    }

    /// Convert bin index to frequency in Hz
    pub fn bin_to_frequency(&self, bin: usize, sample_rate: f64) -> f64 {
        bin as f64 * sample_rate / self.size as f64
    }

    /// Get frequency axis in Hz for the one-sided spectrum
    pub fn frequency_axis(&self, sample_rate: f64) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| self.bin_to_frequency(bin, sample_rate))
            .collect()
    }
}
