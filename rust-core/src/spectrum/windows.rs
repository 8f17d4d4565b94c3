//! Window functions for short-time spectral analysis
//!
//! Applies tapers to time-domain frames before the transform to reduce
//! spectral leakage

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Mainlobe width: 8π/M, Sidelobe attenuation: ~44 dB
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    /// Mainlobe width: 8π/M, Sidelobe attenuation: ~53 dB
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    /// Mainlobe width: 12π/M, Sidelobe attenuation: ~74 dB
    Blackman,

    /// Rectangular window (no tapering)
    Rectangular,
}

impl WindowType {
    /// Generate the window coefficients w[n] for n = 0..M-1
    pub fn generate(&self, length: usize) -> Vec<f64> {
        generate_window(*self, length)
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    // Degenerate lengths have no taper to apply
    if length <= 1 {
        return vec![1.0; length];
    }

    let m = length as f64;
    let mut window = Vec::with_capacity(length);

    match window_type {
        WindowType::Hann => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f64 / (m - 1.0);
                window.push(0.5 - 0.5 * angle.cos());
            }
        }

        WindowType::Hamming => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f64 / (m - 1.0);
                window.push(0.54 - 0.46 * angle.cos());
            }
        }

        WindowType::Blackman => {
            for n in 0..length {
                let angle1 = 2.0 * PI * n as f64 / (m - 1.0);
                let angle2 = 4.0 * PI * n as f64 / (m - 1.0);
                window.push(0.42 - 0.5 * angle1.cos() + 0.08 * angle2.cos());
            }
        }

        WindowType::Rectangular => {
            window.resize(length, 1.0);
        }
    }

    window
}

/// Apply window to a frame
///
/// # Arguments
/// * `frame` - Input frame
/// * `window_type` - Type of window to apply
///
/// # Returns
/// Windowed frame
pub fn apply_window(frame: &[f64], window_type: WindowType) -> Vec<f64> {
    let window = generate_window(window_type, frame.len());

    frame
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Apply window in-place
pub fn apply_window_inplace(frame: &mut [f64], window: &[f64]) {
    for (s, w) in frame.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_generation() {
        let length = 161;

        let hann = generate_window(WindowType::Hann, length);
        let hamming = generate_window(WindowType::Hamming, length);
        let blackman = generate_window(WindowType::Blackman, length);

        assert_eq!(hann.len(), length);
        assert_eq!(hamming.len(), length);
        assert_eq!(blackman.len(), length);

        // Check symmetry
        assert!((hann[0] - hann[length - 1]).abs() < 1e-10);
        assert!((hamming[0] - hamming[length - 1]).abs() < 1e-10);
        assert!((blackman[0] - blackman[length - 1]).abs() < 1e-10);

        // Check center values (should be 1.0 for symmetric windows)
        let center = length / 2;
        assert!((hann[center] - 1.0).abs() < 1e-10);
        assert!((hamming[center] - 1.0).abs() < 1e-10);
        assert!((blackman[center] - 1.0).abs() < 1e-10);

        // Hamming should have non-zero endpoints (0.08)
        assert!(hamming[0] > 0.07 && hamming[0] < 0.09);
    }

    #[test]
    fn test_rectangular_window() {
        let window = generate_window(WindowType::Rectangular, 100);
        assert_eq!(window.len(), 100);
        assert!(window.iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(generate_window(WindowType::Hamming, 0).is_empty());
        assert_eq!(generate_window(WindowType::Hamming, 1), vec![1.0]);
    }

    #[test]
    fn test_apply_window() {
        let frame = vec![1.0; 100];
        let windowed = apply_window(&frame, WindowType::Hamming);

        assert_eq!(windowed.len(), 100);

        // Center should be close to 1.0
        assert!((windowed[50] - 1.0).abs() < 0.01);

        // Edges should be reduced (Hamming ~0.08)
        assert!(windowed[0] < 0.1);
        assert!(windowed[99] < 0.1);
    }
}
