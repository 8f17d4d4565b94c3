//! Short-time spectral analysis and peak extraction

pub mod peak;
pub mod stft;
pub mod windows;

pub use peak::{peak_indices, PeakError};
pub use stft::{stft, stft_with, Stft, StftConfig, StftError};
pub use windows::{apply_window, generate_window, WindowType};
