//! Timelag - Time-Frequency and Time-Lag Analysis Core
//!
//! Direct-summation Fourier analysis and NaN-tolerant correlation engines
//! for finite one-dimensional signals.

pub mod correlate;
pub mod spectrum;
pub mod transform;

pub use correlate::{
    cross_correlate, moving_correlate, stac, CorrelateError, FrameSink, LagSeries, Mode,
    SweepFrame,
};
pub use spectrum::{peak_indices, stft, PeakError, Stft, StftConfig, WindowType};
pub use transform::{dft, idft, DftEngine};
