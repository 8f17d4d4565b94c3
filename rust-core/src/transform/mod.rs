//! Discrete Fourier transform by direct summation

pub mod dft;

pub use dft::{dft, idft, DftEngine};
