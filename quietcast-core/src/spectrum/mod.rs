//! Spectral analysis of noise recordings

pub mod analysis;
pub mod fft;
pub mod windowing;

pub use analysis::{SpectrumAnalyzer, SpectrumResult};
pub use fft::FftEngine;
pub use windowing::{apply_window, generate_window, WindowType};
