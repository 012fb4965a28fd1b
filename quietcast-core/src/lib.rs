//! QuietCast - Personalized Noise Filter Core
//!
//! Derives a noise-suppression EQ profile from a recorded noise sample and
//! applies it to arbitrary audio as a cascade of notch filters.
//!
//! ```
//! use quietcast::{apply_profile, generate_profile, ProfileParams, SpectrumAnalyzer};
//!
//! let fs = 44_100;
//! let hum: Vec<f64> = (0..fs as usize)
//!     .map(|n| (2.0 * std::f64::consts::PI * 1000.0 * n as f64 / fs as f64).sin())
//!     .collect();
//!
//! let mut analyzer = SpectrumAnalyzer::new();
//! let spectrum = analyzer.analyze(&hum, fs).unwrap();
//! let profile = generate_profile(&spectrum, fs, &ProfileParams::default()).unwrap();
//! let quiet = apply_profile(&hum, fs, &profile).unwrap();
//! assert_eq!(quiet.len(), hum.len());
//! ```

pub mod audio;
pub mod error;
pub mod filters;
pub mod profile;
pub mod spectrum;

pub use audio::AudioBuffer;
pub use error::DspError;
pub use filters::{apply_profile, FilterChain};
pub use profile::{generate_profile, EqBand, EqProfile, ProfileParams};
pub use spectrum::{SpectrumAnalyzer, SpectrumResult, WindowType};
