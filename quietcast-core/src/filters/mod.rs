//! Notch filter design and cascade application

pub mod biquad;
pub mod chain;

pub use biquad::{Biquad, BiquadCoeffs};
pub use chain::{apply_profile, FilterChain, NOTCH_Q};
