//! Notch cascade built from an EQ profile

use super::biquad::{Biquad, BiquadCoeffs};
use crate::error::{validate_samples, DspError};
use crate::profile::EqProfile;

/// Notch bandwidth factor, fixed for every band.
///
/// Note that the profile's `gain_db` is not read during design: every stage
/// cuts with the same fixed depth. Per-band depth would need the notch
/// replaced with a peaking cut.
pub const NOTCH_Q: f64 = 5.0;

/// Ordered cascade of notch stages, one per profile band.
///
/// Built fresh for each application; state never carries across buffers.
pub struct FilterChain {
    stages: Vec<Biquad>,
}

impl FilterChain {
    /// Design one notch per band, in stored profile order.
    ///
    /// Every band is validated before any stage is built, so a single
    /// out-of-range frequency fails the whole chain with
    /// [`DspError::InvalidFrequency`] and nothing is partially applied.
    pub fn from_profile(profile: &EqProfile, sample_rate: u32) -> Result<Self, DspError> {
        if sample_rate == 0 {
            return Err(DspError::InvalidParameter(
                "sample rate must be positive".to_string(),
            ));
        }

        let mut stages = Vec::with_capacity(profile.len());
        for band in profile.bands() {
            let coeffs = BiquadCoeffs::notch(band.frequency_hz, NOTCH_Q, sample_rate)?;
            stages.push(Biquad::new(coeffs));
        }

        Ok(Self { stages })
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run the cascade over a buffer.
    ///
    /// Each stage starts from zero state and consumes the previous stage's
    /// complete output. Stage order follows the profile; reordering changes
    /// the output at floating-point precision, so the stored order is
    /// canonical.
    pub fn process(&mut self, samples: &[f64]) -> Vec<f64> {
        let mut buffer = samples.to_vec();
        for stage in self.stages.iter_mut() {
            stage.reset();
            for sample in buffer.iter_mut() {
                *sample = stage.process_sample(*sample);
            }
        }
        buffer
    }
}

/// Filter `samples` through the notch cascade described by `profile`.
///
/// An empty profile returns the input unchanged. Input validation matches
/// [`SpectrumAnalyzer::analyze`](crate::SpectrumAnalyzer::analyze): empty
/// buffers and non-finite samples are rejected.
pub fn apply_profile(
    samples: &[f64],
    sample_rate: u32,
    profile: &EqProfile,
) -> Result<Vec<f64>, DspError> {
    validate_samples(samples)?;
    let mut chain = FilterChain::from_profile(profile, sample_rate)?;
    Ok(chain.process(samples))
}
