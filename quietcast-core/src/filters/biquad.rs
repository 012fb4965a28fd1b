//! Second-order band-stop (notch) sections

use crate::error::DspError;
use std::f64::consts::PI;

/// Biquad coefficients, normalized so a0 == 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BiquadCoeffs {
    /// Band-stop section centered at `frequency_hz` (RBJ cookbook form).
    ///
    /// `q` controls the notch bandwidth (center frequency / -3 dB width).
    /// Fails with [`DspError::InvalidFrequency`] unless
    /// `0 < frequency_hz < sample_rate / 2`.
    pub fn notch(frequency_hz: f64, q: f64, sample_rate: u32) -> Result<Self, DspError> {
        let nyquist_hz = sample_rate as f64 / 2.0;
        if !frequency_hz.is_finite() || frequency_hz <= 0.0 || frequency_hz >= nyquist_hz {
            return Err(DspError::InvalidFrequency {
                frequency_hz,
                nyquist_hz,
            });
        }
        if !q.is_finite() || q <= 0.0 {
            return Err(DspError::InvalidParameter(format!(
                "Q factor {} must be positive",
                q
            )));
        }

        let omega = 2.0 * PI * frequency_hz / sample_rate as f64;
        let (sin_w0, cos_w0) = omega.sin_cos();
        let alpha = sin_w0 / (2.0 * q);
        let a0 = 1.0 + alpha;

        Ok(Self {
            b0: 1.0 / a0,
            b1: -2.0 * cos_w0 / a0,
            b2: 1.0 / a0,
            a1: -2.0 * cos_w0 / a0,
            a2: (1.0 - alpha) / a0,
        })
    }
}

/// One cascade stage: coefficients plus transposed direct form II state
#[derive(Debug, Clone)]
pub struct Biquad {
    coeffs: BiquadCoeffs,
    z1: f64,
    z2: f64,
}

impl Biquad {
    pub fn new(coeffs: BiquadCoeffs) -> Self {
        Self {
            coeffs,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Filter a single sample
    #[inline]
    pub fn process_sample(&mut self, input: f64) -> f64 {
        let output = self.coeffs.b0 * input + self.z1;
        self.z1 = self.coeffs.b1 * input - self.coeffs.a1 * output + self.z2;
        self.z2 = self.coeffs.b2 * input - self.coeffs.a2 * output;
        output
    }

    /// Clear the delay line
    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }

    pub fn coeffs(&self) -> &BiquadCoeffs {
        &self.coeffs
    }
}
