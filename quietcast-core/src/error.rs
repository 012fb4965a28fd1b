//! Error types for the DSP core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DspError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Band frequency {frequency_hz} Hz is outside (0, {nyquist_hz}) Hz")]
    InvalidFrequency { frequency_hz: f64, nyquist_hz: f64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Reject empty buffers and non-finite samples before any processing.
pub(crate) fn validate_samples(samples: &[f64]) -> Result<(), DspError> {
    if samples.is_empty() {
        return Err(DspError::InvalidInput("sample buffer is empty".to_string()));
    }
    if let Some(pos) = samples.iter().position(|s| !s.is_finite()) {
        return Err(DspError::InvalidInput(format!(
            "non-finite sample at index {}",
            pos
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty() {
        assert!(matches!(
            validate_samples(&[]),
            Err(DspError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nan_and_inf() {
        assert!(matches!(
            validate_samples(&[0.0, f64::NAN, 1.0]),
            Err(DspError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_samples(&[f64::INFINITY]),
            Err(DspError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_accepts_finite() {
        assert!(validate_samples(&[0.0, -1.0, 0.5]).is_ok());
    }
}
