//! Noise-sample spectrum analysis

use super::fft::FftEngine;
use super::windowing::{apply_window, window_correction_factor, WindowType};
use crate::error::{validate_samples, DspError};

/// Frequency/magnitude spectrum derived from one buffer.
///
/// Both sequences have length `N/2 + 1` for an N-sample input, with
/// `frequencies[k] = k * sample_rate / N` ascending from 0 Hz to Nyquist.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumResult {
    /// Bin center frequencies in Hz
    pub frequencies: Vec<f64>,
    /// Magnitude |X[k]| per bin, non-negative
    pub magnitudes: Vec<f64>,
}

impl SpectrumResult {
    /// Number of frequency bins
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Transforms a time-domain buffer into a frequency/magnitude spectrum.
///
/// The result depends only on the arguments of [`analyze`](Self::analyze);
/// internal state is limited to FFT plan reuse, so callers may memoize
/// results keyed on input content.
pub struct SpectrumAnalyzer {
    fft: FftEngine,
    window: WindowType,
}

impl SpectrumAnalyzer {
    /// Analyzer with the default (rectangular / no-window) behavior
    pub fn new() -> Self {
        Self::with_window(WindowType::Rectangular)
    }

    /// Analyzer applying the given window before the transform.
    ///
    /// Magnitudes are rescaled by the window's amplitude correction factor so
    /// peak heights stay comparable with the unwindowed default.
    pub fn with_window(window: WindowType) -> Self {
        Self {
            fft: FftEngine::new(),
            window,
        }
    }

    /// Compute the magnitude spectrum of `samples`.
    ///
    /// Fails with [`DspError::InvalidInput`] for an empty buffer or
    /// non-finite samples, and [`DspError::InvalidParameter`] for a zero
    /// sample rate.
    pub fn analyze(
        &mut self,
        samples: &[f64],
        sample_rate: u32,
    ) -> Result<SpectrumResult, DspError> {
        validate_samples(samples)?;
        if sample_rate == 0 {
            return Err(DspError::InvalidParameter(
                "sample rate must be positive".to_string(),
            ));
        }

        let n = samples.len();
        let magnitudes = match self.window {
            WindowType::Rectangular => self.fft.magnitude(samples)?,
            window => {
                let windowed = apply_window(samples, window);
                let correction = window_correction_factor(window, n);
                let mut magnitudes = self.fft.magnitude(&windowed)?;
                for m in magnitudes.iter_mut() {
                    *m *= correction;
                }
                magnitudes
            }
        };

        Ok(SpectrumResult {
            frequencies: FftEngine::frequency_axis_hz(n, sample_rate),
            magnitudes,
        })
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq_hz: f64, sample_rate: u32, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate as f64).sin())
            .collect()
    }

    #[test]
    fn test_sine_peak_within_one_bin() {
        let fs = 48_000;
        let n = 4800; // bin width 10 Hz
        let f0 = 997.0;
        let signal = sine(f0, fs, n);

        let mut analyzer = SpectrumAnalyzer::new();
        let spectrum = analyzer.analyze(&signal, fs).unwrap();

        let (peak_idx, _) = spectrum
            .magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        let bin_width = fs as f64 / n as f64;
        assert!((spectrum.frequencies[peak_idx] - f0).abs() <= bin_width);
    }

    #[test]
    fn test_spectrum_shape_invariants() {
        let fs = 44_100;
        let n = 1000;
        let signal = sine(440.0, fs, n);

        let mut analyzer = SpectrumAnalyzer::new();
        let spectrum = analyzer.analyze(&signal, fs).unwrap();

        assert_eq!(spectrum.len(), n / 2 + 1);
        assert_eq!(spectrum.frequencies.len(), spectrum.magnitudes.len());
        for (k, &f) in spectrum.frequencies.iter().enumerate() {
            assert!((f - k as f64 * fs as f64 / n as f64).abs() < 1e-9);
        }
        assert!(spectrum.magnitudes.iter().all(|&m| m >= 0.0));
    }

    #[test]
    fn test_empty_buffer_is_invalid_input() {
        let mut analyzer = SpectrumAnalyzer::new();
        assert!(matches!(
            analyzer.analyze(&[], 44_100),
            Err(DspError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nan_sample_is_invalid_input() {
        let mut analyzer = SpectrumAnalyzer::new();
        assert!(matches!(
            analyzer.analyze(&[0.0, f64::NAN], 44_100),
            Err(DspError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_sample_rate_is_invalid_parameter() {
        let mut analyzer = SpectrumAnalyzer::new();
        assert!(matches!(
            analyzer.analyze(&[0.0, 1.0], 0),
            Err(DspError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_windowed_peak_stays_comparable() {
        let fs = 48_000;
        let n = 4800;
        let signal = sine(1000.0, fs, n);

        let plain = SpectrumAnalyzer::new().analyze(&signal, fs).unwrap();
        let windowed = SpectrumAnalyzer::with_window(WindowType::Hann)
            .analyze(&signal, fs)
            .unwrap();

        // 1 kHz lands exactly on bin 100 for this length
        let peak_plain = plain.magnitudes[100];
        let peak_windowed = windowed.magnitudes[100];
        assert!((peak_windowed - peak_plain).abs() / peak_plain < 0.05);
    }
}
