//! FFT engine using realfft for real-valued signals

use crate::error::DspError;
use realfft::RealFftPlanner;

/// Real-input FFT front end.
///
/// Plans are cached per buffer length by the underlying planner, so repeated
/// analysis of same-sized buffers reuses the plan.
pub struct FftEngine {
    planner: RealFftPlanner<f64>,
}

impl FftEngine {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::<f64>::new(),
        }
    }

    /// Compute the magnitude spectrum |X[k]| for k = 0..N/2 over the full
    /// buffer length. No zero-padding: the transform size is exactly
    /// `signal.len()`, so bin k sits at `k * sample_rate / N` Hz.
    pub fn magnitude(&mut self, signal: &[f64]) -> Result<Vec<f64>, DspError> {
        let r2c = self.planner.plan_fft_forward(signal.len());

        // realfft overwrites its input, so work on a scratch copy
        let mut input = signal.to_vec();
        let mut output: Vec<num_complex::Complex<f64>> = r2c.make_output_vec();

        r2c.process(&mut input, &mut output)
            .map_err(|e| DspError::InvalidInput(e.to_string()))?;

        Ok(output.iter().map(|c| c.norm()).collect())
    }

    /// Number of positive-frequency bins for a transform of length `n`
    pub fn num_bins(n: usize) -> usize {
        n / 2 + 1
    }

    /// Frequency axis in Hz: f[k] = k * sample_rate / n, ascending from DC
    /// to the Nyquist bin.
    pub fn frequency_axis_hz(n: usize, sample_rate: u32) -> Vec<f64> {
        (0..Self::num_bins(n))
            .map(|bin| bin as f64 * sample_rate as f64 / n as f64)
            .collect()
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_fft_dc_signal() {
        let mut fft = FftEngine::new();

        // DC signal (constant)
        let signal = vec![1.0; 100];
        let spectrum = fft.magnitude(&signal).unwrap();

        assert_eq!(spectrum.len(), 51);

        // DC bin carries the whole signal, everything else is near zero
        assert!(spectrum[0] > 99.0);
        assert!(spectrum[10] < 1e-9);
    }

    #[test]
    fn test_fft_sine_wave() {
        let mut fft = FftEngine::new();

        // Sine at bin 100 of a 1024-point transform
        let n = 1024;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 100.0 * i as f64 / n as f64).sin())
            .collect();

        let spectrum = fft.magnitude(&signal).unwrap();

        let (peak_bin, &peak_mag) = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert_eq!(peak_bin, 100);

        // Peak magnitude for a unit sine is N/2
        assert!((peak_mag - n as f64 / 2.0).abs() < 1.0);
    }

    #[test]
    fn test_fft_odd_length() {
        let mut fft = FftEngine::new();

        let signal = vec![1.0; 101];
        let spectrum = fft.magnitude(&signal).unwrap();

        assert_eq!(spectrum.len(), 51); // 101/2 + 1
    }

    #[test]
    fn test_frequency_axis() {
        let freqs = FftEngine::frequency_axis_hz(1024, 48_000);

        assert_eq!(freqs.len(), 513);
        assert_eq!(freqs[0], 0.0);
        assert!((freqs[512] - 24_000.0).abs() < 1e-9); // Nyquist
        assert!((freqs[1] - 48_000.0 / 1024.0).abs() < 1e-9);
    }
}
