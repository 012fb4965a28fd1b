//! Dominant-peak selection from a magnitude spectrum

use super::{EqBand, EqProfile};
use crate::error::DspError;
use crate::spectrum::SpectrumResult;

/// Fixed nominal cut assigned to every detected band
const BAND_GAIN_DB: f64 = -6.0;

/// Peaks below this frequency are treated as rumble/DC and skipped
const MIN_BAND_FREQUENCY_HZ: f64 = 20.0;

/// Peak selection parameters
#[derive(Debug, Clone)]
pub struct ProfileParams {
    /// Maximum number of bands kept in the profile
    pub num_bands: usize,

    /// Percentile of the magnitude distribution a bin must reach to be
    /// eligible as a peak
    pub threshold_percentile: f64,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            num_bands: 10,
            threshold_percentile: 90.0,
        }
    }
}

/// Pick the dominant frequencies of a spectrum into a bounded EQ profile.
///
/// Local maxima at or above the percentile threshold are accepted with a
/// minimum spacing of `sample_rate / 100` bins (highest magnitude wins when
/// two candidates are closer), peaks below 20 Hz are discarded, and the
/// survivors are ranked by magnitude and truncated to `num_bands`. Finding
/// fewer peaks than `num_bands`, or none at all, is not an error.
pub fn generate_profile(
    spectrum: &SpectrumResult,
    sample_rate: u32,
    params: &ProfileParams,
) -> Result<EqProfile, DspError> {
    if params.num_bands == 0 {
        return Err(DspError::InvalidParameter(
            "num_bands must be positive".to_string(),
        ));
    }
    if !params.threshold_percentile.is_finite()
        || !(0.0..=100.0).contains(&params.threshold_percentile)
    {
        return Err(DspError::InvalidParameter(format!(
            "threshold percentile {} outside [0, 100]",
            params.threshold_percentile
        )));
    }
    if sample_rate == 0 {
        return Err(DspError::InvalidParameter(
            "sample rate must be positive".to_string(),
        ));
    }
    if spectrum.frequencies.len() != spectrum.magnitudes.len() {
        return Err(DspError::InvalidInput(
            "frequency and magnitude axes differ in length".to_string(),
        ));
    }
    if spectrum.magnitudes.is_empty() {
        return Err(DspError::InvalidInput("spectrum is empty".to_string()));
    }
    if spectrum.magnitudes.iter().any(|m| !m.is_finite()) {
        return Err(DspError::InvalidInput(
            "non-finite spectral magnitude".to_string(),
        ));
    }

    let threshold = percentile(&spectrum.magnitudes, params.threshold_percentile);
    let min_distance = (sample_rate / 100).max(1) as usize;
    let peaks = find_peaks(&spectrum.magnitudes, threshold, min_distance);

    let mut bands: Vec<EqBand> = peaks
        .into_iter()
        .filter(|&idx| spectrum.frequencies[idx] >= MIN_BAND_FREQUENCY_HZ)
        .map(|idx| EqBand {
            frequency_hz: spectrum.frequencies[idx],
            gain_db: BAND_GAIN_DB,
            magnitude: spectrum.magnitudes[idx],
        })
        .collect();

    bands.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    bands.truncate(params.num_bands);

    Ok(EqProfile::new(bands))
}

/// Linearly interpolated percentile (NumPy default semantics)
fn percentile(values: &[f64], pct: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

/// Local maxima at or above `threshold`, thinned so that no two accepted
/// peaks are closer than `min_distance` bins.
///
/// Plateaus count once, at their midpoint. Thinning considers the highest
/// candidates first, so a large peak always beats smaller neighbors inside
/// its exclusion radius.
fn find_peaks(magnitudes: &[f64], threshold: f64, min_distance: usize) -> Vec<usize> {
    let n = magnitudes.len();
    let mut candidates = Vec::new();

    let mut i = 1;
    while n >= 3 && i < n - 1 {
        if magnitudes[i - 1] < magnitudes[i] {
            // Walk over a possible plateau
            let mut ahead = i + 1;
            while ahead < n - 1 && magnitudes[ahead] == magnitudes[i] {
                ahead += 1;
            }
            if magnitudes[ahead] < magnitudes[i] {
                let peak = (i + ahead - 1) / 2;
                if magnitudes[peak] >= threshold {
                    candidates.push(peak);
                }
                i = ahead;
                continue;
            }
        }
        i += 1;
    }

    if min_distance <= 1 || candidates.len() <= 1 {
        return candidates;
    }

    let mut by_height: Vec<usize> = (0..candidates.len()).collect();
    by_height.sort_by(|&a, &b| magnitudes[candidates[b]].total_cmp(&magnitudes[candidates[a]]));

    let mut keep = vec![true; candidates.len()];
    for &k in &by_height {
        if !keep[k] {
            continue;
        }
        for j in 0..candidates.len() {
            if j != k && keep[j] && candidates[j].abs_diff(candidates[k]) < min_distance {
                keep[j] = false;
            }
        }
    }

    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(idx, kept)| kept.then_some(idx))
        .collect()
}
