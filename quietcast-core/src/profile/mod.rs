//! EQ profile value objects
//!
//! The profile is the exportable artifact of noise analysis: a ranked,
//! bounded list of dominant frequencies with a nominal attenuation. It
//! serializes as an ordered JSON array of
//! `{"frequency": f, "gain": g, "magnitude": m}` objects.

pub mod peaks;

pub use peaks::{generate_profile, ProfileParams};

use serde::{Deserialize, Serialize};

/// One suppression band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqBand {
    /// Center frequency in Hz, always >= 20
    #[serde(rename = "frequency")]
    pub frequency_hz: f64,

    /// Nominal attenuation in dB. Fixed at -6 by the selector; filter design
    /// does not read it (see `filters::chain`).
    #[serde(rename = "gain")]
    pub gain_db: f64,

    /// Measured spectral magnitude at the peak, kept for diagnostics and
    /// ranking only
    pub magnitude: f64,
}

/// Immutable, ranked set of suppression bands, magnitude descending
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EqProfile {
    bands: Vec<EqBand>,
}

impl EqProfile {
    pub fn new(bands: Vec<EqBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[EqBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Serialize as the canonical JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from the canonical JSON array, order-preserving
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a EqProfile {
    type Item = &'a EqBand;
    type IntoIter = std::slice::Iter<'a, EqBand>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> EqProfile {
        EqProfile::new(vec![
            EqBand {
                frequency_hz: 5000.0,
                gain_db: -6.0,
                magnitude: 220.5,
            },
            EqBand {
                frequency_hz: 1000.0,
                gain_db: -6.0,
                magnitude: 110.25,
            },
        ])
    }

    #[test]
    fn test_json_shape() {
        let json = sample_profile().to_json().unwrap();

        // Canonical field names, not the Rust ones
        assert!(json.contains("\"frequency\":5000.0"));
        assert!(json.contains("\"gain\":-6.0"));
        assert!(json.contains("\"magnitude\":220.5"));
        assert!(!json.contains("frequency_hz"));
        assert!(json.starts_with('['));
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let profile = sample_profile();
        let restored = EqProfile::from_json(&profile.to_json().unwrap()).unwrap();

        assert_eq!(restored, profile);
        assert_eq!(restored.bands()[0].frequency_hz, 5000.0);
        assert_eq!(restored.bands()[1].frequency_hz, 1000.0);
    }

    #[test]
    fn test_empty_profile_round_trip() {
        let restored = EqProfile::from_json("[]").unwrap();
        assert!(restored.is_empty());
    }
}
