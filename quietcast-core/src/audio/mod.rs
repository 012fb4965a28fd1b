//! Audio capture, playback, and file I/O
//!
//! These collaborators produce the buffers the DSP core analyzes and consume
//! the buffers it filters. The core itself is mono; everything entering
//! through this module is downmixed to one channel.

pub mod capture;
pub mod playback;
pub mod ring;
pub mod wav;

pub use capture::{record, AudioError};
pub use playback::play;
pub use ring::AudioRingBuffer;
pub use wav::{load_wav, save_wav};

/// Mono audio clip: samples plus the rate they were captured at
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
}

impl AudioBuffer {
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let buffer = AudioBuffer::new(vec![0.0; 22_050], 44_100);
        assert!((buffer.duration_secs() - 0.5).abs() < 1e-12);
    }
}
