//! Microphone capture using cpal
//!
//! Records a fixed-length mono noise sample from the default input device.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::StreamConfig;
use std::time::Duration;
use thiserror::Error;

use super::ring::AudioRingBuffer;
use super::AudioBuffer;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("No audio device found")]
    NoDevice,

    #[error("Failed to get default config: {0}")]
    DefaultConfig(String),

    #[error("Failed to build stream: {0}")]
    BuildStream(String),

    #[error("Failed to play stream: {0}")]
    PlayStream(String),

    #[error("Device does not support {requested} Hz (device default: {device} Hz). Change the device sample rate in system settings.")]
    UnsupportedSampleRate { requested: u32, device: u32 },

    #[error("Failed to read WAV file: {0}")]
    WavRead(String),

    #[error("Failed to write WAV file: {0}")]
    WavWrite(String),
}

/// Record `duration` of mono audio at `sample_rate` from the default input
/// device.
///
/// The device must already run at the requested rate; no resampling is done.
/// Multi-channel devices are downmixed by averaging each frame, so the result
/// is always a single channel.
pub fn record(duration: Duration, sample_rate: u32) -> Result<AudioBuffer, AudioError> {
    let host = cpal::default_host();
    let device = host.default_input_device().ok_or(AudioError::NoDevice)?;

    let config = device
        .default_input_config()
        .map_err(|e| AudioError::DefaultConfig(e.to_string()))?;

    let device_rate = config.sample_rate().0;
    if device_rate != sample_rate {
        return Err(AudioError::UnsupportedSampleRate {
            requested: sample_rate,
            device: device_rate,
        });
    }

    let channels = config.channels() as usize;
    let target_len = (duration.as_secs_f64() * sample_rate as f64).round() as usize;

    // One extra second of headroom between callback and drain loop
    let rb = AudioRingBuffer::new(target_len + sample_rate as usize);
    let (mut producer, mut consumer) = rb.split();

    let stream_config: StreamConfig = config.into();
    let stream = device
        .build_input_stream(
            &stream_config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                // Average each interleaved frame down to one sample
                let mono: Vec<f64> = data
                    .chunks_exact(channels)
                    .map(|frame| {
                        frame.iter().map(|&s| s as f64).sum::<f64>() / channels as f64
                    })
                    .collect();
                producer.write(&mono);
            },
            move |err| {
                eprintln!("Audio input error: {}", err);
            },
            None,
        )
        .map_err(|e| AudioError::BuildStream(e.to_string()))?;

    stream
        .play()
        .map_err(|e| AudioError::PlayStream(e.to_string()))?;

    let mut samples = Vec::with_capacity(target_len);
    let mut scratch = vec![0.0; 4096];
    while samples.len() < target_len {
        let read = consumer.read(&mut scratch);
        if read == 0 {
            std::thread::sleep(Duration::from_millis(10));
            continue;
        }
        let wanted = (target_len - samples.len()).min(read);
        samples.extend_from_slice(&scratch[..wanted]);
    }

    drop(stream);
    Ok(AudioBuffer::new(samples, sample_rate))
}
