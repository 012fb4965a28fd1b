//! Playback of original or filtered audio using cpal

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::StreamConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::capture::AudioError;
use super::ring::AudioRingBuffer;
use super::AudioBuffer;

/// Play a mono buffer on the default output device, blocking until the last
/// sample has been handed to the device.
///
/// The device must run at the buffer's sample rate; no resampling is done.
/// The mono signal is duplicated across all output channels.
pub fn play(buffer: &AudioBuffer) -> Result<(), AudioError> {
    if buffer.is_empty() {
        return Ok(());
    }

    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

    let config = device
        .default_output_config()
        .map_err(|e| AudioError::DefaultConfig(e.to_string()))?;

    let device_rate = config.sample_rate().0;
    if device_rate != buffer.sample_rate {
        return Err(AudioError::UnsupportedSampleRate {
            requested: buffer.sample_rate,
            device: device_rate,
        });
    }

    let channels = config.channels() as usize;

    let rb = AudioRingBuffer::new(buffer.len() + 1);
    let (mut producer, mut consumer) = rb.split();
    let queued = producer.write(&buffer.samples);

    let remaining = Arc::new(AtomicUsize::new(queued));
    let remaining_cb = Arc::clone(&remaining);

    let stream_config: StreamConfig = config.into();
    let stream = device
        .build_output_stream(
            &stream_config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let frames = data.len() / channels;
                let mut mono = vec![0.0; frames];
                let read = consumer.read(&mut mono);

                for (frame, &sample) in data.chunks_exact_mut(channels).zip(mono[..read].iter()) {
                    frame.fill(sample as f32);
                }
                // Zero-fill once the buffer runs out
                for frame in data.chunks_exact_mut(channels).skip(read) {
                    frame.fill(0.0);
                }

                remaining_cb.fetch_sub(read, Ordering::Relaxed);
            },
            move |err| {
                eprintln!("Audio output error: {}", err);
            },
            None,
        )
        .map_err(|e| AudioError::BuildStream(e.to_string()))?;

    stream
        .play()
        .map_err(|e| AudioError::PlayStream(e.to_string()))?;

    while remaining.load(Ordering::Relaxed) > 0 {
        std::thread::sleep(Duration::from_millis(10));
    }
    // Let the device drain its final callback buffer
    std::thread::sleep(Duration::from_millis(50));

    drop(stream);
    Ok(())
}
