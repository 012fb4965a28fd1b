//! WAV file loading and saving with hound

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

use super::capture::AudioError;
use super::AudioBuffer;

/// Load a WAV file as a mono buffer.
///
/// Integer formats are normalized to [-1, 1]; multi-channel files are
/// downmixed by averaging each frame, since the core accepts mono only.
pub fn load_wav(path: impl AsRef<Path>) -> Result<AudioBuffer, AudioError> {
    let mut reader =
        WavReader::open(path).map_err(|e| AudioError::WavRead(e.to_string()))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<Result<_, _>>()
            .map_err(|e| AudioError::WavRead(e.to_string()))?,
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()
                .map_err(|e| AudioError::WavRead(e.to_string()))?
        }
    };

    let samples = if channels <= 1 {
        interleaved
    } else {
        interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f64>() / channels as f64)
            .collect()
    };

    Ok(AudioBuffer::new(samples, spec.sample_rate))
}

/// Save a mono buffer as 32-bit float WAV
pub fn save_wav(buffer: &AudioBuffer, path: impl AsRef<Path>) -> Result<(), AudioError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| AudioError::WavWrite(e.to_string()))?;
    for &sample in &buffer.samples {
        writer
            .write_sample(sample as f32)
            .map_err(|e| AudioError::WavWrite(e.to_string()))?;
    }
    writer
        .finalize()
        .map_err(|e| AudioError::WavWrite(e.to_string()))?;

    Ok(())
}
