//! WAV file loading and writing using hound
//!
//! Bridges files on disk to the raw PCM buffers the analyzer consumes.

use super::pcm::{encode_pcm16le, sample_to_i16};
use crate::error::AnalysisError;
use std::path::Path;

/// Decoded WAV contents, down-mixed to mono 16-bit PCM
#[derive(Debug, Clone)]
pub struct WavPcm {
    /// Mono 16-bit little-endian PCM bytes
    pub pcm: Vec<u8>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Channel count of the source file
    pub source_channels: u16,
}

/// Load a WAV file as mono 16-bit PCM
///
/// Integer formats are rescaled from their bit depth, float formats are taken
/// as-is; multi-channel audio is averaged to mono.
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` if the file cannot be read or parsed
pub fn load_wav_pcm16<P: AsRef<Path>>(path: P) -> Result<WavPcm, AnalysisError> {
    let path = path.as_ref();
    log::debug!("Loading WAV file: {}", path.display());

    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let channels = spec.channels.max(1) as usize;
    let mono: Vec<f32> = if channels == 1 {
        samples
    } else {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    };

    log::debug!(
        "Loaded {} mono samples at {} Hz ({} source channels)",
        mono.len(),
        spec.sample_rate,
        spec.channels
    );

    Ok(WavPcm {
        pcm: encode_pcm16le(&mono),
        sample_rate: spec.sample_rate,
        source_channels: spec.channels,
    })
}

/// Write mono 16-bit little-endian PCM to a WAV file
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` if the file cannot be written
pub fn write_wav_pcm16<P: AsRef<Path>>(
    path: P,
    pcm: &[u8],
    sample_rate: u32,
) -> Result<(), AnalysisError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
    for pair in pcm.chunks_exact(2) {
        writer.write_sample(i16::from_le_bytes([pair[0], pair[1]]))?;
    }
    writer.finalize()?;
    Ok(())
}

/// Write normalized samples to a mono 16-bit WAV file
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` if the file cannot be written
pub fn write_wav_samples<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    sample_rate: u32,
) -> Result<(), AnalysisError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
    for &sample in samples {
        writer.write_sample(sample_to_i16(sample))?;
    }
    writer.finalize()?;
    Ok(())
}
