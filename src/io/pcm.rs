//! 16-bit little-endian PCM conversion
//!
//! Decoding is total: any byte slice, including an empty one, yields a
//! (possibly empty) sample vector. A trailing odd byte is dropped.

/// Full-scale divisor for signed 16-bit samples
const I16_SCALE: f32 = 32768.0;

/// Decode mono 16-bit little-endian PCM into samples normalized to [-1.0, 1.0)
///
/// # Example
///
/// ```
/// use voxtune_dsp::io::pcm::decode_pcm16le;
///
/// let samples = decode_pcm16le(&[0x00, 0x40, 0x00, 0xC0, 0x7F]);
/// assert_eq!(samples, vec![0.5, -0.5]);
/// ```
pub fn decode_pcm16le(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / I16_SCALE)
        .collect()
}

/// Encode normalized samples as mono 16-bit little-endian PCM
///
/// Samples are scaled by 32767 and clipped to the i16 range before encoding.
pub fn encode_pcm16le(samples: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        bytes.extend_from_slice(&sample_to_i16(sample).to_le_bytes());
    }
    bytes
}

/// Scale a normalized sample to i16, clipping out-of-range values
pub fn sample_to_i16(sample: f32) -> i16 {
    let scaled = (sample * i16::MAX as f32).round();
    if scaled.is_nan() {
        0
    } else {
        scaled.clamp(i16::MIN as f32, i16::MAX as f32) as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert!(decode_pcm16le(&[]).is_empty());
    }

    #[test]
    fn test_decode_drops_trailing_byte() {
        assert!(decode_pcm16le(&[0x12]).is_empty());
        assert_eq!(decode_pcm16le(&[0x00, 0x00, 0xFF]).len(), 1);
    }

    #[test]
    fn test_decode_extremes() {
        // 0x7FFF = 32767, 0x8000 = -32768
        let samples = decode_pcm16le(&[0xFF, 0x7F, 0x00, 0x80]);
        assert!((samples[0] - 32767.0 / 32768.0).abs() < 1e-7);
        assert_eq!(samples[1], -1.0);
    }

    #[test]
    fn test_decode_low_high_order() {
        // low | high * 256: 0x01 + 0x02 * 256 = 513
        let samples = decode_pcm16le(&[0x01, 0x02]);
        assert_eq!(samples[0], 513.0 / 32768.0);
    }

    #[test]
    fn test_encode_clips() {
        assert_eq!(sample_to_i16(2.0), i16::MAX);
        assert_eq!(sample_to_i16(-2.0), i16::MIN);
        assert_eq!(sample_to_i16(f32::NAN), 0);
        assert_eq!(encode_pcm16le(&[0.0, 1.5]), vec![0x00, 0x00, 0xFF, 0x7F]);
    }
}
