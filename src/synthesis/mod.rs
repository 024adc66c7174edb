//! Synthetic test signals
//!
//! Deterministic generators for tones, three-formant "vowels" and
//! harmonic-plus-noise "breathy" voices. All of them return mono 16-bit
//! little-endian PCM, clipped to the i16 range, ready for
//! [`crate::analyze_voice`].
//!
//! # Example
//!
//! ```
//! use voxtune_dsp::synthesis::tone;
//!
//! let pcm = tone(440.0, 0.5, 0.5, 44100);
//! assert_eq!(pcm.len(), 22050 * 2);
//! ```

use crate::io::pcm::encode_pcm16le;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::PI;

/// Relative amplitudes of F1, F2, F3 in [`vowel`]
pub const VOWEL_WEIGHTS: [f32; 3] = [1.0, 0.7, 0.5];

/// Harmonics in the modal part of [`breathy_voice`]
pub const BREATHY_HARMONICS: usize = 5;

fn sample_count(duration: f32, sample_rate: u32) -> usize {
    (sample_rate as f32 * duration.max(0.0)).round() as usize
}

fn sine_at(frequency: f32, i: usize, sample_rate: u32) -> f32 {
    (2.0 * PI * frequency * i as f32 / sample_rate as f32).sin()
}

/// Pure sine tone: `amplitude · sin(2π·f·t)`
pub fn tone(frequency: f32, duration: f32, amplitude: f32, sample_rate: u32) -> Vec<u8> {
    let samples: Vec<f32> = (0..sample_count(duration, sample_rate))
        .map(|i| amplitude * sine_at(frequency, i, sample_rate))
        .collect();
    encode_pcm16le(&samples)
}

/// Three sinusoids at the formant frequencies, weighted 1.0 / 0.7 / 0.5
pub fn vowel(
    f1: f32,
    f2: f32,
    f3: f32,
    duration: f32,
    amplitude: f32,
    sample_rate: u32,
) -> Vec<u8> {
    let formants = [f1, f2, f3];
    let samples: Vec<f32> = (0..sample_count(duration, sample_rate))
        .map(|i| {
            let mix: f32 = formants
                .iter()
                .zip(VOWEL_WEIGHTS)
                .map(|(&f, weight)| weight * sine_at(f, i, sample_rate))
                .sum();
            amplitude * mix
        })
        .collect();
    encode_pcm16le(&samples)
}

/// Harmonic tone cross-faded with aspiration noise
///
/// The modal part is five harmonics with `1/h` amplitudes, scaled so its
/// peak stays within 1. The breathy part is `0.3 · modal + noise + 0.5 · hf_noise`,
/// where `noise` is uniform in [-1, 1] and `hf_noise` is the first difference
/// of a second uniform stream. `breathiness` (clamped to [0, 1]) blends the
/// two: `(1 - b) · modal + b · breathy`. The same `seed` always produces the
/// same signal.
pub fn breathy_voice(
    fundamental: f32,
    breathiness: f32,
    duration: f32,
    amplitude: f32,
    sample_rate: u32,
    seed: u64,
) -> Vec<u8> {
    let b = breathiness.clamp(0.0, 1.0);
    let mut rng = Pcg32::seed_from_u64(seed);
    let norm: f32 = (1..=BREATHY_HARMONICS).map(|h| 1.0 / h as f32).sum();

    let mut previous_hf = 0.0f32;
    let samples: Vec<f32> = (0..sample_count(duration, sample_rate))
        .map(|i| {
            let modal: f32 = (1..=BREATHY_HARMONICS)
                .map(|h| sine_at(fundamental * h as f32, i, sample_rate) / h as f32)
                .sum::<f32>()
                / norm;

            let noise: f32 = rng.gen_range(-1.0..=1.0);
            let hf_source: f32 = rng.gen_range(-1.0..=1.0);
            let hf_noise = hf_source - previous_hf;
            previous_hf = hf_source;

            let breathy = 0.3 * modal + noise + 0.5 * hf_noise;
            amplitude * ((1.0 - b) * modal + b * breathy)
        })
        .collect();
    encode_pcm16le(&samples)
}

/// Digital silence
pub fn silence(duration: f32, sample_rate: u32) -> Vec<u8> {
    vec![0u8; sample_count(duration, sample_rate) * 2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::pcm::decode_pcm16le;

    #[test]
    fn test_tone_length_and_peak() {
        let pcm = tone(440.0, 1.0, 0.5, 44100);
        assert_eq!(pcm.len(), 88200);
        let samples = decode_pcm16le(&pcm);
        let peak = samples.iter().fold(0.0f32, |m, &s| m.max(s.abs()));
        assert!((peak - 0.5).abs() < 0.01, "peak {}", peak);
    }

    #[test]
    fn test_tone_clips_to_i16() {
        let samples = decode_pcm16le(&tone(100.0, 0.05, 3.0, 44100));
        assert!(samples.iter().all(|&s| (-1.0..1.0).contains(&s)));
        let peak = samples.iter().fold(0.0f32, |m, &s| m.max(s));
        assert!((peak - 32767.0 / 32768.0).abs() < 1e-6);
    }

    #[test]
    fn test_vowel_weights() {
        // 11025 Hz at 44.1 kHz peaks on sample 1
        let peak = |pcm: Vec<u8>| decode_pcm16le(&pcm)[1];
        assert!((peak(vowel(11025.0, 0.0, 0.0, 0.01, 0.5, 44100)) - 0.5).abs() < 1e-4);
        assert!((peak(vowel(0.0, 11025.0, 0.0, 0.01, 0.5, 44100)) - 0.35).abs() < 1e-4);
        assert!((peak(vowel(0.0, 0.0, 11025.0, 0.01, 0.5, 44100)) - 0.25).abs() < 1e-4);
        assert_eq!(vowel(300.0, 2200.0, 3000.0, 0.01, 0.5, 44100).len(), 441 * 2);
    }

    #[test]
    fn test_modal_voice_peak_within_amplitude() {
        let samples = decode_pcm16le(&breathy_voice(200.0, 0.0, 0.1, 0.5, 44100, 1));
        let peak = samples.iter().fold(0.0f32, |m, &s| m.max(s.abs()));
        // Harmonics are scaled by 1 / sum(1/h), so the peak never exceeds 0.5
        assert!(peak <= 0.5 + 1e-3, "peak {}", peak);
        assert!(peak > 0.25, "peak {}", peak);
    }

    #[test]
    fn test_breathy_voice_is_deterministic() {
        let a = breathy_voice(200.0, 0.7, 0.05, 0.5, 44100, 42);
        let b = breathy_voice(200.0, 0.7, 0.05, 0.5, 44100, 42);
        let c = breathy_voice(200.0, 0.7, 0.05, 0.5, 44100, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_modal_voice_ignores_seed() {
        let a = breathy_voice(200.0, 0.0, 0.05, 0.5, 44100, 1);
        let b = breathy_voice(200.0, 0.0, 0.05, 0.5, 44100, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_silence() {
        let pcm = silence(0.1, 44100);
        assert_eq!(pcm.len(), 8820);
        assert!(pcm.iter().all(|&b| b == 0));
    }
}
