//! Breathiness estimation modules
//!
//! Combines two spectral cues into one score in [0, 1]:
//! - Spectral tilt (high-band over low-band energy)
//! - Noise between harmonics relative to the harmonic peaks
//!
//! `score = clamp01(0.6 · min(tilt · 0.5, 1) + 0.4 · min(noise_ratio, 1))`
//! with the weights taken from [`BreathinessConfig`].

pub mod harmonics;
pub mod quality;
pub mod tilt;

use super::spectrum::{PowerSpectrum, SpectralTransform};
use super::{Estimator, EstimatorDescriptor};
use crate::config::{AnalysisConfig, BreathinessConfig};
use quality::VoiceQuality;
use serde::{Deserialize, Serialize};

/// Breathiness measurement of one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breathiness {
    /// High-band over low-band energy
    pub spectral_tilt: f32,
    /// Inter-harmonic noise over harmonic peaks (1.0 when no fundamental)
    pub noise_ratio: f32,
    /// Combined score in [0, 1]
    pub score: f32,
}

/// "Not measured" sentinel for degraded reports
///
/// `score` is 0.0 to match the 0 percent and "Unknown" quality of a degraded
/// summary; it is not the formula value for these inputs (which is 0.4).
impl Default for Breathiness {
    fn default() -> Self {
        Self {
            spectral_tilt: 0.0,
            noise_ratio: harmonics::MAX_NOISE_RATIO,
            score: 0.0,
        }
    }
}

/// Combine tilt and noise ratio into a score in [0, 1]
pub fn breathiness_score(spectral_tilt: f32, noise_ratio: f32, config: &BreathinessConfig) -> f32 {
    let tilt_term = (spectral_tilt * config.tilt_scale).min(1.0);
    let noise_term = noise_ratio.min(1.0);
    let score = config.tilt_weight * tilt_term + config.noise_weight * noise_term;
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Stateless spectral breathiness estimator
#[derive(Debug, Clone)]
pub struct BreathinessEstimator {
    transform: SpectralTransform,
    config: BreathinessConfig,
}

impl BreathinessEstimator {
    /// Create an estimator around an existing transform
    pub fn new(transform: SpectralTransform, config: BreathinessConfig) -> Self {
        Self { transform, config }
    }

    /// Create an estimator with its own transform
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            SpectralTransform::new(config.sample_rate, config.window_size, config.fft_size),
            config.breathiness.clone(),
        )
    }

    /// Breathiness of a sample frame
    pub fn estimate(&self, samples: &[f32]) -> Breathiness {
        self.estimate_spectrum(&self.transform.compute(samples))
    }

    /// Breathiness of a precomputed spectrum
    pub fn estimate_spectrum(&self, spectrum: &PowerSpectrum) -> Breathiness {
        let cfg = &self.config;
        log::debug!("Estimating breathiness over {} bins", spectrum.len());

        let spectral_tilt = tilt::spectral_tilt(spectrum, cfg.low_band, cfg.high_band);
        let noise_ratio = harmonics::noise_to_harmonics_ratio(
            spectrum,
            cfg.fundamental_min_bin,
            cfg.fundamental_max_hz,
            cfg.harmonic_count,
            cfg.harmonic_search_radius,
        );

        Breathiness {
            spectral_tilt,
            noise_ratio,
            score: breathiness_score(spectral_tilt, noise_ratio, cfg),
        }
    }

    /// Quality band for a measurement
    pub fn classify(&self, breathiness: &Breathiness) -> VoiceQuality {
        VoiceQuality::from_score(breathiness.score, &self.config)
    }
}

impl Estimator for BreathinessEstimator {
    fn descriptor(&self) -> EstimatorDescriptor {
        EstimatorDescriptor {
            name: "BreathinessEstimator".to_string(),
            parameters: vec![
                ("sampleRate".to_string(), self.transform.sample_rate() as f64),
                ("windowSize".to_string(), self.transform.window_size() as f64),
                ("fftSize".to_string(), self.transform.fft_size() as f64),
                ("harmonicCount".to_string(), self.config.harmonic_count as f64),
                ("tiltWeight".to_string(), self.config.tilt_weight as f64),
                ("noiseWeight".to_string(), self.config.noise_weight as f64),
            ],
            algorithm: "spectral tilt + harmonic-to-noise ratio".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::pcm::decode_pcm16le;
    use crate::synthesis::breathy_voice;

    fn estimator() -> BreathinessEstimator {
        BreathinessEstimator::from_config(&AnalysisConfig::default())
    }

    fn mean_score(level: f32) -> f32 {
        let est = estimator();
        let seeds = [1u64, 2, 3, 4, 5];
        let total: f32 = seeds
            .iter()
            .map(|&seed| {
                let pcm = breathy_voice(200.0, level, 0.1, 0.5, 44100, seed);
                est.estimate(&decode_pcm16le(&pcm)).score
            })
            .sum();
        total / seeds.len() as f32
    }

    #[test]
    fn test_score_formula() {
        let config = BreathinessConfig::default();
        assert_eq!(breathiness_score(0.0, 0.0, &config), 0.0);
        assert!((breathiness_score(1.0, 0.5, &config) - (0.6 * 0.5 + 0.4 * 0.5)).abs() < 1e-6);
        assert_eq!(breathiness_score(10.0, 10.0, &config), 1.0);
        assert_eq!(breathiness_score(f32::NAN, 0.0, &config), 0.0);
    }

    #[test]
    fn test_default_is_unmeasured_sentinel() {
        let config = BreathinessConfig::default();
        let b = Breathiness::default();
        assert_eq!(b.score, 0.0);
        assert_eq!(b.noise_ratio, harmonics::MAX_NOISE_RATIO);
        assert!((breathiness_score(b.spectral_tilt, b.noise_ratio, &config) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_silence_defaults() {
        let b = estimator().estimate(&vec![0.0; 2048]);
        assert_eq!(b.spectral_tilt, 0.0);
        assert_eq!(b.noise_ratio, 1.0);
        assert!((b.score - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_score_rises_with_breathiness() {
        let modal = mean_score(0.0);
        let half = mean_score(0.5);
        let breathy = mean_score(1.0);
        assert!(modal < breathy, "modal {:.3} vs breathy {:.3}", modal, breathy);
        assert!(modal <= half + 0.05, "modal {:.3} vs half {:.3}", modal, half);
        assert!(half <= breathy + 0.05, "half {:.3} vs breathy {:.3}", half, breathy);
    }

    #[test]
    fn test_score_always_in_unit_range() {
        let est = estimator();
        for level in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for seed in 0..3 {
                let pcm = breathy_voice(150.0, level, 0.1, 0.9, 44100, seed);
                let b = est.estimate(&decode_pcm16le(&pcm));
                assert!((0.0..=1.0).contains(&b.score), "score {}", b.score);
            }
        }
    }

    #[test]
    fn test_modal_tone_classified_clear() {
        let est = estimator();
        let pcm = breathy_voice(200.0, 0.0, 0.1, 0.5, 44100, 7);
        let b = est.estimate(&decode_pcm16le(&pcm));
        assert_eq!(est.classify(&b), VoiceQuality::Modal, "{:?}", b);
    }
}
