//! Formant estimation modules
//!
//! Reads F1-F3 off the power spectrum and classifies the resonance:
//! - Band-limited peak search
//! - Voice-type and vowel classification

pub mod classification;
pub mod detector;

use super::spectrum::{PowerSpectrum, SpectralTransform};
use super::{Estimator, EstimatorDescriptor};
use crate::config::{AnalysisConfig, FormantConfig};
use classification::{classify_voice_type, classify_vowel, VoiceType, VowelHint};
use serde::{Deserialize, Serialize};

/// First three formant frequencies in Hz (0.0 = undetected)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Formants {
    /// First formant
    pub f1: f32,
    /// Second formant
    pub f2: f32,
    /// Third formant
    pub f3: f32,
}

impl Formants {
    /// F2 - F1 in Hz, or 0.0 if either is undetected
    pub fn spread(&self) -> f32 {
        if self.f1 > 0.0 && self.f2 > 0.0 {
            self.f2 - self.f1
        } else {
            0.0
        }
    }
}

/// Formants plus their classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormantAnalysis {
    /// Detected formants
    pub formants: Formants,
    /// Voice-type classification
    pub voice_type: VoiceType,
    /// Vowel hint
    pub vowel_hint: VowelHint,
}

/// Stateless spectral-peak formant estimator
#[derive(Debug, Clone)]
pub struct FormantEstimator {
    transform: SpectralTransform,
    config: FormantConfig,
}

impl FormantEstimator {
    /// Create an estimator around an existing transform
    pub fn new(transform: SpectralTransform, config: FormantConfig) -> Self {
        Self { transform, config }
    }

    /// Create an estimator with its own transform
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            SpectralTransform::new(config.sample_rate, config.window_size, config.fft_size),
            config.formant.clone(),
        )
    }

    /// Formants of a sample frame
    pub fn estimate(&self, samples: &[f32]) -> Formants {
        self.estimate_spectrum(&self.transform.compute(samples))
    }

    /// Formants of a precomputed spectrum
    pub fn estimate_spectrum(&self, spectrum: &PowerSpectrum) -> Formants {
        detector::detect_formants(spectrum, &self.config)
    }

    /// Formants and classification of a precomputed spectrum
    pub fn analyze_spectrum(&self, spectrum: &PowerSpectrum) -> FormantAnalysis {
        let formants = self.estimate_spectrum(spectrum);
        FormantAnalysis {
            formants,
            voice_type: classify_voice_type(&formants, &self.config),
            vowel_hint: classify_vowel(&formants, &self.config),
        }
    }
}

impl Estimator for FormantEstimator {
    fn descriptor(&self) -> EstimatorDescriptor {
        EstimatorDescriptor {
            name: "FormantEstimator".to_string(),
            parameters: vec![
                ("sampleRate".to_string(), self.transform.sample_rate() as f64),
                ("windowSize".to_string(), self.transform.window_size() as f64),
                ("fftSize".to_string(), self.transform.fft_size() as f64),
                ("f1Threshold".to_string(), self.config.f1_threshold as f64),
                ("f2Threshold".to_string(), self.config.f2_threshold as f64),
                ("f3Threshold".to_string(), self.config.f3_threshold as f64),
            ],
            algorithm: "band-limited spectral peak".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::pcm::decode_pcm16le;
    use crate::synthesis::vowel;

    fn estimator() -> FormantEstimator {
        FormantEstimator::from_config(&AnalysisConfig::default())
    }

    fn bin_width() -> f32 {
        AnalysisConfig::default().bin_resolution_hz()
    }

    #[test]
    fn test_recovers_f1_f2() {
        let samples = decode_pcm16le(&vowel(300.0, 2200.0, 3000.0, 0.1, 0.3, 44100));
        let formants = estimator().estimate(&samples);
        assert!((formants.f1 - 300.0).abs() <= bin_width(), "F1 {}", formants.f1);
        assert!((formants.f2 - 2200.0).abs() <= bin_width(), "F2 {}", formants.f2);
        // The F3 band also holds the stronger 2200 Hz component
        assert!((formants.f3 - 2200.0).abs() <= bin_width(), "F3 {}", formants.f3);
    }

    #[test]
    fn test_recovers_isolated_f3() {
        let samples = decode_pcm16le(&vowel(300.0, 1200.0, 3000.0, 0.1, 0.3, 44100));
        let formants = estimator().estimate(&samples);
        assert!((formants.f1 - 300.0).abs() <= bin_width());
        assert!((formants.f2 - 1200.0).abs() <= bin_width());
        assert!((formants.f3 - 3000.0).abs() <= bin_width(), "F3 {}", formants.f3);
    }

    #[test]
    fn test_silence_has_no_formants() {
        let formants = estimator().estimate(&vec![0.0; 2048]);
        assert_eq!(formants, Formants::default());
        assert_eq!(formants.spread(), 0.0);
    }

    #[test]
    fn test_classification_of_synthetic_vowel() {
        let est = estimator();
        let samples = decode_pcm16le(&vowel(300.0, 2200.0, 3000.0, 0.1, 0.3, 44100));
        let spectrum = SpectralTransform::new(44100, 2048, 4096).compute(&samples);
        let analysis = est.analyze_spectrum(&spectrum);
        assert_eq!(analysis.voice_type, VoiceType::FeminineLeaning);
        assert_eq!(analysis.vowel_hint, VowelHint::HighFront);
    }

    #[test]
    fn test_descriptor_has_fft_size() {
        let descriptor = estimator().descriptor();
        assert_eq!(descriptor.parameter("fftSize"), Some(4096.0));
        assert_eq!(descriptor.name, "FormantEstimator");
    }
}
