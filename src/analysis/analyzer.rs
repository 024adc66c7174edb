//! Frame analyzer
//!
//! Decodes one PCM buffer, runs pitch on the samples, computes the power
//! spectrum once, feeds it to the formant and breathiness estimators and
//! assembles the report. [`VoiceAnalyzer::analyze`] never fails: a
//! computation fault becomes a degraded report with `analysis_complete`
//! set to false.

use super::result::{epoch_millis, VoiceAnalysisReport, VoiceCharacteristics, VoiceQualityReport};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::breathiness::BreathinessEstimator;
use crate::features::formant::FormantEstimator;
use crate::features::pitch::note::note_name;
use crate::features::pitch::PitchEstimator;
use crate::features::spectrum::SpectralTransform;
use crate::features::{Estimator, EstimatorDescriptor};
use crate::io::pcm::decode_pcm16le;

/// Voice analyzer holding validated configuration and planned estimators
///
/// Cheap to share across threads; every call works on its own buffer.
///
/// # Example
///
/// ```
/// use voxtune_dsp::{AnalysisConfig, VoiceAnalyzer};
/// use voxtune_dsp::synthesis::tone;
///
/// let analyzer = VoiceAnalyzer::new(AnalysisConfig::default())?;
/// let report = analyzer.analyze(&tone(440.0, 0.2, 0.5, 44100));
/// assert_eq!(report.note_name, "A4");
/// # Ok::<(), voxtune_dsp::AnalysisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct VoiceAnalyzer {
    config: AnalysisConfig,
    transform: SpectralTransform,
    pitch: PitchEstimator,
    formant: FormantEstimator,
    breathiness: BreathinessEstimator,
}

impl VoiceAnalyzer {
    /// Validate `config` and plan the estimators
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` if the configuration is unusable
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;

        let transform =
            SpectralTransform::new(config.sample_rate, config.window_size, config.fft_size);
        let pitch = PitchEstimator::from_config(&config);
        let formant = FormantEstimator::new(transform.clone(), config.formant.clone());
        let breathiness = BreathinessEstimator::new(transform.clone(), config.breathiness.clone());

        Ok(Self {
            config,
            transform,
            pitch,
            formant,
            breathiness,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Descriptors of the pitch, formant and breathiness estimators
    pub fn descriptors(&self) -> Vec<EstimatorDescriptor> {
        vec![
            self.pitch.descriptor(),
            self.formant.descriptor(),
            self.breathiness.descriptor(),
        ]
    }

    /// Analyze a mono 16-bit little-endian PCM buffer
    pub fn analyze(&self, pcm: &[u8]) -> VoiceAnalysisReport {
        Self::or_degraded(self.try_analyze(pcm))
    }

    /// Analyze samples already normalized to [-1.0, 1.0]
    pub fn analyze_samples(&self, samples: &[f32]) -> VoiceAnalysisReport {
        Self::or_degraded(self.try_analyze_samples(samples))
    }

    /// Fallible form of [`analyze`](Self::analyze)
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ComputationFailure` if an estimator produced a
    /// non-finite value
    pub fn try_analyze(&self, pcm: &[u8]) -> Result<VoiceAnalysisReport, AnalysisError> {
        let samples = decode_pcm16le(pcm);
        self.try_analyze_samples(&samples)
    }

    /// Fallible form of [`analyze_samples`](Self::analyze_samples)
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ComputationFailure` if an estimator produced a
    /// non-finite value
    pub fn try_analyze_samples(
        &self,
        samples: &[f32],
    ) -> Result<VoiceAnalysisReport, AnalysisError> {
        log::debug!(
            "Analyzing voice frame: {} samples at {} Hz",
            samples.len(),
            self.config.sample_rate
        );

        let frequency = self.pitch.estimate(samples);
        ensure_finite("pitch", frequency)?;

        let spectrum = self.transform.compute(samples);
        if spectrum.len() != self.config.fft_size / 2 {
            return Err(AnalysisError::ComputationFailure(format!(
                "spectrum has {} bins, expected {}",
                spectrum.len(),
                self.config.fft_size / 2
            )));
        }
        if !spectrum.is_finite() {
            return Err(AnalysisError::ComputationFailure(
                "non-finite power spectrum".to_string(),
            ));
        }

        let formant_analysis = self.formant.analyze_spectrum(&spectrum);
        let formants = formant_analysis.formants;
        ensure_finite("f1", formants.f1)?;
        ensure_finite("f2", formants.f2)?;
        ensure_finite("f3", formants.f3)?;

        let breathiness = self.breathiness.estimate_spectrum(&spectrum);
        ensure_finite("spectral tilt", breathiness.spectral_tilt)?;
        ensure_finite("noise ratio", breathiness.noise_ratio)?;
        let quality = self.breathiness.classify(&breathiness);

        let note = note_name(frequency, &self.config.note);

        log::debug!(
            "Frame result: pitch={:.2} Hz ({}), F1={:.0} F2={:.0} F3={:.0}, breathiness={:.3}",
            frequency,
            note,
            formants.f1,
            formants.f2,
            formants.f3,
            breathiness.score
        );

        Ok(VoiceAnalysisReport {
            frequency,
            note_name: note,
            formants,
            breathiness,
            voice_characteristics: VoiceCharacteristics::from_analysis(&formant_analysis),
            voice_quality: VoiceQualityReport::new(breathiness.score, quality),
            timestamp: epoch_millis(),
            analysis_complete: true,
            error: None,
        })
    }

    fn or_degraded(result: Result<VoiceAnalysisReport, AnalysisError>) -> VoiceAnalysisReport {
        result.unwrap_or_else(|err| {
            log::warn!("Voice analysis degraded: {}", err);
            VoiceAnalysisReport::degraded(err.to_string())
        })
    }
}

fn ensure_finite(what: &str, value: f32) -> Result<(), AnalysisError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalysisError::ComputationFailure(format!(
            "non-finite {}: {}",
            what, value
        )))
    }
}
