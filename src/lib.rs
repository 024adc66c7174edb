//! # VoxTune DSP
//!
//! Vocal feature extraction for voice-training feedback. Each call takes one
//! short frame of mono 16-bit PCM and returns pitch, formants and a
//! breathiness score in a fixed-shape report.
//!
//! ## Features
//!
//! - **Pitch**: Time-domain autocorrelation, 80-1000 Hz, with 12-TET note names
//! - **Formants**: Band-limited spectral peaks for F1-F3, voice-type and vowel hints
//! - **Breathiness**: Spectral tilt plus harmonic-to-noise ratio, scored 0-1
//! - **Test signals**: Deterministic tone, vowel and breathy-voice generators
//!
//! ## Quick Start
//!
//! ```
//! use voxtune_dsp::{analyze_voice, AnalysisConfig};
//! use voxtune_dsp::synthesis::tone;
//!
//! // One 16-bit little-endian PCM buffer per poll
//! let pcm = tone(220.0, 0.2, 0.5, 44100);
//!
//! let report = analyze_voice(&pcm, &AnalysisConfig::default());
//!
//! println!("Pitch: {:.1} Hz ({})", report.frequency, report.note_name);
//! println!("F1/F2/F3: {:.0}/{:.0}/{:.0} Hz", report.formants.f1, report.formants.f2, report.formants.f3);
//! println!("Quality: {}", report.voice_quality.voice_quality);
//! assert_eq!(report.note_name, "A3");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PCM bytes → Decode → ┬→ Pitch (autocorrelation) → Note name ─┐
//!                      └→ Power spectrum ┬→ Formants ──────────┼→ Report
//!                                        └→ Breathiness ───────┘
//! ```
//!
//! The spectrum is computed once per frame and shared by both spectral
//! estimators.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod synthesis;

// Re-export main types
pub use analysis::analyzer::VoiceAnalyzer;
pub use analysis::result::{VoiceAnalysisReport, VoiceCharacteristics, VoiceQualityReport};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::breathiness::Breathiness;
pub use features::formant::Formants;
pub use features::{Estimator, EstimatorDescriptor};

/// Main analysis function
///
/// Analyzes one buffer of mono 16-bit little-endian PCM and returns pitch,
/// note name, formants, breathiness and their classifications.
///
/// # Arguments
///
/// * `pcm` - Raw PCM bytes at `config.sample_rate`; buffers shorter than
///   `config.window_size` samples yield "no signal" values
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// A `VoiceAnalysisReport`. This function never fails: an invalid
/// configuration or a computation fault produces a report with sentinel
/// values, `analysis_complete == false` and a description in `error`.
///
/// For repeated polling, build a [`VoiceAnalyzer`] once and reuse it.
///
/// # Example
///
/// ```
/// use voxtune_dsp::{analyze_voice, AnalysisConfig};
///
/// let report = analyze_voice(&[], &AnalysisConfig::default());
/// assert_eq!(report.frequency, 0.0);
/// assert_eq!(report.note_name, "--");
/// ```
pub fn analyze_voice(pcm: &[u8], config: &AnalysisConfig) -> VoiceAnalysisReport {
    match VoiceAnalyzer::new(config.clone()) {
        Ok(analyzer) => analyzer.analyze(pcm),
        Err(err) => {
            log::warn!("Cannot analyze with this configuration: {}", err);
            VoiceAnalysisReport::degraded(err.to_string())
        }
    }
}
