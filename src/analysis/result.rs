//! Analysis report types
//!
//! A [`VoiceAnalysisReport`] has the same serialized keys whether analysis
//! succeeded or degraded; only the values change.

use crate::features::breathiness::quality::VoiceQuality;
use crate::features::breathiness::Breathiness;
use crate::features::formant::classification::UNKNOWN;
use crate::features::formant::{FormantAnalysis, Formants};
use crate::features::pitch::note::NO_NOTE;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Recommendation shown when no quality could be measured
pub const UNAVAILABLE_RECOMMENDATION: &str = "Analysis unavailable for this frame. Keep sounding a steady vowel.";

/// Resonance classification from the formants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCharacteristics {
    /// "Feminine-leaning", "Masculine-leaning", "Neutral" or "Unknown"
    pub voice_type: String,

    /// Vowel placement label or "Unknown"
    pub vowel_hint: String,

    /// F2 - F1 in Hz (0.0 when unknown)
    pub formant_spread: f32,
}

impl VoiceCharacteristics {
    /// Labels for a formant analysis
    pub fn from_analysis(analysis: &FormantAnalysis) -> Self {
        Self {
            voice_type: analysis.voice_type.label().to_string(),
            vowel_hint: analysis.vowel_hint.label().to_string(),
            formant_spread: analysis.formants.spread(),
        }
    }

    /// Sentinel characteristics
    pub fn unknown() -> Self {
        Self {
            voice_type: UNKNOWN.to_string(),
            vowel_hint: UNKNOWN.to_string(),
            formant_spread: 0.0,
        }
    }
}

/// Voice-quality summary for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceQualityReport {
    /// Quality band label
    pub voice_quality: String,

    /// Breathiness score as an integer percentage (0-100)
    pub breathiness_score: u8,

    /// Advice for the user
    pub recommendation: String,
}

impl VoiceQualityReport {
    /// Summary for a measured score and its band
    pub fn new(score: f32, quality: VoiceQuality) -> Self {
        Self {
            voice_quality: quality.label().to_string(),
            breathiness_score: score_percent(score),
            recommendation: quality.recommendation().to_string(),
        }
    }

    /// Sentinel summary
    pub fn unknown() -> Self {
        Self {
            voice_quality: UNKNOWN.to_string(),
            breathiness_score: 0,
            recommendation: UNAVAILABLE_RECOMMENDATION.to_string(),
        }
    }
}

/// Round a [0, 1] score to a 0-100 percentage
pub fn score_percent(score: f32) -> u8 {
    if score.is_nan() {
        return 0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Milliseconds since the Unix epoch (0 if the clock is before it)
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Complete analysis of one audio buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceAnalysisReport {
    /// Pitch in Hz (0.0 = undetected)
    pub frequency: f32,

    /// Nearest note, e.g. "A4", or "--"
    pub note_name: String,

    /// F1-F3 in Hz
    pub formants: Formants,

    /// Tilt, noise ratio and score
    pub breathiness: Breathiness,

    /// Resonance classification
    pub voice_characteristics: VoiceCharacteristics,

    /// Quality summary
    pub voice_quality: VoiceQualityReport,

    /// Creation time in epoch milliseconds
    pub timestamp: u64,

    /// False if analysis degraded to sentinel values
    pub analysis_complete: bool,

    /// Failure description for degraded reports
    pub error: Option<String>,
}

impl VoiceAnalysisReport {
    /// Sentinel report carrying a failure description
    pub fn degraded(error: impl Into<String>) -> Self {
        Self {
            frequency: 0.0,
            note_name: NO_NOTE.to_string(),
            formants: Formants::default(),
            breathiness: Breathiness::default(),
            voice_characteristics: VoiceCharacteristics::unknown(),
            voice_quality: VoiceQualityReport::unknown(),
            timestamp: epoch_millis(),
            analysis_complete: false,
            error: Some(error.into()),
        }
    }

    /// True if a pitch was detected
    pub fn has_pitch(&self) -> bool {
        self.frequency > 0.0
    }
}
