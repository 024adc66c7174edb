//! Voice-quality classification from the breathiness score

use crate::config::BreathinessConfig;
use serde::{Deserialize, Serialize};

/// Phonation quality band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceQuality {
    /// Clear, efficient fold closure
    Modal,
    /// Some air escaping
    SlightlyBreathy,
    /// Noticeable aspiration
    ModeratelyBreathy,
    /// Mostly air
    VeryBreathy,
}

impl VoiceQuality {
    /// Band for a score in [0, 1]
    pub fn from_score(score: f32, config: &BreathinessConfig) -> Self {
        if score < config.modal_limit {
            VoiceQuality::Modal
        } else if score < config.slight_limit {
            VoiceQuality::SlightlyBreathy
        } else if score < config.moderate_limit {
            VoiceQuality::ModeratelyBreathy
        } else {
            VoiceQuality::VeryBreathy
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            VoiceQuality::Modal => "Modal (clear)",
            VoiceQuality::SlightlyBreathy => "Slightly breathy",
            VoiceQuality::ModeratelyBreathy => "Moderately breathy",
            VoiceQuality::VeryBreathy => "Very breathy",
        }
    }

    /// Advice shown to the user for this band
    pub fn recommendation(&self) -> &'static str {
        match self {
            VoiceQuality::Modal => {
                "Clear voice with good vocal fold closure. Add a little air if you want a softer tone."
            }
            VoiceQuality::SlightlyBreathy => {
                "Slight breathiness, often heard as a softer tone. Keep it if it is the sound you want."
            }
            VoiceQuality::ModeratelyBreathy => {
                "Noticeable breathiness. Try a firmer onset to reduce air escaping between the folds."
            }
            VoiceQuality::VeryBreathy => {
                "Very breathy voice. Practice gentle sustained vowels with firmer closure, and rest if you feel strain."
            }
        }
    }
}
