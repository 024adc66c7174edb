//! Voice-type and vowel classification from F1/F2
//!
//! Both labels need F1 and F2; if either is missing the result is "Unknown".
//! The vowel rules are checked in order and the first match wins.

use super::Formants;
use crate::config::FormantConfig;
use serde::{Deserialize, Serialize};

/// Label used when F1 or F2 is undetected
pub const UNKNOWN: &str = "Unknown";

/// Perceived resonance of the voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceType {
    /// Low F1, high F2
    FeminineLeaning,
    /// High F1, low F2
    MasculineLeaning,
    /// Neither pattern
    Neutral,
    /// F1 or F2 undetected
    Unknown,
}

impl VoiceType {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            VoiceType::FeminineLeaning => "Feminine-leaning",
            VoiceType::MasculineLeaning => "Masculine-leaning",
            VoiceType::Neutral => "Neutral",
            VoiceType::Unknown => UNKNOWN,
        }
    }
}

/// Rough vowel placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VowelHint {
    /// Closed front vowel, as in "see"
    HighFront,
    /// Open back vowel, as in "father"
    LowBack,
    /// Fronted vowel that misses the high-front rule, as in "bed"
    Front,
    /// Anything else
    Mid,
    /// F1 or F2 undetected
    Unknown,
}

impl VowelHint {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            VowelHint::HighFront => "High front (ee)",
            VowelHint::LowBack => "Low back (ah)",
            VowelHint::Front => "Front (eh)",
            VowelHint::Mid => "Mid (uh)",
            VowelHint::Unknown => UNKNOWN,
        }
    }
}

/// Classify the voice type from F1/F2
pub fn classify_voice_type(formants: &Formants, config: &FormantConfig) -> VoiceType {
    let (f1, f2) = (formants.f1, formants.f2);
    if !(f1 > 0.0 && f2 > 0.0) {
        return VoiceType::Unknown;
    }
    if f1 < config.low_f1_hz && f2 > config.front_f2_hz {
        VoiceType::FeminineLeaning
    } else if f1 > config.high_f1_hz && f2 < config.masculine_f2_hz {
        VoiceType::MasculineLeaning
    } else {
        VoiceType::Neutral
    }
}

/// Pick a vowel hint from F1/F2
pub fn classify_vowel(formants: &Formants, config: &FormantConfig) -> VowelHint {
    let (f1, f2) = (formants.f1, formants.f2);
    if !(f1 > 0.0 && f2 > 0.0) {
        return VowelHint::Unknown;
    }
    if f1 < config.low_f1_hz && f2 > config.front_f2_hz {
        VowelHint::HighFront
    } else if f1 > config.open_f1_hz && f2 < config.back_f2_hz {
        VowelHint::LowBack
    } else if f1 < config.high_f1_hz && f2 > config.mid_front_f2_hz {
        VowelHint::Front
    } else {
        VowelHint::Mid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formants(f1: f32, f2: f32) -> Formants {
        Formants { f1, f2, f3: 0.0 }
    }

    #[test]
    fn test_voice_type_rules() {
        let config = FormantConfig::default();
        assert_eq!(
            classify_voice_type(&formants(300.0, 2200.0), &config),
            VoiceType::FeminineLeaning
        );
        assert_eq!(
            classify_voice_type(&formants(700.0, 1100.0), &config),
            VoiceType::MasculineLeaning
        );
        assert_eq!(
            classify_voice_type(&formants(450.0, 1700.0), &config),
            VoiceType::Neutral
        );
    }

    #[test]
    fn test_voice_type_needs_both_formants() {
        let config = FormantConfig::default();
        assert_eq!(classify_voice_type(&formants(0.0, 2200.0), &config), VoiceType::Unknown);
        assert_eq!(classify_voice_type(&formants(300.0, 0.0), &config), VoiceType::Unknown);
        assert_eq!(VoiceType::Unknown.label(), "Unknown");
    }

    #[test]
    fn test_vowel_rules_in_order() {
        let config = FormantConfig::default();
        assert_eq!(classify_vowel(&formants(300.0, 2300.0), &config), VowelHint::HighFront);
        assert_eq!(classify_vowel(&formants(750.0, 1100.0), &config), VowelHint::LowBack);
        // Misses high-front (F2 <= 2000) but is fronted
        assert_eq!(classify_vowel(&formants(450.0, 1800.0), &config), VowelHint::Front);
        assert_eq!(classify_vowel(&formants(550.0, 1300.0), &config), VowelHint::Mid);
        assert_eq!(classify_vowel(&formants(0.0, 0.0), &config), VowelHint::Unknown);
    }

    #[test]
    fn test_boundaries_are_strict() {
        let config = FormantConfig::default();
        // F1 exactly 400 is not "< 400"
        assert_eq!(
            classify_voice_type(&formants(400.0, 2500.0), &config),
            VoiceType::Neutral
        );
        assert_eq!(classify_vowel(&formants(400.0, 2500.0), &config), VowelHint::Front);
    }
}
