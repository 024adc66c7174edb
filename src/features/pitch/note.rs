//! Note naming in 12-tone equal temperament
//!
//! Pitches are rounded to the nearest semitone above the reference (C0) and
//! written as name + octave, e.g. "A4". Anything outside the note band, or
//! landing outside octaves 0-9, is the no-note sentinel "--".

use crate::config::NoteConfig;

/// Sentinel for "no note"
pub const NO_NOTE: &str = "--";

/// Pitch class names starting at C
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const MAX_OCTAVE: i64 = 9;

/// Fractional semitones above the reference, or None if unnamed
fn semitones_above_reference(frequency: f32, config: &NoteConfig) -> Option<f64> {
    if !frequency.is_finite() || !config.band.contains(frequency) {
        return None;
    }
    Some(12.0 * (frequency as f64 / config.reference_frequency as f64).log2())
}

/// Nearest semitone index and octave, or None if outside octaves 0-9
fn nearest_semitone(frequency: f32, config: &NoteConfig) -> Option<(i64, f64)> {
    let exact = semitones_above_reference(frequency, config)?;
    let semitone = exact.round() as i64;
    let octave = semitone.div_euclid(12);
    if !(0..=MAX_OCTAVE).contains(&octave) {
        return None;
    }
    Some((semitone, exact))
}

/// Note name for a frequency in Hz
///
/// # Example
///
/// ```
/// use voxtune_dsp::config::NoteConfig;
/// use voxtune_dsp::features::pitch::note::note_name;
///
/// let config = NoteConfig::default();
/// assert_eq!(note_name(440.0, &config), "A4");
/// assert_eq!(note_name(0.0, &config), "--");
/// ```
pub fn note_name(frequency: f32, config: &NoteConfig) -> String {
    match nearest_semitone(frequency, config) {
        Some((semitone, _)) => format!(
            "{}{}",
            NOTE_NAMES[semitone.rem_euclid(12) as usize],
            semitone.div_euclid(12)
        ),
        None => NO_NOTE.to_string(),
    }
}

/// Signed distance in cents from the nearest named note
///
/// Ranges over (-50, 50]; None when the frequency has no note name.
pub fn note_cents_offset(frequency: f32, config: &NoteConfig) -> Option<f32> {
    nearest_semitone(frequency, config)
        .map(|(semitone, exact)| ((exact - semitone as f64) * 100.0) as f32)
}
