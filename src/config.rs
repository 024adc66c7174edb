//! Configuration parameters for voice analysis
//!
//! Every band edge, threshold and weight the estimators use lives here so
//! alternative tunings can be injected at construction (or loaded from JSON).

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Inclusive frequency band in Hz
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    /// Lower edge in Hz
    pub min_hz: f32,
    /// Upper edge in Hz
    pub max_hz: f32,
}

impl FrequencyBand {
    /// Create a band from its edges
    pub const fn new(min_hz: f32, max_hz: f32) -> Self {
        Self { min_hz, max_hz }
    }

    /// True if `hz` lies inside the band (edges included)
    pub fn contains(&self, hz: f32) -> bool {
        hz >= self.min_hz && hz <= self.max_hz
    }
}

/// Pitch estimator tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchConfig {
    /// Lowest reportable pitch (default: 80.0 Hz)
    pub min_frequency: f32,

    /// Highest reportable pitch (default: 1000.0 Hz)
    pub max_frequency: f32,

    /// Minimum autocorrelation peak, in the same units as r[0] (default: 0.3)
    pub peak_threshold: f32,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            min_frequency: 80.0,
            max_frequency: 1000.0,
            peak_threshold: 0.3,
        }
    }
}

/// Note naming range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Frequencies outside this band have no note name (default: 80-2000 Hz)
    pub band: FrequencyBand,

    /// Reference frequency of semitone zero (default: C0, 16.3516 Hz)
    pub reference_frequency: f32,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            band: FrequencyBand::new(80.0, 2000.0),
            reference_frequency: 16.351_598,
        }
    }
}

/// Formant estimator tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormantConfig {
    /// F1 search band (default: 200-1000 Hz)
    pub f1_band: FrequencyBand,
    /// F2 search band (default: 800-3000 Hz)
    pub f2_band: FrequencyBand,
    /// F3 search band (default: 1500-4000 Hz)
    pub f3_band: FrequencyBand,

    /// Minimum peak power to accept F1 (default: 0.1)
    pub f1_threshold: f32,
    /// Minimum peak power to accept F2 (default: 0.05)
    pub f2_threshold: f32,
    /// Minimum peak power to accept F3 (default: 0.02)
    pub f3_threshold: f32,

    // Classification boundaries
    /// F1 below this reads as a closed (high) vowel (default: 400.0 Hz)
    pub low_f1_hz: f32,
    /// F1 above this reads as an open vowel for voice type (default: 500.0 Hz)
    pub high_f1_hz: f32,
    /// F1 above this reads as a low vowel for the vowel hint (default: 600.0 Hz)
    pub open_f1_hz: f32,
    /// F2 above this reads as a front vowel (default: 2000.0 Hz)
    pub front_f2_hz: f32,
    /// F2 below this reads as a masculine resonance (default: 1500.0 Hz)
    pub masculine_f2_hz: f32,
    /// F2 below this reads as a back vowel (default: 1200.0 Hz)
    pub back_f2_hz: f32,
    /// F2 above this reads as a fronted mid vowel (default: 1500.0 Hz)
    pub mid_front_f2_hz: f32,
}

impl Default for FormantConfig {
    fn default() -> Self {
        Self {
            f1_band: FrequencyBand::new(200.0, 1000.0),
            f2_band: FrequencyBand::new(800.0, 3000.0),
            f3_band: FrequencyBand::new(1500.0, 4000.0),
            f1_threshold: 0.1,
            f2_threshold: 0.05,
            f3_threshold: 0.02,
            low_f1_hz: 400.0,
            high_f1_hz: 500.0,
            open_f1_hz: 600.0,
            front_f2_hz: 2000.0,
            masculine_f2_hz: 1500.0,
            back_f2_hz: 1200.0,
            mid_front_f2_hz: 1500.0,
        }
    }
}

/// Breathiness estimator tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathinessConfig {
    /// Low-energy band for spectral tilt (default: 0-1000 Hz)
    pub low_band: FrequencyBand,
    /// High-energy band for spectral tilt (default: 4000-8000 Hz)
    pub high_band: FrequencyBand,

    /// Lowest bins skipped by the fundamental search (default: 10)
    pub fundamental_min_bin: usize,
    /// Upper (exclusive) frequency of the fundamental search (default: 500.0 Hz)
    pub fundamental_max_hz: f32,

    /// Harmonics examined for the noise ratio (default: 8)
    pub harmonic_count: usize,
    /// Half-width in bins of each harmonic's peak search (default: 2)
    pub harmonic_search_radius: usize,

    /// Weight of the tilt term in the score (default: 0.6)
    pub tilt_weight: f32,
    /// Scale applied to tilt before capping at 1.0 (default: 0.5)
    pub tilt_scale: f32,
    /// Weight of the noise-ratio term in the score (default: 0.4)
    pub noise_weight: f32,

    /// Score below which the voice is modal (default: 0.3)
    pub modal_limit: f32,
    /// Score below which the voice is slightly breathy (default: 0.6)
    pub slight_limit: f32,
    /// Score below which the voice is moderately breathy (default: 0.8)
    pub moderate_limit: f32,
}

impl Default for BreathinessConfig {
    fn default() -> Self {
        Self {
            low_band: FrequencyBand::new(0.0, 1000.0),
            high_band: FrequencyBand::new(4000.0, 8000.0),
            fundamental_min_bin: 10,
            fundamental_max_hz: 500.0,
            harmonic_count: 8,
            harmonic_search_radius: 2,
            tilt_weight: 0.6,
            tilt_scale: 0.5,
            noise_weight: 0.4,
            modal_limit: 0.3,
            slight_limit: 0.6,
            moderate_limit: 0.8,
        }
    }
}

/// Analysis configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sample rate of the incoming PCM in Hz (default: 44100)
    pub sample_rate: u32,

    /// Samples per analysis frame (default: 2048)
    /// Shorter buffers produce "no signal" results
    pub window_size: usize,

    /// Transform length, zero-padded from the window (default: 4096)
    pub fft_size: usize,

    /// Pitch estimator tuning
    pub pitch: PitchConfig,

    /// Note naming range
    pub note: NoteConfig,

    /// Formant estimator tuning
    pub formant: FormantConfig,

    /// Breathiness estimator tuning
    pub breathiness: BreathinessConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            window_size: 2048,
            fft_size: 4096,
            pitch: PitchConfig::default(),
            note: NoteConfig::default(),
            formant: FormantConfig::default(),
            breathiness: BreathinessConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Set the sample rate
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the analysis window length
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the transform length
    pub fn with_fft_size(mut self, fft_size: usize) -> Self {
        self.fft_size = fft_size;
        self
    }

    /// Frequency width of one spectrum bin in Hz
    pub fn bin_resolution_hz(&self) -> f32 {
        self.sample_rate as f32 / self.fft_size as f32
    }

    /// Check that the parameters describe a computable analysis
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` naming the first bad parameter
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.sample_rate == 0 {
            return Err(AnalysisError::InvalidConfig(
                "sample_rate must be > 0".to_string(),
            ));
        }
        if self.window_size < 2 {
            return Err(AnalysisError::InvalidConfig(format!(
                "window_size must be >= 2, got {}",
                self.window_size
            )));
        }
        if self.fft_size < self.window_size || self.fft_size < 2 {
            return Err(AnalysisError::InvalidConfig(format!(
                "fft_size ({}) must be >= window_size ({})",
                self.fft_size, self.window_size
            )));
        }

        let pitch = &self.pitch;
        if pitch.min_frequency <= 0.0 || pitch.max_frequency <= pitch.min_frequency {
            return Err(AnalysisError::InvalidConfig(format!(
                "Invalid pitch range: [{:.1}, {:.1}] Hz",
                pitch.min_frequency, pitch.max_frequency
            )));
        }

        if self.note.reference_frequency <= 0.0 {
            return Err(AnalysisError::InvalidConfig(
                "note reference_frequency must be > 0".to_string(),
            ));
        }

        let bands = [
            ("note", self.note.band),
            ("f1", self.formant.f1_band),
            ("f2", self.formant.f2_band),
            ("f3", self.formant.f3_band),
            ("tilt low", self.breathiness.low_band),
            ("tilt high", self.breathiness.high_band),
        ];
        for (name, band) in bands {
            if band.min_hz < 0.0 || band.max_hz < band.min_hz {
                return Err(AnalysisError::InvalidConfig(format!(
                    "Invalid {} band: [{:.1}, {:.1}] Hz",
                    name, band.min_hz, band.max_hz
                )));
            }
        }

        let b = &self.breathiness;
        if !(b.modal_limit <= b.slight_limit && b.slight_limit <= b.moderate_limit) {
            return Err(AnalysisError::InvalidConfig(
                "breathiness limits must be ascending".to_string(),
            ));
        }

        Ok(())
    }
}
