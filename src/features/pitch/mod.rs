//! Pitch estimation modules
//!
//! Time-domain fundamental frequency detection and note naming:
//! - Autocorrelation peak search
//! - 12-TET note names

pub mod autocorrelation;
pub mod note;

use super::{Estimator, EstimatorDescriptor};
use crate::config::{AnalysisConfig, PitchConfig};
use autocorrelation::try_detect_pitch;

/// Stateless autocorrelation pitch estimator
///
/// # Example
///
/// ```
/// use voxtune_dsp::features::pitch::PitchEstimator;
/// use voxtune_dsp::AnalysisConfig;
///
/// let estimator = PitchEstimator::from_config(&AnalysisConfig::default());
/// assert_eq!(estimator.estimate(&[]), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PitchEstimator {
    sample_rate: u32,
    window_size: usize,
    config: PitchConfig,
}

impl PitchEstimator {
    /// Create an estimator
    pub fn new(sample_rate: u32, window_size: usize, config: PitchConfig) -> Self {
        Self {
            sample_rate,
            window_size,
            config,
        }
    }

    /// Create an estimator from the shared analysis configuration
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.sample_rate, config.window_size, config.pitch.clone())
    }

    /// Pitch in Hz, or 0.0 if undetected
    ///
    /// Short input, no clear periodicity and out-of-range estimates all map
    /// to the 0.0 sentinel.
    pub fn estimate(&self, samples: &[f32]) -> f32 {
        match try_detect_pitch(samples, self.sample_rate, self.window_size, &self.config) {
            Ok(frequency) => frequency,
            Err(err) => {
                log::trace!("Pitch undetected: {}", err);
                0.0
            }
        }
    }
}

impl Estimator for PitchEstimator {
    fn descriptor(&self) -> EstimatorDescriptor {
        EstimatorDescriptor {
            name: "PitchEstimator".to_string(),
            parameters: vec![
                ("sampleRate".to_string(), self.sample_rate as f64),
                ("windowSize".to_string(), self.window_size as f64),
                ("minFrequency".to_string(), self.config.min_frequency as f64),
                ("maxFrequency".to_string(), self.config.max_frequency as f64),
                ("threshold".to_string(), self.config.peak_threshold as f64),
            ],
            algorithm: "autocorrelation".to_string(),
        }
    }
}
