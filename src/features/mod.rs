//! Feature extraction modules
//!
//! This module contains all vocal feature estimators:
//! - Power spectrum (shared by the spectral estimators)
//! - Pitch (autocorrelation) and note naming
//! - Formants F1-F3 and voice-type classification
//! - Breathiness (spectral tilt + harmonic/noise ratio)

pub mod breathiness;
pub mod formant;
pub mod pitch;
pub mod spectrum;

use serde::{Deserialize, Serialize};

/// Read-only description of an estimator and its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorDescriptor {
    /// Estimator name
    pub name: String,

    /// Parameter names and values, in declaration order
    pub parameters: Vec<(String, f64)>,

    /// Algorithm label
    pub algorithm: String,
}

impl EstimatorDescriptor {
    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }
}

/// Common surface of the pitch, formant and breathiness estimators
pub trait Estimator {
    /// Describe the estimator's configuration
    fn descriptor(&self) -> EstimatorDescriptor;
}
