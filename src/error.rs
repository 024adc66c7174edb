//! Error types for the voice analysis engine
//!
//! Most of these never reach a caller of [`crate::analyze_voice`]: the
//! estimators map `InsufficientData` and `OutOfRange` to their sentinel
//! values, and the analyzer turns `ComputationFailure` into a degraded report.

use std::fmt;

/// Errors that can occur during voice analysis
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid configuration parameters
    InvalidConfig(String),

    /// Fewer samples than the analysis window requires
    InsufficientData {
        /// Samples needed
        required: usize,
        /// Samples supplied
        available: usize,
    },

    /// Estimate fell outside its physically valid band
    OutOfRange {
        /// Offending value in Hz
        value: f32,
        /// Lower bound of the band
        min: f32,
        /// Upper bound of the band
        max: f32,
    },

    /// Unexpected fault while estimating (non-finite values, shape mismatch, ...)
    ComputationFailure(String),

    /// Audio file decoding error
    DecodingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            AnalysisError::InsufficientData {
                required,
                available,
            } => write!(
                f,
                "Insufficient data: need {} samples, got {}",
                required, available
            ),
            AnalysisError::OutOfRange { value, min, max } => write!(
                f,
                "Out of range: {:.2} Hz not in [{:.1}, {:.1}] Hz",
                value, min, max
            ),
            AnalysisError::ComputationFailure(msg) => write!(f, "Computation failure: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<hound::Error> for AnalysisError {
    fn from(err: hound::Error) -> Self {
        AnalysisError::DecodingError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AnalysisError::InsufficientData {
            required: 2048,
            available: 10,
        };
        assert_eq!(err.to_string(), "Insufficient data: need 2048 samples, got 10");

        let err = AnalysisError::OutOfRange {
            value: 2000.0,
            min: 80.0,
            max: 1000.0,
        };
        assert_eq!(
            err.to_string(),
            "Out of range: 2000.00 Hz not in [80.0, 1000.0] Hz"
        );
    }
}
