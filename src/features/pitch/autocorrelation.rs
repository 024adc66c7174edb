//! Autocorrelation pitch detection
//!
//! Finds the fundamental period of a voiced frame directly in the time domain.
//!
//! # Algorithm
//!
//! 1. Take the first `window_size` samples (L); shorter frames are rejected
//! 2. `r[lag] = Σ x[i]·x[i + lag]` for `lag < L / 2`
//! 3. Search `lag ∈ [round(sr / max_freq), min(round(sr / min_freq), r.len()))`
//!    for the largest value
//! 4. Accept the peak if it exceeds the threshold (same units as `r[0]`) and
//!    report `sr / lag`
//! 5. Estimates outside `[min_freq, max_freq]` are rejected
//!
//! The threshold is absolute, not normalized by `r[0]`: very quiet input stays
//! undetected on purpose.

use crate::config::PitchConfig;
use crate::error::AnalysisError;

/// Compute raw autocorrelation `r[lag]` for `lag in 0..max_lag`
///
/// Lags at or beyond the sample count contribute zero overlap and yield 0.0.
pub fn autocorrelation(samples: &[f32], max_lag: usize) -> Vec<f32> {
    let n = samples.len();
    (0..max_lag)
        .map(|lag| {
            if lag >= n {
                return 0.0;
            }
            samples[..n - lag]
                .iter()
                .zip(&samples[lag..])
                .map(|(&a, &b)| a * b)
                .sum()
        })
        .collect()
}

/// Peak of `acf` over `[lag_min, lag_max)`, first occurrence on ties
fn find_peak(acf: &[f32], lag_min: usize, lag_max: usize) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for lag in lag_min..lag_max.min(acf.len()) {
        let value = acf[lag];
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ if value.is_nan() => {}
            _ => best = Some((lag, value)),
        }
    }
    best
}

/// Detect pitch in Hz from raw samples
///
/// # Arguments
///
/// * `samples` - Normalized mono samples (only the first `window_size` are used)
/// * `sample_rate` - Sample rate in Hz
/// * `window_size` - Minimum and maximum number of samples analyzed
/// * `config` - Frequency range and peak threshold
///
/// # Returns
///
/// `Ok(frequency)` for a detected pitch, `Ok(0.0)` when no autocorrelation
/// peak clears the threshold
///
/// # Errors
///
/// - `AnalysisError::InsufficientData` if fewer than `window_size` samples
/// - `AnalysisError::OutOfRange` if the estimate falls outside the pitch range
pub fn try_detect_pitch(
    samples: &[f32],
    sample_rate: u32,
    window_size: usize,
    config: &PitchConfig,
) -> Result<f32, AnalysisError> {
    if samples.len() < window_size || window_size == 0 {
        return Err(AnalysisError::InsufficientData {
            required: window_size.max(1),
            available: samples.len(),
        });
    }

    let frame = &samples[..window_size];
    let acf = autocorrelation(frame, frame.len() / 2);

    let sr = sample_rate as f32;
    let lag_min = (sr / config.max_frequency).round() as usize;
    let lag_max = ((sr / config.min_frequency).round() as usize).min(acf.len());

    log::debug!(
        "Detecting pitch: {} samples, lag range [{}, {})",
        frame.len(),
        lag_min,
        lag_max
    );

    let (lag, peak) = match find_peak(&acf, lag_min, lag_max) {
        Some(found) => found,
        None => {
            log::trace!("Empty lag range, no pitch");
            return Ok(0.0);
        }
    };

    if peak <= config.peak_threshold || lag == 0 {
        log::trace!(
            "Autocorrelation peak {:.4} at lag {} below threshold {:.2}",
            peak,
            lag,
            config.peak_threshold
        );
        return Ok(0.0);
    }

    let frequency = sr / lag as f32;
    if frequency < config.min_frequency || frequency > config.max_frequency {
        return Err(AnalysisError::OutOfRange {
            value: frequency,
            min: config.min_frequency,
            max: config.max_frequency,
        });
    }

    Ok(frequency)
}
