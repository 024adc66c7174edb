//! Windowed power spectrum shared by the spectral estimators
//!
//! One frame of samples is Hamming-windowed, zero-padded to the transform
//! length and run through a forward FFT; the first `fft_size / 2` bins of
//! `|X[k]|²` form the [`PowerSpectrum`]. The formant and breathiness
//! estimators both read the same spectrum, so the analyzer computes it once
//! per frame.
//!
//! # Algorithm
//!
//! 1. Take the first `min(len, window_size)` samples (L)
//! 2. Multiply by `0.54 - 0.46 * cos(2π·i / (L - 1))`
//! 3. Zero-pad to `fft_size`
//! 4. `power[k] = re² + im²` for `k < fft_size / 2`
//!
//! The FFT yields the same bins as the direct Fourier sum
//! `Σ x[n]·e^(-2πikn/N)` in O(N log N) instead of O(N²).
//!
//! # Example
//!
//! ```
//! use voxtune_dsp::features::spectrum::SpectralTransform;
//!
//! let transform = SpectralTransform::new(44100, 2048, 4096);
//! let spectrum = transform.compute(&vec![0.0f32; 2048]);
//! assert_eq!(spectrum.len(), 2048);
//! ```

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;

/// Magnitude-squared spectrum of one analysis frame
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSpectrum {
    power: Vec<f32>,
    sample_rate: u32,
    fft_size: usize,
}

impl PowerSpectrum {
    /// Wrap precomputed power values
    ///
    /// `power` should hold `fft_size / 2` non-negative bins.
    pub fn from_power(power: Vec<f32>, sample_rate: u32, fft_size: usize) -> Self {
        Self {
            power,
            sample_rate,
            fft_size,
        }
    }

    /// Power values, one per bin
    pub fn power(&self) -> &[f32] {
        &self.power
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.power.len()
    }

    /// True if there are no bins
    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }

    /// Sample rate of the source frame in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Transform length the spectrum was computed with
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Width of one bin in Hz
    pub fn bin_width(&self) -> f32 {
        self.sample_rate as f32 / self.fft_size as f32
    }

    /// Center frequency of bin `k` in Hz
    pub fn bin_to_frequency(&self, bin: usize) -> f32 {
        bin as f32 * self.bin_width()
    }

    /// Nearest bin for a frequency: `round(hz * fft_size / sample_rate)`
    pub fn frequency_to_bin(&self, hz: f32) -> usize {
        (hz.max(0.0) * self.fft_size as f32 / self.sample_rate as f32).round() as usize
    }

    /// True if every bin is zero
    pub fn is_silent(&self) -> bool {
        self.power.iter().all(|&p| p == 0.0)
    }

    /// True if every bin is a finite number
    pub fn is_finite(&self) -> bool {
        self.power.iter().all(|p| p.is_finite())
    }
}

/// Hamming window of length `len`
///
/// A single-sample window has weight 1.0.
pub fn hamming_window(len: usize) -> Vec<f32> {
    if len <= 1 {
        return vec![1.0; len];
    }
    let denom = (len - 1) as f32;
    (0..len)
        .map(|i| 0.54 - 0.46 * (2.0 * std::f32::consts::PI * i as f32 / denom).cos())
        .collect()
}

/// Planned windowed power-spectrum transform
///
/// The FFT plan is built once and shared; `compute` takes `&self` and may be
/// called from several threads at once.
#[derive(Clone)]
pub struct SpectralTransform {
    sample_rate: u32,
    window_size: usize,
    fft_size: usize,
    window: Arc<Vec<f32>>,
    fft: Arc<dyn Fft<f32>>,
}

impl fmt::Debug for SpectralTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectralTransform")
            .field("sample_rate", &self.sample_rate)
            .field("window_size", &self.window_size)
            .field("fft_size", &self.fft_size)
            .finish()
    }
}

impl SpectralTransform {
    /// Plan a transform
    ///
    /// `fft_size` is raised to `window_size` if smaller (the analyzer
    /// validates this up front).
    pub fn new(sample_rate: u32, window_size: usize, fft_size: usize) -> Self {
        let window_size = window_size.max(1);
        let fft_size = fft_size.max(window_size).max(2);
        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(fft_size);
        Self {
            sample_rate,
            window_size,
            fft_size,
            window: Arc::new(hamming_window(window_size)),
            fft,
        }
    }

    /// Analysis window length
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Transform length
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Compute the power spectrum of the first `window_size` samples
    ///
    /// Always returns `fft_size / 2` bins; empty input gives an all-zero
    /// spectrum.
    pub fn compute(&self, samples: &[f32]) -> PowerSpectrum {
        let used = samples.len().min(self.window_size);
        let num_bins = self.fft_size / 2;

        log::debug!(
            "Computing power spectrum: {} of {} samples, fft_size={}",
            used,
            samples.len(),
            self.fft_size
        );

        if used == 0 {
            return PowerSpectrum::from_power(vec![0.0; num_bins], self.sample_rate, self.fft_size);
        }

        // A short frame gets a window fitted to its own length
        let short_window;
        let window: &[f32] = if used == self.window_size {
            self.window.as_slice()
        } else {
            short_window = hamming_window(used);
            short_window.as_slice()
        };

        let mut buffer: Vec<Complex<f32>> = Vec::with_capacity(self.fft_size);
        buffer.extend(
            samples[..used]
                .iter()
                .zip(window)
                .map(|(&x, &w)| Complex::new(x * w, 0.0)),
        );
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        let power = buffer[..num_bins].iter().map(|c| c.norm_sqr()).collect();

        PowerSpectrum::from_power(power, self.sample_rate, self.fft_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct O(N²) Fourier sum over the windowed, zero-padded frame
    fn reference_power(samples: &[f32], window_size: usize, fft_size: usize) -> Vec<f64> {
        let used = samples.len().min(window_size);
        let window = hamming_window(used);
        let mut padded = vec![0.0f64; fft_size];
        for i in 0..used {
            padded[i] = (samples[i] * window[i]) as f64;
        }
        (0..fft_size / 2)
            .map(|k| {
                let mut re = 0.0f64;
                let mut im = 0.0f64;
                for (n, &x) in padded.iter().enumerate() {
                    let angle = -2.0 * std::f64::consts::PI * (k * n) as f64 / fft_size as f64;
                    re += x * angle.cos();
                    im += x * angle.sin();
                }
                re * re + im * im
            })
            .collect()
    }

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| {
                (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin() * 0.5
            })
            .collect()
    }

    #[test]
    fn test_hamming_window_shape() {
        let w = hamming_window(5);
        assert!((w[0] - 0.08).abs() < 1e-6);
        assert!((w[2] - 1.0).abs() < 1e-6);
        assert!((w[4] - 0.08).abs() < 1e-6);
        assert_eq!(hamming_window(1), vec![1.0]);
        assert!(hamming_window(0).is_empty());
    }

    #[test]
    fn test_fixed_bin_count() {
        let transform = SpectralTransform::new(44100, 2048, 4096);
        assert_eq!(transform.compute(&[]).len(), 2048);
        assert_eq!(transform.compute(&[0.1; 100]).len(), 2048);
        assert_eq!(transform.compute(&vec![0.1; 10_000]).len(), 2048);
    }

    #[test]
    fn test_empty_input_is_silent() {
        let transform = SpectralTransform::new(44100, 2048, 4096);
        let spectrum = transform.compute(&[]);
        assert!(spectrum.is_silent());
    }

    #[test]
    fn test_bin_frequency_mapping() {
        let transform = SpectralTransform::new(44100, 2048, 4096);
        let spectrum = transform.compute(&[]);
        assert!((spectrum.bin_width() - 44100.0 / 4096.0).abs() < 1e-4);
        assert_eq!(spectrum.frequency_to_bin(1000.0), 93);
        assert!((spectrum.bin_to_frequency(93) - 1001.29).abs() < 0.01);
    }

    #[test]
    fn test_power_is_non_negative() {
        let transform = SpectralTransform::new(44100, 2048, 4096);
        let samples: Vec<f32> = (0..2048).map(|i| ((i * 7919) % 97) as f32 / 97.0 - 0.5).collect();
        let spectrum = transform.compute(&samples);
        assert!(spectrum.power().iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_peak_at_tone_frequency() {
        let transform = SpectralTransform::new(44100, 2048, 4096);
        let spectrum = transform.compute(&sine(1000.0, 44100, 2048));
        let (peak_bin, _) = spectrum
            .power()
            .iter()
            .enumerate()
            .fold((0, 0.0f32), |acc, (i, &p)| if p > acc.1 { (i, p) } else { acc });
        let peak_hz = spectrum.bin_to_frequency(peak_bin);
        assert!(
            (peak_hz - 1000.0).abs() <= spectrum.bin_width(),
            "peak at {:.1} Hz",
            peak_hz
        );
    }

    #[test]
    fn test_matches_direct_fourier_sum() {
        // Small sizes keep the O(N²) reference fast
        let samples = sine(3000.0, 44100, 300);
        let transform = SpectralTransform::new(44100, 256, 512);
        let spectrum = transform.compute(&samples);
        let reference = reference_power(&samples, 256, 512);

        let max_ref = reference.iter().cloned().fold(0.0f64, f64::max);
        for (k, (&fast, &slow)) in spectrum.power().iter().zip(&reference).enumerate() {
            assert!(
                (fast as f64 - slow).abs() <= max_ref * 1e-4 + 1e-6,
                "bin {}: fft={} dft={}",
                k,
                fast,
                slow
            );
        }
    }

    #[test]
    fn test_short_frame_uses_own_window_length() {
        let samples = sine(2000.0, 44100, 100);
        let transform = SpectralTransform::new(44100, 256, 512);
        let spectrum = transform.compute(&samples);
        let reference = reference_power(&samples, 256, 512);
        let max_ref = reference.iter().cloned().fold(0.0f64, f64::max);
        for (&fast, &slow) in spectrum.power().iter().zip(&reference) {
            assert!((fast as f64 - slow).abs() <= max_ref * 1e-4 + 1e-6);
        }
    }
}
