//! Band-limited formant peak search
//!
//! Each formant has a fixed search band. The band edges are mapped to bins
//! with `round(hz * fft_size / sample_rate)`, the strongest bin inside the
//! band is taken, and the peak is accepted only if its power clears the
//! band's threshold. Bands may overlap, so two formants can land on the same
//! spectral peak.

use super::Formants;
use crate::config::{FormantConfig, FrequencyBand};
use crate::features::spectrum::PowerSpectrum;

/// Strongest bin of `spectrum` inside `band`, as (bin, power)
///
/// Returns None if the band maps to no bins of the spectrum.
pub fn band_peak(spectrum: &PowerSpectrum, band: FrequencyBand) -> Option<(usize, f32)> {
    if spectrum.is_empty() {
        return None;
    }
    let start = spectrum.frequency_to_bin(band.min_hz);
    let end = spectrum.frequency_to_bin(band.max_hz).min(spectrum.len() - 1);
    if start > end {
        return None;
    }

    let power = spectrum.power();
    let mut best: Option<(usize, f32)> = None;
    for (bin, &value) in power.iter().enumerate().take(end + 1).skip(start) {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ if !value.is_finite() => {}
            _ => best = Some((bin, value)),
        }
    }
    best
}

/// Formant frequency in Hz for one band, or 0.0 if no peak clears `threshold`
pub fn detect_formant(spectrum: &PowerSpectrum, band: FrequencyBand, threshold: f32) -> f32 {
    match band_peak(spectrum, band) {
        Some((bin, power)) if power > threshold => spectrum.bin_to_frequency(bin),
        Some((bin, power)) => {
            log::trace!(
                "Band [{:.0}, {:.0}] Hz peak {:.4} at bin {} below threshold {:.3}",
                band.min_hz,
                band.max_hz,
                power,
                bin,
                threshold
            );
            0.0
        }
        None => 0.0,
    }
}

/// Search all three formant bands independently
pub fn detect_formants(spectrum: &PowerSpectrum, config: &FormantConfig) -> Formants {
    log::debug!("Detecting formants over {} bins", spectrum.len());
    Formants {
        f1: detect_formant(spectrum, config.f1_band, config.f1_threshold),
        f2: detect_formant(spectrum, config.f2_band, config.f2_threshold),
        f3: detect_formant(spectrum, config.f3_band, config.f3_threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat spectrum with spikes at the given (bin, power) pairs
    fn spiky_spectrum(spikes: &[(usize, f32)]) -> PowerSpectrum {
        let mut power = vec![0.001f32; 2048];
        for &(bin, p) in spikes {
            power[bin] = p;
        }
        PowerSpectrum::from_power(power, 44100, 4096)
    }

    #[test]
    fn test_band_edges_to_bins() {
        // 200 Hz -> bin 19 (18.58 rounded), 1000 Hz -> bin 93
        let spectrum = spiky_spectrum(&[(19, 5.0), (94, 9.0)]);
        let (bin, _) = band_peak(&spectrum, FrequencyBand::new(200.0, 1000.0)).unwrap();
        assert_eq!(bin, 19);

        let spectrum = spiky_spectrum(&[(93, 5.0)]);
        let (bin, _) = band_peak(&spectrum, FrequencyBand::new(200.0, 1000.0)).unwrap();
        assert_eq!(bin, 93);
    }

    #[test]
    fn test_threshold_rejects_weak_peak() {
        let spectrum = spiky_spectrum(&[(40, 0.05)]);
        assert_eq!(detect_formant(&spectrum, FrequencyBand::new(200.0, 1000.0), 0.1), 0.0);
        let f = detect_formant(&spectrum, FrequencyBand::new(200.0, 1000.0), 0.01);
        assert!((f - 40.0 * 44100.0 / 4096.0).abs() < 1e-3);
    }

    #[test]
    fn test_overlapping_bands_share_peak() {
        // 900 Hz sits inside both F1 and F2 bands
        let spectrum = spiky_spectrum(&[(84, 10.0)]);
        let formants = detect_formants(&spectrum, &FormantConfig::default());
        assert_eq!(formants.f1, formants.f2);
        assert!(formants.f1 > 0.0);
    }

    #[test]
    fn test_band_beyond_spectrum() {
        let spectrum = PowerSpectrum::from_power(vec![1.0; 10], 44100, 20);
        // 10 bins of 2205 Hz each; a 30-40 kHz band starts past the end
        assert_eq!(band_peak(&spectrum, FrequencyBand::new(30000.0, 40000.0)), None);
    }

    #[test]
    fn test_empty_spectrum() {
        let spectrum = PowerSpectrum::from_power(vec![], 44100, 4096);
        let formants = detect_formants(&spectrum, &FormantConfig::default());
        assert_eq!(formants, Formants::default());
    }
}
