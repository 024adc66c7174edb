//! Spectral tilt
//!
//! Ratio of high-band to low-band energy. Breathy phonation adds aspiration
//! noise above 4 kHz while losing low-harmonic energy, so the ratio rises.

use crate::config::FrequencyBand;
use crate::features::spectrum::PowerSpectrum;

/// Sum of power over bins whose frequency lies inside `band`
pub fn band_energy(spectrum: &PowerSpectrum, band: FrequencyBand) -> f32 {
    spectrum
        .power()
        .iter()
        .enumerate()
        .filter(|&(bin, _)| band.contains(spectrum.bin_to_frequency(bin)))
        .map(|(_, &p)| p)
        .sum()
}

/// High-band energy over low-band energy, 0.0 if the low band is empty
pub fn spectral_tilt(spectrum: &PowerSpectrum, low: FrequencyBand, high: FrequencyBand) -> f32 {
    let low_energy = band_energy(spectrum, low);
    if low_energy <= 0.0 {
        return 0.0;
    }
    band_energy(spectrum, high) / low_energy
}
