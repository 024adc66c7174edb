//! Harmonic-to-noise comparison
//!
//! Locates the fundamental in the spectrum, then samples the peak around each
//! harmonic and the single bin halfway to the next one. A modal voice has
//! deep valleys between harmonics; aspiration noise fills them in.
//!
//! # Accumulation order
//!
//! For `h = 1..=harmonic_count`, with fundamental bin `f`:
//! 1. `hb = f·h`; stop if `hb` is past the spectrum
//! 2. harmonic energy += max power over `hb ± radius`
//! 3. if `h < harmonic_count`, noise energy += power at `hb + f/2` when that
//!    bin exists
//!
//! A full pass reads `harmonic_count - 1` midpoints. The noise average
//! divides by `max(1, count - 1)` and the harmonic average by `count`. When
//! the loop stops early at the spectrum edge, the midpoint after the last
//! harmonic found can still be in range, so the noise sum may hold one more
//! term than its divisor. The score thresholds were tuned with this
//! arithmetic, so it is kept as is.

use crate::features::spectrum::PowerSpectrum;

/// Ratio reported when no fundamental or no harmonic energy is found
pub const MAX_NOISE_RATIO: f32 = 1.0;

/// Strongest bin in `[min_bin, bin(max_hz))` with non-zero power
pub fn find_fundamental_bin(
    spectrum: &PowerSpectrum,
    min_bin: usize,
    max_hz: f32,
) -> Option<usize> {
    let end = spectrum.frequency_to_bin(max_hz).min(spectrum.len());
    let power = spectrum.power();
    let mut best: Option<(usize, f32)> = None;
    for (bin, &value) in power.iter().enumerate().take(end).skip(min_bin) {
        if value > 0.0 && best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((bin, value));
        }
    }
    best.map(|(bin, _)| bin)
}

/// Harmonic and noise energy sums for one fundamental
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicEnergy {
    /// Sum of harmonic peak powers
    pub harmonic: f32,
    /// Sum of inter-harmonic midpoint powers
    pub noise: f32,
    /// Harmonics inside the spectrum
    pub count: usize,
}

/// Accumulate harmonic peaks and midpoint noise for `fundamental_bin`
pub fn harmonic_energy(
    spectrum: &PowerSpectrum,
    fundamental_bin: usize,
    harmonic_count: usize,
    search_radius: usize,
) -> HarmonicEnergy {
    let power = spectrum.power();
    let len = power.len();
    let mut energy = HarmonicEnergy {
        harmonic: 0.0,
        noise: 0.0,
        count: 0,
    };

    if fundamental_bin == 0 {
        return energy;
    }

    for h in 1..=harmonic_count {
        let harmonic_bin = fundamental_bin * h;
        if harmonic_bin >= len {
            break;
        }

        let start = harmonic_bin.saturating_sub(search_radius);
        let end = (harmonic_bin + search_radius).min(len - 1);
        let peak = power[start..=end].iter().copied().fold(0.0f32, f32::max);
        energy.harmonic += peak;
        energy.count += 1;

        let midpoint = harmonic_bin + fundamental_bin / 2;
        if h < harmonic_count && midpoint < len {
            energy.noise += power[midpoint];
        }
    }

    energy
}

/// Noise-to-harmonics ratio of the spectrum
///
/// Returns [`MAX_NOISE_RATIO`] when no fundamental is found or the harmonics
/// carry no energy.
pub fn noise_to_harmonics_ratio(
    spectrum: &PowerSpectrum,
    fundamental_min_bin: usize,
    fundamental_max_hz: f32,
    harmonic_count: usize,
    search_radius: usize,
) -> f32 {
    let fundamental_bin =
        match find_fundamental_bin(spectrum, fundamental_min_bin, fundamental_max_hz) {
            Some(bin) => bin,
            None => {
                log::trace!("No fundamental below {:.0} Hz", fundamental_max_hz);
                return MAX_NOISE_RATIO;
            }
        };

    let energy = harmonic_energy(spectrum, fundamental_bin, harmonic_count, search_radius);
    if energy.harmonic <= 0.0 || energy.count == 0 {
        return MAX_NOISE_RATIO;
    }

    let noise_avg = energy.noise / energy.count.saturating_sub(1).max(1) as f32;
    let harmonic_avg = energy.harmonic / energy.count as f32;

    log::trace!(
        "Fundamental bin {}: {} harmonics, noise avg {:.4}, harmonic avg {:.4}",
        fundamental_bin,
        energy.count,
        noise_avg,
        harmonic_avg
    );

    noise_avg / harmonic_avg
}
