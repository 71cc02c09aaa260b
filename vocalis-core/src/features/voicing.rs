//! Voicing features: fundamental pitch, formant peaks, harmonicity.
//!
//! The three estimators are interdependent: the harmonics-to-noise
//! ratio needs the frame's pitch, and formants need the frame's
//! spectrum. All of them operate on one analysis frame at a time.

use crate::spectrum::MagnitudeSpectrum;

/// Lowest fundamental the pitch detector reports, in Hz.
pub const MIN_PITCH_HZ: f32 = 80.0;
/// Highest fundamental the pitch detector reports, in Hz.
pub const MAX_PITCH_HZ: f32 = 400.0;

/// Formant search window in Hz.
const FORMANT_MIN_HZ: f32 = 200.0;
const FORMANT_MAX_HZ: f32 = 3_000.0;

/// Harmonics sampled by the harmonics-to-noise ratio.
const HNR_HARMONICS: u32 = 10;
/// Reported when the between-harmonic bins carry no energy at all.
const HNR_CEILING_DB: f32 = 20.0;

/// Autocorrelation pitch estimate over the leading samples of `frame`.
///
/// Candidate integer periods span [80, 400] Hz. Scanning runs from the
/// shortest period upward and the first period reaching a new maximum
/// score wins, which makes the tie-break deterministic. No sub-sample
/// interpolation: integer-period resolution keeps downstream thresholds
/// stable. Slices too short to score any candidate report 0.
pub fn pitch(frame: &[f32], sample_rate: u32) -> f32 {
    let rate = sample_rate as f32;
    let min_period = (rate / MAX_PITCH_HZ).ceil() as usize;
    let max_period = (rate / MIN_PITCH_HZ).floor() as usize;

    let mut best_period = 0usize;
    let mut best_score = f32::NEG_INFINITY;

    for period in min_period..=max_period {
        if period >= frame.len() {
            break;
        }
        let mut score = 0.0f32;
        for i in 0..frame.len() - period {
            score += frame[i] * frame[i + period];
        }
        if score > best_score {
            best_score = score;
            best_period = period;
        }
    }

    if best_period == 0 {
        return 0.0;
    }
    rate / best_period as f32
}

/// A formant pair ordered so that `f1_hz <= f2_hz`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormantPair {
    pub f1_hz: f32,
    pub f2_hz: f32,
}

/// Strongest two spectral peaks in the 200–3000 Hz search window.
///
/// A peak must strictly exceed its two neighbours on each side.
/// Selection is by magnitude rank; the pair is swapped afterwards if
/// needed so that F1 ≤ F2 by frequency. Missing peaks default to 0.
pub fn formants(spectrum: &MagnitudeSpectrum) -> FormantPair {
    let magnitudes = spectrum.magnitudes();
    // (magnitude, frequency) candidates, later sorted by magnitude.
    let mut peaks: Vec<(f32, f32)> = Vec::new();

    for bin in 2..magnitudes.len().saturating_sub(2) {
        let magnitude = magnitudes[bin];
        let is_peak = magnitude > magnitudes[bin - 1]
            && magnitude > magnitudes[bin - 2]
            && magnitude > magnitudes[bin + 1]
            && magnitude > magnitudes[bin + 2];
        if !is_peak {
            continue;
        }
        let freq = spectrum.frequency(bin);
        if (FORMANT_MIN_HZ..=FORMANT_MAX_HZ).contains(&freq) {
            peaks.push((magnitude, freq));
        }
    }

    // Stable sort: equal magnitudes keep ascending-frequency order.
    peaks.sort_by(|a, b| b.0.total_cmp(&a.0));

    let f1 = peaks.first().map(|p| p.1).unwrap_or(0.0);
    let f2 = peaks.get(1).map(|p| p.1).unwrap_or(0.0);
    if f2 < f1 {
        FormantPair { f1_hz: f2, f2_hz: f1 }
    } else {
        FormantPair { f1_hz: f1, f2_hz: f2 }
    }
}

/// Harmonics-to-noise ratio in dB for a frame with fundamental `f0_hz`.
///
/// Harmonic energy is sampled at the nearest bin of each of the first
/// ten harmonics; "noise" at a fixed half-f0 offset between harmonics.
/// The offset is a heuristic proxy rather than a calibrated noise
/// estimator; its exact numeric behaviour is what the gate thresholds
/// were tuned against, so it must not be "corrected" in isolation.
///
/// Returns 0 when `f0_hz` lies outside the trackable [80, 400] Hz range
/// or when no harmonic energy was found, and a fixed 20 dB ceiling when
/// the noise bins are exactly empty.
pub fn harmonics_to_noise(spectrum: &MagnitudeSpectrum, f0_hz: f32) -> f32 {
    if !(MIN_PITCH_HZ..=MAX_PITCH_HZ).contains(&f0_hz) {
        return 0.0;
    }

    let f0_bins = f0_hz / spectrum.bin_width();
    let noise_offset = (f0_bins / 2.0).round() as usize;

    let mut harmonic_energy = 0.0f32;
    let mut noise_energy = 0.0f32;
    for harmonic in 1..=HNR_HARMONICS {
        let harmonic_bin = (harmonic as f32 * f0_bins).round() as usize;
        let noise_bin = harmonic_bin + noise_offset;
        if noise_bin >= spectrum.len() {
            break;
        }
        harmonic_energy += spectrum.magnitudes()[harmonic_bin];
        noise_energy += spectrum.magnitudes()[noise_bin];
    }

    if noise_energy == 0.0 {
        return HNR_CEILING_DB;
    }
    if harmonic_energy == 0.0 {
        return 0.0;
    }
    10.0 * (harmonic_energy / noise_energy).log10()
}
