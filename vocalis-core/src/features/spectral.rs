//! Spectral-shape features: centroid, band energies, tilt.

use crate::buffer::SampleBuffer;
use crate::features::EnergyBands;
use crate::spectrum::{MagnitudeSpectrum, FRAME_LEN};

/// Mean spectral centroid in Hz over non-overlapping 2048-sample frames.
///
/// Frames whose total magnitude is zero are skipped; each processed
/// frame contributes equally to the mean regardless of its energy.
/// Buffers yielding no processable frame report 0.
pub fn centroid(buffer: &SampleBuffer) -> f32 {
    let mut sum = 0.0f32;
    let mut frames = 0usize;

    for frame in buffer.frames(FRAME_LEN) {
        let spectrum = MagnitudeSpectrum::compute(frame, buffer.sample_rate);
        let total: f32 = spectrum.magnitudes().iter().sum();
        if total == 0.0 {
            continue;
        }
        let weighted: f32 = spectrum
            .magnitudes()
            .iter()
            .enumerate()
            .map(|(bin, &magnitude)| spectrum.frequency(bin) * magnitude)
            .sum();
        sum += weighted / total;
        frames += 1;
    }

    if frames == 0 {
        0.0
    } else {
        sum / frames as f32
    }
}

/// Band-energy profile of the first analysis frame. Buffers shorter
/// than one frame report all-zero bands.
pub fn energy_bands(buffer: &SampleBuffer) -> EnergyBands {
    if buffer.len() < FRAME_LEN {
        return EnergyBands::default();
    }
    let spectrum = MagnitudeSpectrum::compute(buffer.leading(FRAME_LEN), buffer.sample_rate);
    EnergyBands {
        low: spectrum.band_mean(0.0, 250.0),
        mid_low: spectrum.band_mean(250.0, 500.0),
        mid: spectrum.band_mean(500.0, 2_000.0),
        high: spectrum.band_mean(2_000.0, 4_000.0),
        very_high: spectrum.band_mean(4_000.0, 8_000.0),
    }
}

/// Spectral tilt in dB per octave: mean magnitude in [200, 500) Hz vs
/// [2000, 4000) Hz, the two bands sitting roughly three octaves apart.
/// Either band mean at zero reports 0.
pub fn tilt(spectrum: &MagnitudeSpectrum) -> f32 {
    let low = spectrum.band_mean(200.0, 500.0);
    let high = spectrum.band_mean(2_000.0, 4_000.0);
    if low == 0.0 || high == 0.0 {
        return 0.0;
    }
    10.0 * (high / low).log10() / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn tone_buffer(freq: f32, sample_rate: u32, len: usize, amplitude: f32) -> SampleBuffer {
        let samples: Vec<f32> = (0..len)
            .map(|i| amplitude * (TAU * freq * i as f32 / sample_rate as f32).sin())
            .collect();
        let duration = len as f32 / sample_rate as f32;
        SampleBuffer::new(samples, sample_rate, duration)
    }

    #[test]
    fn centroid_tracks_a_pure_tone() {
        // 1000 Hz sits exactly on bin 128 at 16 kHz / 2048.
        let buffer = tone_buffer(1_000.0, 16_000, FRAME_LEN * 2, 0.5);
        let centroid_hz = centroid(&buffer);
        assert!(
            (centroid_hz - 1_000.0).abs() < 50.0,
            "centroid={centroid_hz}"
        );
    }

    #[test]
    fn centroid_of_silence_is_zero() {
        let buffer = SampleBuffer::new(vec![0.0; FRAME_LEN * 2], 16_000, 0.25);
        assert_eq!(centroid(&buffer), 0.0);
    }

    #[test]
    fn centroid_of_short_buffer_is_zero() {
        let buffer = SampleBuffer::new(vec![0.5; 100], 16_000, 0.01);
        assert_eq!(centroid(&buffer), 0.0);
    }

    #[test]
    fn mid_tone_dominates_the_mid_band() {
        // A single 1000 Hz tone frame: the mid band mean must strictly
        // exceed both the low and the very-high band means.
        let buffer = tone_buffer(1_000.0, 16_000, FRAME_LEN, 0.5);
        let bands = energy_bands(&buffer);
        assert!(bands.mid > bands.low, "mid={} low={}", bands.mid, bands.low);
        assert!(
            bands.mid > bands.very_high,
            "mid={} veryHigh={}",
            bands.mid,
            bands.very_high
        );
    }

    #[test]
    fn energy_bands_of_short_buffer_are_zero() {
        let buffer = SampleBuffer::new(vec![0.5; FRAME_LEN - 1], 16_000, 0.1);
        assert_eq!(energy_bands(&buffer), EnergyBands::default());
    }

    #[test]
    fn tilt_of_flat_spectrum_is_zero() {
        // Identical per-bin magnitude in both measurement bands → ratio
        // exactly 1 → 0 dB/oct.
        let spectrum = MagnitudeSpectrum::from_raw(vec![1.0; FRAME_LEN / 2], 16_000, FRAME_LEN);
        let tilt_db = tilt(&spectrum);
        assert!(tilt_db.abs() < 1e-6, "tilt={tilt_db}");
    }

    #[test]
    fn tilt_guards_zero_bands() {
        let spectrum = MagnitudeSpectrum::compute(&vec![0.0; FRAME_LEN], 16_000);
        assert_eq!(tilt(&spectrum), 0.0);
    }

    #[test]
    fn dark_spectrum_tilts_negative() {
        // Energy at 300 Hz only: high band holds nothing but leakage.
        let buffer = tone_buffer(300.0, 16_000, FRAME_LEN, 0.5);
        let spectrum = MagnitudeSpectrum::compute(buffer.leading(FRAME_LEN), 16_000);
        assert!(tilt(&spectrum) < -3.0);
    }
}
