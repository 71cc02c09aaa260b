//! Vocal-structure sub-gate: formants, harmonicity, spectral tilt.
//!
//! Ten probe frames spread evenly across the buffer. A frame with
//! speech-level energy counts as voice-like only when all three hold:
//!
//! - formant pair inside the vocal-tract windows (F1 200–1200 Hz,
//!   F2 600–3000 Hz)
//! - harmonics-to-noise ratio of at least 3 dB
//! - spectral tilt between −20 and −3 dB/octave
//!
//! The denominator stays fixed at ten, so quiet (skipped) frames count
//! against the recording rather than shrinking the sample.

use std::ops::RangeInclusive;

use crate::analyzer::AnalyzerConfig;
use crate::buffer::SampleBuffer;
use crate::features::{spectral, temporal, voicing};
use crate::spectrum::{MagnitudeSpectrum, FRAME_LEN};

/// Probe frames evaluated per recording.
const PROBE_FRAMES: usize = 10;
/// Minimum fraction of probe frames that must look voice-like.
const MIN_VALID_RATIO: f32 = 0.4;

const F1_RANGE: RangeInclusive<f32> = 200.0..=1_200.0;
const F2_RANGE: RangeInclusive<f32> = 600.0..=3_000.0;
const MIN_HNR_DB: f32 = 3.0;
const TILT_RANGE: RangeInclusive<f32> = -20.0..=-3.0;

/// Evaluate the sub-gate over ten evenly spaced analysis frames.
/// Buffers shorter than one frame fail outright.
pub fn passes(buffer: &SampleBuffer, config: &AnalyzerConfig) -> bool {
    if buffer.len() < FRAME_LEN {
        return false;
    }

    let stride = (buffer.len() - FRAME_LEN) / PROBE_FRAMES;
    let mut valid_frames = 0usize;

    for probe in 0..PROBE_FRAMES {
        let start = probe * stride;
        let frame = &buffer.samples[start..start + FRAME_LEN];
        if temporal::rms(frame) < config.speech_frame_rms {
            continue;
        }
        if frame_is_voicelike(frame, buffer.sample_rate) {
            valid_frames += 1;
        }
    }

    let valid_ratio = valid_frames as f32 / PROBE_FRAMES as f32;
    valid_ratio >= MIN_VALID_RATIO
}

fn frame_is_voicelike(frame: &[f32], sample_rate: u32) -> bool {
    let spectrum = MagnitudeSpectrum::compute(frame, sample_rate);

    let formants = voicing::formants(&spectrum);
    if !F1_RANGE.contains(&formants.f1_hz) || !F2_RANGE.contains(&formants.f2_hz) {
        return false;
    }

    let f0 = voicing::pitch(frame, sample_rate);
    if voicing::harmonics_to_noise(&spectrum, f0) < MIN_HNR_DB {
        return false;
    }

    TILT_RANGE.contains(&spectral::tilt(&spectrum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_shorter_than_a_frame_fails() {
        let buffer = SampleBuffer::new(vec![0.3; FRAME_LEN - 1], 16_000, 6.0);
        assert!(!passes(&buffer, &AnalyzerConfig::default()));
    }

    #[test]
    fn quiet_frames_count_against_the_ratio() {
        // Loud enough overall checks are not in play here: every probe
        // frame is below the speech floor, so zero of ten are valid.
        let buffer = SampleBuffer::new(vec![0.001; FRAME_LEN * 12], 16_000, 6.0);
        assert!(!passes(&buffer, &AnalyzerConfig::default()));
    }

    #[test]
    fn flat_dc_frames_are_not_voicelike() {
        let buffer = SampleBuffer::new(vec![0.5; FRAME_LEN * 12], 16_000, 6.0);
        assert!(!passes(&buffer, &AnalyzerConfig::default()));
    }
}
