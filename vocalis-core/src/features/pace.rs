//! Speech-activity pacing: voice ratio, words-per-minute, pause density.

use crate::buffer::SampleBuffer;
use crate::features::{temporal, PaceMetrics};

/// Stride of the speech-activity frames (20 ms).
const FRAME_SECS: f32 = 0.02;

/// Reading speed assumed when no speech time is measurable. Only
/// reachable when a degenerate buffer slipped past the validity gate.
const FALLBACK_WPM: f32 = 150.0;

/// Pacing profile of the recording.
///
/// The words-per-minute estimate assumes a reference script of
/// `reference_words` words was read in full; only the voiced portion of
/// the recording counts toward reading time.
pub fn analyze(buffer: &SampleBuffer, speech_rms: f32, reference_words: f32) -> PaceMetrics {
    let speech_ratio = speech_ratio(buffer, speech_rms);
    let speech_time = buffer.duration_secs * speech_ratio;
    let wpm = if speech_time > 0.0 {
        reference_words / speech_time * 60.0
    } else {
        FALLBACK_WPM
    };

    PaceMetrics {
        wpm,
        speech_ratio,
        pause_density: 1.0 - speech_ratio,
    }
}

/// Fraction of 20 ms frames whose RMS exceeds `speech_rms`. Buffers
/// yielding no whole frame report 0.
pub fn speech_ratio(buffer: &SampleBuffer, speech_rms: f32) -> f32 {
    let frame_len = (buffer.sample_rate as f32 * FRAME_SECS) as usize;
    if frame_len == 0 {
        return 0.0;
    }

    let mut total = 0usize;
    let mut speech = 0usize;
    for frame in buffer.frames(frame_len) {
        total += 1;
        if temporal::rms(frame) > speech_rms {
            speech += 1;
        }
    }

    if total == 0 {
        0.0
    } else {
        speech as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// First half loud, second half silent.
    fn half_voiced(sample_rate: u32, secs: f32) -> SampleBuffer {
        let n = (sample_rate as f32 * secs) as usize;
        let samples: Vec<f32> = (0..n).map(|i| if i < n / 2 { 0.3 } else { 0.0 }).collect();
        SampleBuffer::new(samples, sample_rate, secs)
    }

    #[test]
    fn speech_ratio_of_half_voiced_buffer() {
        let buffer = half_voiced(16_000, 10.0);
        assert_relative_eq!(speech_ratio(&buffer, 0.02), 0.5, epsilon = 1e-3);
    }

    #[test]
    fn wpm_counts_only_voiced_time() {
        // 10 s recording, half voiced → 5 s of reading time for the
        // 50-word script → 600 words per minute.
        let buffer = half_voiced(16_000, 10.0);
        let metrics = analyze(&buffer, 0.02, 50.0);
        assert_relative_eq!(metrics.wpm, 600.0, epsilon = 2.0);
        assert_relative_eq!(metrics.pause_density, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn silent_buffer_falls_back_to_neutral_wpm() {
        let buffer = SampleBuffer::new(vec![0.0; 160_000], 16_000, 10.0);
        let metrics = analyze(&buffer, 0.02, 50.0);
        assert_eq!(metrics.wpm, 150.0);
        assert_eq!(metrics.speech_ratio, 0.0);
        assert_eq!(metrics.pause_density, 1.0);
    }

    #[test]
    fn fully_voiced_buffer_reads_the_script_in_the_full_duration() {
        let buffer = SampleBuffer::new(vec![0.3; 160_000], 16_000, 20.0);
        let metrics = analyze(&buffer, 0.02, 50.0);
        // 50 words over 20 s → 150 wpm.
        assert_relative_eq!(metrics.wpm, 150.0, epsilon = 1e-3);
        assert_eq!(metrics.speech_ratio, 1.0);
    }

    #[test]
    fn empty_buffer_reports_zero_ratio() {
        let buffer = SampleBuffer::new(vec![], 16_000, 0.0);
        assert_eq!(speech_ratio(&buffer, 0.02), 0.0);
    }
}
