//! Typed sample buffer handed to the engine by the capture layer.

/// An immutable block of mono PCM samples at a known sample rate.
///
/// The duration is supplied by the recorder rather than re-derived from
/// the sample count: decode paths may trim or pad without updating the
/// nominal recording length, and the gate judges the length the speaker
/// was actually given.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Mono f32 samples in [-1.0, 1.0].
    pub samples: Vec<f32>,
    /// Sample rate in Hz (e.g. 16000, 44100, 48000).
    pub sample_rate: u32,
    /// Nominal recording length in seconds, as reported by the recorder.
    pub duration_secs: f32,
}

impl SampleBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32, duration_secs: f32) -> Self {
        Self {
            samples,
            sample_rate,
            duration_secs,
        }
    }

    /// Returns true if the buffer contains no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Non-overlapping frames of `frame_len` samples. A trailing
    /// remainder shorter than `frame_len` is discarded.
    pub fn frames(&self, frame_len: usize) -> std::slice::ChunksExact<'_, f32> {
        self.samples.chunks_exact(frame_len)
    }

    /// The leading `frame_len` samples, or the whole buffer when shorter.
    pub fn leading(&self, frame_len: usize) -> &[f32] {
        &self.samples[..self.samples.len().min(frame_len)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_caller_supplied_not_derived() {
        // 1 s of samples, but the recorder reported 30 s.
        let buffer = SampleBuffer::new(vec![0.0; 16_000], 16_000, 30.0);
        assert_eq!(buffer.duration_secs, 30.0);
        assert_eq!(buffer.len(), 16_000);
    }

    #[test]
    fn frames_discard_trailing_remainder() {
        let buffer = SampleBuffer::new(vec![0.1; 5_000], 16_000, 0.3);
        let frames: Vec<&[f32]> = buffer.frames(2_048).collect();
        assert_eq!(frames.len(), 2);
        assert!(frames.iter().all(|f| f.len() == 2_048));
    }

    #[test]
    fn leading_clamps_to_buffer_length() {
        let buffer = SampleBuffer::new(vec![0.5; 100], 16_000, 0.01);
        assert_eq!(buffer.leading(2_048).len(), 100);
        assert_eq!(buffer.leading(10).len(), 10);
    }
}
