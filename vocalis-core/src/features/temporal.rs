//! Time-domain primitives: RMS energy, zero crossings, dynamic range.

use crate::buffer::SampleBuffer;
use crate::spectrum::FRAME_LEN;

/// Frame energies at or below this RMS are treated as recording-noise
/// floor and excluded from the quiet end of the dynamic-range ratio.
pub const NOISE_FLOOR_RMS: f32 = 0.001;

/// Root-mean-square of a sample slice. Empty slices report 0.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Fraction of adjacent sample pairs that change sign (≥ 0 vs < 0),
/// relative to the total sample count. Empty buffers report 0.
pub fn zero_crossing_rate(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let crossings = samples
        .windows(2)
        .filter(|pair| (pair[0] >= 0.0) != (pair[1] >= 0.0))
        .count();
    crossings as f32 / samples.len() as f32
}

/// Loudest-to-quietest frame energy ratio across the recording.
///
/// RMS is taken per non-overlapping 2048-sample frame. The quiet side
/// only considers frames above [`NOISE_FLOOR_RMS`]; when every frame is
/// at the floor, the floor itself is used so the ratio stays finite.
/// Buffers shorter than one frame report 0.
pub fn dynamic_range(buffer: &SampleBuffer) -> f32 {
    let mut max_energy = 0.0f32;
    let mut min_energy = f32::MAX;
    let mut frames = 0usize;

    for frame in buffer.frames(FRAME_LEN) {
        frames += 1;
        let energy = rms(frame);
        if energy > max_energy {
            max_energy = energy;
        }
        if energy > NOISE_FLOOR_RMS && energy < min_energy {
            min_energy = energy;
        }
    }

    if frames == 0 {
        return 0.0;
    }
    if min_energy == f32::MAX {
        min_energy = NOISE_FLOOR_RMS;
    }
    max_energy / min_energy
}
