//! Acoustic feature extraction.
//!
//! The individual calculators are independent and order-insensitive;
//! [`extract`] runs them all and assembles the [`FeatureVector`]. A
//! vector is only ever computed for a buffer that passed the validity
//! gate, and it is immutable thereafter; callers thread it onward to
//! the telemetry collector themselves.

pub mod pace;
pub mod spectral;
pub mod temporal;
pub mod voicing;

use serde::{Deserialize, Serialize};

use crate::analyzer::AnalyzerConfig;
use crate::buffer::SampleBuffer;
use crate::spectrum::FRAME_LEN;

/// Mean magnitude per frequency band of the first analysis frame.
///
/// Band edges are half-open in Hz. Each band reports its per-bin mean,
/// which normalises for band width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBands {
    /// [0, 250) Hz.
    pub low: f32,
    /// [250, 500) Hz.
    pub mid_low: f32,
    /// [500, 2000) Hz.
    pub mid: f32,
    /// [2000, 4000) Hz.
    pub high: f32,
    /// [4000, 8000) Hz.
    pub very_high: f32,
}

/// Speech-activity pacing profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceMetrics {
    /// Estimated words per minute over the voiced portion.
    pub wpm: f32,
    /// Fraction of 20 ms frames carrying speech-level energy.
    pub speech_ratio: f32,
    /// 1 − speech_ratio.
    pub pause_density: f32,
}

/// One row of acoustic measurements for a validated recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    /// Mean spectral centroid in Hz.
    pub spectral_centroid_hz: f32,
    /// Adjacent-sample sign changes per sample.
    pub zero_crossing_rate: f32,
    /// Whole-buffer root-mean-square level.
    pub rms_energy: f32,
    pub energy_bands: EnergyBands,
    /// Fundamental frequency estimate in Hz.
    pub pitch_hz: f32,
    pub pace: PaceMetrics,
    /// Loudest-to-quietest frame energy ratio (unitless).
    pub dynamic_range: f32,
}

/// Compute the full feature vector for a buffer that passed the gate.
pub fn extract(buffer: &SampleBuffer, config: &AnalyzerConfig) -> FeatureVector {
    FeatureVector {
        spectral_centroid_hz: spectral::centroid(buffer),
        zero_crossing_rate: temporal::zero_crossing_rate(&buffer.samples),
        rms_energy: temporal::rms(&buffer.samples),
        energy_bands: spectral::energy_bands(buffer),
        pitch_hz: voicing::pitch(buffer.leading(FRAME_LEN), buffer.sample_rate),
        pace: pace::analyze(buffer, config.speech_frame_rms, config.reference_words),
        dynamic_range: temporal::dynamic_range(buffer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_vector_serializes_with_camel_case_keys() {
        // Values chosen to be exactly representable so the JSON
        // comparison is not at the mercy of f32 → f64 widening.
        let features = FeatureVector {
            spectral_centroid_hz: 1_500.0,
            zero_crossing_rate: 0.0625,
            rms_energy: 0.25,
            energy_bands: EnergyBands::default(),
            pitch_hz: 120.0,
            pace: PaceMetrics {
                wpm: 150.0,
                speech_ratio: 0.75,
                pause_density: 0.25,
            },
            dynamic_range: 9.0,
        };

        let json = serde_json::to_value(&features).expect("serialize feature vector");
        assert_eq!(json["spectralCentroidHz"], 1_500.0);
        assert_eq!(json["zeroCrossingRate"], 0.0625);
        assert_eq!(json["energyBands"]["midLow"], 0.0);
        assert_eq!(json["energyBands"]["veryHigh"], 0.0);
        assert_eq!(json["pace"]["speechRatio"], 0.75);
        assert_eq!(json["pace"]["pauseDensity"], 0.25);

        let round_trip: FeatureVector =
            serde_json::from_value(json).expect("deserialize feature vector");
        assert_eq!(round_trip, features);
    }
}
