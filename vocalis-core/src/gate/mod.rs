//! Sequential validity checks a recording must pass before analysis.
//!
//! ## Check order
//!
//! 1. Whole-buffer RMS below the silence floor        → `Silence`
//! 2. Too few frames with speech-level energy         → `TooQuiet`
//! 3. Nominal duration below the minimum              → `TooShort`
//! 4. Leading samples statistically static            → `NoVariation`
//! 5. No vocal structure across the probe frames      → `NotHumanVoice`
//!
//! The checks short-circuit: a buffer only ever reports the first
//! reason it fails, and feature extraction never runs on a rejected
//! buffer.

pub mod human_voice;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyzer::AnalyzerConfig;
use crate::buffer::SampleBuffer;
use crate::features::{pace, temporal};

/// Why a recording was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    /// Whole-buffer RMS below the silence floor.
    Silence,
    /// Too few frames carry speech-level energy.
    TooQuiet,
    /// Recording shorter than the minimum duration.
    TooShort,
    /// Samples are statically flat, as from a stuck or disconnected
    /// input.
    NoVariation,
    /// Energy present but no vocal structure (formants, harmonicity,
    /// spectral tilt).
    NotHumanVoice,
}

/// Outcome of the validity gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Rejected(RejectionReason),
}

impl ValidationOutcome {
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Samples inspected by the variation check (1 s at 48 kHz).
const VARIATION_WINDOW: usize = 48_000;

/// Run the five checks in order, short-circuiting on the first failure.
pub fn validate(buffer: &SampleBuffer, config: &AnalyzerConfig) -> ValidationOutcome {
    let rms = temporal::rms(&buffer.samples);
    if rms < config.silence_rms {
        debug!(rms, "gate: buffer is silent");
        return ValidationOutcome::Rejected(RejectionReason::Silence);
    }

    let speech_ratio = pace::speech_ratio(buffer, config.speech_frame_rms);
    if speech_ratio < config.min_speech_ratio {
        debug!(speech_ratio, "gate: too little speech energy");
        return ValidationOutcome::Rejected(RejectionReason::TooQuiet);
    }

    if buffer.duration_secs < config.min_duration_secs {
        debug!(duration = buffer.duration_secs, "gate: recording too short");
        return ValidationOutcome::Rejected(RejectionReason::TooShort);
    }

    let window = buffer.len().min(VARIATION_WINDOW);
    let deviation = std_dev(&buffer.samples[..window]);
    if deviation < config.variation_floor {
        debug!(deviation, "gate: no sample variation");
        return ValidationOutcome::Rejected(RejectionReason::NoVariation);
    }

    if !human_voice::passes(buffer, config) {
        debug!("gate: no human-voice structure");
        return ValidationOutcome::Rejected(RejectionReason::NotHumanVoice);
    }

    ValidationOutcome::Valid
}

/// Population standard deviation of `samples`. Empty slices report 0.
fn std_dev(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    let variance = samples
        .iter()
        .map(|s| {
            let d = s - mean;
            d * d
        })
        .sum::<f32>()
        / samples.len() as f32;
    variance.sqrt()
}
