//! `VoiceAnalyzer` — top-level gate → features → classifier flow.
//!
//! ```text
//! analyze(buffer)
//!     ├─ contract checks        → Err(VocalisError)            (caller bug)
//!     ├─ validity gate          → Ok(Rejected { reason })
//!     └─ features + classifier  → Ok(Classified(analysis))
//! ```
//!
//! The analyzer holds only configuration. Every call is a pure function
//! of the buffer: callers thread the returned feature vector onward to
//! the telemetry collector themselves; there is no last-result cache.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::buffer::SampleBuffer;
use crate::classify::{self, Archetype, ClassificationScores, VoiceTraits};
use crate::error::{Result, VocalisError};
use crate::features::{self, FeatureVector};
use crate::gate::{self, RejectionReason, ValidationOutcome};

/// Configuration for `VoiceAnalyzer`.
///
/// Defaults are the thresholds the recording flow was tuned against;
/// change them only together with the recording script and UI guidance.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Whole-buffer RMS below which a recording counts as silent.
    /// Default: 0.01.
    pub silence_rms: f32,
    /// Per-frame RMS above which a 20 ms frame counts as speech.
    /// Default: 0.02.
    pub speech_frame_rms: f32,
    /// Minimum fraction of speech frames. Default: 0.20.
    pub min_speech_ratio: f32,
    /// Minimum nominal recording length in seconds. Default: 5.
    pub min_duration_secs: f32,
    /// Standard-deviation floor for the static-input check.
    /// Default: 0.001.
    pub variation_floor: f32,
    /// Word count of the reference script read during recording.
    /// Default: 50.
    pub reference_words: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            silence_rms: 0.01,
            speech_frame_rms: 0.02,
            min_speech_ratio: 0.20,
            min_duration_secs: 5.0,
            variation_floor: 0.001,
            reference_words: 50.0,
        }
    }
}

/// A successful classification with everything the caller may persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub archetype: Archetype,
    pub traits: VoiceTraits,
    pub scores: ClassificationScores,
    pub features: FeatureVector,
}

/// What the analyzer reports for one recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum AnalysisOutcome {
    /// The recording failed the validity gate.
    Rejected { reason: RejectionReason },
    /// The recording classified cleanly.
    Classified(Analysis),
}

impl AnalysisOutcome {
    /// The archetype, when the recording classified.
    pub fn archetype(&self) -> Option<Archetype> {
        match self {
            AnalysisOutcome::Rejected { .. } => None,
            AnalysisOutcome::Classified(analysis) => Some(analysis.archetype),
        }
    }
}

/// Stateless, synchronous voice-type analyzer.
///
/// `analyze` performs no I/O and touches no shared state, so one
/// analyzer may be used from any number of threads at once.
#[derive(Debug, Clone, Default)]
pub struct VoiceAnalyzer {
    config: AnalyzerConfig,
}

impl VoiceAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the full pipeline on one recording.
    ///
    /// # Errors
    /// Only buffer contract violations error: an empty buffer or a zero
    /// sample rate or a non-finite/negative duration. Everything else,
    /// silence or a stuck input for example, comes back as a typed
    /// rejection.
    pub fn analyze(&self, buffer: &SampleBuffer) -> Result<AnalysisOutcome> {
        if buffer.is_empty() {
            return Err(VocalisError::EmptyBuffer);
        }
        if buffer.sample_rate == 0 {
            return Err(VocalisError::InvalidSampleRate(buffer.sample_rate));
        }
        if !buffer.duration_secs.is_finite() || buffer.duration_secs < 0.0 {
            return Err(VocalisError::InvalidDuration(buffer.duration_secs));
        }

        if let ValidationOutcome::Rejected(reason) = gate::validate(buffer, &self.config) {
            info!(?reason, "recording rejected by validity gate");
            return Ok(AnalysisOutcome::Rejected { reason });
        }

        let features = features::extract(buffer, &self.config);
        debug!(
            centroid_hz = features.spectral_centroid_hz,
            pitch_hz = features.pitch_hz,
            wpm = features.pace.wpm,
            dynamic_range = features.dynamic_range,
            "features extracted"
        );

        let classification = classify::classify(&features);
        info!(archetype = %classification.archetype, "recording classified");

        Ok(AnalysisOutcome::Classified(Analysis {
            archetype: classification.archetype,
            traits: classification.traits,
            scores: classification.scores,
            features,
        }))
    }
}
