//! # vocalis-core
//!
//! Short-recording voice-type analysis engine.
//!
//! ## Pipeline
//!
//! ```text
//! SampleBuffer → Validity gate ──rejected──► RejectionReason
//!                     │
//!               feature extraction
//!        (spectrum, pitch, pace, dynamics)
//!                     │
//!               FeatureVector → rule classifier → Archetype
//! ```
//!
//! Every stage is a pure function over an immutable buffer: no I/O, no
//! hidden state, no randomness. Identical input always produces an
//! identical feature vector and label, so concurrent invocation on the
//! same buffer is safe without synchronisation. Capture, decode and
//! persistence live in external collaborators; they hand the engine a
//! fully materialised [`SampleBuffer`] and consume the returned
//! [`AnalysisOutcome`].

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod buffer;
pub mod classify;
pub mod error;
pub mod features;
pub mod gate;
pub mod report;
pub mod spectrum;

// Convenience re-exports for downstream crates
pub use analyzer::{Analysis, AnalysisOutcome, AnalyzerConfig, VoiceAnalyzer};
pub use buffer::SampleBuffer;
pub use classify::{Archetype, ClassificationScores, VoiceTraits};
pub use error::VocalisError;
pub use features::FeatureVector;
pub use gate::{RejectionReason, ValidationOutcome};
pub use report::{ExperienceLevel, FeedbackRecord};
