//! Bucketed rule classifier over the feature vector.
//!
//! Continuous features are first bucketed into categorical traits with
//! fixed thresholds, then every rule in [`rules::RULES`] is evaluated
//! unconditionally and its points added to its archetype's score. The
//! winner is the first strict maximum in enumeration order; a winning
//! score below the confidence floor falls back to `versatile`.

pub mod profile;
mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::features::FeatureVector;

/// The closed set of voice-acting archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Authority,
    Storyteller,
    Energizer,
    Educator,
    Character,
    Versatile,
}

impl Archetype {
    /// All labels, in scoring and tie-break order.
    pub const ALL: [Archetype; 6] = [
        Archetype::Authority,
        Archetype::Storyteller,
        Archetype::Energizer,
        Archetype::Educator,
        Archetype::Character,
        Archetype::Versatile,
    ];

    /// Stable lowercase label, as serialized.
    pub fn label(self) -> &'static str {
        match self {
            Archetype::Authority => "authority",
            Archetype::Storyteller => "storyteller",
            Archetype::Energizer => "energizer",
            Archetype::Educator => "educator",
            Archetype::Character => "character",
            Archetype::Versatile => "versatile",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brightness {
    Bright,
    Balanced,
    Warm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Texture {
    Energetic,
    Moderate,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchBucket {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceBucket {
    Fast,
    Medium,
    Slow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expressiveness {
    HighlyExpressive,
    Expressive,
    Controlled,
}

/// Categorical view of the continuous features, derived with fixed
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceTraits {
    pub brightness: Brightness,
    pub texture: Texture,
    pub pitch: PitchBucket,
    pub pace: PaceBucket,
    pub expressiveness: Expressiveness,
}

impl VoiceTraits {
    pub fn from_features(features: &FeatureVector) -> Self {
        let brightness = if features.spectral_centroid_hz > 2_000.0 {
            Brightness::Bright
        } else if features.spectral_centroid_hz > 1_200.0 {
            Brightness::Balanced
        } else {
            Brightness::Warm
        };
        let texture = if features.zero_crossing_rate > 0.10 {
            Texture::Energetic
        } else if features.zero_crossing_rate > 0.05 {
            Texture::Moderate
        } else {
            Texture::Smooth
        };
        let pitch = if features.pitch_hz > 200.0 {
            PitchBucket::High
        } else if features.pitch_hz > 140.0 {
            PitchBucket::Medium
        } else {
            PitchBucket::Low
        };
        let pace = if features.pace.wpm > 170.0 {
            PaceBucket::Fast
        } else if features.pace.wpm > 130.0 {
            PaceBucket::Medium
        } else {
            PaceBucket::Slow
        };
        let expressiveness = if features.dynamic_range > 15.0 {
            Expressiveness::HighlyExpressive
        } else if features.dynamic_range > 8.0 {
            Expressiveness::Expressive
        } else {
            Expressiveness::Controlled
        };

        Self {
            brightness,
            texture,
            pitch,
            pace,
            expressiveness,
        }
    }
}

/// Minimum winning score for a confident label.
const MIN_WINNING_SCORE: u32 = 3;

/// Accumulated rule points per archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationScores {
    pub authority: u32,
    pub storyteller: u32,
    pub energizer: u32,
    pub educator: u32,
    pub character: u32,
    pub versatile: u32,
}

impl ClassificationScores {
    pub fn get(&self, archetype: Archetype) -> u32 {
        match archetype {
            Archetype::Authority => self.authority,
            Archetype::Storyteller => self.storyteller,
            Archetype::Energizer => self.energizer,
            Archetype::Educator => self.educator,
            Archetype::Character => self.character,
            Archetype::Versatile => self.versatile,
        }
    }

    fn add(&mut self, archetype: Archetype, points: u32) {
        let slot = match archetype {
            Archetype::Authority => &mut self.authority,
            Archetype::Storyteller => &mut self.storyteller,
            Archetype::Energizer => &mut self.energizer,
            Archetype::Educator => &mut self.educator,
            Archetype::Character => &mut self.character,
            Archetype::Versatile => &mut self.versatile,
        };
        *slot += points;
    }

    /// First strict maximum in [`Archetype::ALL`] order; winners below
    /// the confidence floor fall back to `versatile`.
    pub fn winner(&self) -> Archetype {
        let mut best = Archetype::ALL[0];
        let mut best_score = self.get(best);
        for archetype in Archetype::ALL.into_iter().skip(1) {
            let score = self.get(archetype);
            if score > best_score {
                best = archetype;
                best_score = score;
            }
        }
        if best_score < MIN_WINNING_SCORE {
            Archetype::Versatile
        } else {
            best
        }
    }
}

/// Result of classifying one feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub archetype: Archetype,
    pub traits: VoiceTraits,
    pub scores: ClassificationScores,
}

/// Score every rule and pick the archetype. Pure: identical features
/// always produce the identical label.
pub fn classify(features: &FeatureVector) -> Classification {
    let traits = VoiceTraits::from_features(features);

    let mut scores = ClassificationScores::default();
    for rule in rules::RULES {
        if (rule.applies)(&traits, features) {
            scores.add(rule.archetype, rule.points);
        }
    }

    let archetype = scores.winner();
    debug!(%archetype, ?traits, ?scores, "classified feature vector");

    Classification {
        archetype,
        traits,
        scores,
    }
}
