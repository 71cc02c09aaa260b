//! Additive scoring rules: one row per (archetype, condition, weight).
//!
//! Every rule is evaluated unconditionally and the conditions are
//! non-exclusive, so one recording can feed several archetypes. Keeping
//! the rules as a flat table keeps the scoring auditable and testable
//! row by row.

use super::{Archetype, Brightness, Expressiveness, PaceBucket, PitchBucket, Texture, VoiceTraits};
use crate::features::FeatureVector;

pub(super) struct Rule {
    pub archetype: Archetype,
    pub points: u32,
    pub applies: fn(&VoiceTraits, &FeatureVector) -> bool,
}

pub(super) const RULES: &[Rule] = &[
    // authority
    Rule {
        archetype: Archetype::Authority,
        points: 3,
        applies: |t, _| t.pitch == PitchBucket::Low,
    },
    Rule {
        archetype: Archetype::Authority,
        points: 2,
        applies: |t, _| t.brightness == Brightness::Warm,
    },
    Rule {
        archetype: Archetype::Authority,
        points: 2,
        applies: |t, _| t.expressiveness == Expressiveness::Controlled,
    },
    Rule {
        archetype: Archetype::Authority,
        points: 2,
        applies: |t, _| matches!(t.pace, PaceBucket::Slow | PaceBucket::Medium),
    },
    Rule {
        archetype: Archetype::Authority,
        points: 2,
        applies: |_, f| f.energy_bands.low > f.energy_bands.high,
    },
    // storyteller
    Rule {
        archetype: Archetype::Storyteller,
        points: 3,
        applies: |t, _| t.brightness == Brightness::Balanced,
    },
    Rule {
        archetype: Archetype::Storyteller,
        points: 2,
        applies: |t, _| matches!(t.texture, Texture::Smooth | Texture::Moderate),
    },
    Rule {
        archetype: Archetype::Storyteller,
        points: 3,
        applies: |t, _| t.pace == PaceBucket::Medium,
    },
    Rule {
        archetype: Archetype::Storyteller,
        points: 2,
        applies: |t, _| t.expressiveness == Expressiveness::Expressive,
    },
    Rule {
        archetype: Archetype::Storyteller,
        points: 2,
        applies: |_, f| f.pace.pause_density > 0.15 && f.pace.pause_density < 0.35,
    },
    // energizer
    Rule {
        archetype: Archetype::Energizer,
        points: 3,
        applies: |t, _| t.pitch == PitchBucket::High,
    },
    Rule {
        archetype: Archetype::Energizer,
        points: 3,
        applies: |t, _| t.brightness == Brightness::Bright,
    },
    Rule {
        archetype: Archetype::Energizer,
        points: 3,
        applies: |t, _| t.pace == PaceBucket::Fast,
    },
    Rule {
        archetype: Archetype::Energizer,
        points: 2,
        applies: |t, _| t.texture == Texture::Energetic,
    },
    Rule {
        archetype: Archetype::Energizer,
        points: 2,
        applies: |_, f| f.pace.speech_ratio > 0.75,
    },
    // educator
    Rule {
        archetype: Archetype::Educator,
        points: 2,
        applies: |t, _| t.pace == PaceBucket::Medium,
    },
    Rule {
        archetype: Archetype::Educator,
        points: 3,
        applies: |t, _| t.expressiveness == Expressiveness::Controlled,
    },
    Rule {
        archetype: Archetype::Educator,
        points: 2,
        applies: |t, _| t.brightness == Brightness::Balanced,
    },
    Rule {
        archetype: Archetype::Educator,
        points: 2,
        applies: |_, f| {
            f.energy_bands.mid > f.energy_bands.low && f.energy_bands.mid > f.energy_bands.very_high
        },
    },
    Rule {
        archetype: Archetype::Educator,
        points: 2,
        applies: |_, f| (f.pace.wpm - 150.0).abs() < 20.0,
    },
    // character
    Rule {
        archetype: Archetype::Character,
        points: 4,
        applies: |t, _| t.expressiveness == Expressiveness::HighlyExpressive,
    },
    Rule {
        archetype: Archetype::Character,
        points: 3,
        applies: |_, f| f.dynamic_range > 12.0,
    },
    Rule {
        archetype: Archetype::Character,
        points: 2,
        applies: |t, _| t.texture == Texture::Energetic,
    },
    Rule {
        archetype: Archetype::Character,
        points: 2,
        applies: |_, f| f.pace.pause_density > 0.25,
    },
    // versatile
    Rule {
        archetype: Archetype::Versatile,
        points: 5,
        applies: |t, _| {
            t.brightness == Brightness::Balanced
                && t.texture == Texture::Moderate
                && t.pace == PaceBucket::Medium
                && t.expressiveness == Expressiveness::Expressive
        },
    },
    Rule {
        archetype: Archetype::Versatile,
        points: 2,
        applies: |t, _| t.pitch == PitchBucket::Medium,
    },
    Rule {
        archetype: Archetype::Versatile,
        points: 2,
        applies: |_, f| f.dynamic_range > 8.0 && f.dynamic_range < 15.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_archetype_has_rules() {
        for archetype in Archetype::ALL {
            assert!(
                RULES.iter().any(|r| r.archetype == archetype),
                "no rules for {archetype}"
            );
        }
    }

    #[test]
    fn rule_points_are_positive() {
        assert!(RULES.iter().all(|r| r.points > 0));
    }

    #[test]
    fn maximum_attainable_scores_match_the_table() {
        let max_for = |archetype: Archetype| -> u32 {
            RULES
                .iter()
                .filter(|r| r.archetype == archetype)
                .map(|r| r.points)
                .sum()
        };
        assert_eq!(max_for(Archetype::Authority), 11);
        assert_eq!(max_for(Archetype::Storyteller), 12);
        assert_eq!(max_for(Archetype::Energizer), 13);
        assert_eq!(max_for(Archetype::Educator), 11);
        assert_eq!(max_for(Archetype::Character), 11);
        assert_eq!(max_for(Archetype::Versatile), 9);
    }
}
