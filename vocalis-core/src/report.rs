//! Serializable records handed to the telemetry collector.
//!
//! The collector is a read-only consumer: it persists rows of
//! (features, predicted label, user-asserted niches) for the offline
//! trainer and never feeds anything back into the analyzer. Timestamps
//! are caller-supplied; the engine itself never reads the clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::Archetype;
use crate::features::FeatureVector;

/// Self-reported experience bracket attached to a feedback submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    NotSpecified,
}

/// One labelled training row: the prediction, the features behind it,
/// and the niches the speaker says they actually work in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub predicted_type: Archetype,
    pub actual_niches: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub features: FeatureVector,
    pub recorded_at: DateTime<Utc>,
}

/// Map a set of self-reported niches onto the archetype they most
/// resemble.
///
/// Unknown niches count toward `versatile`; the most frequent archetype
/// wins, ties resolving in label enumeration order. An empty list maps
/// to `versatile`.
pub fn archetype_for_niches<S: AsRef<str>>(niches: &[S]) -> Archetype {
    if niches.is_empty() {
        return Archetype::Versatile;
    }

    let mut counts = [0usize; Archetype::ALL.len()];
    for niche in niches {
        let archetype = archetype_for_niche(niche.as_ref());
        let index = Archetype::ALL
            .iter()
            .position(|a| *a == archetype)
            .expect("archetype is in ALL");
        counts[index] += 1;
    }

    let mut best = 0usize;
    for (index, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = index;
        }
    }
    Archetype::ALL[best]
}

fn archetype_for_niche(raw: &str) -> Archetype {
    match raw.trim().to_ascii_lowercase().as_str() {
        "audiobooks" | "audiobook narration" | "podcasts" | "podcast hosting"
        | "childrens stories" | "children's stories" => Archetype::Storyteller,
        "documentary" | "documentary narration" | "corporate" | "corporate training" | "news"
        | "news reading" | "political content" => Archetype::Authority,
        "commercials" | "commercial ads" | "radio commercials" | "product ads" | "ads"
        | "social media" | "social media videos" | "gaming content" => Archetype::Energizer,
        "elearning" | "e-learning" | "e-learning courses" | "tutorials" | "tutorial videos"
        | "training" | "training materials" | "educational content" => Archetype::Educator,
        "animation" | "gaming" | "video games" | "character work" | "character voices"
        | "dramatic readings" => Archetype::Character,
        _ => Archetype::Versatile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{EnergyBands, PaceMetrics};
    use chrono::TimeZone;

    #[test]
    fn niches_map_to_their_archetype() {
        assert_eq!(
            archetype_for_niches(&["audiobooks"]),
            Archetype::Storyteller
        );
        assert_eq!(
            archetype_for_niches(&["Documentary", "news reading"]),
            Archetype::Authority
        );
        assert_eq!(archetype_for_niches(&["E-Learning"]), Archetype::Educator);
        assert_eq!(
            archetype_for_niches(&["video games", "animation"]),
            Archetype::Character
        );
    }

    #[test]
    fn majority_niche_wins() {
        let niches = ["audiobooks", "podcasts", "commercials"];
        assert_eq!(archetype_for_niches(&niches), Archetype::Storyteller);
    }

    #[test]
    fn niche_ties_resolve_in_enumeration_order() {
        // One authority niche, one storyteller niche: authority comes
        // first in the label order.
        let niches = ["podcasts", "documentary"];
        assert_eq!(archetype_for_niches(&niches), Archetype::Authority);
    }

    #[test]
    fn unknown_and_empty_niches_fall_back_to_versatile() {
        assert_eq!(
            archetype_for_niches(&["interpretive dance"]),
            Archetype::Versatile
        );
        let empty: [&str; 0] = [];
        assert_eq!(archetype_for_niches(&empty), Archetype::Versatile);
    }

    #[test]
    fn feedback_record_serializes_with_camel_case_keys() {
        let record = FeedbackRecord {
            predicted_type: Archetype::Storyteller,
            actual_niches: vec!["audiobooks".into(), "podcasts".into()],
            experience_level: ExperienceLevel::NotSpecified,
            features: FeatureVector {
                spectral_centroid_hz: 1_400.0,
                zero_crossing_rate: 0.0625,
                rms_energy: 0.25,
                energy_bands: EnergyBands::default(),
                pitch_hz: 180.0,
                pace: PaceMetrics {
                    wpm: 145.0,
                    speech_ratio: 0.75,
                    pause_density: 0.25,
                },
                dynamic_range: 10.0,
            },
            recorded_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
        };

        let json = serde_json::to_value(&record).expect("serialize feedback record");
        assert_eq!(json["predictedType"], "storyteller");
        assert_eq!(json["actualNiches"][1], "podcasts");
        assert_eq!(json["experienceLevel"], "not_specified");
        assert_eq!(json["features"]["pitchHz"], 180.0);
        assert!(json["recordedAt"].as_str().unwrap().starts_with("2026-03-14"));

        let round_trip: FeedbackRecord =
            serde_json::from_value(json).expect("deserialize feedback record");
        assert_eq!(round_trip, record);
    }
}
