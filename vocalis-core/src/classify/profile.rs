//! Display metadata for each archetype.
//!
//! Pure lookup for the presentation layer; nothing here feeds back into
//! scoring.

use super::Archetype;

/// Presentation copy for one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeProfile {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub best_for: &'static [&'static str],
    pub tip: &'static str,
}

impl Archetype {
    /// Display profile for this label.
    pub fn profile(self) -> &'static ArchetypeProfile {
        match self {
            Archetype::Authority => &AUTHORITY,
            Archetype::Storyteller => &STORYTELLER,
            Archetype::Energizer => &ENERGIZER,
            Archetype::Educator => &EDUCATOR,
            Archetype::Character => &CHARACTER,
            Archetype::Versatile => &VERSATILE,
        }
    }
}

static AUTHORITY: ArchetypeProfile = ArchetypeProfile {
    name: "The Authority",
    icon: "🎯",
    description: "You have a commanding presence and gravitas that demands attention. \
                  Your voice carries weight and credibility, perfect for serious content.",
    strengths: &[
        "Deep resonance",
        "Measured pace",
        "Authoritative tone",
        "Clear articulation",
    ],
    best_for: &[
        "Documentary Narration",
        "Corporate Training",
        "News Reading",
        "Political Content",
    ],
    tip: "Pursue documentary work and corporate narration. Your voice adds \
          credibility to serious, informative content.",
};

static STORYTELLER: ArchetypeProfile = ArchetypeProfile {
    name: "The Storyteller",
    icon: "📚",
    description: "Your voice has a warm, engaging quality that draws listeners in. \
                  You have natural pacing and a conversational tone that makes people \
                  want to keep listening.",
    strengths: &[
        "Warm tone",
        "Natural pacing",
        "Engaging delivery",
        "Emotional connection",
    ],
    best_for: &[
        "Audiobook Narration",
        "Podcast Hosting",
        "Children's Stories",
        "Memoir Reading",
    ],
    tip: "Focus on audiobook narration and long-form content. Your natural \
          storytelling ability shines in fiction and non-fiction alike.",
};

static ENERGIZER: ArchetypeProfile = ArchetypeProfile {
    name: "The Energizer",
    icon: "⚡",
    description: "Your voice is bright, dynamic, and full of energy! You bring \
                  excitement and enthusiasm that's perfect for upbeat content.",
    strengths: &[
        "High energy",
        "Fast-paced",
        "Expressive",
        "Enthusiastic delivery",
    ],
    best_for: &[
        "Radio Commercials",
        "Product Ads",
        "Gaming Content",
        "Social Media Videos",
    ],
    tip: "Commercial voice work is your sweet spot. Practice 15-30 second spots \
          and build your demo reel with energetic reads.",
};

static EDUCATOR: ArchetypeProfile = ArchetypeProfile {
    name: "The Educator",
    icon: "🎓",
    description: "You have a clear, patient, and approachable voice that helps \
                  people learn. Your measured delivery makes complex topics feel \
                  accessible.",
    strengths: &[
        "Clear articulation",
        "Patient pacing",
        "Approachable tone",
        "Consistent delivery",
    ],
    best_for: &[
        "E-Learning Courses",
        "Tutorial Videos",
        "Educational Content",
        "Training Materials",
    ],
    tip: "E-learning is booming and needs voices like yours. Platforms like \
          Udemy and Coursera need quality narration.",
};

static CHARACTER: ArchetypeProfile = ArchetypeProfile {
    name: "The Character Artist",
    icon: "🎪",
    description: "You have exceptional dynamic range and expressiveness! Your voice \
                  can transform into different characters and emotions with ease.",
    strengths: &[
        "Wide dynamic range",
        "Expressive",
        "Character variety",
        "Emotional depth",
    ],
    best_for: &[
        "Animation",
        "Video Games",
        "Character Voices",
        "Dramatic Readings",
    ],
    tip: "Animation and gaming need your skills. Create a character demo reel \
          showing your range - hero, villain, creature, comic relief.",
};

static VERSATILE: ArchetypeProfile = ArchetypeProfile {
    name: "The Versatile Pro",
    icon: "🎭",
    description: "You're the Swiss Army knife of voice acting! Your balanced vocal \
                  qualities allow you to adapt to almost any style or genre.",
    strengths: &[
        "Adaptable range",
        "Balanced tone",
        "Good control",
        "Multi-genre capability",
    ],
    best_for: &[
        "Character Work",
        "Multiple Roles",
        "Diverse Projects",
        "Any Genre",
    ],
    tip: "Your versatility is your superpower. Build a diverse demo reel \
          showcasing different styles - commercial, narration, character work.",
};
