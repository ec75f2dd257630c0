//! Emotion catalog.
//!
//! The closed set of five self-reported moods offered on the selection
//! screen, in display order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EmoError, EmoResult};
use crate::icon::Icon;

/// Identifier of one of the five catalog emotions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionId {
    Calm,
    Energetic,
    Focused,
    Stressed,
    Confident,
}

impl EmotionId {
    /// All identifiers in catalog order
    pub const ALL: [EmotionId; 5] = [
        EmotionId::Calm,
        EmotionId::Energetic,
        EmotionId::Focused,
        EmotionId::Stressed,
        EmotionId::Confident,
    ];

    /// The emotion whose content is shown for unrecognized identifiers
    pub const DEFAULT: EmotionId = EmotionId::Calm;

    /// String tag of the identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionId::Calm => "calm",
            EmotionId::Energetic => "energetic",
            EmotionId::Focused => "focused",
            EmotionId::Stressed => "stressed",
            EmotionId::Confident => "confident",
        }
    }

    /// Resolve a raw tag, substituting [`EmotionId::DEFAULT`] when it is not
    /// in the catalog.
    pub fn resolve(raw: &str) -> EmotionId {
        match raw.parse() {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!(raw, fallback = Self::DEFAULT.as_str(), "Unknown emotion, using default");
                Self::DEFAULT
            }
        }
    }

    /// Catalog record for this identifier
    pub fn emotion(&self) -> &'static Emotion {
        // Catalog order matches declaration order of the enum
        &EMOTIONS[*self as usize]
    }
}

impl FromStr for EmotionId {
    type Err = EmoError;

    fn from_str(s: &str) -> EmoResult<Self> {
        EmotionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EmoError::UnknownEmotion(s.to_string()))
    }
}

impl fmt::Display for EmotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A selectable emotion as shown on the selection screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emotion {
    pub id: EmotionId,
    pub label: &'static str,
    pub icon: Icon,
    /// Styling token, e.g. `emotion-calm`
    pub color: &'static str,
    pub description: &'static str,
}

/// The emotion catalog, in display order
pub static EMOTIONS: [Emotion; 5] = [
    Emotion {
        id: EmotionId::Calm,
        label: "Calm",
        icon: Icon::Smile,
        color: "emotion-calm",
        description: "Feeling peaceful and relaxed",
    },
    Emotion {
        id: EmotionId::Energetic,
        label: "Energetic",
        icon: Icon::Zap,
        color: "emotion-energetic",
        description: "Full of energy and ready to learn",
    },
    Emotion {
        id: EmotionId::Focused,
        label: "Focused",
        icon: Icon::Target,
        color: "emotion-focused",
        description: "Ready to concentrate deeply",
    },
    Emotion {
        id: EmotionId::Stressed,
        label: "Stressed",
        icon: Icon::Frown,
        color: "emotion-stressed",
        description: "Feeling overwhelmed or anxious",
    },
    Emotion {
        id: EmotionId::Confident,
        label: "Confident",
        icon: Icon::Star,
        color: "emotion-confident",
        description: "Feeling positive and capable",
    },
];

/// The full emotion catalog
pub fn emotions() -> &'static [Emotion] {
    &EMOTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_ids() {
        for (emotion, id) in EMOTIONS.iter().zip(EmotionId::ALL) {
            assert_eq!(emotion.id, id);
            assert_eq!(id.emotion().id, id);
        }
    }

    #[test]
    fn parse_known_tags() {
        assert_eq!("stressed".parse::<EmotionId>().unwrap(), EmotionId::Stressed);
        assert_eq!("calm".parse::<EmotionId>().unwrap(), EmotionId::Calm);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            "Calm".parse::<EmotionId>(),
            Err(EmoError::UnknownEmotion("Calm".to_string()))
        );
    }

    #[test]
    fn resolve_falls_back_to_calm() {
        assert_eq!(EmotionId::resolve("sleepy"), EmotionId::Calm);
        assert_eq!(EmotionId::resolve(""), EmotionId::Calm);
        assert_eq!(EmotionId::resolve("focused"), EmotionId::Focused);
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&EmotionId::Energetic).unwrap();
        assert_eq!(json, "\"energetic\"");
        let back: EmotionId = serde_json::from_str("\"confident\"").unwrap();
        assert_eq!(back, EmotionId::Confident);
    }

    #[test]
    fn color_tokens_follow_ids() {
        for emotion in emotions() {
            assert_eq!(emotion.color, format!("emotion-{}", emotion.id));
        }
    }
}
