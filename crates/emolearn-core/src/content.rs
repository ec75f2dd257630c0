//! Content catalog: the dashboard copy registered for each emotion.

use serde::Serialize;

use crate::emotion::EmotionId;

/// Static display strings associated with one emotion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentBundle {
    pub title: &'static str,
    pub description: &'static str,
    pub activities: [&'static str; 3],
    /// Background gradient token for the hero card
    pub gradient: &'static str,
    /// Accent color token
    pub accent: &'static str,
}

static CALM: ContentBundle = ContentBundle {
    title: "Mindful Learning",
    description: "Perfect time for deep focus and reflection",
    activities: ["Reading comprehension", "Writing exercises", "Meditation basics"],
    gradient: "gradient-calm",
    accent: "emotion-calm",
};

static ENERGETIC: ContentBundle = ContentBundle {
    title: "Active Learning",
    description: "Channel that energy into interactive learning",
    activities: ["Interactive quizzes", "Video lessons", "Practice exercises"],
    gradient: "gradient-energy",
    accent: "emotion-energetic",
};

static FOCUSED: ContentBundle = ContentBundle {
    title: "Deep Focus Mode",
    description: "Tackle challenging concepts with concentration",
    activities: ["Complex problem solving", "Research projects", "Skill building"],
    gradient: "gradient-focus",
    accent: "emotion-focused",
};

static STRESSED: ContentBundle = ContentBundle {
    title: "Gentle Learning",
    description: "Let's take it easy and build confidence",
    activities: ["Review familiar topics", "Short exercises", "Breathing techniques"],
    gradient: "gradient-calm",
    accent: "emotion-stressed",
};

static CONFIDENT: ContentBundle = ContentBundle {
    title: "Challenge Mode",
    description: "Ready to push your boundaries",
    activities: ["Advanced topics", "Test preparation", "New skill challenges"],
    gradient: "gradient-primary",
    accent: "emotion-confident",
};

/// Bundle registered for a catalog emotion
pub fn content_for(id: EmotionId) -> &'static ContentBundle {
    match id {
        EmotionId::Calm => &CALM,
        EmotionId::Energetic => &ENERGETIC,
        EmotionId::Focused => &FOCUSED,
        EmotionId::Stressed => &STRESSED,
        EmotionId::Confident => &CONFIDENT,
    }
}

/// Bundle used when an identifier is not recognized
pub fn default_content() -> &'static ContentBundle {
    content_for(EmotionId::DEFAULT)
}

/// Look up a raw identifier. Never fails: unknown tags get the default bundle.
pub fn lookup(raw: &str) -> &'static ContentBundle {
    content_for(EmotionId::resolve(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stressed_is_gentle_learning() {
        let content = lookup("stressed");
        assert_eq!(content.title, "Gentle Learning");
        assert_eq!(
            content.activities,
            ["Review familiar topics", "Short exercises", "Breathing techniques"]
        );
    }

    #[test]
    fn unknown_uses_default() {
        assert_eq!(lookup("ecstatic"), default_content());
        assert_eq!(lookup("").title, "Mindful Learning");
    }

    #[test]
    fn every_emotion_has_distinct_title() {
        let mut titles: Vec<_> = EmotionId::ALL.iter().map(|id| content_for(*id).title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 5);
    }

    #[test]
    fn accent_matches_emotion_color() {
        for id in EmotionId::ALL {
            assert_eq!(content_for(id).accent, id.emotion().color);
        }
    }
}
