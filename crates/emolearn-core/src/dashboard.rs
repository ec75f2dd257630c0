//! Dashboard model.
//!
//! Everything shown on the dashboard besides the content bundle is fixed
//! placeholder data: the progress metrics and achievements are not derived
//! from any input.

use serde::Serialize;

use crate::content::{content_for, ContentBundle};
use crate::emotion::EmotionId;
use crate::icon::Icon;

/// Duration label shown on every recommended activity
pub const ACTIVITY_DURATION: &str = "15-30 min";

/// Badge shown on every recommended activity
pub const ACTIVITY_BADGE: &str = "New";

/// Label of the activity action button
pub const ACTIVITY_ACTION: &str = "Start Learning";

/// Color role used to tint a widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Success,
    Accent,
}

impl Tone {
    /// CSS class suffix for this tone
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Success => "tone-success",
            Tone::Accent => "tone-accent",
        }
    }
}

/// A progress widget on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressMetric {
    pub label: &'static str,
    pub value: &'static str,
    /// Fill of the progress bar, 0..=100
    pub percent: u8,
    pub icon: Icon,
    pub tone: Tone,
}

/// A recent achievement entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub when: &'static str,
    pub xp: u32,
    pub tone: Tone,
}

pub static PROGRESS_METRICS: [ProgressMetric; 3] = [
    ProgressMetric {
        label: "Learning Streak",
        value: "7 days",
        percent: 70,
        icon: Icon::TrendingUp,
        tone: Tone::Primary,
    },
    ProgressMetric {
        label: "Completed Today",
        value: "3 of 5",
        percent: 60,
        icon: Icon::Trophy,
        tone: Tone::Success,
    },
    ProgressMetric {
        label: "Study Time",
        value: "2.5 hrs",
        percent: 83,
        icon: Icon::Clock,
        tone: Tone::Accent,
    },
];

pub static ACHIEVEMENTS: [Achievement; 2] = [
    Achievement {
        title: "Completed Math Fundamentals",
        when: "Yesterday",
        xp: 50,
        tone: Tone::Success,
    },
    Achievement {
        title: "7-Day Learning Streak",
        when: "Today",
        xp: 100,
        tone: Tone::Primary,
    },
];

impl Achievement {
    /// Subtitle line, e.g. `Yesterday • +50 XP`
    pub fn subtitle(&self) -> String {
        format!("{} \u{2022} +{} XP", self.when, self.xp)
    }
}

/// One recommended-activity card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCard {
    pub label: &'static str,
    pub duration: &'static str,
    pub badge: &'static str,
    /// Only the first card gets the primary action style
    pub primary: bool,
}

/// Everything the dashboard screen renders for one emotion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub emotion: EmotionId,
    pub content: &'static ContentBundle,
    pub activities: Vec<ActivityCard>,
    pub metrics: &'static [ProgressMetric],
    pub achievements: &'static [Achievement],
}

impl Dashboard {
    /// Build the dashboard for a catalog emotion
    pub fn for_emotion(emotion: EmotionId) -> Self {
        let content = content_for(emotion);
        let activities = content
            .activities
            .iter()
            .copied()
            .enumerate()
            .map(|(index, label)| ActivityCard {
                label,
                duration: ACTIVITY_DURATION,
                badge: ACTIVITY_BADGE,
                primary: index == 0,
            })
            .collect();

        Self {
            emotion,
            content,
            activities,
            metrics: &PROGRESS_METRICS,
            achievements: &ACHIEVEMENTS,
        }
    }

    /// Build the dashboard for a raw identifier, falling back to the default
    pub fn for_raw(raw: &str) -> Self {
        Self::for_emotion(EmotionId::resolve(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_activity_is_primary() {
        let dashboard = Dashboard::for_emotion(EmotionId::Focused);
        let primary: Vec<bool> = dashboard.activities.iter().map(|a| a.primary).collect();
        assert_eq!(primary, vec![true, false, false]);
        assert_eq!(dashboard.activities[0].label, "Complex problem solving");
    }

    #[test]
    fn placeholder_data_is_independent_of_emotion() {
        let a = Dashboard::for_emotion(EmotionId::Calm);
        let b = Dashboard::for_emotion(EmotionId::Confident);
        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.achievements, b.achievements);
    }

    #[test]
    fn metrics_are_hardcoded() {
        let values: Vec<_> = PROGRESS_METRICS.iter().map(|m| (m.value, m.percent)).collect();
        assert_eq!(values, vec![("7 days", 70), ("3 of 5", 60), ("2.5 hrs", 83)]);
    }

    #[test]
    fn achievement_subtitle() {
        assert_eq!(ACHIEVEMENTS[0].subtitle(), "Yesterday \u{2022} +50 XP");
        assert_eq!(ACHIEVEMENTS[1].subtitle(), "Today \u{2022} +100 XP");
    }

    #[test]
    fn raw_lookup_falls_back() {
        let dashboard = Dashboard::for_raw("grumpy");
        assert_eq!(dashboard.emotion, EmotionId::Calm);
        assert_eq!(dashboard.content.title, "Mindful Learning");
    }
}
