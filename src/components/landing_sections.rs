//! Static copy around the emotion selector: hero banner and the
//! "how it works" feature cards.

use dioxus::prelude::*;
use emolearn_core::Icon;
use emolearn_ui::{Card, IconBadge, IconGlyph};

/// Highlight chips under the hero tagline
const HIGHLIGHTS: [(Icon, &str); 4] = [
    (Icon::Heart, "Emotion-Aware"),
    (Icon::Brain, "Adaptive Content"),
    (Icon::TrendingUp, "Progress Tracking"),
    (Icon::Users, "Supportive Community"),
];

/// (icon, tone, title, body) of each feature card
const FEATURES: [(Icon, &str, &str, &str); 3] = [
    (
        Icon::Heart,
        "tone-primary",
        "Emotion Check-in",
        "Start each session by sharing how you're feeling. Our system understands your emotional state and adapts accordingly.",
    ),
    (
        Icon::Brain,
        "tone-accent",
        "Adaptive Content",
        "Content difficulty, pace, and style automatically adjust based on your emotional state for optimal learning.",
    ),
    (
        Icon::TrendingUp,
        "tone-success",
        "Emotional Progress",
        "Track not just what you learn, but how you feel while learning, building emotional intelligence alongside knowledge.",
    ),
];

#[component]
pub fn HeroBanner() -> Element {
    rsx! {
        section { class: "hero gradient-primary",
            div { class: "container fade-in",
                h1 { class: "hero-title", "Emotion-Sensitive Learning" }
                p { class: "hero-tagline",
                    "Personalized education that adapts to your emotional state for optimal learning experiences"
                }
                div { class: "highlights",
                    for (icon, label) in HIGHLIGHTS {
                        div { key: "{label}", class: "highlight",
                            IconGlyph { icon }
                            span { "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FeatureCards() -> Element {
    rsx! {
        section { class: "features",
            div { class: "container",
                h2 { class: "section-title", "How Emotion-Sensitive Learning Works" }
                div { class: "feature-grid",
                    for (icon, tone, title, body) in FEATURES {
                        Card { key: "{title}", class: "feature-card".to_string(),
                            IconBadge { icon, tone: tone.to_string(), large: true }
                            h3 { "{title}" }
                            p { class: "muted", "{body}" }
                        }
                    }
                }
            }
        }
    }
}
