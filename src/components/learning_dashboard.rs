//! Learning dashboard.
//!
//! Hero card with the mood's content bundle, then the placeholder progress
//! metrics, recommended activities and recent achievements. Nothing here is
//! computed; "Start Learning" has no effect.

use dioxus::prelude::*;
use emolearn_core::{
    Achievement, ActivityCard, Dashboard, Icon, ProgressMetric, ACTIVITY_ACTION,
};
use emolearn_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardTitle, IconBadge, IconGlyph, ProgressBar,
};

#[derive(Props, Clone, PartialEq)]
pub struct LearningDashboardProps {
    pub dashboard: Dashboard,
}

#[component]
pub fn LearningDashboard(props: LearningDashboardProps) -> Element {
    let content = props.dashboard.content;
    let hero_class = format!("hero-card {}", content.gradient);

    rsx! {
        div { class: "dashboard",
            Card { class: hero_class,
                div { class: "hero-card-body",
                    div {
                        h2 { class: "hero-card-title", "{content.title}" }
                        p { class: "hero-card-description", "{content.description}" }
                    }
                    div { class: "breathe {content.accent}",
                        IconGlyph { icon: Icon::Heart }
                    }
                }
            }

            div { class: "metric-grid",
                for metric in props.dashboard.metrics.iter() {
                    MetricCard { key: "{metric.label}", metric: metric.clone() }
                }
            }

            Card {
                CardTitle {
                    title: "Recommended for Your Current Mood".to_string(),
                    icon: Icon::Brain,
                    tone: "tone-primary".to_string(),
                }
                div { class: "activity-grid",
                    for activity in props.dashboard.activities.iter() {
                        ActivityItem { key: "{activity.label}", activity: activity.clone() }
                    }
                }
            }

            Card {
                CardTitle {
                    title: "Recent Achievements".to_string(),
                    icon: Icon::Trophy,
                    tone: "tone-success".to_string(),
                }
                div { class: "achievement-list",
                    for achievement in props.dashboard.achievements.iter() {
                        AchievementRow { key: "{achievement.title}", achievement: achievement.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(metric: ProgressMetric) -> Element {
    rsx! {
        Card { class: "metric-card".to_string(),
            div { class: "metric-header",
                IconBadge { icon: metric.icon, tone: metric.tone.class().to_string() }
                div {
                    p { class: "muted small", "{metric.label}" }
                    p { class: "metric-value", "{metric.value}" }
                }
            }
            ProgressBar { value: metric.percent, label: metric.label.to_string() }
        }
    }
}

#[component]
fn ActivityItem(activity: ActivityCard) -> Element {
    let variant = if activity.primary {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };
    let label = activity.label;

    rsx! {
        div { class: "activity-card",
            div { class: "activity-header",
                div { class: "activity-title",
                    div { class: "activity-icon",
                        IconGlyph { icon: Icon::BookOpen }
                    }
                    div {
                        h4 { "{activity.label}" }
                        p { class: "muted small", "{activity.duration}" }
                    }
                }
                Badge { label: activity.badge.to_string() }
            }
            Button {
                variant,
                size: ButtonSize::Small,
                full_width: true,
                onclick: move |_| tracing::debug!(activity = label, "Start Learning pressed"),
                IconGlyph { icon: Icon::Play }
                " {ACTIVITY_ACTION}"
            }
        }
    }
}

#[component]
fn AchievementRow(achievement: Achievement) -> Element {
    let subtitle = achievement.subtitle();
    let tone = achievement.tone.class();

    rsx! {
        div { class: "achievement {tone}",
            IconGlyph { icon: Icon::CheckCircle, class: tone.to_string() }
            div {
                p { class: "achievement-title", "{achievement.title}" }
                p { class: "muted small", "{subtitle}" }
            }
        }
    }
}
