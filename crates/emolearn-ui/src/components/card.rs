//! Card Components
//!
//! Soft-shadowed surfaces. A card may carry a title row with an icon.

use dioxus::prelude::*;
use emolearn_core::Icon;

use super::IconGlyph;

/// Properties for the Card component
#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub children: Element,
    /// Optional additional CSS classes (e.g. a gradient token)
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("card {}", extra),
        _ => "card".to_string(),
    };

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

/// Properties for the CardTitle component
#[derive(Clone, PartialEq, Props)]
pub struct CardTitleProps {
    pub title: String,
    #[props(default)]
    pub icon: Option<Icon>,
    /// Tint class for the icon, e.g. `tone-success`
    #[props(default)]
    pub tone: Option<String>,
}

/// Section heading inside a card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         CardTitle { title: "Recent Achievements", icon: Icon::Trophy, tone: "tone-success" }
///         // body
///     }
/// }
/// ```
#[component]
pub fn CardTitle(props: CardTitleProps) -> Element {
    let tint = props.tone.clone().unwrap_or_default();

    rsx! {
        h3 { class: "card-title",
            if let Some(icon) = props.icon {
                IconGlyph { icon, class: tint }
            }
            "{props.title}"
        }
    }
}
