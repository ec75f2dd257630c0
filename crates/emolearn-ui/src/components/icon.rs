//! Icon Components
//!
//! Renders catalog [`Icon`] references as unicode glyphs, optionally inside
//! a round tinted badge.

use dioxus::prelude::*;
use emolearn_core::Icon;

/// Properties for the IconGlyph component
#[derive(Clone, PartialEq, Props)]
pub struct IconGlyphProps {
    pub icon: Icon,
    /// Optional additional CSS classes (tint)
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconGlyph(props: IconGlyphProps) -> Element {
    let extra = props.class.as_deref().unwrap_or("");
    let glyph = props.icon.glyph();
    let name = props.icon.name();

    rsx! {
        span {
            class: "icon icon-{name} {extra}",
            role: "img",
            "aria-label": "{name}",
            "{glyph}"
        }
    }
}

/// Properties for the IconBadge component
#[derive(Clone, PartialEq, Props)]
pub struct IconBadgeProps {
    pub icon: Icon,
    /// Tint class applied to both the circle and the glyph
    pub tone: String,
    /// Larger circle for feature cards
    #[props(default = false)]
    pub large: bool,
}

/// Round tinted circle holding a glyph
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconBadge { icon: Icon::Clock, tone: "tone-accent" }
/// }
/// ```
#[component]
pub fn IconBadge(props: IconBadgeProps) -> Element {
    let size = if props.large { "icon-badge large" } else { "icon-badge" };

    rsx! {
        div { class: "{size} {props.tone}",
            IconGlyph { icon: props.icon }
        }
    }
}
