//! Emotion selector.
//!
//! Renders every catalog emotion as a selectable tile and reports the
//! chosen identifier upward. The current pick is highlighted.

use dioxus::prelude::*;
use emolearn_core::{emotions, Emotion, EmotionId};
use emolearn_ui::{Card, IconGlyph};

/// Props for the EmotionSelector component.
#[derive(Props, Clone, PartialEq)]
pub struct EmotionSelectorProps {
    /// Currently selected emotion (if any)
    pub selected: Option<EmotionId>,
    /// Handler called when an emotion tile is activated
    pub on_select: EventHandler<EmotionId>,
}

/// "How are you feeling today?" card with one tile per emotion.
///
/// # Example
///
/// ```ignore
/// EmotionSelector {
///     selected: session.read().selected(),
///     on_select: move |id| select_emotion(session, delay, id),
/// }
/// ```
#[component]
pub fn EmotionSelector(props: EmotionSelectorProps) -> Element {
    rsx! {
        Card { class: "gradient-calm selector-card".to_string(),
            div { class: "selector-heading",
                h2 { "How are you feeling today?" }
                p { class: "muted", "Let's personalize your learning experience" }
            }

            div {
                class: "emotion-grid",
                role: "radiogroup",
                "aria-label": "Emotion selection",
                for emotion in emotions().iter() {
                    {
                        let is_selected = props.selected == Some(emotion.id);
                        let on_select = props.on_select; // Callback is Copy

                        rsx! {
                            EmotionTile {
                                key: "{emotion.id}",
                                emotion: emotion.clone(),
                                is_selected,
                                on_click: move |id| on_select.call(id),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Props for a single emotion tile.
#[derive(Props, Clone, PartialEq)]
struct EmotionTileProps {
    emotion: Emotion,
    is_selected: bool,
    on_click: EventHandler<EmotionId>,
}

/// CSS class for a tile in the given selection state
fn tile_class(emotion: &Emotion, is_selected: bool) -> String {
    if is_selected {
        "emotion-tile selected".to_string()
    } else {
        format!("emotion-tile {}", emotion.color)
    }
}

#[component]
fn EmotionTile(props: EmotionTileProps) -> Element {
    let id = props.emotion.id;
    let class = tile_class(&props.emotion, props.is_selected);
    let on_click = props.on_click;

    rsx! {
        button {
            class: "{class}",
            role: "radio",
            "aria-checked": if props.is_selected { "true" } else { "false" },
            onclick: move |_| on_click.call(id),
            div { class: "emotion-icon",
                IconGlyph { icon: props.emotion.icon }
            }
            div { class: "emotion-text",
                div { class: "emotion-label", "{props.emotion.label}" }
                div { class: "emotion-description", "{props.emotion.description}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_tile_drops_emotion_tint() {
        let stressed = EmotionId::Stressed.emotion();
        assert_eq!(tile_class(stressed, true), "emotion-tile selected");
        assert_eq!(tile_class(stressed, false), "emotion-tile emotion-stressed");
    }
}
