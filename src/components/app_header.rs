//! Dashboard header: brand on the left, "Change Mood" on the right.

use dioxus::prelude::*;
use emolearn_core::Icon;
use emolearn_ui::{Button, ButtonSize, ButtonVariant, IconGlyph};

#[derive(Props, Clone, PartialEq)]
pub struct AppHeaderProps {
    /// Handler for the "Change Mood" button
    pub on_change_mood: EventHandler<()>,
}

#[component]
pub fn AppHeader(props: AppHeaderProps) -> Element {
    let on_change_mood = props.on_change_mood;

    rsx! {
        header { class: "app-header",
            div { class: "app-header-inner",
                div { class: "brand",
                    div { class: "brand-mark",
                        IconGlyph { icon: Icon::Heart }
                    }
                    h1 { class: "brand-name", "EmoLearn" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    onclick: move |_| on_change_mood.call(()),
                    "Change Mood"
                }
            }
        }
    }
}
