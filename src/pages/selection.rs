//! Selection page - entry screen.
//!
//! Picking an emotion schedules the automatic switch to the dashboard;
//! "Start Your Learning Journey" switches immediately.

use dioxus::prelude::*;
use emolearn_ui::{Button, ButtonSize, ButtonVariant};

use crate::components::{EmotionSelector, FeatureCards, HeroBanner};
use crate::context::{select_emotion, start_session, use_session, use_session_config};

#[component]
pub fn SelectionPage() -> Element {
    let session = use_session();
    let delay = use_session_config().advance_delay;

    let selected = session.read().selected();
    let can_start = session.read().can_start();

    rsx! {
        main { class: "selection-page",
            HeroBanner {}

            section { class: "container selection-section",
                EmotionSelector {
                    selected,
                    on_select: move |emotion| select_emotion(session, delay, emotion),
                }

                if can_start {
                    div { class: "start-row fade-in",
                        Button {
                            variant: ButtonVariant::Hero,
                            size: ButtonSize::Large,
                            onclick: move |_| start_session(session),
                            "Start Your Learning Journey"
                        }
                    }
                }
            }

            FeatureCards {}
        }
    }
}
