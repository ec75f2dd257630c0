//! Dashboard page - shown once a session has started.

use dioxus::prelude::*;
use emolearn_core::Dashboard;

use crate::components::{AppHeader, LearningDashboard};
use crate::context::{reset_session, use_session};

#[component]
pub fn DashboardPage(dashboard: Dashboard) -> Element {
    let session = use_session();

    rsx! {
        div { class: "dashboard-page",
            AppHeader { on_change_mood: move |_| reset_session(session) }
            main { class: "container dashboard-main",
                LearningDashboard { dashboard }
            }
        }
    }
}
