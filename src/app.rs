use dioxus::prelude::*;
use emolearn_core::Session;

use crate::context::get_session_config;
use crate::pages::{DashboardPage, SelectionPage};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the session and switches between the two screens:
///
/// - selection screen while no session has started
/// - dashboard once a mood is confirmed or the auto-advance fires
#[component]
pub fn App() -> Element {
    let session: Signal<Session> = use_signal(|| Session::from_config(&get_session_config()));

    // Provide session state to all child components
    use_context_provider(|| session);
    use_context_provider(get_session_config);

    let dashboard = session.read().dashboard();

    rsx! {
        style { {GLOBAL_STYLES} }
        if let Some(dashboard) = dashboard {
            DashboardPage { dashboard }
        } else {
            SelectionPage {}
        }
    }
}
