//! Badge Component
//!
//! Small pill-shaped label, e.g. "New" on activity cards.

use dioxus::prelude::*;

/// CSS class shared by every badge
pub const BADGE_CLASS: &str = "badge badge-secondary";

#[component]
pub fn Badge(label: String) -> Element {
    rsx! {
        span { class: BADGE_CLASS, "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_class() {
        assert_eq!(BADGE_CLASS, "badge badge-secondary");
    }
}
