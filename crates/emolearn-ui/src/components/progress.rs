//! Progress Bar Component

use dioxus::prelude::*;

/// Clamp a percentage to the 0..=100 range the bar can show
pub fn clamp_percent(value: u8) -> u8 {
    value.min(100)
}

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Fill, 0..=100 (larger values are clamped)
    pub value: u8,
    /// Accessible label
    #[props(default = "progress".to_string())]
    pub label: String,
}

/// Thin horizontal progress bar
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProgressBar { value: 70, label: "Learning Streak" }
/// }
/// ```
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let value = clamp_percent(props.value);

    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            "aria-label": "{props.label}",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{value}",
            div { class: "progress-fill", style: "width: {value}%;" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(clamp_percent(0), 0);
        assert_eq!(clamp_percent(83), 83);
        assert_eq!(clamp_percent(250), 100);
    }
}
