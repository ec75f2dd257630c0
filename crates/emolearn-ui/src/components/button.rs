//! Button Components
//!
//! Button styles used across both screens:
//! - Primary: filled brand color, main actions
//! - Outline: bordered, secondary actions ("Change Mood")
//! - Hero: large gradient call to action ("Start Your Learning Journey")

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled primary action
    #[default]
    Primary,
    /// Bordered secondary action
    Outline,
    /// Large gradient call to action
    Hero,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Hero => "btn-hero",
        }
    }
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
}

/// Compose the class list for a button
pub fn button_class(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if full_width {
        class.push_str(" btn-block");
    }
    class
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         size: ButtonSize::Small,
///         onclick: move |_| session.write().reset(),
///         "Change Mood"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.full_width);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Hero.class(), "btn-hero");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
    }

    #[test]
    fn class_composition() {
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Small, false),
            "btn btn-outline btn-sm"
        );
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Small, true),
            "btn btn-primary btn-sm btn-block"
        );
        assert_eq!(
            button_class(ButtonVariant::Hero, ButtonSize::Large, false),
            "btn btn-hero btn-lg"
        );
    }
}
