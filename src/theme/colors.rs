//! Color constants mirrored by the CSS custom properties in `styles.rs`.
//!
//! Soft, low-contrast palette; each catalog emotion owns one tint.

#![allow(dead_code)]

// === SURFACES ===
pub const BACKGROUND: &str = "#f7f7fb";
pub const CARD: &str = "#ffffff";
pub const BORDER: &str = "#e4e4ef";
pub const MUTED: &str = "#eef0f6";

// === TEXT ===
pub const FOREGROUND: &str = "#1f2033";
pub const MUTED_FOREGROUND: &str = "#6b6d85";
pub const PRIMARY_FOREGROUND: &str = "#ffffff";

// === ROLES ===
pub const PRIMARY: &str = "#6d5dfc";
pub const PRIMARY_GLOW: &str = "rgba(109, 93, 252, 0.35)";
pub const SUCCESS: &str = "#3fb984";
pub const ACCENT: &str = "#f2994a";

// === EMOTIONS ===
pub const EMOTION_CALM: &str = "#5ab0d6";
pub const EMOTION_ENERGETIC: &str = "#f5b942";
pub const EMOTION_FOCUSED: &str = "#7a6cf0";
pub const EMOTION_STRESSED: &str = "#e57c7c";
pub const EMOTION_CONFIDENT: &str = "#46b98a";

/// Hex color for an emotion color token such as `emotion-calm`
pub fn emotion_color(token: &str) -> Option<&'static str> {
    match token {
        "emotion-calm" => Some(EMOTION_CALM),
        "emotion-energetic" => Some(EMOTION_ENERGETIC),
        "emotion-focused" => Some(EMOTION_FOCUSED),
        "emotion-stressed" => Some(EMOTION_STRESSED),
        "emotion-confident" => Some(EMOTION_CONFIDENT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emolearn_core::emotions;

    #[test]
    fn every_emotion_token_has_a_color() {
        for emotion in emotions() {
            assert!(emotion_color(emotion.color).is_some(), "{}", emotion.color);
        }
    }

    #[test]
    fn stylesheet_declares_emotion_tokens() {
        for emotion in emotions() {
            let var = format!("--{}:", emotion.color);
            assert!(super::super::GLOBAL_STYLES.contains(&var), "{}", var);
        }
    }
}
