//! Icon references used by the catalogs and the dashboard.
//!
//! Catalog data only names an icon; renderers decide how to draw it.
//! [`Icon::glyph`] gives a unicode fallback used by both the desktop
//! app and the text preview.

use serde::{Deserialize, Serialize};

/// Named icon reference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Smile,
    Zap,
    Target,
    Frown,
    Star,
    Heart,
    Brain,
    TrendingUp,
    Users,
    BookOpen,
    Trophy,
    Clock,
    Play,
    CheckCircle,
}

impl Icon {
    /// Stable kebab-case name of the icon
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Smile => "smile",
            Icon::Zap => "zap",
            Icon::Target => "target",
            Icon::Frown => "frown",
            Icon::Star => "star",
            Icon::Heart => "heart",
            Icon::Brain => "brain",
            Icon::TrendingUp => "trending-up",
            Icon::Users => "users",
            Icon::BookOpen => "book-open",
            Icon::Trophy => "trophy",
            Icon::Clock => "clock",
            Icon::Play => "play",
            Icon::CheckCircle => "check-circle",
        }
    }

    /// Unicode glyph rendering of the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Smile => "\u{263A}",
            Icon::Zap => "\u{26A1}",
            Icon::Target => "\u{25CE}",
            Icon::Frown => "\u{2639}",
            Icon::Star => "\u{2605}",
            Icon::Heart => "\u{2665}",
            Icon::Brain => "\u{2726}",
            Icon::TrendingUp => "\u{2197}",
            Icon::Users => "\u{2687}",
            Icon::BookOpen => "\u{2261}",
            Icon::Trophy => "\u{2691}",
            Icon::Clock => "\u{25F7}",
            Icon::Play => "\u{25B6}",
            Icon::CheckCircle => "\u{2713}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_match_serde() {
        let json = serde_json::to_string(&Icon::TrendingUp).unwrap();
        assert_eq!(json, format!("\"{}\"", Icon::TrendingUp.name()));
        let json = serde_json::to_string(&Icon::CheckCircle).unwrap();
        assert_eq!(json, "\"check-circle\"");
    }

    #[test]
    fn glyphs_are_single_chars() {
        for icon in [Icon::Smile, Icon::Zap, Icon::Target, Icon::Frown, Icon::Star] {
            assert_eq!(icon.glyph().chars().count(), 1);
        }
    }
}
