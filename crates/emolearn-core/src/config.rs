//! Startup configuration for a session.

use std::time::Duration;

use crate::emotion::EmotionId;

/// Delay between picking an emotion and the automatic switch to the dashboard
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub advance_delay: Duration,
    /// Open the dashboard for this mood on launch
    pub initial_mood: Option<EmotionId>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            advance_delay: DEFAULT_ADVANCE_DELAY,
            initial_mood: None,
        }
    }
}

impl SessionConfig {
    /// Build from raw command-line values. An unknown mood tag resolves to the
    /// default emotion rather than failing.
    pub fn from_args(advance_delay_ms: Option<u64>, mood: Option<&str>) -> Self {
        Self {
            advance_delay: advance_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_ADVANCE_DELAY),
            initial_mood: mood.map(EmotionId::resolve),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_half_a_second() {
        assert_eq!(SessionConfig::default().advance_delay, Duration::from_millis(500));
        assert_eq!(SessionConfig::default().initial_mood, None);
    }

    #[test]
    fn from_args_resolves_mood() {
        let config = SessionConfig::from_args(Some(50), Some("excited"));
        assert_eq!(config.advance_delay, Duration::from_millis(50));
        assert_eq!(config.initial_mood, Some(EmotionId::Calm));

        let config = SessionConfig::from_args(None, Some("focused"));
        assert_eq!(config.advance_delay, DEFAULT_ADVANCE_DELAY);
        assert_eq!(config.initial_mood, Some(EmotionId::Focused));
    }
}
