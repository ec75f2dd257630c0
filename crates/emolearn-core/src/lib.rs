//! EmoLearn Core Library
//!
//! Data and state behind the mood-adaptive learning demo.
//!
//! ## Overview
//!
//! A learner picks how they feel from five emotions; the dashboard then shows
//! copy registered for that emotion. All recommendations, progress metrics
//! and achievements are static.
//!
//! - [`emotion`]: the closed emotion catalog
//! - [`content`]: emotion to content bundle lookup, with a default fallback
//! - [`dashboard`]: the full dashboard model including placeholder widgets
//! - [`session`]: the two-screen state machine and auto-advance timer
//!
//! ## Quick Start
//!
//! ```
//! use emolearn_core::{EmotionId, Screen, Session};
//!
//! let mut session = Session::new();
//! session.select(EmotionId::Stressed);
//! session.start();
//!
//! assert_eq!(session.screen(), Screen::Dashboard);
//! let dashboard = session.dashboard().unwrap();
//! assert_eq!(dashboard.content.title, "Gentle Learning");
//! ```

pub mod config;
pub mod content;
pub mod dashboard;
pub mod emotion;
pub mod error;
pub mod icon;
pub mod logging;
pub mod session;

// Re-exports
pub use config::{SessionConfig, DEFAULT_ADVANCE_DELAY};
pub use content::{content_for, default_content, lookup, ContentBundle};
pub use dashboard::{
    Achievement, ActivityCard, Dashboard, ProgressMetric, Tone, ACHIEVEMENTS, ACTIVITY_ACTION,
    ACTIVITY_BADGE, ACTIVITY_DURATION, PROGRESS_METRICS,
};
pub use emotion::{emotions, Emotion, EmotionId, EMOTIONS};
pub use error::{EmoError, EmoResult};
pub use icon::Icon;
pub use session::{run_advance_timer, Screen, Session, SessionEvent, Transition};
