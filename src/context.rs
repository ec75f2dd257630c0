//! Session context for EmoLearn.
//!
//! The root controller owns the [`Session`]; screens reach it through
//! `use_context` instead of prop drilling.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let session = use_session();
//! let config = use_session_config();
//! select_emotion(session, config.advance_delay, EmotionId::Calm);
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use emolearn_core::{run_advance_timer, EmotionId, Session, SessionConfig, Transition};

/// Get the session configuration set from command line args.
pub fn get_session_config() -> SessionConfig {
    crate::get_session_config()
}

/// Hook to access the session signal from context.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Hook to access the startup configuration from context.
pub fn use_session_config() -> SessionConfig {
    use_context::<SessionConfig>()
}

/// Record a pick and schedule the auto-advance to the dashboard.
///
/// The timer is not cancelled by later picks; it reads the session when it
/// fires.
pub fn select_emotion(mut session: Signal<Session>, delay: Duration, emotion: EmotionId) {
    let transition = session.write().select(emotion);
    if let Transition::Selected(_) = transition {
        spawn(async move {
            run_advance_timer(delay, move || session.write().advance()).await;
        });
    }
}

/// Confirm "start", skipping the remaining delay.
pub fn start_session(mut session: Signal<Session>) {
    session.write().start();
}

/// "Change Mood": back to the selection screen.
pub fn reset_session(mut session: Signal<Session>) {
    session.write().reset();
}
