//! Session state machine for the root controller.
//!
//! Two screens: [`Screen::Selecting`] (initial) and [`Screen::Dashboard`].
//!
//! ```text
//! Selecting --select(e)--> Selecting   (schedules the auto-advance timer)
//! Selecting --start------> Dashboard   (immediate)
//! Selecting --elapse-----> Dashboard   (timer fired)
//! Dashboard --reset------> Selecting   (selection cleared)
//! ```
//!
//! The timer is never cancelled. When it fires it reads the latest state,
//! so picking another emotion before then only changes which dashboard is
//! shown, and a timer firing on an already-started session does nothing.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::config::SessionConfig;
use crate::dashboard::Dashboard;
use crate::emotion::EmotionId;
use crate::error::{EmoError, EmoResult};

/// Which of the two mutually exclusive screens is visible
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Selecting,
    Dashboard,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Selecting => f.pad("selecting"),
            Screen::Dashboard => f.pad("dashboard"),
        }
    }
}

/// Outcome of feeding an event to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Selection updated; the caller should start the auto-advance timer
    Selected(EmotionId),
    /// Moved from the selection screen to the dashboard
    EnteredDashboard,
    /// Moved from the dashboard back to the selection screen
    ReturnedToSelection,
    /// Event had no effect in the current state
    Ignored,
}

/// User actions and timer ticks that drive the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Select(EmotionId),
    Start,
    Elapse,
    Reset,
}

impl FromStr for SessionEvent {
    type Err = EmoError;

    /// Parses `select:<id>`, `start`, `elapse` and `reset`. An unknown `<id>`
    /// resolves to the default emotion; only unknown verbs are rejected.
    fn from_str(s: &str) -> EmoResult<Self> {
        match s {
            "start" => Ok(SessionEvent::Start),
            "elapse" => Ok(SessionEvent::Elapse),
            "reset" => Ok(SessionEvent::Reset),
            _ => match s.strip_prefix("select:") {
                Some(tag) => Ok(SessionEvent::Select(EmotionId::resolve(tag))),
                None => Err(EmoError::InvalidEvent(s.to_string())),
            },
        }
    }
}

/// Local UI session: the selected emotion and whether the dashboard is open
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    selected: Option<EmotionId>,
    started: bool,
}

impl Session {
    /// Fresh session on the selection screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Session built from startup configuration. An initial mood opens the
    /// dashboard directly.
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.initial_mood {
            Some(mood) => Self {
                selected: Some(mood),
                started: true,
            },
            None => Self::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        if self.started {
            Screen::Dashboard
        } else {
            Screen::Selecting
        }
    }

    pub fn selected(&self) -> Option<EmotionId> {
        self.selected
    }

    /// Whether the "start" confirmation is offered
    pub fn can_start(&self) -> bool {
        !self.started && self.selected.is_some()
    }

    /// Record a pick on the selection screen
    pub fn select(&mut self, emotion: EmotionId) -> Transition {
        if self.started {
            tracing::debug!(%emotion, "Ignoring selection while dashboard is open");
            return Transition::Ignored;
        }
        tracing::debug!(%emotion, previous = ?self.selected, "Emotion selected");
        self.selected = Some(emotion);
        Transition::Selected(emotion)
    }

    /// Explicit "start" confirmation, bypassing the delay
    pub fn start(&mut self) -> Transition {
        self.enter_dashboard("start")
    }

    /// The auto-advance timer fired
    pub fn advance(&mut self) -> Transition {
        self.enter_dashboard("timer")
    }

    /// "Change mood": back to the selection screen with nothing selected
    pub fn reset(&mut self) -> Transition {
        let was_started = self.started;
        self.started = false;
        self.selected = None;
        if was_started {
            tracing::debug!("Session reset");
            Transition::ReturnedToSelection
        } else {
            Transition::Ignored
        }
    }

    pub fn apply(&mut self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::Select(emotion) => self.select(emotion),
            SessionEvent::Start => self.start(),
            SessionEvent::Elapse => self.advance(),
            SessionEvent::Reset => self.reset(),
        }
    }

    /// Dashboard for the current selection, if the dashboard is open
    pub fn dashboard(&self) -> Option<Dashboard> {
        if !self.started {
            return None;
        }
        Some(Dashboard::for_emotion(self.selected.unwrap_or(EmotionId::DEFAULT)))
    }

    fn enter_dashboard(&mut self, trigger: &'static str) -> Transition {
        match (self.started, self.selected) {
            (false, Some(emotion)) => {
                self.started = true;
                tracing::debug!(%emotion, trigger, "Entering dashboard");
                Transition::EnteredDashboard
            }
            _ => Transition::Ignored,
        }
    }
}

/// Wait out the auto-advance delay, then run `fire` against the latest state.
///
/// # Example
///
/// ```ignore
/// if let Transition::Selected(_) = session.select(emotion) {
///     spawn(run_advance_timer(delay, move || session.advance()));
/// }
/// ```
pub async fn run_advance_timer<F>(delay: Duration, fire: F) -> Transition
where
    F: FnOnce() -> Transition,
{
    tokio::time::sleep(delay).await;
    let transition = fire();
    tracing::trace!(?delay, ?transition, "Auto-advance timer fired");
    transition
}
