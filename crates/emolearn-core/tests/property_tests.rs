//! Property-based tests for content lookup and the session state machine

use proptest::prelude::*;
use emolearn_core::{
    content_for, default_content, lookup, Dashboard, EmotionId, Screen, Session, SessionEvent,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn emotion_strategy() -> impl Strategy<Value = EmotionId> {
    prop::sample::select(EmotionId::ALL.to_vec())
}

/// Raw tags that are not catalog identifiers
fn unknown_tag_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_ -]{0,24}")
        .expect("valid regex")
        .prop_filter("not a catalog id", |s| s.parse::<EmotionId>().is_err())
}

fn event_strategy() -> impl Strategy<Value = SessionEvent> {
    prop_oneof![
        3 => emotion_strategy().prop_map(SessionEvent::Select),
        1 => Just(SessionEvent::Start),
        2 => Just(SessionEvent::Elapse),
        1 => Just(SessionEvent::Reset),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every catalog id renders the bundle registered for it
    #[test]
    fn known_ids_render_their_bundle(id in emotion_strategy()) {
        let mut session = Session::new();
        session.select(id);
        session.start();
        let dashboard = session.dashboard().unwrap();
        prop_assert_eq!(dashboard.content, content_for(id));
        prop_assert_eq!(lookup(id.as_str()), content_for(id));
    }

    /// Anything outside the closed set renders the default bundle
    #[test]
    fn unknown_ids_fall_back(tag in unknown_tag_strategy()) {
        prop_assert_eq!(lookup(&tag), default_content());
        prop_assert_eq!(Dashboard::for_raw(&tag).emotion, EmotionId::DEFAULT);
    }

    /// Whatever the event sequence, an open dashboard always has a selection
    #[test]
    fn started_implies_selected(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut session = Session::new();
        for event in events {
            session.apply(event);
            if session.screen() == Screen::Dashboard {
                prop_assert!(session.selected().is_some());
            }
        }
    }

    /// Reset always lands on an empty selection screen
    #[test]
    fn reset_is_total(events in prop::collection::vec(event_strategy(), 0..20)) {
        let mut session = Session::new();
        for event in events {
            session.apply(event);
        }
        session.apply(SessionEvent::Reset);
        prop_assert_eq!(session.screen(), Screen::Selecting);
        prop_assert_eq!(session.selected(), None);
    }
}
