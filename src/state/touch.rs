// Pending swipe sessions, keyed by touch identifier.
use std::collections::HashMap;

use crate::model::{self, Direction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchStart {
    pub screen_x: f64,
    pub screen_y: f64,
}

/// Tracks each finger from touchstart to touchend/touchcancel. Sessions are
/// removed on both paths so an abandoned touch never leaves a stale entry.
#[derive(Default, Debug, Clone)]
pub struct TouchSessions {
    pending: HashMap<i32, TouchStart>,
}

impl TouchSessions {
    pub fn begin(&mut self, id: i32, screen_x: f64, screen_y: f64) {
        self.pending.insert(id, TouchStart { screen_x, screen_y });
    }

    /// Consumes the session and resolves the swipe. A touchend for an
    /// identifier we never saw (or already cancelled) resolves to nothing.
    pub fn finish(&mut self, id: i32, screen_x: f64, screen_y: f64) -> Option<Direction> {
        let start = self.pending.remove(&id)?;
        let dx = screen_x - start.screen_x;
        let dy = screen_y - start.screen_y;
        model::direction_for_swipe(dx, dy)
    }

    pub fn cancel(&mut self, id: i32) {
        self.pending.remove(&id);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_swipe_resolves_next() {
        let mut sessions = TouchSessions::default();
        sessions.begin(0, 100.0, 100.0);
        assert_eq!(sessions.finish(0, 50.0, 100.0), Some(Direction::Next));
        assert!(sessions.is_empty());
    }

    #[test]
    fn right_swipe_resolves_prev() {
        let mut sessions = TouchSessions::default();
        sessions.begin(0, 100.0, 100.0);
        assert_eq!(sessions.finish(0, 150.0, 100.0), Some(Direction::Prev));
    }

    #[test]
    fn vertical_swipe_resolves_nothing() {
        let mut sessions = TouchSessions::default();
        sessions.begin(0, 100.0, 100.0);
        assert_eq!(sessions.finish(0, 110.0, 160.0), None);
        assert!(sessions.is_empty());
    }

    #[test]
    fn short_swipe_resolves_nothing() {
        let mut sessions = TouchSessions::default();
        sessions.begin(0, 100.0, 100.0);
        assert_eq!(sessions.finish(0, 120.0, 100.0), None);
    }

    #[test]
    fn finish_is_consuming() {
        let mut sessions = TouchSessions::default();
        sessions.begin(0, 100.0, 100.0);
        assert_eq!(sessions.finish(0, 30.0, 100.0), Some(Direction::Next));
        assert_eq!(sessions.finish(0, 30.0, 100.0), None);
    }

    #[test]
    fn unknown_identifier_is_a_noop() {
        let mut sessions = TouchSessions::default();
        assert_eq!(sessions.finish(7, 0.0, 0.0), None);
        sessions.cancel(7);
    }

    #[test]
    fn cancel_discards_the_pending_session() {
        let mut sessions = TouchSessions::default();
        sessions.begin(0, 100.0, 100.0);
        sessions.cancel(0);
        assert!(sessions.is_empty());
        assert_eq!(sessions.finish(0, 200.0, 100.0), None);
    }

    #[test]
    fn concurrent_touches_are_independent() {
        let mut sessions = TouchSessions::default();
        sessions.begin(0, 100.0, 100.0);
        sessions.begin(1, 300.0, 100.0);
        sessions.cancel(0);
        assert_eq!(sessions.finish(1, 200.0, 100.0), Some(Direction::Next));
        assert!(sessions.is_empty());
    }
}
