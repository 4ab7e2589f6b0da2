//! Core navigation model: directions, key mapping, swipe resolution.
//! Kept free of web-sys so the mapping rules stay unit-testable on any target.

/// Minimum horizontal displacement (in screen units) for a swipe to navigate.
pub const SWIPE_THRESHOLD: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Next,
    Prev,
}

impl Direction {
    /// Id of the element this direction activates. The elements are owned by
    /// the host page, not by the dispatcher.
    pub const fn target_id(self) -> &'static str {
        match self {
            Direction::Up => "nav-up",
            Direction::Next => "nav-next",
            Direction::Prev => "nav-prev",
        }
    }
}

/// Maps a key-release to a navigation direction. Any held modifier suppresses
/// navigation so browser/OS shortcuts keep working.
pub fn direction_for_key(key: &str, meta: bool, alt: bool, ctrl: bool) -> Option<Direction> {
    if meta || alt || ctrl {
        return None;
    }
    match key {
        "ArrowLeft" => Some(Direction::Prev),
        "ArrowRight" => Some(Direction::Next),
        "Escape" => Some(Direction::Up),
        _ => None,
    }
}

/// Resolves a completed touch gesture into a navigation direction.
/// A mostly-vertical movement is a scroll, not a navigation swipe.
pub fn direction_for_swipe(dx: f64, dy: f64) -> Option<Direction> {
    if dy.abs() > dx.abs() {
        return None;
    }
    if dx < -SWIPE_THRESHOLD {
        Some(Direction::Next)
    } else if dx > SWIPE_THRESHOLD {
        Some(Direction::Prev)
    } else {
        None
    }
}
