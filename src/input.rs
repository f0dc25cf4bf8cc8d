//! Input handling: folds crossterm key events into the held left/right state
//! the game samples each frame.
//!
//! Terminals that support the keyboard enhancement protocol report real
//! press/release pairs, so a direction stays held until its release event.
//! Everywhere else only presses and auto-repeats arrive; there a direction
//! counts as held until the repeat stream goes quiet for `HOLD_DECAY_MS`.

use crate::catch::logic::HeldInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// How long a direction stays held after the last press/repeat event when
/// the terminal cannot report key release. Longer than a typical key-repeat
/// period so the stream reads as continuous.
pub const HOLD_DECAY_MS: u64 = 150;

/// Deadline sentinel for "held until an explicit release event".
const UNTIL_RELEASE: u64 = u64::MAX;

/// Tracks which directions are currently held.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldTracker {
    /// Whether the terminal delivers release events.
    release_events: bool,
    /// Deadline (ms) until which each direction counts as held.
    left_until: Option<u64>,
    right_until: Option<u64>,
}

impl HeldTracker {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            left_until: None,
            right_until: None,
        }
    }

    /// Feed one key event. `now_ms` is the caller's monotonic clock.
    pub fn handle_key(&mut self, key: &KeyEvent, now_ms: u64) {
        let release_events = self.release_events;
        let slot = match key.code {
            KeyCode::Left => &mut self.left_until,
            KeyCode::Right => &mut self.right_until,
            _ => return,
        };

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                *slot = Some(if release_events {
                    UNTIL_RELEASE
                } else {
                    now_ms + HOLD_DECAY_MS
                });
            }
            KeyEventKind::Release => {
                *slot = None;
            }
        }
    }

    /// Sample the held state at `now_ms`.
    pub fn held(&self, now_ms: u64) -> HeldInput {
        HeldInput {
            left: is_held(self.left_until, now_ms),
            right: is_held(self.right_until, now_ms),
        }
    }
}

fn is_held(until: Option<u64>, now_ms: u64) -> bool {
    until.is_some_and(|deadline| now_ms < deadline)
}
