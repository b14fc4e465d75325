//! Mouse jiggler.
//!
//! While active, the pointer is nudged one step left or right every
//! `interval`, alternating the direction, so the host never sees the input
//! device as idle. A dedicated key toggles jiggling and pressing any other key
//! stops it.
use embassy_time::{Duration, Instant};

use crate::action::{Action, KeyAction};
use crate::config::JiggleConfig;
use crate::keycode::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JiggleDirection {
    Left,
    Right,
}

impl JiggleDirection {
    pub fn flip(self) -> Self {
        match self {
            JiggleDirection::Left => JiggleDirection::Right,
            JiggleDirection::Right => JiggleDirection::Left,
        }
    }
}

/// State change caused by a key press. Each one flips the indicator light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JiggleTransition {
    Activated,
    Deactivated,
}

pub struct Jiggler {
    toggle_key: KeyCode,
    active: bool,
    /// Direction of the next move
    direction: JiggleDirection,
    interval: Duration,
    last_fired: Instant,
}

impl Jiggler {
    /// Create an inactive jiggler. `now` is the reference point of the first interval.
    pub fn new(config: &JiggleConfig, now: Instant) -> Self {
        Self {
            toggle_key: config.toggle_key,
            active: false,
            direction: config.initial_direction,
            interval: config.interval,
            last_fired: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Direction of the next move
    pub fn direction(&self) -> JiggleDirection {
        self.direction
    }

    /// Observe a key event. The event is never consumed, normal key processing always continues.
    pub fn process_action(&mut self, action: KeyAction, pressed: bool) -> Option<JiggleTransition> {
        if !pressed {
            return None;
        }

        if action == KeyAction::Single(Action::Key(self.toggle_key)) {
            self.active = !self.active;
        } else if self.active {
            self.active = false;
        } else {
            return None;
        }

        if self.active {
            Some(JiggleTransition::Activated)
        } else {
            Some(JiggleTransition::Deactivated)
        }
    }

    /// Called on every scan. Returns the direction to move when a move is due.
    pub fn poll(&mut self, now: Instant) -> Option<JiggleDirection> {
        if !self.active || now.saturating_duration_since(self.last_fired) <= self.interval {
            return None;
        }

        self.last_fired = now;
        let fired = self.direction;
        self.direction = self.direction.flip();
        Some(fired)
    }
}
