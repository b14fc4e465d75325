use embassy_time::Duration;
use heapless::Vec;

use crate::jiggler::JiggleDirection;
use crate::key_override::{KEY_OVERRIDE_MAX_NUM, KeyOverride};
use crate::keycode::KeyCode;

/// Config for configurable action behavior
#[derive(Clone, Debug)]
pub struct BehaviorConfig {
    pub jiggle: JiggleConfig,
    pub key_override: KeyOverridesConfig,
    pub mouse: MouseConfig,
    /// How often the periodic scan hook runs when no key event arrives
    pub scan_interval: Duration,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            jiggle: JiggleConfig::default(),
            key_override: KeyOverridesConfig::default(),
            mouse: MouseConfig::default(),
            scan_interval: Duration::from_millis(1),
        }
    }
}

/// Configurations for the mouse jiggler
#[derive(Clone, Copy, Debug)]
pub struct JiggleConfig {
    /// The keycode which toggles jiggling
    pub toggle_key: KeyCode,
    /// Minimum time between two pointer moves
    pub interval: Duration,
    /// Direction of the very first move after power up
    pub initial_direction: JiggleDirection,
}

impl Default for JiggleConfig {
    fn default() -> Self {
        Self {
            toggle_key: KeyCode::User0,
            interval: Duration::from_millis(15000),
            initial_direction: JiggleDirection::Right,
        }
    }
}

/// Config for key overrides
#[derive(Clone, Debug, Default)]
pub struct KeyOverridesConfig {
    pub overrides: Vec<KeyOverride, KEY_OVERRIDE_MAX_NUM>,
}

/// Configurations for mouse functionalities
#[derive(Clone, Copy, Debug)]
pub struct MouseConfig {
    /// Pointer distance of a single mouse key step
    pub move_delta: i8,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self { move_delta: 8 }
    }
}
