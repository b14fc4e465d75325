//! Key overrides: send a different key when a key is pressed together with some modifiers.
//!
//! Follows QMK's key override lifecycle. An override activates when its
//! trigger is pressed with the modifiers held, or when the modifiers go down
//! while the trigger is the last pressed key. It ends when the trigger is
//! released, when the modifiers stop matching (the trigger is registered
//! again), or when another non-modifier key is pressed.
use heapless::Vec;

use crate::event::KeyboardEvent;
use crate::keycode::KeyCode;
use crate::modifier::HidModifiers;

// Max number of key overrides
pub(crate) const KEY_OVERRIDE_MAX_NUM: usize = 8;

/// A key override rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyOverride {
    pub(crate) trigger: KeyCode,
    pub(crate) replacement: KeyCode,
    /// For every modifier kind in the mask, either its left or right key must be held
    pub(crate) trigger_mods: HidModifiers,
    /// None of these modifiers may be held
    pub(crate) negative_mods: HidModifiers,
    /// Modifiers removed from the report while the override is active
    pub(crate) suppressed_mods: HidModifiers,
}

impl KeyOverride {
    pub const fn new(
        trigger: KeyCode,
        replacement: KeyCode,
        trigger_mods: HidModifiers,
        negative_mods: HidModifiers,
        suppressed_mods: HidModifiers,
    ) -> Self {
        Self {
            trigger,
            replacement,
            trigger_mods,
            negative_mods,
            suppressed_mods,
        }
    }

    /// Same as QMK's `ko_make_basic`: the trigger modifiers are suppressed, nothing is excluded.
    pub const fn basic(trigger_mods: HidModifiers, trigger: KeyCode, replacement: KeyCode) -> Self {
        Self::new(trigger, replacement, trigger_mods, HidModifiers::new(), trigger_mods)
    }

    pub fn trigger(&self) -> KeyCode {
        self.trigger
    }

    pub fn replacement(&self) -> KeyCode {
        self.replacement
    }

    /// Whether pressing `key` while `held` modifiers are down fires this override
    pub fn matches(&self, key: KeyCode, held: HidModifiers) -> bool {
        key == self.trigger && held.satisfies(self.trigger_mods) && (held & self.negative_mods).is_empty()
    }
}

/// The key registered at a matrix position has to change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct KeySwap {
    pub(crate) row: u8,
    pub(crate) col: u8,
    /// The key to register instead, `KeyCode::No` releases the position
    pub(crate) key: KeyCode,
}

/// A held non-modifier key
#[derive(Clone, Copy, Debug)]
struct HeldKey {
    row: u8,
    col: u8,
    key: KeyCode,
}

impl HeldKey {
    fn is_at(&self, event: KeyboardEvent) -> bool {
        self.row == event.row && self.col == event.col
    }
}

/// Runtime state of all key overrides. At most one override is active at a time.
pub(crate) struct KeyOverrides {
    overrides: Vec<KeyOverride, KEY_OVERRIDE_MAX_NUM>,
    /// The override in effect and the trigger it replaced
    active: Option<(KeyOverride, HeldKey)>,
    /// Most recently pressed non-modifier key, while it's still held
    last_key_down: Option<HeldKey>,
}

impl KeyOverrides {
    pub(crate) fn new(overrides: &[KeyOverride]) -> Self {
        let mut list = Vec::new();
        for o in overrides.iter().take(KEY_OVERRIDE_MAX_NUM) {
            list.push(*o).ok();
        }
        Self {
            overrides: list,
            active: None,
            last_key_down: None,
        }
    }

    fn find(&self, key: KeyCode, held: HidModifiers) -> Option<KeyOverride> {
        self.overrides.iter().find(|o| o.matches(key, held)).copied()
    }

    /// A non-modifier key is pressed somewhere else: the active override ends and
    /// its replacement must be released.
    pub(crate) fn on_other_key_press(&mut self, event: KeyboardEvent) -> Option<KeySwap> {
        let (_, trigger) = self.active?;
        if trigger.is_at(event) {
            return None;
        }
        self.active = None;
        debug!("Key override ended by another key press");
        Some(KeySwap {
            row: trigger.row,
            col: trigger.col,
            key: KeyCode::No,
        })
    }

    /// Returns the key to register for a non-modifier key press.
    pub(crate) fn on_press(&mut self, key: KeyCode, event: KeyboardEvent, held: HidModifiers) -> KeyCode {
        let pressed = HeldKey {
            row: event.row,
            col: event.col,
            key,
        };
        self.last_key_down = Some(pressed);

        match self.find(key, held) {
            Some(o) => {
                debug!("Key override {:?} -> {:?}", o.trigger, o.replacement);
                self.active = Some((o, pressed));
                o.replacement
            }
            None => key,
        }
    }

    /// A key is released. Ends the override if its trigger is released.
    pub(crate) fn on_release(&mut self, event: KeyboardEvent) {
        if self.last_key_down.is_some_and(|k| k.is_at(event)) {
            self.last_key_down = None;
        }
        if self.active.is_some_and(|(_, trigger)| trigger.is_at(event)) {
            self.active = None;
        }
    }

    /// The held modifiers changed. Activates or deactivates an override on the
    /// held trigger key.
    pub(crate) fn on_modifiers_changed(&mut self, held: HidModifiers) -> Option<KeySwap> {
        if let Some((o, trigger)) = self.active {
            if o.matches(trigger.key, held) {
                return None;
            }
            debug!("Key override {:?} released, registering the trigger again", o.trigger);
            self.active = None;
            return Some(KeySwap {
                row: trigger.row,
                col: trigger.col,
                key: trigger.key,
            });
        }

        let last = self.last_key_down?;
        let o = self.find(last.key, held)?;
        debug!("Key override {:?} -> {:?}", o.trigger, o.replacement);
        self.active = Some((o, last));
        Some(KeySwap {
            row: last.row,
            col: last.col,
            key: o.replacement,
        })
    }

    /// Modifiers that must not appear in the report right now
    pub(crate) fn suppressed(&self) -> HidModifiers {
        match self.active {
            Some((o, _)) => o.suppressed_mods,
            None => HidModifiers::new(),
        }
    }
}
