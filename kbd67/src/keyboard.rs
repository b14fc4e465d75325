use core::cell::RefCell;

use embassy_futures::select::{Either, select};
use embassy_futures::yield_now;
use embassy_time::{Duration, Instant, Timer};
use usbd_hid::descriptor::{KeyboardReport, MediaKeyboardReport, MouseReport};

use crate::action::{Action, KeyAction};
use crate::boot;
use crate::channel::{KEY_EVENT_CHANNEL, KEYBOARD_REPORT_CHANNEL};
use crate::config::BehaviorConfig;
use crate::event::KeyboardEvent;
use crate::hid::Report;
use crate::jiggler::{JiggleDirection, JiggleTransition, Jiggler};
use crate::key_override::{KeyOverrides, KeySwap};
use crate::keycode::KeyCode;
use crate::keymap::KeyMap;
use crate::light::Indicator;
use crate::modifier::{HidModifiers, ModifierCombination};
use crate::processor::Runnable;

impl<I: Indicator, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Runnable
    for Keyboard<'_, I, ROW, COL, NUM_LAYER>
{
    /// Main keyboard processing task.
    ///
    /// Key events are processed as soon as they arrive, the periodic scan runs
    /// every `scan_interval` in between.
    async fn run(&mut self) {
        let mut next_scan = Instant::now() + self.scan_interval;
        loop {
            match select(KEY_EVENT_CHANNEL.receive(), Timer::at(next_scan)).await {
                Either::First(event) => self.process_event(event).await,
                Either::Second(_) => {
                    let now = Instant::now();
                    self.scan(now).await;
                    next_scan = now + self.scan_interval;
                }
            }
        }
    }
}

pub struct Keyboard<'a, I: Indicator, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Keymap
    pub(crate) keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,

    /// Jiggler feedback light
    indicator: I,

    jiggler: Jiggler,

    key_overrides: KeyOverrides,

    /// The held modifiers for the keyboard hid report
    held_modifiers: HidModifiers,

    /// The held keys for the keyboard hid report, except the modifiers
    held_keycodes: [KeyCode; 6],

    /// Registered key position
    registered_keys: [Option<(u8, u8)>; 6],

    /// Internal mouse report buf
    mouse_report: MouseReport,

    /// Internal media report buf
    media_report: MediaKeyboardReport,

    /// Pointer distance of a single mouse key step
    mouse_key_move_delta: i8,

    scan_interval: Duration,
}

impl<'a, I: Indicator, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, I, ROW, COL, NUM_LAYER> {
    pub fn new(keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>, indicator: I, behavior: &BehaviorConfig) -> Self {
        Keyboard {
            keymap,
            indicator,
            // The jiggle timer starts at power up
            jiggler: Jiggler::new(&behavior.jiggle, Instant::from_ticks(0)),
            key_overrides: KeyOverrides::new(&behavior.key_override.overrides),
            held_modifiers: HidModifiers::new(),
            held_keycodes: [KeyCode::No; 6],
            registered_keys: [None; 6],
            mouse_report: MouseReport {
                buttons: 0,
                x: 0,
                y: 0,
                wheel: 0,
                pan: 0,
            },
            media_report: MediaKeyboardReport { usage_id: 0 },
            mouse_key_move_delta: behavior.mouse.move_delta,
            scan_interval: behavior.scan_interval,
        }
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub fn jiggler(&self) -> &Jiggler {
        &self.jiggler
    }

    async fn send_report(&self, report: Report) {
        KEYBOARD_REPORT_CHANNEL.send(report).await
    }

    /// Process key changes at (row, col)
    pub async fn process_event(&mut self, event: KeyboardEvent) {
        let key_action = self.keymap.borrow_mut().get_action_with_layer_cache(event);

        // The jiggler only observes the event, it's always processed as usual afterwards
        if let Some(transition) = self.jiggler.process_action(key_action, event.pressed) {
            self.indicator.toggle();
            match transition {
                JiggleTransition::Activated => info!("Mouse jiggler on"),
                JiggleTransition::Deactivated => info!("Mouse jiggler off"),
            }
        }

        self.process_key_action(key_action, event).await;
    }

    /// Periodic hook, moves the pointer when the jiggler asks for it.
    pub async fn scan(&mut self, now: Instant) {
        if let Some(direction) = self.jiggler.poll(now) {
            debug!("Jiggle {:?}", direction);
            let x = match direction {
                JiggleDirection::Left => -self.mouse_key_move_delta,
                JiggleDirection::Right => self.mouse_key_move_delta,
            };
            // A single step, same as tapping the mouse key
            self.send_report(Report::MouseReport(MouseReport {
                buttons: 0,
                x,
                y: 0,
                wheel: 0,
                pan: 0,
            }))
            .await;
            self.send_report(Report::MouseReport(MouseReport {
                buttons: 0,
                x: 0,
                y: 0,
                wheel: 0,
                pan: 0,
            }))
            .await;
        }
    }

    async fn process_key_action(&mut self, key_action: KeyAction, event: KeyboardEvent) {
        match key_action {
            KeyAction::No | KeyAction::Transparent => (),
            KeyAction::Single(action) => self.process_key_action_normal(action, event).await,
        }
    }

    async fn process_key_action_normal(&mut self, action: Action, event: KeyboardEvent) {
        match action {
            Action::No => (),
            Action::Key(key) => self.process_action_key(key, event).await,
            Action::Modifier(modifiers) => {
                if event.pressed {
                    self.register_modifiers(modifiers);
                } else {
                    self.unregister_modifiers(modifiers);
                }
                self.update_key_overrides();
                self.send_keyboard_report().await;
            }
            Action::LayerOn(layer_num) => self.process_action_layer_switch(layer_num, event),
            Action::LayerToggle(layer_num) => {
                // Toggle a layer when the key is pressed
                if event.pressed {
                    self.keymap.borrow_mut().toggle_layer(layer_num);
                }
            }
            Action::DefaultLayer(layer_num) => {
                if event.pressed {
                    self.keymap.borrow_mut().set_default_layer(layer_num);
                }
            }
        }
    }

    // process action key
    async fn process_action_key(&mut self, key: KeyCode, event: KeyboardEvent) {
        let key = match key {
            KeyCode::GraveEscape => {
                if (self.held_modifiers & (HidModifiers::SHIFT | HidModifiers::GUI)).is_empty() {
                    KeyCode::Escape
                } else {
                    KeyCode::Grave
                }
            }
            _ => key,
        };

        // Any non-modifier key press ends the active key override
        if event.pressed && !key.is_modifier() {
            if let Some(swap) = self.key_overrides.on_other_key_press(event) {
                self.apply_key_swap(swap);
                if !key.is_basic() {
                    self.send_keyboard_report().await;
                }
            }
        }

        if key.is_consumer() {
            self.process_action_consumer_control(key, event).await;
        } else if key.is_mouse_key() {
            self.process_action_mouse(key, event).await;
        } else if key.is_user() {
            // User keys have no effect of their own
            debug!("User key {:?}, pressed: {}", key, event.pressed);
        } else if key.is_basic() {
            self.process_basic(key, event).await;
        } else if key.is_boot() {
            self.process_boot(key, event);
        } else {
            warn!("Unsupported key: {:?}", key);
        }
    }

    async fn process_basic(&mut self, key: KeyCode, event: KeyboardEvent) {
        if key.is_modifier() {
            if event.pressed {
                self.held_modifiers |= key.to_hid_modifiers();
            } else {
                self.held_modifiers &= !key.to_hid_modifiers();
            }
            self.update_key_overrides();
        } else if event.pressed {
            let key = self.key_overrides.on_press(key, event, self.held_modifiers);
            self.register_keycode(key, event);
        } else {
            self.unregister_keycode(key, event);
            self.key_overrides.on_release(event);
        }

        self.send_keyboard_report().await;
    }

    /// Re-check the key overrides after the held modifiers changed
    fn update_key_overrides(&mut self) {
        if let Some(swap) = self.key_overrides.on_modifiers_changed(self.held_modifiers) {
            self.apply_key_swap(swap);
        }
    }

    /// Replace the key registered at the swapped position
    fn apply_key_swap(&mut self, swap: KeySwap) {
        let event = KeyboardEvent::key(swap.row, swap.col, true);
        if swap.key == KeyCode::No {
            if let Some(index) = self.registered_slot(event) {
                self.held_keycodes[index] = KeyCode::No;
                self.registered_keys[index] = None;
            }
        } else {
            self.register_keycode(swap.key, event);
        }
    }

    /// Send the keyboard report, with the modifiers of active key overrides removed
    async fn send_keyboard_report(&mut self) {
        let modifiers = self.held_modifiers & !self.key_overrides.suppressed();

        self.send_report(Report::KeyboardReport(KeyboardReport {
            modifier: modifiers.into_bits(),
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|k| k as u8),
        }))
        .await;

        // Yield once after sending the report to channel
        yield_now().await;
    }

    /// Process layer switch action.
    fn process_action_layer_switch(&mut self, layer_num: u8, event: KeyboardEvent) {
        // Change layer state only when the key's state is changed
        if event.pressed {
            self.keymap.borrow_mut().activate_layer(layer_num);
        } else {
            self.keymap.borrow_mut().deactivate_layer(layer_num);
        }
    }

    /// Process consumer control action. Consumer control keys are keys in hid consumer page, such as media keys.
    async fn process_action_consumer_control(&mut self, key: KeyCode, event: KeyboardEvent) {
        self.media_report.usage_id = if event.pressed {
            key.as_consumer_usage_id().unwrap_or(0)
        } else {
            0
        };

        self.send_report(Report::MediaKeyboardReport(self.media_report)).await;
        self.media_report.usage_id = 0;
        yield_now().await;
    }

    /// Process mouse key action.
    async fn process_action_mouse(&mut self, key: KeyCode, event: KeyboardEvent) {
        // Reference(qmk): https://github.com/qmk/qmk_firmware/blob/382c3bd0bd49fc0d53358f45477c48f5ae47f2ff/quantum/mousekey.c#L410
        if event.pressed {
            match key {
                KeyCode::MouseUp => self.mouse_report.y = -self.mouse_key_move_delta,
                KeyCode::MouseDown => self.mouse_report.y = self.mouse_key_move_delta,
                KeyCode::MouseLeft => self.mouse_report.x = -self.mouse_key_move_delta,
                KeyCode::MouseRight => self.mouse_report.x = self.mouse_key_move_delta,
                KeyCode::MouseWheelUp => self.mouse_report.wheel = 1,
                KeyCode::MouseWheelDown => self.mouse_report.wheel = -1,
                KeyCode::MouseWheelLeft => self.mouse_report.pan = -1,
                KeyCode::MouseWheelRight => self.mouse_report.pan = 1,
                _ => {
                    if let Some(bit) = Self::mouse_button_bit(key) {
                        self.mouse_report.buttons |= bit;
                    }
                }
            }
        } else {
            match key {
                KeyCode::MouseUp | KeyCode::MouseDown => self.mouse_report.y = 0,
                KeyCode::MouseLeft | KeyCode::MouseRight => self.mouse_report.x = 0,
                KeyCode::MouseWheelUp | KeyCode::MouseWheelDown => self.mouse_report.wheel = 0,
                KeyCode::MouseWheelLeft | KeyCode::MouseWheelRight => self.mouse_report.pan = 0,
                _ => {
                    if let Some(bit) = Self::mouse_button_bit(key) {
                        self.mouse_report.buttons &= !bit;
                    }
                }
            }
        }
        self.send_report(Report::MouseReport(self.mouse_report)).await;
        yield_now().await;
    }

    fn mouse_button_bit(key: KeyCode) -> Option<u8> {
        match key {
            KeyCode::MouseBtn1 => Some(1 << 0),
            KeyCode::MouseBtn2 => Some(1 << 1),
            KeyCode::MouseBtn3 => Some(1 << 2),
            KeyCode::MouseBtn4 => Some(1 << 3),
            KeyCode::MouseBtn5 => Some(1 << 4),
            _ => None,
        }
    }

    fn process_boot(&mut self, key: KeyCode, event: KeyboardEvent) {
        // When releasing the key, process the boot action
        if !event.pressed {
            match key {
                KeyCode::Bootloader => boot::jump_to_bootloader(),
                KeyCode::Reboot => boot::reboot_keyboard(),
                _ => (),
            }
        }
    }

    fn registered_slot(&self, event: KeyboardEvent) -> Option<usize> {
        self.registered_keys
            .iter()
            .position(|k| *k == Some((event.row, event.col)))
    }

    /// Register a key to be sent in hid report.
    fn register_keycode(&mut self, key: KeyCode, event: KeyboardEvent) {
        // Reuse the slot of this position, otherwise take the first free one
        let slot = self
            .registered_slot(event)
            .or_else(|| self.held_keycodes.iter().position(|&k| k == KeyCode::No));

        match slot {
            Some(index) => {
                self.held_keycodes[index] = key;
                self.registered_keys[index] = Some((event.row, event.col));
            }
            None => warn!("No free slot for {:?} in the keyboard report", key),
        }
    }

    /// Unregister a key from hid report.
    fn unregister_keycode(&mut self, key: KeyCode, event: KeyboardEvent) {
        // The key sent on press could differ from `key` because of overrides, so look up by position first
        let slot = self
            .registered_slot(event)
            .or_else(|| self.held_keycodes.iter().position(|&k| k == key));

        if let Some(index) = slot {
            self.held_keycodes[index] = KeyCode::No;
            self.registered_keys[index] = None;
        }
    }

    /// Register a modifier combination to be sent in hid report.
    fn register_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers |= modifiers.to_hid_modifiers();
    }

    /// Unregister a modifier combination from hid report.
    fn unregister_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers &= !modifiers.to_hid_modifiers();
    }
}
