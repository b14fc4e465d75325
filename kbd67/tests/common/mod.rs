use core::cell::RefCell;

use embassy_futures::block_on;
use embassy_time::Instant;
use kbd67::action::KeyAction;
use kbd67::channel::KEYBOARD_REPORT_CHANNEL;
use kbd67::config::BehaviorConfig;
use kbd67::event::KeyboardEvent;
use kbd67::hid::Report;
use kbd67::keyboard::Keyboard;
use kbd67::keymap::KeyMap;
use kbd67::layout::{COL, NUM_LAYER, ROW, get_behavior_config, get_default_keymap};
use kbd67::light::NoIndicator;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const KC_LCTRL: u8 = 1 << 0;
pub const KC_LSHIFT: u8 = 1 << 1;
pub const KC_RSHIFT: u8 = 1 << 5;

// Matrix positions on the default layout
pub const GRAVE_ESCAPE: (u8, u8) = (0, 0);
pub const KC_1_POS: (u8, u8) = (0, 1);
pub const BACKSPACE: (u8, u8) = (0, 13);
pub const KEY_A: (u8, u8) = (2, 1);
pub const LSHIFT: (u8, u8) = (3, 0);
pub const RSHIFT: (u8, u8) = (3, 12);
pub const LCTRL: (u8, u8) = (4, 0);
pub const SPACE: (u8, u8) = (4, 6);
pub const FN: (u8, u8) = (4, 10);
pub const PLAY_PAUSE: (u8, u8) = (4, 13);

pub type TestKeyboard = Keyboard<'static, NoIndicator, ROW, COL, NUM_LAYER>;

pub fn wrap_keymap<const R: usize, const C: usize, const L: usize>(
    keymap: [[[KeyAction; C]; R]; L],
) -> &'static RefCell<KeyMap<'static, R, C, L>> {
    // Box::leak is acceptable in tests
    let leaked_keymap = Box::leak(Box::new(keymap));
    Box::leak(Box::new(RefCell::new(KeyMap::new(leaked_keymap))))
}

pub fn create_test_keyboard_with_config(config: BehaviorConfig) -> TestKeyboard {
    Keyboard::new(wrap_keymap(get_default_keymap()), NoIndicator::default(), &config)
}

pub fn create_test_keyboard() -> TestKeyboard {
    create_test_keyboard_with_config(get_behavior_config())
}

/// Keyboard on a custom keymap, with the default behavior
pub fn create_keyboard_with_keymap<const R: usize, const C: usize, const L: usize>(
    keymap: [[[KeyAction; C]; R]; L],
) -> Keyboard<'static, NoIndicator, R, C, L> {
    Keyboard::new(wrap_keymap(keymap), NoIndicator::default(), &BehaviorConfig::default())
}

pub fn press<const R: usize, const C: usize, const L: usize>(
    keyboard: &mut Keyboard<'static, NoIndicator, R, C, L>,
    pos: (u8, u8),
) {
    block_on(keyboard.process_event(KeyboardEvent::key(pos.0, pos.1, true)));
}

pub fn release<const R: usize, const C: usize, const L: usize>(
    keyboard: &mut Keyboard<'static, NoIndicator, R, C, L>,
    pos: (u8, u8),
) {
    block_on(keyboard.process_event(KeyboardEvent::key(pos.0, pos.1, false)));
}

pub fn tap<const R: usize, const C: usize, const L: usize>(
    keyboard: &mut Keyboard<'static, NoIndicator, R, C, L>,
    pos: (u8, u8),
) {
    press(keyboard, pos);
    release(keyboard, pos);
}

pub fn scan_at(keyboard: &mut TestKeyboard, millis: u64) {
    block_on(keyboard.scan(Instant::from_millis(millis)));
}

/// Take all reports sent so far
pub fn drain_reports() -> Vec<Report> {
    let mut reports = Vec::new();
    while let Ok(report) = KEYBOARD_REPORT_CHANNEL.try_receive() {
        reports.push(report);
    }
    reports
}

/// (modifier, keycodes) of the keyboard reports sent so far, other reports are dropped
pub fn drain_keyboard_reports() -> Vec<(u8, [u8; 6])> {
    drain_reports()
        .into_iter()
        .filter_map(|r| match r {
            Report::KeyboardReport(report) => Some((report.modifier, report.keycodes)),
            _ => None,
        })
        .collect()
}

/// Horizontal movement of the mouse reports sent so far
pub fn drain_mouse_moves() -> Vec<i8> {
    drain_reports()
        .into_iter()
        .filter_map(|r| match r {
            Report::MouseReport(report) => Some(report.x),
            _ => None,
        })
        .collect()
}
