pub mod common;

use kbd67::action::KeyAction;
use kbd67::boot::reboot_requests;
use kbd67::hid::Report;
use kbd67::modifier::{CTRL, GUI, RIGHT, SHIFT};
use kbd67::{a, df, k, layer, m, tg};
use rusty_fork::rusty_fork_test;

use crate::common::*;

const KC_A: u8 = 0x04;
const KC_B: u8 = 0x05;

const CTRL_SHIFT: (u8, u8) = (0, 0);
const TOGGLE_LAYER: (u8, u8) = (0, 1);
const DEFAULT_LAYER: (u8, u8) = (0, 2);
const MOUSE_RIGHT: (u8, u8) = (0, 3);
const MOUSE_BTN1: (u8, u8) = (0, 4);
const KEY: (u8, u8) = (1, 0);
const WHEEL_UP: (u8, u8) = (1, 1);
const BOOTLOADER: (u8, u8) = (1, 2);
const REBOOT: (u8, u8) = (1, 3);
const RIGHT_GUI: (u8, u8) = (1, 4);

#[rustfmt::skip]
fn keymap() -> [[[KeyAction; 5]; 2]; 2] {
    [
        layer!([
            [m!(CTRL | SHIFT), tg!(1), df!(1), k!(MouseRight), k!(MouseBtn1)],
            [k!(A), k!(MouseWheelUp), k!(Bootloader), k!(Reboot), m!(RIGHT | GUI)]
        ]),
        layer!([
            [a!(Transparent), a!(Transparent), df!(0), k!(MouseUp), a!(Transparent)],
            [k!(B), a!(Transparent), a!(No), a!(No), a!(Transparent)]
        ]),
    ]
}

/// (buttons, x, y, wheel) of the mouse reports sent so far
fn drain_mouse_reports() -> Vec<(u8, i8, i8, i8)> {
    drain_reports()
        .into_iter()
        .filter_map(|r| match r {
            Report::MouseReport(report) => Some((report.buttons, report.x, report.y, report.wheel)),
            _ => None,
        })
        .collect()
}

rusty_fork_test! {
    #[test]
    fn test_modifier_combination_action() {
        let mut keyboard = create_keyboard_with_keymap(keymap());

        press(&mut keyboard, CTRL_SHIFT);
        tap(&mut keyboard, KEY);
        release(&mut keyboard, CTRL_SHIFT);
        tap(&mut keyboard, RIGHT_GUI);

        assert_eq!(
            drain_keyboard_reports(),
            vec![
                (KC_LCTRL | KC_LSHIFT, [0; 6]),
                (KC_LCTRL | KC_LSHIFT, [KC_A, 0, 0, 0, 0, 0]),
                (KC_LCTRL | KC_LSHIFT, [0; 6]),
                (0, [0; 6]),
                (1 << 7, [0; 6]),
                (0, [0; 6]),
            ]
        );
    }

    #[test]
    fn test_layer_toggle_action() {
        let mut keyboard = create_keyboard_with_keymap(keymap());

        tap(&mut keyboard, TOGGLE_LAYER);
        tap(&mut keyboard, KEY);
        // Transparent on layer 1, the same toggle turns the layer off
        tap(&mut keyboard, TOGGLE_LAYER);
        tap(&mut keyboard, KEY);

        assert_eq!(
            drain_keyboard_reports(),
            vec![
                (0, [KC_B, 0, 0, 0, 0, 0]),
                (0, [0; 6]),
                (0, [KC_A, 0, 0, 0, 0, 0]),
                (0, [0; 6]),
            ]
        );
    }

    #[test]
    fn test_default_layer_action() {
        let mut keyboard = create_keyboard_with_keymap(keymap());

        tap(&mut keyboard, DEFAULT_LAYER);
        tap(&mut keyboard, KEY);
        tap(&mut keyboard, DEFAULT_LAYER);
        tap(&mut keyboard, KEY);

        assert_eq!(
            drain_keyboard_reports(),
            vec![
                (0, [KC_B, 0, 0, 0, 0, 0]),
                (0, [0; 6]),
                (0, [KC_A, 0, 0, 0, 0, 0]),
                (0, [0; 6]),
            ]
        );
    }

    #[test]
    fn test_mouse_keys() {
        let mut keyboard = create_keyboard_with_keymap(keymap());

        press(&mut keyboard, MOUSE_RIGHT);
        press(&mut keyboard, MOUSE_BTN1);
        release(&mut keyboard, MOUSE_RIGHT);
        release(&mut keyboard, MOUSE_BTN1);
        tap(&mut keyboard, WHEEL_UP);

        assert_eq!(
            drain_mouse_reports(),
            vec![
                (0, 8, 0, 0),
                (1, 8, 0, 0),
                (1, 0, 0, 0),
                (0, 0, 0, 0),
                (0, 0, 0, 1),
                (0, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn test_mouse_key_on_upper_layer() {
        let mut keyboard = create_keyboard_with_keymap(keymap());

        tap(&mut keyboard, TOGGLE_LAYER);
        tap(&mut keyboard, MOUSE_RIGHT);

        assert_eq!(drain_mouse_reports(), vec![(0, 0, -8, 0), (0, 0, 0, 0)]);
    }

    #[test]
    fn test_boot_keys_act_on_release() {
        let mut keyboard = create_keyboard_with_keymap(keymap());

        press(&mut keyboard, BOOTLOADER);
        assert_eq!(reboot_requests(), 0);
        release(&mut keyboard, BOOTLOADER);
        assert_eq!(reboot_requests(), 1);

        press(&mut keyboard, REBOOT);
        assert_eq!(reboot_requests(), 1);
        release(&mut keyboard, REBOOT);
        assert_eq!(reboot_requests(), 2);

        assert!(drain_reports().is_empty());
    }
}
