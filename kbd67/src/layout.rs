//! Default keymap of the KBDfans KBD67 rev2, a 65% board with a 5x15 matrix.
//!
//! Layer 0 is a standard ANSI 65% layout, layer 1 is reached by holding `Fn`
//! and carries the function row, media keys, bootloader and the jiggler toggle
//! on the space bar.
use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::key_override::KeyOverride;
use crate::keycode::KeyCode;
use crate::modifier::HidModifiers;
use crate::{a, k, layer, mo};

pub const ROW: usize = 5;
pub const COL: usize = 15;
pub const NUM_LAYER: usize = 2;

/// Custom keycode which toggles the mouse jiggler
pub const MOUSE_JIGGLE: KeyCode = KeyCode::User0;

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        layer!([
            [k!(GraveEscape), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace), k!(Home)],
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Backslash), k!(End)],
            [k!(CapsLock), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), a!(No), k!(Enter), k!(PageUp)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), a!(No), k!(RShift), k!(Up), k!(PageDown)],
            [k!(LCtrl), k!(LGui), k!(LAlt), a!(No), a!(No), a!(No), k!(Space), a!(No), a!(No), k!(RAlt), mo!(1), k!(RCtrl), k!(Left), k!(Down), k!(Right)]
        ]),
        layer!([
            [k!(Bootloader), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), a!(Transparent), k!(PrintScreen)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(AudioMute)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), k!(AudioVolUp)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(Transparent), k!(MediaStop), k!(AudioVolDown)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), k!(User0), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack)]
        ]),
    ]
}

/// Behavior of this keyboard: Shift + Backspace sends Delete, everything else is default
pub fn get_behavior_config() -> BehaviorConfig {
    let mut behavior = BehaviorConfig::default();
    behavior.jiggle.toggle_key = MOUSE_JIGGLE;
    if behavior
        .key_override
        .overrides
        .push(KeyOverride::basic(HidModifiers::SHIFT, KeyCode::Backspace, KeyCode::Delete))
        .is_err()
    {
        error!("Too many key overrides");
    }
    behavior
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::KeyboardEvent;
    use crate::keymap::KeyMap;

    #[test]
    fn test_default_keymap_positions() {
        let layers = get_default_keymap();
        assert_eq!(layers[0][0][0], k!(GraveEscape));
        assert_eq!(layers[0][0][13], k!(Backspace));
        assert_eq!(layers[0][4][10], mo!(1));
        assert_eq!(layers[1][4][6], k!(User0));
        assert_eq!(layers[1][0][0], k!(Bootloader));
        // Unpopulated positions are `No` on both layers
        assert_eq!(layers[0][2][12], a!(No));
        assert_eq!(layers[1][2][12], a!(No));
    }

    #[test]
    fn test_function_layer_falls_through() {
        let mut layers = get_default_keymap();
        let mut keymap = KeyMap::new(&mut layers);
        keymap.activate_layer(1);

        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(1, 1, true)), k!(Q));
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 13, true)), k!(Backspace));
        assert_eq!(keymap.get_action_with_layer_cache(KeyboardEvent::key(0, 1, true)), k!(F1));
    }

    #[test]
    fn test_behavior_config() {
        let behavior = get_behavior_config();
        assert_eq!(behavior.jiggle.toggle_key, MOUSE_JIGGLE);
        assert_eq!(behavior.key_override.overrides.len(), 1);
        let o = behavior.key_override.overrides[0];
        assert_eq!(o.trigger(), KeyCode::Backspace);
        assert_eq!(o.replacement(), KeyCode::Delete);
    }
}
