//! Keycode definitions.
//!
//! Keycodes use a flat `u16` space numbered after QMK: the HID keyboard page
//! lives in `0x00..=0xE7`, special firmware keys in `0x7C00..`, and user
//! keycodes start at `0x7E40` (QMK's `SAFE_RANGE` for keymaps).
use strum::FromRepr;

use crate::modifier::HidModifiers;

/// KeyCode is the internal representation of all keycodes, keyboard operations, etc.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    No = 0x0000,
    /// Keyboard roll over error, too many keys are pressed simultaneously, not a physical key.
    ErrorRollover = 0x0001,
    /// Keyboard post fail error, not a physical key.
    PostFail = 0x0002,
    /// An undefined error, not a physical key.
    ErrorUndefined = 0x0003,
    /// `a` and `A`
    A = 0x0004,
    /// `b` and `B`
    B = 0x0005,
    /// `c` and `C`
    C = 0x0006,
    /// `d` and `D`
    D = 0x0007,
    /// `e` and `E`
    E = 0x0008,
    /// `f` and `F`
    F = 0x0009,
    /// `g` and `G`
    G = 0x000A,
    /// `h` and `H`
    H = 0x000B,
    /// `i` and `I`
    I = 0x000C,
    /// `j` and `J`
    J = 0x000D,
    /// `k` and `K`
    K = 0x000E,
    /// `l` and `L`
    L = 0x000F,
    /// `m` and `M`
    M = 0x0010,
    /// `n` and `N`
    N = 0x0011,
    /// `o` and `O`
    O = 0x0012,
    /// `p` and `P`
    P = 0x0013,
    /// `q` and `Q`
    Q = 0x0014,
    /// `r` and `R`
    R = 0x0015,
    /// `s` and `S`
    S = 0x0016,
    /// `t` and `T`
    T = 0x0017,
    /// `u` and `U`
    U = 0x0018,
    /// `v` and `V`
    V = 0x0019,
    /// `w` and `W`
    W = 0x001A,
    /// `x` and `X`
    X = 0x001B,
    /// `y` and `Y`
    Y = 0x001C,
    /// `z` and `Z`
    Z = 0x001D,
    /// `1` and `!`
    Kc1 = 0x001E,
    /// `2` and `@`
    Kc2 = 0x001F,
    /// `3` and `#`
    Kc3 = 0x0020,
    /// `4` and `$`
    Kc4 = 0x0021,
    /// `5` and `%`
    Kc5 = 0x0022,
    /// `6` and `^`
    Kc6 = 0x0023,
    /// `7` and `&`
    Kc7 = 0x0024,
    /// `8` and `*`
    Kc8 = 0x0025,
    /// `9` and `(`
    Kc9 = 0x0026,
    /// `0` and `)`
    Kc0 = 0x0027,
    /// `Enter`
    Enter = 0x0028,
    /// `Esc`
    Escape = 0x0029,
    /// `Backspace`
    Backspace = 0x002A,
    /// `Tab`
    Tab = 0x002B,
    /// `Space`
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    /// Non-US `#` and `~`
    NonusHash = 0x0032,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `~` and `` ` ``
    Grave = 0x0035,
    /// `,` and `<`
    Comma = 0x0036,
    /// `.` and `>`
    Dot = 0x0037,
    /// `/` and `?`
    Slash = 0x0038,
    /// `CapsLock`
    CapsLock = 0x0039,
    /// `F1`
    F1 = 0x003A,
    /// `F2`
    F2 = 0x003B,
    /// `F3`
    F3 = 0x003C,
    /// `F4`
    F4 = 0x003D,
    /// `F5`
    F5 = 0x003E,
    /// `F6`
    F6 = 0x003F,
    /// `F7`
    F7 = 0x0040,
    /// `F8`
    F8 = 0x0041,
    /// `F9`
    F9 = 0x0042,
    /// `F10`
    F10 = 0x0043,
    /// `F11`
    F11 = 0x0044,
    /// `F12`
    F12 = 0x0045,
    /// `PrintScreen`
    PrintScreen = 0x0046,
    /// `ScrollLock`
    ScrollLock = 0x0047,
    /// `Pause`
    Pause = 0x0048,
    /// `Insert`
    Insert = 0x0049,
    /// `Home`
    Home = 0x004A,
    /// `PageUp`
    PageUp = 0x004B,
    /// `Delete`
    Delete = 0x004C,
    /// `End`
    End = 0x004D,
    /// `PageDown`
    PageDown = 0x004E,
    /// `Right`
    Right = 0x004F,
    /// `Left`
    Left = 0x0050,
    /// `Down`
    Down = 0x0051,
    /// `Up`
    Up = 0x0052,
    /// `NumLock`
    NumLock = 0x0053,
    /// Non-US `\` and `|`
    NonusBackslash = 0x0064,
    /// `Application`, the context menu key
    Application = 0x0065,
    // Consumer page, sent in media reports
    AudioMute = 0x00A8,
    AudioVolUp = 0x00A9,
    AudioVolDown = 0x00AA,
    MediaNextTrack = 0x00AB,
    MediaPrevTrack = 0x00AC,
    MediaStop = 0x00AD,
    MediaPlayPause = 0x00AE,
    // Mouse keys
    MouseUp = 0x00CD,
    MouseDown = 0x00CE,
    MouseLeft = 0x00CF,
    MouseRight = 0x00D0,
    MouseBtn1 = 0x00D1,
    MouseBtn2 = 0x00D2,
    MouseBtn3 = 0x00D3,
    MouseBtn4 = 0x00D4,
    MouseBtn5 = 0x00D5,
    MouseWheelUp = 0x00D9,
    MouseWheelDown = 0x00DA,
    MouseWheelLeft = 0x00DB,
    MouseWheelRight = 0x00DC,
    // Modifiers
    /// Left Control
    LCtrl = 0x00E0,
    /// Left Shift
    LShift = 0x00E1,
    /// Left Alt
    LAlt = 0x00E2,
    /// Left GUI
    LGui = 0x00E3,
    /// Right Control
    RCtrl = 0x00E4,
    /// Right Shift
    RShift = 0x00E5,
    /// Right Alt
    RAlt = 0x00E6,
    /// Right GUI
    RGui = 0x00E7,
    /// Jump to the bootloader, QMK `QK_BOOT`
    Bootloader = 0x7C00,
    /// Reset the MCU, QMK `QK_REBOOT`
    Reboot = 0x7C01,
    /// `Esc`, or `` ` `` when shift or gui is held
    GraveEscape = 0x7C16,
    // User keycodes, free for keymap-specific behaviors
    User0 = 0x7E40,
    User1 = 0x7E41,
    User2 = 0x7E42,
    User3 = 0x7E43,
    User4 = 0x7E44,
    User5 = 0x7E45,
    User6 = 0x7E46,
    User7 = 0x7E47,
    User8 = 0x7E48,
    User9 = 0x7E49,
    User10 = 0x7E4A,
    User11 = 0x7E4B,
    User12 = 0x7E4C,
    User13 = 0x7E4D,
    User14 = 0x7E4E,
    User15 = 0x7E4F,
}

impl KeyCode {
    /// Returns `true` if the keycode is a basic keycode that goes into the keyboard report
    pub fn is_basic(self) -> bool {
        self <= KeyCode::Application || self.is_modifier()
    }

    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        KeyCode::LCtrl <= self && self <= KeyCode::RGui
    }

    /// Returns `true` if the keycode is a keycode in consumer page
    pub fn is_consumer(self) -> bool {
        KeyCode::AudioMute <= self && self <= KeyCode::MediaPlayPause
    }

    /// Returns `true` if the keycode is a mouse keycode
    pub fn is_mouse_key(self) -> bool {
        KeyCode::MouseUp <= self && self <= KeyCode::MouseWheelRight
    }

    /// Returns `true` if the keycode restarts the MCU
    pub fn is_boot(self) -> bool {
        matches!(self, KeyCode::Bootloader | KeyCode::Reboot)
    }

    /// Returns `true` if the keycode is a user keycode
    pub fn is_user(self) -> bool {
        KeyCode::User0 <= self && self <= KeyCode::User15
    }

    /// Modifier bit of this key in the HID report, empty for non-modifier keys
    pub fn to_hid_modifiers(self) -> HidModifiers {
        if self.is_modifier() {
            HidModifiers::from_bits(1 << (self as u16 - KeyCode::LCtrl as u16))
        } else {
            HidModifiers::new()
        }
    }

    /// Usage id in the HID consumer page
    pub fn as_consumer_usage_id(self) -> Option<u16> {
        match self {
            KeyCode::AudioMute => Some(0x00E2),
            KeyCode::AudioVolUp => Some(0x00E9),
            KeyCode::AudioVolDown => Some(0x00EA),
            KeyCode::MediaNextTrack => Some(0x00B5),
            KeyCode::MediaPrevTrack => Some(0x00B6),
            KeyCode::MediaStop => Some(0x00B7),
            KeyCode::MediaPlayPause => Some(0x00CD),
            _ => None,
        }
    }
}

impl From<u16> for KeyCode {
    fn from(value: u16) -> Self {
        KeyCode::from_repr(value).unwrap_or(KeyCode::No)
    }
}
