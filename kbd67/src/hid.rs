//! Reports produced by the key processor.
//!
//! The reports are plain `usbd-hid` descriptors. Writing them to USB or BLE is
//! done by the board's hid writer, which drains [`crate::channel::KEYBOARD_REPORT_CHANNEL`].
use usbd_hid::descriptor::{KeyboardReport, MediaKeyboardReport, MouseReport};

pub enum Report {
    /// Normal keyboard hid report
    KeyboardReport(KeyboardReport),
    /// Mouse hid report
    MouseReport(MouseReport),
    /// Media keyboard report
    MediaKeyboardReport(MediaKeyboardReport),
}
