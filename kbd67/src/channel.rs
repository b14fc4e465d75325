//! Exposed channels which connect the matrix scanner, the key processor and the hid writer

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};

use crate::event::KeyboardEvent;
use crate::hid::Report;
use crate::{EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex};

/// Channel for key events, filled by the matrix scanner
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyboardEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for keyboard reports from the key processor to the hid writer
pub static KEYBOARD_REPORT_CHANNEL: Channel<RawMutex, Report, REPORT_CHANNEL_SIZE> = Channel::new();
