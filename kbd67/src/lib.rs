//! Firmware logic of the KBDfans KBD67 rev2: keymap, a Shift + Backspace key
//! override and a mouse jiggler.
//!
//! The crate is hardware agnostic. The board's matrix scanner pushes
//! [`event::KeyboardEvent`]s into [`channel::KEY_EVENT_CHANNEL`], the
//! [`keyboard::Keyboard`] task turns them into HID reports on
//! [`channel::KEYBOARD_REPORT_CHANNEL`].
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub use kbd67_types::{action, keycode, modifier};

pub mod boot;
pub mod channel;
pub mod config;
mod driver;
pub mod event;
pub mod hid;
pub mod jiggler;
pub mod key_override;
pub mod keyboard;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
pub mod light;
pub mod processor;

pub(crate) type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

pub(crate) const EVENT_CHANNEL_SIZE: usize = 16;
pub(crate) const REPORT_CHANNEL_SIZE: usize = 16;
