//! # kbd67 types
//!
//! Fundamental type definitions shared by the kbd67 keymap firmware.
//!
//! ## Modules
//!
//! - [`action`] - Actions stored in the keymap (key presses, layer operations)
//! - [`keycode`] - Keycode definitions: HID keyboard page, consumer keys, mouse keys and user keycodes
//! - [`modifier`] - HID modifier bits and compact modifier combinations

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
