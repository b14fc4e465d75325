//! Modifier bit sets.
//!
//! [`HidModifiers`] mirrors the modifier byte of a boot keyboard report, one bit
//! per physical modifier key. [`ModifierCombination`] is the compact form used in
//! keymaps, where a combination is either entirely left-hand or entirely right-hand.
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;

/// Modifier byte of the HID keyboard report.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl BitOr for HidModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for HidModifiers {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for HidModifiers {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}
impl BitAndAssign for HidModifiers {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
impl BitOrAssign for HidModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl HidModifiers {
    /// Both shift keys, QMK's `MOD_MASK_SHIFT`
    pub const SHIFT: Self = Self::new().with_left_shift(true).with_right_shift(true);
    /// Both ctrl keys
    pub const CTRL: Self = Self::new().with_left_ctrl(true).with_right_ctrl(true);
    /// Both alt keys
    pub const ALT: Self = Self::new().with_left_alt(true).with_right_alt(true);
    /// Both gui keys
    pub const GUI: Self = Self::new().with_left_gui(true).with_right_gui(true);

    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }

    /// Fold left and right bits onto the left half, so that `LShift` and `RShift`
    /// become the same modifier kind.
    pub const fn kinds(self) -> u8 {
        let bits = self.into_bits();
        (bits | (bits >> 4)) & 0x0F
    }

    /// Returns `true` if for every modifier kind present in `required`, at least
    /// one side of that kind is held in `self`.
    pub const fn satisfies(self, required: HidModifiers) -> bool {
        let required = required.kinds();
        self.kinds() & required == required
    }
}

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);

impl ModifierCombination {
    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    pub fn from_hid_modifiers(modifiers: HidModifiers) -> Self {
        Self::new_from(
            modifiers.right_shift() || modifiers.right_ctrl() || modifiers.right_alt() || modifiers.right_gui(),
            modifiers.left_gui() || modifiers.right_gui(),
            modifiers.left_alt() || modifiers.right_alt(),
            modifiers.left_shift() || modifiers.right_shift(),
            modifiers.left_ctrl() || modifiers.right_ctrl(),
        )
    }

    /// Get modifier hid report bits from modifier combination
    pub const fn to_hid_modifiers(self) -> HidModifiers {
        if !self.right() {
            HidModifiers::new()
                .with_left_ctrl(self.ctrl())
                .with_left_shift(self.shift())
                .with_left_alt(self.alt())
                .with_left_gui(self.gui())
        } else {
            HidModifiers::new()
                .with_right_ctrl(self.ctrl())
                .with_right_shift(self.shift())
                .with_right_alt(self.alt())
                .with_right_gui(self.gui())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_mask_accepts_either_side() {
        let left = HidModifiers::new().with_left_shift(true);
        let right = HidModifiers::new().with_right_shift(true);
        let ctrl = HidModifiers::new().with_left_ctrl(true);

        assert!(left.satisfies(HidModifiers::SHIFT));
        assert!(right.satisfies(HidModifiers::SHIFT));
        assert!((left | ctrl).satisfies(HidModifiers::SHIFT));
        assert!(!ctrl.satisfies(HidModifiers::SHIFT));
        assert!(!HidModifiers::new().satisfies(HidModifiers::SHIFT));
    }

    #[test]
    fn test_combination_to_hid() {
        let m = SHIFT | CTRL;
        assert_eq!(m.to_hid_modifiers().into_bits(), 0b0000_0011);
        let m = SHIFT | RIGHT;
        assert_eq!(m.to_hid_modifiers().into_bits(), 0b0010_0000);
        assert_eq!(ModifierCombination::from_hid_modifiers(m.to_hid_modifiers()), m);
    }
}
