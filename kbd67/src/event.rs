//! Events consumed by the key processor.

/// A key state change at a matrix position, produced by the (external) matrix scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyboardEvent {
    pub const fn key(row: u8, col: u8, pressed: bool) -> Self {
        Self { row, col, pressed }
    }
}
