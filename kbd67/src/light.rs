//! Indicator light used as feedback for the mouse jiggler.
//!
//! The state is never persisted: after a restart the light is off, same as the
//! jiggler.
use embedded_hal::digital::OutputPin;

use crate::driver::gpio::OutputController;

/// A light which can be switched on and off
pub trait Indicator {
    /// Invert the light
    fn toggle(&mut self);

    /// Whether the light is currently on
    fn is_on(&self) -> bool;
}

/// Indicator for boards without a light, only tracks the state
#[derive(Debug, Default)]
pub struct NoIndicator {
    on: bool,
}

impl Indicator for NoIndicator {
    fn toggle(&mut self) {
        self.on = !self.on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Indicator driving a single LED, or the enable line of an RGB strip, through a GPIO
pub struct PinIndicator<P: OutputPin> {
    pin: OutputController<P>,
    on: bool,
}

impl<P: OutputPin> PinIndicator<P> {
    /// Create a new indicator, the light is switched off immediately
    pub fn new(pin: P, low_active: bool) -> Self {
        let mut pin = OutputController::new(pin, low_active);
        pin.deactivate();
        Self { pin, on: false }
    }
}

impl<P: OutputPin> Indicator for PinIndicator<P> {
    fn toggle(&mut self) {
        if self.on {
            self.pin.deactivate();
        } else {
            self.pin.activate();
        }
        self.on = !self.on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod test {
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    use super::*;

    #[test]
    fn test_pin_indicator_high_active() {
        let expectations = [
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ];
        let pin = PinMock::new(&expectations);
        let mut handle = pin.clone();

        let mut indicator = PinIndicator::new(pin, false);
        assert!(!indicator.is_on());
        indicator.toggle();
        assert!(indicator.is_on());
        indicator.toggle();
        assert!(!indicator.is_on());

        handle.done();
    }

    #[test]
    fn test_pin_indicator_low_active() {
        let expectations = [Transaction::set(State::High), Transaction::set(State::Low)];
        let pin = PinMock::new(&expectations);
        let mut handle = pin.clone();

        let mut indicator = PinIndicator::new(pin, true);
        indicator.toggle();
        assert!(indicator.is_on());

        handle.done();
    }

    #[test]
    fn test_no_indicator() {
        let mut indicator = NoIndicator::default();
        indicator.toggle();
        assert!(indicator.is_on());
        indicator.toggle();
        assert!(!indicator.is_on());
    }
}
