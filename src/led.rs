//! Digital output abstraction for status LEDs.

/// Logical level of an output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Channel off.
    Off,
    /// Channel on.
    On,
}

impl Level {
    /// Returns the opposite level.
    pub const fn inverted(self) -> Level {
        match self {
            Level::Off => Level::On,
            Level::On => Level::Off,
        }
    }
}

/// Trait for abstracting a single LED output.
///
/// Implement this for your output hardware (GPIO, shift register, etc.) to
/// allow the engine to drive it. `Level` is the logical channel state;
/// electrical polarity (active-high vs. active-low wiring) is the
/// implementation's concern. Handle any hardware errors internally - this
/// method cannot fail.
pub trait Led {
    /// Drives the LED to the given logical level.
    fn set(&mut self, level: Level);
}

/// Adapters for `embedded-hal` output pins.
#[cfg(feature = "embedded-hal")]
mod hal {
    use super::{Led, Level};
    use embedded_hal::digital::OutputPin;

    /// An output pin whose electrical high level means [`Level::On`].
    pub struct ActiveHigh<P>(pub P);

    /// An output pin whose electrical low level means [`Level::On`].
    ///
    /// Dev-board status LEDs are commonly wired between the pin and the
    /// supply rail, making them active-low.
    pub struct ActiveLow<P>(pub P);

    impl<P: OutputPin> Led for ActiveHigh<P> {
        fn set(&mut self, level: Level) {
            let _ = match level {
                Level::On => self.0.set_high(),
                Level::Off => self.0.set_low(),
            };
        }
    }

    impl<P: OutputPin> Led for ActiveLow<P> {
        fn set(&mut self, level: Level) {
            let _ = match level {
                Level::On => self.0.set_low(),
                Level::Off => self.0.set_high(),
            };
        }
    }
}

#[cfg(feature = "embedded-hal")]
pub use hal::{ActiveHigh, ActiveLow};
