//! Platform low-power transitions and wake-cause reporting.

use crate::led::Level;

/// The external input that may wake the device from sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WakeSource {
    /// Logical identifier of the wake pin.
    pub pin: u8,
    /// Level on the pin that triggers a wake.
    pub active: Level,
}

/// Platform-reported reason execution resumed after a sleep request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeCause {
    /// The configured external wake pin.
    ExternalPin,
    /// An external signal from a different wake-capable source.
    ExternalPinGroup,
    /// A wake timer.
    Timer,
    /// A touch-sensor event.
    Touchpad,
    /// The low-power coprocessor.
    Coprocessor,
    /// Not attributable to a defined wake source.
    Undetermined,
}

impl WakeCause {
    /// Diagnostic text for this cause.
    pub const fn describe(self) -> &'static str {
        match self {
            WakeCause::ExternalPin => "wakeup caused by external signal on the wake pin",
            WakeCause::ExternalPinGroup => "wakeup caused by external signal on another source",
            WakeCause::Timer => "wakeup caused by timer",
            WakeCause::Touchpad => "wakeup caused by touchpad",
            WakeCause::Coprocessor => "wakeup caused by coprocessor",
            WakeCause::Undetermined => "wakeup not attributable to a defined source",
        }
    }
}

/// Trait for abstracting the platform's low-power controller.
///
/// Sleep entry is assumed to always succeed; there is no error surface here.
pub trait PowerControl {
    /// Enters light sleep with the given wake source armed.
    ///
    /// Blocks until a wake condition is met, then returns the cause the
    /// platform reports for the wake.
    fn enter_light_sleep(&mut self, wake: WakeSource) -> WakeCause;

    /// Enters deep sleep with the given wake source armed.
    ///
    /// Never returns: waking from deep sleep restarts the device, so all
    /// in-memory state is lost and the press count starts over from zero,
    /// the same as a cold boot.
    fn enter_deep_sleep(&mut self, wake: WakeSource) -> !;

    /// Wake cause of the most recent boot.
    ///
    /// Queried once at startup; this is the only place a deep-sleep wake is
    /// observable. Returns [`WakeCause::Undetermined`] after a boot that did
    /// not follow a sleep.
    fn boot_wake_cause(&self) -> WakeCause;
}
