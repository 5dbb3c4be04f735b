//! Operating modes and the press-count dispatch that selects them.

/// Operating mode of the engine.
///
/// Never stored as authoritative state; always recomputed from the live
/// press count via [`ModeCycle::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// All outputs off. Selecting this mode resets the press count.
    Off,
    /// Ready channel held on, flash channel off.
    Steady,
    /// Flash channel blinking on its configured schedule.
    Blinking,
    /// Enter light sleep; execution resumes in place after wake.
    LightSleep,
    /// Enter deep sleep; the device restarts on wake.
    DeepSleep,
}

/// The fixed sequence of modes the press count cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeCycle {
    /// Three modes: off, steady, blinking.
    Basic,
    /// Five modes: the basic three plus light and deep sleep.
    LowPower,
}

/// Divisor dispatch for the low-power cycle, evaluated in priority order.
///
/// The divisors overlap (e.g. 15 divides by both 5 and 3), so order is part
/// of the contract: the first matching entry wins. The table is deliberately
/// kept as an explicit list rather than derived from a partition.
const LOW_POWER_DISPATCH: &[(u32, Mode)] = &[
    (7, Mode::Off),
    (5, Mode::DeepSleep),
    (3, Mode::LightSleep),
    (2, Mode::Blinking),
];

impl ModeCycle {
    /// Maps a press count to its operating mode.
    ///
    /// Pure and deterministic. The basic cycle is a clean partition of
    /// `count % 3`; the low-power cycle tests the count against each divisor
    /// of the dispatch table in order, falling through to `Steady`.
    pub fn select(self, count: u32) -> Mode {
        match self {
            ModeCycle::Basic => match count % 3 {
                0 => Mode::Off,
                1 => Mode::Steady,
                _ => Mode::Blinking,
            },
            ModeCycle::LowPower => {
                for &(divisor, mode) in LOW_POWER_DISPATCH {
                    if count % divisor == 0 {
                        return mode;
                    }
                }
                Mode::Steady
            }
        }
    }
}
