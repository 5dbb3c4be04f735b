//! Mode engine with non-blocking timing control.
//!
//! Provides [`ModeEngine`], the control core that re-derives the operating
//! mode from the shared press count on every step and drives the two output
//! channels accordingly. Also defines the blink schedule configuration.

use crate::button::PressCounter;
use crate::led::{Led, Level};
use crate::mode::{Mode, ModeCycle};
use crate::power::{PowerControl, WakeCause, WakeSource};
use crate::time::{Clock, Duration, Instant};

/// Timing of the flash channel while blinking.
///
/// The flash channel is on for `on_duration` at the start of every `cycle`
/// and off for the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkSchedule {
    on_duration: Duration,
    cycle: Duration,
}

/// Blink schedule validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScheduleError {
    /// The on-duration is zero.
    ZeroOnDuration,
    /// The on-duration does not leave room for an off phase.
    OnDurationExceedsCycle,
}

impl core::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScheduleError::ZeroOnDuration => {
                write!(f, "blink on-duration must be non-zero")
            }
            ScheduleError::OnDurationExceedsCycle => {
                write!(f, "blink on-duration must be shorter than the cycle")
            }
        }
    }
}

impl core::error::Error for ScheduleError {}

impl BlinkSchedule {
    /// Creates a validated schedule.
    ///
    /// # Errors
    /// * `ZeroOnDuration` - `on_duration` is zero
    /// * `OnDurationExceedsCycle` - `on_duration` is not shorter than `cycle`
    pub fn new(on_duration: Duration, cycle: Duration) -> Result<Self, ScheduleError> {
        if on_duration == Duration::ZERO {
            return Err(ScheduleError::ZeroOnDuration);
        }
        if on_duration >= cycle {
            return Err(ScheduleError::OnDurationExceedsCycle);
        }
        Ok(Self { on_duration, cycle })
    }

    /// Returns the on-duration.
    pub fn on_duration(self) -> Duration {
        self.on_duration
    }

    /// Returns the total cycle duration.
    pub fn cycle(self) -> Duration {
        self.cycle
    }
}

impl Default for BlinkSchedule {
    /// 50 ms on per 1000 ms cycle.
    fn default() -> Self {
        Self {
            on_duration: crate::DEFAULT_FLASH_ON,
            cycle: crate::DEFAULT_FLASH_CYCLE,
        }
    }
}

/// Static configuration for a [`ModeEngine`].
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Which mode cycle the press count walks through.
    pub cycle: ModeCycle,
    /// Flash channel timing while blinking.
    pub schedule: BlinkSchedule,
    /// Wake source armed before entering either sleep mode.
    pub wake: WakeSource,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cycle: ModeCycle::Basic,
            schedule: BlinkSchedule::default(),
            wake: WakeSource {
                pin: 0,
                active: Level::Off,
            },
        }
    }
}

/// Result of one control step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Outputs were serviced for the given mode.
    Serviced(Mode),
    /// A light-sleep round trip completed; carries the reported wake cause.
    Woke(WakeCause),
}

/// Anchors for the two blink deadlines.
///
/// Each anchor advances by its own fixed interval when due, rather than
/// jumping to the current time, so a late step does not stretch the cycle.
#[derive(Debug, Clone, Copy)]
struct BlinkTimers {
    off_anchor: Instant,
    on_anchor: Instant,
}

/// Drives two status channels through press-count-selected modes.
///
/// The engine owns the `ready` channel (steady indicator) and the `flash`
/// channel (blink indicator), borrows the platform clock and the shared
/// [`PressCounter`], and holds the platform power controller. Call
/// [`step`](ModeEngine::step) from the main loop as often as possible; all
/// timing is non-blocking elapsed-time comparison, nothing inside waits.
///
/// # Type Parameters
/// * `'a` - Lifetime of the clock and counter references
/// * `C` - Clock implementation type
/// * `A` - Ready channel LED type
/// * `B` - Flash channel LED type
/// * `P` - Power controller type
pub struct ModeEngine<'a, C: Clock, A: Led, B: Led, P: PowerControl> {
    clock: &'a C,
    counter: &'a PressCounter,
    ready: A,
    flash: B,
    power: P,
    config: EngineConfig,
    mode: Option<Mode>,
    timers: BlinkTimers,
    boot_cause: WakeCause,
}

impl<'a, C: Clock, A: Led, B: Led, P: PowerControl> ModeEngine<'a, C, A, B, P> {
    /// Creates an engine with both channels forced off.
    ///
    /// Reads the boot wake cause once, so a restart out of deep sleep is
    /// observable through [`boot_cause`](ModeEngine::boot_cause) even though
    /// the sleep request itself never returned.
    pub fn new(
        clock: &'a C,
        counter: &'a PressCounter,
        mut ready: A,
        mut flash: B,
        power: P,
        config: EngineConfig,
    ) -> Self {
        ready.set(Level::Off);
        flash.set(Level::Off);

        let boot_cause = power.boot_wake_cause();
        #[cfg(feature = "defmt")]
        defmt::info!("boot: {}", boot_cause);

        let now = clock.now();
        Self {
            clock,
            counter,
            ready,
            flash,
            power,
            config,
            mode: None,
            timers: BlinkTimers {
                off_anchor: now,
                on_anchor: now,
            },
            boot_cause,
        }
    }

    /// Runs one iteration of the control loop.
    ///
    /// Re-derives the mode from the current press count and services the
    /// outputs. In the sleep modes this call blocks (light sleep) or never
    /// returns (deep sleep); in every other mode it is non-blocking.
    ///
    /// # Returns
    /// * `StepOutcome::Serviced(mode)` - Normal pass in the given mode
    /// * `StepOutcome::Woke(cause)` - A light sleep was entered and resumed
    pub fn step(&mut self) -> StepOutcome {
        let now = self.clock.now();
        let mode = self.config.cycle.select(self.counter.count());
        let entered = self.mode != Some(mode);
        self.mode = Some(mode);

        match mode {
            Mode::Off => {
                // Base mode doubles as the cycle reset point.
                self.counter.reset();
                self.ready.set(Level::Off);
                self.flash.set(Level::Off);
            }
            Mode::Steady => {
                self.ready.set(Level::On);
                self.flash.set(Level::Off);
            }
            Mode::Blinking => {
                self.ready.set(Level::Off);
                if entered {
                    // Known phase at entry: a blink window starts now.
                    self.flash.set(Level::On);
                    self.timers = BlinkTimers {
                        off_anchor: now,
                        on_anchor: now,
                    };
                } else {
                    self.service_blink(now);
                }
            }
            Mode::LightSleep => {
                self.quiesce();
                #[cfg(feature = "defmt")]
                defmt::info!("entering light sleep");
                let cause = self.power.enter_light_sleep(self.config.wake);
                #[cfg(feature = "defmt")]
                defmt::info!("{=str}", cause.describe());
                return StepOutcome::Woke(cause);
            }
            Mode::DeepSleep => {
                self.quiesce();
                #[cfg(feature = "defmt")]
                defmt::info!("entering deep sleep");
                self.power.enter_deep_sleep(self.config.wake)
            }
        }

        StepOutcome::Serviced(mode)
    }

    /// Advances the flash channel's two deadlines.
    ///
    /// Both deadlines are checked every step, the off deadline first so that
    /// a coincident fire at a cycle boundary leaves the channel on. Late
    /// steps fire each deadline at most once; skipped intervals are not
    /// caught up.
    fn service_blink(&mut self, now: Instant) {
        if now.elapsed_since(self.timers.off_anchor) >= self.config.schedule.on_duration() {
            self.flash.set(Level::Off);
            self.timers.off_anchor = self
                .timers
                .off_anchor
                .wrapping_add(self.config.schedule.on_duration());
        }
        if now.elapsed_since(self.timers.on_anchor) >= self.config.schedule.cycle() {
            self.flash.set(Level::On);
            self.timers.on_anchor = self
                .timers
                .on_anchor
                .wrapping_add(self.config.schedule.cycle());
        }
    }

    /// Forces both channels off before a sleep transition.
    fn quiesce(&mut self) {
        self.ready.set(Level::Off);
        self.flash.set(Level::Off);
    }

    /// Returns the mode serviced by the most recent step, if any.
    pub fn current_mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Returns the wake cause observed at construction.
    pub fn boot_cause(&self) -> WakeCause {
        self.boot_cause
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
