#![no_std]

//! A `no_std` library for cycling embedded status LEDs through
//! button-selected modes.
//!
//! Each accepted button press advances a counter; the counter selects one of
//! a fixed set of operating modes (off, steady, blinking, and optionally
//! light/deep sleep); a non-blocking engine drives two output channels to
//! match. All hardware access goes through small traits, so the whole state
//! machine runs unmodified on host tests.
//!
//! # Core Concepts
//!
//! - **`PressCounter`**: Debounced press counting, shared between an interrupt
//!   handler and the main loop
//! - **`EdgeDetector`**: Synthesizes press edges from polled level reads
//! - **`ModeCycle`**: Maps the press count to a `Mode` via fixed-priority
//!   divisor dispatch
//! - **`ModeEngine`**: Non-blocking control core driving the `ready` and
//!   `flash` channels
//! - **`Led`**: Trait to implement for your output hardware
//! - **`Clock`**: Trait to implement for your millisecond timing system
//! - **`PowerControl`**: Trait to implement for your platform's sleep modes
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use mode_cycle::{
//!     BlinkSchedule, Clock, Duration, EngineConfig, Instant, Led, Level,
//!     ModeCycle, ModeEngine, PowerControl, PressCounter, WakeCause, WakeSource,
//! };
//!
//! struct SysClock(Cell<u32>);
//!
//! impl Clock for SysClock {
//!     fn now(&self) -> Instant {
//!         Instant::from_millis(self.0.get())
//!     }
//! }
//!
//! struct Pin(Level);
//!
//! impl Led for Pin {
//!     fn set(&mut self, level: Level) {
//!         self.0 = level;
//!     }
//! }
//!
//! struct Power;
//!
//! impl PowerControl for Power {
//!     fn enter_light_sleep(&mut self, _wake: WakeSource) -> WakeCause {
//!         WakeCause::ExternalPin
//!     }
//!     fn enter_deep_sleep(&mut self, _wake: WakeSource) -> ! {
//!         loop {}
//!     }
//!     fn boot_wake_cause(&self) -> WakeCause {
//!         WakeCause::Undetermined
//!     }
//! }
//!
//! let clock = SysClock(Cell::new(0));
//! let counter = PressCounter::new(Duration::from_millis(350));
//! let config = EngineConfig {
//!     cycle: ModeCycle::Basic,
//!     schedule: BlinkSchedule::new(
//!         Duration::from_millis(50),
//!         Duration::from_millis(1000),
//!     )
//!     .unwrap(),
//!     wake: WakeSource { pin: 0, active: Level::Off },
//! };
//! let mut engine = ModeEngine::new(
//!     &clock,
//!     &counter,
//!     Pin(Level::Off),
//!     Pin(Level::Off),
//!     Power,
//!     config,
//! );
//!
//! // Raw edges arrive from an interrupt handler or a polled input.
//! counter.on_edge(clock.now());
//! engine.step();
//! ```

pub mod button;
pub mod engine;
pub mod led;
pub mod mode;
pub mod power;
pub mod time;

pub use button::{EdgeDetector, PressCounter};
pub use engine::{BlinkSchedule, EngineConfig, ModeEngine, ScheduleError, StepOutcome};
pub use led::{Led, Level};
pub use mode::{Mode, ModeCycle};
pub use power::{PowerControl, WakeCause, WakeSource};
pub use time::{Clock, Duration, Instant};

#[cfg(feature = "embedded-hal")]
pub use led::{ActiveHigh, ActiveLow};

/// Default debounce window between accepted presses.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(350);

/// Default flash channel on-duration within one blink cycle.
pub const DEFAULT_FLASH_ON: Duration = Duration::from_millis(50);

/// Default total blink cycle duration.
pub const DEFAULT_FLASH_CYCLE: Duration = Duration::from_millis(1000);
