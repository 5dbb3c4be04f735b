//! Shared test infrastructure for mode-cycle integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use mode_cycle::{Clock, Duration, Instant, Led, Level, PowerControl, WakeCause, WakeSource};

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock clock with controllable time advancement
pub struct MockClock {
    current_time: Cell<Instant>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(Instant::from_millis(0)),
        }
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            current_time: Cell::new(start),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: Duration) {
        let current = self.current_time.get();
        self.current_time.set(current.wrapping_add(duration));
    }

    pub fn set_time(&self, time: Instant) {
        self.current_time.set(time);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED
// ============================================================================

pub struct LedTrace {
    pub level: Level,
    pub transitions: heapless::Vec<Level, 32>,
}

/// Mock LED backed by a shared trace handle.
///
/// Clones share the same trace, so a test can keep a handle while the engine
/// owns the LED. Records level transitions (not redundant writes).
#[derive(Clone)]
pub struct MockLed {
    trace: Rc<RefCell<LedTrace>>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            trace: Rc::new(RefCell::new(LedTrace {
                level: Level::Off,
                transitions: heapless::Vec::new(),
            })),
        }
    }

    pub fn level(&self) -> Level {
        self.trace.borrow().level
    }

    pub fn transitions(&self) -> Vec<Level> {
        self.trace.borrow().transitions.iter().copied().collect()
    }
}

impl Led for MockLed {
    fn set(&mut self, level: Level) {
        let mut trace = self.trace.borrow_mut();
        if trace.level != level {
            let _ = trace.transitions.push(level);
            trace.level = level;
        }
    }
}

// ============================================================================
// Mock Power Controller
// ============================================================================

/// One recorded sleep request, with the channel levels at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepRecord {
    pub wake: WakeSource,
    pub ready_level: Level,
    pub flash_level: Level,
}

/// Mock power controller recording sleep requests.
///
/// Holds handles to the channel mocks so each request captures the output
/// levels in effect at the moment the platform call arrives. Deep sleep
/// never returns on real hardware; the mock diverges by panicking, which
/// tests catch with `catch_unwind`.
pub struct MockPower {
    pub light_cause: WakeCause,
    pub boot_cause: WakeCause,
    ready: MockLed,
    flash: MockLed,
    pub light_sleeps: Rc<RefCell<Vec<SleepRecord>>>,
    pub deep_sleeps: Rc<RefCell<Vec<SleepRecord>>>,
}

impl MockPower {
    pub fn new(ready: &MockLed, flash: &MockLed) -> Self {
        Self {
            light_cause: WakeCause::ExternalPin,
            boot_cause: WakeCause::Undetermined,
            ready: ready.clone(),
            flash: flash.clone(),
            light_sleeps: Rc::new(RefCell::new(Vec::new())),
            deep_sleeps: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn record(&self, wake: WakeSource) -> SleepRecord {
        SleepRecord {
            wake,
            ready_level: self.ready.level(),
            flash_level: self.flash.level(),
        }
    }
}

impl PowerControl for MockPower {
    fn enter_light_sleep(&mut self, wake: WakeSource) -> WakeCause {
        let record = self.record(wake);
        self.light_sleeps.borrow_mut().push(record);
        self.light_cause
    }

    fn enter_deep_sleep(&mut self, wake: WakeSource) -> ! {
        let record = self.record(wake);
        self.deep_sleeps.borrow_mut().push(record);
        panic!("deep sleep entered");
    }

    fn boot_wake_cause(&self) -> WakeCause {
        self.boot_cause
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const WINDOW: Duration = Duration::from_millis(150);

pub fn ms(millis: u32) -> Duration {
    Duration::from_millis(millis)
}

pub fn at(millis: u32) -> Instant {
    Instant::from_millis(millis)
}
