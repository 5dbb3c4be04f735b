//! Debounced press counting shared between an interrupt and the main loop.
//!
//! Raw edges arrive either from an asynchronous interrupt handler or from a
//! polled level comparison ([`EdgeDetector`]). Either way they funnel into a
//! [`PressCounter`], which suppresses bounce inside the configured window and
//! keeps a monotonically increasing press count.

use crate::led::Level;
use crate::time::{Duration, Instant};
use core::cell::Cell;
use critical_section::Mutex;

#[derive(Debug, Clone, Copy)]
struct CounterState {
    count: u32,
    last_accepted: Option<Instant>,
}

/// Debounced event counter.
///
/// The count and the debounce anchor form a single shared resource, written
/// by the event callback and read by the control step, so both live behind a
/// critical section and are always updated together. `new` is `const` and the
/// type is `Sync`, so a counter can sit in a `static` and be touched directly
/// from an interrupt handler.
///
/// The first edge ever seen is always accepted. After that, an edge is
/// accepted only when at least one debounce window has elapsed since the last
/// accepted edge; the anchor then advances by exactly one window rather than
/// to the edge's own timestamp, so acceptance does not drift with handler
/// latency. Suppressed edges are silent no-ops - bounce is expected, not
/// exceptional.
pub struct PressCounter {
    state: Mutex<Cell<CounterState>>,
    window: Duration,
}

impl PressCounter {
    /// Creates a counter with the given debounce window.
    pub const fn new(window: Duration) -> Self {
        Self {
            state: Mutex::new(Cell::new(CounterState {
                count: 0,
                last_accepted: None,
            })),
            window,
        }
    }

    /// Feeds one raw edge observed at `now`.
    ///
    /// Safe to call from interrupt context.
    ///
    /// # Returns
    /// * `Some(count)` - The edge was accepted; `count` is the new total.
    /// * `None` - The edge fell inside the debounce window and was dropped.
    pub fn on_edge(&self, now: Instant) -> Option<u32> {
        let accepted = critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();

            let anchor = match state.last_accepted {
                None => now,
                Some(last) if now.elapsed_since(last) >= self.window => {
                    last.wrapping_add(self.window)
                }
                Some(_) => return None,
            };

            state.count = state.count.wrapping_add(1);
            state.last_accepted = Some(anchor);
            cell.set(state);
            Some(state.count)
        });

        #[cfg(feature = "defmt")]
        if let Some(count) = accepted {
            defmt::info!("button pressed {=u32} times", count);
        }

        accepted
    }

    /// Returns the current press count.
    pub fn count(&self) -> u32 {
        critical_section::with(|cs| self.state.borrow(cs).get().count)
    }

    /// Resets the press count to zero.
    ///
    /// The debounce anchor is retained, so bounce from the press that caused
    /// the reset is still suppressed. Called by the control step when the
    /// mode cycle returns to its base mode; never called from interrupt
    /// context.
    pub fn reset(&self) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.count = 0;
            cell.set(state);
        });
    }

    /// Returns the configured debounce window.
    pub fn window(&self) -> Duration {
        self.window
    }
}

/// Synthesizes press edges from polled level reads.
///
/// For platforms without an edge interrupt: read the input level once per
/// control step and pass it to [`update`](EdgeDetector::update), which
/// reports a press exactly when the level transitions from inactive to the
/// configured active level.
#[derive(Debug, Clone, Copy)]
pub struct EdgeDetector {
    active: Level,
    previous: Level,
}

impl EdgeDetector {
    /// Creates a detector for a button whose pressed state reads `active`.
    ///
    /// The previous level starts at the released state, so a button held
    /// down at boot registers one press on the first poll.
    pub const fn new(active: Level) -> Self {
        Self {
            active,
            previous: active.inverted(),
        }
    }

    /// Feeds one polled level read. Returns `true` on a press edge.
    pub fn update(&mut self, level: Level) -> bool {
        let pressed = self.previous != self.active && level == self.active;
        self.previous = level;
        pressed
    }
}
