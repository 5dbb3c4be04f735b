//! Millisecond time types and the clock abstraction.
//!
//! Timestamps come from a free-running millisecond counter that wraps at the
//! `u32` boundary. All elapsed-time math goes through [`Instant::elapsed_since`],
//! which uses wrapping subtraction so timer comparisons stay correct across
//! the wrap. `Instant` intentionally has no `Ord` impl; absolute comparisons
//! of wrapping timestamps are meaningless.

/// A span of time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration(u32);

impl Duration {
    /// Zero duration constant.
    pub const ZERO: Self = Duration(0);

    /// Creates a duration from milliseconds.
    pub const fn from_millis(millis: u32) -> Self {
        Duration(millis)
    }

    /// Returns the duration in milliseconds.
    pub const fn as_millis(self) -> u32 {
        self.0
    }
}

/// A point in time on the wrapping millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// Creates an instant from a raw millisecond counter value.
    pub const fn from_millis(millis: u32) -> Self {
        Instant(millis)
    }

    /// Returns the raw millisecond counter value.
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Time elapsed since `earlier`.
    ///
    /// Wrapping-safe: gives the correct span as long as less than a full
    /// counter period has passed between the two instants.
    pub const fn elapsed_since(self, earlier: Instant) -> Duration {
        Duration(self.0.wrapping_sub(earlier.0))
    }

    /// Advances the instant by `duration`, wrapping at the counter boundary.
    pub const fn wrapping_add(self, duration: Duration) -> Instant {
        Instant(self.0.wrapping_add(duration.0))
    }
}

/// Trait for abstracting the platform's monotonic millisecond clock.
pub trait Clock {
    /// Returns the current time instant.
    fn now(&self) -> Instant;
}
