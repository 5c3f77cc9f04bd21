// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clock abstraction: totally ordered time values with an "unset" sentinel.
//!
//! A [`TickClock`] supplies exactly what the timer state machines need from a
//! host and nothing more: a `now()` accessor, a sentinel value that never
//! equals any real reading, and the clock-specific arithmetic for deadlines
//! and spans. Two concrete clocks are provided:
//!
//! - [`SimClock`]: simulation time, advanced explicitly by the host. It can
//!   pause (simply stop advancing), accelerate (advance by scaled deltas),
//!   or jump discontinuously on scene loads via [`SimClock::jump_to`].
//! - [`MonotonicClock`] (`std` feature): wall-clock time measured from an
//!   epoch captured at construction. It never runs backward.

/// A totally ordered clock with a reserved "unset" sentinel.
///
/// `Time` doubles as the duration type: periods and spans are expressed in
/// the same unit as instants. The two provided clocks use `f64` seconds and
/// [`core::time::Duration`] respectively.
///
/// # Contract
///
/// - [`unset`](Self::unset) must never compare equal to any value returned
///   by [`now`](Self::now) or produced by [`offset`](Self::offset) from a
///   real reading.
/// - [`now`](Self::now) readings within one host tick must be
///   non-decreasing for [`MonotonicClock`]-like clocks; [`SimClock`]-like
///   clocks may jump arbitrarily between ticks but hold still within one.
pub trait TickClock {
    /// Totally ordered time value, also used for periods and spans.
    type Time: Copy + PartialOrd;

    /// The current reading.
    fn now(&self) -> Self::Time;

    /// The sentinel standing for "not started".
    fn unset(&self) -> Self::Time;

    /// `t + by`, with clock-specific overflow behavior.
    fn offset(&self, t: Self::Time, by: Self::Time) -> Self::Time;

    /// `later - earlier`, with clock-specific underflow behavior.
    ///
    /// For [`SimClock`] this is a plain signed difference and may be
    /// negative. For [`MonotonicClock`] it saturates at zero.
    fn span(&self, later: Self::Time, earlier: Self::Time) -> Self::Time;
}

/// Simulation time, advanced explicitly by the host.
///
/// Readings are non-negative `f64` seconds. The sentinel is
/// [`SimClock::UNSET`] (`-1.0`), which no valid reading can equal.
///
/// # Example
///
/// ```rust
/// use tickwise_timing::{SimClock, TickClock};
///
/// let mut clock = SimClock::new();
/// assert_eq!(clock.now(), 0.0);
///
/// clock.advance(0.02);
/// clock.advance(0.02);
/// assert_eq!(clock.now(), 0.04);
///
/// // Scene load: simulation time resets discontinuously.
/// clock.jump_to(0.0);
/// assert_eq!(clock.now(), 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimClock {
    now: f64,
}

impl SimClock {
    /// The sentinel reading standing for "not started".
    pub const UNSET: f64 = -1.0;

    /// Creates a clock at simulation time zero.
    #[must_use]
    pub fn new() -> Self {
        Self { now: 0.0 }
    }

    /// Creates a clock at the given non-negative simulation time.
    #[must_use]
    pub fn at(now: f64) -> Self {
        debug_assert!(now >= 0.0, "simulation time must be non-negative");
        Self { now }
    }

    /// Advances the clock by `dt` seconds.
    ///
    /// Pausing is modeled by simply not advancing; acceleration by advancing
    /// with scaled deltas.
    pub fn advance(&mut self, dt: f64) {
        debug_assert!(dt >= 0.0, "advance deltas must be non-negative");
        self.now += dt;
    }

    /// Moves the clock to an arbitrary non-negative reading.
    ///
    /// Unlike [`advance`](Self::advance) this may move time backward, which
    /// models scene loads and warp resets. Timers holding deadlines from
    /// before the jump will simply take longer to elapse; restart them if
    /// that matters to the caller.
    pub fn jump_to(&mut self, now: f64) {
        debug_assert!(now >= 0.0, "simulation time must be non-negative");
        self.now = now;
    }
}

impl TickClock for SimClock {
    type Time = f64;

    fn now(&self) -> f64 {
        self.now
    }

    fn unset(&self) -> f64 {
        Self::UNSET
    }

    fn offset(&self, t: f64, by: f64) -> f64 {
        t + by
    }

    fn span(&self, later: f64, earlier: f64) -> f64 {
        later - earlier
    }
}

/// Wall-clock time measured from an epoch captured at construction.
///
/// Readings are [`core::time::Duration`]s since the epoch, so they are
/// totally ordered and never run backward. The sentinel is
/// [`Duration::MAX`](core::time::Duration::MAX), unreachable by any real
/// process lifetime; as a consequence, the "remaining" span of an unstarted
/// timer on this clock is a meaninglessly large value rather than a
/// meaningless negative one.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Creates a clock whose epoch is "now".
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TickClock for MonotonicClock {
    type Time = core::time::Duration;

    fn now(&self) -> core::time::Duration {
        self.epoch.elapsed()
    }

    fn unset(&self) -> core::time::Duration {
        core::time::Duration::MAX
    }

    fn offset(&self, t: core::time::Duration, by: core::time::Duration) -> core::time::Duration {
        t.saturating_add(by)
    }

    fn span(&self, later: core::time::Duration, earlier: core::time::Duration) -> core::time::Duration {
        later.saturating_sub(earlier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_clock_starts_at_zero() {
        let clock = SimClock::new();
        assert_eq!(clock.now(), 0.0);
    }

    #[test]
    fn sim_clock_advances_by_deltas() {
        let mut clock = SimClock::new();
        clock.advance(1.5);
        clock.advance(0.5);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn sim_clock_jump_can_move_backward() {
        let mut clock = SimClock::at(100.0);
        clock.jump_to(3.0);
        assert_eq!(clock.now(), 3.0);
    }

    #[test]
    fn sim_sentinel_never_equals_a_reading() {
        let clock = SimClock::new();
        assert_ne!(clock.unset(), clock.now());
        assert!(clock.unset() < clock.now());
    }

    #[test]
    fn sim_span_is_signed() {
        let clock = SimClock::new();
        assert_eq!(clock.span(1.0, 4.0), -3.0);
        assert_eq!(clock.span(4.0, 1.0), 3.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn monotonic_span_saturates_at_zero() {
        use core::time::Duration;

        let clock = MonotonicClock::new();
        let a = Duration::from_secs(1);
        let b = Duration::from_secs(4);
        assert_eq!(clock.span(a, b), Duration::ZERO);
        assert_eq!(clock.span(b, a), Duration::from_secs(3));
    }

    #[cfg(feature = "std")]
    #[test]
    fn monotonic_sentinel_offset_does_not_wrap() {
        use core::time::Duration;

        let clock = MonotonicClock::new();
        let near_max = Duration::MAX - Duration::from_secs(1);
        assert_eq!(clock.offset(near_max, Duration::from_secs(5)), Duration::MAX);
    }
}
