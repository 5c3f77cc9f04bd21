// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generic timer state machine.
//!
//! A [`Timer`] is a restartable countdown from a fixed period, parametrized
//! by a [`TickClock`]. It has exactly two states: *unstarted* (its deadline
//! holds the clock's sentinel) and *started* (its deadline is the clock
//! reading at start plus the period).
//!
//! Two combinators couple a countdown to an external gating condition:
//!
//! - [`Timer::start_if`] keeps the timer running only while the condition
//!   holds and resets it the moment the condition stops holding.
//! - [`Timer::run_if`] additionally fires an action (and resets) once the
//!   period elapses under a holding condition.
//!
//! Note that [`Timer::time_passed`] auto-starts an unstarted timer as a side
//! effect. This is a deliberate convenience so per-tick callers never need an
//! explicit initialization step; see the method docs.

use core::fmt;

use crate::clock::TickClock;

#[cfg(feature = "std")]
use crate::clock::MonotonicClock;
use crate::clock::SimClock;

/// A timer over simulation time. Supports meaningful [`Timer::remaining`]
/// queries while started.
pub type SimTimer = Timer<SimClock>;

/// A timer over wall-clock time.
#[cfg(feature = "std")]
pub type MonotonicTimer = Timer<MonotonicClock>;

/// A restartable countdown from a fixed period.
///
/// The timer is a plain value type; it never owns its clock. Every method
/// that consults time takes the clock by reference, which keeps state
/// transitions deterministic and trivially testable.
///
/// # Example
///
/// ```rust
/// use tickwise_timing::{SimClock, Timer};
///
/// let mut clock = SimClock::new();
/// let mut timer = Timer::new(&clock, 5.0);
///
/// assert!(!timer.is_started());
/// assert!(timer.start(&clock));
/// assert_eq!(timer.remaining(&clock), 5.0);
///
/// // Starting again is a no-op while running.
/// assert!(!timer.start(&clock));
///
/// clock.advance(5.0);
/// assert!(timer.time_passed(&clock));
/// ```
pub struct Timer<C: TickClock> {
    period: C::Time,
    deadline: C::Time,
    unset: C::Time,
}

impl<C: TickClock> Timer<C> {
    /// Creates an unstarted timer with the given period.
    ///
    /// The clock is only consulted for its sentinel; creation does not read
    /// the current time.
    #[must_use]
    pub fn new(clock: &C, period: C::Time) -> Self {
        let unset = clock.unset();
        Self {
            period,
            deadline: unset,
            unset,
        }
    }

    /// Returns the configured period.
    #[must_use]
    pub fn period(&self) -> C::Time {
        self.period
    }

    /// Replaces the period.
    ///
    /// A running countdown keeps its existing deadline; the new period takes
    /// effect at the next start.
    pub fn set_period(&mut self, period: C::Time) {
        self.period = period;
    }

    /// Returns whether the timer has been started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.deadline != self.unset
    }

    /// Starts the countdown from the current clock reading.
    ///
    /// Returns `false` (leaving the existing deadline untouched) if the
    /// timer is already started.
    pub fn start(&mut self, clock: &C) -> bool {
        if self.is_started() {
            return false;
        }
        self.deadline = clock.offset(clock.now(), self.period);
        true
    }

    /// Unconditionally returns the timer to the unstarted state.
    pub fn reset(&mut self) {
        self.deadline = self.unset;
    }

    /// Resets, then starts: the countdown always (re)starts from "now".
    pub fn restart(&mut self, clock: &C) {
        self.reset();
        self.start(clock);
    }

    /// Time left until the deadline.
    ///
    /// Meaningful only while [`is_started`](Self::is_started); for an
    /// unstarted timer the result is derived from the clock's sentinel (a
    /// meaninglessly large value for [`MonotonicClock`], a negative one for
    /// [`SimClock`]). Callers that need a real figure must check
    /// `is_started` first. This is a documented footgun, not a defect.
    #[must_use]
    pub fn remaining(&self, clock: &C) -> C::Time {
        clock.span(self.deadline, clock.now())
    }

    /// Returns whether the period has elapsed, auto-starting if necessary.
    ///
    /// If the timer is not started, it is started now and the call returns
    /// `false` — a countdown that just began cannot have elapsed. This side
    /// effect means per-tick callers never need an explicit `start` call:
    ///
    /// ```rust
    /// use tickwise_timing::{SimClock, Timer};
    ///
    /// let mut clock = SimClock::new();
    /// let mut timer = Timer::new(&clock, 1.0);
    ///
    /// assert!(!timer.time_passed(&clock)); // auto-started here
    /// assert!(timer.is_started());
    /// clock.advance(1.0);
    /// assert!(timer.time_passed(&clock));
    /// ```
    pub fn time_passed(&mut self, clock: &C) -> bool {
        if !self.is_started() {
            self.start(clock);
            return false;
        }
        clock.now() >= self.deadline
    }

    /// Couples the timer's lifecycle to a gating condition.
    ///
    /// While `condition` is `true`, behaves like [`start`](Self::start)
    /// (returning whether this call actually started the countdown). While
    /// `false`, unconditionally resets and returns `false`.
    ///
    /// The deadline semantics are *not* "time since the condition became
    /// false": each time the condition re-asserts, the countdown restarts
    /// cleanly from that moment.
    pub fn start_if(&mut self, clock: &C, condition: bool) -> bool {
        if condition {
            self.start(clock)
        } else {
            self.reset();
            false
        }
    }

    /// Runs `action` once the period elapses under a holding condition.
    ///
    /// While `condition` is `true`: once [`time_passed`](Self::time_passed)
    /// reports elapsed, the timer resets, `action` runs, and the call
    /// returns `true` — for that tick only. On every other tick the call
    /// returns `false`. Because the reset returns the timer to unstarted,
    /// the next check auto-starts a fresh countdown, so a persistently true
    /// condition fires the action once per period.
    ///
    /// While `condition` is `false`: the timer resets (cancelling any
    /// in-flight countdown) and the call returns `false`.
    pub fn run_if(&mut self, clock: &C, condition: bool, action: impl FnOnce()) -> bool {
        if !condition {
            self.reset();
            return false;
        }
        if self.time_passed(clock) {
            self.reset();
            action();
            true
        } else {
            false
        }
    }
}

impl<C: TickClock> Copy for Timer<C> {}

impl<C: TickClock> Clone for Timer<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TickClock> fmt::Debug for Timer<C>
where
    C::Time: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("period", &self.period)
            .field("deadline", &self.deadline)
            .field("started", &self.is_started())
            .finish()
    }
}
