// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A boolean that flips each period, driven purely by being observed.

use core::fmt;

use crate::clock::TickClock;
use crate::timer::Timer;

/// A periodically flipping boolean (blinker).
///
/// Observing the value *is* the trigger — there is no separate tick call.
/// Each read checks the inner timer; once a full period has elapsed the
/// state flips and the timer restarts. Two rapid reads within the same
/// period return the same value, and the flip happens at most once per
/// period regardless of read frequency.
///
/// # Example
///
/// ```rust
/// use tickwise_timing::{Oscillator, SimClock};
///
/// let mut clock = SimClock::new();
/// let mut blink = Oscillator::new(&clock, 0.5);
///
/// assert!(!blink.value(&clock));
/// assert!(!blink.value(&clock)); // same period, same value
///
/// clock.advance(0.5);
/// assert!(blink.value(&clock));
///
/// clock.advance(0.5);
/// assert!(!blink.value(&clock));
/// ```
pub struct Oscillator<C: TickClock> {
    timer: Timer<C>,
    state: bool,
}

impl<C: TickClock> Oscillator<C> {
    /// Creates an oscillator starting in the `false` phase.
    #[must_use]
    pub fn new(clock: &C, period: C::Time) -> Self {
        Self::with_initial(clock, period, false)
    }

    /// Creates an oscillator starting in the given phase.
    #[must_use]
    pub fn with_initial(clock: &C, period: C::Time, initial: bool) -> Self {
        Self {
            timer: Timer::new(clock, period),
            state: initial,
        }
    }

    /// Returns the configured period.
    #[must_use]
    pub fn period(&self) -> C::Time {
        self.timer.period()
    }

    /// The current phase, flipping it first if a period has elapsed.
    ///
    /// The very first read auto-starts the inner timer and returns the
    /// initial phase unflipped.
    pub fn value(&mut self, clock: &C) -> bool {
        if self.timer.time_passed(clock) {
            self.state = !self.state;
            self.timer.restart(clock);
        }
        self.state
    }
}

impl<C: TickClock> Copy for Oscillator<C> {}

impl<C: TickClock> Clone for Oscillator<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TickClock> fmt::Debug for Oscillator<C>
where
    C::Time: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Oscillator")
            .field("timer", &self.timer)
            .field("state", &self.state)
            .finish()
    }
}
