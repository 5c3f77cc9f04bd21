// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rate limiting: run an action at most once per period.
//!
//! Unlike [`Timer`](crate::Timer), a [`RateLimiter`] has no "started"
//! concept and no explicit lifecycle. It only remembers the earliest time
//! the next run is allowed; attempts before that are silently dropped.

use core::fmt;

use crate::clock::TickClock;

/// Suppresses high-frequency repeated invocations of an action.
///
/// Typical use: a side-effecting call attached to a UI value that changes
/// every tick, where only one effect per period is wanted.
///
/// The **first call always executes immediately** — there is no warm-up
/// phase. This mirrors how rate limiters are usually expected to behave, and
/// it is pinned by tests rather than left to chance.
///
/// # Example
///
/// ```rust
/// use tickwise_timing::{RateLimiter, SimClock};
///
/// let mut clock = SimClock::new();
/// let mut limiter = RateLimiter::new(&clock, 1.0);
/// let mut runs = 0;
///
/// assert!(limiter.run(&clock, || runs += 1)); // first call fires
/// assert!(!limiter.run(&clock, || runs += 1)); // throttled
///
/// clock.advance(1.0);
/// assert!(limiter.run(&clock, || runs += 1));
/// assert_eq!(runs, 2);
/// ```
pub struct RateLimiter<C: TickClock> {
    period: C::Time,
    next_allowed: C::Time,
    unset: C::Time,
}

impl<C: TickClock> RateLimiter<C> {
    /// Creates a limiter whose first [`run`](Self::run) will fire
    /// immediately.
    #[must_use]
    pub fn new(clock: &C, period: C::Time) -> Self {
        let unset = clock.unset();
        Self {
            period,
            next_allowed: unset,
            unset,
        }
    }

    /// Returns the configured period.
    #[must_use]
    pub fn period(&self) -> C::Time {
        self.period
    }

    /// Runs `action` unless a run happened within the last period.
    ///
    /// Returns whether the action executed. On execution the next allowed
    /// time advances to `now + period`.
    pub fn run(&mut self, clock: &C, action: impl FnOnce()) -> bool {
        let now = clock.now();
        if self.next_allowed != self.unset && now < self.next_allowed {
            return false;
        }
        self.next_allowed = clock.offset(now, self.period);
        action();
        true
    }

    /// Forgets the throttling state: the next [`run`](Self::run) fires
    /// immediately, as if the limiter were freshly created.
    pub fn reset(&mut self) {
        self.next_allowed = self.unset;
    }
}

impl<C: TickClock> Copy for RateLimiter<C> {}

impl<C: TickClock> Clone for RateLimiter<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TickClock> fmt::Debug for RateLimiter<C>
where
    C::Time: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateLimiter")
            .field("period", &self.period)
            .field("next_allowed", &self.next_allowed)
            .finish()
    }
}
