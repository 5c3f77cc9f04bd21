// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tickwise Timing: timer and trigger primitives for tick-driven hosts.
//!
//! This crate provides small, focused state machines for code that is called
//! back once per frame by a host simulation and needs to act "every N
//! seconds", "at most once per N seconds", or "exactly once". Each module
//! handles one pattern:
//!
//! - [`clock`]: The [`TickClock`] abstraction plus two concrete clocks — a
//!   host-advanced [`SimClock`] and (with the `std` feature) a wall-clock
//!   [`MonotonicClock`].
//! - [`timer`]: The generic [`Timer`] state machine with start/reset/elapsed
//!   logic and the `start_if`/`run_if` combinators.
//! - [`limiter`]: [`RateLimiter`], which suppresses high-frequency repeated
//!   invocations of a side-effecting action.
//! - [`oscillator`]: [`Oscillator`], a boolean that flips each period, driven
//!   purely by being observed.
//! - [`latch`]: [`Latch`], a one-shot action gate.
//! - [`switch`]: [`EdgeSwitch`], an edge-detecting boolean.
//!
//! ## Design Philosophy
//!
//! Everything here is built for a **single-threaded, cooperative, tick-driven**
//! execution model: the host calls in once per frame, every method is
//! synchronous, and no internal locking is performed. Timers never own a
//! clock; the clock is passed to each call, which keeps the state machines
//! pure value types and makes tests fully deterministic.
//!
//! Time itself is abstract. A [`TickClock`] supplies a totally ordered time
//! value plus a *sentinel* that stands for "not started". This split exists
//! because simulation time may pause, accelerate, or jump discontinuously on
//! scene loads, while wall-clock time never does — the elapsed-check logic is
//! written once against the trait, not per clock.
//!
//! ## Quick Start
//!
//! ```rust
//! use tickwise_timing::{SimClock, Timer};
//!
//! let mut clock = SimClock::new();
//! let mut timer = Timer::new(&clock, 2.0);
//!
//! // The first elapsed-check auto-starts the timer and reports "not yet".
//! assert!(!timer.time_passed(&clock));
//!
//! clock.advance(1.0);
//! assert!(!timer.time_passed(&clock));
//!
//! clock.advance(1.0);
//! assert!(timer.time_passed(&clock));
//! ```
//!
//! ## Gated countdowns
//!
//! [`Timer::run_if`] couples a countdown to an external condition: while the
//! condition holds, the action fires once the period elapses; the moment the
//! condition stops holding, the countdown is cancelled and starts from zero
//! the next time the condition re-asserts.
//!
//! ```rust
//! use tickwise_timing::{SimClock, Timer};
//!
//! let mut clock = SimClock::new();
//! let mut timer = Timer::new(&clock, 3.0);
//! let mut fired = 0;
//!
//! // Condition holds: countdown runs.
//! timer.run_if(&clock, true, || fired += 1);
//! clock.advance(2.0);
//! timer.run_if(&clock, true, || fired += 1);
//!
//! // Condition drops: in-flight countdown is cancelled.
//! timer.run_if(&clock, false, || fired += 1);
//!
//! // Re-asserting starts over; the earlier partial progress is gone.
//! clock.advance(2.0);
//! timer.run_if(&clock, true, || fired += 1);
//! assert_eq!(fired, 0);
//!
//! clock.advance(3.0);
//! assert!(timer.run_if(&clock, true, || fired += 1));
//! assert_eq!(fired, 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): Enables [`MonotonicClock`], which requires
//!   `std::time::Instant`.
//!
//! With `std` disabled this crate is `no_std` (it does not even need `alloc`).

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod clock;
pub mod latch;
pub mod limiter;
pub mod oscillator;
pub mod switch;
pub mod timer;

#[cfg(feature = "std")]
pub use clock::MonotonicClock;
pub use clock::{SimClock, TickClock};
pub use latch::Latch;
pub use limiter::RateLimiter;
pub use oscillator::Oscillator;
pub use switch::EdgeSwitch;
#[cfg(feature = "std")]
pub use timer::MonotonicTimer;
pub use timer::{SimTimer, Timer};
