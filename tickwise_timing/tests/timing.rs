// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `tickwise_timing` crate.
//!
//! These exercise the primitives the way a tick-driven host does: one
//! mutable [`SimClock`] owned by the "host", advanced between batches of
//! per-tick calls into timers, limiters, and oscillators. Tick steps are
//! powers of two so accumulated simulation time stays exact.

use tickwise_timing::{EdgeSwitch, Latch, Oscillator, RateLimiter, SimClock, Timer};

/// Drives a closure once per simulated tick for `ticks` ticks of `dt`.
fn drive(clock: &mut SimClock, ticks: u32, dt: f64, mut per_tick: impl FnMut(&SimClock)) {
    for _ in 0..ticks {
        clock.advance(dt);
        per_tick(clock);
    }
}

#[test]
fn periodic_action_fires_once_per_period_under_ticking() {
    let mut clock = SimClock::new();
    let mut timer = Timer::new(&clock, 1.0);
    let mut fired = 0;

    // 100 ticks of 0.125s against a 1s period. The first tick only
    // auto-starts the countdown, so each firing lands 8 ticks after the
    // previous one: ticks 9, 18, ..., 99.
    drive(&mut clock, 100, 0.125, |clock| {
        timer.run_if(clock, true, || fired += 1);
    });
    assert_eq!(fired, 11);

    // Tick 100 re-anchored the countdown; 8 more ticks complete it.
    drive(&mut clock, 8, 0.125, |clock| {
        timer.run_if(clock, true, || fired += 1);
    });
    assert_eq!(fired, 12);
}

#[test]
fn gated_countdown_restarts_cleanly_after_each_gap() {
    let mut clock = SimClock::new();
    let mut timer = Timer::new(&clock, 1.0);
    let mut fired = 0;

    // The condition flips off every third tick, so the countdown never
    // accumulates a full period and the action never fires.
    let mut tick = 0_u32;
    drive(&mut clock, 60, 0.125, |clock| {
        tick += 1;
        timer.run_if(clock, tick % 3 != 0, || fired += 1);
    });
    assert_eq!(fired, 0);

    // Once the condition holds steadily, firing resumes: one tick to
    // anchor, eight to elapse.
    drive(&mut clock, 9, 0.125, |clock| {
        timer.run_if(clock, true, || fired += 1);
    });
    assert_eq!(fired, 1);
}

#[test]
fn sim_time_jump_backward_delays_a_running_timer() {
    let mut clock = SimClock::at(100.0);
    let mut timer = Timer::new(&clock, 2.0);

    timer.start(&clock);
    clock.jump_to(0.0); // scene load

    // The deadline (102.0) is now far in the future of the jumped clock.
    assert!(!timer.time_passed(&clock));
    assert_eq!(timer.remaining(&clock), 102.0);

    // Restarting re-anchors to the new time base.
    timer.restart(&clock);
    assert_eq!(timer.remaining(&clock), 2.0);
    clock.advance(2.0);
    assert!(timer.time_passed(&clock));
}

#[test]
fn limiter_throttles_a_per_tick_effect() {
    let mut clock = SimClock::new();
    let mut limiter = RateLimiter::new(&clock, 0.5);
    let mut effects = 0;

    // An effect attempted on every tick lands only once per 0.5s window
    // (32 ticks of 1/64s), plus the immediate first call: ticks 32, 64, 96.
    limiter.run(&clock, || effects += 1);
    drive(&mut clock, 100, 0.015625, |clock| {
        limiter.run(clock, || effects += 1);
    });
    assert_eq!(effects, 4);
}

#[test]
fn oscillator_produces_a_square_wave() {
    let mut clock = SimClock::new();
    let mut blink = Oscillator::new(&clock, 0.5);
    let mut highs = 0_u32;

    blink.value(&clock); // anchor the first period
    drive(&mut clock, 128, 0.015625, |clock| {
        if blink.value(clock) {
            highs += 1;
        }
    });
    // 2.0s total: high during [0.5, 1.0) and [1.5, 2.0), half of the ticks.
    assert_eq!(highs, 64);
}

#[test]
fn latch_and_switch_cooperate_for_one_shot_arming() {
    let mut armed = EdgeSwitch::new(false);
    let mut announce = Latch::new();
    let mut announcements = 0;

    // The host writes the armed flag every tick; the announcement happens
    // once, on the rising edge.
    for tick in 0..10 {
        armed.set(tick >= 3);
        if armed.take_edge() && armed.get() {
            announce.run(|| announcements += 1);
        }
    }
    assert_eq!(announcements, 1);

    // Re-arming after a reset announces again.
    announce.reset();
    armed.set(false);
    armed.acknowledge();
    armed.set(true);
    if armed.take_edge() && armed.get() {
        announce.run(|| announcements += 1);
    }
    assert_eq!(announcements, 2);
}
