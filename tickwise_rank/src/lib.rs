// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tickwise Rank: hierarchical candidate ranking with abstaining conditions.
//!
//! A [`Ranking`] answers "is X strictly better than Y?" under a
//! priority-ordered list of concerns, used to pick the best candidate among
//! many in an optimization search. It differs from plain lexicographic
//! comparison in one way: a concern may **abstain**. Each non-terminal
//! [`Condition`] carries an `is_good` predicate; when the left candidate
//! already satisfies the concern well enough, that concern casts no vote and
//! the comparison cascades to the next one.
//!
//! The full cascade, for `is_better(x, y)`:
//!
//! 1. `x == y` (the candidate type's own equality) → `false` immediately.
//! 2. For each condition in registration order:
//!    - terminal (no `is_good`): its `is_better` decides, and nothing after
//!      it is ever consulted;
//!    - `is_good(x)` → abstain, continue to the next condition;
//!    - `is_good(y)` only → `y` wins: `false`;
//!    - neither good → this concern's own `is_better` breaks the tie, and
//!      lower-priority concerns are never consulted.
//! 3. Every condition abstained → `true`: `x` is good on every measured
//!    concern and not equal to `y`.
//!
//! Callers may rely on the ordering guarantee: conditions are consulted
//! strictly in registration order, and evaluation stops at the first
//! deciding condition.
//!
//! ## Quick Start
//!
//! ```rust
//! use tickwise_rank::{Condition, Ranking};
//!
//! #[derive(PartialEq)]
//! struct Site {
//!     clearance: f64,
//!     cost: f64,
//! }
//!
//! let mut ranking = Ranking::new();
//! // Highest priority: enough clearance. Among two cramped sites, the
//! // roomier one wins; among two roomy ones, clearance stops mattering.
//! ranking
//!     .push(Condition::new(
//!         |s: &Site| s.clearance >= 2.0,
//!         |a: &Site, b: &Site| a.clearance > b.clearance,
//!     ))
//!     .unwrap();
//! // Last resort: cheaper wins.
//! ranking
//!     .push(Condition::terminal(|a: &Site, b: &Site| a.cost < b.cost))
//!     .unwrap();
//!
//! let cramped_cheap = Site { clearance: 0.5, cost: 1.0 };
//! let cramped_roomier = Site { clearance: 1.5, cost: 9.0 };
//! let roomy_pricey = Site { clearance: 3.0, cost: 9.0 };
//! let roomy_cheap = Site { clearance: 2.5, cost: 4.0 };
//!
//! // Among two cramped sites, clearance decides and cost is ignored.
//! assert!(ranking.is_better(&cramped_roomier, &cramped_cheap));
//! // A cramped site never beats one with enough clearance.
//! assert!(!ranking.is_better(&cramped_cheap, &roomy_pricey));
//! // Among two roomy sites, clearance abstains and cost decides.
//! assert!(ranking.is_better(&roomy_cheap, &roomy_pricey));
//!
//! let best = ranking
//!     .best([&roomy_pricey, &cramped_roomier, &roomy_cheap])
//!     .unwrap();
//! assert_eq!(best.cost, 4.0);
//! ```
//!
//! ## Configuration errors
//!
//! A terminal condition always decides when reached, so any condition
//! registered after one could never be consulted. [`Ranking::push`] rejects
//! that at registration time with [`UnreachableConditionError`] instead of
//! letting the dead configuration sit around until a comparison.
//!
//! (The source-language failure mode of a *null* tie-breaking comparator
//! cannot be expressed here: [`Condition`] construction takes the closure by
//! value, so the type system performs that validation at compile time.)
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Number of conditions stored inline before spilling to the heap.
const INLINE_CONDITIONS: usize = 4;

/// One ranked concern: an optional "good enough" predicate plus a
/// tie-breaking comparator.
///
/// Built with [`Condition::new`] for ordinary concerns or
/// [`Condition::terminal`] for the last-resort concern that always decides
/// when reached.
pub struct Condition<X> {
    good: Option<Box<dyn Fn(&X) -> bool>>,
    better: Box<dyn Fn(&X, &X) -> bool>,
}

impl<X> Condition<X> {
    /// Creates a concern that abstains when `good` already holds for the
    /// left candidate and otherwise tie-breaks with `better`.
    #[must_use]
    pub fn new(
        good: impl Fn(&X) -> bool + 'static,
        better: impl Fn(&X, &X) -> bool + 'static,
    ) -> Self {
        Self {
            good: Some(Box::new(good)),
            better: Box::new(better),
        }
    }

    /// Creates a terminal concern: always decisive if reached, so it must be
    /// semantically safe as the last word (for example "cheaper wins").
    #[must_use]
    pub fn terminal(better: impl Fn(&X, &X) -> bool + 'static) -> Self {
        Self {
            good: None,
            better: Box::new(better),
        }
    }

    /// Returns whether this is a terminal concern.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.good.is_none()
    }
}

// Manual Debug impl since the predicates aren't Debug.
impl<X> fmt::Debug for Condition<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("terminal", &self.is_terminal())
            .finish()
    }
}

/// Error returned when registering a condition after a terminal one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnreachableConditionError;

impl fmt::Display for UnreachableConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a terminal condition is registered; later conditions could never be consulted")
    }
}

impl core::error::Error for UnreachableConditionError {}

/// A priority-ordered list of [`Condition`]s forming a comparison strategy.
///
/// A `Ranking` holds no per-comparison state; it is a pure strategy object,
/// safely reused across many comparisons.
pub struct Ranking<X> {
    conditions: SmallVec<[Condition<X>; INLINE_CONDITIONS]>,
}

impl<X> Ranking<X> {
    /// Creates an empty ranking.
    ///
    /// With no conditions registered, any candidate is better than any
    /// non-equal candidate (every concern — all zero of them — abstained).
    /// Register at least one condition for a meaningful order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: SmallVec::new(),
        }
    }

    /// Registers the next-lower-priority condition.
    ///
    /// # Errors
    ///
    /// - [`UnreachableConditionError`]: A terminal condition is already
    ///   registered, so `condition` could never be consulted.
    pub fn push(&mut self, condition: Condition<X>) -> Result<(), UnreachableConditionError> {
        if self.has_terminal() {
            return Err(UnreachableConditionError);
        }
        self.conditions.push(condition);
        Ok(())
    }

    /// Returns whether a terminal condition is registered.
    ///
    /// [`push`](Self::push) keeps a terminal condition last, so at most one
    /// can ever be present.
    #[must_use]
    pub fn has_terminal(&self) -> bool {
        self.conditions.iter().any(Condition::is_terminal)
    }

    /// Number of registered conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Returns whether no conditions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl<X: PartialEq> Ranking<X> {
    /// Returns whether `x` is strictly better than `y`.
    ///
    /// Never `true` for equal candidates, and never a total order by itself:
    /// `is_better(x, y)` and `is_better(y, x)` can both be `false` (distinct
    /// candidates the hierarchy cannot separate).
    #[must_use]
    pub fn is_better(&self, x: &X, y: &X) -> bool {
        if x == y {
            return false;
        }
        for condition in &self.conditions {
            let Some(good) = &condition.good else {
                return (condition.better)(x, y);
            };
            if good(x) {
                continue;
            }
            if good(y) {
                return false;
            }
            return (condition.better)(x, y);
        }
        true
    }

    /// Picks the best of `candidates` under this ranking.
    ///
    /// Returns `None` for an empty input. Later candidates replace earlier
    /// ones only by being strictly better, so among candidates the
    /// hierarchy cannot separate, the earliest wins.
    pub fn best<'a>(&self, candidates: impl IntoIterator<Item = &'a X>) -> Option<&'a X>
    where
        X: 'a,
    {
        let mut iter = candidates.into_iter();
        let mut best = iter.next()?;
        for candidate in iter {
            if self.is_better(candidate, best) {
                best = candidate;
            }
        }
        Some(best)
    }
}

impl<X> Default for Ranking<X> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug impl since conditions hold closures.
impl<X> fmt::Debug for Ranking<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ranking")
            .field("conditions", &self.conditions.len())
            .field("has_terminal", &self.has_terminal())
            .finish()
    }
}
