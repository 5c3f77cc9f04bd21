// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluggable sameness predicates.
//!
//! A predicate decides whether an incoming write is "the same" as the last
//! accepted value, in which case the watcher treats it as noise. [`Exact`]
//! is the default notion; [`Tolerance`] absorbs sub-epsilon floating-point
//! jitter.

/// Decides whether two values should be treated as the same.
///
/// Implementations must be reflexive in practice (`is_same(a, a)` true for
/// the values the host actually produces); the float predicates deliberately
/// break this for NaN, which is never the same as anything, so a NaN write
/// always counts as a change.
pub trait SamenessPredicate<T> {
    /// Returns whether `a` and `b` are the same for change-detection
    /// purposes.
    fn is_same(&self, a: &T, b: &T) -> bool;
}

/// Blanket implementation for references to predicates.
impl<T, P> SamenessPredicate<T> for &P
where
    P: SamenessPredicate<T> + ?Sized,
{
    fn is_same(&self, a: &T, b: &T) -> bool {
        (*self).is_same(a, b)
    }
}

/// Value equality via [`PartialEq`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Exact;

impl<T: PartialEq> SamenessPredicate<T> for Exact {
    fn is_same(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Absolute-tolerance sameness for floats: `|a - b| <= epsilon`.
///
/// Externally driven float fields can emit spurious sub-epsilon differences
/// every tick from UI round-tripping; this predicate absorbs them.
///
/// # Example
///
/// ```rust
/// use tickwise_watch::{SamenessPredicate, Tolerance};
///
/// let tol = Tolerance::new(1e-6);
/// assert!(tol.is_same(&1.0, &1.000_000_1));
/// assert!(!tol.is_same(&1.0, &1.1));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Creates a predicate with the given non-negative absolute tolerance.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        debug_assert!(epsilon >= 0.0, "tolerance must be non-negative");
        Self { epsilon }
    }

    /// The configured tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

// `f64::abs` is not available in `core`, so the magnitude is taken by
// ordered subtraction. NaN fails both comparisons and is never "same".
impl SamenessPredicate<f64> for Tolerance {
    fn is_same(&self, a: &f64, b: &f64) -> bool {
        let diff = if a >= b { a - b } else { b - a };
        diff <= self.epsilon
    }
}

impl SamenessPredicate<f32> for Tolerance {
    fn is_same(&self, a: &f32, b: &f32) -> bool {
        self.is_same(&f64::from(*a), &f64::from(*b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_uses_partial_eq() {
        assert!(Exact.is_same(&5_u32, &5));
        assert!(!Exact.is_same(&5_u32, &6));
        assert!(Exact.is_same(&"abc", &"abc"));
    }

    #[test]
    fn tolerance_absorbs_jitter() {
        let tol = Tolerance::new(1e-6);
        assert!(tol.is_same(&1.0, &1.0));
        assert!(tol.is_same(&1.0, &1.000_000_1));
        assert!(tol.is_same(&1.000_000_1, &1.0));
        assert!(!tol.is_same(&1.0, &1.1));
    }

    #[test]
    fn tolerance_is_symmetric_around_negative_values() {
        let tol = Tolerance::new(0.5);
        assert!(tol.is_same(&-1.0, &-1.4));
        assert!(!tol.is_same(&-1.0, &-1.6));
    }

    #[test]
    fn zero_tolerance_is_exact() {
        let tol = Tolerance::new(0.0);
        assert!(tol.is_same(&2.5, &2.5));
        assert!(!tol.is_same(&2.5, &2.500_000_000_000_001));
    }

    #[test]
    fn nan_is_never_the_same() {
        let tol = Tolerance::new(1.0);
        assert!(!tol.is_same(&f64::NAN, &f64::NAN));
        assert!(!tol.is_same(&f64::NAN, &0.0));
        assert!(!tol.is_same(&0.0, &f64::NAN));
    }

    #[test]
    fn f32_values_widen_before_comparison() {
        let tol = Tolerance::new(1e-6);
        assert!(tol.is_same(&1.0_f32, &1.0_f32));
        assert!(!tol.is_same(&1.0_f32, &1.1_f32));
    }

    #[test]
    fn predicate_through_reference() {
        let tol = Tolerance::new(1e-6);
        let by_ref: &dyn SamenessPredicate<f64> = &tol;
        assert!(by_ref.is_same(&1.0, &1.0));
    }
}
