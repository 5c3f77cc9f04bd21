// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot action gate.

/// A gate that permits an action to run at most once until reset.
///
/// The source-language idiom of converting the latch to a plain boolean is
/// expressed here as the named [`is_done`](Latch::is_done) accessor.
///
/// # Example
///
/// ```rust
/// use tickwise_timing::Latch;
///
/// let mut latch = Latch::new();
/// let mut runs = 0;
///
/// assert!(latch.run(|| runs += 1));
/// assert!(!latch.run(|| runs += 1));
/// assert_eq!(runs, 1);
///
/// latch.reset();
/// assert!(latch.run(|| runs += 1));
/// assert_eq!(runs, 2);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Latch {
    done: bool,
}

impl Latch {
    /// Creates an open latch.
    #[must_use]
    pub fn new() -> Self {
        Self { done: false }
    }

    /// Runs `action` if the latch has not fired yet, then closes it.
    ///
    /// Returns whether the action executed.
    pub fn run(&mut self, action: impl FnOnce()) -> bool {
        if self.done {
            return false;
        }
        self.done = true;
        action();
        true
    }

    /// Returns whether the latch has fired.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Reopens the latch so the next [`run`](Self::run) fires again.
    pub fn reset(&mut self) {
        self.done = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut latch = Latch::new();
        let mut runs = 0;

        assert!(latch.run(|| runs += 1));
        assert!(!latch.run(|| runs += 1));
        assert!(!latch.run(|| runs += 1));
        assert_eq!(runs, 1);
        assert!(latch.is_done());
    }

    #[test]
    fn reset_rearms() {
        let mut latch = Latch::new();
        let mut runs = 0;

        latch.run(|| runs += 1);
        latch.reset();
        assert!(!latch.is_done());
        assert!(latch.run(|| runs += 1));
        assert_eq!(runs, 2);
    }

    #[test]
    fn closes_even_if_queried_first() {
        let mut latch = Latch::new();
        assert!(!latch.is_done());
        latch.run(|| {});
        assert!(latch.is_done());
    }
}
