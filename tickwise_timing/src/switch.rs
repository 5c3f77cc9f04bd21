// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-detecting boolean.

/// A boolean that remembers its previous value, exposing the edge between
/// the two most recent writes.
///
/// [`set`](EdgeSwitch::set) unconditionally shifts the current value into
/// the previous slot before overwriting. The consequence, relied on by
/// callers: a *second* write of the same value closes the edge window, so
/// [`was_set`](EdgeSwitch::was_set) reports a transition only between a
/// value-changing write and the next write or acknowledgment.
///
/// # Example
///
/// ```rust
/// use tickwise_timing::EdgeSwitch;
///
/// let mut armed = EdgeSwitch::new(false);
///
/// armed.set(true);
/// assert!(armed.was_set()); // transition observed
///
/// armed.acknowledge();
/// assert!(!armed.was_set());
///
/// armed.set(false);
/// assert!(armed.was_set()); // falling edge counts too
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSwitch {
    current: bool,
    previous: bool,
}

impl EdgeSwitch {
    /// Creates a switch with no pending edge.
    #[must_use]
    pub fn new(initial: bool) -> Self {
        Self {
            current: initial,
            previous: initial,
        }
    }

    /// Writes a new value, shifting the old current value into `previous`.
    pub fn set(&mut self, value: bool) {
        self.previous = self.current;
        self.current = value;
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> bool {
        self.current
    }

    /// Returns whether the value changed between the two most recent writes
    /// and the change has not been acknowledged.
    #[must_use]
    pub fn was_set(&self) -> bool {
        self.current != self.previous
    }

    /// Acknowledges the pending edge, if any.
    pub fn acknowledge(&mut self) {
        self.previous = self.current;
    }

    /// Returns [`was_set`](Self::was_set) and acknowledges in one call.
    pub fn take_edge(&mut self) -> bool {
        let edge = self.was_set();
        self.acknowledge();
        edge
    }
}
