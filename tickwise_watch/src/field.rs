// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The watched field: interception, rejection by overwrite, notification.

use alloc::boxed::Box;
use core::fmt;

use crate::predicate::SamenessPredicate;

/// Token identifying an installed watcher, returned by
/// [`WatchedField::watch`] and consumed by [`WatchedField::unwatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

/// Disposition of one intercepted write, reported by [`WatchedField::set`].
///
/// This is the crate's observability surface: embedders that want to log or
/// count suppressed writes do so from this value at the host layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The write was a real change: the value was stored and the watcher's
    /// `on_changed` callback fired.
    Accepted,
    /// The write was noise: the field was forced back to the last accepted
    /// value and no notification fired.
    Rejected,
    /// No watcher is installed; the write went through unexamined.
    Unwatched,
}

/// Error returned when installing a watcher on an already-watched field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WatchError {
    /// The watcher currently occupying the field.
    pub existing: WatchId,
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field is already watched by {:?}; unwatch it first",
            self.existing
        )
    }
}

impl core::error::Error for WatchError {}

struct Watcher<T> {
    id: WatchId,
    last_accepted: T,
    predicate: Box<dyn SamenessPredicate<T>>,
    on_changed: Box<dyn FnMut(&T)>,
}

/// A value cell whose writes are intercepted by an optional watcher.
///
/// The field owns the value; the watcher is a registered observer that the
/// owner must release explicitly with [`unwatch`](Self::unwatch) when it is
/// no longer relevant (a stale watcher would keep rejecting writes against
/// an obsolete baseline).
///
/// # Invariant
///
/// While watched, [`last_accepted`](Self::last_accepted) always reflects the
/// last value for which `on_changed` fired — or the value at watch
/// installation if none has fired yet.
///
/// # Example
///
/// ```rust
/// use tickwise_watch::{Exact, WatchedField, WatchOutcome};
///
/// let mut field = WatchedField::new(0_u32);
/// let id = field.watch(Exact, |_| {}).unwrap();
///
/// // Redundant writes from unrelated code paths are suppressed.
/// assert_eq!(field.set(0), WatchOutcome::Rejected);
/// assert_eq!(field.set(7), WatchOutcome::Accepted);
///
/// field.unwatch(id);
/// assert_eq!(field.set(7), WatchOutcome::Unwatched);
/// ```
pub struct WatchedField<T> {
    value: T,
    watcher: Option<Watcher<T>>,
    next_id: u64,
}

impl<T> WatchedField<T> {
    /// Creates an unwatched field holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            watcher: None,
            next_id: 0,
        }
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consumes the field, returning the value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Writes the value directly, bypassing interception entirely.
    ///
    /// This is the accessor host code uses when a write must not be
    /// second-guessed (loading persisted state, forced resets). The
    /// watcher's accepted baseline is *not* updated, so a subsequent
    /// intercepted write is still judged against the old baseline.
    pub fn write_direct(&mut self, value: T) {
        self.value = value;
    }

    /// Returns whether a watcher is installed.
    #[must_use]
    pub fn is_watched(&self) -> bool {
        self.watcher.is_some()
    }

    /// The last value accepted by the watcher, if one is installed.
    #[must_use]
    pub fn last_accepted(&self) -> Option<&T> {
        self.watcher.as_ref().map(|w| &w.last_accepted)
    }

    /// Releases the watcher identified by `id`.
    ///
    /// Returns whether a watcher was actually removed. This is the explicit
    /// scoped teardown of the subscription; it is idempotent and ignores
    /// stale tokens from earlier watch sessions.
    pub fn unwatch(&mut self, id: WatchId) -> bool {
        match &self.watcher {
            Some(watcher) if watcher.id == id => {
                self.watcher = None;
                true
            }
            _ => false,
        }
    }
}

impl<T: Clone> WatchedField<T> {
    /// Installs a watcher; the current value becomes the accepted baseline.
    ///
    /// At most one watcher may be installed at a time; a second
    /// installation fails with [`WatchError`] rather than silently stacking
    /// or replacing (signaled at registration, not discovered later).
    ///
    /// # Errors
    ///
    /// - [`WatchError`]: A watcher is already installed.
    pub fn watch<P, F>(&mut self, predicate: P, on_changed: F) -> Result<WatchId, WatchError>
    where
        P: SamenessPredicate<T> + 'static,
        F: FnMut(&T) + 'static,
    {
        if let Some(watcher) = &self.watcher {
            return Err(WatchError {
                existing: watcher.id,
            });
        }
        let id = WatchId(self.next_id);
        self.next_id += 1;
        self.watcher = Some(Watcher {
            id,
            last_accepted: self.value.clone(),
            predicate: Box::new(predicate),
            on_changed: Box::new(on_changed),
        });
        Ok(id)
    }

    /// The intercepted write path.
    ///
    /// With a watcher installed, the incoming value is compared against the
    /// accepted baseline under the watcher's predicate:
    ///
    /// - same: the field is restored to the baseline (undoing the external
    ///   write) and nothing fires — [`WatchOutcome::Rejected`];
    /// - different: the baseline and the field both move to the new value
    ///   and `on_changed` fires synchronously with the stored value —
    ///   [`WatchOutcome::Accepted`].
    ///
    /// Restoration writes the field storage directly, so rejection can never
    /// re-enter this interception path.
    pub fn set(&mut self, value: T) -> WatchOutcome {
        let Some(watcher) = self.watcher.as_mut() else {
            self.value = value;
            return WatchOutcome::Unwatched;
        };
        if watcher.predicate.is_same(&value, &watcher.last_accepted) {
            self.value = watcher.last_accepted.clone();
            return WatchOutcome::Rejected;
        }
        watcher.last_accepted = value.clone();
        self.value = value;
        (watcher.on_changed)(&self.value);
        WatchOutcome::Accepted
    }
}

// Manual Debug impl since watcher callbacks aren't Debug.
impl<T: fmt::Debug> fmt::Debug for WatchedField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchedField")
            .field("value", &self.value)
            .field("last_accepted", &self.last_accepted())
            .field("is_watched", &self.is_watched())
            .finish()
    }
}
