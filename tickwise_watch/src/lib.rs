// Copyright 2026 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tickwise Watch: debounced change detection for externally mutated values.
//!
//! A [`WatchedField`] owns a value that unrelated host code writes to, often
//! redundantly and often with floating-point jitter from UI round-tripping.
//! The installed watcher intercepts every write and decides whether it is a
//! **real** change or **noise**:
//!
//! - Noise (same as the last accepted value under the configured
//!   [`SamenessPredicate`]) is *rejected by overwrite*: the field is forced
//!   back to the last accepted value and no notification fires.
//! - Signal updates the last accepted value and fires the `on_changed`
//!   callback synchronously.
//!
//! ## Quick Start
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use tickwise_watch::{Tolerance, WatchedField};
//!
//! let changes = Rc::new(Cell::new(0));
//! let seen = changes.clone();
//! let mut field = WatchedField::new(1.0_f64);
//! let id = field
//!     .watch(Tolerance::new(1e-6), move |_new| seen.set(seen.get() + 1))
//!     .unwrap();
//!
//! // Sub-epsilon jitter is rejected and the write is undone.
//! field.set(1.000_000_1);
//! assert_eq!(*field.get(), 1.0);
//! assert_eq!(changes.get(), 0);
//!
//! // A real change propagates.
//! field.set(1.1);
//! assert_eq!(*field.get(), 1.1);
//! assert_eq!(changes.get(), 1);
//!
//! // Explicit scoped release; the field is a plain cell afterwards.
//! field.unwatch(id);
//! ```
//!
//! ## Execution model
//!
//! Everything is single-threaded and synchronous: the interception callback
//! runs atomically with respect to the write it reacts to, in the calling
//! thread. There is no internal locking, and callbacks carry no
//! `Send`/`Sync` bounds — a watcher may capture `Rc` or `Cell` state freely.
//!
//! The subscription is a resource with a guaranteed, explicit release:
//! [`WatchedField::unwatch`] is the owner's teardown call. Nothing relies on
//! drop timing.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod field;
mod predicate;

pub use field::{WatchError, WatchId, WatchOutcome, WatchedField};
pub use predicate::{Exact, SamenessPredicate, Tolerance};
