//! Orchestration services.
//!
//! The [`Annotator`] owns the store and the checker client and drives
//! the interactive flows: annotate a target, create spaces and series,
//! append series values, and run the check cycle.

mod annotate;
mod check;
mod series;
mod spaces;

use crate::remote::CheckerApi;
use crate::storage::Storage;
use crate::store::Store;

/// How an interactive flow ended.
///
/// Only transport-level failures surface as errors; everything here is
/// a normal, user-visible conclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The flow completed and its result is durable.
    Saved,
    /// The user backed out of a prompt; nothing was changed.
    Cancelled,
    /// The checking service answered `success: false`; the wizard
    /// answers were discarded.
    RemoteRejected,
    /// The target id does not exist; nothing was changed.
    NotFound,
}

/// Drives the interactive annotation flows against one store and one
/// checking service.
pub struct Annotator<S: Storage, C: CheckerApi> {
    store: Store<S>,
    checker: C,
}

impl<S: Storage, C: CheckerApi> Annotator<S, C> {
    /// Creates an annotator over an opened store and a checker client.
    pub const fn new(store: Store<S>, checker: C) -> Self {
        Self { store, checker }
    }

    /// Read-only access to the store.
    pub const fn store(&self) -> &Store<S> {
        &self.store
    }

    /// Mutable access to the store, for flows with no remote leg
    /// (notes, local term bookkeeping).
    pub const fn store_mut(&mut self) -> &mut Store<S> {
        &mut self.store
    }

    /// The checker client.
    pub const fn checker(&self) -> &C {
        &self.checker
    }
}
