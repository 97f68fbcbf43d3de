//! Space-creation flow: wizard, remote registration, durable append.

use super::{Annotator, Outcome};
use crate::remote::CheckerApi;
use crate::storage::Storage;
use crate::wizard::{build_space, QuestionAsker};
use crate::Result;

impl<S: Storage, C: CheckerApi> Annotator<S, C> {
    /// Runs the space wizard and registers the result.
    ///
    /// The checking service is told first; the local registry entry and
    /// counter advance become durable only after it accepts. A
    /// rejection leaves the registry untouched.
    pub fn add_space(&mut self, ask: &mut dyn QuestionAsker) -> Result<Outcome> {
        let order = self.store.interpretation_order();
        let Some(space) = build_space(self.store.spaces(), order, ask) else {
            return Ok(Outcome::Cancelled);
        };
        self.store.spaces().validate(&space)?;

        if !self.checker.create_space(&space)? {
            tracing::warn!(label = %space.label, "checking service rejected space");
            return Ok(Outcome::RemoteRejected);
        }

        tracing::info!(label = %space.label, kind = %space.kind, "space registered");
        self.store.add_space(space)?;
        self.store.advance_interpretation_order(1)?;
        Ok(Outcome::Saved)
    }
}
