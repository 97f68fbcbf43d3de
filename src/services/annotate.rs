//! Annotation flows: run the wizard against a term, constructor, or
//! function item and submit the result to the checking service.
//!
//! The order of effects matters: the remote submission happens first,
//! and only an accepted interpretation is attached and persisted. A
//! rejection discards the wizard answers entirely.

use super::{Annotator, Outcome};
use crate::models::{Interpretation, TimeSeries};
use crate::remote::CheckerApi;
use crate::storage::Storage;
use crate::wizard::{BuildContext, InterpretationBuilder, QuestionAsker};
use crate::Result;

impl<S: Storage, C: CheckerApi> Annotator<S, C> {
    /// Runs the interpretation wizard for a term.
    pub fn annotate_term(&mut self, id: u64, ask: &mut dyn QuestionAsker) -> Result<Outcome> {
        let Some(term) = self.store.find_term(id).cloned() else {
            return Ok(Outcome::NotFound);
        };
        let ctx = BuildContext {
            is_identifier: term.is_identifier(),
            node_type: &term.node_type,
            order_start: self.store.interpretation_order(),
        };
        let Some(built) = self.run_wizard(&ctx, ask) else {
            return Ok(Outcome::Cancelled);
        };

        let interp = Self::carry_target_name(built.interpretation, ctx.is_identifier, &term.name);
        let mut submitted = term;
        submitted.interpretation = Some(interp.clone());
        if !self.checker.create_term_interpretation(&submitted)? {
            tracing::warn!(id, "checking service rejected term interpretation");
            return Ok(Outcome::RemoteRejected);
        }

        self.register_series_definition(&interp)?;
        self.store.attach_term_interpretation(id, interp)?;
        self.store.advance_interpretation_order(built.orders_consumed)?;
        tracing::info!(id, "term interpretation saved");
        Ok(Outcome::Saved)
    }

    /// Runs the interpretation wizard for a constructor.
    ///
    /// Constructors already carry a name, so the wizard treats them
    /// like identifier nodes.
    pub fn annotate_constructor(
        &mut self,
        id: u64,
        ask: &mut dyn QuestionAsker,
    ) -> Result<Outcome> {
        let Some(cons) = self.store.find_constructor(id).cloned() else {
            return Ok(Outcome::NotFound);
        };
        let ctx = BuildContext {
            is_identifier: true,
            node_type: &cons.node_type,
            order_start: self.store.interpretation_order(),
        };
        let Some(built) = self.run_wizard(&ctx, ask) else {
            return Ok(Outcome::Cancelled);
        };

        let interp = Self::carry_target_name(built.interpretation, true, &cons.name);
        let mut submitted = cons;
        submitted.interpretation = Some(interp.clone());
        if !self.checker.create_constructor_interpretation(&submitted)? {
            tracing::warn!(id, "checking service rejected constructor interpretation");
            return Ok(Outcome::RemoteRejected);
        }

        self.register_series_definition(&interp)?;
        self.store.attach_constructor_interpretation(id, interp)?;
        self.store.advance_interpretation_order(built.orders_consumed)?;
        tracing::info!(id, "constructor interpretation saved");
        Ok(Outcome::Saved)
    }

    /// Runs the interpretation wizard for a function item.
    pub fn annotate_function(&mut self, id: u64, ask: &mut dyn QuestionAsker) -> Result<Outcome> {
        let Some(func) = self.store.find_function_item(id).cloned() else {
            return Ok(Outcome::NotFound);
        };
        let ctx = BuildContext {
            is_identifier: true,
            node_type: &func.node_type,
            order_start: self.store.interpretation_order(),
        };
        let Some(built) = self.run_wizard(&ctx, ask) else {
            return Ok(Outcome::Cancelled);
        };

        let interp = Self::carry_target_name(built.interpretation, true, &func.name);
        let mut submitted = func;
        submitted.interpretation = Some(interp.clone());
        if !self.checker.create_function_interpretation(&submitted)? {
            tracing::warn!(id, "checking service rejected function interpretation");
            return Ok(Outcome::RemoteRejected);
        }

        self.register_series_definition(&interp)?;
        self.store.attach_function_interpretation(id, interp)?;
        self.store.advance_interpretation_order(built.orders_consumed)?;
        tracing::info!(id, "function interpretation saved");
        Ok(Outcome::Saved)
    }

    fn run_wizard(
        &self,
        ctx: &BuildContext<'_>,
        ask: &mut dyn QuestionAsker,
    ) -> Option<crate::wizard::BuiltInterpretation> {
        InterpretationBuilder::new(self.store.spaces(), self.store.series()).build(ctx, ask)
    }

    /// Identifier nodes carry their own name; the wizard's sentinel is
    /// replaced with it. Series definitions keep the name the user gave
    /// the series — the registry is keyed on it.
    fn carry_target_name(
        mut interp: Interpretation,
        is_identifier: bool,
        target_name: &str,
    ) -> Interpretation {
        if is_identifier && !interp.is_series_definition() && !target_name.is_empty() {
            interp.name = target_name.to_string();
        }
        interp
    }

    /// A series-definition interpretation also registers the series.
    fn register_series_definition(&mut self, interp: &Interpretation) -> Result<()> {
        if let Some(series) = TimeSeries::from_interpretation(interp) {
            self.store.add_series(series)?;
        }
        Ok(())
    }
}
