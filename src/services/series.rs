//! Time-series flows: create a series, append a value to one.
//!
//! Remote persistence is attempted first; the local mirror is updated
//! only when the service reports success, and always updated then.

use super::{Annotator, Outcome};
use crate::remote::CheckerApi;
use crate::storage::Storage;
use crate::wizard::{build_series, build_series_value, QuestionAsker};
use crate::{Error, Result};

impl<S: Storage, C: CheckerApi> Annotator<S, C> {
    /// Runs the series-creation wizard and registers the result.
    pub fn add_series(&mut self, ask: &mut dyn QuestionAsker) -> Result<Outcome> {
        let order = self.store.interpretation_order();
        let Some(series) = build_series(self.store.spaces(), order, ask) else {
            return Ok(Outcome::Cancelled);
        };
        if self.store.series().find(&series.name).is_some() {
            return Err(Error::InvalidInput(format!(
                "a time series named '{}' already exists",
                series.name
            )));
        }

        if !self.checker.create_time_series(&series)? {
            tracing::warn!(name = %series.name, "checking service rejected time series");
            return Ok(Outcome::RemoteRejected);
        }

        tracing::info!(name = %series.name, kind = series.spec.kind_label(), "time series registered");
        self.store.add_series(series)?;
        self.store.advance_interpretation_order(1)?;
        Ok(Outcome::Saved)
    }

    /// Picks an existing series and appends one time-stamped value.
    pub fn add_series_value(&mut self, ask: &mut dyn QuestionAsker) -> Result<Outcome> {
        let names = self.store.series().names();
        let Some(idx) = ask.pick_one("Select a time series", &names) else {
            return Ok(Outcome::Cancelled);
        };
        let Some(series) = self.store.series().list().get(idx).cloned() else {
            return Ok(Outcome::NotFound);
        };

        let order = self.store.interpretation_order();
        let Some(built) = build_series_value(&series, order, ask) else {
            return Ok(Outcome::Cancelled);
        };

        if !self.checker.add_value_to_time_series(&built.interpretation)? {
            tracing::warn!(name = %series.name, "checking service rejected series value");
            return Ok(Outcome::RemoteRejected);
        }

        self.store.append_series_value(&series.name, built.interpretation)?;
        self.store.advance_interpretation_order(built.orders_consumed)?;
        tracing::info!(name = %series.name, "series value appended");
        Ok(Outcome::Saved)
    }
}
