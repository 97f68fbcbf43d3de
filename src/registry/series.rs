//! The time-series registry.

use crate::models::{Interpretation, TimeSeries};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Catalogue of registered time series, keyed by unique name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesRegistry {
    #[serde(rename = "all_time_series", default)]
    series: Vec<TimeSeries>,
}

impl SeriesRegistry {
    /// Lists every registered series in creation order.
    #[must_use]
    pub fn list(&self) -> &[TimeSeries] {
        &self.series
    }

    /// Returns the registered series names in creation order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.series.iter().map(|s| s.name.clone()).collect()
    }

    /// Looks up a series by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&TimeSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Registers a new series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the name is empty or already
    /// taken. Names are unique so later lookups are unambiguous.
    pub fn create_series(&mut self, series: TimeSeries) -> Result<()> {
        if series.name.trim().is_empty() {
            return Err(Error::InvalidInput("series name cannot be empty".to_string()));
        }
        if self.find(&series.name).is_some() {
            return Err(Error::InvalidInput(format!(
                "a time series named '{}' already exists",
                series.name
            )));
        }
        self.series.push(series);
        Ok(())
    }

    /// Appends a time-stamped value to the named series' local mirror.
    ///
    /// Returns `false` when no series has that name.
    pub fn append_value(&mut self, name: &str, value: Interpretation) -> bool {
        match self.series.iter_mut().find(|s| s.name == name) {
            Some(series) => {
                series.values.push(value);
                true
            },
            None => false,
        }
    }
}
