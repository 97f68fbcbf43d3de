//! The annotation store: the persisted [`Db`] aggregate plus every
//! mutation the flows perform on it.
//!
//! Each mutation flushes the whole database through the [`Storage`]
//! capability before returning, so a completed sub-step survives a
//! crash between prompts.

use crate::models::{
    Constructor, FunctionItem, Interpretation, Note, Span, SpanDescriptor, Status, Term,
    NO_INTERPRETATION,
};
use crate::registry::{SeriesRegistry, SpaceRegistry};
use crate::storage::Storage;
use crate::{Result, TimeSeries};
use serde::{Deserialize, Serialize};

/// The flat persisted aggregate: every annotation and registry entry
/// for one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Db {
    /// Plain free-form notes.
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Annotated terms.
    #[serde(default)]
    pub terms: Vec<Term>,
    /// Annotated constructors.
    #[serde(default)]
    pub constructors: Vec<Constructor>,
    /// Annotated functions.
    #[serde(default)]
    pub function_items: Vec<FunctionItem>,
    /// The coordinate-space registry.
    #[serde(flatten)]
    pub spaces: SpaceRegistry,
    /// The time-series registry.
    #[serde(flatten)]
    pub series: SeriesRegistry,
    /// Next id handed out to a term, note, constructor, or function.
    #[serde(default)]
    pub next_id: u64,
    /// Session-wide interpretation creation-order counter.
    #[serde(default)]
    pub current_interpretation_number: u64,
}

/// A rescan span paired with the snippet text read back from the file.
#[derive(Debug, Clone)]
pub struct RescanSpan {
    /// The descriptor returned by the re-population endpoint.
    pub descriptor: SpanDescriptor,
    /// Source text covered by the span, best effort.
    pub snippet: String,
}

/// Counts from one reconciliation pass, for logging and assertions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Terms whose text/error were refreshed from the update list.
    pub updated: usize,
    /// Spans re-created for the active file.
    pub repopulated: usize,
    /// Rescan spans discarded for non-positive coordinates.
    pub discarded: usize,
}

/// The persisted annotation store.
///
/// Owns the in-memory [`Db`] and the storage backend; every mutating
/// method flushes before returning.
pub struct Store<S: Storage> {
    db: Db,
    backend: S,
}

impl<S: Storage> Store<S> {
    /// Opens the store, loading any existing database.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to load.
    pub fn open(backend: S) -> Result<Self> {
        let db = backend.load()?;
        Ok(Self { db, backend })
    }

    /// Read-only view of the database.
    #[must_use]
    pub const fn db(&self) -> &Db {
        &self.db
    }

    /// The coordinate-space registry.
    #[must_use]
    pub const fn spaces(&self) -> &SpaceRegistry {
        &self.db.spaces
    }

    /// The time-series registry.
    #[must_use]
    pub const fn series(&self) -> &SeriesRegistry {
        &self.db.series
    }

    /// Current value of the interpretation creation-order counter.
    #[must_use]
    pub const fn interpretation_order(&self) -> u64 {
        self.db.current_interpretation_number
    }

    /// Advances the creation-order counter after a fully successful
    /// wizard run and makes the new value durable.
    pub fn advance_interpretation_order(&mut self, by: u64) -> Result<()> {
        self.db.current_interpretation_number += by;
        self.flush()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.db.next_id;
        self.db.next_id += 1;
        id
    }

    fn flush(&self) -> Result<()> {
        self.backend.save(&self.db)
    }

    // --- terms ---

    /// All terms.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.db.terms
    }

    /// Finds a term by id.
    #[must_use]
    pub fn find_term(&self, id: u64) -> Option<&Term> {
        self.db.terms.iter().find(|t| t.id == id)
    }

    /// Adds a term, assigning it a fresh id.
    pub fn add_term(&mut self, mut term: Term) -> Result<u64> {
        let id = self.allocate_id();
        term.id = id;
        self.db.terms.push(term);
        self.flush()?;
        Ok(id)
    }

    /// Removes a term; `false` when the id is unknown.
    pub fn remove_term(&mut self, id: u64) -> Result<bool> {
        let before = self.db.terms.len();
        self.db.terms.retain(|t| t.id != id);
        let removed = self.db.terms.len() != before;
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    /// Sets a term's status; `false` when the id is unknown.
    pub fn set_term_status(&mut self, id: u64, status: Status) -> Result<bool> {
        match self.db.terms.iter_mut().find(|t| t.id == id) {
            Some(term) => {
                term.status = status;
                self.flush()?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// Attaches an interpretation to a term and marks it done;
    /// `false` when the id is unknown.
    pub fn attach_term_interpretation(
        &mut self,
        id: u64,
        interpretation: Interpretation,
    ) -> Result<bool> {
        match self.db.terms.iter_mut().find(|t| t.id == id) {
            Some(term) => {
                term.interpretation = Some(interpretation);
                term.status = Status::Done;
                self.flush()?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    // --- constructors ---

    /// All constructors.
    #[must_use]
    pub fn constructors(&self) -> &[Constructor] {
        &self.db.constructors
    }

    /// Finds a constructor by id.
    #[must_use]
    pub fn find_constructor(&self, id: u64) -> Option<&Constructor> {
        self.db.constructors.iter().find(|c| c.id == id)
    }

    /// Adds a constructor, assigning it a fresh id.
    pub fn add_constructor(&mut self, mut cons: Constructor) -> Result<u64> {
        let id = self.allocate_id();
        cons.id = id;
        self.db.constructors.push(cons);
        self.flush()?;
        Ok(id)
    }

    /// Attaches an interpretation to a constructor; `false` when the id
    /// is unknown.
    pub fn attach_constructor_interpretation(
        &mut self,
        id: u64,
        interpretation: Interpretation,
    ) -> Result<bool> {
        match self.db.constructors.iter_mut().find(|c| c.id == id) {
            Some(cons) => {
                cons.interpretation = Some(interpretation);
                cons.status = Status::Done;
                self.flush()?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    // --- function items ---

    /// All function items.
    #[must_use]
    pub fn function_items(&self) -> &[FunctionItem] {
        &self.db.function_items
    }

    /// Finds a function item by id.
    #[must_use]
    pub fn find_function_item(&self, id: u64) -> Option<&FunctionItem> {
        self.db.function_items.iter().find(|f| f.id == id)
    }

    /// Adds a function item, assigning it a fresh id.
    pub fn add_function_item(&mut self, mut func: FunctionItem) -> Result<u64> {
        let id = self.allocate_id();
        func.id = id;
        self.db.function_items.push(func);
        self.flush()?;
        Ok(id)
    }

    /// Attaches an interpretation to a function item; `false` when the
    /// id is unknown.
    pub fn attach_function_interpretation(
        &mut self,
        id: u64,
        interpretation: Interpretation,
    ) -> Result<bool> {
        match self.db.function_items.iter_mut().find(|f| f.id == id) {
            Some(func) => {
                func.interpretation = Some(interpretation);
                func.status = Status::Done;
                self.flush()?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    // --- notes ---

    /// All notes.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.db.notes
    }

    /// Adds a note, assigning it a fresh id.
    pub fn add_note(&mut self, file_name: impl Into<String>, span: Span, text: impl Into<String>) -> Result<u64> {
        let id = self.allocate_id();
        self.db.notes.push(Note {
            id,
            file_name: file_name.into(),
            span,
            text: text.into(),
            status: Status::Pending,
        });
        self.flush()?;
        Ok(id)
    }

    /// Removes a note; `false` when the id is unknown.
    pub fn remove_note(&mut self, id: u64) -> Result<bool> {
        let before = self.db.notes.len();
        self.db.notes.retain(|n| n.id != id);
        let removed = self.db.notes.len() != before;
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    /// Sets a note's status; `false` when the id is unknown.
    pub fn set_note_status(&mut self, id: u64, status: Status) -> Result<bool> {
        match self.db.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.status = status;
                self.flush()?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    // --- registries ---

    /// Appends a space to the registry and persists.
    pub fn add_space(&mut self, space: crate::models::Space) -> Result<()> {
        self.db.spaces.insert(space)?;
        self.flush()
    }

    /// Registers a time series and persists.
    pub fn add_series(&mut self, series: TimeSeries) -> Result<()> {
        self.db.series.create_series(series)?;
        self.flush()
    }

    /// Appends a value to the named series' local mirror and persists;
    /// `false` when no series has that name.
    pub fn append_series_value(&mut self, name: &str, value: Interpretation) -> Result<bool> {
        if self.db.series.append_value(name, value) {
            self.flush()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // --- reconciliation ---

    /// Merges a check cycle's results back into the store.
    ///
    /// Text/error updates are matched to local terms by id, so a
    /// reordering of either side cannot misassign results. Afterwards
    /// every span of the active file is replaced from the rescan
    /// descriptors; descriptors with a non-positive line or character at
    /// either endpoint carry no location and are discarded.
    pub fn reconcile_from_remote(
        &mut self,
        updates: &[Term],
        rescan: &[RescanSpan],
        active_file: &str,
    ) -> Result<ReconcileSummary> {
        let mut summary = ReconcileSummary::default();

        for update in updates {
            if let Some(term) = self.db.terms.iter_mut().find(|t| t.id == update.id) {
                term.text = update.text.clone();
                term.error = update.error.clone();
                summary.updated += 1;
            }
        }

        self.db.terms.retain(|t| t.file_name != active_file);
        for span in rescan {
            if !span.descriptor.coords.is_positive() {
                summary.discarded += 1;
                continue;
            }
            let id = self.allocate_id();
            self.db.terms.push(Term {
                id,
                file_name: active_file.to_string(),
                span: span.descriptor.coords,
                code_snippet: span.snippet.clone(),
                name: String::new(),
                node_type: span.descriptor.node_type.clone(),
                status: Status::Pending,
                text: NO_INTERPRETATION.to_string(),
                error: span.descriptor.error.clone(),
                interpretation: None,
            });
            summary.repopulated += 1;
        }

        self.flush()?;
        Ok(summary)
    }
}
