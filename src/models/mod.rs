//! Data models for peirce-annotate.
//!
//! This module contains all the core data structures used throughout the system.

mod interpretation;
mod series;
mod space;
mod term;

pub use interpretation::{InterpBody, InterpKind, Interpretation, IDENTIFIER_NAME};
pub use series::{SeriesSpec, TimeSeries};
pub use space::{Space, SpaceKind};
pub use term::{
    Constructor, FunctionItem, Note, Position, Span, SpanDescriptor, Status, Term, NO_INTERPRETATION,
};
