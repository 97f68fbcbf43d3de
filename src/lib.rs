//! # peirce-annotate
//!
//! Typed physical-semantics annotations for code spans.
//!
//! peirce-annotate attaches interpretations — durations, positions,
//! orientations, poses, coordinate-space transforms and time series of
//! those — to spans of source code, and keeps them synchronized with a
//! Peirce type-checking service over HTTP.
//!
//! ## Architecture
//!
//! - Data model: coordinate [`Space`]s, tagged-union [`Interpretation`]s,
//!   annotated [`Term`]s and plain [`Note`]s, named [`TimeSeries`]
//! - Wizard: a cancellable, question-driven [`InterpretationBuilder`]
//!   behind the [`QuestionAsker`] capability trait
//! - Registries: append-only catalogues of spaces and time series
//! - Store: the persisted annotation database, flushed after every
//!   mutation through the [`Storage`] capability
//! - Remote: the [`CheckerApi`] client for the Peirce service
//!
//! ## Example
//!
//! ```rust,ignore
//! use peirce_annotate::{Annotator, HttpChecker, JsonFileStorage, Store};
//!
//! let store = Store::open(JsonFileStorage::new(".peirce/annotations.json"))?;
//! let checker = HttpChecker::new("http://0.0.0.0:8080/api");
//! let mut annotator = Annotator::new(store, checker);
//! annotator.annotate_term(3, &mut asker)?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod models;
pub mod registry;
pub mod remote;
pub mod services;
pub mod storage;
pub mod store;
pub mod wizard;

// Re-exports for convenience
pub use config::PeirceConfig;
pub use models::{
    Interpretation, Note, SeriesSpec, Space, SpaceKind, SpanDescriptor, Status, Term, TimeSeries,
};
pub use registry::{SeriesRegistry, SpaceRegistry};
pub use remote::{CheckerApi, HttpChecker};
pub use services::{Annotator, Outcome};
pub use storage::{JsonFileStorage, Storage};
pub use store::{Db, Store};
pub use wizard::{InterpretationBuilder, QuestionAsker};

/// Error type for peirce-annotate operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// User cancellation is *not* an error: wizard flows return `Option` and
/// abort silently. Lookups of missing ids return `Option` and are no-ops.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A space label or series name collides with an existing one
    /// - A derived space names a parent that is not registered
    /// - Basis/origin dimensionality does not match the space kind
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The annotation database cannot be read or written
    /// - A request to the Peirce service fails at the transport level
    /// - The service answers with a non-success HTTP status
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for peirce-annotate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("bad label".to_string());
        assert_eq!(err.to_string(), "invalid input: bad label");

        let err = Error::OperationFailed {
            operation: "save_db".to_string(),
            cause: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'save_db' failed: disk full");
    }
}
