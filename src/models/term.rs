//! Code-span annotation types: terms, constructors, function items, notes.

use super::interpretation::Interpretation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default checked-interpretation text for freshly populated spans.
pub const NO_INTERPRETATION: &str = "No interpretation provided";

/// A line/character position inside a source file.
///
/// The checker reports unlocated nodes with non-positive coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub line: i64,
    /// 1-based character column.
    pub character: i64,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(line: i64, character: i64) -> Self {
        Self { line, character }
    }

    /// Whether both coordinates are positive (i.e. the node is located).
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.line > 0 && self.character > 0
    }
}

/// A half-open source span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start of the span.
    pub begin: Position,
    /// End of the span.
    pub end: Position,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(begin: Position, end: Position) -> Self {
        Self { begin, end }
    }

    /// Whether both endpoints are located (all coordinates positive).
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.begin.is_positive() && self.end.is_positive()
    }
}

/// Completion status of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Awaiting an interpretation.
    #[default]
    Pending,
    /// Interpretation provided and accepted.
    Done,
}

impl Status {
    /// Returns the status as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An annotated code span with optional attached interpretation and
/// error state.
///
/// The camel-cased field renames preserve the wire shape the checking
/// service expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Store-assigned integer id.
    pub id: u64,
    /// Path of the file the span lives in.
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Location of the span.
    pub span: Span,
    /// The annotated source text.
    #[serde(rename = "codeSnippet")]
    pub code_snippet: String,
    /// Node name reported by the checker (identifiers carry their own).
    pub name: String,
    /// Type tag of the AST node.
    pub node_type: String,
    /// Completion status.
    pub status: Status,
    /// Checked-interpretation text from the last check cycle.
    pub text: String,
    /// Error message from the last check cycle.
    pub error: String,
    /// The attached interpretation, if any.
    pub interpretation: Option<Interpretation>,
}

impl Term {
    /// Whether the underlying AST node is an identifier.
    ///
    /// Identifier nodes already carry a name, so the wizard skips the
    /// name prompt for them.
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.node_type.contains("IDENT")
    }
}

/// A constructor annotation. Constructors are named checker-side
/// objects without a span of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    /// Store-assigned integer id.
    pub id: u64,
    /// Constructor name.
    pub name: String,
    /// Type tag of the AST node.
    pub node_type: String,
    /// Completion status.
    pub status: Status,
    /// The attached interpretation, if any.
    pub interpretation: Option<Interpretation>,
}

/// A function annotation, parallel to [`Constructor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionItem {
    /// Store-assigned integer id.
    pub id: u64,
    /// Function name.
    pub name: String,
    /// Type tag of the AST node.
    pub node_type: String,
    /// Completion status.
    pub status: Status,
    /// The attached interpretation, if any.
    pub interpretation: Option<Interpretation>,
}

/// A plain free-form note attached to a code span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned integer id.
    pub id: u64,
    /// Path of the file the note lives in.
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Location of the note.
    pub span: Span,
    /// The note text.
    pub text: String,
    /// Completion status.
    pub status: Status,
}

/// A span descriptor returned by the full re-population endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanDescriptor {
    /// Location of the span; non-positive coordinates mean "no location".
    pub coords: Span,
    /// Type tag of the AST node.
    pub node_type: String,
    /// Error message from the checker.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_positivity() {
        let located = Span::new(Position::new(3, 1), Position::new(3, 14));
        assert!(located.is_positive());

        let unlocated = Span::new(Position::new(0, 0), Position::new(3, 14));
        assert!(!unlocated.is_positive());

        let negative = Span::new(Position::new(4, 2), Position::new(-1, 7));
        assert!(!negative.is_positive());
    }

    #[test]
    fn test_term_identifier_detection() {
        let mut term = Term {
            id: 1,
            file_name: "main.cpp".to_string(),
            span: Span::new(Position::new(1, 1), Position::new(1, 5)),
            code_snippet: "dt".to_string(),
            name: "dt".to_string(),
            node_type: "IDENT_REAL1_VAR".to_string(),
            status: Status::Pending,
            text: NO_INTERPRETATION.to_string(),
            error: String::new(),
            interpretation: None,
        };
        assert!(term.is_identifier());
        term.node_type = "REAL1_EXPR".to_string();
        assert!(!term.is_identifier());
    }

    #[test]
    fn test_term_wire_field_names() {
        let term = Term {
            id: 7,
            file_name: "main.cpp".to_string(),
            span: Span::new(Position::new(2, 3), Position::new(2, 9)),
            code_snippet: "x + y".to_string(),
            name: String::new(),
            node_type: "ADD_EXPR".to_string(),
            status: Status::Done,
            text: NO_INTERPRETATION.to_string(),
            error: String::new(),
            interpretation: None,
        };
        let json = serde_json::to_value(&term).unwrap();
        assert_eq!(json["fileName"], "main.cpp");
        assert_eq!(json["codeSnippet"], "x + y");
        assert_eq!(json["status"], "done");
    }
}
