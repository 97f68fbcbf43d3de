//! Question-driven builders for interpretations, spaces, and series.
//!
//! All prompting goes through the [`QuestionAsker`] capability so the
//! builders stay independent of any concrete UI. Every question is
//! cancellable; a cancelled question aborts the whole flow with no side
//! effects — no registry writes, no counter movement.

mod builder;
mod series;
mod space;

pub use builder::{BuildContext, BuiltInterpretation, InterpretationBuilder};
pub use series::{build_series, build_series_value};
pub use space::build_space;

use crate::models::{Space, SpaceKind};
use crate::registry::SpaceRegistry;

/// Capability for asking the user typed questions.
///
/// Every method returns `None` when the user backs out; callers must
/// treat that as a total abort of the current flow.
pub trait QuestionAsker {
    /// Asks the user to pick one of the given options; returns the
    /// selected index.
    fn pick_one(&mut self, prompt: &str, options: &[String]) -> Option<usize>;

    /// Asks the user for a number. Implementations must reject
    /// non-numeric text (see [`parse_number`]) rather than coercing it.
    fn pick_number(&mut self, prompt: &str) -> Option<f64>;

    /// Asks the user for free text.
    fn pick_text(&mut self, prompt: &str, default: Option<&str>) -> Option<String>;
}

/// Parses user-supplied numeric text.
///
/// Accepts anything `f64` parses to a finite value; everything else —
/// junk text, empty input, NaN, infinities — is rejected as `None`.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Asks the user to select a registered space of the given kind.
pub(crate) fn pick_space(
    registry: &SpaceRegistry,
    kind: SpaceKind,
    prompt: &str,
    ask: &mut dyn QuestionAsker,
) -> Option<Space> {
    let spaces = registry.list(kind);
    let labels: Vec<String> = spaces.iter().map(|s| s.label.clone()).collect();
    let idx = ask.pick_one(prompt, &labels)?;
    spaces.get(idx).cloned()
}

/// Asks the twelve pose components: nine orientation values followed by
/// three position values.
pub(crate) fn ask_pose_values(ask: &mut dyn QuestionAsker) -> Option<Vec<f64>> {
    let mut values = Vec::with_capacity(12);
    for i in 0..9 {
        values.push(ask.pick_number(&format!("Orientation Value at index {i}?"))?);
    }
    for i in 0..3 {
        values.push(ask.pick_number(&format!("Position Value at index {i}?"))?);
    }
    Some(values)
}

/// Formats an interpretation display label, omitting the name prefix
/// for identifier nodes.
pub(crate) fn format_label(is_identifier: bool, name: &str, kind: &str, args: &str) -> String {
    if is_identifier {
        format!("{kind}({args})")
    } else {
        format!("{name} {kind}({args})")
    }
}

/// Joins numeric values for display labels.
pub(crate) fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_numeric_text() {
        assert_eq!(parse_number("5"), Some(5.0));
        assert_eq!(parse_number(" -2.25 "), Some(-2.25));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_number_rejects_junk() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("5 apples"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_label_formatting() {
        assert_eq!(format_label(false, "foo", "Time", "t0,5"), "foo Time(t0,5)");
        assert_eq!(format_label(true, "<identifier>", "Time", "t0,5"), "Time(t0,5)");
    }

    #[test]
    fn test_join_values_uses_shortest_form() {
        assert_eq!(join_values(&[5.0, 1.5, -2.0]), "5,1.5,-2");
    }
}
