//! The check cycle: submit the active file's annotations, merge the
//! checker's answers back in, and re-populate the file's spans.

use super::Annotator;
use crate::models::Span;
use crate::remote::{CheckRequest, CheckerApi};
use crate::storage::Storage;
use crate::store::{ReconcileSummary, RescanSpan};
use crate::Result;
use std::fs;

impl<S: Storage, C: CheckerApi> Annotator<S, C> {
    /// Runs the two-step check cycle for the active file.
    ///
    /// `check2` re-checks every submitted term and the returned
    /// text/error fields are merged back by id. `check3` then yields the
    /// authoritative span list, which replaces all of the file's terms;
    /// unlocated spans (non-positive coordinates) are discarded.
    pub fn run_check(&mut self, active_file: &str) -> Result<ReconcileSummary> {
        let updates = {
            let request = CheckRequest {
                file: active_file,
                file_name: active_file,
                terms: self.store.terms(),
                spaces: self.store.spaces().iter_all().collect(),
                constructors: self.store.constructors(),
                function_items: self.store.function_items(),
            };
            self.checker.check_terms(&request)?
        };

        let rescan: Vec<RescanSpan> = self
            .checker
            .populate_all()?
            .into_iter()
            .map(|descriptor| {
                let snippet = read_snippet(active_file, &descriptor.coords);
                RescanSpan {
                    descriptor,
                    snippet,
                }
            })
            .collect();

        let summary = self
            .store
            .reconcile_from_remote(&updates, &rescan, active_file)?;
        tracing::info!(
            file = active_file,
            updated = summary.updated,
            repopulated = summary.repopulated,
            discarded = summary.discarded,
            "check cycle reconciled"
        );
        Ok(summary)
    }
}

/// Best-effort read of the source text a span covers; unlocated spans
/// and unreadable files yield an empty snippet.
fn read_snippet(path: &str, span: &Span) -> String {
    if !span.is_positive() {
        return String::new();
    }
    let Ok(content) = fs::read_to_string(path) else {
        return String::new();
    };
    let lines: Vec<&str> = content.lines().collect();
    let first = usize::try_from(span.begin.line - 1).unwrap_or(0);
    let last = usize::try_from(span.end.line - 1).unwrap_or(0);
    if first >= lines.len() || last < first {
        return String::new();
    }
    let last = last.min(lines.len() - 1);
    if first == last {
        let from = usize::try_from(span.begin.character - 1).unwrap_or(0);
        let to = usize::try_from(span.end.character - 1).unwrap_or(usize::MAX);
        return lines[first]
            .chars()
            .skip(from)
            .take(to.saturating_sub(from))
            .collect();
    }
    lines[first..=last].join("\n")
}
