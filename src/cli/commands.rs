//! Command functions: thin glue between clap and the services.

use crate::models::{Position, Span, Status};
use crate::remote::CheckerApi;
use crate::services::{Annotator, Outcome};
use crate::storage::Storage;
use crate::wizard::QuestionAsker;
use crate::Result;

fn report(outcome: Outcome, what: &str) {
    match outcome {
        Outcome::Saved => println!("{what} saved"),
        Outcome::Cancelled => println!("{what} cancelled"),
        Outcome::RemoteRejected => {
            println!("The checking service rejected the {what}; nothing was saved. Try again.");
        },
        Outcome::NotFound => println!("No such {what}"),
    }
}

/// `space add`
pub fn cmd_space_add<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    ask: &mut dyn QuestionAsker,
) -> Result<()> {
    let outcome = annotator.add_space(ask)?;
    report(outcome, "space");
    Ok(())
}

/// `space list`
pub fn cmd_space_list<S: Storage, C: CheckerApi>(annotator: &Annotator<S, C>) {
    let spaces = annotator.store().spaces();
    if spaces.is_empty() {
        println!("No spaces registered");
        return;
    }
    for space in spaces.iter_all() {
        let derivation = space.parent.as_ref().map_or_else(
            || "standard".to_string(),
            |parent| format!("derived from {}", parent.label),
        );
        println!("{} [{}] {}", space.label, space.kind, derivation);
    }
}

/// `series add`
pub fn cmd_series_add<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    ask: &mut dyn QuestionAsker,
) -> Result<()> {
    let outcome = annotator.add_series(ask)?;
    report(outcome, "time series");
    Ok(())
}

/// `series add-value`
pub fn cmd_series_add_value<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    ask: &mut dyn QuestionAsker,
) -> Result<()> {
    let outcome = annotator.add_series_value(ask)?;
    report(outcome, "series value");
    Ok(())
}

/// `series list`
pub fn cmd_series_list<S: Storage, C: CheckerApi>(annotator: &Annotator<S, C>) {
    let series = annotator.store().series().list();
    if series.is_empty() {
        println!("No time series registered");
        return;
    }
    for s in series {
        println!("{s}: {} value(s)", s.values.len());
    }
}

/// `annotate term <id>`
pub fn cmd_annotate_term<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    id: u64,
    ask: &mut dyn QuestionAsker,
) -> Result<()> {
    let outcome = annotator.annotate_term(id, ask)?;
    report(outcome, "term interpretation");
    Ok(())
}

/// `annotate constructor <id>`
pub fn cmd_annotate_constructor<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    id: u64,
    ask: &mut dyn QuestionAsker,
) -> Result<()> {
    let outcome = annotator.annotate_constructor(id, ask)?;
    report(outcome, "constructor interpretation");
    Ok(())
}

/// `annotate function <id>`
pub fn cmd_annotate_function<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    id: u64,
    ask: &mut dyn QuestionAsker,
) -> Result<()> {
    let outcome = annotator.annotate_function(id, ask)?;
    report(outcome, "function interpretation");
    Ok(())
}

/// `term list`
pub fn cmd_term_list<S: Storage, C: CheckerApi>(annotator: &Annotator<S, C>) {
    let terms = annotator.store().terms();
    if terms.is_empty() {
        println!("No terms");
        return;
    }
    for term in terms {
        let interp = term
            .interpretation
            .as_ref()
            .map_or("no interpretation", |i| i.label.as_str());
        println!(
            "#{} {}:{} [{}] {} — {}",
            term.id, term.file_name, term.span.begin.line, term.status, term.code_snippet, interp
        );
        if !term.error.is_empty() {
            println!("    error: {}", term.error);
        }
    }
}

/// `note add <file> <line> <text>`
pub fn cmd_note_add<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    file: &str,
    line: i64,
    text: &str,
) -> Result<()> {
    let span = Span::new(Position::new(line, 1), Position::new(line, 1));
    let id = annotator.store_mut().add_note(file, span, text)?;
    println!("note #{id} added");
    Ok(())
}

/// `note list`
pub fn cmd_note_list<S: Storage, C: CheckerApi>(annotator: &Annotator<S, C>) {
    let notes = annotator.store().notes();
    if notes.is_empty() {
        println!("No notes");
        return;
    }
    for note in notes {
        println!(
            "#{} {}:{} [{}] {}",
            note.id, note.file_name, note.span.begin.line, note.status, note.text
        );
    }
}

/// `note check <id>` / `note uncheck <id>`
pub fn cmd_note_set_status<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    id: u64,
    status: Status,
) -> Result<()> {
    if annotator.store_mut().set_note_status(id, status)? {
        println!("note #{id} {status}");
    } else {
        println!("No such note");
    }
    Ok(())
}

/// `note remove <id>`
pub fn cmd_note_remove<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    id: u64,
) -> Result<()> {
    if annotator.store_mut().remove_note(id)? {
        println!("note #{id} removed");
    } else {
        println!("No such note");
    }
    Ok(())
}

/// `check <file>`
pub fn cmd_check<S: Storage, C: CheckerApi>(
    annotator: &mut Annotator<S, C>,
    file: &str,
) -> Result<()> {
    let summary = annotator.run_check(file)?;
    println!(
        "checked {file}: {} updated, {} spans repopulated, {} discarded",
        summary.updated, summary.repopulated, summary.discarded
    );
    Ok(())
}

/// `status`
pub fn cmd_status<S: Storage, C: CheckerApi>(annotator: &Annotator<S, C>) {
    let store = annotator.store();
    println!("terms:        {}", store.terms().len());
    println!("constructors: {}", store.constructors().len());
    println!("functions:    {}", store.function_items().len());
    println!("notes:        {}", store.notes().len());
    println!("spaces:       {}", store.spaces().len());
    println!("time series:  {}", store.series().list().len());
    println!("next order:   {}", store.interpretation_order());
}
