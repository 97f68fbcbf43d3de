//! Binary entry point for peirce-annotate.
//!
//! This binary provides the CLI interface for the annotation store and
//! its checking-service client.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use peirce_annotate::cli::{self, TerminalAsker};
use peirce_annotate::models::Status;
use peirce_annotate::{Annotator, HttpChecker, JsonFileStorage, PeirceConfig, Store};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// peirce-annotate - typed physical-semantics annotations for code spans.
#[derive(Parser)]
#[command(name = "peirce-annotate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Manage coordinate spaces.
    Space {
        #[command(subcommand)]
        action: SpaceAction,
    },

    /// Manage time series.
    Series {
        #[command(subcommand)]
        action: SeriesAction,
    },

    /// Run the interpretation wizard on an annotation target.
    Annotate {
        #[command(subcommand)]
        target: AnnotateTarget,
    },

    /// List annotated terms.
    Term,

    /// Manage plain notes.
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Run the check cycle for a file.
    Check {
        /// Path of the file to check.
        file: String,
    },

    /// Show annotation counts.
    Status,
}

/// Space subcommands.
#[derive(Subcommand)]
enum SpaceAction {
    /// Create a coordinate space.
    Add,
    /// List registered spaces.
    List,
}

/// Series subcommands.
#[derive(Subcommand)]
enum SeriesAction {
    /// Create a time series.
    Add,
    /// Append a value to an existing series.
    AddValue,
    /// List registered series.
    List,
}

/// Annotation targets.
#[derive(Subcommand)]
enum AnnotateTarget {
    /// Annotate a term.
    Term {
        /// Term id.
        id: u64,
    },
    /// Annotate a constructor.
    Constructor {
        /// Constructor id.
        id: u64,
    },
    /// Annotate a function item.
    Function {
        /// Function id.
        id: u64,
    },
}

/// Note subcommands.
#[derive(Subcommand)]
enum NoteAction {
    /// Add a note to a file/line.
    Add {
        /// Path of the file.
        file: String,
        /// Line number.
        line: i64,
        /// Note text.
        text: String,
    },
    /// List notes.
    List,
    /// Mark a note done.
    Check {
        /// Note id.
        id: u64,
    },
    /// Mark a note pending again.
    Uncheck {
        /// Note id.
        id: u64,
    },
    /// Remove a note.
    Remove {
        /// Note id.
        id: u64,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> peirce_annotate::Result<()> {
    let config = PeirceConfig::load(cli.config.as_deref())?;
    let store = Store::open(JsonFileStorage::new(&config.data_file))?;
    let checker = HttpChecker::new(config.api_base_url());
    let mut annotator = Annotator::new(store, checker);
    let mut ask = TerminalAsker::new();

    match cli.command {
        Commands::Space { action } => match action {
            SpaceAction::Add => cli::cmd_space_add(&mut annotator, &mut ask)?,
            SpaceAction::List => cli::cmd_space_list(&annotator),
        },
        Commands::Series { action } => match action {
            SeriesAction::Add => cli::cmd_series_add(&mut annotator, &mut ask)?,
            SeriesAction::AddValue => cli::cmd_series_add_value(&mut annotator, &mut ask)?,
            SeriesAction::List => cli::cmd_series_list(&annotator),
        },
        Commands::Annotate { target } => match target {
            AnnotateTarget::Term { id } => cli::cmd_annotate_term(&mut annotator, id, &mut ask)?,
            AnnotateTarget::Constructor { id } => {
                cli::cmd_annotate_constructor(&mut annotator, id, &mut ask)?;
            },
            AnnotateTarget::Function { id } => {
                cli::cmd_annotate_function(&mut annotator, id, &mut ask)?;
            },
        },
        Commands::Term => cli::cmd_term_list(&annotator),
        Commands::Note { action } => match action {
            NoteAction::Add { file, line, text } => {
                cli::cmd_note_add(&mut annotator, &file, line, &text)?;
            },
            NoteAction::List => cli::cmd_note_list(&annotator),
            NoteAction::Check { id } => {
                cli::cmd_note_set_status(&mut annotator, id, Status::Done)?;
            },
            NoteAction::Uncheck { id } => {
                cli::cmd_note_set_status(&mut annotator, id, Status::Pending)?;
            },
            NoteAction::Remove { id } => cli::cmd_note_remove(&mut annotator, id)?,
        },
        Commands::Check { file } => cli::cmd_check(&mut annotator, &file)?,
        Commands::Status => cli::cmd_status(&annotator),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}
