//! CLI command implementations.
//!
//! Each command wires the [`Annotator`](crate::services::Annotator) to
//! the terminal: a [`TerminalAsker`] answers the wizards' questions
//! from stdin, and results are printed to stdout.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `space` | Create or list coordinate spaces |
//! | `series` | Create series, append values, list |
//! | `annotate` | Run the interpretation wizard on a term/constructor/function |
//! | `term` | List annotated terms |
//! | `note` | Plain free-form notes on code spans |
//! | `check` | Run the check cycle for a file |
//! | `status` | Show annotation counts |

// CLI modules talk to the terminal directly.
#![allow(clippy::print_stdout)]

mod commands;
mod prompt;

pub use commands::{
    cmd_annotate_constructor, cmd_annotate_function, cmd_annotate_term, cmd_check, cmd_note_add,
    cmd_note_list, cmd_note_remove, cmd_note_set_status, cmd_series_add, cmd_series_add_value,
    cmd_series_list, cmd_space_add, cmd_space_list, cmd_status, cmd_term_list,
};
pub use prompt::TerminalAsker;
