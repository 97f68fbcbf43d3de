//! Terminal implementation of the wizard's question capability.

use crate::wizard::{parse_number, QuestionAsker};
use std::io::{self, BufRead, Write};

/// Asks wizard questions over stdin/stdout.
///
/// An empty answer (or EOF) cancels the current question, which aborts
/// the whole flow; junk input to a numeric question is re-asked, never
/// coerced.
#[derive(Default)]
pub struct TerminalAsker;

impl TerminalAsker {
    /// Creates a terminal asker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn read_line() -> Option<String> {
        let mut line = String::new();
        let stdin = io::stdin();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn show(prompt: &str) {
        print!("{prompt} ");
        let _ = io::stdout().flush();
    }
}

impl QuestionAsker for TerminalAsker {
    fn pick_one(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        if options.is_empty() {
            println!("{prompt}: nothing to choose from");
            return None;
        }
        println!("{prompt}:");
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {option}", i + 1);
        }
        loop {
            Self::show(">");
            let line = Self::read_line()?;
            if line.is_empty() {
                return None;
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Some(n - 1),
                _ => println!("Enter a number between 1 and {}", options.len()),
            }
        }
    }

    fn pick_number(&mut self, prompt: &str) -> Option<f64> {
        loop {
            Self::show(prompt);
            let line = Self::read_line()?;
            if line.is_empty() {
                return None;
            }
            match parse_number(&line) {
                Some(value) => return Some(value),
                None => println!("Enter a number"),
            }
        }
    }

    fn pick_text(&mut self, prompt: &str, default: Option<&str>) -> Option<String> {
        match default {
            Some(d) => Self::show(&format!("{prompt} [{d}]")),
            None => Self::show(prompt),
        }
        let line = Self::read_line()?;
        if line.is_empty() {
            if let Some(d) = default {
                return Some(d.to_string());
            }
        }
        Some(line)
    }
}
