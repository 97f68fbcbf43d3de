//! Shared test doubles: a scripted asker and a mock checking service.
#![allow(dead_code)]

use peirce_annotate::models::{
    Interpretation, Position, Space, Span, SpanDescriptor, Status, Term, TimeSeries,
    NO_INTERPRETATION,
};
use peirce_annotate::remote::{CheckRequest, CheckerApi};
use peirce_annotate::wizard::{parse_number, QuestionAsker};
use peirce_annotate::Result;
use std::cell::RefCell;
use std::collections::VecDeque;

/// One scripted answer to a wizard question.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Select the option with this label.
    Pick(&'static str),
    /// Select an option by index.
    PickIndex(usize),
    /// Raw text for a numeric prompt; run through the real numeric
    /// parser, so junk input aborts exactly like a real asker.
    Num(&'static str),
    /// Free-text answer.
    Text(&'static str),
    /// Back out of the question.
    Cancel,
}

/// Feeds a fixed sequence of answers to a wizard; an exhausted script
/// answers every further question with a cancellation.
#[derive(Default)]
pub struct ScriptedAsker {
    answers: VecDeque<Answer>,
    /// Every prompt asked, in order.
    pub prompts: Vec<String>,
    /// How many numeric prompts were asked.
    pub number_prompts: usize,
}

impl ScriptedAsker {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
            number_prompts: 0,
        }
    }
}

impl QuestionAsker for ScriptedAsker {
    fn pick_one(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front()? {
            Answer::Pick(label) => options.iter().position(|o| o == label),
            Answer::PickIndex(i) => (i < options.len()).then_some(i),
            _ => None,
        }
    }

    fn pick_number(&mut self, prompt: &str) -> Option<f64> {
        self.prompts.push(prompt.to_string());
        self.number_prompts += 1;
        match self.answers.pop_front()? {
            Answer::Num(raw) => parse_number(raw),
            _ => None,
        }
    }

    fn pick_text(&mut self, prompt: &str, default: Option<&str>) -> Option<String> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front()? {
            Answer::Text(s) => {
                if s.is_empty() {
                    default.map(ToString::to_string)
                } else {
                    Some(s.to_string())
                }
            },
            _ => None,
        }
    }
}

/// Checking-service double: records every call and answers with a
/// configurable verdict.
pub struct MockChecker {
    /// Verdict returned by every mutating endpoint.
    pub accept: bool,
    /// Endpoint names in call order.
    pub calls: RefCell<Vec<String>>,
    /// Answer for `check2`.
    pub check2: Vec<Term>,
    /// Answer for `check3`.
    pub check3: Vec<SpanDescriptor>,
}

impl Default for MockChecker {
    fn default() -> Self {
        Self {
            accept: true,
            calls: RefCell::new(Vec::new()),
            check2: Vec::new(),
            check3: Vec::new(),
        }
    }
}

impl MockChecker {
    pub fn rejecting() -> Self {
        Self {
            accept: false,
            ..Self::default()
        }
    }

    fn record(&self, endpoint: &str) {
        self.calls.borrow_mut().push(endpoint.to_string());
    }

    pub fn called(&self, endpoint: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == endpoint)
    }
}

impl CheckerApi for MockChecker {
    fn create_space(&self, _space: &Space) -> Result<bool> {
        self.record("createSpace");
        Ok(self.accept)
    }

    fn create_term_interpretation(&self, _term: &Term) -> Result<bool> {
        self.record("createTermInterpretation");
        Ok(self.accept)
    }

    fn create_constructor_interpretation(
        &self,
        _cons: &peirce_annotate::models::Constructor,
    ) -> Result<bool> {
        self.record("createConstructorInterpretation");
        Ok(self.accept)
    }

    fn create_function_interpretation(
        &self,
        _func: &peirce_annotate::models::FunctionItem,
    ) -> Result<bool> {
        self.record("createFunctionInterpretation");
        Ok(self.accept)
    }

    fn create_time_series(&self, _series: &TimeSeries) -> Result<bool> {
        self.record("createTimeSeries");
        Ok(self.accept)
    }

    fn add_value_to_time_series(&self, _value: &Interpretation) -> Result<bool> {
        self.record("addValueToTimeSeries");
        Ok(self.accept)
    }

    fn check_terms(&self, _request: &CheckRequest<'_>) -> Result<Vec<Term>> {
        self.record("check2");
        Ok(self.check2.clone())
    }

    fn populate_all(&self) -> Result<Vec<SpanDescriptor>> {
        self.record("check3");
        Ok(self.check3.clone())
    }
}

/// A pending term at the given file/node type.
pub fn term(file: &str, node_type: &str, name: &str) -> Term {
    Term {
        id: 0,
        file_name: file.to_string(),
        span: Span::new(Position::new(1, 1), Position::new(1, 8)),
        code_snippet: name.to_string(),
        name: name.to_string(),
        node_type: node_type.to_string(),
        status: Status::Pending,
        text: NO_INTERPRETATION.to_string(),
        error: String::new(),
        interpretation: None,
    }
}
