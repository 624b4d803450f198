//! Extraction of importable values from free-text AI answers.
//!
//! This is best-effort scraping. Prose containing several numbers (dates,
//! ranges, step-by-step working) may well produce the wrong pair; the
//! result is only ever offered to the user, never applied on its own.

use lazy_static::lazy_static;
use regex::Regex;

use crate::calculator::{CalculatorState, Operator};

lazy_static! {
    /// `<number> <op> <number>`, ASCII digits only, optional signs and fractions.
    static ref BINARY_EXPRESSION: Regex = Regex::new(
        r"(-?[0-9]+(?:\.[0-9]+)?)\s*([+\-×÷*/])\s*(-?[0-9]+(?:\.[0-9]+)?)"
    ).unwrap();

    /// First signed decimal number anywhere in the text.
    static ref BARE_NUMBER: Regex = Regex::new(
        r"-?[0-9]+(?:\.[0-9]+)?"
    ).unwrap();
}

/// What importing an AI answer would do to the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportAction {
    /// Stage `left operator right` without evaluating it
    StagePair {
        left: String,
        operator: Operator,
        right: String,
    },
    /// Replace the current input
    SetCurrent(String),
}

impl ImportAction {
    /// Write the extracted values into the calculator state.
    pub fn apply(&self, state: &mut CalculatorState) {
        match self {
            ImportAction::StagePair { left, operator, right } => {
                state.stage(left.clone(), *operator, right.clone());
            }
            ImportAction::SetCurrent(value) => state.set_current(value.clone()),
        }
    }

    /// Short preview, e.g. `5 + 3` or `-42.5`
    pub fn describe(&self) -> String {
        match self {
            ImportAction::StagePair { left, operator, right } => format!("{} {} {}", left, operator, right),
            ImportAction::SetCurrent(value) => value.clone(),
        }
    }
}

/// Find something importable in `text`: a binary expression first, then a
/// bare number. `None` when the text has no digits at all.
pub fn interpret(text: &str) -> Option<ImportAction> {
    if let Some(caps) = BINARY_EXPRESSION.captures(text) {
        let operator = caps
            .get(2)
            .and_then(|m| m.as_str().chars().next())
            .and_then(Operator::from_symbol);
        if let (Some(left), Some(operator), Some(right)) = (caps.get(1), operator, caps.get(3)) {
            return Some(ImportAction::StagePair {
                left: left.as_str().to_string(),
                operator,
                right: right.as_str().to_string(),
            });
        }
    }

    BARE_NUMBER
        .find(text)
        .map(|m| ImportAction::SetCurrent(m.as_str().to_string()))
}

/// Whether an "import to calculator" action should be offered for `text`.
pub fn has_import(text: &str) -> bool {
    BINARY_EXPRESSION.is_match(text) || BARE_NUMBER.is_match(text)
}
