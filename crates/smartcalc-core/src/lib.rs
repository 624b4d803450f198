//! Core calculator logic for smartcalc
//!
//! This crate holds everything that is not presentation or I/O:
//! - `calculator`: the operand/operator state reducer
//! - `keypad`: keypad keys and parsing of typed key sequences
//! - `history`: the newest-first list of completed operations
//! - `display`: formatting of the current input for the screen
//! - `interpreter`: extraction of importable values from AI answers
//! - `numeric`: number <-> decimal text conversion rules shared by all of the above

pub mod calculator;
pub mod display;
pub mod error;
pub mod history;
pub mod interpreter;
pub mod keypad;
pub mod numeric;

#[cfg(test)]
mod tests;

pub use calculator::{CalculatorState, Operator, Pending, StateSnapshot};
pub use display::{format_display, pending_line};
pub use error::CalcError;
pub use history::{History, HistoryItem};
pub use interpreter::{has_import, interpret, ImportAction};
pub use keypad::{parse_keys, Key};
