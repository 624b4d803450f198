//! Calculator state reducer.
//!
//! Operators are applied strictly left to right with no precedence:
//! entering `2 + 3 × 4 =` yields `20`, because choosing `×` first folds
//! `2 + 3` into the pending operand.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;
use crate::history::HistoryItem;
use crate::keypad::Key;
use crate::numeric::{format_number, parse_leading_float, round_to_precision};

/// Text of a freshly cleared operand.
pub const INITIAL_INPUT: &str = "0";

/// The four binary operators on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    /// Symbol shown on the display and in history entries
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parse an operator symbol, accepting the ASCII spellings `*`, `x` and `/`
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' | 'x' | 'X' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator. Division by zero follows IEEE-754.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c).ok_or_else(|| CalcError::UnknownOperator(s.to_string())),
            _ => Err(CalcError::UnknownOperator(s.to_string())),
        }
    }
}

/// Operand and operator waiting for the second operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pending {
    pub operand: String,
    pub operator: Operator,
}

/// Flat view of the state, as shown to users and emitted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub current_input: String,
    pub previous_input: Option<String>,
    pub operator: Option<Operator>,
}

/// Current input plus the optional pending operand/operator pair.
///
/// The operand and operator are stored together, so one is never set
/// without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    current_input: String,
    pending: Option<Pending>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            pending: None,
        }
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn previous_input(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            current_input: self.current_input.clone(),
            previous_input: self.previous_input().map(str::to_string),
            operator: self.operator(),
        }
    }

    /// Append a digit or decimal point to the current input.
    ///
    /// A lone `0` is replaced by the digit (but kept before a decimal
    /// point); a second decimal point is ignored.
    pub fn enter_digit(&mut self, key: char) -> Result<(), CalcError> {
        if !key.is_ascii_digit() && key != '.' {
            return Err(CalcError::InvalidDigit(key));
        }

        if self.current_input == INITIAL_INPUT && key != '.' {
            self.current_input = key.to_string();
        } else if key == '.' && self.current_input.contains('.') {
            // already has a decimal point
        } else {
            self.current_input.push(key);
        }
        Ok(())
    }

    /// Choose the next operator.
    ///
    /// With an operator already pending and an edited current input, the
    /// pending pair is evaluated first and its result becomes the new
    /// operand; the completed operation is returned for the history.
    /// Otherwise the current input becomes the operand as-is.
    pub fn choose_operator(&mut self, operator: Operator) -> Option<HistoryItem> {
        let mut completed = None;

        let operand = match self.pending.take() {
            Some(pending) if self.current_input != INITIAL_INPUT => {
                let item = compute(&pending.operand, pending.operator, &self.current_input);
                let result = item.result.clone();
                completed = Some(item);
                result
            }
            _ => std::mem::replace(&mut self.current_input, INITIAL_INPUT.to_string()),
        };

        self.pending = Some(Pending { operand, operator });
        self.current_input = INITIAL_INPUT.to_string();
        completed
    }

    /// Evaluate the pending pair against the current input.
    ///
    /// Does nothing (and returns `None`) when no operator is pending.
    pub fn evaluate(&mut self) -> Option<HistoryItem> {
        let pending = self.pending.take()?;
        let item = compute(&pending.operand, pending.operator, &self.current_input);
        self.current_input = item.result.clone();
        Some(item)
    }

    pub fn clear(&mut self) {
        self.current_input = INITIAL_INPUT.to_string();
        self.pending = None;
    }

    /// Divide the current input by 100 in place.
    pub fn percent(&mut self) {
        let value = parse_leading_float(&self.current_input) / 100.0;
        self.current_input = format_number(value);
    }

    /// Negate the current input.
    pub fn toggle_sign(&mut self) {
        let value = parse_leading_float(&self.current_input) * -1.0;
        self.current_input = format_number(value);
    }

    /// Stage an operand/operator/operand triple without evaluating it.
    pub fn stage(&mut self, left: impl Into<String>, operator: Operator, right: impl Into<String>) {
        self.pending = Some(Pending {
            operand: left.into(),
            operator,
        });
        self.current_input = right.into();
    }

    /// Replace the current input, leaving any pending pair alone.
    pub fn set_current(&mut self, value: impl Into<String>) {
        self.current_input = value.into();
    }

    /// Dispatch a keypad key, returning the completed operation if the key
    /// finished one.
    pub fn press(&mut self, key: Key) -> Result<Option<HistoryItem>, CalcError> {
        match key {
            Key::Digit(d) => self.enter_digit(d).map(|()| None),
            Key::Operator(op) => Ok(self.choose_operator(op)),
            Key::Equals => Ok(self.evaluate()),
            Key::Clear => {
                self.clear();
                Ok(None)
            }
            Key::Percent => {
                self.percent();
                Ok(None)
            }
            Key::ToggleSign => {
                self.toggle_sign();
                Ok(None)
            }
        }
    }
}

fn compute(operand: &str, operator: Operator, current: &str) -> HistoryItem {
    let value = operator.apply(parse_leading_float(operand), parse_leading_float(current));
    let result = format_number(round_to_precision(value));
    HistoryItem::new(format!("{} {} {}", operand, operator, current), result)
}
