//! Keypad keys and parsing of typed key sequences.

use crate::calculator::Operator;
use crate::error::CalcError;

/// One press on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0`-`9` or the decimal point
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Percent,
    ToggleSign,
}

impl Key {
    /// Label printed on the physical key
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
            Key::Clear => "AC".to_string(),
            Key::Percent => "%".to_string(),
            Key::ToggleSign => "+/-".to_string(),
        }
    }
}

/// Parse a typed line into keypad presses.
///
/// Recognised spellings:
/// - `0`-`9` and `.` for digits
/// - `+ - * / x × ÷` for operators
/// - `=` to evaluate, `%` for percent
/// - `c`, `C` or `AC` to clear
/// - `+/-`, `±`, `n` or `N` to toggle the sign
///
/// Whitespace is ignored. `+/-` always means the sign toggle, never
/// "plus then divide then minus".
pub fn parse_keys(input: &str) -> Result<Vec<Key>, CalcError> {
    let chars: Vec<char> = input.chars().collect();
    let mut keys = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if chars[i..].starts_with(&['+', '/', '-']) {
            keys.push(Key::ToggleSign);
            i += 3;
            continue;
        }

        if chars[i..].starts_with(&['A', 'C']) {
            keys.push(Key::Clear);
            i += 2;
            continue;
        }

        let key = match c {
            '0'..='9' | '.' => Key::Digit(c),
            '=' => Key::Equals,
            '%' => Key::Percent,
            'c' | 'C' => Key::Clear,
            '±' | 'n' | 'N' => Key::ToggleSign,
            other => match Operator::from_symbol(other) {
                Some(op) => Key::Operator(op),
                None => return Err(CalcError::UnknownKey(other)),
            },
        };
        keys.push(key);
        i += 1;
    }

    Ok(keys)
}
