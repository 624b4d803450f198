use thiserror::Error;

/// Errors raised when keypad input cannot be applied to the calculator.
///
/// None of these touch the calculator state: the offending key is dropped
/// and the caller reports the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(char),

    #[error("unknown key '{0}'")]
    UnknownKey(char),

    #[error("unknown operator '{0}' (expected one of + - × ÷ * /)")]
    UnknownOperator(String),
}
