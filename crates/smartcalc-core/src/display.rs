//! Display formatting. Presentation only: nothing here changes state.

use crate::calculator::CalculatorState;
use crate::numeric::{format_exponential, format_fixed, parse_leading_float};

/// Inputs longer than this switch to exponent notation.
const MAX_PLAIN_LENGTH: usize = 10;

/// Format the current input for the main display.
///
/// Text that does not parse as a number is shown untouched. Long inputs
/// are shown as `d.dddddde±N`; everything else with two decimals, minus a
/// trailing `.00`.
pub fn format_display(num: &str) -> String {
    let value = parse_leading_float(num);
    if value.is_nan() {
        return num.to_string();
    }
    if num.chars().count() > MAX_PLAIN_LENGTH {
        return format_exponential(value, 6);
    }

    let fixed = format_fixed(value, 2);
    match fixed.strip_suffix(".00") {
        Some(stripped) => stripped.to_string(),
        None => fixed,
    }
}

/// The small line above the display: `"<operand> <operator>"`, or empty
/// when nothing is pending.
pub fn pending_line(state: &CalculatorState) -> String {
    match state.pending() {
        Some(pending) => format!("{} {}", pending.operand, pending.operator),
        None => String::new(),
    }
}
