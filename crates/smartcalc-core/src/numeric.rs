//! Number <-> decimal text conversion.
//!
//! Operands live as text. These helpers define exactly how that text turns
//! into an `f64` and back, so results such as `0.1 + 0.2` show up as `0.3`
//! and special values (`NaN`, `Infinity`) survive a round trip through the
//! operand fields.

/// Extra digits requested from the formatter before rounding by hand.
/// Enough that no finite `f64` is mistaken for an exact tie.
const GUARD_DIGITS: usize = 30;

/// Scale used to drop floating point noise from results (8 fractional digits).
const RESULT_SCALE: f64 = 100_000_000.0;

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped, then an optional sign followed by either
/// `Infinity` or a decimal literal with optional fraction and exponent.
/// Anything that does not start like a number yields `NaN`.
pub fn parse_leading_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digit_count > 0 || frac_end > frac_start {
            digit_count += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digit_count == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Render `x` as the shortest decimal text that parses back to the same value.
///
/// Integral values print without a fraction, `-0` prints as `0`, and
/// exponent notation (`1e+21`, `1.5e-7`) is used once the decimal exponent
/// reaches 21 or drops below -6.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let sign = if x < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", x.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{}{}", sign, scientific);
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let e_sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, e_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, e_sign, e.abs())
        }
    };

    format!("{}{}", sign, body)
}

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round a computed result to 8 fractional digits.
pub fn round_to_precision(x: f64) -> f64 {
    round_half_up(x * RESULT_SCALE) / RESULT_SCALE
}

/// Fixed-point text with `fraction_digits` digits after the point.
///
/// Ties round away from zero. Non-finite values and magnitudes of 1e21 or
/// more fall back to [`format_number`].
pub fn format_fixed(x: f64, fraction_digits: usize) -> String {
    if !x.is_finite() || x.abs() >= 1e21 {
        return format_number(x);
    }

    let text = format!("{:.*}", fraction_digits + GUARD_DIGITS, x.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let mut int_len = int_part.len();
    if round_digits(&mut digits, int_len + fraction_digits) {
        int_len += 1;
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if x < 0.0 {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if fraction_digits > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    out
}

/// Exponent notation with `fraction_digits` mantissa digits, e.g. `1.234568e+10`.
///
/// Ties round away from zero. Non-finite values fall back to [`format_number`].
pub fn format_exponential(x: f64, fraction_digits: usize) -> String {
    if !x.is_finite() {
        return format_number(x);
    }

    let text = format!("{:.*e}", fraction_digits + GUARD_DIGITS, x.abs());
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa.bytes().filter(|b| *b != b'.').collect();
    if round_digits(&mut digits, fraction_digits + 1) {
        digits.truncate(fraction_digits + 1);
        exponent += 1;
    }

    let mut out = String::with_capacity(fraction_digits + 8);
    if x < 0.0 {
        out.push('-');
    }
    out.push(digits[0] as char);
    if fraction_digits > 0 {
        out.push('.');
        out.extend(digits[1..].iter().map(|&d| d as char));
    }
    out.push('e');
    out.push(if exponent >= 0 { '+' } else { '-' });
    out.push_str(&exponent.abs().to_string());
    out
}

/// Round an ASCII digit string to `keep` digits, ties away from zero.
///
/// Returns `true` when the carry ran off the front and a new leading `1`
/// was inserted.
fn round_digits(digits: &mut Vec<u8>, keep: usize) -> bool {
    if digits.len() < keep {
        digits.resize(keep, b'0');
    }
    let round_up = digits.get(keep).is_some_and(|d| *d >= b'5');
    digits.truncate(keep);
    if !round_up {
        return false;
    }

    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}
