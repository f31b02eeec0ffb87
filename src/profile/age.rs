//! Age values and string-to-number coercion.
//!
//! The age input accepts arbitrary text. Coercion follows the usual
//! scripting-platform rules: surrounding white space is ignored, an empty
//! string is zero, `Infinity` and radix-prefixed integers are accepted, and
//! anything that is not a well-formed number becomes [`Age::NotANumber`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Age {
    Number(f64),
    /// Result of coercing non-numeric text. Stored as-is, never rejected.
    NotANumber,
}

impl Default for Age {
    fn default() -> Self {
        Age::Number(0.0)
    }
}

impl Age {
    /// Coerce free-form input text into an age.
    pub fn coerce(text: &str) -> Age {
        let trimmed = text.trim_matches(is_number_whitespace);
        if trimmed.is_empty() {
            return Age::Number(0.0);
        }

        match trimmed {
            "Infinity" | "+Infinity" => return Age::Number(f64::INFINITY),
            "-Infinity" => return Age::Number(f64::NEG_INFINITY),
            _ => {}
        }

        if let Some(value) = parse_radix_literal(trimmed) {
            return value.map_or(Age::NotANumber, Age::Number);
        }

        if !is_decimal_literal(trimmed) {
            return Age::NotANumber;
        }
        trimmed
            .parse::<f64>()
            .map_or(Age::NotANumber, Age::Number)
    }

    /// Zero (of either sign) and the sentinel are falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Age::Number(n) => *n == 0.0,
            Age::NotANumber => true,
        }
    }

    /// Text shown inside the age input: empty for falsy values.
    pub fn input_text(&self) -> String {
        if self.is_falsy() {
            String::new()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Age::NotANumber => f.write_str("NaN"),
            Age::Number(n) if n == f64::INFINITY => f.write_str("Infinity"),
            Age::Number(n) if n == f64::NEG_INFINITY => f.write_str("-Infinity"),
            // Negative zero prints as plain zero.
            Age::Number(n) if n == 0.0 => f.write_str("0"),
            Age::Number(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => {
                // `1e21` -> `1e+21`; negative exponents keep their sign.
                let formatted = format!("{:e}", n);
                match formatted.split_once('e') {
                    Some((mantissa, exp)) if !exp.starts_with('-') => {
                        write!(f, "{}e+{}", mantissa, exp)
                    }
                    _ => f.write_str(&formatted),
                }
            }
            Age::Number(n) => write!(f, "{}", n),
        }
    }
}

/// White space and line terminators skipped around numeric text. Unlike
/// `char::is_whitespace` this excludes U+0085 and includes U+FEFF.
fn is_number_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{a}'
            | '\u{b}'
            | '\u{c}'
            | '\u{d}'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Returns `None` if `text` has no radix prefix, `Some(None)` if it has one
/// but the digits are invalid.
fn parse_radix_literal(text: &str) -> Option<Option<f64>> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let mut value = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return Some(None),
        }
    }
    Some(Some(value))
}

/// `[+-]? (digits [. digits?]? | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(text: &str) -> bool {
    let mut chars = text.chars().peekable();

    if matches!(chars.peek(), Some('+') | Some('-')) {
        chars.next();
    }

    let mut int_digits = 0;
    while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
        chars.next();
        int_digits += 1;
    }

    let mut frac_digits = 0;
    if chars.peek() == Some(&'.') {
        chars.next();
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            frac_digits += 1;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        if matches!(chars.peek(), Some('+') | Some('-')) {
            chars.next();
        }
        let mut exp_digits = 0;
        while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            chars.next();
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return false;
        }
    }

    chars.next().is_none()
}
