//! Amount coercion
//!
//! Accepted grammar: optional sign, digits, optional decimal point with
//! optional fractional digits (or a leading decimal point with digits).
//! Surrounding ASCII whitespace is ignored. No thousands separators,
//! exponents or special values.

use std::sync::OnceLock;

use regex::Regex;

static AMOUNT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn amount_pattern() -> &'static Regex {
    AMOUNT_PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("amount pattern is valid")
    })
}

/// Coerce an amount cell to a number, or `None` if it is not a decimal literal.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    if !amount_pattern().is_match(value) {
        return None;
    }
    value.parse::<f64>().ok()
}

/// True if the amount is strictly below zero. Negative zero is zero.
pub fn is_negative(amount: f64) -> bool {
    amount < 0.0
}
