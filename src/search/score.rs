//! Scoring primitives.
//!
//! Text fields score only when every query token is a substring of the
//! normalized value (AND semantics); numeric fields score when the query's
//! digit string is a substring of the value's own digit rendering. The
//! resulting ordering prefers prefix matches on high-weight identifier
//! fields over everything else.

use super::query::normalize;
use super::types::{NumberField, TextField};

/// Base score when the normalized value starts with the first token.
const TEXT_PREFIX_BASE: i32 = 140;
/// Base score for a non-prefix all-token match.
const TEXT_BASE: i32 = 90;
/// Bonus for primary-key class fields (names, codes, document numbers).
const PRIMARY_BONUS: i32 = 40;
/// Base score for a digit-substring match on a numeric field.
const NUMBER_BASE: i32 = 100;

/// Score a text field against the query tokens.
///
/// Returns 0 when the value is absent, the token list is empty, or any token
/// fails to match. Otherwise: prefix/substring base + field weight + primary
/// bonus.
pub fn score_text(field: &TextField, tokens: &[String]) -> i32 {
    let Some(value) = field.value.as_deref() else {
        return 0;
    };
    if tokens.is_empty() {
        return 0;
    }

    let folded = normalize(value);
    if !tokens.iter().all(|t| folded.contains(t.as_str())) {
        return 0;
    }

    let base = if folded.starts_with(tokens[0].as_str()) {
        TEXT_PREFIX_BASE
    } else {
        TEXT_BASE
    };
    base + field.weight + if field.primary { PRIMARY_BONUS } else { 0 }
}

/// Score a numeric field against the query's digit string.
///
/// Returns 0 when the value is absent, the digit query is empty, or the
/// digits don't occur in the value's rendering. Otherwise base + weight.
pub fn score_number(field: &NumberField, digits: &str) -> i32 {
    let Some(value) = field.value else {
        return 0;
    };
    if digits.is_empty() {
        return 0;
    }

    if digits_of(value).contains(digits) {
        NUMBER_BASE + field.weight
    } else {
        0
    }
}

/// Digit rendering of an amount, two decimal places, sign and separators
/// dropped (1234.5 -> "123450"). Matches how the UI prints totals.
pub fn digits_of(value: f64) -> String {
    format!("{value:.2}")
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}
