//! Query normalization and tokenization.
//!
//! All matching is case- and diacritic-insensitive. The fold here is
//! per-character and order-preserving: every input char maps to exactly one
//! output char, which lets the highlighter translate match offsets straight
//! back onto the original string.

use unicode_normalization::char::decompose_canonical;

/// Fold a single character: NFD-decompose, keep the base character, lowercase.
///
/// Characters whose lowercase form expands to several chars keep only the
/// first so the fold stays length-preserving.
#[inline]
pub fn fold_char(c: char) -> char {
    let mut base = None;
    decompose_canonical(c, |d| {
        if base.is_none() {
            base = Some(d);
        }
    });
    let base = base.unwrap_or(c);
    base.to_lowercase().next().unwrap_or(base)
}

/// Case/diacritic fold an entire string ("Pérez" -> "perez").
pub fn normalize(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Split a query into normalized tokens. Blank input yields no tokens.
///
/// Tokens carry AND semantics downstream: a field matches only if every
/// token is a substring of its normalized value.
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Keep only ASCII digits ("S/ 1,234.50" -> "123450").
///
/// Used independently of tokenization so amounts and document numbers match
/// even when the query carries currency symbols or separators.
pub fn extract_digits(query: &str) -> String {
    query.chars().filter(char::is_ascii_digit).collect()
}

/// A parsed search query: raw text plus its token and digit views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    raw: String,
    tokens: Vec<String>,
    digits: String,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            tokens: tokenize(raw),
            digits: extract_digits(raw),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// A query is active when it yields at least one token or a non-empty
    /// digit string. Inactive queries must short-circuit every section
    /// without touching candidate data.
    pub fn is_active(&self) -> bool {
        !self.tokens.is_empty() || !self.digits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_diacritics_and_case() {
        assert_eq!(normalize("José"), "jose");
        assert_eq!(normalize("PÉREZ"), "perez");
        assert_eq!(normalize("Ñandú"), "nandu");
    }

    #[test]
    fn fold_preserves_char_count() {
        for s in ["José Pérez", "ÁÉÍÓÚ äëïöü", "plain ascii", ""] {
            assert_eq!(normalize(s).chars().count(), s.chars().count());
        }
    }

    #[test]
    fn tokenize_splits_on_whitespace_runs() {
        assert_eq!(tokenize("  juan   pérez "), vec!["juan", "perez"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn extract_digits_drops_punctuation() {
        assert_eq!(extract_digits("S/ 1,234.50"), "123450");
        assert_eq!(extract_digits("F001-0001"), "0010001");
        assert_eq!(extract_digits("soles"), "");
    }

    #[test]
    fn blank_query_is_inactive() {
        assert!(!Query::parse("").is_active());
        assert!(!Query::parse("   ").is_active());
    }

    #[test]
    fn digit_only_query_is_active() {
        let q = Query::parse("S/ 1,234.50");
        assert!(q.is_active());
        assert_eq!(q.digits(), "123450");
    }
}
