//! Shared search types: categories, weighted fields, candidates, and the
//! per-category section result.

use serde::{Deserialize, Serialize};

use super::query::Query;
use super::score::{score_number, score_text};

/// How many items one section shows inline; matches appearing beyond this cap
/// are reported through `total`/`has_more` instead.
pub const SECTION_LIMIT: usize = 5;

/// The four record categories the omnisearch covers. Fixed enumeration;
/// drives both routing and the section a result renders under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Invoice,
    Product,
    Client,
    Receivable,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Invoice,
        Category::Product,
        Category::Client,
        Category::Receivable,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Invoice => "Invoices",
            Category::Product => "Products",
            Category::Client => "Clients",
            Category::Receivable => "Receivables",
        }
    }
}

/// A display amount: numeric value plus currency code and a short label
/// ("Total", "Price", "Balance").
#[derive(Clone, Debug, PartialEq)]
pub struct Amount {
    pub value: f64,
    pub currency: String,
    pub label: String,
}

/// A text field eligible for token matching. `primary` marks high-confidence
/// identifier fields (names, codes, document numbers) that earn a score bonus.
#[derive(Clone, Debug, PartialEq)]
pub struct TextField {
    pub value: Option<String>,
    pub weight: i32,
    pub primary: bool,
}

impl TextField {
    pub fn new(value: Option<String>, weight: i32) -> Self {
        Self {
            value,
            weight,
            primary: false,
        }
    }

    pub fn primary(value: Option<String>, weight: i32) -> Self {
        Self {
            value,
            weight,
            primary: true,
        }
    }
}

/// A numeric field eligible for digit-substring matching (totals, balances).
#[derive(Clone, Debug, PartialEq)]
pub struct NumberField {
    pub value: Option<f64>,
    pub weight: i32,
}

impl NumberField {
    pub fn new(value: Option<f64>, weight: i32) -> Self {
        Self { value, weight }
    }
}

/// A search candidate: display fields derived once from a source record plus
/// the weighted fields scoring runs over. Read-only view; the engine never
/// mutates source entities.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub category: Category,
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub meta: Option<String>,
    pub amount: Option<Amount>,
    pub text_fields: Vec<TextField>,
    pub number_fields: Vec<NumberField>,
}

impl Candidate {
    /// A candidate with no populated field can never match; the section
    /// builder skips it before any scoring happens.
    pub fn matchable(&self) -> bool {
        self.text_fields.iter().any(|f| f.value.is_some())
            || self.number_fields.iter().any(|f| f.value.is_some())
    }

    /// Total score: sum of all text-field and numeric-field scores.
    pub fn score(&self, query: &Query) -> i32 {
        let text: i32 = self
            .text_fields
            .iter()
            .map(|f| score_text(f, query.tokens()))
            .sum();
        let numeric: i32 = self
            .number_fields
            .iter()
            .map(|f| score_number(f, query.digits()))
            .sum();
        text + numeric
    }
}

/// A candidate together with its computed score for the current query.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: i32,
}

/// One category's result for one query evaluation. Recomputed from scratch
/// on every query change, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionResult {
    /// Top matches, capped at [`SECTION_LIMIT`].
    pub items: Vec<ScoredCandidate>,
    /// Match count before capping.
    pub total: usize,
    /// `total > SECTION_LIMIT`.
    pub has_more: bool,
}

impl SectionResult {
    pub fn empty() -> Self {
        Self::default()
    }
}
