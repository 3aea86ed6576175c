//! Multi-entity search: normalization, scoring, section building, and
//! highlighting across invoices, products, clients, and receivables.

pub mod engine;
pub mod highlight;
pub mod query;
pub mod score;
pub mod section;
pub mod sources;
pub mod types;

pub use engine::{SearchResults, Snapshot, PALETTE_RESULT_LIMIT};
pub use highlight::{highlight, Segment};
pub use query::{extract_digits, normalize, tokenize, Query};
pub use section::build_section;
pub use types::{
    Amount, Candidate, Category, NumberField, ScoredCandidate, SectionResult, TextField,
    SECTION_LIMIT,
};
