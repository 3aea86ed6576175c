//! Generic section builder: search one entity collection, score, sort, cap,
//! report overflow. Instantiated once per category; the per-entity candidate
//! mapper is owned by the caller.

use std::cmp::Reverse;

use super::query::Query;
use super::types::{Candidate, ScoredCandidate, SectionResult, SECTION_LIMIT};

/// Build one category's section for the given query.
///
/// An inactive query short-circuits without invoking the mapper at all.
/// Candidates scoring <= 0 are dropped entirely. The sort is stable: equal
/// scores keep their source-collection order.
pub fn build_section<T>(
    entities: &[T],
    query: &Query,
    mut map: impl FnMut(&T) -> Candidate,
) -> SectionResult {
    if !query.is_active() {
        return SectionResult::empty();
    }

    let mut scored = Vec::new();
    for entity in entities {
        let candidate = map(entity);
        if !candidate.matchable() {
            continue;
        }
        let score = candidate.score(query);
        if score > 0 {
            scored.push(ScoredCandidate { candidate, score });
        }
    }

    // Vec::sort_by_key is stable, so ties preserve input order.
    scored.sort_by_key(|sc| Reverse(sc.score));

    let total = scored.len();
    scored.truncate(SECTION_LIMIT);
    SectionResult {
        items: scored,
        total,
        has_more: total > SECTION_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::types::{Category, TextField};

    struct Row {
        name: &'static str,
        weight: i32,
    }

    fn map_row(row: &Row) -> Candidate {
        Candidate {
            category: Category::Product,
            id: row.name.into(),
            title: row.name.into(),
            subtitle: None,
            meta: None,
            amount: None,
            text_fields: vec![TextField::new(Some(row.name.into()), row.weight)],
            number_fields: Vec::new(),
        }
    }

    #[test]
    fn inactive_query_never_invokes_mapper() {
        let rows = [Row { name: "cafe", weight: 0 }];
        let mut calls = 0usize;
        let result = build_section(&rows, &Query::parse("  "), |r| {
            calls += 1;
            map_row(r)
        });
        assert_eq!(calls, 0);
        assert_eq!(result, SectionResult::empty());
    }

    #[test]
    fn zero_score_candidates_never_appear() {
        let rows = [Row { name: "cafe", weight: 0 }, Row { name: "te", weight: 0 }];
        let result = build_section(&rows, &Query::parse("cafe"), map_row);
        assert_eq!(result.total, 1);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].candidate.title, "cafe");
    }

    #[test]
    fn cap_and_overflow_invariant() {
        let rows: Vec<Row> = (0..8).map(|_| Row { name: "cafe", weight: 0 }).collect();
        let result = build_section(&rows, &Query::parse("cafe"), map_row);
        assert_eq!(result.items.len(), SECTION_LIMIT);
        assert_eq!(result.total, 8);
        assert!(result.has_more);

        let rows: Vec<Row> = (0..3).map(|_| Row { name: "cafe", weight: 0 }).collect();
        let result = build_section(&rows, &Query::parse("cafe"), map_row);
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.total, 3);
        assert!(!result.has_more);
    }

    #[test]
    fn equal_scores_keep_source_order() {
        let rows = [
            Row { name: "cafe uno", weight: 5 },
            Row { name: "cafe dos", weight: 5 },
            Row { name: "cafe tres", weight: 5 },
        ];
        let result = build_section(&rows, &Query::parse("cafe"), map_row);
        let titles: Vec<&str> = result
            .items
            .iter()
            .map(|sc| sc.candidate.title.as_str())
            .collect();
        assert_eq!(titles, vec!["cafe uno", "cafe dos", "cafe tres"]);
    }

    #[test]
    fn higher_score_sorts_first() {
        let rows = [
            Row { name: "molido cafe", weight: 0 }, // infix match, 90
            Row { name: "cafe molido", weight: 0 }, // prefix match, 140
        ];
        let result = build_section(&rows, &Query::parse("cafe"), map_row);
        assert_eq!(result.items[0].candidate.title, "cafe molido");
        assert_eq!(result.items[1].candidate.title, "molido cafe");
    }
}
