//! Engine facade: evaluates one query against all four category collections
//! and merges the best hits for the palette.

use super::query::Query;
use super::section::build_section;
use super::sources::{ClientRecord, InvoiceRecord, ProductRecord, ReceivableRecord};
use super::types::{Category, ScoredCandidate, SectionResult};

/// How many search hits the palette appends after its commands. Independent
/// of the inline dropdown's per-section cap.
pub const PALETTE_RESULT_LIMIT: usize = 3;

/// Borrowed view over the four collaborator collections for one evaluation.
/// Collections are treated as immutable per recomputation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Snapshot<'a> {
    pub invoices: &'a [InvoiceRecord],
    pub products: &'a [ProductRecord],
    pub clients: &'a [ClientRecord],
    pub receivables: &'a [ReceivableRecord],
}

impl Snapshot<'_> {
    /// Compute all four sections. Categories are independent: an empty result
    /// in one never affects the others, and evaluation order carries no
    /// meaning.
    pub fn evaluate(&self, query: &Query) -> SearchResults {
        SearchResults {
            invoices: build_section(self.invoices, query, InvoiceRecord::candidate),
            products: build_section(self.products, query, ProductRecord::candidate),
            clients: build_section(self.clients, query, ClientRecord::candidate),
            receivables: build_section(self.receivables, query, ReceivableRecord::candidate),
        }
    }
}

/// One query evaluation's output, one section per category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
    pub invoices: SectionResult,
    pub products: SectionResult,
    pub clients: SectionResult,
    pub receivables: SectionResult,
}

impl SearchResults {
    pub fn section(&self, category: Category) -> &SectionResult {
        match category {
            Category::Invoice => &self.invoices,
            Category::Product => &self.products,
            Category::Client => &self.clients,
            Category::Receivable => &self.receivables,
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.section(*c).total == 0)
    }

    /// The `n` best hits across all sections, sorted by score descending.
    /// Ties keep the fixed category order (invoice, product, client,
    /// receivable) and then source order, because the flatten below preserves
    /// it and the sort is stable.
    pub fn top_hits(&self, n: usize) -> Vec<ScoredCandidate> {
        let mut hits: Vec<ScoredCandidate> = Category::ALL
            .iter()
            .flat_map(|c| self.section(*c).items.iter().cloned())
            .collect();
        hits.sort_by_key(|sc| std::cmp::Reverse(sc.score));
        hits.truncate(n);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_data() -> (Vec<InvoiceRecord>, Vec<ProductRecord>, Vec<ClientRecord>) {
        let invoices = vec![InvoiceRecord {
            number: "F001-0001".into(),
            client_name: Some("Juan Pérez".into()),
            issue_date: None,
            total: Some(1234.50),
            currency: "PEN".into(),
        }];
        let products = vec![ProductRecord {
            id: "p1".into(),
            name: "Café molido".into(),
            code: Some("CAF-01".into()),
            category_label: Some("Bebidas".into()),
            price: Some(18.0),
            stock: Some(40.0),
            currency: "PEN".into(),
        }];
        let clients = vec![ClientRecord {
            id: "c1".into(),
            name: "Juan Pérez".into(),
            tax_id: Some("10456789012".into()),
            email: None,
            phone: None,
        }];
        (invoices, products, clients)
    }

    #[test]
    fn empty_query_yields_empty_sections_everywhere() {
        let (invoices, products, clients) = snapshot_data();
        let snapshot = Snapshot {
            invoices: &invoices,
            products: &products,
            clients: &clients,
            receivables: &[],
        };
        let results = snapshot.evaluate(&Query::parse(""));
        for category in Category::ALL {
            assert_eq!(*results.section(category), SectionResult::empty());
        }
        assert!(results.is_empty());
    }

    #[test]
    fn categories_are_independent() {
        let (invoices, products, clients) = snapshot_data();
        let snapshot = Snapshot {
            invoices: &invoices,
            products: &products,
            clients: &clients,
            receivables: &[],
        };
        // Matches clients and invoices, not products or receivables.
        let results = snapshot.evaluate(&Query::parse("juan"));
        assert_eq!(results.clients.total, 1);
        assert_eq!(results.invoices.total, 1);
        assert_eq!(results.products.total, 0);
        assert_eq!(results.receivables.total, 0);
    }

    #[test]
    fn top_hits_are_capped_and_ranked() {
        let (invoices, products, clients) = snapshot_data();
        let snapshot = Snapshot {
            invoices: &invoices,
            products: &products,
            clients: &clients,
            receivables: &[],
        };
        let results = snapshot.evaluate(&Query::parse("juan"));
        let hits = results.top_hits(PALETTE_RESULT_LIMIT);
        assert_eq!(hits.len(), 2);
        // Client name is a primary prefix match (210), invoice client name
        // is a secondary field (160).
        assert_eq!(hits[0].candidate.category, Category::Client);
        assert!(hits[0].score > hits[1].score);

        let hits = results.top_hits(1);
        assert_eq!(hits.len(), 1);
    }
}
