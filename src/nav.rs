//! Client-side route dispatch: translates a selected search hit or command
//! into a route plus query-string parameters.
//!
//! Parameter names are part of the contract: `search` carries free text,
//! `account` carries the receivable account identifier.

use crate::search::types::{Candidate, Category};

/// The routed pages the palette and search can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Invoices,
    Pos,
    Products,
    Clients,
    Receivables,
    Settings,
}

impl Route {
    pub fn base_path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Invoices => "/invoices",
            Route::Pos => "/pos",
            Route::Products => "/products",
            Route::Clients => "/clients",
            Route::Receivables => "/receivables",
            Route::Settings => "/settings",
        }
    }

    pub fn for_category(category: Category) -> Route {
        match category {
            Category::Invoice => Route::Invoices,
            Category::Product => Route::Products,
            Category::Client => Route::Clients,
            Category::Receivable => Route::Receivables,
        }
    }
}

/// A route transition request: destination plus ordered query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub route: Route,
    pub params: Vec<(String, String)>,
}

impl NavigationRequest {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            params: Vec::new(),
        }
    }

    /// Attach the free-text `search` parameter; blank text is dropped.
    pub fn with_search(mut self, text: &str) -> Self {
        let text = text.trim();
        if !text.is_empty() {
            self.params.push(("search".into(), text.to_owned()));
        }
        self
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Render as a relative href, percent-escaping parameter values.
    pub fn href(&self) -> String {
        let mut href = self.route.base_path().to_owned();
        for (i, (key, value)) in self.params.iter().enumerate() {
            href.push(if i == 0 { '?' } else { '&' });
            href.push_str(key);
            href.push('=');
            href.push_str(&encode(value));
        }
        href
    }
}

/// Build the transition for a selected search hit.
///
/// Carries the current query as `search`; invoices fall back to the document
/// number when the query is blank, receivables additionally carry their
/// account id.
pub fn request_for_hit(candidate: &Candidate, raw_query: &str) -> NavigationRequest {
    let route = Route::for_category(candidate.category);
    let request = NavigationRequest::new(route);
    match candidate.category {
        Category::Invoice => {
            let text = if raw_query.trim().is_empty() {
                candidate.title.as_str()
            } else {
                raw_query
            };
            request.with_search(text)
        }
        Category::Receivable => request
            .with_search(raw_query)
            .with_param("account", &candidate.id),
        Category::Product | Category::Client => request.with_search(raw_query),
    }
}

/// Minimal percent-escaping for query-string values.
fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::types::TextField;

    fn candidate(category: Category, id: &str, title: &str) -> Candidate {
        Candidate {
            category,
            id: id.into(),
            title: title.into(),
            subtitle: None,
            meta: None,
            amount: None,
            text_fields: vec![TextField::primary(Some(title.into()), 30)],
            number_fields: Vec::new(),
        }
    }

    #[test]
    fn href_builds_query_string() {
        let href = NavigationRequest::new(Route::Products)
            .with_search("café molido")
            .href();
        assert_eq!(href, "/products?search=caf%C3%A9%20molido");
    }

    #[test]
    fn href_without_params_is_base_path() {
        assert_eq!(NavigationRequest::new(Route::Dashboard).href(), "/");
    }

    #[test]
    fn blank_search_is_dropped() {
        let href = NavigationRequest::new(Route::Clients).with_search("  ").href();
        assert_eq!(href, "/clients");
    }

    #[test]
    fn invoice_hit_falls_back_to_document_number() {
        let hit = candidate(Category::Invoice, "F001-0001", "F001-0001");
        let request = request_for_hit(&hit, "");
        assert_eq!(request.href(), "/invoices?search=F001-0001");

        let request = request_for_hit(&hit, "f001");
        assert_eq!(request.href(), "/invoices?search=f001");
    }

    #[test]
    fn receivable_hit_carries_account_id() {
        let hit = candidate(Category::Receivable, "acc-9", "Comercial Andina");
        let request = request_for_hit(&hit, "andina");
        assert_eq!(request.href(), "/receivables?search=andina&account=acc-9");
    }
}
