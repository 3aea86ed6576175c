//! Demo CLI: run an omnisearch query against a records fixture and print the
//! ranked sections the way the search dropdown would show them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use omnibar::search::highlight::highlight;
use omnibar::search::sources::{ClientRecord, InvoiceRecord, ProductRecord, ReceivableRecord};
use omnibar::search::types::Category;
use omnibar::{logging, Query, Snapshot};

#[derive(Parser, Debug)]
#[command(name = "omnibar", about = "Query the omnisearch engine from the terminal")]
struct Cli {
    /// Search query (joined with spaces).
    query: Vec<String>,

    /// JSON fixture with invoices/products/clients/receivables. Uses a
    /// built-in sample when omitted.
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct Fixture {
    #[serde(default)]
    invoices: Vec<InvoiceRecord>,
    #[serde(default)]
    products: Vec<ProductRecord>,
    #[serde(default)]
    clients: Vec<ClientRecord>,
    #[serde(default)]
    receivables: Vec<ReceivableRecord>,
}

fn sample_fixture() -> Fixture {
    let json = include_str!("../fixtures/sample.json");
    serde_json::from_str(json).expect("bundled fixture must parse")
}

fn load_fixture(path: Option<&PathBuf>) -> Result<Fixture> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading fixture {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing fixture {}", path.display()))
        }
        None => Ok(sample_fixture()),
    }
}

/// Render a display string with the match bracketed: "Factura [F001]-0001".
fn marked(value: &str, raw_query: &str) -> String {
    highlight(value, raw_query)
        .into_iter()
        .map(|s| {
            if s.is_match {
                format!("[{}]", s.text)
            } else {
                s.text
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let _guard = logging::init(None);
    let cli = Cli::parse();

    let fixture = load_fixture(cli.data.as_ref())?;
    let raw_query = cli.query.join(" ");
    let query = Query::parse(&raw_query);

    let snapshot = Snapshot {
        invoices: &fixture.invoices,
        products: &fixture.products,
        clients: &fixture.clients,
        receivables: &fixture.receivables,
    };
    let results = snapshot.evaluate(&query);

    if results.is_empty() {
        println!("no matches for {raw_query:?}");
        return Ok(());
    }

    for category in Category::ALL {
        let section = results.section(category);
        if section.total == 0 {
            continue;
        }
        println!("{} ({} match{})", category.label(), section.total,
            if section.total == 1 { "" } else { "es" });
        for scored in &section.items {
            let c = &scored.candidate;
            let mut line = format!("  {:>4}  {}", scored.score, marked(&c.title, &raw_query));
            if let Some(subtitle) = &c.subtitle {
                line.push_str(&format!("  - {}", marked(subtitle, &raw_query)));
            }
            if let Some(amount) = &c.amount {
                line.push_str(&format!("  ({} {} {:.2})", amount.label, amount.currency, amount.value));
            }
            println!("{line}");
        }
        if section.has_more {
            println!("  … and {} more", section.total - section.items.len());
        }
    }

    Ok(())
}
