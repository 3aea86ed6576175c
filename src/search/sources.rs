//! Read-only record summaries for the four searchable categories, plus the
//! candidate mappers that derive display and weighted fields from them.
//!
//! These are the shapes the collaborating stores expose; how they are
//! populated or persisted is not this crate's business. Field weights follow
//! the ranking contract: document-number/name class fields are primary keys,
//! descriptive fields trail, amounts match through the digit path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Amount, Candidate, Category, NumberField, TextField};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// An issued invoice as seen by search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub number: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub total: Option<f64>,
    pub currency: String,
}

impl InvoiceRecord {
    pub fn candidate(&self) -> Candidate {
        Candidate {
            category: Category::Invoice,
            id: self.number.clone(),
            title: self.number.clone(),
            subtitle: self.client_name.clone(),
            meta: self.issue_date.map(|d| d.format(DATE_FORMAT).to_string()),
            amount: self.total.map(|value| Amount {
                value,
                currency: self.currency.clone(),
                label: "Total".into(),
            }),
            text_fields: vec![
                TextField::primary(Some(self.number.clone()), 30),
                TextField::new(self.client_name.clone(), 20),
            ],
            number_fields: vec![NumberField::new(self.total, 10)],
        }
    }
}

/// A catalog product as seen by search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub category_label: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<f64>,
    pub currency: String,
}

impl ProductRecord {
    pub fn candidate(&self) -> Candidate {
        Candidate {
            category: Category::Product,
            id: self.id.clone(),
            title: self.name.clone(),
            subtitle: self.code.clone(),
            meta: self.category_label.clone(),
            amount: self.price.map(|value| Amount {
                value,
                currency: self.currency.clone(),
                label: "Price".into(),
            }),
            text_fields: vec![
                TextField::primary(Some(self.name.clone()), 30),
                TextField::primary(self.code.clone(), 25),
                TextField::new(self.category_label.clone(), 10),
            ],
            number_fields: vec![
                NumberField::new(self.price, 5),
                NumberField::new(self.stock, 2),
            ],
        }
    }
}

/// A client as seen by search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    /// Tax or national document id (RUC/DNI class).
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ClientRecord {
    pub fn candidate(&self) -> Candidate {
        Candidate {
            category: Category::Client,
            id: self.id.clone(),
            title: self.name.clone(),
            subtitle: self.tax_id.clone(),
            meta: self.email.clone(),
            amount: None,
            text_fields: vec![
                TextField::primary(Some(self.name.clone()), 30),
                TextField::primary(self.tax_id.clone(), 25),
                TextField::new(self.email.clone(), 10),
                TextField::new(self.phone.clone(), 5),
            ],
            number_fields: Vec::new(),
        }
    }
}

/// An open receivable (account balance) as seen by search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReceivableRecord {
    /// Account identifier; carried into navigation so the collections page
    /// can open the right account.
    pub account_id: String,
    pub client_name: String,
    #[serde(default)]
    pub document_ref: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub balance: Option<f64>,
    pub currency: String,
}

impl ReceivableRecord {
    pub fn candidate(&self) -> Candidate {
        Candidate {
            category: Category::Receivable,
            id: self.account_id.clone(),
            title: self.client_name.clone(),
            subtitle: self.document_ref.clone(),
            meta: self.due_date.map(|d| d.format(DATE_FORMAT).to_string()),
            amount: self.balance.map(|value| Amount {
                value,
                currency: self.currency.clone(),
                label: "Balance".into(),
            }),
            text_fields: vec![
                TextField::primary(Some(self.client_name.clone()), 30),
                TextField::new(self.document_ref.clone(), 20),
            ],
            number_fields: vec![NumberField::new(self.balance, 10)],
        }
    }
}
