//! Domain models for dated income and expense events.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Amounted, Identifiable};

/// Whether a transaction takes money out of or brings money into the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Lowercase text form, as typed into `@type:` queries.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseTransactionKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(TransactionKind::Expense),
            "income" => Ok(TransactionKind::Income),
            _ => Err(ParseTransactionKindError),
        }
    }
}

/// Error returned when parsing a [`TransactionKind`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTransactionKindError;

impl fmt::Display for ParseTransactionKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("transaction kind must be `expense` or `income`")
    }
}

impl std::error::Error for ParseTransactionKindError {}

/// One dated monetary event.
///
/// `id`, `date`, `amount`, and `kind` are fixed at creation. `description`
/// and `category_id` are replaced through [`TransactionChanges`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
    pub description: String,
    /// Category reference by id. May dangle after a category is removed;
    /// lookups treat that as absent rather than an error.
    pub category_id: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        amount: f64,
        kind: TransactionKind,
        description: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            amount,
            kind,
            description: description.into(),
            category_id: category_id.into(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Applies replacement values for the mutable fields.
    pub(crate) fn apply(&mut self, changes: TransactionChanges) {
        self.description = changes.description;
        self.category_id = changes.category_id;
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Replacement values for a transaction's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionChanges {
    pub description: String,
    pub category_id: String,
}

impl TransactionChanges {
    pub fn new(description: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            category_id: category_id.into(),
        }
    }
}
