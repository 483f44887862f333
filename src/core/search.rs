//! The transaction search mini-language.
//!
//! A single free-form query drives four OR'd checks: description contains,
//! resolved category name contains, kind equals, and month/year equals.
//! Prefixes narrow what the needle means for their own check only; every
//! check still runs against the same trimmed, lowercased query. That
//! permissive try-every-matcher shape is intentional and observable (a bare
//! `income` matches by kind even without `@type:`), so it must not be
//! tightened into dispatch-on-prefix.

use chrono::{Datelike, NaiveDate};

use crate::domain::{Ledger, Transaction, TransactionKind};

/// Prefix selecting the category-name needle.
pub const CATEGORY_PREFIX: &str = "@cat:";
/// Prefix selecting the kind needle.
pub const KIND_PREFIX: &str = "@type:";
/// Prefix selecting the month-year needle.
pub const DATE_PREFIX: &str = "@date:";

/// Zero-based month and calendar year parsed from a `@date:` needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYear {
    pub month0: u32,
    pub year: i32,
}

/// Parses `<month>-<year>` where the month token is 1-based. Malformed input
/// (missing dash, non-numeric tokens, month zero) yields `None`, which
/// matches no transaction.
pub fn parse_month_year(text: &str) -> Option<MonthYear> {
    let (month_token, year_token) = text.split_once('-')?;
    let month: u32 = month_token.trim().parse().ok()?;
    let year: i32 = year_token.trim().parse().ok()?;
    Some(MonthYear {
        month0: month.checked_sub(1)?,
        year,
    })
}

/// Whether `transaction` satisfies `query`. A blank query matches everything.
pub fn matches(ledger: &Ledger, transaction: &Transaction, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    let description_match = transaction.description.to_lowercase().contains(&query);

    let category_match = ledger
        .category_by_id(&transaction.category_id)
        .map(|category| {
            category
                .name
                .to_lowercase()
                .contains(strip(&query, CATEGORY_PREFIX))
        })
        .unwrap_or(false);

    let kind_match = transaction.kind.as_str() == strip(&query, KIND_PREFIX);

    let date_match = parse_month_year(strip(&query, DATE_PREFIX))
        .map(|needle| {
            transaction.date.month0() == needle.month0 && transaction.date.year() == needle.year
        })
        .unwrap_or(false);

    description_match || category_match || kind_match || date_match
}

/// Transactions satisfying `query`, in ledger order.
pub fn filter_transactions<'a>(ledger: &'a Ledger, query: &str) -> Vec<&'a Transaction> {
    ledger
        .transactions()
        .iter()
        .filter(|transaction| matches(ledger, transaction, query))
        .collect()
}

/// Query emitted by the "current month" filter shortcut.
pub fn month_shortcut(date: NaiveDate) -> String {
    format!("{}{}-{}", DATE_PREFIX, date.month(), date.year())
}

/// Query emitted by the per-category filter shortcut.
pub fn category_shortcut(name: &str) -> String {
    format!("{CATEGORY_PREFIX}{name}")
}

/// Query emitted by the per-kind filter shortcut.
pub fn kind_shortcut(kind: TransactionKind) -> String {
    format!("{}{}", KIND_PREFIX, kind.as_str())
}

fn strip<'a>(query: &'a str, prefix: &str) -> &'a str {
    query.strip_prefix(prefix).unwrap_or(query).trim()
}
