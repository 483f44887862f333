//! Seed data for demos and first-run sessions.

use chrono::NaiveDate;

use crate::domain::{Category, Ledger, Transaction, TransactionKind, INCOME_CATEGORY_ID};

/// Builds the ledger a fresh session starts from: the income bucket, two
/// spending categories, and a handful of October 2025 transactions.
pub fn sample_ledger() -> Ledger {
    let seeded = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
    Ledger::from_parts(
        vec![
            Category::new(INCOME_CATEGORY_ID, seeded, "Income", "#ffffff", 0.0),
            Category::new("1", seeded, "Transportation", "#ef4444", 500.0),
            Category::new("2", seeded, "Entertainment", "#f97316", 200.0),
        ],
        vec![
            Transaction::new("1", seeded, 85.50, TransactionKind::Expense, "Chevron", "1"),
            Transaction::new("2", seeded, 40.00, TransactionKind::Expense, "Game", "2"),
            Transaction::new(
                "3",
                seeded,
                40.00,
                TransactionKind::Expense,
                "Movie Theater",
                "2",
            ),
            Transaction::new(
                "4",
                seeded,
                1200.00,
                TransactionKind::Income,
                "Salary",
                INCOME_CATEGORY_ID,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ledger_is_internally_consistent() {
        let ledger = sample_ledger();
        assert_eq!(ledger.category_count(), 3);
        assert_eq!(ledger.transaction_count(), 4);
        assert!(ledger.category_by_id(INCOME_CATEGORY_ID).is_some());
        // Every transaction resolves to a seeded category.
        assert!(ledger
            .transactions()
            .iter()
            .all(|transaction| ledger.category_by_id(&transaction.category_id).is_some()));
        assert_eq!(ledger.next_transaction_id(), "5");
    }
}
