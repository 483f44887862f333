//! Business logic helpers for managing transactions.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{
    Ledger, Transaction, TransactionChanges, TransactionKind, INCOME_CATEGORY_ID,
};

/// Provides validated CRUD helpers for ledger transactions.
///
/// Like [`super::CategoryService`], this is the form layer: every rule that
/// blocks a submission lives here, and each failure carries one displayable
/// message.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction, allocating the next numeric id, and returns
    /// the new snapshot.
    pub fn add(
        ledger: &Ledger,
        date: NaiveDate,
        amount: f64,
        kind: TransactionKind,
        description: &str,
        category_id: &str,
    ) -> ServiceResult<Ledger> {
        if description.trim().is_empty() {
            return Err(ServiceError::Invalid("Please enter a description".into()));
        }
        if category_id.is_empty() {
            return Err(ServiceError::Invalid("Please select a category".into()));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "Please enter an amount that is greater than zero".into(),
            ));
        }
        Self::validate_bucket(kind, category_id)?;
        let id = ledger.next_transaction_id();
        debug!(%id, %kind, amount, "adding transaction");
        Ok(ledger.clone().with_transaction_added(Transaction::new(
            id,
            date,
            amount,
            kind,
            description.trim(),
            category_id,
        )))
    }

    /// Replaces a transaction's description and category reference; the other
    /// fields are fixed at creation.
    pub fn edit(ledger: &Ledger, id: &str, changes: TransactionChanges) -> ServiceResult<Ledger> {
        if changes.description.trim().is_empty() {
            return Err(ServiceError::Invalid("Please enter a description".into()));
        }
        if changes.category_id.is_empty() {
            return Err(ServiceError::Invalid("Please select a category".into()));
        }
        let transaction = ledger
            .transaction_by_id(id)
            .ok_or_else(|| ServiceError::TransactionNotFound(id.to_owned()))?;
        Self::validate_bucket(transaction.kind, &changes.category_id)?;
        Ok(ledger.clone().with_transaction_edited(id, changes))
    }

    /// Removes the transaction identified by `id`.
    pub fn remove(ledger: &Ledger, id: &str) -> ServiceResult<Ledger> {
        if ledger.transaction_by_id(id).is_none() {
            return Err(ServiceError::TransactionNotFound(id.to_owned()));
        }
        debug!(%id, "removing transaction");
        Ok(ledger.clone().without_transaction(id))
    }

    /// Income is always filed under the income bucket; expenses never are.
    fn validate_bucket(kind: TransactionKind, category_id: &str) -> ServiceResult<()> {
        match kind {
            TransactionKind::Income if category_id != INCOME_CATEGORY_ID => Err(
                ServiceError::Invalid("Income is always filed under the Income bucket".into()),
            ),
            TransactionKind::Expense if category_id == INCOME_CATEGORY_ID => Err(
                ServiceError::Invalid("Expenses cannot be filed under the Income bucket".into()),
            ),
            _ => Ok(()),
        }
    }
}
