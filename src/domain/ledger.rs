//! The ledger aggregate: owns every category and transaction and derives
//! budget metrics from them.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, CategoryChanges};
use crate::domain::common::Identifiable;
use crate::domain::transaction::{Transaction, TransactionChanges};

/// Single source of truth for one user's categories and transactions.
///
/// The ledger is a pure value: every update consumes the current snapshot and
/// returns a new one, matching the replace-wholesale pattern the UI layer
/// drives it with. It performs no validation and no referential-integrity
/// enforcement; dangling category references degrade to absent lookups, and
/// removing a category never cascades to its transactions unless
/// [`Ledger::without_category_transactions`] is called explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(categories: Vec<Category>, transactions: Vec<Transaction>) -> Self {
        Self {
            categories,
            transactions,
        }
    }

    // ----- categories -----

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Replaces the whole category collection.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn with_category_added(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Replaces the mutable fields of the category identified by `id`.
    /// Unknown ids leave the snapshot unchanged.
    #[must_use]
    pub fn with_category_edited(mut self, id: &str, changes: CategoryChanges) -> Self {
        if let Some(category) = self.categories.iter_mut().find(|category| category.id == id) {
            category.apply(changes);
        }
        self
    }

    #[must_use]
    pub fn without_category(mut self, id: &str) -> Self {
        self.categories.retain(|category| category.id != id);
        self
    }

    // ----- transactions -----

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn transaction_by_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// Replaces the whole transaction collection.
    #[must_use]
    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    #[must_use]
    pub fn with_transaction_added(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// Replaces the mutable fields of the transaction identified by `id`.
    /// Unknown ids leave the snapshot unchanged.
    #[must_use]
    pub fn with_transaction_edited(mut self, id: &str, changes: TransactionChanges) -> Self {
        if let Some(transaction) = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
        {
            transaction.apply(changes);
        }
        self
    }

    #[must_use]
    pub fn without_transaction(mut self, id: &str) -> Self {
        self.transactions.retain(|transaction| transaction.id != id);
        self
    }

    /// Drops every transaction filed under `category_id`. The explicit
    /// cascade gesture a caller performs after removing a category.
    #[must_use]
    pub fn without_category_transactions(mut self, category_id: &str) -> Self {
        self.transactions
            .retain(|transaction| transaction.category_id != category_id);
        self
    }

    // ----- id allocation -----

    /// Maximum numeric value among the items' string ids. Ids that do not
    /// parse as integers are ignored; an empty or fully non-numeric list
    /// yields 0, so the first allocated id is `"1"`.
    pub fn find_max_id<T: Identifiable>(items: &[T]) -> i64 {
        items
            .iter()
            .filter_map(|item| item.id().parse::<i64>().ok())
            .max()
            .unwrap_or(0)
    }

    pub fn next_transaction_id(&self) -> String {
        (Self::find_max_id(&self.transactions) + 1).to_string()
    }

    pub fn next_category_id(&self) -> String {
        (Self::find_max_id(&self.categories) + 1).to_string()
    }

    // ----- derived metrics -----

    /// Sum of income amounts filed under `category_id`.
    pub fn category_income(&self, category_id: &str) -> f64 {
        self.transactions
            .iter()
            .filter(|transaction| transaction.is_income() && transaction.category_id == category_id)
            .map(|transaction| transaction.amount)
            .sum()
    }

    /// Sum of expense amounts filed under `category_id`.
    pub fn category_expense(&self, category_id: &str) -> f64 {
        self.transactions
            .iter()
            .filter(|transaction| {
                transaction.is_expense() && transaction.category_id == category_id
            })
            .map(|transaction| transaction.amount)
            .sum()
    }

    /// Budget minus spend for the category; negative when over budget, `0.0`
    /// when the category does not exist.
    pub fn remaining_budget(&self, category_id: &str) -> f64 {
        match self.category_by_id(category_id) {
            Some(category) => category.budget - self.category_expense(category_id),
            None => 0.0,
        }
    }

    /// Spend as a percentage of budget, uncapped. `0.0` when the category is
    /// missing or its budget is zero.
    pub fn budget_usage(&self, category_id: &str) -> f64 {
        match self.category_by_id(category_id) {
            Some(category) if category.budget.abs() > f64::EPSILON => {
                (self.category_expense(category_id) / category.budget) * 100.0
            }
            _ => 0.0,
        }
    }

    pub fn total_income(&self) -> f64 {
        self.categories
            .iter()
            .map(|category| self.category_income(&category.id))
            .sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.categories
            .iter()
            .map(|category| self.category_expense(&category.id))
            .sum()
    }

    pub fn total_remaining_budget(&self) -> f64 {
        self.categories
            .iter()
            .map(|category| self.remaining_budget(&category.id))
            .sum()
    }

    /// Share of income kept, as a percentage. `0.0` when there is no income.
    pub fn saving_rate(&self) -> f64 {
        let total_income = self.total_income();
        if total_income == 0.0 {
            return 0.0;
        }
        ((total_income - self.total_expense()) / total_income) * 100.0
    }

    // ----- date search and legacy orderings -----

    /// Transactions whose date matches `date` exactly (year, month, day).
    pub fn transactions_on(&self, date: NaiveDate) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.date == date)
            .collect()
    }

    /// All transactions, newest first.
    pub fn sorted_by_date_desc(&self) -> Vec<&Transaction> {
        let mut ordered: Vec<&Transaction> = self.transactions.iter().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered
    }

    /// All transactions, largest amount first.
    pub fn sorted_by_amount_desc(&self) -> Vec<&Transaction> {
        let mut ordered: Vec<&Transaction> = self.transactions.iter().collect();
        ordered.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
        ordered
    }

    /// Per-category bookkeeping view over the flat transaction list. `None`
    /// when the category does not exist.
    pub fn category_activity(&self, category_id: &str) -> Option<CategoryActivity<'_>> {
        let category = self.category_by_id(category_id)?;
        let transactions = self
            .transactions
            .iter()
            .filter(|transaction| transaction.category_id == category_id)
            .collect();
        Some(CategoryActivity {
            category,
            transactions,
        })
    }
}

/// Borrowed per-category bookkeeping view.
///
/// The ledger's flat transaction list stays the single source of truth; this
/// view never owns a second writable copy.
#[derive(Debug)]
pub struct CategoryActivity<'a> {
    category: &'a Category,
    transactions: Vec<&'a Transaction>,
}

impl<'a> CategoryActivity<'a> {
    pub fn category(&self) -> &'a Category {
        self.category
    }

    pub fn transactions(&self) -> &[&'a Transaction] {
        &self.transactions
    }

    /// Sum of this category's expense amounts.
    pub fn expense_total(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|transaction| transaction.is_expense())
            .map(|transaction| transaction.amount)
            .sum()
    }

    /// Budget minus spend; negative when over budget.
    pub fn remaining_budget(&self) -> f64 {
        self.category.budget - self.expense_total()
    }

    /// Spend as a percentage of budget, uncapped; `0.0` for a zero budget.
    pub fn budget_usage(&self) -> f64 {
        if self.category.budget.abs() > f64::EPSILON {
            (self.expense_total() / self.category.budget) * 100.0
        } else {
            0.0
        }
    }

    /// This category's transactions, newest first.
    pub fn by_date_desc(&self) -> Vec<&'a Transaction> {
        let mut ordered = self.transactions.clone();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered
    }

    /// This category's transactions, largest amount first.
    pub fn by_amount_desc(&self) -> Vec<&'a Transaction> {
        let mut ordered = self.transactions.clone();
        ordered.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
        ordered
    }

    /// Transactions on the exact calendar day.
    pub fn on_date(&self, date: NaiveDate) -> Vec<&'a Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.date == date)
            .copied()
            .collect()
    }
}
