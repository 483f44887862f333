//! Business logic helpers for category management.

use chrono::NaiveDate;
use tracing::debug;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Category, CategoryChanges, Ledger, TransactionKind, INCOME_CATEGORY_ID};

/// Colors cycled through when a new category is created without an explicit
/// pick.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#8b5cf6", "#ec4899",
    "#f59e0b", "#10b981",
];

/// Provides validated operations for [`Category`] entities.
///
/// This is the form layer: it owns every rule that blocks a submission. The
/// ledger beneath it accepts whatever it is handed.
pub struct CategoryService;

impl CategoryService {
    /// Adds a new category, allocating its id, and returns the new snapshot.
    /// Passing `None` for `color` picks the next entry of [`DEFAULT_COLORS`].
    pub fn add(
        ledger: &Ledger,
        created_on: NaiveDate,
        name: &str,
        color: Option<&str>,
        budget: f64,
    ) -> ServiceResult<Ledger> {
        Self::validate_name(name)?;
        Self::validate_budget(budget)?;
        let id = ledger.next_category_id();
        let color = color
            .map(str::to_owned)
            .unwrap_or_else(|| Self::default_color(ledger.category_count()).to_owned());
        debug!(%id, name, "adding category");
        Ok(ledger.clone().with_category_added(Category::new(
            id,
            created_on,
            name.trim(),
            color,
            budget,
        )))
    }

    /// Replaces a category's name, color, and budget.
    pub fn edit(ledger: &Ledger, id: &str, changes: CategoryChanges) -> ServiceResult<Ledger> {
        Self::validate_name(&changes.name)?;
        Self::validate_budget(changes.budget)?;
        if ledger.category_by_id(id).is_none() {
            return Err(ServiceError::CategoryNotFound(id.to_owned()));
        }
        Ok(ledger.clone().with_category_edited(id, changes))
    }

    /// Removes a category without touching its transactions; the caller
    /// decides whether orphans should be cascaded away afterwards. The income
    /// bucket is refused.
    pub fn remove(ledger: &Ledger, id: &str) -> ServiceResult<Ledger> {
        Self::guard_income_bucket(id)?;
        if ledger.category_by_id(id).is_none() {
            return Err(ServiceError::CategoryNotFound(id.to_owned()));
        }
        debug!(%id, "removing category");
        Ok(ledger.clone().without_category(id))
    }

    /// Removes a category and every transaction filed under it in one step,
    /// the two-gesture delete the UI performs.
    pub fn remove_with_transactions(ledger: &Ledger, id: &str) -> ServiceResult<Ledger> {
        let ledger = Self::remove(ledger, id)?;
        Ok(ledger.without_category_transactions(id))
    }

    /// Categories a transaction of `kind` may be filed under: expenses use
    /// every bucket except income, income only the income bucket.
    pub fn available_for(ledger: &Ledger, kind: TransactionKind) -> Vec<&Category> {
        ledger
            .categories()
            .iter()
            .filter(|category| match kind {
                TransactionKind::Expense => !category.is_income_bucket(),
                TransactionKind::Income => category.is_income_bucket(),
            })
            .collect()
    }

    fn default_color(index: usize) -> &'static str {
        DEFAULT_COLORS[index % DEFAULT_COLORS.len()]
    }

    fn validate_name(name: &str) -> ServiceResult<()> {
        if name.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "Please enter a category name".into(),
            ));
        }
        Ok(())
    }

    fn validate_budget(budget: f64) -> ServiceResult<()> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(ServiceError::Invalid(
                "Please enter a budget that is greater than zero".into(),
            ));
        }
        Ok(())
    }

    fn guard_income_bucket(id: &str) -> ServiceResult<()> {
        if id == INCOME_CATEGORY_ID {
            return Err(ServiceError::Invalid(
                "The Income bucket cannot be removed".into(),
            ));
        }
        Ok(())
    }
}
