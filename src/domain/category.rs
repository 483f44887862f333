//! Domain types representing budget categories.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Identifiable, NamedEntity};

/// Reserved id of the income bucket. Every income transaction is filed under
/// it, category management refuses to delete it, and budget-usage displays
/// skip it.
pub const INCOME_CATEGORY_ID: &str = "0";

/// A named, budgeted spending bucket.
///
/// `id` and `created_on` are fixed at creation. `name`, `color`, and `budget`
/// are replaced through [`CategoryChanges`]; the ledger itself accepts any
/// values and leaves validation to the service layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub created_on: NaiveDate,
    pub name: String,
    pub color: String,
    /// Monthly ceiling. A budget of `0.0` reports usage as 0% regardless of
    /// spend.
    pub budget: f64,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        created_on: NaiveDate,
        name: impl Into<String>,
        color: impl Into<String>,
        budget: f64,
    ) -> Self {
        Self {
            id: id.into(),
            created_on,
            name: name.into(),
            color: color.into(),
            budget,
        }
    }

    /// Returns `true` for the reserved income bucket.
    pub fn is_income_bucket(&self) -> bool {
        self.id == INCOME_CATEGORY_ID
    }

    /// Applies replacement values for the mutable fields.
    pub(crate) fn apply(&mut self, changes: CategoryChanges) {
        self.name = changes.name;
        self.color = changes.color;
        self.budget = changes.budget;
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Replacement values for a category's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryChanges {
    pub name: String,
    pub color: String,
    pub budget: f64,
}

impl CategoryChanges {
    pub fn new(name: impl Into<String>, color: impl Into<String>, budget: f64) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            budget,
        }
    }
}
