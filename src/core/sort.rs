//! Multi-field ordering for transaction listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::Transaction;

/// Sortable columns of the transaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Description,
    Category,
    Kind,
    Amount,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Description => "description",
            SortField::Category => "category",
            SortField::Kind => "type",
            SortField::Amount => "amount",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseSortFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "description" => Ok(SortField::Description),
            "category" => Ok(SortField::Category),
            "type" => Ok(SortField::Kind),
            "amount" => Ok(SortField::Amount),
            _ => Err(ParseSortFieldError),
        }
    }
}

/// Error returned when parsing a [`SortField`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSortFieldError;

impl fmt::Display for ParseSortFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sort field must be one of date, description, category, type, amount")
    }
}

impl std::error::Error for ParseSortFieldError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction; drives the column-header toggle.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Three-way comparison on a single field. Dates compare chronologically,
/// amounts numerically, description and category case-insensitively as text,
/// kind as text. Ties report `Equal` so a stable sort preserves the incoming
/// order.
pub fn compare(a: &Transaction, b: &Transaction, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase()),
        SortField::Category => a
            .category_id
            .to_lowercase()
            .cmp(&b.category_id.to_lowercase()),
        SortField::Kind => a.kind.as_str().cmp(b.kind.as_str()),
        SortField::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
    }
}

/// The transactions ordered by `field` in `direction`. The sort is stable;
/// the direction is a uniform reversal of the field ordering.
pub fn sorted<'a>(
    transactions: &'a [Transaction],
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a Transaction> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn transactions() -> Vec<Transaction> {
        vec![
            Transaction::new(
                "1",
                date(2025, 3, 10),
                40.0,
                TransactionKind::Expense,
                "movie",
                "2",
            ),
            Transaction::new(
                "2",
                date(2025, 1, 5),
                1200.0,
                TransactionKind::Income,
                "Salary",
                "0",
            ),
            Transaction::new(
                "3",
                date(2025, 2, 20),
                85.5,
                TransactionKind::Expense,
                "Chevron",
                "1",
            ),
        ]
    }

    fn ids(ordered: &[&Transaction]) -> Vec<String> {
        ordered.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn sorts_by_each_field() {
        let list = transactions();
        assert_eq!(
            ids(&sorted(&list, SortField::Date, SortDirection::Ascending)),
            ["2", "3", "1"]
        );
        assert_eq!(
            ids(&sorted(
                &list,
                SortField::Description,
                SortDirection::Ascending
            )),
            ["3", "1", "2"]
        );
        assert_eq!(
            ids(&sorted(&list, SortField::Category, SortDirection::Ascending)),
            ["2", "3", "1"]
        );
        assert_eq!(
            ids(&sorted(&list, SortField::Kind, SortDirection::Ascending)),
            ["1", "3", "2"]
        );
        assert_eq!(
            ids(&sorted(&list, SortField::Amount, SortDirection::Ascending)),
            ["1", "3", "2"]
        );
    }

    #[test]
    fn descending_reverses_ascending() {
        let list = transactions();
        let ascending = ids(&sorted(&list, SortField::Date, SortDirection::Ascending));
        let mut descending = ids(&sorted(&list, SortField::Date, SortDirection::Descending));
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn sorting_a_sorted_list_is_idempotent() {
        let list = transactions();
        let once: Vec<Transaction> = sorted(&list, SortField::Amount, SortDirection::Ascending)
            .into_iter()
            .cloned()
            .collect();
        let twice = sorted(&once, SortField::Amount, SortDirection::Ascending);
        assert_eq!(ids(&twice), ["1", "3", "2"]);
    }

    #[test]
    fn ties_keep_incoming_order_in_both_directions() {
        let mut list = transactions();
        list.push(Transaction::new(
            "4",
            date(2025, 4, 1),
            40.0,
            TransactionKind::Expense,
            "another forty",
            "1",
        ));
        let ascending = ids(&sorted(&list, SortField::Amount, SortDirection::Ascending));
        assert_eq!(ascending, ["1", "4", "3", "2"]);
        let descending = ids(&sorted(&list, SortField::Amount, SortDirection::Descending));
        assert_eq!(descending, ["2", "3", "1", "4"]);
    }

    #[test]
    fn description_sort_ignores_case() {
        let list = transactions();
        // "Chevron" < "movie" < "Salary" only when lowercased; a byte-wise
        // sort would put the capitalized entries first.
        assert_eq!(
            ids(&sorted(
                &list,
                SortField::Description,
                SortDirection::Ascending
            )),
            ["3", "1", "2"]
        );
    }

    #[test]
    fn direction_toggle_round_trips() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(
            SortDirection::Ascending.toggled().toggled(),
            SortDirection::Ascending
        );
    }

    #[test]
    fn sort_field_parses_ui_column_keys() {
        assert_eq!("type".parse::<SortField>().unwrap(), SortField::Kind);
        assert_eq!("Amount".parse::<SortField>().unwrap(), SortField::Amount);
        assert!("balance".parse::<SortField>().is_err());
        assert_eq!(SortField::Kind.to_string(), "type");
    }
}
