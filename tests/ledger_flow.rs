//! End-to-end flow: seed a ledger, mutate it through the services, then
//! filter, sort, and summarize the way the UI layer does.

use chrono::NaiveDate;

use pocketbook_core::core::search;
use pocketbook_core::core::services::{
    CategoryService, SummaryService, TransactionService,
};
use pocketbook_core::core::sort::{self, SortDirection, SortField};
use pocketbook_core::domain::{
    Category, Ledger, Transaction, TransactionChanges, TransactionKind, INCOME_CATEGORY_ID,
};
use pocketbook_core::sample_data::sample_ledger;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn two_transaction_scenario_produces_the_expected_metrics() {
    let seeded = date(2025, 10, 15);
    let ledger = Ledger::from_parts(
        vec![
            Category::new(INCOME_CATEGORY_ID, seeded, "Income", "#ffffff", 0.0),
            Category::new("1", seeded, "Transportation", "#ef4444", 500.0),
        ],
        vec![
            Transaction::new("1", seeded, 85.50, TransactionKind::Expense, "Chevron", "1"),
            Transaction::new(
                "2",
                seeded,
                1200.00,
                TransactionKind::Income,
                "Salary",
                INCOME_CATEGORY_ID,
            ),
        ],
    );

    assert!((ledger.category_expense("1") - 85.50).abs() < f64::EPSILON);
    assert!((ledger.remaining_budget("1") - 414.50).abs() < f64::EPSILON);
    assert!((ledger.total_income() - 1200.0).abs() < f64::EPSILON);
    assert!((ledger.saving_rate() - 92.875).abs() < 1e-9);
}

#[test]
fn query_round_trip_on_a_december_expense() {
    let seeded = date(2024, 12, 1);
    let ledger = Ledger::from_parts(
        vec![Category::new("1", seeded, "Transportation", "#ef4444", 500.0)],
        vec![Transaction::new(
            "1",
            date(2024, 12, 15),
            85.50,
            TransactionKind::Expense,
            "Chevron",
            "1",
        )],
    );

    assert_eq!(search::filter_transactions(&ledger, "@cat:Transportation").len(), 1);
    assert!(search::filter_transactions(&ledger, "@type:income").is_empty());
    assert_eq!(search::filter_transactions(&ledger, "@date:12-2024").len(), 1);
    assert!(search::filter_transactions(&ledger, "@date:1-2025").is_empty());
    assert_eq!(search::filter_transactions(&ledger, "").len(), 1);
}

#[test]
fn seeded_session_add_search_sort_summarize() {
    let ledger = sample_ledger();

    // The user adds a November expense through the form layer.
    let ledger = TransactionService::add(
        &ledger,
        date(2025, 11, 2),
        60.0,
        TransactionKind::Expense,
        "Gas",
        "1",
    )
    .expect("valid submission");
    assert_eq!(ledger.transaction_count(), 5);
    assert!(ledger.transaction_by_id("5").is_some());

    // The month shortcut narrows the table to November.
    let november = search::filter_transactions(&ledger, &search::month_shortcut(date(2025, 11, 1)));
    assert_eq!(november.len(), 1);
    assert_eq!(november[0].description, "Gas");

    // Column sort: amount descending puts the salary first.
    let by_amount = sort::sorted(ledger.transactions(), SortField::Amount, SortDirection::Descending);
    assert_eq!(by_amount[0].description, "Salary");
    // The two forty-dollar entries tie; the stable sort keeps their ledger order.
    assert_eq!(by_amount.last().unwrap().description, "Movie Theater");

    // Dashboard totals reflect the addition.
    let overview = SummaryService::overview(&ledger);
    assert!((overview.total_expense - 225.5).abs() < f64::EPSILON);
    assert!((overview.total_income - 1200.0).abs() < f64::EPSILON);

    // Usage rows cover the two spending categories only.
    let usage = SummaryService::category_usage(&ledger);
    assert_eq!(usage.len(), 2);
    let transportation = usage.iter().find(|row| row.category_id == "1").unwrap();
    assert!((transportation.spent - 145.5).abs() < f64::EPSILON);
}

#[test]
fn category_delete_cascade_mirrors_the_ui_gesture() {
    let ledger = sample_ledger();

    // Plain removal leaves the two Entertainment transactions dangling.
    let without_cascade = CategoryService::remove(&ledger, "2").expect("removable");
    assert_eq!(without_cascade.transaction_count(), 4);
    assert!((without_cascade.category_expense("2") - 80.0).abs() < f64::EPSILON);
    assert_eq!(without_cascade.remaining_budget("2"), 0.0);

    // The combined gesture drops them with the category.
    let cascaded = CategoryService::remove_with_transactions(&ledger, "2").expect("removable");
    assert_eq!(cascaded.transaction_count(), 2);
    assert!(search::filter_transactions(&cascaded, "@cat:Entertainment").is_empty());
}

#[test]
fn reassigning_a_transaction_moves_its_spend_between_categories() {
    let ledger = sample_ledger();
    let ledger = TransactionService::edit(
        &ledger,
        "2",
        TransactionChanges::new("Game night", "1"),
    )
    .expect("valid edit");

    assert!((ledger.category_expense("1") - 125.5).abs() < f64::EPSILON);
    assert!((ledger.category_expense("2") - 40.0).abs() < f64::EPSILON);
    // Totals are unchanged by the move.
    assert!((ledger.total_expense() - 165.5).abs() < f64::EPSILON);
}

#[test]
fn snapshots_survive_a_serialization_round_trip() {
    let ledger = sample_ledger();
    let json = serde_json::to_string(&ledger).expect("serialize");
    assert!(json.contains("Transportation"));
    assert!(json.contains("\"expense\""));

    let restored: Ledger = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, ledger);
    assert!((restored.saving_rate() - ledger.saving_rate()).abs() < f64::EPSILON);
}
