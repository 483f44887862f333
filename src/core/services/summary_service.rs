//! Aggregation helpers for dashboard and analytics rendering.
//!
//! Everything here is plain derived data; charts and cards are drawn by the
//! calling layer.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::core::format;
use crate::domain::Ledger;

/// Headline totals for the dashboard cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerOverview {
    pub total_income: f64,
    pub total_expense: f64,
    pub total_remaining_budget: f64,
    /// Percentage of income kept; `0.0` when there is no income.
    pub saving_rate: f64,
}

/// One budget-usage row. The income bucket never appears here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryUsage {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub budget: f64,
    pub spent: f64,
    /// May be negative when over budget.
    pub remaining: f64,
    /// Uncapped; exceeds 100 when over budget.
    pub usage_percent: f64,
}

/// Income, expenses, and savings for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTotals {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
}

impl MonthlyTotals {
    /// `Oct 2025`, the label trend rows are rendered under.
    pub fn label(&self) -> String {
        format::month_label(self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InsightKind {
    Warning,
    Info,
    Success,
}

/// A short, displayable observation about spending behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
}

/// Aggregates ledger data for summary and analytics scenarios.
pub struct SummaryService;

impl SummaryService {
    /// Headline totals across the whole ledger.
    pub fn overview(ledger: &Ledger) -> LedgerOverview {
        LedgerOverview {
            total_income: ledger.total_income(),
            total_expense: ledger.total_expense(),
            total_remaining_budget: ledger.total_remaining_budget(),
            saving_rate: ledger.saving_rate(),
        }
    }

    /// Budget usage per spending category, skipping the income bucket.
    pub fn category_usage(ledger: &Ledger) -> Vec<CategoryUsage> {
        ledger
            .categories()
            .iter()
            .filter(|category| !category.is_income_bucket())
            .map(|category| {
                let spent = ledger.category_expense(&category.id);
                CategoryUsage {
                    category_id: category.id.clone(),
                    name: category.name.clone(),
                    color: category.color.clone(),
                    budget: category.budget,
                    spent,
                    remaining: ledger.remaining_budget(&category.id),
                    usage_percent: ledger.budget_usage(&category.id),
                }
            })
            .collect()
    }

    /// Income/expense totals grouped by calendar month, oldest first,
    /// trimmed to the trailing `last_n` months that saw activity.
    pub fn monthly_trends(ledger: &Ledger, last_n: usize) -> Vec<MonthlyTotals> {
        let mut months: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
        for transaction in ledger.transactions() {
            let key = (transaction.date.year(), transaction.date.month());
            let entry = months.entry(key).or_insert((0.0, 0.0));
            if transaction.is_income() {
                entry.0 += transaction.amount;
            } else {
                entry.1 += transaction.amount;
            }
        }
        let skip = months.len().saturating_sub(last_n);
        months
            .into_iter()
            .skip(skip)
            .map(|((year, month), (income, expenses))| MonthlyTotals {
                year,
                month,
                income,
                expenses,
                savings: income - expenses,
            })
            .collect()
    }

    /// Short observations for the analytics panel: over-budget alert,
    /// highest-spending category, and a savings-rate verdict.
    pub fn spending_insights(ledger: &Ledger) -> Vec<Insight> {
        let usage = Self::category_usage(ledger);
        let mut insights = Vec::new();

        let over_budget = usage.iter().filter(|row| row.spent > row.budget).count();
        if over_budget > 0 {
            insights.push(Insight {
                kind: InsightKind::Warning,
                title: "Over Budget Alert".into(),
                message: format!("{over_budget} categories are over budget"),
            });
        }

        if let Some(highest) = usage
            .iter()
            .filter(|row| row.spent > 0.0)
            .max_by(|a, b| a.spent.partial_cmp(&b.spent).unwrap_or(std::cmp::Ordering::Equal))
        {
            insights.push(Insight {
                kind: InsightKind::Info,
                title: "Highest Spending".into(),
                message: format!("{}: {}", highest.name, format::currency(highest.spent)),
            });
        }

        let saving_rate = ledger.saving_rate();
        if saving_rate < 10.0 {
            insights.push(Insight {
                kind: InsightKind::Warning,
                title: "Low Savings Rate".into(),
                message: "Consider increasing savings to at least 10%".into(),
            });
        } else if saving_rate >= 20.0 {
            insights.push(Insight {
                kind: InsightKind::Success,
                title: "Great Savings Rate".into(),
                message: format!("You're saving {saving_rate:.1}% of your income"),
            });
        }

        insights
    }
}
