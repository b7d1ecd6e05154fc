//! Summary Report
//!
//! Overall and per-month totals, plus a per-category breakdown scoped to
//! either every month or only the most recent one.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::LedgerError;
use crate::models::{Category, Ledger, Money, Month};

/// Total spending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total: Money,
    pub count: usize,
}

/// Totals across the whole ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// Sum of every amount
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// One row per month present, oldest first
    pub monthly: Vec<MonthlyTotal>,
}

impl SummaryReport {
    /// Generate the summary, or `None` for an empty ledger
    pub fn generate(ledger: &Ledger) -> Option<Self> {
        if ledger.is_empty() {
            return None;
        }

        let mut by_month: BTreeMap<Month, (Money, usize)> = BTreeMap::new();
        for (_, expense) in ledger.iter() {
            let entry = by_month
                .entry(expense.month())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let monthly = by_month
            .into_iter()
            .map(|(month, (total, count))| MonthlyTotal {
                month,
                total,
                count,
            })
            .collect();

        Some(Self {
            total: ledger.expenses().iter().map(|e| e.amount).sum(),
            count: ledger.len(),
            monthly,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total.format_with_symbol(currency)
        ));
        output.push_str("\nMonthly Expenses:\n");
        output.push_str(&separator(32));
        output.push('\n');

        for row in &self.monthly {
            output.push_str(&format!(
                "{:<10} {:>14} {:>6}\n",
                row.month,
                row.total.format_with_symbol(currency),
                row.count
            ));
        }

        output
    }
}

/// Which months a category breakdown covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    AllMonths,
    LatestMonth,
}

impl FromStr for CategoryScope {
    type Err = LedgerError;

    /// `a` selects every month, `b` only the most recent one
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::AllMonths),
            "b" => Ok(Self::LatestMonth),
            other => Err(LedgerError::InvalidOption(other.to_string())),
        }
    }
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub count: usize,
}

/// Per-category totals for a scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub scope: CategoryScope,
    /// The month covered when scoped to the latest month
    pub month: Option<Month>,
    /// Only categories with spending, ordered by name
    pub totals: Vec<CategoryTotal>,
}

impl CategoryBreakdown {
    /// Generate the breakdown, or `None` for an empty ledger
    pub fn generate(ledger: &Ledger, scope: CategoryScope) -> Option<Self> {
        let month = match scope {
            CategoryScope::AllMonths => None,
            CategoryScope::LatestMonth => Some(ledger.latest_month()?),
        };

        let mut by_category: BTreeMap<&'static str, CategoryTotal> = BTreeMap::new();
        for (_, expense) in ledger.iter() {
            if month.is_some_and(|m| !m.contains(expense.date)) {
                continue;
            }

            let entry = by_category
                .entry(expense.category.name())
                .or_insert(CategoryTotal {
                    category: expense.category,
                    total: Money::zero(),
                    count: 0,
                });
            entry.total += expense.amount;
            entry.count += 1;
        }

        if by_category.is_empty() {
            return None;
        }

        Some(Self {
            scope,
            month,
            totals: by_category.into_values().collect(),
        })
    }

    /// Sum across all categories in scope
    pub fn total(&self) -> Money {
        self.totals.iter().map(|t| t.total).sum()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, currency: &str, bar_width: usize) -> String {
        let mut output = String::new();

        match self.month {
            Some(month) => output.push_str(&format!("Category Expenses ({}):\n", month)),
            None => output.push_str("Category Expenses (all months):\n"),
        }
        output.push_str(&separator(32 + bar_width + 8));
        output.push('\n');

        let grand_total = self.total().cents() as f64;
        let largest = self
            .totals
            .iter()
            .map(|t| t.total.cents())
            .max()
            .unwrap_or(0) as f64;

        for row in &self.totals {
            let cents = row.total.cents() as f64;
            let pct = if grand_total > 0.0 {
                cents / grand_total * 100.0
            } else {
                0.0
            };

            output.push_str(&format!(
                "{:<15} {:>14} {} {:>6}\n",
                row.category.name(),
                row.total.format_with_symbol(currency),
                format_bar(cents, largest, bar_width),
                format_percentage(pct)
            ));
        }

        output
    }
}
