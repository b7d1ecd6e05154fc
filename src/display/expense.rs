//! Expense display formatting
//!
//! Renders indexed expenses as a terminal table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, DATE_FORMAT};

use super::report::truncate;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format `(index, expense)` pairs as a table, in the order given
pub fn format_expense_table<'a>(
    rows: impl IntoIterator<Item = (usize, &'a Expense)>,
    currency: &str,
) -> String {
    let rows: Vec<ExpenseRow> = rows
        .into_iter()
        .map(|(index, expense)| ExpenseRow {
            index,
            date: expense.date.format(DATE_FORMAT).to_string(),
            amount: expense.amount.format_with_symbol(currency),
            category: expense.category.name(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(0)).with(Alignment::right()))
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));

    table.to_string()
}

/// Format one expense for confirmation prompts
pub fn format_expense_line(index: usize, expense: &Expense, currency: &str) -> String {
    format!(
        "{}: {} {} {} {}",
        index,
        expense.date.format(DATE_FORMAT),
        expense.amount.format_with_symbol(currency),
        expense.category,
        expense.description
    )
}
