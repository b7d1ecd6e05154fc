//! Expense model
//!
//! A single dated expense plus the raw-input and partial-update structures
//! used to create and edit one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::month::Month;
use crate::error::{LedgerError, LedgerResult};

/// Date format used for input, display, and the ledger file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(trimmed.to_string()))
}

/// Largest amount a single expense may record (one billion)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Parse an amount and require it to be strictly positive and at most `MAX_AMOUNT`
pub fn parse_amount(s: &str) -> LedgerResult<Money> {
    let amount =
        Money::parse(s).map_err(|_| LedgerError::InvalidAmount(s.trim().to_string()))?;
    if !amount.is_positive() {
        return Err(LedgerError::NonPositiveAmount(amount.to_decimal_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::InvalidAmount(format!(
            "{} exceeds the maximum of {}",
            s.trim(),
            MAX_AMOUNT.to_decimal_string()
        )));
    }
    Ok(amount)
}

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: Category,
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create an expense from already typed fields
    ///
    /// Fails with `NonPositiveAmount` if `amount` is zero or negative.
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(amount.to_decimal_string()));
        }
        Ok(Self {
            date,
            amount,
            category,
            description: description.into(),
        })
    }

    /// Month this expense falls in
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.amount,
            self.category,
            self.description
        )
    }
}

/// Raw operator input for the four expense fields
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl ExpenseInput {
    /// Validate every field and build a new expense
    ///
    /// Fields are checked in order date, amount, category; the first failure
    /// is returned.
    pub fn parse(&self) -> LedgerResult<Expense> {
        let date = parse_date(&self.date)?;
        let amount = parse_amount(&self.amount)?;
        let category: Category = self.category.parse()?;
        Expense::new(date, amount, category, self.description.trim())
    }
}

/// Partial update for an existing expense; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    /// Build an update from raw input where a blank field means "keep"
    pub fn parse(input: &ExpenseInput) -> LedgerResult<Self> {
        let date = non_blank(&input.date).map(parse_date).transpose()?;
        let amount = non_blank(&input.amount).map(parse_amount).transpose()?;
        let category = non_blank(&input.category)
            .map(str::parse::<Category>)
            .transpose()?;
        let description = non_blank(&input.description).map(str::to_string);

        Ok(Self {
            date,
            amount,
            category,
            description,
        })
    }

    /// Check if this update changes nothing
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }

    /// Produce the updated expense, leaving `current` untouched
    pub fn apply(&self, current: &Expense) -> Expense {
        Expense {
            date: self.date.unwrap_or(current.date),
            amount: self.amount.unwrap_or(current.amount),
            category: self.category.unwrap_or(current.category),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
