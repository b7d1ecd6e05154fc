//! Expense search
//!
//! Filters the ledger by exact date, category name, or description keyword.
//! Matches keep their ledger index so the operator can edit or delete them.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Expense, Ledger};

/// What field a search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Date,
    Category,
    Keyword,
}

impl SearchMode {
    /// Prompt shown when asking for the search term
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Date => "Enter date (YYYY-MM-DD): ",
            Self::Category => "Enter category: ",
            Self::Keyword => "Enter keyword: ",
        }
    }
}

impl FromStr for SearchMode {
    type Err = LedgerError;

    /// `a` date, `b` category, `c` keyword
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::Date),
            "b" => Ok(Self::Category),
            "c" => Ok(Self::Keyword),
            other => Err(LedgerError::InvalidOption(other.to_string())),
        }
    }
}

/// A parsed search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Exact calendar date
    Date(NaiveDate),
    /// Category name, compared case-insensitively
    Category(String),
    /// Description substring, compared case-insensitively
    Keyword(String),
}

impl SearchQuery {
    /// Parse the raw term for `mode`
    ///
    /// A date term must be a valid `YYYY-MM-DD`. Category names are not
    /// checked against the fixed set: an unknown name just matches nothing.
    pub fn parse(mode: SearchMode, term: &str) -> LedgerResult<Self> {
        let term = term.trim();
        Ok(match mode {
            SearchMode::Date => Self::Date(parse_date(term)?),
            SearchMode::Category => Self::Category(term.to_lowercase()),
            SearchMode::Keyword => Self::Keyword(term.to_lowercase()),
        })
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::Date(date) => expense.date == *date,
            Self::Category(name) => expense.category.name().to_lowercase() == *name,
            Self::Keyword(keyword) => expense.description.to_lowercase().contains(keyword),
        }
    }
}

/// All matching expenses with their ledger indices, in ledger order
pub fn search<'a>(ledger: &'a Ledger, query: &SearchQuery) -> Vec<(usize, &'a Expense)> {
    ledger.iter().filter(|(_, e)| query.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    fn ledger() -> Ledger {
        let rows = [
            ("2024-03-15", 450, Category::Food, "Coffee"),
            ("2024-03-16", 1200, Category::Transport, "Taxi"),
            ("2024-03-15", 800, Category::Food, "Iced coffee and cake"),
            ("2024-04-01", 3000, Category::Utilities, "Electricity"),
        ];
        Ledger::new(
            rows.iter()
                .map(|(date, cents, category, description)| {
                    Expense::new(
                        parse_date(date).unwrap(),
                        Money::from_cents(*cents),
                        *category,
                        *description,
                    )
                    .unwrap()
                })
                .collect(),
        )
    }

    fn indices(ledger: &Ledger, mode: SearchMode, term: &str) -> Vec<usize> {
        let query = SearchQuery::parse(mode, term).unwrap();
        search(ledger, &query).into_iter().map(|(i, _)| i).collect()
    }

    #[test]
    fn test_mode_options() {
        assert_eq!("a".parse::<SearchMode>().unwrap(), SearchMode::Date);
        assert_eq!("B".parse::<SearchMode>().unwrap(), SearchMode::Category);
        assert_eq!("c".parse::<SearchMode>().unwrap(), SearchMode::Keyword);
        assert!(matches!(
            "d".parse::<SearchMode>(),
            Err(LedgerError::InvalidOption(_))
        ));
    }

    #[test]
    fn test_search_by_date() {
        assert_eq!(indices(&ledger(), SearchMode::Date, "2024-03-15"), vec![0, 2]);
        assert!(indices(&ledger(), SearchMode::Date, "2024-05-01").is_empty());
    }

    #[test]
    fn test_search_by_bad_date() {
        let err = SearchQuery::parse(SearchMode::Date, "15/03/2024").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDate(_)));
    }

    #[test]
    fn test_search_by_category_ignores_case() {
        assert_eq!(indices(&ledger(), SearchMode::Category, "food"), vec![0, 2]);
        assert_eq!(indices(&ledger(), SearchMode::Category, "UTILITIES"), vec![3]);
        assert!(indices(&ledger(), SearchMode::Category, "Rent").is_empty());
    }

    #[test]
    fn test_search_by_keyword() {
        assert_eq!(indices(&ledger(), SearchMode::Keyword, "coffee"), vec![0, 2]);
        assert_eq!(indices(&ledger(), SearchMode::Keyword, "TAX"), vec![1]);
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        assert_eq!(indices(&ledger(), SearchMode::Keyword, ""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_indices_survive_filtering() {
        let ledger = ledger();
        let query = SearchQuery::parse(SearchMode::Keyword, "electricity").unwrap();
        let results = search(&ledger, &query);

        assert_eq!(results.len(), 1);
        let (index, expense) = results[0];
        assert_eq!(ledger.get(index), Some(expense));
    }
}
