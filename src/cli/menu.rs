//! Interactive menu
//!
//! The seven-option loop that drives the ledger from operator input. Every
//! operation reports its own failure and returns to the menu; only the end
//! of the input stream or choosing Exit leaves the loop.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_expense_line, format_expense_table, format_trend_chart};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, ExpenseInput, ExpenseUpdate, Ledger, DATE_FORMAT};
use crate::reports::{
    search, trend_series, CategoryBreakdown, CategoryScope, ExpenseListing, SearchMode,
    SearchQuery, SummaryReport,
};
use crate::services::{Confirmation, DeleteOutcome, ExpenseService};

use super::prompt::Prompter;

const MENU: &str = "\nExpense Tracker Menu:\n\
                    1. Add Expense\n\
                    2. View All Expenses\n\
                    3. Edit Expense\n\
                    4. Delete Expense\n\
                    5. View Summary\n\
                    6. Search Expenses\n\
                    7. Exit\n";

const NO_EXPENSES: &str = "No expenses recorded yet.";

const MAX_READ_FAILURES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    View,
    Edit,
    Delete,
    Summary,
    Search,
    Exit,
}

impl MenuChoice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Edit),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Summary),
            "6" => Some(Self::Search),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One interactive session over a ledger
pub struct MenuSession<'a, R, W> {
    prompter: Prompter<R, W>,
    service: ExpenseService<'a>,
    settings: &'a Settings,
    ledger: Ledger,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(
        prompter: Prompter<R, W>,
        service: ExpenseService<'a>,
        settings: &'a Settings,
        ledger: Ledger,
    ) -> Self {
        Self {
            prompter,
            service,
            settings,
            ledger,
        }
    }

    /// The current ledger snapshot
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the menu until Exit or end of input
    ///
    /// A line that cannot be read is treated like an unknown choice. Reading
    /// gives up after `MAX_READ_FAILURES` such lines in a row.
    pub fn run(&mut self) -> LedgerResult<()> {
        let mut read_failures = 0;
        loop {
            self.prompter.show(MENU)?;
            let raw = match self.prompter.ask("Choose an option (1-7): ") {
                Ok(raw) => raw,
                Err(LedgerError::EndOfInput) => break,
                Err(e @ LedgerError::Io(_)) => {
                    read_failures += 1;
                    if read_failures >= MAX_READ_FAILURES {
                        return Err(e);
                    }
                    self.prompter.say(format!("Error: {}", e))?;
                    self.prompter.say("Invalid option. Please choose again.")?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            read_failures = 0;

            let Some(choice) = MenuChoice::parse(&raw) else {
                self.prompter.say("Invalid option. Please choose again.")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(LedgerError::EndOfInput) => break,
                Err(e) => self.prompter.say(format!("Error: {}", e))?,
            }
        }

        self.prompter.say("Exiting program.")
    }

    fn dispatch(&mut self, choice: MenuChoice) -> LedgerResult<()> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::View => self.view(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Summary => self.summary(),
            MenuChoice::Search => self.search(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add(&mut self) -> LedgerResult<()> {
        let input = ExpenseInput {
            date: self.prompter.ask("Enter date (YYYY-MM-DD): ")?,
            amount: self.prompter.ask("Enter amount: ")?,
            category: self
                .prompter
                .ask(&format!("Enter category ({}): ", Category::choices()))?,
            description: self.prompter.ask("Enter description: ")?,
        };

        self.ledger = self.service.add(&self.ledger, &input)?;
        self.prompter.say("Expense added successfully!")
    }

    fn view(&mut self) -> LedgerResult<()> {
        match ExpenseListing::new(&self.ledger, &self.settings.currency_symbol) {
            Some(listing) => {
                let text = listing.to_string();
                self.prompter.say(text)
            }
            None => self.prompter.say(NO_EXPENSES),
        }
    }

    /// Show the listing and read a valid index, or `None` if the ledger is empty
    fn pick_index(&mut self, prompt: &str) -> LedgerResult<Option<usize>> {
        if self.ledger.is_empty() {
            self.prompter.say(NO_EXPENSES)?;
            return Ok(None);
        }

        self.view()?;
        let raw = self.prompter.ask(prompt)?;
        self.ledger.resolve_index(&raw).map(Some)
    }

    fn edit(&mut self) -> LedgerResult<()> {
        let Some(index) = self.pick_index("Enter the index of the expense to edit: ")? else {
            return Ok(());
        };

        let Some(current) = self.ledger.get(index).cloned() else {
            return Ok(());
        };

        self.prompter.say("Leave a field blank to keep its current value.")?;
        let input = ExpenseInput {
            date: self.prompter.ask(&format!(
                "New date (YYYY-MM-DD) [{}]: ",
                current.date.format(DATE_FORMAT)
            ))?,
            amount: self
                .prompter
                .ask(&format!("New amount [{}]: ", current.amount.to_decimal_string()))?,
            category: self.prompter.ask(&format!(
                "New category ({}) [{}]: ",
                Category::choices(),
                current.category
            ))?,
            description: self
                .prompter
                .ask(&format!("New description [{}]: ", current.description))?,
        };
        let update = ExpenseUpdate::parse(&input)?;

        self.ledger = self.service.edit(&self.ledger, index, &update)?;
        self.prompter.say("Expense updated successfully!")
    }

    fn delete(&mut self) -> LedgerResult<()> {
        let Some(index) = self.pick_index("Enter the index of the expense to delete: ")? else {
            return Ok(());
        };

        if let Some(expense) = self.ledger.get(index) {
            let line = format_expense_line(index, expense, &self.settings.currency_symbol);
            self.prompter.say(line)?;
        }
        let response = self
            .prompter
            .ask("Are you sure you want to delete this expense? (y/n): ")?;

        match self
            .service
            .delete(&self.ledger, index, Confirmation::from_response(&response))?
        {
            DeleteOutcome::Deleted { ledger, .. } => {
                self.ledger = ledger;
                self.prompter.say("Expense deleted successfully!")
            }
            DeleteOutcome::Cancelled => self.prompter.say("Deletion canceled."),
        }
    }

    fn summary(&mut self) -> LedgerResult<()> {
        let currency = self.settings.currency_symbol.as_str();
        let Some(report) = SummaryReport::generate(&self.ledger) else {
            return self.prompter.say("No expenses to summarize.");
        };
        self.prompter.show(report.format_terminal(currency))?;

        let raw = self
            .prompter
            .ask("\nView category expenses for (a) all months or (b) the latest month? ")?;
        let scope: CategoryScope = raw.parse()?;
        if let Some(breakdown) = CategoryBreakdown::generate(&self.ledger, scope) {
            self.prompter
                .show(breakdown.format_terminal(currency, self.settings.chart_width / 2))?;
        }

        let raw = self.prompter.ask("Show expense trend chart? (y/n): ")?;
        if Confirmation::from_response(&raw) == Confirmation::Confirmed {
            let points = trend_series(&self.ledger);
            self.prompter
                .show(format_trend_chart(&points, self.settings.chart_width, currency))?;
        }

        Ok(())
    }

    fn search(&mut self) -> LedgerResult<()> {
        let raw = self
            .prompter
            .ask("Search by (a) date, (b) category, or (c) keyword: ")?;
        let mode: SearchMode = raw.parse()?;
        let term = self.prompter.ask(mode.prompt())?;
        let query = SearchQuery::parse(mode, &term)?;

        let results = search(&self.ledger, &query);
        if results.is_empty() {
            return self.prompter.say("No matching expenses found.");
        }

        let table = format_expense_table(results, &self.settings.currency_symbol);
        self.prompter.say(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{LedgerStore, MemoryStore};
    use std::io::Cursor;

    fn run_script(store: &MemoryStore, script: &str) -> (Ledger, String) {
        let settings = Settings::default();
        let ledger = store.load().unwrap();
        let prompter = Prompter::new(Cursor::new(script.to_string()), Vec::new());
        let mut session =
            MenuSession::new(prompter, ExpenseService::new(store), &settings, ledger);

        session.run().unwrap();
        let ledger = session.ledger().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (ledger, output)
    }

    const ADD_COFFEE: &str = "1\n2024-03-15\n4.50\nfood\nCoffee\n";
    const ADD_TAXI: &str = "1\n2024-03-16\n12\nTransport\nTaxi home\n";

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_exit_prints_goodbye() {
        let store = MemoryStore::default();
        let (_, output) = run_script(&store, "7\n");

        assert!(output.contains("Expense Tracker Menu:"));
        assert!(output.contains("7. Exit"));
        assert!(output.trim_end().ends_with("Exiting program."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let store = MemoryStore::default();
        let (ledger, output) = run_script(&store, "");

        assert!(ledger.is_empty());
        assert!(output.contains("Exiting program."));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let store = MemoryStore::default();
        let (_, output) = run_script(&store, "9\n7\n");

        assert!(output.contains("Invalid option. Please choose again."));
        assert_eq!(output.matches("Expense Tracker Menu:").count(), 2);
    }

    #[test]
    fn test_add_then_view() {
        let store = MemoryStore::default();
        let (ledger, output) = run_script(&store, &format!("{}2\n7\n", ADD_COFFEE));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(0).unwrap().category, Category::Food);
        assert_eq!(store.snapshot(), ledger);
        assert!(output.contains("Expense added successfully!"));
        assert!(output.contains("Coffee"));
    }

    #[test]
    fn test_add_error_is_reported_and_loop_continues() {
        let store = MemoryStore::default();
        let (ledger, output) = run_script(&store, "1\n2024-03-15\n-3\nFood\n\n7\n");

        assert!(ledger.is_empty());
        assert!(output.contains("Error: Amount must be positive"));
        assert!(output.contains("Exiting program."));
    }

    #[test]
    fn test_view_empty() {
        let store = MemoryStore::default();
        let (_, output) = run_script(&store, "2\n7\n");
        assert!(output.contains(NO_EXPENSES));
    }

    #[test]
    fn test_edit_blank_fields_keep_values() {
        let store = MemoryStore::default();
        let script = format!("{}3\n0\n\n\n\n\n7\n", ADD_COFFEE);
        let (ledger, output) = run_script(&store, &script);

        assert!(output.contains("Expense updated successfully!"));
        assert_eq!(ledger.get(0).unwrap().description, "Coffee");
    }

    #[test]
    fn test_edit_prompts_show_current_values() {
        let store = MemoryStore::default();
        let script = format!("{}3\n0\n\n5\n\n\n7\n", ADD_COFFEE);
        let (ledger, output) = run_script(&store, &script);

        assert!(output.contains("New date (YYYY-MM-DD) [2024-03-15]: "));
        assert!(output.contains("New amount [4.50]: "));
        assert!(output.contains("[Food]: "));
        assert!(output.contains("New description [Coffee]: "));
        assert_eq!(ledger.get(0).unwrap().amount.to_decimal_string(), "5.00");
    }

    #[test]
    fn test_unreadable_choice_is_skipped() {
        let store = MemoryStore::default();
        let mut script = vec![0xff, 0xfe, b'\n'];
        script.extend_from_slice(ADD_COFFEE.as_bytes());
        script.extend_from_slice(b"7\n");

        let settings = Settings::default();
        let prompter = Prompter::new(Cursor::new(script), Vec::new());
        let mut session =
            MenuSession::new(prompter, ExpenseService::new(&store), &settings, Ledger::default());

        session.run().unwrap();
        assert_eq!(session.ledger().len(), 1);

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("Invalid option. Please choose again."));
        assert!(output.contains("Expense added successfully!"));
    }

    #[test]
    fn test_edit_invalid_index() {
        let store = MemoryStore::default();
        let script = format!("{}3\n5\n7\n", ADD_COFFEE);
        let (_, output) = run_script(&store, &script);

        assert!(output.contains("Error: Invalid index: 5"));
    }

    #[test]
    fn test_delete_cancel_and_confirm() {
        let store = MemoryStore::default();
        let script = format!("{}{}4\n0\nn\n4\n0\nYES\n7\n", ADD_COFFEE, ADD_TAXI);
        let (ledger, output) = run_script(&store, &script);

        assert!(output.contains("Deletion canceled."));
        assert!(output.contains("Expense deleted successfully!"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(0).unwrap().description, "Taxi home");
    }

    #[test]
    fn test_summary_empty() {
        let store = MemoryStore::default();
        let (_, output) = run_script(&store, "5\n7\n");
        assert!(output.contains("No expenses to summarize."));
    }

    #[test]
    fn test_summary_with_chart() {
        let store = MemoryStore::default();
        let script = format!("{}{}5\nb\ny\n7\n", ADD_COFFEE, ADD_TAXI);
        let (_, output) = run_script(&store, &script);

        assert!(output.contains("Total Expenses: $16.50"));
        assert!(output.contains("Category Expenses (2024-03)"));
        assert!(output.contains("Expense Trend"));
    }

    #[test]
    fn test_summary_bad_scope() {
        let store = MemoryStore::default();
        let script = format!("{}5\nz\n7\n", ADD_COFFEE);
        let (_, output) = run_script(&store, &script);
        assert!(output.contains("Error: Invalid option: 'z'"));
    }

    #[test]
    fn test_search_flows() {
        let store = MemoryStore::default();
        let script = format!(
            "{}{}6\nc\nCOFFEE\n6\na\n2024-01-01\n6\na\nnot-a-date\n6\nx\n7\n",
            ADD_COFFEE, ADD_TAXI
        );
        let (_, output) = run_script(&store, &script);

        assert!(output.contains("Coffee"));
        assert!(output.contains("No matching expenses found."));
        assert!(output.contains("Error: Invalid date format: 'not-a-date'"));
        assert!(output.contains("Error: Invalid option: 'x'"));
    }
}
