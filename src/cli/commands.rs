//! Non-interactive subcommands
//!
//! Read-only views of the ledger and its audit log for scripting, plus
//! `config`.

use std::path::Path;

use clap::{Args, Subcommand};

use crate::audit::AuditLogger;
use crate::config::{LedgerPaths, Settings};
use crate::display::{format_expense_table, format_trend_chart};
use crate::error::LedgerResult;
use crate::models::Ledger;
use crate::reports::{
    search, trend_series, CategoryBreakdown, CategoryScope, ExpenseListing, SearchMode,
    SearchQuery, SummaryReport,
};

/// Subcommands; with none given the interactive menu starts
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every expense with its index
    #[command(alias = "ls")]
    List,

    /// Print totals by month and by category
    Summary {
        /// Break categories down for the latest month only
        #[arg(long)]
        latest: bool,

        /// Also print the trend chart
        #[arg(long)]
        chart: bool,
    },

    /// Find expenses by date, category, or keyword
    Search(SearchArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show resolved paths and settings
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SearchArgs {
    /// Exact date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category name (any case)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Substring of the description (any case)
    #[arg(short, long)]
    pub keyword: Option<String>,
}

impl SearchArgs {
    fn to_query(&self) -> LedgerResult<SearchQuery> {
        if let Some(date) = &self.date {
            SearchQuery::parse(SearchMode::Date, date)
        } else if let Some(category) = &self.category {
            SearchQuery::parse(SearchMode::Category, category)
        } else {
            SearchQuery::parse(SearchMode::Keyword, self.keyword.as_deref().unwrap_or(""))
        }
    }
}

/// Everything a subcommand may need
pub struct CommandContext<'a> {
    pub paths: &'a LedgerPaths,
    pub settings: &'a Settings,
    pub ledger: &'a Ledger,
    pub ledger_path: &'a Path,
}

/// Handle a subcommand
pub fn handle_command(ctx: &CommandContext, cmd: Commands) -> LedgerResult<()> {
    match cmd {
        Commands::List => handle_list(ctx),
        Commands::Summary { latest, chart } => handle_summary(ctx, latest, chart),
        Commands::Search(args) => handle_search(ctx, &args),
        Commands::History { limit } => handle_history(ctx, limit),
        Commands::Config { init } => handle_config(ctx, init),
    }
}

fn handle_list(ctx: &CommandContext) -> LedgerResult<()> {
    match ExpenseListing::new(ctx.ledger, &ctx.settings.currency_symbol) {
        Some(listing) => println!("{}", listing),
        None => println!("No expenses recorded yet."),
    }
    Ok(())
}

fn handle_summary(ctx: &CommandContext, latest: bool, chart: bool) -> LedgerResult<()> {
    let currency = ctx.settings.currency_symbol.as_str();
    let Some(report) = SummaryReport::generate(ctx.ledger) else {
        println!("No expenses to summarize.");
        return Ok(());
    };
    print!("{}", report.format_terminal(currency));
    println!();

    let scope = if latest {
        CategoryScope::LatestMonth
    } else {
        CategoryScope::AllMonths
    };
    if let Some(breakdown) = CategoryBreakdown::generate(ctx.ledger, scope) {
        print!(
            "{}",
            breakdown.format_terminal(currency, ctx.settings.chart_width / 2)
        );
    }

    if chart {
        println!();
        print!(
            "{}",
            format_trend_chart(&trend_series(ctx.ledger), ctx.settings.chart_width, currency)
        );
    }

    Ok(())
}

fn handle_search(ctx: &CommandContext, args: &SearchArgs) -> LedgerResult<()> {
    let query = args.to_query()?;
    let results = search(ctx.ledger, &query);

    if results.is_empty() {
        println!("No matching expenses found.");
    } else {
        println!(
            "{}",
            format_expense_table(results, &ctx.settings.currency_symbol)
        );
    }
    Ok(())
}

fn handle_history(ctx: &CommandContext, limit: usize) -> LedgerResult<()> {
    let logger = AuditLogger::new(ctx.paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

fn handle_config(ctx: &CommandContext, init: bool) -> LedgerResult<()> {
    if init {
        ctx.settings.save(ctx.paths)?;
        println!(
            "Settings written to: {}",
            ctx.paths.settings_file().display()
        );
        println!();
    }

    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Base directory: {}", ctx.paths.base_dir().display());
    println!("Settings file:  {}", ctx.paths.settings_file().display());
    println!("Ledger file:    {}", ctx.ledger_path.display());
    println!("Audit log:      {}", ctx.paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", ctx.settings.currency_symbol);
    println!("  Audit enabled:   {}", ctx.settings.audit_enabled);
    println!("  Chart width:     {}", ctx.settings.chart_width);
    println!("  Expenses loaded: {}", ctx.ledger.len());

    Ok(())
}
