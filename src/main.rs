use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_ledger::audit::AuditLogger;
use expense_ledger::cli::{handle_command, CommandContext, Commands, MenuSession, Prompter};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::services::ExpenseService;
use expense_ledger::storage::CsvLedgerStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "Record daily expenses in a CSV ledger, then review them by month \
                  and category, search them, or chart the spending trend."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(short, long, global = true, env = "EXPENSE_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = paths.ledger_file(cli.file.as_deref(), settings.ledger_file.as_deref());

    // Initialize storage
    let store = CsvLedgerStore::new(ledger_path.clone());
    let audit = AuditLogger::new(paths.audit_log());
    let mut service = ExpenseService::new(&store);
    if settings.audit_enabled {
        service = service.with_audit(&audit);
    }
    let ledger = service.load()?;

    match cli.command {
        Some(cmd) => {
            let ctx = CommandContext {
                paths: &paths,
                settings: &settings,
                ledger: &ledger,
                ledger_path: &ledger_path,
            };
            handle_command(&ctx, cmd)?;
        }
        None => {
            let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
            MenuSession::new(prompter, service, &settings, ledger).run()?;
        }
    }

    Ok(())
}
