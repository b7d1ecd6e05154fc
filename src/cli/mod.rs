//! CLI command handlers
//!
//! The interactive menu and the non-interactive subcommands, bridging
//! operator input with the service and report layers.

pub mod commands;
pub mod menu;
pub mod prompt;

pub use commands::{handle_command, CommandContext, Commands, SearchArgs};
pub use menu::MenuSession;
pub use prompt::Prompter;
