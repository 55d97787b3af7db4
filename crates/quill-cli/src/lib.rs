// Library interface for quill-cli
// This allows integration tests to access internal modules

#[path = "cli.rs"]
pub mod cli;

#[path = "commands.rs"]
pub mod commands;

#[path = "report.rs"]
pub mod report;

pub use cli::Cli;
pub use commands::{handle_command, CommandResult};
pub use report::finish;
