//! Command-line interface for helpdesk
//!
//! The binary parses its arguments with clap and hands control to the
//! handlers in [`handlers`]. The default command runs an interactive session
//! that owns one [`TicketStore`](crate::storage::TicketStore).

pub mod handlers;
pub mod labels;
pub mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory IT helpdesk ticket tracker
#[derive(Parser, Debug)]
#[command(name = "helpdesk")]
#[command(about = "Log and resolve IT helpdesk tickets in memory")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, global = true, value_name = "PATH", env = "HELPDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run an interactive helpdesk session (default)
    Session,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["helpdesk"]);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["helpdesk", "--json", "session"]);
        assert!(cli.json);
        assert_eq!(cli.command, Some(Commands::Session));

        let cli = Cli::parse_from(["helpdesk", "config", "show", "--no-color"]);
        assert!(cli.no_color);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Show
            })
        );
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
