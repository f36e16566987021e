//! helpdesk - In-memory IT helpdesk ticket tracker
//!
//! This is the main entry point for the helpdesk CLI application.
//! It parses arguments, loads configuration, sets up logging and dispatches
//! to the command handlers.

use clap::Parser;
use helpdesk::cli::handlers::{handle_config_command, handle_session_command};
use helpdesk::cli::{Cli, Commands, OutputFormatter};
use helpdesk::config::Config;
use helpdesk::error::{HelpdeskError, Result};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
///
/// # Errors
///
/// Returns any error that occurs while loading configuration or running the
/// command
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    init_logging(cli.verbose, &config);
    if !config.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => handle_session_command(&config, formatter),
        Commands::Config { command } => handle_config_command(command, &config, formatter),
    }
}

/// Log to stderr so stdout stays clean for JSON output
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug, otherwise the
/// configured level applies.
fn init_logging(verbose: bool, config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { config.log_level.as_str() };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_error(error: &HelpdeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
