//! Handlers for the `config` subcommands

use crate::cli::{ConfigCommands, OutputFormatter};
use crate::config::Config;
use crate::error::Result;

/// Handler for `config show` and `config path`
pub fn handle_config_command(
    command: ConfigCommands,
    config: &Config,
    output: &OutputFormatter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => show_config(config, output),
        ConfigCommands::Path => show_path(output),
    }
}

fn show_config(config: &Config, output: &OutputFormatter) -> Result<()> {
    if output.is_json() {
        return output.print_json(config);
    }

    output.heading("Effective configuration");
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}

fn show_path(output: &OutputFormatter) -> Result<()> {
    let path = Config::default_path();
    let exists = path.as_ref().is_some_and(|p| p.exists());

    if output.is_json() {
        return output.print_json(&serde_json::json!({
            "path": path,
            "exists": exists,
        }));
    }

    match path {
        Some(path) if exists => output.info(&path.display().to_string()),
        Some(path) => output.info(&format!("{} (not present, using defaults)", path.display())),
        None => output.warning("No configuration directory could be determined"),
    }
    Ok(())
}
