//! Terminal and JSON output
//!
//! Every handler writes through an [`OutputFormatter`]. In text mode messages
//! are printed (colored unless disabled); in JSON mode each rendering is a
//! single JSON document per line on stdout, so output can be piped into
//! other tools.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Output formatter shared by all handlers
#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter; `no_color` disables ANSI colors process-wide
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.json {
            let _ = self.print_json(&serde_json::json!({
                "status": "success",
                "message": message,
            }));
        } else {
            println!("{} {}", "✓".green().bold(), message.green());
        }
    }

    /// Print an informational line; suppressed in JSON mode
    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Print a bold heading; suppressed in JSON mode
    pub fn heading(&self, message: &str) {
        if !self.json {
            println!("{}", message.bold());
        }
    }

    /// Print a warning
    pub fn warning(&self, message: &str) {
        if self.json {
            let _ = self.print_json(&serde_json::json!({
                "status": "warning",
                "message": message,
            }));
        } else {
            println!("{} {}", "!".yellow().bold(), message.yellow());
        }
    }

    /// Print an error to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Print a value as one line of JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string(value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_modes() {
        assert!(OutputFormatter::new(true, true).is_json());
        assert!(!OutputFormatter::default().is_json());
    }

    #[test]
    fn test_print_json() {
        let output = OutputFormatter::new(true, true);
        assert!(output.print_json(&serde_json::json!({"total": 0})).is_ok());
    }
}
