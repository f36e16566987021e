//! Error types for the helpdesk crate
//!
//! All fallible operations return [`Result`], whose error side is
//! [`HelpdeskError`]. Domain failures (validation, unknown ids, double
//! resolution) are recoverable: the session reports them and keeps running.

use crate::core::TicketId;
use thiserror::Error;

/// Errors produced by the helpdesk domain, store and terminal front-end
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// Caller-supplied text that must be non-blank was empty after trimming
    #[error("{0}")]
    Validation(String),

    /// No ticket with the given id exists in the store
    #[error("Ticket #{id} not found")]
    TicketNotFound { id: TicketId },

    /// The ticket has already been resolved
    #[error("Ticket #{id} is already resolved")]
    AlreadyResolved { id: TicketId },

    /// Unparseable id, status, priority or session command
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl HelpdeskError {
    /// Create a validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an invalid input error with the given message
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Message shown to the user at the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(e) => format!("Failed to load configuration: {e}"),
            Self::Prompt(e) => format!("Failed to read input: {e}"),
            _ => self.to_string(),
        }
    }

    /// Hints for fixing the error, empty when there is nothing useful to say
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TicketNotFound { .. } => vec![
                "Run 'list' to see the ids of existing tickets".to_string(),
            ],
            Self::AlreadyResolved { .. } => vec![
                "Resolved tickets cannot be resolved again".to_string(),
                "Run 'show <id>' to read the recorded resolution".to_string(),
            ],
            Self::InvalidInput(_) => vec!["Run 'help' to see the available commands".to_string()],
            Self::Config(_) => vec![
                "Check the syntax of your configuration file".to_string(),
                "Run 'helpdesk config path' to see where configuration is read from".to_string(),
                "Unset HELPDESK_* environment variables to fall back to defaults".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Whether a session can continue after reporting this error
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::TicketNotFound { .. }
                | Self::AlreadyResolved { .. }
                | Self::InvalidInput(_)
        )
    }

    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;
