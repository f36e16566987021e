//! Command handlers for the helpdesk CLI
//!
//! Each module handles one command: the session loop in [`session`]
//! dispatches to the board, create, resolve and stats handlers, and
//! [`config`] serves the `config` subcommands.

pub mod board;
pub mod config;
pub mod create;
pub mod resolve;
pub mod session;
pub mod stats;

pub use board::{handle_list_command, handle_show_command};
pub use config::handle_config_command;
pub use create::handle_new_command;
pub use resolve::handle_resolve_command;
pub use session::{DeskSession, SessionCommand, handle_session_command};
pub use stats::handle_stats_command;
