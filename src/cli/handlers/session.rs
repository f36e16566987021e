//! The interactive helpdesk session
//!
//! A session owns one [`TicketStore`] for its whole lifetime and reads
//! commands from a [`FormInput`] until `exit` or end of input. Domain errors
//! are reported and the session keeps going; anything else (a broken
//! terminal, an I/O failure) ends it.

use super::{board, create, resolve, stats};
use crate::cli::OutputFormatter;
use crate::cli::labels::{parse_priority_filter, parse_status_filter};
use crate::config::Config;
use crate::core::TicketId;
use crate::error::{HelpdeskError, Result};
use crate::interactive::{FormInput, ScriptedForm, TerminalForm};
use crate::storage::{TicketFilter, TicketStore};
use std::io::{self, IsTerminal};
use std::str::FromStr;

const HELP: &[(&str, &str)] = &[
    ("new", "Log a new ticket (alias: create)"),
    (
        "list [status:<open|resolved|all>] [priority:<low|medium|high|all>]",
        "Show the ticket board (alias: board)",
    ),
    ("show <id>", "Show one ticket in full"),
    ("resolve <id> [notes]", "Resolve an open ticket"),
    ("stats", "Show ticket counts"),
    ("help", "Show this help"),
    ("exit", "End the session (alias: quit)"),
];

/// One parsed line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    New,
    List(TicketFilter),
    Show(TicketId),
    Resolve {
        id: TicketId,
        notes: Option<String>,
    },
    Stats,
    Help,
    Exit,
}

impl FromStr for SessionCommand {
    type Err = HelpdeskError;

    fn from_str(line: &str) -> Result<Self> {
        let (word, rest) = split_first_word(line);

        match word.to_lowercase().as_str() {
            "new" | "create" => Ok(Self::New),
            "list" | "board" => parse_filter(rest).map(Self::List),
            "show" => parse_id(rest).map(Self::Show),
            "resolve" => {
                let (id, notes) = split_first_word(rest);
                Ok(Self::Resolve {
                    id: parse_id(id)?,
                    notes: (!notes.is_empty()).then(|| notes.to_string()),
                })
            },
            "stats" => Ok(Self::Stats),
            "help" | "?" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err(HelpdeskError::invalid_input(format!("unknown command '{word}'"))),
        }
    }
}

/// Split off the first word, keeping the rest (trimmed) intact
fn split_first_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn parse_id(input: &str) -> Result<TicketId> {
    if input.is_empty() {
        return Err(HelpdeskError::invalid_input("a ticket id is required"));
    }
    input.parse()
}

fn parse_filter(args: &str) -> Result<TicketFilter> {
    let mut filter = TicketFilter::default();
    for token in args.split_whitespace() {
        match token.split_once(':') {
            Some((key, value)) if key.eq_ignore_ascii_case("status") => {
                filter.status = parse_status_filter(value)?;
            },
            Some((key, value)) if key.eq_ignore_ascii_case("priority") => {
                filter.priority = parse_priority_filter(value)?;
            },
            _ => {
                return Err(HelpdeskError::invalid_input(format!(
                    "unknown filter '{token}'. Use status:<value> or priority:<value>"
                )));
            },
        }
    }
    Ok(filter)
}

enum Flow {
    Continue,
    Exit,
}

/// A running session over one store
pub struct DeskSession<'a, F: FormInput> {
    store: TicketStore,
    form: F,
    config: &'a Config,
    output: &'a OutputFormatter,
}

impl<'a, F: FormInput> DeskSession<'a, F> {
    pub fn new(
        store: TicketStore,
        form: F,
        config: &'a Config,
        output: &'a OutputFormatter,
    ) -> Self {
        Self {
            store,
            form,
            config,
            output,
        }
    }

    /// Read and run commands until `exit` or end of input
    ///
    /// # Errors
    ///
    /// Returns the first error that is not recoverable, such as a failure to
    /// read input.
    pub fn run(&mut self) -> Result<()> {
        self.banner();

        while let Some(line) = self.form.read_command(&self.config.prompt)? {
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<SessionCommand>().and_then(|command| self.dispatch(command)) {
                Ok(Flow::Continue) => {},
                Ok(Flow::Exit) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(error = %e, command = %line.trim(), "command failed");
                    self.report(&e);
                },
                Err(e) => return Err(e),
            }
        }

        tracing::info!(tickets = self.store.len(), "session ended");
        self.output.info("Goodbye. All tickets have been discarded.");
        Ok(())
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<Flow> {
        tracing::debug!(?command, "dispatching");

        match command {
            SessionCommand::New => {
                create::handle_new_command(
                    &mut self.store,
                    &mut self.form,
                    self.config.default_priority,
                    self.output,
                )?;
                self.redraw()?;
            },
            SessionCommand::List(filter) => {
                board::handle_list_command(&self.store, filter, self.config.newest_first, self.output)?;
            },
            SessionCommand::Show(id) => board::handle_show_command(&self.store, id, self.output)?,
            SessionCommand::Resolve { id, notes } => {
                resolve::handle_resolve_command(&mut self.store, &mut self.form, id, notes, self.output)?;
                self.redraw()?;
            },
            SessionCommand::Stats => stats::handle_stats_command(&self.store, self.output)?,
            SessionCommand::Help => self.help(),
            SessionCommand::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Re-render statistics and the full board after a change
    fn redraw(&self) -> Result<()> {
        if !self.config.redraw_after_change {
            return Ok(());
        }
        stats::handle_stats_command(&self.store, self.output)?;
        board::handle_list_command(
            &self.store,
            TicketFilter::default(),
            self.config.newest_first,
            self.output,
        )
    }

    fn banner(&self) {
        self.output.heading("IT Helpdesk Demo");
        self.output
            .info("Tickets are kept in memory only and reset when the session ends.");
        self.output.info("Type 'help' for a list of commands.");
    }

    fn help(&self) {
        self.output.heading("Commands");
        for (usage, summary) in HELP {
            self.output.info(&format!("  {usage:<70} {summary}"));
        }
    }

    fn report(&self, error: &HelpdeskError) {
        self.output.error(&error.user_message());
        for suggestion in error.suggestions() {
            self.output.info(&format!("  • {suggestion}"));
        }
    }
}

/// Run a session on stdin with a fresh, empty store
///
/// Prompts are rendered with dialoguer when stdin is a terminal; otherwise
/// stdin is read line by line so sessions can be scripted.
pub fn handle_session_command(config: &Config, output: &OutputFormatter) -> Result<()> {
    let store = TicketStore::new();
    let stdin = io::stdin();

    if stdin.is_terminal() {
        tracing::debug!("reading commands from the terminal");
        DeskSession::new(store, TerminalForm::new(), config, output).run()
    } else {
        tracing::debug!("reading commands from piped input");
        DeskSession::new(store, ScriptedForm::new(stdin.lock()), config, output).run()
    }
}
