//! Interactive input for helpdesk sessions
//!
//! A session reads its commands and form fields through the [`FormInput`]
//! trait. [`TerminalForm`] drives dialoguer prompts when a person is at the
//! keyboard; [`ScriptedForm`] reads plain lines from any reader, which keeps
//! sessions scriptable from pipes and tests.

use crate::cli::labels::{parse_priority, priority_label};
use crate::core::Priority;
use crate::error::{HelpdeskError, Result};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::io::{self, BufRead};

/// Source of session commands and form answers
pub trait FormInput {
    /// Read the next session command; `None` once input is exhausted
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Read one free-text field (may be blank)
    fn text(&mut self, label: &str) -> Result<String>;

    /// Choose a priority, preselecting `default`
    fn priority(&mut self, default: Priority) -> Result<Priority>;
}

/// Prompts rendered with dialoguer on the controlling terminal
pub struct TerminalForm {
    theme: ColorfulTheme,
}

impl TerminalForm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormInput for TerminalForm {
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>> {
        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match input {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            },
            Err(e) => Err(e.into()),
        }
    }

    fn text(&mut self, label: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(Into::into)
    }

    fn priority(&mut self, default: Priority) -> Result<Priority> {
        let labels: Vec<&str> = Priority::ALL.iter().copied().map(priority_label).collect();
        let default_index = Priority::ALL
            .iter()
            .position(|p| *p == default)
            .unwrap_or_default();

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Priority")
            .items(&labels)
            .default(default_index)
            .interact()?;

        Priority::ALL
            .get(selection)
            .copied()
            .ok_or_else(|| HelpdeskError::invalid_input("priority selection out of range"))
    }
}

/// Line-oriented input: one command or field answer per line
///
/// A blank priority line selects the default. Fields read after the end of
/// input are blank, so an incomplete form fails validation instead of
/// blocking.
pub struct ScriptedForm<R> {
    reader: R,
}

impl<R: BufRead> ScriptedForm<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl<R: BufRead> FormInput for ScriptedForm<R> {
    fn read_command(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.read_line()
    }

    fn text(&mut self, _label: &str) -> Result<String> {
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn priority(&mut self, default: Priority) -> Result<Priority> {
        match self.read_line()? {
            Some(line) if !line.trim().is_empty() => parse_priority(&line),
            _ => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_commands_until_eof() {
        let mut form = ScriptedForm::new("list\r\nstats\n".as_bytes());

        assert_eq!(form.read_command(">").unwrap().as_deref(), Some("list"));
        assert_eq!(form.read_command(">").unwrap().as_deref(), Some("stats"));
        assert!(form.read_command(">").unwrap().is_none());
    }

    #[test]
    fn test_scripted_text_keeps_inner_whitespace() {
        let mut form = ScriptedForm::new("  Alice Smith  \n".as_bytes());

        assert_eq!(form.text("Requester").unwrap(), "  Alice Smith  ");
        assert_eq!(form.text("Contact").unwrap(), "");
    }

    #[test]
    fn test_scripted_priority() {
        let mut form = ScriptedForm::new("high\n\nurgent\n".as_bytes());

        assert_eq!(form.priority(Priority::Medium).unwrap(), Priority::High);
        assert_eq!(form.priority(Priority::Low).unwrap(), Priority::Low);
        assert!(form.priority(Priority::Medium).is_err());
        assert_eq!(form.priority(Priority::Medium).unwrap(), Priority::Medium);
    }
}
