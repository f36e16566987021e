//! Handler for the `new` session command
//!
//! Collects the new-ticket form, checks that every text field is filled in
//! and logs the ticket in the session's store.

use crate::cli::OutputFormatter;
use crate::core::{Priority, TicketId};
use crate::error::{HelpdeskError, Result};
use crate::interactive::FormInput;
use crate::storage::TicketStore;

/// Message shown when any required field is blank
pub const INCOMPLETE_FORM: &str = "Please complete all required fields before submitting.";

/// Answers collected by the new-ticket form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicketForm {
    pub requester: String,
    pub contact: String,
    pub subject: String,
    pub description: String,
    pub priority: Priority,
}

impl NewTicketForm {
    /// Prompt for every field, preselecting `default_priority`
    pub fn collect<F: FormInput + ?Sized>(form: &mut F, default_priority: Priority) -> Result<Self> {
        Ok(Self {
            requester: form.text("Requester name")?,
            contact: form.text("Contact (email or phone)")?,
            subject: form.text("Subject")?,
            description: form.text("Issue description")?,
            priority: form.priority(default_priority)?,
        })
    }

    /// Require all four text fields to be non-blank
    pub fn validate(&self) -> Result<()> {
        let fields = [
            &self.requester,
            &self.contact,
            &self.subject,
            &self.description,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(HelpdeskError::validation(INCOMPLETE_FORM));
        }
        Ok(())
    }
}

/// Handler for the `new` session command
///
/// # Errors
///
/// Returns [`HelpdeskError::Validation`] if a required field is blank; the
/// store is left untouched in that case.
pub fn handle_new_command<F: FormInput + ?Sized>(
    store: &mut TicketStore,
    form: &mut F,
    default_priority: Priority,
    output: &OutputFormatter,
) -> Result<TicketId> {
    let answers = NewTicketForm::collect(form, default_priority)?;
    answers.validate()?;

    let ticket = store.create_ticket(
        &answers.requester,
        &answers.contact,
        &answers.subject,
        &answers.description,
        answers.priority,
    );
    let id = ticket.id();

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket,
        }))?;
    } else {
        output.success(&format!("Ticket #{id} has been logged."));
    }

    Ok(id)
}
