//! Handler for the `resolve` session command

use crate::cli::OutputFormatter;
use crate::core::TicketId;
use crate::error::{HelpdeskError, Result};
use crate::interactive::FormInput;
use crate::storage::TicketStore;

/// Handler for the `resolve` session command
///
/// Notes given on the command line are used as-is; otherwise they are
/// prompted for. The ticket is checked before prompting so that an unknown
/// or already resolved ticket does not ask for notes that would be thrown
/// away.
///
/// # Errors
///
/// - [`HelpdeskError::TicketNotFound`] for an unknown id
/// - [`HelpdeskError::AlreadyResolved`] if the ticket is not open
/// - [`HelpdeskError::Validation`] if the notes are blank
pub fn handle_resolve_command<F: FormInput + ?Sized>(
    store: &mut TicketStore,
    form: &mut F,
    id: TicketId,
    notes: Option<String>,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket = store
        .get_ticket(id)
        .ok_or(HelpdeskError::TicketNotFound { id })?;
    if !ticket.is_open() {
        return Err(HelpdeskError::AlreadyResolved { id });
    }

    let notes = match notes {
        Some(notes) => notes,
        None => form.text("Resolution notes")?,
    };

    let ticket = store.resolve_ticket(id, &notes)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket,
        }))?;
    } else {
        output.success("Ticket marked as resolved.");
    }

    Ok(())
}
