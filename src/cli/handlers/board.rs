//! Handlers for the ticket board and the ticket detail view
//!
//! The board lists tickets matching a status/priority filter, newest first by
//! default. Ordering is a display concern: the store itself always returns
//! insertion order.

use crate::cli::OutputFormatter;
use crate::cli::labels::{priority_label, status_label};
use crate::core::{Priority, Status, Ticket, TicketId, format_timestamp};
use crate::error::{HelpdeskError, Result};
use crate::storage::{TicketFilter, TicketStore};
use colored::{ColoredString, Colorize};

/// Handler for the `list` session command
///
/// # Arguments
///
/// * `store` - The session's ticket store
/// * `filter` - Status and priority criteria
/// * `newest_first` - Order by creation time, newest first
/// * `output` - Output formatter for displaying results
pub fn handle_list_command(
    store: &TicketStore,
    filter: TicketFilter,
    newest_first: bool,
    output: &OutputFormatter,
) -> Result<()> {
    let mut tickets = store.filter_tickets(filter.status, filter.priority);
    if newest_first {
        sort_newest_first(&mut tickets);
    }

    if output.is_json() {
        return output.print_json(&serde_json::json!({
            "filter": {
                "status": filter.status,
                "priority": filter.priority,
            },
            "filtered": !filter.is_empty(),
            "tickets": tickets,
            "count": tickets.len(),
        }));
    }

    output.heading(&board_heading(filter));
    if tickets.is_empty() {
        output.info("No tickets match the selected filters.");
        return Ok(());
    }

    for ticket in tickets {
        output.info(&format_ticket_line(ticket));
    }

    Ok(())
}

/// `Ticket board`, followed by the active criteria when filtered
fn board_heading(filter: TicketFilter) -> String {
    if filter.is_empty() {
        return "Ticket board".to_string();
    }

    let mut criteria = Vec::new();
    if let Some(status) = filter.status {
        criteria.push(format!("status: {}", status_label(status)));
    }
    if let Some(priority) = filter.priority {
        criteria.push(format!("priority: {}", priority_label(priority)));
    }
    format!("Ticket board ({})", criteria.join(", "))
}

/// Handler for the `show` session command
///
/// # Errors
///
/// Returns [`HelpdeskError::TicketNotFound`] if the id is unknown.
pub fn handle_show_command(store: &TicketStore, id: TicketId, output: &OutputFormatter) -> Result<()> {
    let ticket = store
        .get_ticket(id)
        .ok_or(HelpdeskError::TicketNotFound { id })?;

    if output.is_json() {
        return output.print_json(&serde_json::json!({ "ticket": ticket }));
    }

    for line in render_ticket_detail(ticket) {
        output.info(&line);
    }
    Ok(())
}

/// Sort by creation time descending, newest id first on ties
pub fn sort_newest_first(tickets: &mut [&Ticket]) {
    tickets.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
}

/// One board row: `[#id] subject — Status (Priority)`
pub fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "[#{}] {} — {} ({})",
        ticket.id(),
        ticket.subject(),
        status_badge(ticket.status()),
        priority_badge(ticket.priority()),
    )
}

/// Full description of a ticket, one line per entry
pub fn render_ticket_detail(ticket: &Ticket) -> Vec<String> {
    let mut lines = vec![
        format!(
            "[#{}] {} — {}",
            ticket.id(),
            ticket.subject(),
            status_badge(ticket.status())
        ),
        format!("  Requester: {}", ticket.requester()),
        format!("  Contact: {}", ticket.contact()),
        format!("  Priority: {}", priority_badge(ticket.priority())),
        format!("  Created: {}", format_timestamp(Some(ticket.created_at()))),
        "  Issue description:".to_string(),
    ];
    lines.extend(ticket.description().lines().map(|line| format!("    {line}")));

    if let Some(resolution) = ticket.resolution() {
        lines.push(format!("  Resolution: {resolution}"));
        lines.push(format!(
            "  Resolved: {}",
            format_timestamp(ticket.resolved_at())
        ));
    }

    lines
}

fn status_badge(status: Status) -> ColoredString {
    match status {
        Status::Open => status_label(status).yellow(),
        Status::Resolved => status_label(status).green(),
    }
}

fn priority_badge(priority: Priority) -> ColoredString {
    match priority {
        Priority::Low => priority_label(priority).normal(),
        Priority::Medium => priority_label(priority).cyan(),
        Priority::High => priority_label(priority).red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        TestDataBuilder, create_resolved_ticket, create_test_ticket, disable_colors,
    };

    #[test]
    fn test_format_ticket_line() {
        disable_colors();
        let ticket = create_test_ticket(3, "Laptop issue", Priority::High);
        assert_eq!(format_ticket_line(&ticket), "[#3] Laptop issue — Open (High)");
    }

    #[test]
    fn test_render_open_ticket_detail() {
        disable_colors();
        let ticket = create_test_ticket(1, "VPN down", Priority::Medium);
        let lines = render_ticket_detail(&ticket);

        assert_eq!(lines[0], "[#1] VPN down — Open");
        assert!(lines.contains(&"  Requester: Requester 1".to_string()));
        assert!(lines.contains(&"  Created: 2024-01-01 09:01 UTC".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Resolution")));
    }

    #[test]
    fn test_render_resolved_ticket_detail() {
        disable_colors();
        let ticket = create_resolved_ticket(2, "Locked out", Priority::Low, "Unlocked the account");
        let lines = render_ticket_detail(&ticket);

        assert_eq!(lines[0], "[#2] Locked out — Resolved");
        assert!(lines.contains(&"  Resolution: Unlocked the account".to_string()));
        assert!(lines.contains(&"  Resolved: 2024-01-01 12:02 UTC".to_string()));
    }

    #[test]
    fn test_board_heading_names_active_filters() {
        assert_eq!(board_heading(TicketFilter::default()), "Ticket board");
        assert_eq!(
            board_heading(TicketFilter::default().with_status(Status::Open)),
            "Ticket board (status: Open)"
        );
        assert_eq!(
            board_heading(
                TicketFilter::default()
                    .with_status(Status::Resolved)
                    .with_priority(Priority::High)
            ),
            "Ticket board (status: Resolved, priority: High)"
        );
    }

    #[test]
    fn test_sort_newest_first() {
        let tickets = TestDataBuilder::new()
            .with_ticket("First", Priority::Low)
            .with_ticket("Second", Priority::Low)
            .with_ticket("Third", Priority::Low)
            .build();
        let mut refs: Vec<&Ticket> = tickets.iter().collect();

        sort_newest_first(&mut refs);

        let ids: Vec<u64> = refs.iter().map(|t| t.id().value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_show_unknown_ticket() {
        let store = TicketStore::new();
        let output = OutputFormatter::default();

        let err = handle_show_command(&store, TicketId::new(4), &output).unwrap_err();
        assert!(matches!(err, HelpdeskError::TicketNotFound { .. }));
    }

    #[test]
    fn test_list_with_no_matches() {
        let store = TestDataBuilder::new()
            .with_ticket("Printer jam", Priority::Low)
            .build_store();
        let output = OutputFormatter::default();
        let filter = TicketFilter::default().with_status(Status::Resolved);

        assert!(handle_list_command(&store, filter, true, &output).is_ok());
    }
}
