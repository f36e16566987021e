use super::{Priority, Status, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Text fields are trimmed when the ticket is built. A resolution is only
/// applied when its notes are non-blank, so built tickets always keep the
/// status and resolution fields consistent.
#[derive(Debug, Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    requester: Option<String>,
    contact: Option<String>,
    subject: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    created_at: Option<DateTime<Utc>>,
    resolution: Option<(String, DateTime<Utc>)>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the requester name
    #[must_use]
    pub fn requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = Some(requester.into());
        self
    }

    /// Set the contact (email or phone)
    #[must_use]
    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Set the subject
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Mark the ticket resolved with the given notes and timestamp
    #[must_use]
    pub fn resolved(mut self, resolution: impl Into<String>, resolved_at: DateTime<Utc>) -> Self {
        self.resolution = Some((resolution.into(), resolved_at));
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        let mut ticket = Ticket {
            id: self.id.unwrap_or_default(),
            requester: trimmed(self.requester),
            contact: trimmed(self.contact),
            subject: trimmed(self.subject),
            description: trimmed(self.description),
            priority: self.priority.unwrap_or_default(),
            status: Status::Open,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            resolution: None,
            resolved_at: None,
        };

        if let Some((resolution, resolved_at)) = self.resolution {
            // blank notes leave the ticket open
            if let Err(e) = ticket.resolve_at(&resolution, resolved_at) {
                tracing::warn!(ticket_id = %ticket.id, error = %e, "resolution ignored, ticket left open");
            }
        }

        ticket
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ticket_builder() {
        let created = Utc.with_ymd_and_hms(2024, 3, 4, 8, 30, 0).unwrap();
        let ticket = TicketBuilder::new()
            .id(TicketId::new(5))
            .requester(" Alice ")
            .contact(" a@x.com ")
            .subject(" Subj ")
            .description(" Desc ")
            .priority(Priority::Low)
            .created_at(created)
            .build();

        assert_eq!(ticket.id(), TicketId::new(5));
        assert_eq!(ticket.requester(), "Alice");
        assert_eq!(ticket.contact(), "a@x.com");
        assert_eq!(ticket.subject(), "Subj");
        assert_eq!(ticket.description(), "Desc");
        assert_eq!(ticket.priority(), Priority::Low);
        assert_eq!(ticket.created_at(), created);
        assert!(ticket.is_open());
    }

    #[test]
    fn test_builder_defaults() {
        let ticket = TicketBuilder::new().build();

        assert_eq!(ticket.id(), TicketId::FIRST);
        assert_eq!(ticket.priority(), Priority::Medium);
        assert_eq!(ticket.status(), Status::Open);
        assert!(ticket.requester().is_empty());
    }

    #[test]
    fn test_builder_resolved_ticket() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap();
        let ticket = TicketBuilder::new().resolved(" Reset password ", at).build();

        assert_eq!(ticket.status(), Status::Resolved);
        assert_eq!(ticket.resolution(), Some("Reset password"));
        assert_eq!(ticket.resolved_at(), Some(at));
    }

    #[test]
    fn test_builder_blank_resolution_stays_open() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap();
        let ticket = TicketBuilder::new().resolved("  ", at).build();

        assert!(ticket.is_open());
        assert!(ticket.resolution().is_none());
        assert!(ticket.resolved_at().is_none());
    }
}
