use super::TicketRepository;
use crate::core::{Priority, Status, Ticket};

/// Status/priority filter over tickets
///
/// Absent criteria match everything; present criteria are combined with
/// logical AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl TicketFilter {
    #[must_use]
    pub const fn new(status: Option<Status>, priority: Option<Priority>) -> Self {
        Self { status, priority }
    }

    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// True when neither criterion is set
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }

    /// Check if a ticket matches all filter criteria
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = self.status {
            if ticket.status() != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if ticket.priority() != priority {
                return false;
            }
        }

        true
    }

    /// Matching tickets of a repository, in insertion order
    pub fn apply<'a, R>(&self, repository: &'a R) -> Vec<&'a Ticket>
    where
        R: TicketRepository + ?Sized,
    {
        repository.find(|ticket| self.matches(ticket))
    }
}
