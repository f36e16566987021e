use super::{Priority, Status, TicketId};
use crate::error::{HelpdeskError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single reported issue, tracked from creation to resolution
///
/// Fields are read-only outside the crate. `resolution` and `resolved_at` are
/// both `None` while the ticket is open and both `Some` once it is resolved;
/// [`Ticket::resolve`] is the only way to move between the two states.
/// Construct tickets with [`TicketBuilder`](super::TicketBuilder) or through
/// [`TicketStore::create_ticket`](crate::storage::TicketStore::create_ticket).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub(super) id: TicketId,
    pub(super) requester: String,
    pub(super) contact: String,
    pub(super) subject: String,
    pub(super) description: String,
    pub(super) priority: Priority,
    pub(super) status: Status,
    pub(super) created_at: DateTime<Utc>,
    pub(super) resolution: Option<String>,
    pub(super) resolved_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub const fn id(&self) -> TicketId {
        self.id
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    /// Email address or phone number of the requester
    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn priority(&self) -> Priority {
        self.priority
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Resolution notes, present only once resolved
    pub fn resolution(&self) -> Option<&str> {
        self.resolution.as_deref()
    }

    pub const fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    /// Resolve the ticket now with the given notes
    ///
    /// # Errors
    ///
    /// - [`HelpdeskError::AlreadyResolved`] if the ticket is not open
    /// - [`HelpdeskError::Validation`] if the notes are blank after trimming
    ///
    /// On error the ticket is left unchanged.
    pub fn resolve(&mut self, resolution: &str) -> Result<()> {
        self.resolve_at(resolution, Utc::now())
    }

    /// Resolve the ticket, stamping `resolved_at` with the given time
    ///
    /// # Errors
    ///
    /// Same as [`Ticket::resolve`].
    pub fn resolve_at(&mut self, resolution: &str, resolved_at: DateTime<Utc>) -> Result<()> {
        if self.status == Status::Resolved {
            return Err(HelpdeskError::AlreadyResolved { id: self.id });
        }

        let resolution = resolution.trim();
        if resolution.is_empty() {
            return Err(HelpdeskError::validation("resolution cannot be empty"));
        }

        self.status = Status::Resolved;
        self.resolution = Some(resolution.to_string());
        self.resolved_at = Some(resolved_at);
        Ok(())
    }
}
