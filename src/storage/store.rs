use super::{TicketFilter, TicketRepository, TicketStats};
use crate::core::{Clock, Priority, Status, SystemClock, Ticket, TicketBuilder, TicketId};
use crate::error::{HelpdeskError, Result};
use std::collections::HashSet;
use std::fmt;

/// In-memory owner of all tickets for a session
///
/// Tickets are kept in insertion order and never removed. Ids are issued
/// sequentially from a counter that only grows, so an id is never reused.
/// Every operation either applies completely or leaves the store unchanged.
pub struct TicketStore {
    tickets: Vec<Ticket>,
    next_id: TicketId,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for TicketStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketStore")
            .field("tickets", &self.tickets)
            .field("next_id", &self.next_id)
            .field("clock", &"Box<dyn Clock>")
            .finish()
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore {
    /// Create an empty store; the first ticket gets id 1
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_id: TicketId::FIRST,
            clock: Box::new(SystemClock),
        }
    }

    /// Create a store seeded with existing tickets
    ///
    /// The next id is one past the largest seeded id, or 1 when `tickets` is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`HelpdeskError::InvalidInput`] if a seed has id 0, an id above
    /// [`TicketId::MAX_SEED`], or the same id as another seed.
    pub fn from_tickets(tickets: Vec<Ticket>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tickets.len());
        for id in tickets.iter().map(Ticket::id) {
            if id.value() == 0 || id > TicketId::MAX_SEED {
                return Err(HelpdeskError::invalid_input(format!(
                    "seed ticket id {id} is out of range"
                )));
            }
            if !seen.insert(id) {
                return Err(HelpdeskError::invalid_input(format!(
                    "seed ticket id {id} is used more than once"
                )));
            }
        }

        let next_id = match tickets.iter().map(Ticket::id).max() {
            Some(max) => max.next().ok_or_else(|| {
                HelpdeskError::invalid_input(format!("no id left after seed ticket {max}"))
            })?,
            None => TicketId::FIRST,
        };

        tracing::debug!(seeded = tickets.len(), %next_id, "store seeded");
        Ok(Self {
            tickets,
            next_id,
            clock: Box::new(SystemClock),
        })
    }

    /// Replace the clock used to stamp `created_at` and `resolved_at`
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// All tickets in insertion order
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// The id the next created ticket will receive
    pub const fn next_id(&self) -> TicketId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Log a new open ticket
    ///
    /// Text fields are trimmed. Blank fields are accepted here; requiring
    /// them is the job of the form that collects them.
    pub fn create_ticket(
        &mut self,
        requester: &str,
        contact: &str,
        subject: &str,
        description: &str,
        priority: Priority,
    ) -> &Ticket {
        let id = self.next_id;
        let ticket = TicketBuilder::new()
            .id(id)
            .requester(requester)
            .contact(contact)
            .subject(subject)
            .description(description)
            .priority(priority)
            .created_at(self.clock.now())
            .build();

        let index = self.tickets.len();
        self.tickets.push(ticket);
        // seeds stop at MAX_SEED, so the counter cannot reach the end of u64
        self.next_id = id.next().unwrap_or(id);

        tracing::debug!(ticket_id = %id, ?priority, "ticket created");
        &self.tickets[index]
    }

    /// Resolve the ticket with the given id
    ///
    /// # Errors
    ///
    /// - [`HelpdeskError::TicketNotFound`] if no ticket has this id
    /// - [`HelpdeskError::AlreadyResolved`] if the ticket is already resolved
    /// - [`HelpdeskError::Validation`] if the notes are blank after trimming
    pub fn resolve_ticket(&mut self, id: TicketId, resolution: &str) -> Result<&Ticket> {
        let resolved_at = self.clock.now();
        let ticket = self
            .tickets
            .iter_mut()
            .find(|ticket| ticket.id() == id)
            .ok_or(HelpdeskError::TicketNotFound { id })?;

        ticket.resolve_at(resolution, resolved_at)?;

        tracing::debug!(ticket_id = %id, "ticket resolved");
        Ok(&*ticket)
    }

    /// Look up a ticket by id
    pub fn get_ticket(&self, id: TicketId) -> Option<&Ticket> {
        self.load(id)
    }

    /// Tickets matching every given criterion, in insertion order
    pub fn filter_tickets(&self, status: Option<Status>, priority: Option<Priority>) -> Vec<&Ticket> {
        TicketFilter::new(status, priority).apply(self)
    }

    /// Total, open and resolved counts
    pub fn stats(&self) -> TicketStats {
        TicketStats::collect(self)
    }
}

impl TicketRepository for TicketStore {
    fn load_all(&self) -> &[Ticket] {
        &self.tickets
    }
}
