use crate::core::{Ticket, TicketId};

/// Read access to a collection of tickets
///
/// Implementors only provide [`load_all`](TicketRepository::load_all); lookups,
/// predicates and counts are derived from it and always observe insertion
/// order.
pub trait TicketRepository {
    /// All tickets, in insertion order
    fn load_all(&self) -> &[Ticket];

    /// Loads a ticket by ID
    fn load(&self, id: TicketId) -> Option<&Ticket> {
        self.load_all().iter().find(|ticket| ticket.id() == id)
    }

    /// Finds tickets matching a predicate
    fn find<F>(&self, predicate: F) -> Vec<&Ticket>
    where
        F: Fn(&Ticket) -> bool,
    {
        self.load_all()
            .iter()
            .filter(|ticket| predicate(ticket))
            .collect()
    }

    /// Counts tickets matching a predicate
    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Ticket) -> bool,
    {
        self.load_all()
            .iter()
            .filter(|ticket| predicate(ticket))
            .count()
    }
}

impl TicketRepository for [Ticket] {
    fn load_all(&self) -> &[Ticket] {
        self
    }
}

impl TicketRepository for Vec<Ticket> {
    fn load_all(&self) -> &[Ticket] {
        self
    }
}
