//! Core domain types for helpdesk tickets
//!
//! This module holds the value types ([`Status`], [`Priority`], [`TicketId`]),
//! the [`Ticket`] entity with its one-way resolve transition, the
//! [`TicketBuilder`] used to construct tickets, and the [`Clock`] seam plus
//! timestamp formatting shared with the terminal front-end.

mod builders;
mod clock;
mod ticket;
mod types;

pub use builders::TicketBuilder;
pub use clock::{Clock, MISSING_TIMESTAMP, SystemClock, TIMESTAMP_FORMAT, format_timestamp};
pub use ticket::Ticket;
pub use types::{Priority, Status, TicketId};

#[cfg(test)]
pub use clock::MockClock;
