//! In-memory ticket storage
//!
//! [`TicketStore`] owns every ticket of a session in insertion order and
//! assigns their ids. Nothing is persisted: a store lives as long as the
//! session that owns it. Read-side queries are expressed through the
//! [`TicketRepository`] trait so that filters and statistics work against
//! any ticket source.
//!
//! A store is neither `Sync`-guarded nor shared: each session owns its own
//! instance. Hosts that need to share one store across threads must wrap it
//! in their own lock.

mod filter;
mod repository;
mod stats;
mod store;

pub use filter::TicketFilter;
pub use repository::TicketRepository;
pub use stats::TicketStats;
pub use store::TicketStore;
