//! helpdesk - An in-memory IT helpdesk ticket tracker
//!
//! This crate provides:
//! - Ticket domain types with a one-way `Open` to `Resolved` lifecycle
//! - An in-memory [`TicketStore`](storage::TicketStore) with filtering and statistics
//! - An interactive terminal session for logging and resolving tickets
//!
//! Tickets are never persisted; a store lives as long as the session that
//! owns it.
//!
//! # Example
//!
//! ```rust
//! use helpdesk::core::{Priority, Status};
//! use helpdesk::storage::TicketStore;
//!
//! let mut store = TicketStore::new();
//! let id = store
//!     .create_ticket("Alice", "alice@example.com", "Laptop issue", "Won't boot", Priority::High)
//!     .id();
//!
//! store.resolve_ticket(id, "Replaced the battery")?;
//!
//! assert_eq!(store.filter_tickets(Some(Status::Resolved), None).len(), 1);
//! assert_eq!(store.stats().open, 0);
//! # Ok::<(), helpdesk::HelpdeskError>(())
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpdeskError, Result};
