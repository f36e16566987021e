//! Test utilities for helpdesk
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{Priority, Ticket, TicketBuilder, TicketId};
use crate::storage::TicketStore;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Once;

static DISABLE_COLORS: Once = Once::new();

/// Turn off ANSI colors for the whole test process
///
/// The `colored` override is process-wide; setting it once keeps parallel
/// tests from racing on it.
pub fn disable_colors() {
    DISABLE_COLORS.call_once(|| colored::control::set_override(false));
}

/// A fixed timestamp on 2024-01-01 at the given hour and minute (UTC)
pub fn fixed_time(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0)
        .single()
        .expect("valid fixed time")
}

/// Create a test ticket with default values
pub fn create_test_ticket(id: u64, subject: &str, priority: Priority) -> Ticket {
    ticket_builder(id, subject, priority).build()
}

/// Create a resolved test ticket
pub fn create_resolved_ticket(id: u64, subject: &str, priority: Priority, notes: &str) -> Ticket {
    let minutes = i64::try_from(id).expect("small test id");
    ticket_builder(id, subject, priority)
        .resolved(notes, fixed_time(12, 0) + Duration::minutes(minutes))
        .build()
}

fn ticket_builder(id: u64, subject: &str, priority: Priority) -> TicketBuilder {
    let minutes = i64::try_from(id).expect("small test id");
    TicketBuilder::new()
        .id(TicketId::new(id))
        .requester(format!("Requester {id}"))
        .contact(format!("user{id}@example.com"))
        .subject(subject)
        .description(format!("Description for {subject}"))
        .priority(priority)
        .created_at(fixed_time(9, 0) + Duration::minutes(minutes))
}

/// Test data builder for complex scenarios
///
/// Tickets get sequential ids from 1 and strictly increasing creation times.
pub struct TestDataBuilder {
    tickets: Vec<Ticket>,
}

impl TestDataBuilder {
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
        }
    }

    fn next_id(&self) -> u64 {
        self.tickets.len() as u64 + 1
    }

    /// Add an open ticket
    pub fn with_ticket(mut self, subject: &str, priority: Priority) -> Self {
        let id = self.next_id();
        self.tickets.push(create_test_ticket(id, subject, priority));
        self
    }

    /// Add a resolved ticket
    pub fn with_resolved_ticket(mut self, subject: &str, priority: Priority, notes: &str) -> Self {
        let id = self.next_id();
        self.tickets
            .push(create_resolved_ticket(id, subject, priority, notes));
        self
    }

    /// Build and return the tickets
    pub fn build(self) -> Vec<Ticket> {
        self.tickets
    }

    /// Build a store seeded with the tickets
    pub fn build_store(self) -> TicketStore {
        TicketStore::from_tickets(self.tickets).expect("sequential test ids")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    #[test]
    fn test_data_builder() {
        let tickets = TestDataBuilder::new()
            .with_ticket("Printer jam", Priority::High)
            .with_resolved_ticket("VPN down", Priority::Low, "Rebooted")
            .build();

        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].id(), TicketId::new(1));
        assert_eq!(tickets[1].status(), Status::Resolved);
        assert!(tickets[0].created_at() < tickets[1].created_at());
    }

    #[test]
    fn test_build_store() {
        let store = TestDataBuilder::new()
            .with_ticket("Printer jam", Priority::High)
            .build_store();

        assert_eq!(store.next_id(), TicketId::new(2));
    }
}
