//! Display labels for domain enums
//!
//! Domain types carry no display strings; everything the user reads or types
//! for a status or priority is mapped here.

use crate::core::{Priority, Status};
use crate::error::{HelpdeskError, Result};

/// Keyword accepted by filters to mean "any value"
pub const ANY: &str = "all";

pub const fn status_label(status: Status) -> &'static str {
    match status {
        Status::Open => "Open",
        Status::Resolved => "Resolved",
    }
}

pub const fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

/// Parse a status label, ignoring case
pub fn parse_status(value: &str) -> Result<Status> {
    match value.trim().to_lowercase().as_str() {
        "open" => Ok(Status::Open),
        "resolved" => Ok(Status::Resolved),
        _ => Err(HelpdeskError::invalid_input(format!(
            "unknown status '{value}'. Must be one of: open, resolved"
        ))),
    }
}

/// Parse a priority label, ignoring case
pub fn parse_priority(value: &str) -> Result<Priority> {
    match value.trim().to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        _ => Err(HelpdeskError::invalid_input(format!(
            "unknown priority '{value}'. Must be one of: low, medium, high"
        ))),
    }
}

/// Parse a status filter; `all` clears the filter
pub fn parse_status_filter(value: &str) -> Result<Option<Status>> {
    if value.trim().eq_ignore_ascii_case(ANY) {
        Ok(None)
    } else {
        parse_status(value).map(Some)
    }
}

/// Parse a priority filter; `all` clears the filter
pub fn parse_priority_filter(value: &str) -> Result<Option<Priority>> {
    if value.trim().eq_ignore_ascii_case(ANY) {
        Ok(None)
    } else {
        parse_priority(value).map(Some)
    }
}
