use crate::error::{HelpdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a ticket, unique within one store
///
/// Ids are positive and issued sequentially by
/// [`TicketStore`](crate::storage::TicketStore); callers never choose them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    /// The id issued by an empty store
    pub const FIRST: Self = Self(1);

    /// Largest id a store accepts from its seed tickets
    ///
    /// Keeps 2^63 ids of headroom above any seed, so a store never runs out
    /// of ids to issue.
    pub const MAX_SEED: Self = Self(u64::MAX / 2);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` at the end of the id space
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = HelpdeskError;

    /// Parses `12` or `#12`
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        match digits.parse::<u64>() {
            Ok(0) | Err(_) => Err(HelpdeskError::invalid_input(format!(
                "'{s}' is not a ticket id"
            ))),
            Ok(value) => Ok(Self(value)),
        }
    }
}

/// Lifecycle state of a ticket
///
/// The only transition is `Open` to `Resolved`, and it happens once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Open,
    Resolved,
}

/// Urgency chosen by the requester when the ticket is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Every priority, in the order forms present them
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}
