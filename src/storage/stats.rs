use super::TicketRepository;
use crate::core::Ticket;
use serde::Serialize;

/// Aggregate ticket counts
///
/// `open + resolved == total` always holds since a ticket has exactly one of
/// the two statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub resolved: usize,
}

impl TicketStats {
    /// Calculate statistics for every ticket in a repository
    pub fn collect<R>(repository: &R) -> Self
    where
        R: TicketRepository + ?Sized,
    {
        let total = repository.load_all().len();
        let open = repository.count(Ticket::is_open);

        Self {
            total,
            open,
            resolved: total - open,
        }
    }
}

impl From<TicketStats> for (usize, usize, usize) {
    fn from(stats: TicketStats) -> Self {
        (stats.total, stats.open, stats.resolved)
    }
}
