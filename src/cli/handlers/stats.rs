//! Handler for the `stats` session command

use crate::cli::OutputFormatter;
use crate::error::Result;
use crate::storage::{TicketStats, TicketStore};

/// Handler for the `stats` session command
pub fn handle_stats_command(store: &TicketStore, output: &OutputFormatter) -> Result<()> {
    let stats = store.stats();

    if output.is_json() {
        output.print_json(&serde_json::json!({ "statistics": stats }))
    } else {
        output_text(stats, output);
        Ok(())
    }
}

fn output_text(stats: TicketStats, output: &OutputFormatter) {
    output.heading("Statistics");
    for line in stats_lines(stats) {
        output.info(&line);
    }
}

fn stats_lines(stats: TicketStats) -> [String; 3] {
    [
        format!("  Total tickets: {}", stats.total),
        format!("  Open: {}", stats.open),
        format!("  Resolved: {}", stats.resolved),
    ]
}
