use prettytable::{Cell, Row, Table};

use crate::solver::{
    constraint::Constraint,
    engine::{PerConstraintStats, SearchStats},
    problem::ConstraintId,
    value::{Value, Variable},
};

/// Renders per-constraint search statistics as a text table, slowest
/// constraint last.
pub fn render_stats_table<V: Variable, D: Value>(
    stats: &SearchStats,
    constraints: &[std::sync::Arc<dyn Constraint<V, D>>],
) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Checks"),
        Cell::new("Violations"),
        Cell::new("Time / Check (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|entry| entry.1.time_spent_micros);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = constraints[*constraint_id].descriptor();
        let avg_time = if constraint_stats.checks > 0 {
            constraint_stats.time_spent_micros as f64 / constraint_stats.checks as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.checks.to_string()),
            Cell::new(&constraint_stats.violations.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
