//! Output formatting for query results.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use waygraph_lib::PathSummary;

/// Presentation format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Print any serialisable result as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Message shown when a query has no connecting path.
pub fn unreachable_message(from: &str, to: &str) -> String {
    format!("No route found between {from} and {to}.")
}

/// Render a single path with a heading naming the algorithm that produced it.
pub fn render_path(label: &str, from: &str, to: &str, summary: &PathSummary) -> String {
    if !summary.reachable {
        return unreachable_message(from, to);
    }
    format!(
        "Route from {from} to {to} (algorithm: {label}):\n  {}",
        summary.render_plain()
    )
}

/// Render a ranked list of paths, one per line.
pub fn render_path_list(from: &str, to: &str, summaries: &[PathSummary]) -> String {
    if summaries.is_empty() {
        return unreachable_message(from, to);
    }
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{} route(s) from {from} to {to}:",
        summaries.len()
    );
    for (rank, summary) in summaries.iter().enumerate() {
        let _ = writeln!(buffer, "{:>3}. {}", rank + 1, summary.render_plain());
    }
    buffer.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygraph_lib::{EdgeSpec, Graph, PathResult};

    fn summary(nodes: Vec<usize>, weight: f64) -> PathSummary {
        let graph = Graph::from_edges(
            &[EdgeSpec::new("A", "B", 5.0), EdgeSpec::new("B", "C", 3.0)],
            1,
        )
        .expect("valid edges");
        PathSummary::from_path(&graph, &PathResult::new(nodes, weight))
    }

    #[test]
    fn render_path_includes_algorithm() {
        let text = render_path("dijkstra", "A", "C", &summary(vec![0, 1, 2], 8.0));
        assert!(text.contains("algorithm: dijkstra"));
        assert!(text.contains("A -> B -> C (8.00, 2 hops)"));
    }

    #[test]
    fn empty_list_reports_no_route() {
        assert_eq!(
            render_path_list("A", "C", &[]),
            "No route found between A and C."
        );
    }

    #[test]
    fn list_is_ranked() {
        let text = render_path_list("A", "C", &[summary(vec![0, 1, 2], 8.0)]);
        assert!(text.starts_with("1 route(s) from A to C:"));
        assert!(text.contains("  1. A -> B -> C"));
    }
}
