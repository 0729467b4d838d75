use std::fmt::Write;

use serde::Serialize;

use crate::graph::{Graph, NodeIndex};
use crate::hub::HubCoverage;
use crate::path::PathResult;

/// Largest weight difference at which two algorithms are considered to agree.
pub const COMPARISON_TOLERANCE: f64 = 0.01;

/// Node visited along a summarised path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    pub node: NodeIndex,
    pub name: String,
}

/// Structured representation of a [`PathResult`] with resolved node names
/// that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathSummary {
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub hops: usize,
    pub steps: Vec<PathStep>,
}

impl PathSummary {
    /// Resolve the node names of `path` against `graph`.
    pub fn from_path(graph: &Graph, path: &PathResult) -> Self {
        let steps = path
            .nodes
            .iter()
            .enumerate()
            .map(|(index, &node)| PathStep {
                index,
                node,
                name: graph.name_of(node).unwrap_or("<unknown>").to_string(),
            })
            .collect();

        Self {
            reachable: path.is_reachable(),
            weight: path.is_reachable().then_some(path.weight),
            hops: path.hop_count(),
            steps,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name.as_str()).collect()
    }

    /// One-line rendering such as `A -> B -> C (8.00, 2 hops)`.
    pub fn render_plain(&self) -> String {
        match self.weight {
            Some(weight) => format!(
                "{} ({:.2}, {} hops)",
                self.names().join(" -> "),
                weight,
                self.hops
            ),
            None => "unreachable".to_string(),
        }
    }
}

/// Dijkstra and all-pairs answers for the same query side by side.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlgorithmComparison {
    pub dijkstra: PathSummary,
    pub all_pairs: PathSummary,
    pub agree: bool,
}

impl AlgorithmComparison {
    pub fn new(dijkstra: PathSummary, all_pairs: PathSummary) -> Self {
        let agree = match (dijkstra.weight, all_pairs.weight) {
            (Some(a), Some(b)) => (a - b).abs() < COMPARISON_TOLERANCE,
            (None, None) => true,
            _ => false,
        };
        Self {
            dijkstra,
            all_pairs,
            agree,
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "dijkstra:  {}", self.dijkstra.render_plain());
        let _ = writeln!(buffer, "all-pairs: {}", self.all_pairs.render_plain());
        let verdict = if self.agree {
            "algorithms agree"
        } else {
            "algorithms disagree"
        };
        let _ = writeln!(buffer, "{verdict}");
        buffer
    }
}

/// Named rendering of a [`HubCoverage`] audit.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CoverageSummary {
    pub hub: String,
    pub max_hops: usize,
    pub complete: bool,
    pub covered: usize,
    pub uncovered: Vec<String>,
}

impl CoverageSummary {
    pub fn from_coverage(graph: &Graph, coverage: &HubCoverage) -> Self {
        let name = |index: NodeIndex| graph.name_of(index).unwrap_or("<unknown>").to_string();
        Self {
            hub: name(coverage.hub),
            max_hops: coverage.max_hops,
            complete: coverage.is_complete(),
            covered: coverage.covered_count(),
            uncovered: coverage.uncovered.iter().copied().map(name).collect(),
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} reaches {} nodes within {} hops",
            self.hub, self.covered, self.max_hops
        );
        for name in &self.uncovered {
            let _ = writeln!(buffer, "  not covered: {name}");
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeSpec;

    fn graph() -> Graph {
        Graph::from_edges(
            &[EdgeSpec::new("A", "B", 5.0), EdgeSpec::new("B", "C", 3.0)],
            1,
        )
        .expect("valid edges")
    }

    #[test]
    fn summary_resolves_names() {
        let summary = PathSummary::from_path(&graph(), &PathResult::new(vec![0, 1, 2], 8.0));
        assert_eq!(summary.names(), vec!["A", "B", "C"]);
        assert_eq!(summary.render_plain(), "A -> B -> C (8.00, 2 hops)");
    }

    #[test]
    fn unreachable_summary_has_no_weight() {
        let summary = PathSummary::from_path(&graph(), &PathResult::unreachable());
        assert!(!summary.reachable);
        assert_eq!(summary.weight, None);
        assert_eq!(summary.render_plain(), "unreachable");
    }

    #[test]
    fn comparison_uses_tolerance() {
        let g = graph();
        let a = PathSummary::from_path(&g, &PathResult::new(vec![0, 1], 5.0));
        let b = PathSummary::from_path(&g, &PathResult::new(vec![0, 1], 5.005));
        assert!(AlgorithmComparison::new(a.clone(), b).agree);

        let c = PathSummary::from_path(&g, &PathResult::unreachable());
        assert!(!AlgorithmComparison::new(a, c).agree);
    }
}
