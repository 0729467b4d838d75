//! Hop-bounded coverage audit around a hub node.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};

/// Result of checking which nodes a hub reaches within a hop budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubCoverage {
    pub hub: NodeIndex,
    pub max_hops: usize,
    /// Fewest hops from the hub to each node, `None` when out of reach.
    pub hops: Vec<Option<usize>>,
    /// Nodes the hub cannot reach within `max_hops`, by index.
    pub uncovered: Vec<NodeIndex>,
}

impl HubCoverage {
    /// Whether every node is within `max_hops` of the hub.
    pub fn is_complete(&self) -> bool {
        self.uncovered.is_empty()
    }

    pub fn covered_count(&self) -> usize {
        self.hops.iter().filter(|hops| hops.is_some()).count()
    }
}

/// Breadth-first search from `hub`, stopping after `max_hops` edges.
pub fn hub_coverage(graph: &Graph, hub: NodeIndex, max_hops: usize) -> Result<HubCoverage> {
    if max_hops == 0 {
        return Err(Error::InvalidDepth { depth: max_hops });
    }
    graph.check_index(hub)?;

    let mut hops: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    hops[hub] = Some(0);
    queue.push_back((hub, 0usize));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_hops {
            continue;
        }
        for edge in graph.neighbours(current) {
            if hops[edge.target].is_none() {
                hops[edge.target] = Some(depth + 1);
                queue.push_back((edge.target, depth + 1));
            }
        }
    }

    let uncovered: Vec<NodeIndex> = hops
        .iter()
        .enumerate()
        .filter(|(_, hops)| hops.is_none())
        .map(|(index, _)| index)
        .collect();

    for &node in &uncovered {
        debug!(
            hub = graph.name_of(hub).unwrap_or("<unknown>"),
            node = graph.name_of(node).unwrap_or("<unknown>"),
            max_hops,
            "node outside hub coverage"
        );
    }

    Ok(HubCoverage {
        hub,
        max_hops,
        hops,
        uncovered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{symmetric_edges, EdgeSpec};

    fn chain() -> Graph {
        let edges = symmetric_edges([
            EdgeSpec::new("A", "B", 1.0),
            EdgeSpec::new("B", "C", 1.0),
            EdgeSpec::new("C", "D", 1.0),
        ]);
        Graph::from_edges(&edges, 1).expect("valid edges")
    }

    #[test]
    fn central_node_covers_chain_in_two_hops() {
        let coverage = hub_coverage(&chain(), 1, 2).expect("valid query");
        assert!(coverage.is_complete());
        assert_eq!(coverage.hops, vec![Some(1), Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn end_node_leaves_far_nodes_uncovered() {
        let coverage = hub_coverage(&chain(), 0, 2).expect("valid query");
        assert!(!coverage.is_complete());
        assert_eq!(coverage.uncovered, vec![3]);
        assert_eq!(coverage.covered_count(), 3);
    }

    #[test]
    fn zero_hops_is_rejected() {
        assert!(matches!(
            hub_coverage(&chain(), 0, 0),
            Err(Error::InvalidDepth { depth: 0 })
        ));
    }
}
