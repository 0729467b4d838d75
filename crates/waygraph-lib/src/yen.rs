//! Yen's algorithm for the K cheapest loopless paths.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::debug;

use crate::enumerate::compare_paths;
use crate::error::Result;
use crate::graph::{Graph, NodeIndex};
use crate::path::{dijkstra, path_weight, PathResult, SearchConstraints};

/// Find up to `k` loopless paths from `start` to `goal`, cheapest first.
///
/// The first entry is always the Dijkstra shortest path. Fewer than `k`
/// entries come back when the graph has fewer distinct simple routes, and an
/// unreachable goal yields an empty list.
pub fn k_shortest_paths(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    k: usize,
) -> Result<Vec<PathResult>> {
    graph.check_index(start)?;
    graph.check_index(goal)?;
    if k == 0 {
        return Ok(Vec::new());
    }

    let first = dijkstra(graph, start, goal, &SearchConstraints::default());
    if !first.is_reachable() {
        return Ok(Vec::new());
    }

    let mut seen: HashSet<Vec<NodeIndex>> = HashSet::from([first.nodes.clone()]);
    let mut accepted = vec![first];
    let mut candidates: BinaryHeap<Candidate> = BinaryHeap::new();

    while accepted.len() < k {
        let previous = accepted[accepted.len() - 1].nodes.clone();

        for spur_index in 0..previous.len() - 1 {
            let spur_node = previous[spur_index];
            let root = &previous[..=spur_index];

            let constraints = spur_constraints(&accepted, root);
            let spur = dijkstra(graph, spur_node, goal, &constraints);
            if !spur.is_reachable() {
                continue;
            }

            let mut nodes = root[..spur_index].to_vec();
            nodes.extend_from_slice(&spur.nodes);
            let Some(weight) = path_weight(graph, &nodes) else {
                continue;
            };

            if seen.insert(nodes.clone()) {
                candidates.push(Candidate(
                    PathResult::new(nodes, weight).on_generation(graph.generation()),
                ));
            }
        }

        let Some(Candidate(next)) = candidates.pop() else {
            debug!(start, goal, found = accepted.len(), "candidate pool exhausted");
            break;
        };
        accepted.push(next);
    }

    Ok(accepted)
}

/// Exclusions for one spur search: the edge each accepted path sharing
/// `root` takes out of the spur node, and every root node before the spur.
fn spur_constraints(accepted: &[PathResult], root: &[NodeIndex]) -> SearchConstraints {
    let spur_index = root.len() - 1;
    let mut constraints = SearchConstraints::default();

    for path in accepted {
        if path.nodes.len() > spur_index + 1 && path.nodes[..=spur_index] == *root {
            constraints
                .removed_edges
                .insert((path.nodes[spur_index], path.nodes[spur_index + 1]));
        }
    }
    constraints
        .blocked_nodes
        .extend(root[..spur_index].iter().copied());

    constraints
}

/// Min-heap adapter over [`compare_paths`].
#[derive(Debug)]
struct Candidate(PathResult);

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_paths(&other.0, &self.0)
    }
}
