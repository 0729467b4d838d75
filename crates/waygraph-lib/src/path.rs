use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Edge, Graph, NodeIndex};

/// Weight reported for a destination that cannot be reached.
pub const UNREACHABLE_WEIGHT: f64 = -1.0;

/// Ordered node sequence plus its total weight.
///
/// An unreachable result has no nodes and weight [`UNREACHABLE_WEIGHT`].
/// Results produced by a search carry the generation of the graph they were
/// computed on; node indices are only meaningful against that generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub nodes: Vec<NodeIndex>,
    pub weight: f64,
    #[serde(skip)]
    pub generation: Option<u64>,
}

impl PathResult {
    pub fn new(nodes: Vec<NodeIndex>, weight: f64) -> Self {
        Self {
            nodes,
            weight,
            generation: None,
        }
    }

    /// Sentinel result for a destination with no connecting path.
    pub fn unreachable() -> Self {
        Self::new(Vec::new(), UNREACHABLE_WEIGHT)
    }

    /// Tag the result with the graph generation it was computed on.
    pub fn on_generation(mut self, generation: u64) -> Self {
        self.generation = Some(generation);
        self
    }

    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Constraints applied during a single-source search.
#[derive(Debug, Default, Clone)]
pub struct SearchConstraints {
    /// Nodes that must not appear as intermediate hops. They may still be the
    /// start or the goal of the search.
    pub blocked_nodes: HashSet<NodeIndex>,
    /// Directed edges `(from, to)` that must not be traversed.
    pub removed_edges: HashSet<(NodeIndex, NodeIndex)>,
}

impl SearchConstraints {
    /// Constraints that keep `node` out of the interior of the path.
    pub fn avoiding(node: NodeIndex) -> Self {
        Self {
            blocked_nodes: HashSet::from([node]),
            removed_edges: HashSet::new(),
        }
    }

    fn may_expand(&self, node: NodeIndex, start: NodeIndex) -> bool {
        node == start || !self.blocked_nodes.contains(&node)
    }

    fn allows(&self, from: NodeIndex, edge: &Edge, goal: NodeIndex) -> bool {
        if self.removed_edges.contains(&(from, edge.target)) {
            return false;
        }
        edge.target == goal || !self.blocked_nodes.contains(&edge.target)
    }
}

/// Run Dijkstra's algorithm between two nodes.
///
/// Among equal-cost routes the first one relaxed wins; which one that is
/// depends on edge insertion order and is not otherwise meaningful.
pub fn shortest_path(graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Result<PathResult> {
    shortest_path_constrained(graph, start, goal, &SearchConstraints::default())
}

/// Run Dijkstra's algorithm while refusing to route through `avoid`.
///
/// Edges leaving `avoid` are never relaxed, so the node can only show up as
/// the start or the goal. Useful for asking "what if this hub were closed".
pub fn shortest_path_avoiding(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    avoid: NodeIndex,
) -> Result<PathResult> {
    graph.check_index(avoid)?;
    shortest_path_constrained(graph, start, goal, &SearchConstraints::avoiding(avoid))
}

/// Run Dijkstra's algorithm with arbitrary node and edge exclusions.
pub fn shortest_path_constrained(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    constraints: &SearchConstraints,
) -> Result<PathResult> {
    graph.check_index(start)?;
    graph.check_index(goal)?;
    Ok(dijkstra(graph, start, goal, constraints))
}

pub(crate) fn dijkstra(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    constraints: &SearchConstraints,
) -> PathResult {
    if start == goal {
        return PathResult::new(vec![start], 0.0).on_generation(graph.generation());
    }

    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; node_count];
    let mut queue = BinaryHeap::new();

    distances[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        let current_distance = entry.cost.0;
        if current_distance > distances[current] {
            continue;
        }
        if current == goal {
            break;
        }
        if !constraints.may_expand(current, start) {
            continue;
        }

        for edge in graph.neighbours(current) {
            if !constraints.allows(current, edge, goal) {
                continue;
            }
            let next_cost = current_distance + edge.weight;
            if next_cost < distances[edge.target] {
                distances[edge.target] = next_cost;
                parents[edge.target] = Some(current);
                queue.push(QueueEntry::new(edge.target, next_cost));
            }
        }
    }

    if distances[goal].is_infinite() {
        debug!(start, goal, "no path found");
        return PathResult::unreachable().on_generation(graph.generation());
    }

    PathResult::new(reconstruct_path(&parents, start, goal), distances[goal])
        .on_generation(graph.generation())
}

/// Breadth-first reachability test ignoring weights.
pub fn is_reachable(graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Result<bool> {
    graph.check_index(start)?;
    graph.check_index(goal)?;

    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Ok(true);
        }
        for edge in graph.neighbours(current) {
            if !visited[edge.target] {
                visited[edge.target] = true;
                queue.push_back(edge.target);
            }
        }
    }

    Ok(false)
}

/// Sum the cheapest real edge between every consecutive pair of `nodes`.
///
/// Returns `None` for an empty sequence or when a pair has no direct edge.
pub fn path_weight(graph: &Graph, nodes: &[NodeIndex]) -> Option<f64> {
    if nodes.is_empty() {
        return None;
    }
    nodes
        .windows(2)
        .try_fold(0.0, |total, pair| {
            graph.edge_weight(pair[0], pair[1]).map(|w| total + w)
        })
}

fn reconstruct_path(
    parents: &[Option<NodeIndex>],
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start || path.len() > parents.len() {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub(crate) f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
