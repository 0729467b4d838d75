//! Depth-bounded enumeration of every simple path between two nodes.
//!
//! The search is exponential in graph connectivity. The engine never picks a
//! bound on the caller's behalf: `max_depth` is mandatory and must be
//! positive.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};
use crate::path::PathResult;

/// Collect every simple path from `start` to `goal` that uses at most
/// `max_depth` edges, ordered by ascending weight.
///
/// Paths of equal weight are ordered by their node sequence so the output is
/// stable across runs.
pub fn all_simple_paths(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    max_depth: usize,
) -> Result<Vec<PathResult>> {
    if max_depth == 0 {
        return Err(Error::InvalidDepth { depth: max_depth });
    }
    graph.check_index(start)?;
    graph.check_index(goal)?;

    let mut search = DepthFirstSearch {
        graph,
        goal,
        max_depth,
        visited: vec![false; graph.node_count()],
        current: Vec::with_capacity(max_depth.min(graph.node_count())),
        found: Vec::new(),
    };
    search.run(start);

    let mut paths = search.found;
    sort_by_weight(&mut paths);
    debug!(start, goal, max_depth, count = paths.len(), "enumerated simple paths");
    Ok(paths)
}

struct DepthFirstSearch<'a> {
    graph: &'a Graph,
    goal: NodeIndex,
    max_depth: usize,
    visited: Vec<bool>,
    current: Vec<NodeIndex>,
    found: Vec<PathResult>,
}

/// One node on the explicit search stack.
struct Frame {
    node: NodeIndex,
    weight: f64,
    next_edge: usize,
}

impl DepthFirstSearch<'_> {
    /// Depth-first walk driven by an explicit stack, so a long chain with a
    /// generous bound cannot exhaust the call stack.
    fn run(&mut self, start: NodeIndex) {
        let graph = self.graph;
        let mut frames = vec![Frame {
            node: start,
            weight: 0.0,
            next_edge: 0,
        }];
        self.enter(start);

        while let Some(frame) = frames.last_mut() {
            let node = frame.node;
            if node == self.goal {
                self.found.push(
                    PathResult::new(self.current.clone(), frame.weight)
                        .on_generation(graph.generation()),
                );
                frames.pop();
                self.leave(node);
                continue;
            }

            let depth = self.current.len() - 1;
            let next = if depth < self.max_depth {
                graph.neighbours(node).get(frame.next_edge)
            } else {
                None
            };

            match next {
                Some(edge) => {
                    frame.next_edge += 1;
                    if !self.visited[edge.target] {
                        let weight = frame.weight + edge.weight;
                        self.enter(edge.target);
                        frames.push(Frame {
                            node: edge.target,
                            weight,
                            next_edge: 0,
                        });
                    }
                }
                None => {
                    frames.pop();
                    self.leave(node);
                }
            }
        }
    }

    fn enter(&mut self, node: NodeIndex) {
        self.visited[node] = true;
        self.current.push(node);
    }

    // Visited marks belong to the current branch only.
    fn leave(&mut self, node: NodeIndex) {
        self.visited[node] = false;
        self.current.pop();
    }
}

/// Weight-ascending order with the node sequence as tie-break.
pub(crate) fn compare_paths(a: &PathResult, b: &PathResult) -> Ordering {
    a.weight
        .total_cmp(&b.weight)
        .then_with(|| a.nodes.cmp(&b.nodes))
}

fn sort_by_weight(paths: &mut [PathResult]) {
    paths.sort_by(compare_paths);
}
