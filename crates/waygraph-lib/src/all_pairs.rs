//! Floyd–Warshall all-pairs shortest paths with a generation-checked cache.
//!
//! The table costs O(n³) to compute, so it is built lazily on the first
//! all-pairs query and reused until the graph is rebuilt. The cached table
//! records the generation of the graph it was computed from; a table whose
//! generation differs from the queried graph is never served.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::Result;
use crate::graph::{Graph, NodeIndex};
use crate::path::PathResult;

/// Distance and next-hop matrices for one graph generation.
#[derive(Debug, Clone)]
pub struct AllPairsTable {
    generation: u64,
    distances: Vec<Vec<f64>>,
    next: Vec<Vec<Option<NodeIndex>>>,
}

impl AllPairsTable {
    /// Run the Floyd–Warshall triple loop over `graph`.
    pub fn compute(graph: &Graph) -> Self {
        let n = graph.node_count();
        let mut distances = vec![vec![f64::INFINITY; n]; n];
        let mut next = vec![vec![None; n]; n];

        for i in 0..n {
            distances[i][i] = 0.0;
            next[i][i] = Some(i);
            for edge in graph.neighbours(i) {
                if edge.weight < distances[i][edge.target] {
                    distances[i][edge.target] = edge.weight;
                    next[i][edge.target] = Some(edge.target);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through_k = distances[i][k];
                if through_k.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + distances[k][j];
                    if candidate < distances[i][j] {
                        distances[i][j] = candidate;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        Self {
            generation: graph.generation(),
            distances,
            next,
        }
    }

    /// Graph generation this table was computed from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance, or `None` when `to` is unreachable from `from`.
    pub fn distance(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        self.distances
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Walk the next-hop matrix from `from` to `to`.
    pub fn path(&self, from: NodeIndex, to: NodeIndex) -> PathResult {
        let Some(weight) = self.distance(from, to) else {
            return PathResult::unreachable().on_generation(self.generation);
        };

        let mut nodes = vec![from];
        let mut current = from;
        while current != to {
            match self.next[current][to] {
                // A walk longer than the node count means the matrix is corrupt.
                Some(hop) if nodes.len() <= self.node_count() => {
                    nodes.push(hop);
                    current = hop;
                }
                _ => return PathResult::unreachable().on_generation(self.generation),
            }
        }

        PathResult::new(nodes, weight).on_generation(self.generation)
    }
}

/// Lazily computed [`AllPairsTable`] shared between queries.
#[derive(Debug, Default)]
pub struct AllPairsCache {
    table: Mutex<Option<Arc<AllPairsTable>>>,
}

impl AllPairsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table for `graph`, computing it if the cached one is
    /// missing or belongs to another generation.
    pub fn table_for(&self, graph: &Graph) -> Arc<AllPairsTable> {
        let mut slot = self.table.lock();
        if let Some(table) = slot.as_ref() {
            if table.generation() == graph.generation() {
                debug!(generation = table.generation(), "all-pairs cache hit");
                return Arc::clone(table);
            }
        }

        info!(
            generation = graph.generation(),
            nodes = graph.node_count(),
            "computing all-pairs shortest paths"
        );
        let table = Arc::new(AllPairsTable::compute(graph));
        *slot = Some(Arc::clone(&table));
        table
    }

    /// Answer a single query from the cached table.
    pub fn shortest_path(&self, graph: &Graph, from: NodeIndex, to: NodeIndex) -> Result<PathResult> {
        graph.check_index(from)?;
        graph.check_index(to)?;
        Ok(self.table_for(graph).path(from, to))
    }

    /// Drop the cached table.
    pub fn invalidate(&self) {
        self.table.lock().take();
    }

    /// Generation of the cached table, if one is present.
    pub fn cached_generation(&self) -> Option<u64> {
        self.table.lock().as_ref().map(|table| table.generation())
    }
}
