//! Name-level routing facade shared by every collaborator.
//!
//! [`RouteEngine`] owns one [`GraphStore`] and one [`AllPairsCache`]. Builds
//! take the store's write lock and publish a fresh immutable snapshot; queries
//! clone the current snapshot under a read lock and run without holding it,
//! so an in-flight query always sees a single consistent graph generation.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::all_pairs::AllPairsCache;
use crate::dataset::NetworkData;
use crate::enumerate::all_simple_paths;
use crate::error::{Error, Result};
use crate::graph::{EdgeSpec, Graph, GraphStore, NodeIndex};
use crate::hub::{hub_coverage, HubCoverage};
use crate::output::{AlgorithmComparison, CoverageSummary, PathSummary};
use crate::path::{self, PathResult};
use crate::yen::k_shortest_paths;

/// Routing session over one evolving graph.
#[derive(Debug, Default)]
pub struct RouteEngine {
    store: RwLock<GraphStore>,
    all_pairs: AllPairsCache,
}

impl RouteEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine and build its first graph from `edges`.
    pub fn from_edges(edges: &[EdgeSpec]) -> Result<Self> {
        let engine = Self::new();
        engine.build(edges)?;
        Ok(engine)
    }

    /// Replace the graph. Returns the new generation.
    ///
    /// On failure the previous graph stays current and the cache untouched.
    pub fn build(&self, edges: &[EdgeSpec]) -> Result<u64> {
        self.build_with_nodes(&[], edges)
    }

    /// Replace the graph from loaded network data.
    pub fn load(&self, data: &NetworkData) -> Result<u64> {
        self.build_with_nodes(&data.nodes, &data.edges)
    }

    /// Replace the graph, indexing `nodes` first so isolated nodes survive.
    pub fn build_with_nodes(&self, nodes: &[String], edges: &[EdgeSpec]) -> Result<u64> {
        let mut store = self.store.write();
        let graph = store.build_with_nodes(nodes, edges)?;
        self.all_pairs.invalidate();
        Ok(graph.generation())
    }

    /// Current graph snapshot.
    pub fn snapshot(&self) -> Result<Arc<Graph>> {
        self.store.read().snapshot()
    }

    /// Generation of the latest successful build; zero before any build.
    pub fn generation(&self) -> u64 {
        self.store.read().generation()
    }

    pub fn node_count(&self) -> usize {
        self.store.read().node_count()
    }

    pub fn index_of(&self, name: &str) -> Result<NodeIndex> {
        self.store.read().index_of(name)
    }

    pub fn name_of(&self, index: NodeIndex) -> Option<String> {
        self.store.read().name_of(index).map(str::to_string)
    }

    /// Node names ordered by index, for populating selection lists.
    pub fn node_names(&self) -> Result<Vec<String>> {
        Ok(self.snapshot()?.names().to_vec())
    }

    /// Dijkstra shortest path between two named nodes.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<PathResult> {
        let (graph, start, goal) = self.resolve_pair(from, to)?;
        path::shortest_path(&graph, start, goal)
    }

    /// Dijkstra shortest path that never passes through `avoid`.
    pub fn shortest_path_avoiding(&self, from: &str, to: &str, avoid: &str) -> Result<PathResult> {
        let (graph, start, goal) = self.resolve_pair(from, to)?;
        let hub = graph.resolve(avoid)?;
        debug!(from, to, avoid, "routing around hub");
        path::shortest_path_avoiding(&graph, start, goal, hub)
    }

    /// Shortest path answered from the Floyd–Warshall cache.
    pub fn all_pairs_shortest_path(&self, from: &str, to: &str) -> Result<PathResult> {
        let (graph, start, goal) = self.resolve_pair(from, to)?;
        self.all_pairs.shortest_path(&graph, start, goal)
    }

    /// Every simple path using at most `max_depth` edges, cheapest first.
    pub fn all_simple_paths(&self, from: &str, to: &str, max_depth: usize) -> Result<Vec<PathResult>> {
        let (graph, start, goal) = self.resolve_pair(from, to)?;
        all_simple_paths(&graph, start, goal, max_depth)
    }

    /// Up to `k` loopless paths, cheapest first.
    pub fn k_shortest_paths(&self, from: &str, to: &str, k: usize) -> Result<Vec<PathResult>> {
        let (graph, start, goal) = self.resolve_pair(from, to)?;
        k_shortest_paths(&graph, start, goal, k)
    }

    /// Whether any path leads from `from` to `to`.
    pub fn is_reachable(&self, from: &str, to: &str) -> Result<bool> {
        let (graph, start, goal) = self.resolve_pair(from, to)?;
        path::is_reachable(&graph, start, goal)
    }

    /// Which nodes `hub` reaches within `max_hops` edges.
    pub fn hub_coverage(&self, hub: &str, max_hops: usize) -> Result<HubCoverage> {
        let graph = self.snapshot()?;
        let index = graph.resolve(hub)?;
        hub_coverage(&graph, index, max_hops)
    }

    /// Hub coverage with node names resolved against the graph that was searched.
    pub fn hub_report(&self, hub: &str, max_hops: usize) -> Result<CoverageSummary> {
        let graph = self.snapshot()?;
        let index = graph.resolve(hub)?;
        let coverage = hub_coverage(&graph, index, max_hops)?;
        Ok(CoverageSummary::from_coverage(&graph, &coverage))
    }

    /// Run Dijkstra and the all-pairs cache for the same pair and compare.
    pub fn compare(&self, from: &str, to: &str) -> Result<AlgorithmComparison> {
        let (graph, start, goal) = self.resolve_pair(from, to)?;
        let dijkstra = path::shortest_path(&graph, start, goal)?;
        let all_pairs = self.all_pairs.shortest_path(&graph, start, goal)?;
        Ok(AlgorithmComparison::new(
            PathSummary::from_path(&graph, &dijkstra),
            PathSummary::from_path(&graph, &all_pairs),
        ))
    }

    /// Resolve node names for a result produced by this engine.
    ///
    /// Fails with [`Error::StaleResult`] when the graph has been rebuilt since
    /// `path` was computed.
    pub fn describe(&self, path: &PathResult) -> Result<PathSummary> {
        let graph = self.snapshot()?;
        if let Some(generation) = path.generation {
            if generation != graph.generation() {
                return Err(Error::StaleResult {
                    computed: generation,
                    current: graph.generation(),
                });
            }
        }
        Ok(PathSummary::from_path(&graph, path))
    }

    fn resolve_pair(&self, from: &str, to: &str) -> Result<(Arc<Graph>, NodeIndex, NodeIndex)> {
        let graph = self.snapshot()?;
        let start = graph.resolve(from)?;
        let goal = graph.resolve(to)?;
        Ok((graph, start, goal))
    }
}
