use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Dense index of a node within one built graph.
pub type NodeIndex = usize;

/// Suggestions below this similarity are not worth showing.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Named edge as supplied by a loader, before names are mapped to indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// The same connection travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }
}

/// Expand every edge into both directions.
///
/// The engine never assumes symmetry, so callers that load undirected data
/// run their edge list through this before building.
pub fn symmetric_edges<I>(edges: I) -> Vec<EdgeSpec>
where
    I: IntoIterator<Item = EdgeSpec>,
{
    let mut expanded = Vec::new();
    for edge in edges {
        let reverse = (edge.from != edge.to).then(|| edge.reversed());
        expanded.push(edge);
        expanded.extend(reverse);
    }
    expanded
}

/// Outgoing edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeIndex,
    pub weight: f64,
}

/// Immutable graph snapshot used by every pathfinding algorithm.
#[derive(Debug, Clone)]
pub struct Graph {
    generation: u64,
    names: Vec<String>,
    index: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Build a graph from named edges. Node indices follow first appearance.
    pub fn from_edges(edges: &[EdgeSpec], generation: u64) -> Result<Self> {
        Self::from_parts(&[], edges, generation)
    }

    /// Build a graph from an explicit node list plus named edges.
    ///
    /// Listed nodes are indexed first, in order, so isolated nodes keep a
    /// stable index. Names that only appear in `edges` are appended after them.
    pub fn from_parts(nodes: &[String], edges: &[EdgeSpec], generation: u64) -> Result<Self> {
        let mut graph = Self {
            generation,
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        };

        for name in nodes {
            if name.is_empty() {
                return Err(Error::MalformedEdge {
                    index: 0,
                    reason: "node list contains an empty name".to_string(),
                });
            }
            graph.intern(name);
        }

        for (position, edge) in edges.iter().enumerate() {
            validate_edge(position, edge)?;
            let from = graph.intern(&edge.from);
            let to = graph.intern(&edge.to);
            graph.adjacency[from].push(Edge {
                target: to,
                weight: edge.weight,
            });
        }

        Ok(graph)
    }

    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&existing) = self.index.get(name) {
            return existing;
        }
        let next = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), next);
        self.adjacency.push(Vec::new());
        next
    }

    /// Build generation that produced this snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Lookup a node index by its case-sensitive name.
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Lookup a node name by index.
    pub fn name_of(&self, index: NodeIndex) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Node names ordered by index.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, index: NodeIndex) -> bool {
        index < self.names.len()
    }

    /// Return the outgoing edges for a node, in insertion order.
    pub fn neighbours(&self, index: NodeIndex) -> &[Edge] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the cheapest direct edge `from -> to`, if any.
    pub fn edge_weight(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .filter(|edge| edge.target == to)
            .map(|edge| edge.weight)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub(crate) fn check_index(&self, index: NodeIndex) -> Result<()> {
        if self.contains(index) {
            Ok(())
        } else {
            Err(Error::NodeIndexOutOfRange {
                index,
                count: self.node_count(),
            })
        }
    }

    /// Resolve a name to an index, suggesting close matches when it is unknown.
    pub fn resolve(&self, name: &str) -> Result<NodeIndex> {
        self.index_of(name).ok_or_else(|| Error::UnknownNode {
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name, 3),
        })
    }

    /// Names similar to `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .names
            .iter()
            .map(|name| (strsim::jaro_winkler(&needle, &name.to_lowercase()), name))
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

fn validate_edge(position: usize, edge: &EdgeSpec) -> Result<()> {
    if edge.from.is_empty() || edge.to.is_empty() {
        return Err(Error::MalformedEdge {
            index: position,
            reason: "edge endpoint name is empty".to_string(),
        });
    }
    if !edge.weight.is_finite() {
        return Err(Error::MalformedEdge {
            index: position,
            reason: format!(
                "weight {} for {} -> {} is not finite",
                edge.weight, edge.from, edge.to
            ),
        });
    }
    if edge.weight < 0.0 {
        return Err(Error::MalformedEdge {
            index: position,
            reason: format!(
                "weight {} for {} -> {} is negative",
                edge.weight, edge.from, edge.to
            ),
        });
    }
    Ok(())
}

/// Owner of the current graph snapshot.
///
/// Every successful build replaces the snapshot wholesale and bumps the
/// generation; a failed build leaves the previous snapshot in place.
#[derive(Debug, Default)]
pub struct GraphStore {
    current: Option<Arc<Graph>>,
    generation: u64,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the graph with one built from `edges`.
    pub fn build(&mut self, edges: &[EdgeSpec]) -> Result<Arc<Graph>> {
        self.build_with_nodes(&[], edges)
    }

    /// Replace the graph, indexing `nodes` first so isolated nodes survive.
    pub fn build_with_nodes(&mut self, nodes: &[String], edges: &[EdgeSpec]) -> Result<Arc<Graph>> {
        let generation = self.generation + 1;
        let graph = Arc::new(Graph::from_parts(nodes, edges, generation)?);
        info!(
            generation,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built routing graph"
        );
        self.generation = generation;
        self.current = Some(Arc::clone(&graph));
        Ok(graph)
    }

    /// Current snapshot, or [`Error::EmptyGraph`] before the first build.
    pub fn snapshot(&self) -> Result<Arc<Graph>> {
        self.current.clone().ok_or(Error::EmptyGraph)
    }

    /// Generation of the latest successful build; zero before any build.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index_of(&self, name: &str) -> Result<NodeIndex> {
        self.current
            .as_deref()
            .ok_or(Error::EmptyGraph)?
            .resolve(name)
    }

    pub fn name_of(&self, index: NodeIndex) -> Option<&str> {
        self.current.as_deref().and_then(|graph| graph.name_of(index))
    }

    pub fn node_count(&self) -> usize {
        self.current.as_deref().map_or(0, Graph::node_count)
    }
}
