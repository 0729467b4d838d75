//! Waygraph library entry points.
//!
//! This crate builds weighted location graphs from named edge lists (or the
//! distance-matrix files they are usually loaded from) and answers routing
//! queries over them: single-source shortest paths, cached all-pairs shortest
//! paths, bounded enumeration of simple paths, and K shortest loopless paths.
//! Higher-level consumers (the CLI, report generators) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod all_pairs;
pub mod dataset;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod graph;
pub mod hub;
pub mod output;
pub mod path;
pub mod yen;

pub use all_pairs::{AllPairsCache, AllPairsTable};
pub use dataset::{
    default_network_path, load_distance_matrix, load_edge_list, load_network,
    read_distance_matrix, read_edge_list, resolve_network_path, InputFormat, NetworkData,
    DATA_PATH_ENV,
};
pub use engine::RouteEngine;
pub use enumerate::all_simple_paths;
pub use error::{Error, Result};
pub use graph::{symmetric_edges, Edge, EdgeSpec, Graph, GraphStore, NodeIndex};
pub use hub::{hub_coverage, HubCoverage};
pub use output::{
    AlgorithmComparison, CoverageSummary, PathStep, PathSummary, COMPARISON_TOLERANCE,
};
pub use path::{
    is_reachable, path_weight, shortest_path, shortest_path_avoiding, shortest_path_constrained,
    PathResult, SearchConstraints, UNREACHABLE_WEIGHT,
};
pub use yen::k_shortest_paths;
