#![allow(dead_code)]

use std::path::PathBuf;

use waygraph_lib::{
    load_distance_matrix, load_edge_list, symmetric_edges, EdgeSpec, Graph, PathResult,
    RouteEngine,
};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn matrix_engine() -> RouteEngine {
    let data = load_distance_matrix(&fixtures_dir().join("cities_matrix.csv"))
        .expect("load fixture matrix");
    let engine = RouteEngine::new();
    engine.load(&data).expect("build fixture graph");
    engine
}

pub fn edge_list_engine() -> RouteEngine {
    let data = load_edge_list(&fixtures_dir().join("cities_edges.csv"))
        .expect("load fixture edge list")
        .into_symmetric();
    let engine = RouteEngine::new();
    engine.load(&data).expect("build fixture graph");
    engine
}

/// A-B 5, B-C 3, A-C 10, all symmetric.
pub fn triangle_edges() -> Vec<EdgeSpec> {
    symmetric_edges([
        EdgeSpec::new("A", "B", 5.0),
        EdgeSpec::new("B", "C", 3.0),
        EdgeSpec::new("A", "C", 10.0),
    ])
}

pub fn names(engine: &RouteEngine, path: &PathResult) -> Vec<String> {
    engine
        .describe(path)
        .expect("describe path")
        .names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Assert that `path` runs from `start` to `goal` over real edges whose
/// weights add up to the reported total.
pub fn assert_valid_path(graph: &Graph, path: &PathResult, start: usize, goal: usize) {
    assert_eq!(path.nodes.first(), Some(&start), "path must start at origin");
    assert_eq!(path.nodes.last(), Some(&goal), "path must end at destination");

    let mut total = 0.0;
    for pair in path.nodes.windows(2) {
        let weight = graph
            .edge_weight(pair[0], pair[1])
            .unwrap_or_else(|| panic!("no edge {} -> {}", pair[0], pair[1]));
        total += weight;
    }
    assert!(
        (total - path.weight).abs() < 1e-9,
        "edge weights sum to {total}, path reports {}",
        path.weight
    );
}
