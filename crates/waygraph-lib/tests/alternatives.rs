mod common;

use std::collections::HashSet;

use common::{assert_valid_path, matrix_engine, names, triangle_edges};
use waygraph_lib::{Error, RouteEngine};

#[test]
fn triangle_enumerates_both_routes() {
    let engine = RouteEngine::from_edges(&triangle_edges()).expect("build");
    let paths = engine.all_simple_paths("A", "C", 2).expect("query");

    assert_eq!(paths.len(), 2);
    assert_eq!(names(&engine, &paths[0]), ["A", "B", "C"]);
    assert_eq!(paths[0].weight, 8.0);
    assert_eq!(names(&engine, &paths[1]), ["A", "C"]);
    assert_eq!(paths[1].weight, 10.0);
}

#[test]
fn simple_paths_respect_depth_and_never_loop() {
    let engine = matrix_engine();
    let graph = engine.snapshot().expect("snapshot");
    let start = graph.index_of("Beijing").expect("Beijing");
    let goal = graph.index_of("Shanghai").expect("Shanghai");

    for max_depth in 1..=6 {
        let paths = engine
            .all_simple_paths("Beijing", "Shanghai", max_depth)
            .expect("query");
        for path in &paths {
            assert!(path.hop_count() <= max_depth);
            let unique: HashSet<_> = path.nodes.iter().collect();
            assert_eq!(unique.len(), path.nodes.len());
            assert_valid_path(&graph, path, start, goal);
        }
        for pair in paths.windows(2) {
            assert!(pair[0].weight <= pair[1].weight);
        }
    }
}

#[test]
fn deeper_bound_never_loses_paths() {
    let engine = matrix_engine();
    let shallow = engine
        .all_simple_paths("Beijing", "Guangzhou", 4)
        .expect("query");
    let deep = engine
        .all_simple_paths("Beijing", "Guangzhou", 8)
        .expect("query");
    assert!(deep.len() >= shallow.len());
    assert_eq!(shallow[0], deep[0]);
}

#[test]
fn zero_depth_is_a_caller_error() {
    let engine = RouteEngine::from_edges(&triangle_edges()).expect("build");
    assert!(matches!(
        engine.all_simple_paths("A", "C", 0),
        Err(Error::InvalidDepth { depth: 0 })
    ));
}

#[test]
fn k_shortest_starts_with_dijkstra_and_is_sorted() {
    let engine = matrix_engine();
    let graph = engine.snapshot().expect("snapshot");
    let start = graph.index_of("Beijing").expect("Beijing");
    let goal = graph.index_of("Guangzhou").expect("Guangzhou");

    let shortest = engine.shortest_path("Beijing", "Guangzhou").expect("query");
    let paths = engine
        .k_shortest_paths("Beijing", "Guangzhou", 5)
        .expect("query");

    assert_eq!(paths.len(), 5);
    assert_eq!(paths[0], shortest);
    assert_eq!(paths[1].weight, 2288.0);
    assert_eq!(
        names(&engine, &paths[1]),
        ["Beijing", "Shijiazhuang", "Zhengzhou", "Wuhan", "Changsha", "Guangzhou"]
    );

    let mut seen = HashSet::new();
    for path in &paths {
        assert_valid_path(&graph, path, start, goal);
        assert!(seen.insert(path.nodes.clone()), "duplicate path");
    }
    for pair in paths.windows(2) {
        assert!(pair[0].weight <= pair[1].weight);
    }
}

#[test]
fn k_shortest_matches_enumeration_prefix() {
    let engine = matrix_engine();
    let enumerated = engine
        .all_simple_paths("Tianjin", "Changsha", 9)
        .expect("query");
    let yen = engine
        .k_shortest_paths("Tianjin", "Changsha", 4)
        .expect("query");

    let enumerated_weights: Vec<f64> = enumerated.iter().take(4).map(|p| p.weight).collect();
    let yen_weights: Vec<f64> = yen.iter().map(|p| p.weight).collect();
    assert_eq!(yen_weights, enumerated_weights);
}

#[test]
fn k_shortest_returns_all_when_fewer_exist() {
    let engine = RouteEngine::from_edges(&triangle_edges()).expect("build");
    let paths = engine.k_shortest_paths("A", "C", 5).expect("query");
    assert_eq!(paths.len(), 2);
}
