mod common;

use common::{assert_valid_path, matrix_engine, names, triangle_edges};
use waygraph_lib::{EdgeSpec, Error, RouteEngine, UNREACHABLE_WEIGHT};

#[test]
fn triangle_prefers_two_hop_route() {
    let engine = RouteEngine::from_edges(&triangle_edges()).expect("build");
    let path = engine.shortest_path("A", "C").expect("query");
    assert_eq!(names(&engine, &path), ["A", "B", "C"]);
    assert_eq!(path.weight, 8.0);
}

#[test]
fn dijkstra_agrees_with_all_pairs_for_every_pair() {
    let engine = matrix_engine();
    let graph = engine.snapshot().expect("snapshot");
    let cities = engine.node_names().expect("names");

    for from in &cities {
        for to in &cities {
            let dijkstra = engine.shortest_path(from, to).expect("dijkstra");
            let floyd = engine.all_pairs_shortest_path(from, to).expect("all pairs");
            assert!(
                (dijkstra.weight - floyd.weight).abs() < 1e-9,
                "{from} -> {to}: dijkstra {} vs all-pairs {}",
                dijkstra.weight,
                floyd.weight
            );

            let start = graph.index_of(from).expect("from");
            let goal = graph.index_of(to).expect("to");
            assert_valid_path(&graph, &dijkstra, start, goal);
            assert_valid_path(&graph, &floyd, start, goal);
        }
    }
}

#[test]
fn fixture_shortest_route_runs_through_wuhan() {
    let engine = matrix_engine();
    let path = engine.shortest_path("Beijing", "Guangzhou").expect("query");
    assert_eq!(
        names(&engine, &path),
        ["Beijing", "Zhengzhou", "Wuhan", "Changsha", "Guangzhou"]
    );
    assert_eq!(path.weight, 2283.0);
}

#[test]
fn avoiding_wuhan_falls_back_to_coastal_route() {
    let engine = matrix_engine();
    let path = engine
        .shortest_path_avoiding("Beijing", "Guangzhou", "Wuhan")
        .expect("query");
    assert_eq!(
        names(&engine, &path),
        ["Beijing", "Tianjin", "Nanjing", "Shanghai", "Guangzhou"]
    );
    assert_eq!(path.weight, 2948.0);
}

#[test]
fn avoided_hub_never_appears_mid_path() {
    let engine = matrix_engine();
    let cities = engine.node_names().expect("names");
    for from in &cities {
        for to in &cities {
            let path = engine
                .shortest_path_avoiding(from, to, "Zhengzhou")
                .expect("query");
            let visited = names(&engine, &path);
            if visited.len() > 2 {
                let interior = &visited[1..visited.len() - 1];
                assert!(
                    !interior.iter().any(|name| name == "Zhengzhou"),
                    "{from} -> {to} passes through Zhengzhou"
                );
            }
        }
    }
}

#[test]
fn star_leaves_are_cut_off_without_hub() {
    let edges = waygraph_lib::symmetric_edges([
        EdgeSpec::new("H", "X", 2.0),
        EdgeSpec::new("H", "Y", 2.0),
        EdgeSpec::new("H", "Z", 2.0),
    ]);
    let engine = RouteEngine::from_edges(&edges).expect("build");

    let path = engine.shortest_path_avoiding("X", "Z", "H").expect("query");
    assert!(path.nodes.is_empty());
    assert_eq!(path.weight, UNREACHABLE_WEIGHT);
    assert_eq!(engine.shortest_path("X", "Z").expect("query").weight, 4.0);
}

#[test]
fn rebuild_replaces_all_pairs_results() {
    let engine = RouteEngine::from_edges(&triangle_edges()).expect("build");
    assert_eq!(
        engine.all_pairs_shortest_path("A", "C").expect("query").weight,
        8.0
    );

    let rebuilt = waygraph_lib::symmetric_edges([
        EdgeSpec::new("A", "B", 1.0),
        EdgeSpec::new("B", "C", 1.0),
        EdgeSpec::new("A", "C", 1.5),
    ]);
    engine.build(&rebuilt).expect("rebuild");

    let path = engine.all_pairs_shortest_path("A", "C").expect("query");
    assert_eq!(names(&engine, &path), ["A", "C"]);
    assert_eq!(path.weight, 1.5);
}

#[test]
fn directed_edges_are_not_symmetric() {
    let engine = RouteEngine::from_edges(&[EdgeSpec::new("A", "B", 1.0)]).expect("build");
    assert!(engine.is_reachable("A", "B").expect("query"));
    assert!(!engine.is_reachable("B", "A").expect("query"));
    let back = engine.all_pairs_shortest_path("B", "A").expect("query");
    assert!(!back.is_reachable());
}

#[test]
fn unknown_city_suggests_spelling() {
    let engine = matrix_engine();
    let err = engine
        .shortest_path("Beijing", "Guangzou")
        .expect_err("misspelled city");
    let message = err.to_string();
    assert!(matches!(err, Error::UnknownNode { .. }));
    assert!(message.contains("Did you mean"), "{message}");
    assert!(message.contains("Guangzhou"), "{message}");
}
