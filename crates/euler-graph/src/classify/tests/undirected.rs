//! Classification tests for undirected graphs.

use super::{complete_graph, cycle_graph, koenigsberg};
use crate::classify::{
    classify, degree_summary, has_eulerian_path, is_connected, is_eulerian, is_semieulerian,
    non_eulerian_vertices, DegreeSummary, EulerClass,
};
use crate::graph::Multigraph;

#[test]
fn test_complete_graphs() {
    // K_n is Eulerian exactly when n is odd: every vertex has degree n-1.
    assert!(is_eulerian(&complete_graph(5)));
    assert!(is_eulerian(&complete_graph(7)));

    assert!(!is_eulerian(&complete_graph(4)));
    assert!(!is_eulerian(&complete_graph(6)));
}

#[test]
fn test_cycle_is_eulerian() {
    let square = cycle_graph(4);
    assert_eq!(classify(&square), EulerClass::Eulerian);
    assert!(is_connected(&square));
    assert!(!is_semieulerian(&square), "Eulerian is not semi-Eulerian");
}

#[test]
fn test_path_graph_is_semieulerian() {
    let path = Multigraph::undirected_from_edges([(0, 1), (1, 2), (2, 3)]);
    assert_eq!(classify(&path), EulerClass::SemiEulerian);
    assert!(is_semieulerian(&path));
    assert!(!is_eulerian(&path));

    // Only the two odd-degree endpoints are legal path starts.
    assert!(has_eulerian_path(&path, Some(&0)));
    assert!(has_eulerian_path(&path, Some(&3)));
    assert!(!has_eulerian_path(&path, Some(&1)));
}

#[test]
fn test_isolated_vertices_disconnect() {
    let mut graph = Multigraph::<u32>::undirected();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.add_vertex(3);

    assert!(!is_connected(&graph));
    assert!(!is_eulerian(&graph));
    assert!(!has_eulerian_path(&graph, None));
    assert_eq!(classify(&graph), EulerClass::Neither);
}

#[test]
fn test_single_vertex_is_trivially_eulerian() {
    let mut graph = Multigraph::undirected();
    graph.add_vertex("only");

    assert!(is_connected(&graph));
    assert_eq!(classify(&graph), EulerClass::Eulerian);
}

#[test]
fn test_empty_graph_is_neither() {
    let graph = Multigraph::<usize>::undirected();

    assert!(!is_connected(&graph));
    assert!(!is_eulerian(&graph));
    assert!(!is_semieulerian(&graph));
    assert!(!has_eulerian_path(&graph, None));
    assert_eq!(classify(&graph), EulerClass::Neither);
}

#[test]
fn test_koenigsberg_is_neither() {
    let bridges = koenigsberg();
    assert!(!is_eulerian(&bridges));
    assert!(!is_semieulerian(&bridges));
    assert_eq!(classify(&bridges), EulerClass::Neither);

    // All four landmasses have odd degree, in vertex order.
    assert_eq!(non_eulerian_vertices(&bridges), vec!["W", "N", "E", "S"]);
}

#[test]
fn test_unknown_source_answers_false() {
    let path = Multigraph::undirected_from_edges([(0, 1), (1, 2)]);
    assert!(!has_eulerian_path(&path, Some(&99)));
}

#[test]
fn test_eulerian_graph_accepts_any_source() {
    let square = cycle_graph(4);
    for v in 0..4 {
        assert!(has_eulerian_path(&square, Some(&v)));
    }
}

#[test]
fn test_degree_summary() {
    assert_eq!(
        degree_summary(&complete_graph(4)),
        DegreeSummary::Undirected { odd_degree: 4 }
    );
    let summary = degree_summary(&cycle_graph(5));
    assert_eq!(summary, DegreeSummary::Undirected { odd_degree: 0 });
    assert!(summary.balanced());
}

#[test]
fn test_self_loops_count_twice() {
    // A loop adds two to its vertex's degree, so it never breaks parity.
    let mut graph = cycle_graph(3);
    graph.add_edge(1, 1);
    assert!(is_eulerian(&graph));
}

#[test]
fn test_classification_is_isomorphism_invariant() {
    let by_number = cycle_graph(4);
    let by_name =
        Multigraph::undirected_from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]);
    assert_eq!(classify(&by_number), classify(&by_name));

    let relabeled_bridges = Multigraph::undirected_from_edges([
        (10, 20),
        (10, 20),
        (20, 30),
        (30, 10),
        (10, 40),
        (10, 40),
        (40, 30),
    ]);
    assert_eq!(classify(&relabeled_bridges), EulerClass::Neither);
}

#[test]
fn test_summary_serde_round_trip() {
    let summary = DegreeSummary::Undirected { odd_degree: 2 };
    let encoded = serde_json::to_string(&summary).expect("serialize");
    let decoded: DegreeSummary = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(summary, decoded);

    let class = EulerClass::SemiEulerian;
    let encoded = serde_json::to_string(&class).expect("serialize");
    let decoded: EulerClass = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(class, decoded);
}
