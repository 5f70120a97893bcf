//! Path walks, self-loops, and walk-level properties.

use super::{assert_chained, complete_graph, cycle_graph, undirected_multiset};
use crate::error::EulerError;
use crate::graph::{GraphView, Multigraph};
use crate::walk::{
    eulerian_circuit_edges, eulerian_path, eulerian_path_edges,
};

/// W - N - E - W - S - E: the odd-degree vertices are W and E.
fn house_graph() -> Multigraph<&'static str> {
    Multigraph::undirected_from_edges([
        ("W", "N"),
        ("N", "E"),
        ("E", "W"),
        ("W", "S"),
        ("S", "E"),
    ])
}

#[test]
fn test_undirected_path() {
    let graph = house_graph();
    let edges = eulerian_path_edges(&graph, None).expect("graph is semi-Eulerian");

    // Default start is the first odd-degree vertex in vertex order.
    assert_eq!(
        edges,
        vec![("W", "N"), ("N", "E"), ("E", "W"), ("W", "S"), ("S", "E")]
    );
    assert_chained(&edges);
}

#[test]
fn test_undirected_path_with_source() {
    let graph = house_graph();
    let edges = eulerian_path_edges(&graph, Some(&"E")).expect("E is an odd vertex");

    assert_eq!(edges.len(), graph.edge_count());
    assert_eq!(edges[0].0, "E", "walk starts at the requested source");
    assert_eq!(edges.last().expect("nonempty").1, "W", "walk ends at the other odd vertex");
    assert_chained(&edges);
    assert_eq!(
        undirected_multiset(&edges),
        undirected_multiset(&graph.edges().collect::<Vec<_>>()),
        "every edge walked exactly once"
    );
}

#[test]
fn test_undirected_path_rejects_even_source() {
    let graph = house_graph();
    let result = eulerian_path_edges(&graph, Some(&"N"));
    assert_eq!(
        result,
        Err(EulerError::InvalidSource {
            vertex: "\"N\"".to_string()
        })
    );
}

#[test]
fn test_directed_path() {
    // W -> N -> E, W -> S -> E, E -> W: must start at W and end at E.
    let graph = Multigraph::directed_from_edges([
        ("W", "N"),
        ("N", "E"),
        ("S", "E"),
        ("W", "S"),
        ("E", "W"),
    ]);
    let edges = eulerian_path_edges(&graph, None).expect("graph is semi-Eulerian");

    assert_eq!(
        edges,
        vec![("W", "S"), ("S", "E"), ("E", "W"), ("W", "N"), ("N", "E")]
    );
    assert_chained(&edges);
}

#[test]
fn test_directed_path_source_validation() {
    let graph = Multigraph::directed_from_edges([
        ("W", "N"),
        ("N", "E"),
        ("S", "E"),
        ("W", "S"),
        ("E", "W"),
    ]);

    let edges = eulerian_path_edges(&graph, Some(&"W")).expect("W is the path start");
    assert_eq!(edges[0].0, "W");

    for wrong in ["N", "E", "S"] {
        let result = eulerian_path_edges(&graph, Some(&wrong));
        assert_eq!(
            result,
            Err(EulerError::InvalidSource {
                vertex: format!("{:?}", wrong)
            }),
            "only the out-excess vertex may start the path"
        );
    }
}

#[test]
fn test_multigraph_path() {
    let graph = Multigraph::undirected_from_edges([
        ("W", "N"),
        ("N", "E"),
        ("E", "W"),
        ("E", "W"),
        ("W", "S"),
        ("S", "E"),
        ("S", "E"),
    ]);
    let edges = eulerian_path_edges(&graph, None).expect("graph is semi-Eulerian");

    assert_eq!(edges.len(), 7);
    assert_eq!(edges[0].0, "E", "first odd-degree vertex in order is E");
    assert_eq!(edges.last().expect("nonempty").1, "S");
    assert_chained(&edges);
    assert_eq!(
        undirected_multiset(&edges),
        undirected_multiset(&graph.edges().collect::<Vec<_>>())
    );
}

#[test]
fn test_path_on_eulerian_graph_degenerates_to_circuit() {
    let square = cycle_graph(4);
    let path = eulerian_path_edges(&square, Some(&2)).expect("square is Eulerian");
    let circuit = eulerian_circuit_edges(&square, Some(&2)).expect("square is Eulerian");

    assert_eq!(path, circuit);
    assert_eq!(path[0].0, 2);
    assert_eq!(path.last().expect("nonempty").1, 2, "degenerate path closes");
}

#[test]
fn test_self_loop_walked_once() {
    let mut graph = cycle_graph(3);
    graph.add_edge(1, 1);

    let edges = eulerian_circuit_edges(&graph, Some(&0)).expect("loops keep parity even");
    assert_eq!(edges, vec![(0, 2), (2, 1), (1, 1), (1, 0)]);
}

#[test]
fn test_koenigsberg_path_fails_on_first_pull() {
    let bridges = Multigraph::undirected_from_edges([
        ("W", "N"),
        ("W", "N"),
        ("N", "E"),
        ("E", "W"),
        ("W", "S"),
        ("W", "S"),
        ("S", "E"),
    ]);

    // Building the sequence is fine; pulling it is what fails.
    let mut walk = eulerian_path(&bridges, None);
    assert_eq!(
        walk.next(),
        Some(Err(EulerError::OddDegreeVertices { count: 4 }))
    );
    assert!(walk.next().is_none());
}

#[test]
fn test_circuit_source_rotation() {
    // Every vertex of an Eulerian graph can serve as the circuit start.
    let k5 = complete_graph(5);
    let all_edges = undirected_multiset(&k5.edges().collect::<Vec<_>>());

    for v in 0..5 {
        let edges = eulerian_circuit_edges(&k5, Some(&v)).expect("K5 is Eulerian");
        assert_eq!(edges.len(), 10);
        assert_eq!(edges[0].0, v, "circuit starts at the requested vertex");
        assert_eq!(edges.last().expect("nonempty").1, v, "circuit closes");
        assert_chained(&edges);
        assert_eq!(undirected_multiset(&edges), all_edges);
    }
}

#[test]
fn test_partial_consumption_leaves_the_graph_alone() {
    let square = cycle_graph(4);
    {
        let mut walk = eulerian_path(&square, None);
        walk.next();
        walk.next();
        // Dropped here, half consumed.
    }
    assert_eq!(square.edge_count(), 4);
    let edges = eulerian_circuit_edges(&square, Some(&0)).expect("still Eulerian");
    assert_eq!(edges.len(), 4);
}

#[test]
fn test_concurrent_walks_are_independent() {
    let square = cycle_graph(4);
    let mut first = eulerian_path(&square, None);
    let mut second = eulerian_path(&square, None);

    // Interleave the two pulls; each walk owns its own snapshot.
    let mut first_edges = Vec::new();
    let mut second_edges = Vec::new();
    loop {
        match (first.next(), second.next()) {
            (None, None) => break,
            (a, b) => {
                first_edges.extend(a.map(|r| r.expect("square is Eulerian")));
                second_edges.extend(b.map(|r| r.expect("square is Eulerian")));
            }
        }
    }
    assert_eq!(first_edges, second_edges);
    assert_eq!(first_edges.len(), 4);
}
