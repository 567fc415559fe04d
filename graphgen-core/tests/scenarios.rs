//! End-to-end scenarios through the public API.

use graphgen_core::{
    Distance, GraphMetrics, all_pairs_distances, bfs_distances, central_vertices, diameter,
    eccentricities, generate, peripheral_vertices, radius,
};
use rstest::rstest;

#[test]
fn complete_graph_has_unit_radius_and_diameter() {
    let graph = generate(4, 1.0, 0.0, 7, false, false).expect("generation succeeds");
    for row in 0..4 {
        for col in 0..4 {
            let expected = (row != col).then_some(1);
            assert_eq!(graph.edge_weight(row, col), expected);
        }
    }

    let matrix = all_pairs_distances(&graph);
    let ecc = eccentricities(&matrix);
    assert_eq!(ecc, vec![Distance::Hops(1); 4]);
    let r = radius(&ecc);
    let d = diameter(&ecc);
    assert_eq!(r, Distance::Hops(1));
    assert_eq!(d, Distance::Hops(1));
    assert_eq!(central_vertices(&ecc, r), [0, 1, 2, 3]);
    assert_eq!(peripheral_vertices(&ecc, d), [0, 1, 2, 3]);
}

#[test]
fn edgeless_graph_is_entirely_unreachable() {
    let graph = generate(3, 0.0, 0.0, 5, false, false).expect("generation succeeds");
    assert_eq!(
        bfs_distances(&graph, 0).expect("source in range"),
        [Distance::Hops(0), Distance::Unreachable, Distance::Unreachable]
    );

    let metrics = GraphMetrics::from_graph(&graph);
    assert_eq!(metrics.eccentricities(), [Distance::Unreachable; 3]);
    assert_eq!(metrics.radius(), Distance::Unreachable);
    assert_eq!(metrics.diameter(), Distance::Unreachable);
    assert!(metrics.central().is_empty());
    assert!(metrics.peripheral().is_empty());
}

#[rstest]
#[case::undirected(false)]
#[case::directed(true)]
fn release_is_idempotent(#[case] directed: bool) {
    let mut graph = generate(6, 0.5, 0.5, 11, true, directed).expect("generation succeeds");
    assert_eq!(graph.vertex_count(), 6);

    graph.release();
    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.is_empty());
    assert!(graph.matrix().is_empty());
    assert!(graph.adjacency_list().is_empty());

    graph.release();
    assert_eq!(graph.vertex_count(), 0);
    assert!(bfs_distances(&graph, 0).is_err());
}

#[test]
fn equal_seeds_reproduce_metrics() {
    let first = generate(16, 0.2, 0.1, 4242, false, true).expect("generation succeeds");
    let second = generate(16, 0.2, 0.1, 4242, false, true).expect("generation succeeds");
    assert_eq!(first, second);
    assert_eq!(GraphMetrics::from_graph(&first), GraphMetrics::from_graph(&second));
}
