//! Shared test utilities for `graphgen-core`.

use graphgen_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::Graph;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds an unweighted graph with exactly the listed edges, in order.
///
/// Lets tests pin hand-drawn shapes (paths, stars, cycles) that would be
/// awkward to hit through the random generator.
pub(crate) fn graph_from_edges(
    vertex_count: usize,
    directed: bool,
    edges: &[(usize, usize)],
) -> Graph {
    let mut graph = match Graph::with_vertices(vertex_count, directed, false) {
        Ok(graph) => graph,
        Err(err) => panic!("test graph allocation failed: {err}"),
    };
    for &(source, target) in edges {
        graph.insert_edge(source, target, 1);
    }
    graph
}

/// Undirected path `0 - 1 - ... - (n - 1)`.
pub(crate) fn path_graph(vertex_count: usize) -> Graph {
    let edges: Vec<_> = (1..vertex_count).map(|v| (v - 1, v)).collect();
    graph_from_edges(vertex_count, false, &edges)
}
