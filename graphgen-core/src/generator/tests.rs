//! Unit tests for random graph generation.

use proptest::prelude::*;
use rstest::rstest;

use crate::test_utils::suite_proptest_config;
use crate::{Graph, GraphError, ResolvedSeed, RngSeedSource};

use super::{DEFAULT_EDGE_PROBABILITY, DEFAULT_LOOP_PROBABILITY, GraphGenerator, generate};

fn build(
    vertex_count: usize,
    edge_probability: f64,
    loop_probability: f64,
    weighted: bool,
    directed: bool,
) -> GraphGenerator {
    GraphGenerator::builder()
        .with_vertex_count(vertex_count)
        .with_edge_probability(edge_probability)
        .with_loop_probability(loop_probability)
        .weighted(weighted)
        .directed(directed)
        .build()
        .expect("vertex count is positive")
}

fn rows(graph: &Graph) -> Vec<Vec<u32>> {
    (0..graph.vertex_count())
        .map(|row| graph.matrix_row(row).expect("row in range").to_vec())
        .collect()
}

fn list(graph: &Graph) -> Vec<Vec<(usize, u32)>> {
    graph
        .adjacency_list()
        .iter()
        .map(|edges| edges.iter().map(|e| (e.target(), e.weight())).collect())
        .collect()
}

#[test]
fn builder_defaults_match_published_constants() {
    let generator = GraphGenerator::builder()
        .with_vertex_count(3)
        .build()
        .expect("three vertices are valid");
    assert_eq!(generator.edge_probability(), DEFAULT_EDGE_PROBABILITY);
    assert_eq!(generator.loop_probability(), DEFAULT_LOOP_PROBABILITY);
    assert!(!generator.is_weighted());
    assert!(!generator.is_directed());
}

#[test]
fn builder_rejects_zero_vertices() {
    let err = GraphGenerator::builder()
        .with_vertex_count(0)
        .build()
        .expect_err("zero vertices must be rejected");
    assert_eq!(err, GraphError::InvalidVertexCount { got: 0 });
}

#[test]
fn free_function_rejects_zero_vertices() {
    let err = generate(0, 0.5, 0.5, 1, false, false).expect_err("zero vertices");
    assert_eq!(err.code().as_str(), "GRAPH_INVALID_VERTEX_COUNT");
}

#[test]
fn complete_undirected_scenario() {
    let graph = generate(4, 1.0, 0.0, 7, false, false).expect("generation succeeds");
    let expected: Vec<Vec<u32>> = (0..4)
        .map(|row| (0..4).map(|col| u32::from(row != col)).collect())
        .collect();
    assert_eq!(rows(&graph), expected);
    assert_eq!(
        list(&graph)[0],
        vec![(1, 1), (2, 1), (3, 1)],
        "neighbours of 0 appear in generation order"
    );
    assert_eq!(graph.adjacency_entry_count(), 12);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn pins_weighted_undirected_output_for_seed_123() {
    let graph = build(5, 0.5, 0.2, true, false)
        .generate(ResolvedSeed::new(123))
        .expect("generation succeeds");
    assert_eq!(
        rows(&graph),
        vec![
            vec![0, 9, 0, 6, 0],
            vec![9, 0, 0, 7, 0],
            vec![0, 0, 0, 0, 0],
            vec![6, 7, 0, 0, 0],
            vec![0, 0, 0, 0, 3],
        ]
    );
    assert_eq!(
        list(&graph),
        vec![
            vec![(1, 9), (3, 6)],
            vec![(0, 9), (3, 7)],
            vec![],
            vec![(0, 6), (1, 7)],
            vec![(4, 3)],
        ]
    );
}

#[test]
fn pins_directed_output_for_seed_2024() {
    let graph = build(6, 0.3, 0.0, false, true)
        .generate(ResolvedSeed::new(2024))
        .expect("generation succeeds");
    assert_eq!(
        rows(&graph),
        vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 1, 0],
            vec![1, 1, 0, 0, 0, 0],
            vec![1, 0, 0, 0, 1, 0],
            vec![0, 1, 1, 1, 0, 1],
            vec![1, 1, 0, 1, 0, 0],
        ]
    );
}

#[rstest]
#[case::undirected(false)]
#[case::directed(true)]
fn zero_probabilities_produce_no_edges(#[case] directed: bool) {
    let graph = build(7, 0.0, 0.0, false, directed)
        .generate(ResolvedSeed::new(31))
        .expect("generation succeeds");
    assert_eq!(graph.adjacency_entry_count(), 0);
    assert!(graph.matrix().iter().all(|&cell| cell == 0));
}

#[test]
fn full_edge_probability_makes_directed_graph_complete() {
    let graph = build(5, 1.0, 0.0, false, true)
        .generate(ResolvedSeed::new(8))
        .expect("generation succeeds");
    for source in 0..5 {
        for target in 0..5 {
            let expected = (source != target).then_some(1);
            assert_eq!(graph.edge_weight(source, target), expected);
        }
    }
}

#[test]
fn full_loop_probability_adds_every_loop_once() {
    let graph = build(4, 0.0, 1.0, false, false)
        .generate(ResolvedSeed::new(3))
        .expect("generation succeeds");
    for vertex in 0..4 {
        assert_eq!(graph.edge_weight(vertex, vertex), Some(1));
        assert_eq!(graph.neighbours(vertex).map(<[_]>::len), Some(1));
    }
}

#[rstest]
#[case::above_one(1.5, 30)]
#[case::below_zero(-0.5, 0)]
#[case::nan(f64::NAN, 0)]
fn out_of_range_probabilities_saturate(#[case] probability: f64, #[case] expected_edges: usize) {
    let graph = build(6, probability, 0.0, false, true)
        .generate(ResolvedSeed::new(5))
        .expect("generation succeeds");
    assert_eq!(graph.adjacency_entry_count(), expected_edges);
}

#[test]
fn unweighted_edges_have_unit_weight() {
    let graph = build(12, 0.6, 0.3, false, false)
        .generate(ResolvedSeed::new(77))
        .expect("generation succeeds");
    assert!(graph.matrix().iter().all(|&cell| cell <= 1));
}

#[test]
fn weighted_edges_stay_within_one_to_ten() {
    let graph = build(12, 0.6, 0.3, true, true)
        .generate(ResolvedSeed::new(77))
        .expect("generation succeeds");
    assert!(graph.adjacency_entry_count() > 0);
    for edges in graph.adjacency_list() {
        assert!(edges.iter().all(|edge| (1..=10).contains(&edge.weight())));
    }
}

#[test]
fn zero_seed_resolution_is_reproducible_with_injected_rng() {
    use rand::{SeedableRng, rngs::SmallRng};

    let generator = build(10, 0.4, 0.15, true, false);
    let run = || {
        let mut source = RngSeedSource::new(SmallRng::seed_from_u64(17));
        generator
            .generate(ResolvedSeed::resolve(0, &mut source))
            .expect("generation succeeds")
    };
    assert_eq!(run(), run());
}

#[test]
fn generate_records_span_fields() {
    use graphgen_test_support::tracing::with_recording;

    let (graph, layer) = with_recording(|| {
        build(3, 1.0, 0.0, false, false).generate(ResolvedSeed::new(9))
    });
    assert!(graph.is_ok());
    let span = layer
        .span_named("generator.generate")
        .expect("generation span must be recorded");
    assert_eq!(span.fields.get("vertex_count").map(String::as_str), Some("3"));
    assert_eq!(span.fields.get("seed").map(String::as_str), Some("9"));
    let generated = layer
        .events()
        .into_iter()
        .find(|event| event.message() == Some("graph generated"))
        .expect("completion event must be recorded");
    assert_eq!(generated.fields.get("edges").map(String::as_str), Some("3"));
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn equal_nonzero_seeds_give_identical_graphs(
        vertex_count in 1_usize..24,
        edge_percent in 0_u32..=100,
        loop_percent in 0_u32..=100,
        seed in 1_u32..,
        weighted in any::<bool>(),
        directed in any::<bool>(),
    ) {
        let generator = build(
            vertex_count,
            f64::from(edge_percent) / 100.0,
            f64::from(loop_percent) / 100.0,
            weighted,
            directed,
        );
        let first = generator.generate(ResolvedSeed::new(seed)).expect("generation succeeds");
        let second = generator.generate(ResolvedSeed::new(seed)).expect("generation succeeds");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn undirected_graphs_are_symmetric_and_list_consistent(
        vertex_count in 1_usize..24,
        edge_percent in 0_u32..=100,
        seed in 1_u32..,
        weighted in any::<bool>(),
    ) {
        let graph = build(vertex_count, f64::from(edge_percent) / 100.0, 0.3, weighted, false)
            .generate(ResolvedSeed::new(seed))
            .expect("generation succeeds");
        let mut matrix_entries = 0;
        for source in 0..vertex_count {
            for target in 0..vertex_count {
                let weight = graph.edge_weight(source, target);
                prop_assert_eq!(weight, graph.edge_weight(target, source));
                if let Some(weight) = weight {
                    matrix_entries += 1;
                    let listed = graph
                        .neighbours(source)
                        .expect("vertex in range")
                        .iter()
                        .filter(|edge| edge.target() == target && edge.weight() == weight)
                        .count();
                    prop_assert_eq!(listed, 1);
                }
            }
        }
        prop_assert_eq!(graph.adjacency_entry_count(), matrix_entries);
        let upper_triangle = (0..vertex_count)
            .flat_map(|source| (source..vertex_count).map(move |target| (source, target)))
            .filter(|&(source, target)| graph.edge_weight(source, target).is_some())
            .count();
        prop_assert_eq!(graph.edge_count(), upper_triangle);
    }
}
