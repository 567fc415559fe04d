use graphgen_core::{
    Graph, GraphError, GraphErrorCode, GraphGenerator, ResolvedSeed, bfs_distances, generate,
};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::InvalidVertexCount { got: 0 },
    GraphErrorCode::InvalidVertexCount,
    "GRAPH_INVALID_VERTEX_COUNT",
    true,
)]
#[case(
    GraphError::SourceOutOfRange { vertex: 9, vertex_count: 3 },
    GraphErrorCode::SourceOutOfRange,
    "GRAPH_SOURCE_OUT_OF_RANGE",
    true,
)]
#[case(
    GraphError::AllocationFailed { vertex_count: usize::MAX },
    GraphErrorCode::AllocationFailed,
    "GRAPH_ALLOCATION_FAILED",
    false,
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] code: &str,
    #[case] usage: bool,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), code);
    assert_eq!(error.code().to_string(), code);
    assert_eq!(error.is_usage_error(), usage);
}

#[test]
fn error_messages_name_the_offending_values() {
    let err = GraphError::SourceOutOfRange {
        vertex: 9,
        vertex_count: 3,
    };
    assert_eq!(
        err.to_string(),
        "source vertex 9 is out of range for a graph with 3 vertices"
    );
}

#[test]
fn oversized_graph_reports_allocation_failure() {
    let generator = GraphGenerator::builder()
        .with_vertex_count(usize::MAX)
        .build()
        .expect("non-zero vertex count passes validation");
    let err = generator
        .generate(ResolvedSeed::new(1))
        .expect_err("an n*n matrix cannot be allocated");
    assert_eq!(
        err,
        GraphError::AllocationFailed {
            vertex_count: usize::MAX
        }
    );
}

#[test]
fn zero_vertices_fail_before_any_allocation() {
    let err = generate(0, 0.4, 0.15, 1, false, false).expect_err("zero vertices");
    assert_eq!(err.code(), GraphErrorCode::InvalidVertexCount);
}

#[test]
fn out_of_range_source_is_rejected() {
    let graph: Graph = generate(3, 0.5, 0.0, 4, false, false).expect("generation succeeds");
    let err = bfs_distances(&graph, 3).expect_err("vertex 3 does not exist");
    assert_eq!(err.code(), GraphErrorCode::SourceOutOfRange);
}
