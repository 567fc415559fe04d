//! Benchmark parameter types.

use std::fmt;

use graphgen_core::{GraphError, GraphGenerator};

/// Seed used for every benchmark graph so runs are comparable.
pub const BENCH_SEED: u32 = 42;

/// Shape of the graph generated for one benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Probability of an edge between two distinct vertices.
    pub edge_probability: f64,
    /// Whether edges are directed.
    pub directed: bool,
}

impl GraphBenchParams {
    /// Builds the generator described by these parameters, with loops
    /// disabled and unit weights.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] when `vertex_count` is zero.
    ///
    /// # Examples
    /// ```
    /// use graphgen_benches::params::GraphBenchParams;
    ///
    /// let params = GraphBenchParams {
    ///     vertex_count: 8,
    ///     edge_probability: 0.25,
    ///     directed: true,
    /// };
    /// assert_eq!(params.generator()?.vertex_count().get(), 8);
    /// # Ok::<(), graphgen_core::GraphError>(())
    /// ```
    pub fn generator(&self) -> Result<GraphGenerator, GraphError> {
        GraphGenerator::builder()
            .with_vertex_count(self.vertex_count)
            .with_edge_probability(self.edge_probability)
            .with_loop_probability(0.0)
            .directed(self.directed)
            .build()
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed { "directed" } else { "undirected" };
        write!(f, "n={},p={},{kind}", self.vertex_count, self.edge_probability)
    }
}
