//! Random graph generation.
//!
//! Every vertex pair is visited once (unordered pairs for undirected graphs,
//! ordered pairs for directed ones) and one sample in `0..100` decides
//! whether the edge exists. Loops use their own probability. Weighted graphs
//! draw a second sample for the weight.

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::{
    Result,
    error::GraphError,
    graph::Graph,
    sampler::{Lcg31, PERCENT_SCALE},
    seed::{ClockSeedSource, ResolvedSeed},
};

/// Edge probability used when none is configured.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.4;
/// Self-loop probability used when none is configured.
pub const DEFAULT_LOOP_PROBABILITY: f64 = 0.15;

/// Configures and constructs [`GraphGenerator`] instances.
///
/// Probabilities are not validated: values below `0.0` never
/// create edges, values above `1.0` always do, and `NaN` behaves like `0.0`.
///
/// # Examples
/// ```
/// use graphgen_core::GraphGenerator;
///
/// let generator = GraphGenerator::builder()
///     .with_vertex_count(8)
///     .with_edge_probability(0.25)
///     .directed(true)
///     .build()
///     .expect("vertex count is positive");
/// assert_eq!(generator.vertex_count().get(), 8);
/// assert!(generator.is_directed());
/// assert!(!generator.is_weighted());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorBuilder {
    vertex_count: usize,
    edge_probability: f64,
    loop_probability: f64,
    weighted: bool,
    directed: bool,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            vertex_count: 0,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            loop_probability: DEFAULT_LOOP_PROBABILITY,
            weighted: false,
            directed: false,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder with default probabilities and no vertices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of vertices.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Sets the probability of an edge between two distinct vertices.
    #[must_use]
    pub const fn with_edge_probability(mut self, probability: f64) -> Self {
        self.edge_probability = probability;
        self
    }

    /// Sets the probability of a self-loop on each vertex.
    #[must_use]
    pub const fn with_loop_probability(mut self, probability: f64) -> Self {
        self.loop_probability = probability;
        self
    }

    /// Draws edge weights in `1..=10` instead of fixing them at 1.
    #[must_use]
    pub const fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Generates directed edges over ordered vertex pairs.
    #[must_use]
    pub const fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] when no vertices were
    /// requested.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{GraphError, GraphGenerator};
    ///
    /// let err = GraphGenerator::builder().build().expect_err("zero vertices");
    /// assert_eq!(err, GraphError::InvalidVertexCount { got: 0 });
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        let vertex_count = NonZeroUsize::new(self.vertex_count).ok_or(
            GraphError::InvalidVertexCount {
                got: self.vertex_count,
            },
        )?;

        Ok(GraphGenerator {
            vertex_count,
            edge_probability: self.edge_probability,
            loop_probability: self.loop_probability,
            edge_threshold: percent_threshold(self.edge_probability),
            loop_threshold: percent_threshold(self.loop_probability),
            weighted: self.weighted,
            directed: self.directed,
        })
    }
}

/// Validated generator configuration.
///
/// [`GraphGenerator::generate`] is a pure function of this configuration and
/// the [`ResolvedSeed`] it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphGenerator {
    vertex_count: NonZeroUsize,
    edge_probability: f64,
    loop_probability: f64,
    edge_threshold: i64,
    loop_threshold: i64,
    weighted: bool,
    directed: bool,
}

impl GraphGenerator {
    /// Starts a [`GeneratorBuilder`].
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Returns the number of vertices generated graphs will have.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> NonZeroUsize { self.vertex_count }

    /// Returns the configured edge probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_probability(&self) -> f64 { self.edge_probability }

    /// Returns the configured self-loop probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn loop_probability(&self) -> f64 { self.loop_probability }

    /// Returns whether generated edges carry random weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_weighted(&self) -> bool { self.weighted }

    /// Returns whether generated edges are directed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_directed(&self) -> bool { self.directed }

    /// Generates a graph from `seed`.
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailed`] when the adjacency matrix
    /// cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{GraphGenerator, ResolvedSeed};
    ///
    /// let generator = GraphGenerator::builder().with_vertex_count(6).build()?;
    /// let first = generator.generate(ResolvedSeed::new(42))?;
    /// let second = generator.generate(ResolvedSeed::new(42))?;
    /// assert_eq!(first, second);
    /// # Ok::<(), graphgen_core::GraphError>(())
    /// ```
    #[instrument(
        name = "generator.generate",
        err,
        skip(self, seed),
        fields(
            vertex_count = self.vertex_count.get(),
            directed = self.directed,
            weighted = self.weighted,
            seed = seed.get(),
        ),
    )]
    pub fn generate(&self, seed: ResolvedSeed) -> Result<Graph> {
        let vertex_count = self.vertex_count.get();
        let mut graph = Graph::with_vertices(vertex_count, self.directed, self.weighted)?;
        let mut sampler = Lcg31::new(seed.get());

        for source in 0..vertex_count {
            let first_target = if self.directed { 0 } else { source };
            for target in first_target..vertex_count {
                let threshold = if source == target {
                    self.loop_threshold
                } else {
                    self.edge_threshold
                };
                if i64::from(sampler.percent()) >= threshold {
                    continue;
                }
                let weight = if self.weighted { sampler.weight() } else { 1 };
                graph.insert_edge(source, target, weight);
            }
        }

        debug!(edges = graph.edge_count(), "graph generated");
        Ok(graph)
    }
}

/// Generates a graph in one call.
///
/// A `seed` of `0` draws a fresh state from [`ClockSeedSource`]; any other
/// value reproduces the same graph on every run and platform. Use
/// [`GraphGenerator`] with [`ResolvedSeed::resolve`] to inject a different
/// seed strategy or to learn which state a zero seed resolved to.
///
/// # Errors
/// Returns [`GraphError::InvalidVertexCount`] when `vertex_count` is zero and
/// [`GraphError::AllocationFailed`] when storage cannot be allocated.
///
/// # Examples
/// ```
/// let graph = graphgen_core::generate(4, 1.0, 0.0, 7, false, false)?;
/// assert_eq!(graph.adjacency_entry_count(), 12);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
pub fn generate(
    vertex_count: usize,
    edge_probability: f64,
    loop_probability: f64,
    seed: u32,
    weighted: bool,
    directed: bool,
) -> Result<Graph> {
    let generator = GraphGenerator::builder()
        .with_vertex_count(vertex_count)
        .with_edge_probability(edge_probability)
        .with_loop_probability(loop_probability)
        .weighted(weighted)
        .directed(directed)
        .build()?;
    generator.generate(ResolvedSeed::resolve(seed, &mut ClockSeedSource))
}

/// Converts a probability into the exclusive bound a `0..100` sample must
/// fall under. Float-to-int casts saturate, and `NaN` maps to zero.
#[expect(
    clippy::float_arithmetic,
    reason = "probabilities are scaled to whole percentages"
)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the scaled value is floored first and the cast saturates"
)]
fn percent_threshold(probability: f64) -> i64 {
    (probability * f64::from(PERCENT_SCALE)).floor() as i64
}

#[cfg(test)]
mod tests;
