//! Graphgen core library.
//!
//! Generates random graphs from structural parameters and computes
//! unit-weight BFS metrics over them: distances, eccentricities, radius,
//! diameter, and the central and peripheral vertex sets.
//!
//! ```
//! use graphgen_core::{GraphGenerator, GraphMetrics, ResolvedSeed};
//!
//! let generator = GraphGenerator::builder()
//!     .with_vertex_count(4)
//!     .with_edge_probability(1.0)
//!     .with_loop_probability(0.0)
//!     .build()?;
//! let graph = generator.generate(ResolvedSeed::new(7))?;
//! let metrics = GraphMetrics::from_graph(&graph);
//! assert_eq!(metrics.central(), &[0, 1, 2, 3]);
//! # Ok::<(), graphgen_core::GraphError>(())
//! ```

mod distance;
mod error;
mod generator;
mod graph;
mod metrics;
mod sampler;
mod seed;

#[cfg(test)]
mod test_utils;

pub use crate::{
    distance::{Distance, DistanceMatrix, all_pairs_distances, bfs_distances},
    error::{GraphError, GraphErrorCode, Result},
    generator::{
        DEFAULT_EDGE_PROBABILITY, DEFAULT_LOOP_PROBABILITY, GeneratorBuilder, GraphGenerator,
        generate,
    },
    graph::{Edge, Graph},
    metrics::{
        GraphMetrics, central_vertices, diameter, eccentricities, peripheral_vertices, radius,
    },
    seed::{ClockSeedSource, ResolvedSeed, RngSeedSource, SeedSource},
};
