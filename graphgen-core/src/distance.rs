//! Breadth-first distance computation.
//!
//! Every edge costs one hop regardless of its stored weight. Distances are
//! computed per source with a FIFO frontier; the all-pairs matrix simply runs
//! one search per vertex, which costs `O(n * (n + m))` and dominates run time
//! for large graphs.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, instrument};

use crate::{Result, error::GraphError, graph::Graph};

/// Hop count between two vertices, or [`Distance::Unreachable`].
///
/// `Unreachable` orders after every finite distance. There is no arithmetic
/// on `Distance`; use [`Distance::hops`] to get at the number.
///
/// # Examples
/// ```
/// use graphgen_core::Distance;
///
/// assert!(Distance::Hops(3) < Distance::Unreachable);
/// assert_eq!(Distance::Hops(3).hops(), Some(3));
/// assert_eq!(Distance::Unreachable.hops(), None);
/// assert_eq!(Distance::Unreachable.to_string(), "∞");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    /// Shortest path length in edges.
    Hops(usize),
    /// No path exists.
    Unreachable,
}

impl Distance {
    /// Returns the hop count when a path exists.
    #[must_use]
    pub const fn hops(self) -> Option<usize> {
        match self {
            Self::Hops(hops) => Some(hops),
            Self::Unreachable => None,
        }
    }

    /// Returns `true` when a path exists.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Hops(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hops(hops) => fmt::Display::fmt(hops, f),
            Self::Unreachable => f.pad("∞"),
        }
    }
}

impl From<Option<usize>> for Distance {
    fn from(hops: Option<usize>) -> Self {
        hops.map_or(Self::Unreachable, Self::Hops)
    }
}

/// Square matrix of BFS distances; row `i` holds the distances from `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    vertex_count: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `true` for the matrix of a released graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.vertex_count == 0 }

    /// Returns the distances from `source`.
    #[must_use]
    pub fn row(&self, source: usize) -> Option<&[Distance]> {
        if source >= self.vertex_count {
            return None;
        }
        let start = source * self.vertex_count;
        self.cells.get(start..start + self.vertex_count)
    }

    /// Returns the distance from `source` to `target`.
    #[must_use]
    pub fn get(&self, source: usize, target: usize) -> Option<Distance> {
        self.row(source)?.get(target).copied()
    }

    /// Iterates over rows in source order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Distance]> + '_ {
        // `chunks_exact(0)` panics, and an empty matrix has no rows anyway.
        self.cells
            .chunks_exact(self.vertex_count.max(1))
            .take(self.vertex_count)
    }
}

/// Computes hop distances from `source` to every vertex.
///
/// Only outgoing edges are followed, so directed graphs respect edge
/// direction.
///
/// # Errors
/// Returns [`GraphError::SourceOutOfRange`] when `source` is not a vertex of
/// `graph`.
///
/// # Examples
/// ```
/// use graphgen_core::{Distance, bfs_distances, generate};
///
/// let graph = generate(3, 0.0, 0.0, 1, false, false)?;
/// let distances = bfs_distances(&graph, 1)?;
/// assert_eq!(
///     distances,
///     [Distance::Unreachable, Distance::Hops(0), Distance::Unreachable]
/// );
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
pub fn bfs_distances(graph: &Graph, source: usize) -> Result<Vec<Distance>> {
    let vertex_count = graph.vertex_count();
    if source >= vertex_count {
        return Err(GraphError::SourceOutOfRange {
            vertex: source,
            vertex_count,
        });
    }

    let mut distances = vec![Distance::Unreachable; vertex_count];
    let mut queue = VecDeque::with_capacity(vertex_count);
    if let Some(slot) = distances.get_mut(source) {
        *slot = Distance::Hops(0);
    }
    queue.push_back((source, 0_usize));

    while let Some((vertex, hops)) = queue.pop_front() {
        for edge in graph.neighbours(vertex).unwrap_or_default() {
            let Some(slot) = distances.get_mut(edge.target()) else {
                continue;
            };
            if slot.is_reachable() {
                continue;
            }
            *slot = Distance::Hops(hops + 1);
            queue.push_back((edge.target(), hops + 1));
        }
    }

    Ok(distances)
}

/// Runs [`bfs_distances`] from every vertex.
///
/// A released graph produces an empty matrix.
///
/// # Examples
/// ```
/// use graphgen_core::{Distance, all_pairs_distances, generate};
///
/// let graph = generate(4, 1.0, 0.0, 7, false, false)?;
/// let matrix = all_pairs_distances(&graph);
/// assert_eq!(matrix.get(0, 3), Some(Distance::Hops(1)));
/// assert_eq!(matrix.get(2, 2), Some(Distance::Hops(0)));
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "distance.all_pairs",
    skip(graph),
    fields(vertex_count = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn all_pairs_distances(graph: &Graph) -> DistanceMatrix {
    let vertex_count = graph.vertex_count();
    let mut cells = Vec::with_capacity(vertex_count.saturating_mul(vertex_count));
    for source in 0..vertex_count {
        // Every source below `vertex_count` is in range.
        let row = bfs_distances(graph, source).unwrap_or_default();
        cells.extend(row);
    }
    debug!(cells = cells.len(), "distance matrix built");
    DistanceMatrix {
        vertex_count,
        cells,
    }
}
