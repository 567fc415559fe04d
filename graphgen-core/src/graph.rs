//! Dual-representation graph store.
//!
//! A [`Graph`] keeps the same edge set twice: a row-major adjacency matrix in
//! one contiguous buffer for O(1) edge lookup, and a per-vertex adjacency list
//! for traversal. Both are written through [`Graph::insert_edge`] only, which
//! is what keeps them consistent.

use crate::{Result, error::GraphError};

/// Outgoing edge stored in the adjacency list.
///
/// # Examples
/// ```
/// use graphgen_core::{GraphGenerator, ResolvedSeed};
///
/// let graph = GraphGenerator::builder()
///     .with_vertex_count(2)
///     .with_edge_probability(1.0)
///     .with_loop_probability(0.0)
///     .build()?
///     .generate(ResolvedSeed::new(1))?;
/// let edge = graph.neighbours(0).expect("vertex 0 exists")[0];
/// assert_eq!((edge.target(), edge.weight()), (1, 1));
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    target: usize,
    weight: u32,
}

impl Edge {
    pub(crate) const fn new(target: usize, weight: u32) -> Self {
        Self { target, weight }
    }

    /// Returns the vertex this edge points to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight (1 for unweighted graphs).
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }
}

/// Simple graph over vertices `0..vertex_count`, optionally directed and
/// optionally weighted.
///
/// Graphs are produced by [`crate::GraphGenerator`] and are read-only
/// afterwards apart from [`Graph::release`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    matrix: Vec<u32>,
    adjacency: Vec<Vec<Edge>>,
    directed: bool,
    weighted: bool,
}

impl Graph {
    /// Allocates an edgeless graph with zeroed matrix storage.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] when `vertex_count` is zero
    /// and [`GraphError::AllocationFailed`] when the `n * n` matrix cannot be
    /// reserved.
    pub(crate) fn with_vertices(
        vertex_count: usize,
        directed: bool,
        weighted: bool,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount { got: vertex_count });
        }
        let allocation_failed = || GraphError::AllocationFailed { vertex_count };
        let cells = vertex_count
            .checked_mul(vertex_count)
            .ok_or_else(allocation_failed)?;

        let mut matrix = Vec::new();
        matrix
            .try_reserve_exact(cells)
            .map_err(|_| allocation_failed())?;
        matrix.resize(cells, 0);

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| allocation_failed())?;
        adjacency.resize_with(vertex_count, Vec::new);

        Ok(Self {
            vertex_count,
            matrix,
            adjacency,
            directed,
            weighted,
        })
    }

    /// Records the edge `source -> target` in both representations. For
    /// undirected graphs a non-loop edge is mirrored in the same call.
    ///
    /// Callers guarantee both endpoints are in range.
    pub(crate) fn insert_edge(&mut self, source: usize, target: usize, weight: u32) {
        debug_assert!(source < self.vertex_count && target < self.vertex_count);
        self.write_half(source, target, weight);
        if !self.directed && source != target {
            self.write_half(target, source, weight);
        }
    }

    fn write_half(&mut self, source: usize, target: usize, weight: u32) {
        if let Some(cell) = self.matrix.get_mut(source * self.vertex_count + target) {
            *cell = weight;
        }
        if let Some(edges) = self.adjacency.get_mut(source) {
            edges.push(Edge::new(target, weight));
        }
    }

    /// Frees the matrix and adjacency list. The graph reports zero vertices
    /// afterwards; releasing an already released graph does nothing.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{GraphGenerator, ResolvedSeed};
    ///
    /// let mut graph = GraphGenerator::builder()
    ///     .with_vertex_count(3)
    ///     .build()?
    ///     .generate(ResolvedSeed::new(11))?;
    /// graph.release();
    /// graph.release();
    /// assert_eq!(graph.vertex_count(), 0);
    /// assert!(graph.matrix().is_empty());
    /// # Ok::<(), graphgen_core::GraphError>(())
    /// ```
    pub fn release(&mut self) {
        self.matrix = Vec::new();
        self.adjacency = Vec::new();
        self.vertex_count = 0;
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `true` once the graph has been released.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.vertex_count == 0 }

    /// Returns whether edges were generated as directed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_directed(&self) -> bool { self.directed }

    /// Returns whether edges carry random weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_weighted(&self) -> bool { self.weighted }

    /// Returns the weight of `source -> target`, or `None` when there is no
    /// such edge or either vertex is out of range.
    #[must_use]
    pub fn edge_weight(&self, source: usize, target: usize) -> Option<u32> {
        if source >= self.vertex_count || target >= self.vertex_count {
            return None;
        }
        self.matrix
            .get(source * self.vertex_count + target)
            .copied()
            .filter(|&weight| weight != 0)
    }

    /// Returns the full row-major adjacency matrix. Cell `row * n + col` is
    /// zero when there is no edge and the edge weight otherwise.
    #[must_use]
    pub fn matrix(&self) -> &[u32] {
        &self.matrix
    }

    /// Returns one row of the adjacency matrix.
    #[must_use]
    pub fn matrix_row(&self, row: usize) -> Option<&[u32]> {
        if row >= self.vertex_count {
            return None;
        }
        let start = row * self.vertex_count;
        self.matrix.get(start..start + self.vertex_count)
    }

    /// Returns the outgoing edges of `vertex` in generation order.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Option<&[Edge]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Returns the adjacency list indexed by vertex.
    #[must_use]
    pub fn adjacency_list(&self) -> &[Vec<Edge>] {
        &self.adjacency
    }

    /// Counts adjacency-list entries. An undirected edge between two distinct
    /// vertices appears once per endpoint; a self-loop appears once.
    #[must_use]
    pub fn adjacency_entry_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Counts distinct edges. An undirected edge between two distinct
    /// vertices counts once, as does every self-loop.
    ///
    /// # Examples
    /// ```
    /// let graph = graphgen_core::generate(4, 1.0, 0.0, 7, false, false)?;
    /// assert_eq!(graph.edge_count(), 6);
    /// assert_eq!(graph.adjacency_entry_count(), 12);
    /// # Ok::<(), graphgen_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(source, edges)| {
                edges
                    .iter()
                    .filter(|edge| self.directed || edge.target() >= source)
                    .count()
            })
            .sum()
    }
}
