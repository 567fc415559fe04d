//! Eccentricity-based graph metrics.
//!
//! All functions are pure reductions over an already computed
//! [`DistanceMatrix`] or eccentricity slice. A vertex that reaches nothing
//! but itself is isolated and has an [`Distance::Unreachable`] eccentricity;
//! isolated vertices are skipped when taking the radius and diameter.

use tracing::instrument;

use crate::{
    distance::{Distance, DistanceMatrix, all_pairs_distances},
    graph::Graph,
};

/// Computes the eccentricity of every vertex.
///
/// The eccentricity of `i` is the largest finite distance from `i` to some
/// other vertex. The zero distance to itself does not count, so a vertex
/// whose only reachable vertex is itself (even through a self-loop) gets
/// [`Distance::Unreachable`].
///
/// # Examples
/// ```
/// use graphgen_core::{Distance, all_pairs_distances, eccentricities, generate};
///
/// let graph = generate(3, 0.0, 1.0, 9, false, false)?;
/// let ecc = eccentricities(&all_pairs_distances(&graph));
/// assert_eq!(ecc, vec![Distance::Unreachable; 3]);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[must_use]
pub fn eccentricities(distances: &DistanceMatrix) -> Vec<Distance> {
    distances
        .rows()
        .enumerate()
        .map(|(source, row)| {
            let farthest = row
                .iter()
                .enumerate()
                .filter(|&(target, _)| target != source)
                .filter_map(|(_, distance)| distance.hops())
                .max();
            Distance::from(farthest)
        })
        .collect()
}

/// Returns the smallest finite eccentricity.
///
/// # Examples
/// ```
/// use graphgen_core::{Distance, radius};
///
/// let ecc = [Distance::Hops(2), Distance::Hops(1), Distance::Unreachable];
/// assert_eq!(radius(&ecc), Distance::Hops(1));
/// assert_eq!(radius(&[Distance::Unreachable]), Distance::Unreachable);
/// ```
#[must_use]
pub fn radius(eccentricities: &[Distance]) -> Distance {
    eccentricities
        .iter()
        .filter_map(|ecc| ecc.hops())
        .min()
        .into()
}

/// Returns the largest finite eccentricity.
///
/// # Examples
/// ```
/// use graphgen_core::{Distance, diameter};
///
/// let ecc = [Distance::Hops(2), Distance::Hops(1), Distance::Unreachable];
/// assert_eq!(diameter(&ecc), Distance::Hops(2));
/// assert_eq!(diameter(&[]), Distance::Unreachable);
/// ```
#[must_use]
pub fn diameter(eccentricities: &[Distance]) -> Distance {
    eccentricities
        .iter()
        .filter_map(|ecc| ecc.hops())
        .max()
        .into()
}

/// Returns, in ascending order, the vertices whose eccentricity equals
/// `radius`. Empty when `radius` is unreachable.
///
/// # Examples
/// ```
/// use graphgen_core::{Distance, central_vertices};
///
/// let ecc = [Distance::Hops(2), Distance::Hops(1), Distance::Hops(2)];
/// assert_eq!(central_vertices(&ecc, Distance::Hops(1)), [1]);
/// assert!(central_vertices(&ecc, Distance::Unreachable).is_empty());
/// ```
#[must_use]
pub fn central_vertices(eccentricities: &[Distance], radius: Distance) -> Vec<usize> {
    vertices_with_eccentricity(eccentricities, radius)
}

/// Returns, in ascending order, the vertices whose eccentricity equals
/// `diameter`. Empty when `diameter` is unreachable.
///
/// # Examples
/// ```
/// use graphgen_core::{Distance, peripheral_vertices};
///
/// let ecc = [Distance::Hops(2), Distance::Hops(1), Distance::Hops(2)];
/// assert_eq!(peripheral_vertices(&ecc, Distance::Hops(2)), [0, 2]);
/// ```
#[must_use]
pub fn peripheral_vertices(eccentricities: &[Distance], diameter: Distance) -> Vec<usize> {
    vertices_with_eccentricity(eccentricities, diameter)
}

fn vertices_with_eccentricity(eccentricities: &[Distance], bound: Distance) -> Vec<usize> {
    if !bound.is_reachable() {
        return Vec::new();
    }
    eccentricities
        .iter()
        .enumerate()
        .filter_map(|(vertex, &ecc)| (ecc == bound).then_some(vertex))
        .collect()
}

/// Every distance-based metric of one graph, computed together.
///
/// # Examples
/// ```
/// use graphgen_core::{Distance, GraphMetrics, generate};
///
/// let graph = generate(3, 0.0, 0.0, 5, false, false)?;
/// let metrics = GraphMetrics::from_graph(&graph);
/// assert_eq!(metrics.radius(), Distance::Unreachable);
/// assert_eq!(metrics.diameter(), Distance::Unreachable);
/// assert!(metrics.central().is_empty());
/// assert!(metrics.peripheral().is_empty());
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphMetrics {
    distances: DistanceMatrix,
    eccentricities: Vec<Distance>,
    radius: Distance,
    diameter: Distance,
    central: Vec<usize>,
    peripheral: Vec<usize>,
}

impl GraphMetrics {
    /// Builds the distance matrix of `graph` and derives every metric.
    #[must_use]
    #[instrument(
        name = "metrics.from_graph",
        skip(graph),
        fields(vertex_count = graph.vertex_count()),
    )]
    pub fn from_graph(graph: &Graph) -> Self {
        Self::from_distances(all_pairs_distances(graph))
    }

    /// Derives every metric from an existing distance matrix.
    #[must_use]
    pub fn from_distances(distances: DistanceMatrix) -> Self {
        let eccentricities = eccentricities(&distances);
        let radius = radius(&eccentricities);
        let diameter = diameter(&eccentricities);
        let central = central_vertices(&eccentricities, radius);
        let peripheral = peripheral_vertices(&eccentricities, diameter);
        Self {
            distances,
            eccentricities,
            radius,
            diameter,
            central,
            peripheral,
        }
    }

    /// Returns the all-pairs distance matrix.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distances(&self) -> &DistanceMatrix { &self.distances }

    /// Returns the eccentricity of every vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn eccentricities(&self) -> &[Distance] { &self.eccentricities }

    /// Returns the graph radius.
    #[must_use]
    #[rustfmt::skip]
    pub const fn radius(&self) -> Distance { self.radius }

    /// Returns the graph diameter.
    #[must_use]
    #[rustfmt::skip]
    pub const fn diameter(&self) -> Distance { self.diameter }

    /// Returns the central vertices in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn central(&self) -> &[usize] { &self.central }

    /// Returns the peripheral vertices in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn peripheral(&self) -> &[usize] { &self.peripheral }
}
