//! Heuristic policies for A*.
//!
//! The distance-based policies read node positions through [`Spatial`] and
//! fall back to `0.0` when either node is missing, which keeps them
//! admissible on malformed queries.

use navgraph_core::Vec3;

use crate::graph::Graph;
use crate::traits::{GraphNode, Heuristic, Spatial};

#[inline]
fn positions<N: GraphNode + Spatial>(
    graph: &Graph<N>,
    from: usize,
    to: usize,
) -> Option<(Vec3, Vec3)> {
    Some((graph.node(from)?.position(), graph.node(to)?.position()))
}

/// Straight-line distance. Consistent (and so admissible) whenever edge costs
/// are at least the Euclidean distance between their endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclid;

/// Squared straight-line distance. Cheaper, but overestimates on long
/// distances, so A* may return non-optimal paths with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EuclidSquared;

/// Sum of per-axis distances. Consistent when every edge costs at least the
/// Manhattan distance between its endpoints, e.g. axis-aligned movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

/// Always `0.0`: turns A* into Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl<N: GraphNode + Spatial> Heuristic<N> for Euclid {
    fn estimate(&self, graph: &Graph<N>, from: usize, to: usize) -> f64 {
        positions(graph, from, to).map_or(0.0, |(a, b)| a.distance_to(b))
    }
}

impl<N: GraphNode + Spatial> Heuristic<N> for EuclidSquared {
    fn estimate(&self, graph: &Graph<N>, from: usize, to: usize) -> f64 {
        positions(graph, from, to).map_or(0.0, |(a, b)| a.squared_distance_to(b))
    }
}

impl<N: GraphNode + Spatial> Heuristic<N> for Manhattan {
    fn estimate(&self, graph: &Graph<N>, from: usize, to: usize) -> f64 {
        positions(graph, from, to).map_or(0.0, |(a, b)| a.manhattan_distance_to(b))
    }
}

impl<N> Heuristic<N> for Zero {
    #[inline]
    fn estimate(&self, _graph: &Graph<N>, _from: usize, _to: usize) -> f64 {
        0.0
    }
}

/// Run-time selectable policy, for callers that pick the heuristic from
/// data rather than at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicPolicy {
    #[default]
    Euclid,
    EuclidSquared,
    Manhattan,
    Zero,
}

impl<N: GraphNode + Spatial> Heuristic<N> for HeuristicPolicy {
    fn estimate(&self, graph: &Graph<N>, from: usize, to: usize) -> f64 {
        match self {
            Self::Euclid => Euclid.estimate(graph, from, to),
            Self::EuclidSquared => EuclidSquared.estimate(graph, from, to),
            Self::Manhattan => Manhattan.estimate(graph, from, to),
            Self::Zero => 0.0,
        }
    }
}
