use navgraph_core::Vec3;

use crate::graph::Graph;

/// Anything that can be stored in a [`Graph`]. Provides its index.
pub trait GraphNode {
    /// Index of this node, unique within its graph.
    fn index(&self) -> usize;
}

/// Node with a world position, required by the distance heuristics.
pub trait Spatial {
    fn position(&self) -> Vec3;
}

/// Estimate of the remaining cost from `from` to `to`, consumed by A*.
///
/// Implementations must return a non-negative value. A* never reopens a
/// settled node, so it only guarantees optimal paths when the estimate is
/// consistent (monotone): `h(a) <= cost(a, b) + h(b)` for every edge `a -> b`.
/// A merely admissible estimate, or an inconsistent one, still terminates but
/// may return a more expensive path. Neither property is checked at run time.
pub trait Heuristic<N> {
    fn estimate(&self, graph: &Graph<N>, from: usize, to: usize) -> f64;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&Graph<N>, usize, usize) -> f64,
{
    #[inline]
    fn estimate(&self, graph: &Graph<N>, from: usize, to: usize) -> f64 {
        self(graph, from, to)
    }
}
