//! Way-point route for agents following a search result.

use navgraph_core::Vec3;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::traits::{GraphNode, Spatial};

/// Ordered way-points with a cursor.
///
/// A non-looping route stops on its last way-point; a looping route wraps
/// around to the first one and is never finished.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub looped: bool,
    waypoints: Vec<Vec3>,
    index: usize,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions of the nodes in `path`, in order.
    ///
    /// Fails with [`GraphError::MissingNode`] if a path index is not in
    /// `graph`, e.g. because the node was removed after the search ran.
    pub fn from_path<N: GraphNode + Spatial>(graph: &Graph<N>, path: &[usize]) -> Result<Self> {
        let waypoints = path
            .iter()
            .map(|&i| {
                graph
                    .node(i)
                    .map(|n| n.position())
                    .ok_or(GraphError::MissingNode(i))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            looped: false,
            waypoints,
            index: 0,
        })
    }

    pub fn push(&mut self, waypoint: Vec3) {
        self.waypoints.push(waypoint);
    }

    /// Drop every way-point and rewind the cursor.
    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.index = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// The way-point under the cursor.
    #[inline]
    pub fn current(&self) -> Option<Vec3> {
        self.waypoints.get(self.index).copied()
    }

    /// Whether the cursor sits on the last way-point of a non-looping route.
    /// An empty route has no last way-point and is never finished.
    pub fn is_finished(&self) -> bool {
        !self.looped && self.index + 1 == self.waypoints.len()
    }

    /// Move the cursor to the next way-point.
    pub fn advance(&mut self) {
        if self.waypoints.is_empty() {
            return;
        }
        self.index += 1;
        if self.index == self.waypoints.len() {
            self.index = if self.looped { 0 } else { self.index - 1 };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::Dijkstra;
    use crate::node::{Edge, NavNode};

    fn corridor() -> Graph<NavNode> {
        let mut g = Graph::new();
        for i in 0..3 {
            g.add_node(NavNode::new(i, Vec3::new(i as f64 * 2.0, 0.0, 0.0)));
        }
        g.add_edge(Edge::new(0, 1, 2.0)).unwrap();
        g.add_edge(Edge::new(1, 2, 2.0)).unwrap();
        g
    }

    #[test]
    fn follows_search_result() {
        let g = corridor();
        let mut d = Dijkstra::new(&g, 0, 2);
        d.search();
        let mut route = Route::from_path(&g, &d.path()).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route.current(), Some(Vec3::ZERO));
        assert!(!route.is_finished());

        route.advance();
        route.advance();
        assert_eq!(route.current(), Some(Vec3::new(4.0, 0.0, 0.0)));
        assert!(route.is_finished());

        // Stays on the last way-point.
        route.advance();
        assert_eq!(route.current(), Some(Vec3::new(4.0, 0.0, 0.0)));
    }

    #[test]
    fn looped_route_wraps() {
        let mut route = Route::new();
        route.looped = true;
        route.push(Vec3::new(1.0, 0.0, 0.0));
        route.push(Vec3::new(2.0, 0.0, 0.0));
        route.advance();
        assert!(!route.is_finished());
        route.advance();
        assert_eq!(route.current(), Some(Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn missing_node_is_an_error() {
        let g = corridor();
        assert_eq!(
            Route::from_path(&g, &[0, 7]),
            Err(GraphError::MissingNode(7))
        );
    }

    #[test]
    fn empty_route() {
        let mut route = Route::new();
        assert!(route.is_empty());
        assert_eq!(route.current(), None);
        assert!(!route.is_finished());
        route.advance();
        assert_eq!(route.current(), None);

        route.push(Vec3::ZERO);
        assert!(route.is_finished());
        route.clear();
        assert!(!route.is_finished());
        assert!(route.is_empty());
    }
}
