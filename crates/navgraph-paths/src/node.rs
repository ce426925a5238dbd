use navgraph_core::Vec3;

use crate::traits::{GraphNode, Spatial};

/// A bare graph node identified only by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub index: usize,
}

impl Node {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl GraphNode for Node {
    #[inline]
    fn index(&self) -> usize {
        self.index
    }
}

/// A way-point in a navigation graph: index, world position and opaque
/// user data (room id, cell handle, ...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavNode<T = ()> {
    pub index: usize,
    pub position: Vec3,
    pub user_data: T,
}

impl NavNode<()> {
    pub fn new(index: usize, position: Vec3) -> Self {
        Self {
            index,
            position,
            user_data: (),
        }
    }
}

impl<T> NavNode<T> {
    pub fn with_data(index: usize, position: Vec3, user_data: T) -> Self {
        Self {
            index,
            position,
            user_data,
        }
    }
}

impl<T> GraphNode for NavNode<T> {
    #[inline]
    fn index(&self) -> usize {
        self.index
    }
}

impl<T> Spatial for NavNode<T> {
    #[inline]
    fn position(&self) -> Vec3 {
        self.position
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A directed arc `from -> to` with a non-negative traversal cost.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub cost: f64,
}

impl Edge {
    #[inline]
    pub const fn new(from: usize, to: usize, cost: f64) -> Self {
        Self { from, to, cost }
    }

    /// The same arc walked the other way, with the same cost.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            cost: self.cost,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn edge_round_trip() {
        let e = Edge::new(3, 7, 1.25);
        let json = serde_json::to_string(&e).unwrap();
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }

    #[test]
    fn nav_node_round_trip() {
        let n = NavNode::with_data(4, Vec3::new(1.0, 0.0, -2.0), String::from("hall"));
        let json = serde_json::to_string(&n).unwrap();
        let back: NavNode<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }
}
