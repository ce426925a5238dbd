//! Mutable weighted graph with per-node adjacency lists.
//!
//! In an undirected graph (the default) every edge is stored twice: once in
//! the adjacency list of `from` and once, mirrored, in the adjacency list of
//! `to`. Every edge stored in node `x`'s list has `from == x`.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::node::{Edge, Node};
use crate::traits::GraphNode;

/// Node/edge container used by every search in this crate.
///
/// Adjacency lists keep insertion order, so a search over a graph built the
/// same way always expands edges in the same order. Parallel edges between
/// the same ordered pair are allowed; lookups return the first one.
#[derive(Debug, Clone)]
pub struct Graph<N = Node> {
    digraph: bool,
    nodes: HashMap<usize, N>,
    edges: HashMap<usize, Vec<Edge>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            digraph: false,
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }
}

impl<N: GraphNode> Graph<N> {
    /// Create an empty undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directed graph: edges are stored one-way only.
    pub fn directed() -> Self {
        Self {
            digraph: true,
            ..Self::default()
        }
    }

    /// Whether edges are one-directional.
    #[inline]
    pub fn is_digraph(&self) -> bool {
        self.digraph
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Register `node` with an empty adjacency list.
    ///
    /// Re-adding an index silently replaces the node and resets its outgoing
    /// edges; the replaced node is returned. In an undirected graph the
    /// mirrors of the dropped edges are removed from the neighbours too.
    pub fn add_node(&mut self, node: N) -> Option<N> {
        let index = node.index();
        if let Some(outgoing) = self.edges.insert(index, Vec::new()) {
            if !self.digraph {
                self.drop_mirrors(index, &outgoing);
            }
        }
        self.nodes.insert(index, node)
    }

    /// Add `edge`, plus its mirror when the graph is undirected.
    ///
    /// Fails without touching the graph when either endpoint is missing, or
    /// when the cost is negative or NaN.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if edge.cost.is_nan() || edge.cost < 0.0 {
            return Err(GraphError::InvalidCost {
                from: edge.from,
                to: edge.to,
                cost: edge.cost,
            });
        }
        if !self.edges.contains_key(&edge.from) {
            return Err(GraphError::MissingNode(edge.from));
        }
        if !self.edges.contains_key(&edge.to) {
            return Err(GraphError::MissingNode(edge.to));
        }

        if let Some(list) = self.edges.get_mut(&edge.from) {
            list.push(edge);
        }
        if !self.digraph {
            if let Some(list) = self.edges.get_mut(&edge.to) {
                list.push(edge.reversed());
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    #[inline]
    pub fn node(&self, index: usize) -> Option<&N> {
        self.nodes.get(&index)
    }

    #[inline]
    pub fn node_mut(&mut self, index: usize) -> Option<&mut N> {
        self.nodes.get_mut(&index)
    }

    #[inline]
    pub fn has_node(&self, index: usize) -> bool {
        self.nodes.contains_key(&index)
    }

    /// First edge `from -> to`, or `None` if either node or the edge is
    /// absent. O(degree of `from`).
    pub fn edge(&self, from: usize, to: usize) -> Option<&Edge> {
        if !self.has_node(from) || !self.has_node(to) {
            return None;
        }
        self.edges(from).iter().find(|e| e.to == to)
    }

    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge(from, to).is_some()
    }

    /// Outgoing edges of `index`; empty for unknown nodes.
    #[inline]
    pub fn edges(&self, index: usize) -> &[Edge] {
        self.edges.get(&index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Overwrite `buf` with the outgoing edges of `index`.
    ///
    /// `buf` is always cleared first and left empty for unknown nodes, so a
    /// single buffer can be reused across calls without reallocating.
    pub fn edges_of_node(&self, index: usize, buf: &mut Vec<Edge>) {
        buf.clear();
        buf.extend_from_slice(self.edges(index));
    }

    /// Iterate over all nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.values()
    }

    /// Overwrite `buf` with references to all nodes (unspecified order).
    pub fn nodes_into<'a>(&'a self, buf: &mut Vec<&'a N>) {
        buf.clear();
        buf.extend(self.nodes.values());
    }

    /// Number of nodes. O(1).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored edges. O(nodes). In an undirected graph each
    /// logical edge counts twice, once per direction.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    /// Remove a node together with every edge leading from or to it.
    ///
    /// Undirected graphs only visit the neighbours named in the node's own
    /// list (O(degree)); directed graphs have no back-references and scan
    /// every adjacency list (O(edges)).
    pub fn remove_node(&mut self, index: usize) -> Option<N> {
        let node = self.nodes.remove(&index)?;
        let outgoing = self.edges.remove(&index).unwrap_or_default();

        if self.digraph {
            for list in self.edges.values_mut() {
                list.retain(|e| e.to != index);
            }
        } else {
            self.drop_mirrors(index, &outgoing);
        }

        log::trace!(
            "removed node {index} ({} outgoing edges, digraph={})",
            outgoing.len(),
            self.digraph
        );
        Some(node)
    }

    /// Remove the first edge `from -> to` and, in an undirected graph, the
    /// first mirror `to -> from`. Returns the removed edge.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Option<Edge> {
        let list = self.edges.get_mut(&from)?;
        let pos = list.iter().position(|e| e.to == to)?;
        let removed = list.remove(pos);

        if !self.digraph {
            if let Some(list) = self.edges.get_mut(&to) {
                if let Some(pos) = list.iter().position(|e| e.to == from) {
                    list.remove(pos);
                }
            }
        }
        Some(removed)
    }

    /// Remove one mirror `e.to -> index` for each edge in `outgoing`.
    fn drop_mirrors(&mut self, index: usize, outgoing: &[Edge]) {
        for edge in outgoing {
            if let Some(list) = self.edges.get_mut(&edge.to) {
                if let Some(pos) = list.iter().position(|e| e.to == index) {
                    list.remove(pos);
                }
            }
        }
    }

    /// Remove every node and edge. The directedness flag is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
