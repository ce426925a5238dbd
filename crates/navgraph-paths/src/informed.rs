//! Cost-relaxation core shared by [`Dijkstra`](crate::Dijkstra) and
//! [`AStar`](crate::AStar).
//!
//! Instead of a decrease-key heap, every improvement pushes a fresh queue
//! entry; entries for nodes that are already settled are skipped when they
//! surface.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::config::SearchConfig;
use crate::graph::Graph;
use crate::node::Edge;
use crate::pqueue::{Comparator, PriorityQueue};
use crate::traits::{GraphNode, Heuristic};

/// Queue entry: `priority` is `G` for Dijkstra and `G + H` for A*.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QueueEntry {
    pub(crate) priority: f64,
    pub(crate) index: usize,
}

fn by_priority(a: &QueueEntry, b: &QueueEntry) -> Ordering {
    a.priority.total_cmp(&b.priority)
}

#[derive(Debug)]
pub(crate) struct CostSearch {
    pub(crate) found: bool,
    pub(crate) exhausted: bool,
    pub(crate) expansions: usize,
    // best known accumulated cost (G)
    cost: HashMap<usize, f64>,
    // best known predecessor edge of nodes not yet settled
    search_frontier: HashMap<usize, Edge>,
    shortest_path_tree: HashMap<usize, Edge>,
    settled: HashSet<usize>,
    // tree edges in settle order
    tree_order: Vec<Edge>,
    queue: PriorityQueue<QueueEntry>,
    ebuf: Vec<Edge>,
}

impl Default for CostSearch {
    fn default() -> Self {
        Self {
            found: false,
            exhausted: false,
            expansions: 0,
            cost: HashMap::new(),
            search_frontier: HashMap::new(),
            shortest_path_tree: HashMap::new(),
            settled: HashSet::new(),
            tree_order: Vec::new(),
            queue: PriorityQueue::with_comparator(by_priority as Comparator<QueueEntry>),
            ebuf: Vec::new(),
        }
    }
}

impl CostSearch {
    pub(crate) fn run<N, H>(
        &mut self,
        graph: &Graph<N>,
        source: usize,
        target: Option<usize>,
        heuristic: &H,
        config: &SearchConfig,
    ) where
        N: GraphNode,
        H: Heuristic<N> + ?Sized,
    {
        self.clear();
        let mut ebuf = std::mem::take(&mut self.ebuf);

        let target_exists = target.is_none_or(|t| graph.has_node(t));
        if target_exists && graph.has_node(source) {
            self.cost.insert(source, 0.0);
            self.queue.push(QueueEntry {
                priority: 0.0,
                index: source,
            });
        }

        self.found = 'search: loop {
            let Some(QueueEntry { index: node, .. }) = self.queue.pop() else {
                break 'search false;
            };

            // Stale duplicate of a node settled through a cheaper entry.
            if !self.settled.insert(node) {
                continue;
            }
            if let Some(edge) = self.search_frontier.remove(&node) {
                self.shortest_path_tree.insert(node, edge);
                self.tree_order.push(edge);
            }

            if Some(node) == target {
                break 'search true;
            }

            if config.exhausted_by(self.expansions) {
                self.exhausted = true;
                break 'search false;
            }
            self.expansions += 1;

            let base = self.cost.get(&node).copied().unwrap_or(0.0);
            graph.edges_of_node(node, &mut ebuf);
            for edge in ebuf.iter() {
                if self.settled.contains(&edge.to) || !graph.has_node(edge.to) {
                    continue;
                }
                let g = base + edge.cost;
                let improves = self.cost.get(&edge.to).is_none_or(|&best| g < best);
                if !improves {
                    continue;
                }
                self.cost.insert(edge.to, g);
                self.search_frontier.insert(edge.to, *edge);

                let priority = match target {
                    Some(t) => g + heuristic.estimate(graph, edge.to, t),
                    None => g,
                };
                self.queue.push(QueueEntry {
                    priority,
                    index: edge.to,
                });
            }
        };

        self.ebuf = ebuf;
    }

    /// Path from `source` to `target` through the settled tree.
    pub(crate) fn path(&self, source: usize, target: Option<usize>) -> Vec<usize> {
        let Some(target) = target else {
            return Vec::new();
        };
        if !self.found {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while current != source {
            let Some(edge) = self.shortest_path_tree.get(&current) else {
                return Vec::new();
            };
            current = edge.from;
            path.push(current);
        }
        path.reverse();
        path
    }

    pub(crate) fn search_tree(&self) -> Vec<Edge> {
        self.tree_order.clone()
    }

    /// Final cost of a settled node.
    pub(crate) fn settled_cost(&self, index: usize) -> Option<f64> {
        if self.settled.contains(&index) {
            self.cost.get(&index).copied()
        } else {
            None
        }
    }

    pub(crate) fn clear(&mut self) {
        self.found = false;
        self.exhausted = false;
        self.expansions = 0;
        self.cost.clear();
        self.search_frontier.clear();
        self.shortest_path_tree.clear();
        self.settled.clear();
        self.tree_order.clear();
        self.queue.clear();
    }
}
