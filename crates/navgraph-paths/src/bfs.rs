use std::collections::{HashMap, HashSet, VecDeque};

use crate::config::SearchConfig;
use crate::dfs::walk_route;
use crate::graph::Graph;
use crate::node::Edge;
use crate::traits::GraphNode;

/// Breadth-first search over a [`Graph`], ignoring edge costs.
///
/// Nodes are marked visited when first discovered, which bounds the queue
/// by the node count and makes the returned path minimal in edge count.
#[derive(Debug)]
pub struct Bfs<'g, N> {
    graph: &'g Graph<N>,
    pub source: usize,
    pub target: Option<usize>,
    config: SearchConfig,
    found: bool,
    exhausted: bool,
    expansions: usize,
    route: HashMap<usize, usize>,
    visited: HashSet<usize>,
    spanning_tree: Vec<Edge>,
    queue: VecDeque<Edge>,
    ebuf: Vec<Edge>,
}

impl<'g, N: GraphNode> Bfs<'g, N> {
    pub fn new(graph: &'g Graph<N>, source: usize, target: usize) -> Self {
        Self::build(graph, source, Some(target))
    }

    /// Traversal with no target; see [`Dfs::explore`](crate::Dfs::explore).
    pub fn explore(graph: &'g Graph<N>, source: usize) -> Self {
        Self::build(graph, source, None)
    }

    fn build(graph: &'g Graph<N>, source: usize, target: Option<usize>) -> Self {
        Self {
            graph,
            source,
            target,
            config: SearchConfig::default(),
            found: false,
            exhausted: false,
            expansions: 0,
            route: HashMap::new(),
            visited: HashSet::new(),
            spanning_tree: Vec::new(),
            queue: VecDeque::new(),
            ebuf: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Run the search, discarding any previous result. Stops as soon as an
    /// edge into the target is dequeued.
    pub fn search(&mut self) -> &mut Self {
        self.clear();
        let mut queue = std::mem::take(&mut self.queue);
        let mut ebuf = std::mem::take(&mut self.ebuf);
        queue.clear();

        let target_exists = self.target.is_none_or(|t| self.graph.has_node(t));
        if target_exists && self.graph.has_node(self.source) {
            queue.push_back(Edge::new(self.source, self.source, 0.0));
            self.visited.insert(self.source);
        }

        self.found = 'search: loop {
            let Some(edge) = queue.pop_front() else {
                break 'search false;
            };

            self.route.insert(edge.to, edge.from);
            if edge.to != self.source {
                self.spanning_tree.push(edge);
            }

            if Some(edge.to) == self.target {
                break 'search true;
            }

            if self.config.exhausted_by(self.expansions) {
                self.exhausted = true;
                break 'search false;
            }
            self.expansions += 1;

            self.graph.edges_of_node(edge.to, &mut ebuf);
            for e in ebuf.iter() {
                // Mark on discovery so each node is queued at most once.
                if self.graph.has_node(e.to) && self.visited.insert(e.to) {
                    queue.push_back(*e);
                }
            }
        };

        self.queue = queue;
        self.ebuf = ebuf;

        if self.exhausted {
            log::warn!(
                "bfs {} -> {:?}: expansion budget of {} exhausted",
                self.source,
                self.target,
                self.expansions
            );
        }
        log::debug!(
            "bfs {} -> {:?}: found={} after {} expansions",
            self.source,
            self.target,
            self.found,
            self.expansions
        );
        self
    }

    #[inline]
    pub fn found(&self) -> bool {
        self.found
    }

    #[inline]
    pub fn budget_exhausted(&self) -> bool {
        self.exhausted
    }

    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Node indices from source to target with the fewest edges, or empty
    /// if nothing was found.
    pub fn path(&self) -> Vec<usize> {
        match self.target {
            Some(target) if self.found => walk_route(&self.route, self.source, target),
            _ => Vec::new(),
        }
    }

    /// Edges used to discover nodes, in dequeue order.
    pub fn search_tree(&self) -> Vec<Edge> {
        self.spanning_tree.clone()
    }

    /// Reset bookkeeping for another search. `source` and `target` are kept.
    pub fn clear(&mut self) {
        self.found = false;
        self.exhausted = false;
        self.expansions = 0;
        self.route.clear();
        self.visited.clear();
        self.spanning_tree.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use rand::RngExt;

    fn graph(n: usize, digraph: bool, edges: &[(usize, usize)]) -> Graph {
        let mut g = if digraph { Graph::directed() } else { Graph::new() };
        for i in 0..n {
            g.add_node(Node::new(i));
        }
        for &(a, b) in edges {
            g.add_edge(Edge::new(a, b, 1.0)).unwrap();
        }
        g
    }

    #[test]
    fn finds_fewest_edges_path() {
        // Long way round 0-1-2-3-4, short cut 0-5-4.
        let g = graph(6, false, &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 4)]);
        let mut bfs = Bfs::new(&g, 0, 4);
        assert!(bfs.search().found());
        assert_eq!(bfs.path(), vec![0, 5, 4]);
    }

    #[test]
    fn ignores_edge_costs() {
        let mut g: Graph = Graph::new();
        for i in 0..3 {
            g.add_node(Node::new(i));
        }
        g.add_edge(Edge::new(0, 2, 100.0)).unwrap();
        g.add_edge(Edge::new(0, 1, 1.0)).unwrap();
        g.add_edge(Edge::new(1, 2, 1.0)).unwrap();
        let mut bfs = Bfs::new(&g, 0, 2);
        bfs.search();
        assert_eq!(bfs.path(), vec![0, 2]);
    }

    #[test]
    fn cycle_terminates() {
        let g = graph(4, true, &[(0, 1), (1, 2), (2, 0)]);
        let mut bfs = Bfs::new(&g, 1, 0);
        assert!(bfs.search().found());
        assert_eq!(bfs.path(), vec![1, 2, 0]);

        let mut bfs = Bfs::new(&g, 0, 3);
        assert!(!bfs.search().found());
        assert!(bfs.path().is_empty());
    }

    #[test]
    fn directed_edges_are_respected() {
        let g = graph(3, true, &[(0, 1), (1, 2)]);
        let mut bfs = Bfs::new(&g, 2, 0);
        assert!(!bfs.search().found());
    }

    #[test]
    fn explore_reaches_every_connected_node_once() {
        let g = graph(6, false, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        let mut bfs = Bfs::explore(&g, 0);
        bfs.search();
        let tree = bfs.search_tree();
        assert_eq!(tree.len(), 4);
        let mut reached: Vec<usize> = tree.iter().map(|e| e.to).collect();
        reached.sort_unstable();
        assert_eq!(reached, vec![1, 2, 3, 4]);
    }

    #[test]
    fn clear_then_search_again() {
        let g = graph(3, false, &[(0, 1), (1, 2)]);
        let mut bfs = Bfs::new(&g, 0, 2);
        bfs.search();
        let first = bfs.path();
        bfs.clear();
        assert!(bfs.path().is_empty());
        bfs.search();
        assert_eq!(bfs.path(), first);
    }

    #[test]
    fn budget_stops_search() {
        let g = graph(5, false, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let mut bfs = Bfs::new(&g, 0, 4).with_config(SearchConfig::bounded(1));
        bfs.search();
        assert!(bfs.budget_exhausted());
        assert!(!bfs.found());
    }

    #[test]
    fn absent_or_removed_target_is_not_found() {
        let mut g = graph(3, true, &[(0, 1), (1, 2)]);
        g.remove_node(2);
        let mut bfs = Bfs::new(&g, 0, 2);
        assert!(!bfs.search().found());
        assert!(bfs.path().is_empty());

        let mut bfs = Bfs::new(&g, 0, 9);
        assert!(!bfs.search().found());
        let mut bfs = Bfs::new(&g, 9, 9);
        assert!(!bfs.search().found());
    }

    /// Reference hop counts by repeated relaxation.
    fn hop_distances(g: &Graph, n: usize, source: usize) -> Vec<Option<usize>> {
        let mut dist = vec![None; n];
        dist[source] = Some(0);
        for _ in 0..n {
            for a in 0..n {
                let Some(d) = dist[a] else { continue };
                for e in g.edges(a) {
                    if dist[e.to].is_none_or(|old| d + 1 < old) {
                        dist[e.to] = Some(d + 1);
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn random_graphs_give_minimum_hop_paths() {
        let mut rng = rand::rng();
        for _ in 0..30 {
            let n = rng.random_range(2..15usize);
            let mut edges = Vec::new();
            for _ in 0..rng.random_range(0..3 * n) {
                edges.push((rng.random_range(0..n), rng.random_range(0..n)));
            }
            let g = graph(n, rng.random_range(0..2u32) == 0, &edges);
            let source = rng.random_range(0..n);
            let dist = hop_distances(&g, n, source);

            for target in 0..n {
                let mut bfs = Bfs::new(&g, source, target);
                bfs.search();
                assert_eq!(bfs.found(), dist[target].is_some());
                let path = bfs.path();
                match dist[target] {
                    Some(d) => {
                        assert_eq!(path.len(), d + 1);
                        assert_eq!(path.first(), Some(&source));
                        assert_eq!(path.last(), Some(&target));
                        for w in path.windows(2) {
                            assert!(g.has_edge(w[0], w[1]));
                        }
                    }
                    None => assert!(path.is_empty()),
                }
            }
        }
    }
}
