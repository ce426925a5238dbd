use std::collections::{HashMap, HashSet};

use crate::config::SearchConfig;
use crate::graph::Graph;
use crate::node::Edge;
use crate::traits::GraphNode;

/// Depth-first search over a [`Graph`], ignoring edge costs.
///
/// Nodes are marked visited when an edge leading to them is popped from the
/// stack, so a node may sit on the stack several times; the first pop wins
/// and later copies are discarded. The returned path is *a* path, not the
/// shortest one.
#[derive(Debug)]
pub struct Dfs<'g, N> {
    graph: &'g Graph<N>,
    pub source: usize,
    pub target: Option<usize>,
    config: SearchConfig,
    found: bool,
    exhausted: bool,
    expansions: usize,
    // child -> parent
    route: HashMap<usize, usize>,
    visited: HashSet<usize>,
    spanning_tree: Vec<Edge>,
    stack: Vec<Edge>,
    ebuf: Vec<Edge>,
}

impl<'g, N: GraphNode> Dfs<'g, N> {
    /// Prepare a search from `source` to `target`. Nothing runs until
    /// [`search`](Self::search) is called.
    pub fn new(graph: &'g Graph<N>, source: usize, target: usize) -> Self {
        Self::build(graph, source, Some(target))
    }

    /// Prepare a traversal with no target: [`search`](Self::search) visits
    /// everything reachable from `source` and
    /// [`search_tree`](Self::search_tree) yields the spanning tree.
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
            stack: Vec::new(),
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
    /// edge into the target is popped.
    pub fn search(&mut self) -> &mut Self {
        self.clear();
        let mut stack = std::mem::take(&mut self.stack);
        let mut ebuf = std::mem::take(&mut self.ebuf);
        stack.clear();

        // Seed with a self-loop on the source.
        if self.endpoints_exist() {
            stack.push(Edge::new(self.source, self.source, 0.0));
        }

        self.found = 'search: loop {
            let Some(edge) = stack.pop() else {
                break 'search false;
            };

            if !self.visited.insert(edge.to) {
                continue;
            }
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
                if !self.visited.contains(&e.to) && self.graph.has_node(e.to) {
                    stack.push(*e);
                }
            }
        };

        self.stack = stack;
        self.ebuf = ebuf;

        if self.exhausted {
            log::warn!(
                "dfs {} -> {:?}: expansion budget of {} exhausted",
                self.source,
                self.target,
                self.expansions
            );
        }
        log::debug!(
            "dfs {} -> {:?}: found={} after {} expansions",
            self.source,
            self.target,
            self.found,
            self.expansions
        );
        self
    }

    fn endpoints_exist(&self) -> bool {
        self.graph.has_node(self.source) && self.target.is_none_or(|t| self.graph.has_node(t))
    }

    #[inline]
    pub fn found(&self) -> bool {
        self.found
    }

    /// Whether the last search stopped on [`SearchConfig::max_expansions`].
    #[inline]
    pub fn budget_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of nodes whose outgoing edges were pushed.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Node indices from source to target, or empty if nothing was found.
    pub fn path(&self) -> Vec<usize> {
        match self.target {
            Some(target) if self.found => walk_route(&self.route, self.source, target),
            _ => Vec::new(),
        }
    }

    /// Edges used to discover nodes, in discovery order. The seed self-loop
    /// is not included.
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

/// Follow a child -> parent map from `target` back to `source`.
///
/// Returns an empty path if the chain is broken.
pub(crate) fn walk_route(
    route: &HashMap<usize, usize>,
    source: usize,
    target: usize,
) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        let Some(&parent) = route.get(&current) else {
            return Vec::new();
        };
        current = parent;
        path.push(current);
    }
    path.reverse();
    path
}
