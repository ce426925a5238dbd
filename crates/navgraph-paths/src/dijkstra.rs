use crate::config::SearchConfig;
use crate::graph::Graph;
use crate::heuristic::Zero;
use crate::informed::CostSearch;
use crate::node::Edge;
use crate::traits::GraphNode;

/// Single-pair shortest path by edge cost (Dijkstra's algorithm).
///
/// Behaves exactly like [`AStar`](crate::AStar) with the [`Zero`]
/// heuristic. With no target ([`Dijkstra::explore`]) the whole
/// shortest-path tree rooted at `source` is computed.
#[derive(Debug)]
pub struct Dijkstra<'g, N> {
    graph: &'g Graph<N>,
    pub source: usize,
    pub target: Option<usize>,
    config: SearchConfig,
    state: CostSearch,
}

impl<'g, N: GraphNode> Dijkstra<'g, N> {
    pub fn new(graph: &'g Graph<N>, source: usize, target: usize) -> Self {
        Self::build(graph, source, Some(target))
    }

    /// Shortest-path tree from `source` to every reachable node.
    pub fn explore(graph: &'g Graph<N>, source: usize) -> Self {
        Self::build(graph, source, None)
    }

    fn build(graph: &'g Graph<N>, source: usize, target: Option<usize>) -> Self {
        Self {
            graph,
            source,
            target,
            config: SearchConfig::default(),
            state: CostSearch::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Run the search, discarding any previous result. Stops as soon as the
    /// target is settled.
    pub fn search(&mut self) -> &mut Self {
        self.state
            .run(self.graph, self.source, self.target, &Zero, &self.config);

        if self.state.exhausted {
            log::warn!(
                "dijkstra {} -> {:?}: expansion budget of {} exhausted",
                self.source,
                self.target,
                self.state.expansions
            );
        }
        log::debug!(
            "dijkstra {} -> {:?}: found={} after {} expansions",
            self.source,
            self.target,
            self.state.found,
            self.state.expansions
        );
        self
    }

    #[inline]
    pub fn found(&self) -> bool {
        self.state.found
    }

    #[inline]
    pub fn budget_exhausted(&self) -> bool {
        self.state.exhausted
    }

    #[inline]
    pub fn expansions(&self) -> usize {
        self.state.expansions
    }

    /// Cheapest path from source to target, or empty if nothing was found.
    pub fn path(&self) -> Vec<usize> {
        self.state.path(self.source, self.target)
    }

    /// Total cost of [`path`](Self::path), if one was found.
    pub fn path_cost(&self) -> Option<f64> {
        let target = self.target.filter(|_| self.state.found)?;
        self.state.settled_cost(target)
    }

    /// Final cost of a settled node, `None` for nodes the search did not
    /// settle.
    pub fn cost_to(&self, index: usize) -> Option<f64> {
        self.state.settled_cost(index)
    }

    /// Edges of the shortest-path tree, in the order nodes were settled.
    pub fn search_tree(&self) -> Vec<Edge> {
        self.state.search_tree()
    }

    /// Reset bookkeeping for another search. `source` and `target` are kept.
    pub fn clear(&mut self) {
        self.state.clear();
    }
}
