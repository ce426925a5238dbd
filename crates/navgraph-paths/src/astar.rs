use crate::config::SearchConfig;
use crate::graph::Graph;
use crate::heuristic::Euclid;
use crate::informed::CostSearch;
use crate::node::Edge;
use crate::traits::{GraphNode, Heuristic, Spatial};

/// Heuristic-guided shortest path search.
///
/// Relaxation runs on the true accumulated cost `G`; the queue is ordered by
/// `F = G + H` where `H` comes from the [`Heuristic`]. Settled nodes are never
/// reopened, so the path is only guaranteed as cheap as the one
/// [`Dijkstra`](crate::Dijkstra) finds when the heuristic is consistent.
/// [`Euclid`] is consistent whenever every edge costs at least the straight-line
/// distance between its endpoints.
#[derive(Debug)]
pub struct AStar<'g, N, H = Euclid> {
    graph: &'g Graph<N>,
    pub source: usize,
    pub target: Option<usize>,
    heuristic: H,
    config: SearchConfig,
    state: CostSearch,
}

impl<'g, N: GraphNode + Spatial> AStar<'g, N, Euclid> {
    /// Search guided by straight-line distance between node positions.
    pub fn new(graph: &'g Graph<N>, source: usize, target: usize) -> Self {
        Self::with_heuristic(graph, source, target, Euclid)
    }
}

impl<'g, N: GraphNode, H: Heuristic<N>> AStar<'g, N, H> {
    /// Search guided by any [`Heuristic`], e.g. [`Zero`](crate::Zero) for
    /// graphs whose nodes carry no position.
    pub fn with_heuristic(
        graph: &'g Graph<N>,
        source: usize,
        target: usize,
        heuristic: H,
    ) -> Self {
        Self {
            graph,
            source,
            target: Some(target),
            heuristic,
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

    /// Replace the heuristic used by subsequent searches.
    pub fn set_heuristic(&mut self, heuristic: H) {
        self.heuristic = heuristic;
    }

    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Run the search, discarding any previous result. Stops as soon as the
    /// target is settled.
    pub fn search(&mut self) -> &mut Self {
        self.state.run(
            self.graph,
            self.source,
            self.target,
            &self.heuristic,
            &self.config,
        );

        if self.state.exhausted {
            log::warn!(
                "astar {} -> {:?}: expansion budget of {} exhausted",
                self.source,
                self.target,
                self.state.expansions
            );
        }
        log::debug!(
            "astar {} -> {:?}: found={} after {} expansions",
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

    pub fn path(&self) -> Vec<usize> {
        self.state.path(self.source, self.target)
    }

    /// True accumulated cost (`G`) of [`path`](Self::path), if one was found.
    pub fn path_cost(&self) -> Option<f64> {
        let target = self.target.filter(|_| self.state.found)?;
        self.state.settled_cost(target)
    }

    pub fn cost_to(&self, index: usize) -> Option<f64> {
        self.state.settled_cost(index)
    }

    /// Edges of the search tree, in the order nodes were settled.
    pub fn search_tree(&self) -> Vec<Edge> {
        self.state.search_tree()
    }

    /// Reset bookkeeping for another search. `source`, `target` and the
    /// heuristic are kept.
    pub fn clear(&mut self) {
        self.state.clear();
    }
}
