//! Graph search for autonomous agents.
//!
//! This crate provides a mutable weighted [`Graph`] of way-points and four
//! searches over it:
//!
//! - **Depth-first** ([`Dfs`]) and **breadth-first** ([`Bfs`]) traversal,
//!   which ignore edge costs
//! - **Dijkstra** ([`Dijkstra`]) cheapest-path search
//! - **A\*** ([`AStar`]) cheapest-path search guided by a [`Heuristic`]
//!
//! A search borrows the graph, runs to completion inside
//! [`search`](Dijkstra::search) and keeps its bookkeeping (and scratch
//! buffers) so it can be cleared and re-run cheaply. An unreachable target is
//! not an error: `found()` is `false` and `path()` is empty.
//!
//! ```
//! use navgraph_paths::{Dijkstra, Edge, Graph, Node};
//!
//! let mut graph = Graph::new();
//! for i in 0..4 {
//!     graph.add_node(Node::new(i));
//! }
//! graph.add_edge(Edge::new(0, 1, 1.0)).unwrap();
//! graph.add_edge(Edge::new(1, 2, 1.0)).unwrap();
//! graph.add_edge(Edge::new(0, 2, 4.0)).unwrap();
//! graph.add_edge(Edge::new(2, 3, 1.0)).unwrap();
//!
//! let mut search = Dijkstra::new(&graph, 0, 3);
//! assert!(search.search().found());
//! assert_eq!(search.path(), vec![0, 1, 2, 3]);
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`GraphNode`] | storing a node in a [`Graph`] |
//! | [`Spatial`] | the distance heuristics and [`Route::from_path`] |
//! | [`Heuristic`] | A* |

mod astar;
mod bfs;
mod config;
mod dfs;
mod dijkstra;
mod error;
mod graph;
mod heuristic;
mod informed;
mod node;
mod pqueue;
mod route;
mod traits;

pub use astar::AStar;
pub use bfs::Bfs;
pub use config::SearchConfig;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use heuristic::{Euclid, EuclidSquared, HeuristicPolicy, Manhattan, Zero};
pub use node::{Edge, NavNode, Node};
pub use pqueue::{Comparator, PriorityQueue};
pub use route::Route;
pub use traits::{GraphNode, Heuristic, Spatial};

pub use navgraph_core::Vec3;
