use thiserror::Error;

/// Errors raised by graph mutation and route construction.
///
/// Searches never fail: an unreachable target is reported through
/// `found() == false` and an empty path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node {0} is not in the graph")]
    MissingNode(usize),

    #[error("edge {from} -> {to} has invalid cost {cost} (must be a non-negative number)")]
    InvalidCost { from: usize, to: usize, cost: f64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;
