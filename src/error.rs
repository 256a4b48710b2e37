//! Error types.

use thiserror::Error;

/// Errors surfaced by a sampling run.
///
/// Every variant is raised during validation, before the first walk step.
/// A walk that stops growing is not an error (see [`crate::Termination::Stalled`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The configuration cannot be satisfied (or is malformed) for this graph.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An explicit start node lies outside `[0, node_count)`.
    #[error("start node {node} is out of range for a graph with {node_count} nodes")]
    OutOfRange { node: usize, node_count: usize },

    /// A node id is not present in the graph.
    #[error("node not found: {0}")]
    NodeNotFound(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
