//! Minimal graph adapter traits.
//!
//! The sampler only talks to a graph through [`Graph`] (read-only queries) and
//! [`InducedSubgraph`] (materializing the result). Node ids are dense `0..node_count`.
//! Graphs are treated as undirected and unweighted.

use crate::error::{Error, Result};
use rand::prelude::*;

pub trait Graph {
    fn node_count(&self) -> usize;

    /// Neighbors of `node`. Every returned id must be `< node_count()`.
    fn neighbors(&self, node: usize) -> Vec<usize>;

    fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    fn has_neighbors(&self, node: usize) -> bool {
        self.degree(node) > 0
    }

    fn contains(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Pick one neighbor of `node` uniformly at random.
    ///
    /// Exactly one draw over the neighbor list. Returns `None` for a node without
    /// neighbors; callers are expected to check [`Graph::has_neighbors`] first.
    fn random_neighbor<R: Rng + ?Sized>(&self, node: usize, rng: &mut R) -> Option<usize> {
        self.neighbors(node).choose(rng).copied()
    }
}

/// A graph that can materialize the subgraph induced by a node set.
pub trait InducedSubgraph: Graph {
    type Subgraph;

    /// Build the graph containing exactly `nodes` and every edge of `self` between them.
    ///
    /// `nodes` is sorted, deduplicated, and every id is `< node_count()`.
    fn induced_subgraph(&self, nodes: &[usize]) -> Self::Subgraph;
}

/// Degree of `node`, or [`Error::NodeNotFound`] if the graph has no such node.
pub fn checked_degree<G: Graph + ?Sized>(graph: &G, node: usize) -> Result<usize> {
    if !graph.contains(node) {
        return Err(Error::NodeNotFound(node));
    }
    Ok(graph.degree(node))
}

#[cfg(feature = "petgraph")]
impl<N, E, Ix> Graph for petgraph::Graph<N, E, petgraph::Undirected, Ix>
where
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect()
    }
    fn degree(&self, node: usize) -> usize {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).count()
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ix> InducedSubgraph for petgraph::Graph<N, E, petgraph::Undirected, Ix>
where
    N: Clone,
    E: Clone,
    Ix: petgraph::graph::IndexType,
{
    type Subgraph = petgraph::Graph<N, E, petgraph::Undirected, Ix>;

    /// `filter_map` keeps node order, so local index `i` is the `i`-th smallest kept id.
    fn induced_subgraph(&self, nodes: &[usize]) -> Self::Subgraph {
        self.filter_map(
            |idx, weight| nodes.binary_search(&idx.index()).ok().map(|_| weight.clone()),
            |_, weight| Some(weight.clone()),
        )
    }
}
