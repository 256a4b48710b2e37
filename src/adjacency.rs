//! Built-in undirected adjacency-list backend.
//!
//! Neighbor lists are sorted and deduplicated, which makes edge lookups a binary search
//! and lets a walk step borrow the list instead of allocating.

use crate::graph::{Graph, InducedSubgraph};
use rand::prelude::*;

/// Undirected, unweighted graph over dense node ids `0..n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    adj: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Build from an undirected edge list.
    ///
    /// Edges with an endpoint `>= n` are ignored. Duplicate edges collapse; a self loop
    /// `(u, u)` is stored once in `u`'s list.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u >= n || v >= n {
                continue;
            }
            adj[u].push(v);
            if u != v {
                adj[v].push(u);
            }
        }
        Self::normalized(adj)
    }

    /// Build from per-node neighbor lists, adding the reverse of every listed edge.
    pub fn from_neighbor_lists(lists: Vec<Vec<usize>>) -> Self {
        let n = lists.len();
        let edges: Vec<(usize, usize)> = lists
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.iter().map(move |&v| (u, v)))
            .collect();
        Self::from_edges(n, &edges)
    }

    fn normalized(mut adj: Vec<Vec<usize>>) -> Self {
        for nbrs in &mut adj {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Self { adj }
    }

    pub fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors_ref(u).binary_search(&v).is_ok()
    }

    /// Number of undirected edges (a self loop counts once).
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Undirected edges as `(u, v)` with `u <= v`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.iter().filter(move |&&v| u <= v).map(move |&v| (u, v)))
    }
}

impl Graph for AdjacencyList {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors_ref(node).to_vec()
    }
    fn degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
    fn random_neighbor<R: Rng + ?Sized>(&self, node: usize, rng: &mut R) -> Option<usize> {
        self.neighbors_ref(node).choose(rng).copied()
    }
}

impl InducedSubgraph for AdjacencyList {
    type Subgraph = Subgraph;

    fn induced_subgraph(&self, nodes: &[usize]) -> Subgraph {
        let mut edges = Vec::new();
        for (local_u, &u) in nodes.iter().enumerate() {
            for &v in self.neighbors_ref(u) {
                if v < u {
                    continue;
                }
                if let Ok(local_v) = nodes.binary_search(&v) {
                    edges.push((local_u, local_v));
                }
            }
        }
        Subgraph {
            graph: AdjacencyList::from_edges(nodes.len(), &edges),
            nodes: nodes.to_vec(),
        }
    }
}

/// An induced subgraph of an [`AdjacencyList`].
///
/// Nodes are relabeled to `0..k` in ascending order of their original ids; the
/// mapping is kept so results can be reported in the parent's id space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    graph: AdjacencyList,
    nodes: Vec<usize>,
}

impl Subgraph {
    /// The subgraph over local ids.
    pub fn graph(&self) -> &AdjacencyList {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Original ids, sorted ascending; index `i` is local id `i`.
    pub fn original_nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn original_id(&self, local: usize) -> Option<usize> {
        self.nodes.get(local).copied()
    }

    pub fn local_id(&self, original: usize) -> Option<usize> {
        self.nodes.binary_search(&original).ok()
    }

    /// Edges in the parent's id space, `(u, v)` with `u <= v`, ascending.
    pub fn original_edges(&self) -> Vec<(usize, usize)> {
        self.graph.edges().map(|(u, v)| (self.nodes[u], self.nodes[v])).collect()
    }

    pub fn into_parts(self) -> (AdjacencyList, Vec<usize>) {
        (self.graph, self.nodes)
    }
}
