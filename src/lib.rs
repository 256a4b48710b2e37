//! `mhwalk`: Metropolis-Hastings random walk node sampling.
//!
//! A walker explores a graph from a start node, accepting each proposed move with
//! probability \(\min(1, (\deg(u)/\deg(v))^\alpha)\), until it has visited a target number
//! of distinct nodes or stops making progress. The output is the subgraph induced by the
//! visited set.
//!
//! Public invariants (must not drift):
//! - **Node ids**: dense `0..n`, consistent with the graph adapter (e.g.
//!   `petgraph::NodeIndex::index()` with the `petgraph` feature).
//! - **Determinism**: a run is a pure function of `(graph, config, start_node,
//!   max_stall_iterations)`.
//! - **Fail early**: every error is raised before the first step; stalling is a normal
//!   outcome, not an error.
//! - **No shared run state**: each run owns its walk state and RNG; graphs are only read.

pub mod adjacency;
pub mod batch;
pub mod config;
pub mod error;
pub mod graph;
pub mod mh_walk;
pub mod observe;

pub use adjacency::{AdjacencyList, Subgraph};
#[cfg(feature = "parallel")]
pub use batch::sample_batch_parallel;
pub use batch::sample_batch;
pub use config::{MhrwConfig, DEFAULT_MAX_STALL_ITERATIONS};
pub use error::{Error, Result};
pub use graph::{checked_degree, Graph, InducedSubgraph};
pub use mh_walk::{
    acceptance_ratio, sample, MetropolisHastingsSampler, SampleRun, StepOutcome, Termination,
    WalkState,
};
pub use observe::{NoopObserver, WalkEvent, WalkObserver, WalkStats};
