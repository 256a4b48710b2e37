//! Metropolis-Hastings random walk node sampling.
//!
//! A single walker moves between adjacent nodes. A proposed move from `u` to a uniformly
//! drawn neighbor `v` is accepted with probability
//! \(\min(1, (\deg(u) / \deg(v))^\alpha)\), which counteracts the high-degree bias of a
//! plain random walk. The run ends once `target_node_count` distinct nodes were visited
//! ([`Termination::TargetReached`]) or after `max_stall_iterations` consecutive steps
//! without a new node ([`Termination::Stalled`]). The result is the subgraph induced by
//! the visited set.
//!
//! Stall accounting only looks at the size of the visited set: a rejected proposal, an
//! accepted move onto an already-visited node, and a step from an isolated node all count
//! as "no growth".

use crate::config::{validate_stall_bound, MhrwConfig};
use crate::error::{Error, Result};
use crate::graph::{Graph, InducedSubgraph};
use crate::observe::{NoopObserver, WalkEvent, WalkObserver, WalkStats};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use tracing::{debug, trace};

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// The current node has no neighbors; nothing was proposed.
    Isolated,
    /// A neighbor was proposed and rejected; the walker stays put.
    Rejected,
    /// The walker moved onto a node it had already visited.
    Revisited,
    /// The walker moved onto a new node.
    Discovered,
}

impl StepOutcome {
    /// Whether the visited set grew.
    pub fn grew(self) -> bool {
        matches!(self, StepOutcome::Discovered)
    }

    pub fn accepted(self) -> bool {
        matches!(self, StepOutcome::Revisited | StepOutcome::Discovered)
    }
}

/// Terminal state of a sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    TargetReached,
    /// Growth stopped before the target; the sample is smaller than requested.
    Stalled,
}

/// Acceptance threshold for a move from a node of degree `current_degree` to one of
/// degree `candidate_degree`.
///
/// Values `>= 1.0` mean the move is always accepted. `alpha == 0.0` yields `1.0`.
pub fn acceptance_ratio(current_degree: usize, candidate_degree: usize, alpha: f64) -> f64 {
    (current_degree as f64 / candidate_degree as f64).powf(alpha)
}

/// Mutable state of one walk. Created per run and never shared.
///
/// Invariants: `current` is always visited; the visited set only grows.
/// Memory is proportional to the number of visited nodes, not to the graph size.
#[derive(Debug, Clone)]
pub struct WalkState {
    current: usize,
    visited: HashSet<usize>,
    order: Vec<usize>,
}

impl WalkState {
    /// Place the walker at `start`, or at a uniformly random node if `start` is `None`.
    pub fn init<G: Graph, R: Rng>(graph: &G, start: Option<usize>, rng: &mut R) -> Result<Self> {
        let n = graph.node_count();
        let current = match start {
            Some(node) if node < n => node,
            Some(node) => return Err(Error::OutOfRange { node, node_count: n }),
            None if n == 0 => {
                return Err(Error::InvalidConfiguration(
                    "cannot start a walk on an empty graph".to_string(),
                ))
            }
            None => rng.random_range(0..n),
        };
        let visited = HashSet::from([current]);
        Ok(Self { current, visited, order: vec![current] })
    }

    /// Propose one move and accept or reject it.
    ///
    /// A proposed neighbor id outside `graph` is rejected.
    pub fn step<G: Graph, R: Rng>(&mut self, graph: &G, alpha: f64, rng: &mut R) -> StepOutcome {
        let current_degree = graph.degree(self.current);
        if current_degree == 0 {
            trace!(node = self.current, "walker is on a node without neighbors");
            return StepOutcome::Isolated;
        }
        let Some(candidate) = graph.random_neighbor(self.current, rng) else {
            return StepOutcome::Isolated;
        };
        if !graph.contains(candidate) {
            trace!(node = self.current, candidate, "proposed neighbor is not a node of the graph");
            return StepOutcome::Rejected;
        }

        let ratio = acceptance_ratio(current_degree, graph.degree(candidate), alpha);
        let score: f64 = rng.random();
        if score >= ratio {
            return StepOutcome::Rejected;
        }

        self.current = candidate;
        if self.visited.insert(candidate) {
            self.order.push(candidate);
            StepOutcome::Discovered
        } else {
            StepOutcome::Revisited
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_visited(&self, node: usize) -> bool {
        self.visited.contains(&node)
    }

    /// Visited nodes in first-visit order.
    pub fn visit_order(&self) -> &[usize] {
        &self.order
    }

    /// Visited nodes, sorted ascending.
    pub fn into_nodes(self) -> Vec<usize> {
        let mut nodes = self.order;
        nodes.sort_unstable();
        nodes
    }
}

/// Result of one sampling run.
#[derive(Debug, Clone)]
pub struct SampleRun<S> {
    /// Subgraph induced by the visited nodes.
    pub subgraph: S,
    /// Visited node ids (in the input graph), sorted ascending.
    pub nodes: Vec<usize>,
    pub start: usize,
    pub termination: Termination,
    pub stats: WalkStats,
}

/// Metropolis-Hastings random walk sampler.
///
/// Holds only the immutable [`MhrwConfig`]; each call to a `sample*` method builds a fresh
/// [`WalkState`] and RNG, so one sampler can serve concurrent runs on a shared graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetropolisHastingsSampler {
    config: MhrwConfig,
}

impl MetropolisHastingsSampler {
    pub fn new(config: MhrwConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> MhrwConfig {
        self.config
    }

    /// Same configuration with the seed shifted by `run`.
    pub fn for_run(&self, run: usize) -> Self {
        let mut config = self.config;
        config.seed = config.seed.wrapping_add(run as u64);
        Self { config }
    }

    /// Sample a connected-by-walk node set and return its induced subgraph.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if the target exceeds the graph's node
    /// count and [`Error::OutOfRange`] if `start_node` is not a node of `graph`.
    pub fn sample<G: InducedSubgraph>(
        &self,
        graph: &G,
        start_node: Option<usize>,
        max_stall_iterations: usize,
    ) -> Result<G::Subgraph> {
        self.sample_run(graph, start_node, max_stall_iterations).map(|run| run.subgraph)
    }

    pub fn sample_run<G: InducedSubgraph>(
        &self,
        graph: &G,
        start_node: Option<usize>,
        max_stall_iterations: usize,
    ) -> Result<SampleRun<G::Subgraph>> {
        self.sample_run_observed(graph, start_node, max_stall_iterations, &mut NoopObserver)
    }

    pub fn sample_run_observed<G: InducedSubgraph, O: WalkObserver + ?Sized>(
        &self,
        graph: &G,
        start_node: Option<usize>,
        max_stall_iterations: usize,
        observer: &mut O,
    ) -> Result<SampleRun<G::Subgraph>> {
        validate_stall_bound(max_stall_iterations)?;
        self.config.validate_for(graph.node_count())?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut state = WalkState::init(graph, start_node, &mut rng)?;

        let target = self.config.target_node_count;
        let alpha = self.config.alpha;
        let start = state.current();
        debug!(start, target, alpha, max_stall_iterations, "starting metropolis-hastings walk");
        observer.on_event(&WalkEvent::Started { start, target });

        let mut stats = WalkStats::default();
        let mut stall_count = 0usize;
        let termination = loop {
            if state.visited_count() >= target {
                break Termination::TargetReached;
            }
            let outcome = state.step(graph, alpha, &mut rng);
            stats.record(outcome);
            observer.on_event(&WalkEvent::Step {
                outcome,
                current: state.current(),
                visited: state.visited_count(),
            });

            if outcome.grew() {
                stall_count = 0;
                continue;
            }
            stall_count += 1;
            if stall_count == max_stall_iterations {
                break Termination::Stalled;
            }
        };

        let visited = state.visited_count();
        debug!(?termination, visited, target, steps = stats.steps, "walk finished");
        observer.on_event(&WalkEvent::Finished { termination, visited });

        let nodes = state.into_nodes();
        let subgraph = graph.induced_subgraph(&nodes);
        Ok(SampleRun { subgraph, nodes, start, termination, stats })
    }
}

/// Sample `graph` with a one-off sampler built from `config`.
pub fn sample<G: InducedSubgraph>(
    graph: &G,
    config: MhrwConfig,
    start_node: Option<usize>,
    max_stall_iterations: usize,
) -> Result<G::Subgraph> {
    MetropolisHastingsSampler::new(config).sample(graph, start_node, max_stall_iterations)
}
