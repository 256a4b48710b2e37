//! Independent multi-run sampling.
//!
//! Run `i` uses the sampler's seed shifted by `i` and owns its own walk state and RNG,
//! so outputs depend only on `(graph, config, i)`, never on scheduling.

use crate::error::Result;
use crate::graph::InducedSubgraph;
use crate::mh_walk::{MetropolisHastingsSampler, SampleRun};

pub fn sample_batch<G: InducedSubgraph>(
    sampler: &MetropolisHastingsSampler,
    graph: &G,
    runs: usize,
    start_node: Option<usize>,
    max_stall_iterations: usize,
) -> Result<Vec<SampleRun<G::Subgraph>>> {
    (0..runs)
        .map(|i| sampler.for_run(i).sample_run(graph, start_node, max_stall_iterations))
        .collect()
}

/// Parallel version of [`sample_batch`]; output is identical for any thread count.
#[cfg(feature = "parallel")]
pub fn sample_batch_parallel<G>(
    sampler: &MetropolisHastingsSampler,
    graph: &G,
    runs: usize,
    start_node: Option<usize>,
    max_stall_iterations: usize,
) -> Result<Vec<SampleRun<G::Subgraph>>>
where
    G: InducedSubgraph + Sync,
    G::Subgraph: Send,
{
    use rayon::prelude::*;

    (0..runs)
        .into_par_iter()
        .map(|i| sampler.for_run(i).sample_run(graph, start_node, max_stall_iterations))
        .collect()
}
