//! Benchmarks for Metropolis-Hastings sampling.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mhwalk::{AdjacencyList, MetropolisHastingsSampler, MhrwConfig, WalkState};
use rand::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn ring(n: usize) -> AdjacencyList {
    let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    AdjacencyList::from_edges(n, &edges)
}

/// Preferential attachment graph (Barabási–Albert) with `m` edges per new node.
///
/// Heavy-tailed degrees are where the degree correction matters.
fn barabasi_albert(n: usize, m: usize, seed: u64) -> AdjacencyList {
    assert!(n >= m.max(2));
    assert!(m >= 1);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<(usize, usize)> = Vec::new();

    // Start with a clique of size m+1.
    let init = m + 1;
    let mut targets: Vec<usize> = Vec::new(); // node ids repeated by degree
    for i in 0..init {
        for j in (i + 1)..init {
            edges.push((i, j));
            targets.push(i);
            targets.push(j);
        }
    }

    for v in init..n {
        let mut chosen: Vec<usize> = Vec::with_capacity(m);
        while chosen.len() < m {
            let u = targets[rng.random_range(0..targets.len())];
            if u != v && !chosen.contains(&u) {
                chosen.push(u);
            }
        }
        for &u in &chosen {
            edges.push((u, v));
            targets.push(u);
            targets.push(v);
        }
    }
    AdjacencyList::from_edges(n, &edges)
}

/// Simple stochastic block model: `blocks` equal-sized communities.
fn sbm(n: usize, blocks: usize, p_in: f64, p_out: f64, seed: u64) -> AdjacencyList {
    assert!(blocks >= 2);
    assert!(n >= blocks);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<(usize, usize)> = Vec::new();
    let bsz = n.div_ceil(blocks);

    for i in 0..n {
        let bi = (i / bsz).min(blocks - 1);
        for j in (i + 1)..n {
            let bj = (j / bsz).min(blocks - 1);
            let p = if bi == bj { p_in } else { p_out };
            if rng.random::<f64>() < p {
                edges.push((i, j));
            }
        }
    }
    AdjacencyList::from_edges(n, &edges)
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("mh_sample");

    for n in [1_000usize, 10_000] {
        let graphs = [
            ("ring", ring(n)),
            ("ba_m4", barabasi_albert(n, 4, 123)),
            ("sbm4", sbm(n, 4, 0.02, 0.002, 123)),
        ];

        // Sample 10% of the graph.
        let cfg = MhrwConfig::new(n / 10).with_seed(123);

        for (name, g) in graphs {
            for alpha in [0.0, 1.0] {
                let sampler = MetropolisHastingsSampler::new(cfg.with_alpha(alpha));
                group.bench_with_input(
                    BenchmarkId::new(format!("{name}/alpha{alpha}"), n),
                    &n,
                    |b, _| {
                        b.iter(|| {
                            let sub = sampler.sample(black_box(&g), Some(0), 500);
                            black_box(sub.ok());
                        })
                    },
                );
            }
        }
    }

    group.finish();
}

fn bench_steps(c: &mut Criterion) {
    let g = barabasi_albert(10_000, 4, 7);
    c.bench_function("mh_step/ba_m4/10k_steps", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let mut s = WalkState::init(&g, Some(0), &mut rng).unwrap();
            for _ in 0..10_000 {
                black_box(s.step(black_box(&g), 1.0, &mut rng));
            }
            black_box(s.visited_count());
        })
    });
}

criterion_group!(benches, bench_sampling, bench_steps);
criterion_main!(benches);
