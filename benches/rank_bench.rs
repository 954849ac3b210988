//! Criterion benchmarks for u-pareto ranking.
//!
//! Uses random populations on 2 and 3 objectives to measure the O(m * n²)
//! sort and the full ranking pass.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_pareto::individual::{Candidate, IndividualId, ObjectiveResults};
use u_pareto::pareto::non_dominated_sort;
use u_pareto::rank::{ParetoRanker, RankConfig, Ranker};

fn random_population(n: usize, objectives: usize, seed: u64) -> Vec<Candidate<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let results: ObjectiveResults<usize> = (0..objectives)
                .map(|o| (o, rng.random_range(0.0..1.0)))
                .collect();
            Candidate::new(IndividualId(i as u64), results)
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_non_dominated_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_dominated_sort");
    group.sample_size(20);

    for (n, m) in [(50usize, 2usize), (200, 2), (200, 3), (500, 3)] {
        let population = random_population(n, m, 42);
        group.bench_with_input(
            BenchmarkId::new(format!("m{}", m), n),
            &population,
            |b, p| b.iter(|| black_box(non_dominated_sort(black_box(p)))),
        );
    }
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("pareto_rank");
    group.sample_size(20);

    for &n in &[50, 200, 500] {
        let population = random_population(n, 3, 7);
        for parallel in [false, true] {
            let ranker = ParetoRanker::new(
                RankConfig::default()
                    .with_parallel(parallel)
                    .with_parallel_threshold(2),
            );
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, n), &population, |b, p| {
                b.iter_batched(
                    || p.clone(),
                    |mut pop| black_box(ranker.rank(&mut pop)),
                    criterion::BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_non_dominated_sort, bench_rank);
criterion_main!(benches);
