//! Criterion benchmarks for the u-moea core.
//!
//! Uses random ZDT1 populations to measure ranking, reduction, and fitness
//! assignment independent of any driver.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use u_moea::fitness::{FitnessEvaluator, HypervolumeFitnessEvaluator};
use u_moea::model::{Problem, Solution};
use u_moea::sorting::{nondominated_prune, nondominated_sort, nondominated_truncate};

// ===========================================================================
// ZDT1: f1 = x0, f2 = g · (1 - sqrt(x0 / g)), g = 1 + 9 · mean(x1..)
// ===========================================================================

fn zdt1(nvars: usize) -> Arc<Problem> {
    Arc::new(Problem::new(nvars, 2, 0, |x: &[f64]| {
        let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (x.len() - 1) as f64;
        vec![x[0], g * (1.0 - (x[0] / g).sqrt())]
    }))
}

fn random_population(size: usize, seed: u64) -> Vec<Solution> {
    let problem = zdt1(30);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let x: Vec<f64> = (0..problem.variable_count())
                .map(|_| rng.random_range(0.0..1.0))
                .collect();
            let mut s = Solution::new(&problem)
                .with_variables(&x)
                .expect("variable count matches");
            s.evaluate().expect("zdt1 returns two objectives");
            s
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_nondominated_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("nondominated_sort");
    group.sample_size(10);

    for &n in &[50, 100, 200] {
        let population = random_population(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &population, |b, p| {
            b.iter_batched(
                || p.clone(),
                |mut p| {
                    nondominated_sort(black_box(&mut p));
                    black_box(p)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");
    group.sample_size(10);

    for &n in &[100, 200] {
        let mut population = random_population(n, 7);
        nondominated_sort(&mut population);

        group.bench_with_input(BenchmarkId::new("prune", n), &population, |b, p| {
            b.iter_batched(
                || p.clone(),
                |p| black_box(nondominated_prune(p, n / 2)),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("truncate", n), &population, |b, p| {
            b.iter_batched(
                || p.clone(),
                |p| black_box(nondominated_truncate(p, n / 2)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_hypervolume_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypervolume_fitness");
    group.sample_size(10);

    for &n in &[50, 100] {
        let population = random_population(n, 3);
        group.bench_with_input(BenchmarkId::new("evaluate", n), &population, |b, p| {
            b.iter_batched(
                || p.clone(),
                |mut p| {
                    let mut evaluator = HypervolumeFitnessEvaluator::default();
                    evaluator.evaluate(&mut p).expect("objective ranges are not degenerate");
                    black_box(p)
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("select_half", n), &population, |b, p| {
            b.iter_batched(
                || p.clone(),
                |mut p| {
                    let mut evaluator = HypervolumeFitnessEvaluator::default();
                    evaluator.evaluate(&mut p).expect("objective ranges are not degenerate");
                    while p.len() > n / 2 {
                        let worst = p
                            .iter()
                            .enumerate()
                            .max_by(|(_, a), (_, b)| a.fitness.total_cmp(&b.fitness))
                            .map(|(i, _)| i)
                            .unwrap_or(0);
                        evaluator.remove(&mut p, worst).expect("index is in range");
                    }
                    black_box(p)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_nondominated_sort,
    bench_reduction,
    bench_hypervolume_fitness
);
criterion_main!(benches);
