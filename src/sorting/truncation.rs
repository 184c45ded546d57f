//! Population reduction.
//!
//! All functions take a population by value and return the survivors.
//! `nondominated_split`, `nondominated_prune`, and `nondominated_truncate`
//! expect `rank` and `crowding_distance` to have been assigned by
//! [`nondominated_sort`](super::nondominated_sort).

use super::nondominated::crowding_distance;
use crate::model::Solution;
use log::debug;
use std::collections::BTreeMap;

/// Separates the fronts that fit entirely within `size` from the first
/// front that does not.
///
/// Walks ranks 0, 1, 2, ... adding whole fronts while the running total
/// stays within `size`. Returns `(kept, boundary)` where `boundary` is the
/// front that would overflow. `boundary` is empty when the fronts land
/// exactly on `size` or the population is exhausted.
///
/// Solutions keep their population order within each front. A gap in the
/// ranks ends the walk, so solutions past a missing rank are dropped.
pub fn nondominated_split(solutions: Vec<Solution>, size: usize) -> (Vec<Solution>, Vec<Solution>) {
    let total = solutions.len();
    let mut fronts: BTreeMap<usize, Vec<Solution>> = BTreeMap::new();
    for solution in solutions {
        fronts.entry(solution.rank).or_default().push(solution);
    }

    let mut kept = Vec::with_capacity(size.min(total));
    for (expected, (rank, front)) in fronts.into_iter().enumerate() {
        if rank != expected || kept.len() >= size {
            break;
        }
        if kept.len() + front.len() <= size {
            kept.extend(front);
        } else {
            return (kept, front);
        }
    }

    (kept, Vec::new())
}

/// Reduces a ranked population to `size`, recomputing crowding distance
/// after every removal from the boundary front.
///
/// More accurate than [`nondominated_truncate`] and more expensive:
/// O(k²) crowding evaluations for k removals.
pub fn nondominated_prune(solutions: Vec<Solution>, size: usize) -> Vec<Solution> {
    let (mut kept, mut boundary) = nondominated_split(solutions, size);

    let mut removed = 0usize;
    while kept.len() + boundary.len() > size {
        crowding_distance(&mut boundary);
        boundary.sort_by(|a, b| a.crowding_distance.total_cmp(&b.crowding_distance));
        boundary.remove(0);
        removed += 1;
    }
    if removed > 0 {
        debug!("pruned {removed} solutions from the boundary front");
    }

    kept.extend(boundary);
    kept
}

/// Reduces a ranked population to `size` in one pass.
///
/// Sorts by rank ascending, then crowding distance descending, and keeps the
/// first `size`. Crowding distances are not recomputed as members drop out.
pub fn nondominated_truncate(mut solutions: Vec<Solution>, size: usize) -> Vec<Solution> {
    solutions.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| b.crowding_distance.total_cmp(&a.crowding_distance))
    });
    solutions.truncate(size);
    solutions
}

/// Keeps the `size` best solutions by a fitness accessor.
///
/// With `larger_preferred` the result is in descending fitness order,
/// otherwise ascending.
///
/// ```
/// # use std::sync::Arc;
/// # use u_moea::model::{Problem, Solution};
/// use u_moea::sorting::truncate_by_fitness;
///
/// # let problem = Arc::new(Problem::new(1, 1, 0, |v: &[f64]| v.to_vec()));
/// let population: Vec<Solution> = [0.3, 0.9, 0.1, 0.5]
///     .iter()
///     .map(|&f| {
///         let mut s = Solution::new(&problem);
///         s.fitness = f;
///         s
///     })
///     .collect();
///
/// let best = truncate_by_fitness(population, 2, true, |s| s.fitness);
/// assert_eq!(best[0].fitness, 0.9);
/// assert_eq!(best[1].fitness, 0.5);
/// ```
pub fn truncate_by_fitness<F>(
    mut solutions: Vec<Solution>,
    size: usize,
    larger_preferred: bool,
    fitness: F,
) -> Vec<Solution>
where
    F: Fn(&Solution) -> f64,
{
    solutions.sort_by(|a, b| {
        let (fa, fb) = (fitness(a), fitness(b));
        if larger_preferred {
            fb.total_cmp(&fa)
        } else {
            fa.total_cmp(&fb)
        }
    });
    solutions.truncate(size);
    solutions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::nondominated_sort;
    use crate::test_utils::{identity_problem, objectives_of, population, solution};
    use proptest::prelude::*;

    /// Front 0: 4 points, front 1: 3 points, front 2: 1 point.
    fn ranked() -> Vec<Solution> {
        let mut pop = population(&[
            &[0.0, 6.0],
            &[1.0, 4.0],
            &[2.0, 3.0],
            &[6.0, 0.0],
            &[1.0, 7.0],
            &[3.0, 4.0],
            &[7.0, 1.0],
            &[8.0, 8.0],
        ]);
        nondominated_sort(&mut pop);
        pop
    }

    // ---- split ----

    #[test]
    fn test_split_boundary_front() {
        let (kept, boundary) = nondominated_split(ranked(), 5);
        assert_eq!(kept.len(), 4);
        assert!(kept.iter().all(|s| s.rank == 0));
        assert_eq!(boundary.len(), 3);
        assert!(boundary.iter().all(|s| s.rank == 1));
    }

    #[test]
    fn test_split_exact_fit() {
        let (kept, boundary) = nondominated_split(ranked(), 7);
        assert_eq!(kept.len(), 7);
        assert!(boundary.is_empty());
    }

    #[test]
    fn test_split_exhausted() {
        let (kept, boundary) = nondominated_split(ranked(), 100);
        assert_eq!(kept.len(), 8);
        assert!(boundary.is_empty());
    }

    #[test]
    fn test_split_zero() {
        let (kept, boundary) = nondominated_split(ranked(), 0);
        assert!(kept.is_empty());
        assert!(boundary.is_empty());
    }

    #[test]
    fn test_split_sparse_ranks() {
        let p = identity_problem(2);
        let mut pop = vec![
            solution(&p, &[0.0, 1.0]),
            solution(&p, &[1.0, 0.0]),
            solution(&p, &[2.0, 2.0]),
        ];
        pop[2].rank = usize::MAX;
        let (kept, boundary) = nondominated_split(pop, 3);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|s| s.rank == 0));
        assert!(boundary.is_empty());
    }

    #[test]
    fn test_split_stops_at_missing_rank() {
        let p = identity_problem(2);
        let mut pop = vec![
            solution(&p, &[0.0, 1.0]),
            solution(&p, &[1.0, 0.0]),
            solution(&p, &[2.0, 2.0]),
            solution(&p, &[3.0, 3.0]),
        ];
        pop[2].rank = 1;
        pop[3].rank = 3;
        let (kept, boundary) = nondominated_split(pop, 10);
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|s| s.rank <= 1));
        assert!(boundary.is_empty());
    }

    // ---- prune ----

    #[test]
    fn test_prune_size() {
        let pruned = nondominated_prune(ranked(), 5);
        assert_eq!(pruned.len(), 5);
        assert_eq!(pruned.iter().filter(|s| s.rank == 0).count(), 4);
        assert_eq!(pruned.iter().filter(|s| s.rank == 1).count(), 1);
    }

    #[test]
    fn test_prune_drops_most_crowded() {
        let p = identity_problem(2);
        let mut pop = vec![
            solution(&p, &[0.0, 10.0]),
            solution(&p, &[4.9, 5.1]),
            solution(&p, &[5.0, 5.0]),
            solution(&p, &[5.1, 4.9]),
            solution(&p, &[10.0, 0.0]),
        ];
        nondominated_sort(&mut pop);
        let pruned = nondominated_prune(pop, 3);
        let mut kept = objectives_of(&pruned);
        kept.sort_by(|a, b| a[0].total_cmp(&b[0]));
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0], vec![0.0, 10.0]);
        assert_eq!(kept[2], vec![10.0, 0.0]);
        // one of the clustered middle points survives
        assert!((kept[1][0] - 5.0).abs() <= 0.1 + 1e-12);
    }

    fn uneven_front() -> Vec<Solution> {
        let mut pop = population(&[
            &[0.0, 10.0],
            &[1.0, 9.0],
            &[1.1, 8.9],
            &[5.0, 5.0],
            &[5.2, 4.8],
            &[10.0, 0.0],
        ]);
        nondominated_sort(&mut pop);
        pop
    }

    fn sorted_objectives(solutions: &[Solution]) -> Vec<Vec<f64>> {
        let mut objectives = objectives_of(solutions);
        objectives.sort_by(|a, b| a[0].total_cmp(&b[0]));
        objectives
    }

    #[test]
    fn test_prune_recomputes_crowding_after_each_removal() {
        // once (1, 9) is gone, (1.1, 8.9) spans the gap up to (5, 5)
        let pruned = sorted_objectives(&nondominated_prune(uneven_front(), 4));
        assert_eq!(
            pruned,
            vec![vec![0.0, 10.0], vec![1.1, 8.9], vec![5.2, 4.8], vec![10.0, 0.0]]
        );

        let truncated = sorted_objectives(&nondominated_truncate(uneven_front(), 4));
        assert_eq!(
            truncated,
            vec![vec![0.0, 10.0], vec![5.0, 5.0], vec![5.2, 4.8], vec![10.0, 0.0]]
        );
    }

    // ---- truncate ----

    #[test]
    fn test_truncate_orders_by_rank_then_crowding() {
        let truncated = nondominated_truncate(ranked(), 6);
        assert_eq!(truncated.len(), 6);
        assert!(truncated.windows(2).all(|w| w[0].rank <= w[1].rank));
        for w in truncated.windows(2).filter(|w| w[0].rank == w[1].rank) {
            assert!(w[0].crowding_distance >= w[1].crowding_distance);
        }
    }

    #[test]
    fn test_truncate_larger_than_population() {
        assert_eq!(nondominated_truncate(ranked(), 20).len(), 8);
    }

    // ---- truncate_by_fitness ----

    #[test]
    fn test_truncate_by_fitness_smaller_preferred() {
        let p = identity_problem(1);
        let pop: Vec<Solution> = [3.0, 1.0, 2.0]
            .iter()
            .map(|&f| {
                let mut s = solution(&p, &[0.0]);
                s.fitness = f;
                s
            })
            .collect();
        let kept = truncate_by_fitness(pop, 2, false, |s| s.fitness);
        assert_eq!(kept.iter().map(|s| s.fitness).collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_truncate_by_custom_accessor() {
        let pop = population(&[&[3.0], &[1.0], &[2.0]]);
        let kept = truncate_by_fitness(pop, 1, true, |s| s.objectives[0]);
        assert_eq!(kept[0].objectives[0], 3.0);
    }

    proptest! {
        #[test]
        fn prop_truncate_length_and_rank_order(
            points in prop::collection::vec(prop::collection::vec(0.0f64..10.0, 2), 1..30),
            size in 0usize..40,
        ) {
            let p = identity_problem(2);
            let mut pop: Vec<Solution> = points.iter().map(|x| solution(&p, x)).collect();
            nondominated_sort(&mut pop);
            let n = pop.len();
            let truncated = nondominated_truncate(pop, size);
            prop_assert_eq!(truncated.len(), size.min(n));
            prop_assert!(truncated.windows(2).all(|w| w[0].rank <= w[1].rank));
        }

        #[test]
        fn prop_prune_length(
            points in prop::collection::vec(prop::collection::vec(0.0f64..10.0, 2), 1..30),
            size in 0usize..40,
        ) {
            let p = identity_problem(2);
            let mut pop: Vec<Solution> = points.iter().map(|x| solution(&p, x)).collect();
            nondominated_sort(&mut pop);
            let n = pop.len();
            prop_assert_eq!(nondominated_prune(pop, size).len(), size.min(n));
        }

        #[test]
        fn prop_truncate_by_fitness_descending(
            values in prop::collection::vec(-100.0f64..100.0, 1..30),
            size in 0usize..40,
        ) {
            let p = identity_problem(1);
            let pop: Vec<Solution> = values
                .iter()
                .map(|&f| {
                    let mut s = solution(&p, &[0.0]);
                    s.fitness = f;
                    s
                })
                .collect();
            let kept = truncate_by_fitness(pop, size, true, |s| s.fitness);
            prop_assert_eq!(kept.len(), size.min(values.len()));
            prop_assert!(kept.windows(2).all(|w| w[0].fitness >= w[1].fitness));

            let mut sorted = values.clone();
            sorted.sort_by(|a, b| b.total_cmp(a));
            let expected: Vec<f64> = sorted.into_iter().take(size).collect();
            prop_assert_eq!(kept.iter().map(|s| s.fitness).collect::<Vec<_>>(), expected);
        }
    }
}
