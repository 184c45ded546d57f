//! Non-dominated sorting and crowding distance.

use crate::archive::Archive;
use crate::dominance::{Dominance, ParetoDominance};
use crate::model::Solution;
use crate::EPSILON;
use log::debug;
use std::borrow::Borrow;

/// A population member tagged with its position, so an archive built over
/// borrowed solutions can report which indices survived.
struct Indexed<'a> {
    index: usize,
    solution: &'a Solution,
}

impl Borrow<Solution> for Indexed<'_> {
    fn borrow(&self) -> &Solution {
        self.solution
    }
}

/// Non-dominated sorting under Pareto dominance.
///
/// Assigns `rank` and `crowding_distance` to every solution in place. Rank 0
/// is the non-dominated front.
///
/// # Algorithm
///
/// 1. Offer every remaining solution to a fresh [`Archive`]; its members
///    form the next front
/// 2. Assign the current rank and the front's crowding distances
/// 3. Remove the front from the remaining set, increment the rank, repeat
///
/// # Complexity
///
/// O(m * n² * f) worst case, where f is the number of fronts.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use u_moea::model::{Problem, Solution};
/// use u_moea::sorting::nondominated_sort;
///
/// let problem = Arc::new(Problem::new(2, 2, 0, |v: &[f64]| v.to_vec()));
/// let mut population: Vec<Solution> = [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0], [4.0, 4.0]]
///     .iter()
///     .map(|p| {
///         let mut s = Solution::new(&problem).with_variables(p).unwrap();
///         s.evaluate().unwrap();
///         s
///     })
///     .collect();
///
/// nondominated_sort(&mut population);
///
/// assert_eq!(population[0].rank, 0);
/// assert_eq!(population[1].rank, 0);
/// assert_eq!(population[2].rank, 0);
/// assert_eq!(population[3].rank, 1); // dominated by (3, 3)
/// ```
pub fn nondominated_sort(solutions: &mut [Solution]) {
    nondominated_sort_with(solutions, &ParetoDominance);
}

/// Non-dominated sorting under an arbitrary relation.
///
/// Same as [`nondominated_sort`], with fronts extracted by archives using
/// `dominance`.
pub fn nondominated_sort_with<D: Dominance>(solutions: &mut [Solution], dominance: &D) {
    let mut remaining: Vec<usize> = (0..solutions.len()).collect();
    let mut in_front = vec![false; solutions.len()];
    let mut rank = 0;

    while !remaining.is_empty() {
        let front: Vec<usize> = {
            let mut archive = Archive::with_dominance(dominance);
            archive.extend(remaining.iter().map(|&index| Indexed {
                index,
                solution: &solutions[index],
            }));
            archive.iter().map(|member| member.index).collect()
        };

        for &i in &front {
            solutions[i].rank = rank;
            in_front[i] = true;
        }
        assign_crowding_distance(solutions, &front);

        debug!("front {rank}: {} solutions", front.len());
        remaining.retain(|&i| !in_front[i]);
        rank += 1;
    }
}

/// Crowding distance assignment for a single non-dominated front.
///
/// Writes `crowding_distance` on every member. Larger values mean the
/// solution sits in a sparser region of the front.
///
/// - Fronts with fewer than 3 members: every member gets `f64::INFINITY`.
/// - Otherwise, per objective: the extreme members get `f64::INFINITY` and
///   each interior member adds `(next - prev) / (max - min)`. Distances
///   accumulate across objectives. An objective whose range is below
///   [`EPSILON`] marks every interior member `f64::INFINITY`.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = front size
///
/// # References
///
/// Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm:
/// NSGA-II", section III-B.
pub fn crowding_distance(front: &mut [Solution]) {
    let indices: Vec<usize> = (0..front.len()).collect();
    assign_crowding_distance(front, &indices);
}

/// Crowding distance over the members of `solutions` listed in `front`.
fn assign_crowding_distance(solutions: &mut [Solution], front: &[usize]) {
    let n = front.len();
    if n < 3 {
        for &i in front {
            solutions[i].crowding_distance = f64::INFINITY;
        }
        return;
    }

    for &i in front {
        solutions[i].crowding_distance = 0.0;
    }

    let m = solutions[front[0]].objectives.len();
    let mut order = front.to_vec();

    for obj in 0..m {
        // sort from the front's own order every time so ties resolve the same way
        order.copy_from_slice(front);
        order.sort_by(|&a, &b| {
            solutions[a].objectives[obj].total_cmp(&solutions[b].objectives[obj])
        });

        let min_value = solutions[order[0]].objectives[obj];
        let max_value = solutions[order[n - 1]].objectives[obj];
        let range = max_value - min_value;

        solutions[order[0]].crowding_distance = f64::INFINITY;
        solutions[order[n - 1]].crowding_distance = f64::INFINITY;

        if range < EPSILON {
            debug!("objective {obj} has no spread; interior crowding distances set to infinity");
            for &i in &order[1..n - 1] {
                solutions[i].crowding_distance = f64::INFINITY;
            }
            continue;
        }

        for j in 1..(n - 1) {
            let prev = solutions[order[j - 1]].objectives[obj];
            let next = solutions[order[j + 1]].objectives[obj];
            solutions[order[j]].crowding_distance += (next - prev) / range;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
