//! Ranking and population reduction.
//!
//! Domain-agnostic NSGA-II style utilities operating on evaluated
//! [`Solution`](crate::model::Solution)s.
//!
//! # Algorithms
//!
//! - [`nondominated_sort`]: partition into ranked fronts (rank 0 = best)
//! - [`crowding_distance`]: per-front diversity measure
//! - [`nondominated_split`]: whole fronts that fit plus the overflowing front
//! - [`nondominated_prune`]: reduce with crowding recomputed after each removal
//! - [`nondominated_truncate`]: reduce with a single (rank, crowding) sort
//! - [`truncate_by_fitness`]: reduce by a scalar fitness accessor
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod nondominated;
mod truncation;

pub use nondominated::{crowding_distance, nondominated_sort, nondominated_sort_with};
pub use truncation::{
    nondominated_prune, nondominated_split, nondominated_truncate, truncate_by_fitness,
};
