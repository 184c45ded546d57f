//! Mutually non-dominated archive.

use crate::dominance::{Dominance, ParetoDominance};
use crate::model::Solution;
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ops::Index;

/// How an archive treats a candidate identical to an existing member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    /// Keep duplicates. Identical non-dominated points accumulate.
    #[default]
    Retain,
    /// Reject a candidate whose objective vector exactly equals a member it
    /// does not dominate.
    Discard,
}

/// A set of mutually non-dominated solutions, maintained incrementally.
///
/// Each [`add`](Self::add) compares the candidate against every member
/// (O(size) comparisons). A dominated candidate is rejected; otherwise the
/// members it dominates are dropped and it is appended.
///
/// The element type `S` is anything that borrows as a [`Solution`], so an
/// archive can own its members or merely reference them.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use u_moea::archive::Archive;
/// use u_moea::model::{Problem, Solution};
///
/// let problem = Arc::new(Problem::new(2, 2, 0, |v: &[f64]| v.to_vec()));
/// let make = |x: f64, y: f64| {
///     let mut s = Solution::new(&problem).with_variables(&[x, y]).unwrap();
///     s.evaluate().unwrap();
///     s
/// };
///
/// let mut archive = Archive::new();
/// assert!(archive.add(make(1.0, 3.0)));
/// assert!(archive.add(make(3.0, 1.0)));
/// assert!(!archive.add(make(4.0, 4.0))); // dominated
/// assert!(archive.add(make(0.5, 0.5)));  // dominates both members
/// assert_eq!(archive.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Archive<S = Solution, D = ParetoDominance> {
    dominance: D,
    policy: DuplicatePolicy,
    contents: Vec<S>,
}

impl<S: Borrow<Solution>> Archive<S, ParetoDominance> {
    /// Creates an empty archive under Pareto dominance.
    pub fn new() -> Self {
        Self::with_dominance(ParetoDominance)
    }
}

impl<S: Borrow<Solution>> Default for Archive<S, ParetoDominance> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Borrow<Solution>, D: Dominance> Archive<S, D> {
    /// Creates an empty archive under the given relation.
    pub fn with_dominance(dominance: D) -> Self {
        Self {
            dominance,
            policy: DuplicatePolicy::default(),
            contents: Vec::new(),
        }
    }

    /// Sets the duplicate policy.
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Offers `candidate` to the archive.
    ///
    /// Returns `false` (archive unchanged) if any member dominates it.
    /// Otherwise removes the members it dominates, appends it, and returns
    /// `true`.
    pub fn add(&mut self, candidate: S) -> bool {
        let offered: &Solution = candidate.borrow();
        let flags: Vec<Ordering> = self
            .contents
            .iter()
            .map(|member| self.dominance.compare(offered, member.borrow()))
            .collect();

        if flags.contains(&Ordering::Greater) {
            trace!("archive rejected {offered}");
            return false;
        }

        if self.policy == DuplicatePolicy::Discard
            && self.contents.iter().zip(&flags).any(|(member, flag)| {
                let member: &Solution = member.borrow();
                *flag == Ordering::Equal && member.objectives == offered.objectives
            })
        {
            trace!("archive discarded duplicate {offered}");
            return false;
        }

        let mut flags = flags.into_iter();
        self.contents.retain(|_| flags.next() == Some(Ordering::Equal));
        self.contents.push(candidate);
        true
    }

    /// The relation used by this archive.
    pub fn dominance(&self) -> &D {
        &self.dominance
    }

    /// The duplicate policy.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }
}

impl<S, D> Archive<S, D> {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether the archive is empty.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Member at `index`, in insertion order.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.contents.get(index)
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.contents.iter()
    }

    /// Members as a slice.
    pub fn as_slice(&self) -> &[S] {
        &self.contents
    }

    /// Consumes the archive, returning its members.
    pub fn into_vec(self) -> Vec<S> {
        self.contents
    }

    pub(crate) fn contents_mut(&mut self) -> &mut Vec<S> {
        &mut self.contents
    }
}

impl<S: Borrow<Solution>, D: Dominance> Extend<S> for Archive<S, D> {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for candidate in iter {
            self.add(candidate);
        }
    }
}

impl<S, D> Index<usize> for Archive<S, D> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.contents[index]
    }
}

impl<S, D> IntoIterator for Archive<S, D> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.into_iter()
    }
}

impl<'a, S, D> IntoIterator for &'a Archive<S, D> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.iter()
    }
}

/// Returns the solutions that no other solution Pareto-dominates.
///
/// Order follows archive insertion: survivors appear in the order they were
/// last accepted.
pub fn nondominated(solutions: &[Solution]) -> Vec<Solution> {
    let mut archive = Archive::new();
    archive.extend(solutions.iter().cloned());
    archive.into_vec()
}
