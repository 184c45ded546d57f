//! Batch evaluation.

use crate::error::Result;
use crate::model::Solution;
use log::trace;

/// Evaluates every solution whose `evaluated` flag is unset.
///
/// Returns the number of evaluations performed, which a driver adds to its
/// evaluation count. Already evaluated solutions are skipped. With the
/// `parallel` feature the pending solutions are evaluated on the rayon
/// thread pool.
///
/// # Errors
///
/// The first evaluation error encountered. Solutions evaluated before the
/// failure keep their results.
pub fn evaluate_all(solutions: &mut [Solution]) -> Result<usize> {
    let pending: Vec<&mut Solution> = solutions.iter_mut().filter(|s| !s.evaluated).collect();
    let count = pending.len();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pending.into_par_iter().try_for_each(|s| s.evaluate())?;
    }

    #[cfg(not(feature = "parallel"))]
    for s in pending {
        s.evaluate()?;
    }

    trace!("evaluated {count} solutions");
    Ok(count)
}
