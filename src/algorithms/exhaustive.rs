//! Exhaustive permutation search (Łomnicki-style).
//!
//! # Algorithm
//!
//! Enumerate every permutation of the job indices in lexicographic order,
//! evaluate each with the makespan evaluator, and keep the strictly
//! smallest makespan seen. Ties therefore go to the first-encountered
//! (lexicographically smallest) permutation. Globally optimal for any
//! machine count.
//!
//! # Complexity
//! O(N! * N * M) — intended for small N (≤ ~10).

use itertools::Itertools;

use crate::error::{Result, ScheduleError};
use crate::makespan;
use crate::models::{JobSet, Order};

use super::{Optimum, SearchLimit, SearchOutcome};

/// Finds a makespan-minimal order by full enumeration.
///
/// The limit is polled between permutations; an exhausted limit yields
/// [`SearchOutcome::Aborted`].
///
/// # Example
///
/// ```
/// use flowshop::algorithms::{exhaustive_search, SearchLimit};
/// use flowshop::models::JobSet;
///
/// let jobs = JobSet::from_rows(vec![vec![2, 3], vec![4, 1]]).unwrap();
/// let optimum = exhaustive_search(&jobs, &SearchLimit::new())
///     .unwrap()
///     .complete()
///     .unwrap();
/// assert_eq!(optimum.makespan, 7);
/// ```
pub fn exhaustive_search(jobs: &JobSet, limit: &SearchLimit) -> Result<SearchOutcome<Optimum>> {
    let n = jobs.len();
    let mut best: Option<Optimum> = None;

    for indices in (0..n).permutations(n) {
        if limit.is_exhausted() {
            return Ok(SearchOutcome::Aborted);
        }

        let order = Order::new(indices);
        let candidate = makespan::evaluate(&order, jobs)?.makespan();
        if best.as_ref().map_or(true, |b| candidate < b.makespan) {
            best = Some(Optimum {
                order,
                makespan: candidate,
            });
        }
    }

    // A validated JobSet is non-empty, so at least one permutation was seen.
    let Some(optimum) = best else {
        return Err(ScheduleError::MalformedJobSet("job set is empty".into()));
    };
    Ok(SearchOutcome::Complete(optimum))
}
