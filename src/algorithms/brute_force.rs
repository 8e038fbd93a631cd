//! Brute-force reference search.
//!
//! Same enumeration as [`exhaustive_search`](super::exhaustive_search),
//! but on two-machine job sets it prefers Johnson's order among tied
//! optima. Exists to cross-validate Johnson's rule against the
//! enumerated optimum; the tie-break makes the comparison exact instead
//! of makespan-only.

use itertools::Itertools;

use crate::error::{Result, ScheduleError};
use crate::makespan;
use crate::models::{JobSet, Order, Schedule};

use super::{johnson, SearchLimit, SearchOutcome};

/// Outcome of a brute-force search: the winning order, its makespan, and
/// its fully evaluated schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceResult {
    /// The winning processing order.
    pub order: Order,
    /// Its makespan.
    pub makespan: i64,
    /// The start/end schedule realizing it.
    pub schedule: Schedule,
}

/// Finds a makespan-minimal order by full enumeration, preferring
/// Johnson's order among tied optima on two-machine job sets.
///
/// A strictly smaller makespan always replaces the incumbent
/// (first-encountered wins plain ties); a tie is only re-resolved in
/// favor of the permutation equal to Johnson's order.
///
/// The limit is polled between permutations; an exhausted limit yields
/// [`SearchOutcome::Aborted`].
pub fn brute_force(jobs: &JobSet, limit: &SearchLimit) -> Result<SearchOutcome<BruteForceResult>> {
    let johnson_order = if jobs.machine_count() == 2 {
        Some(johnson(jobs)?)
    } else {
        None
    };

    let n = jobs.len();
    let mut best: Option<BruteForceResult> = None;

    for indices in (0..n).permutations(n) {
        if limit.is_exhausted() {
            return Ok(SearchOutcome::Aborted);
        }

        let order = Order::new(indices);
        let schedule = makespan::evaluate(&order, jobs)?;
        let candidate = schedule.makespan();

        let replaces = match &best {
            None => true,
            Some(incumbent) if candidate < incumbent.makespan => true,
            Some(incumbent) => {
                candidate == incumbent.makespan
                    && johnson_order.as_ref().is_some_and(|j| *j == order)
            }
        };
        if replaces {
            best = Some(BruteForceResult {
                order,
                makespan: candidate,
                schedule,
            });
        }
    }

    let Some(result) = best else {
        return Err(ScheduleError::MalformedJobSet("job set is empty".into()));
    };
    Ok(SearchOutcome::Complete(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::exhaustive_search;

    fn search(jobs: &JobSet) -> BruteForceResult {
        brute_force(jobs, &SearchLimit::new())
            .unwrap()
            .complete()
            .unwrap()
    }

    #[test]
    fn test_finds_two_machine_optimum() {
        let jobs = JobSet::from_rows(vec![vec![2, 3], vec![4, 1]]).unwrap();
        let result = search(&jobs);
        assert_eq!(result.makespan, 7);
        assert_eq!(result.order.indices(), &[0, 1]);
        assert_eq!(result.schedule.makespan(), 7);
    }

    #[test]
    fn test_tie_break_prefers_johnson_order() {
        // Orders [0,1] and [1,0] both give makespan 11; Johnson picks
        // [1, 0], so brute force must override the earlier-enumerated
        // [0, 1].
        let jobs = JobSet::from_rows(vec![vec![5, 5], vec![1, 1]]).unwrap();
        let johnson_order = johnson(&jobs).unwrap();
        assert_eq!(johnson_order.indices(), &[1, 0]);

        let result = search(&jobs);
        assert_eq!(result.makespan, 11);
        assert_eq!(result.order, johnson_order);
    }

    #[test]
    fn test_three_machines_have_no_johnson_preference() {
        // All permutations of identical jobs tie; with no Johnson order
        // on three machines, the first-enumerated permutation stands.
        let jobs = JobSet::from_rows(vec![vec![2, 2, 2]; 3]).unwrap();
        let result = search(&jobs);
        assert_eq!(result.order.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_matches_exhaustive_makespan() {
        let jobs = JobSet::from_rows(vec![
            vec![3, 8],
            vec![12, 4],
            vec![6, 5],
            vec![2, 7],
            vec![9, 3],
        ])
        .unwrap();

        let expected = exhaustive_search(&jobs, &SearchLimit::new())
            .unwrap()
            .complete()
            .unwrap();
        let result = search(&jobs);
        assert_eq!(result.makespan, expected.makespan);
        // The optimum is unique up to ties, and Johnson's order is among
        // the optima on two machines.
        assert_eq!(result.order, johnson(&jobs).unwrap());
    }

    #[test]
    fn test_timed_out_search_aborts() {
        use std::time::Duration;

        let jobs = JobSet::from_rows(vec![vec![2, 3], vec![4, 1]]).unwrap();
        let limit = SearchLimit::new().with_timeout(Duration::ZERO);
        assert!(brute_force(&jobs, &limit).unwrap().is_aborted());
    }
}
