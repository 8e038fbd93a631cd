//! Brown–Łomnicki branch-and-bound for the three-machine flow shop.
//!
//! # Algorithm
//!
//! Best-first search over partial sequences on a min-priority queue,
//! seeded with every singleton sequence at bound 0. Popping a complete
//! sequence evaluates it exactly and tightens the incumbent upper bound
//! `UB`; popping an incomplete one computes a lower bound
//!
//! ```text
//! phi = max(tk1 + sum(t1) + min(t2 + t3),
//!           tk2 + sum(t2) + min(t3),
//!           tk3 + sum(t3))
//! ```
//!
//! where `tk1..tk3` are the partial sequence's finish times on machines
//! 1–3 (same recurrence as the evaluator) and the sums/minima range over
//! the jobs not yet sequenced. Children are pushed keyed by `phi` only
//! when `phi < UB`; `phi` never overestimates the best completion of any
//! extension, so pruning preserves optimality.
//!
//! The queue is keyed on the numeric bound alone, with insertion order as
//! the explicit tie-break. When several complete sequences achieve the
//! minimal makespan, the first one popped wins — an accepted
//! nondeterminism of the method that callers must tolerate.
//!
//! # Reference
//! Brown & Lomnicki (1966), "Some Applications of the Branch-and-Bound
//! Algorithm to the Machine Scheduling Problem", Operational Research
//! Quarterly 17(2)

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{Result, ScheduleError};
use crate::makespan;
use crate::models::{JobSet, Order};

use super::{Optimum, SearchLimit, SearchOutcome};

/// A partial sequence in the search queue.
///
/// Ordered by bound, then by insertion sequence number, so equal bounds
/// pop in insertion order.
#[derive(Debug, Clone, Eq)]
struct Node {
    bound: i64,
    inserted: u64,
    partial: Vec<usize>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .cmp(&other.bound)
            .then(self.inserted.cmp(&other.inserted))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a makespan-minimal order for a three-machine job set by
/// branch-and-bound.
///
/// The limit is polled once per queue pop; an exhausted limit yields
/// [`SearchOutcome::Aborted`].
///
/// # Errors
/// `InvalidMachineCount` unless every job has exactly three machine times.
pub fn brown_lomnicki(jobs: &JobSet, limit: &SearchLimit) -> Result<SearchOutcome<Optimum>> {
    if jobs.machine_count() != 3 {
        return Err(ScheduleError::InvalidMachineCount {
            algorithm: "brown_lomnicki",
            required: 3,
            found: jobs.machine_count(),
        });
    }

    let n = jobs.len();
    let mut queue: BinaryHeap<Reverse<Node>> = BinaryHeap::new();
    let mut inserted: u64 = 0;
    for job in 0..n {
        queue.push(Reverse(Node {
            bound: 0,
            inserted,
            partial: vec![job],
        }));
        inserted += 1;
    }

    let mut upper_bound = i64::MAX;
    let mut best: Option<Optimum> = None;

    while let Some(Reverse(node)) = queue.pop() {
        if limit.is_exhausted() {
            return Ok(SearchOutcome::Aborted);
        }

        if node.partial.len() == n {
            let order = Order::new(node.partial);
            let exact = makespan::evaluate(&order, jobs)?.makespan();
            if exact < upper_bound {
                upper_bound = exact;
                best = Some(Optimum {
                    order,
                    makespan: exact,
                });
            }
            continue;
        }

        let (tk1, tk2, tk3) = partial_finish_times(&node.partial, jobs);
        let remaining: Vec<usize> = (0..n).filter(|job| !node.partial.contains(job)).collect();

        let sum_t1: i64 = remaining.iter().map(|&job| jobs.time(job, 0)).sum();
        let sum_t2: i64 = remaining.iter().map(|&job| jobs.time(job, 1)).sum();
        let sum_t3: i64 = remaining.iter().map(|&job| jobs.time(job, 2)).sum();
        let min_t2_t3 = remaining
            .iter()
            .map(|&job| jobs.time(job, 1) + jobs.time(job, 2))
            .min()
            .unwrap_or(0);
        let min_t3 = remaining
            .iter()
            .map(|&job| jobs.time(job, 2))
            .min()
            .unwrap_or(0);

        let phi = (tk1 + sum_t1 + min_t2_t3)
            .max(tk2 + sum_t2 + min_t3)
            .max(tk3 + sum_t3);

        // Prune: no completion of this sequence can beat the incumbent.
        if phi < upper_bound {
            for &job in &remaining {
                let mut extended = node.partial.clone();
                extended.push(job);
                queue.push(Reverse(Node {
                    bound: phi,
                    inserted,
                    partial: extended,
                }));
                inserted += 1;
            }
        }
    }

    // UB = +inf until the first complete sequence is popped, so on a
    // validated (non-empty) JobSet a best order always exists.
    let Some(optimum) = best else {
        return Err(ScheduleError::MalformedJobSet("job set is empty".into()));
    };
    Ok(SearchOutcome::Complete(optimum))
}

/// Finish times of a partial sequence on the three machines, via the
/// evaluator's recurrence restricted to M = 3.
fn partial_finish_times(partial: &[usize], jobs: &JobSet) -> (i64, i64, i64) {
    let (mut t1, mut t2, mut t3) = (0i64, 0i64, 0i64);
    for &job in partial {
        t1 += jobs.time(job, 0);
        t2 = t1.max(t2) + jobs.time(job, 1);
        t3 = t2.max(t3) + jobs.time(job, 2);
    }
    (t1, t2, t3)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    use super::*;
    use crate::algorithms::exhaustive_search;

    fn optimum_of(jobs: &JobSet) -> Optimum {
        brown_lomnicki(jobs, &SearchLimit::new())
            .unwrap()
            .complete()
            .unwrap()
    }

    #[test]
    fn test_partial_finish_times_match_evaluator() {
        let jobs = JobSet::from_rows(vec![vec![3, 1, 2], vec![1, 5, 1], vec![2, 2, 4]]).unwrap();
        let order = Order::new(vec![2, 0, 1]);
        let schedule = makespan::evaluate(&order, &jobs).unwrap();

        let (t1, t2, t3) = partial_finish_times(order.indices(), &jobs);
        assert_eq!(t1, schedule.end_at(0, 2));
        assert_eq!(t2, schedule.end_at(1, 2));
        assert_eq!(t3, schedule.end_at(2, 2));
    }

    #[test]
    fn test_matches_exhaustive_search() {
        let instances = [
            vec![vec![3, 1, 2], vec![1, 5, 1], vec![2, 2, 4]],
            vec![vec![5, 4, 3], vec![2, 2, 2], vec![4, 1, 6], vec![1, 3, 2]],
            vec![
                vec![2, 5, 1],
                vec![6, 1, 3],
                vec![4, 4, 4],
                vec![1, 2, 6],
                vec![3, 3, 2],
            ],
        ];

        for rows in instances {
            let jobs = JobSet::from_rows(rows).unwrap();
            let expected = exhaustive_search(&jobs, &SearchLimit::new())
                .unwrap()
                .complete()
                .unwrap();
            let found = optimum_of(&jobs);
            assert_eq!(found.makespan, expected.makespan);
            assert!(found.order.is_permutation_of(jobs.len()));

            // The reported order must actually achieve the reported makespan.
            let realized = makespan::evaluate(&found.order, &jobs).unwrap().makespan();
            assert_eq!(realized, found.makespan);
        }
    }

    #[test]
    fn test_single_job() {
        let jobs = JobSet::from_rows(vec![vec![4, 2, 5]]).unwrap();
        let optimum = optimum_of(&jobs);
        assert_eq!(optimum.order.indices(), &[0]);
        assert_eq!(optimum.makespan, 11);
    }

    #[test]
    fn test_identical_jobs_tie_is_tolerated() {
        // Both permutations of two identical jobs tie; either is a valid
        // answer, but the makespan must match the exhaustive optimum.
        let jobs = JobSet::from_rows(vec![vec![2, 3, 1], vec![2, 3, 1]]).unwrap();
        let expected = exhaustive_search(&jobs, &SearchLimit::new())
            .unwrap()
            .complete()
            .unwrap();
        let found = optimum_of(&jobs);
        assert_eq!(found.makespan, expected.makespan);
        assert!(found.order.is_permutation_of(2));
    }

    #[test]
    fn test_rejects_two_machines() {
        let jobs = JobSet::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let err = brown_lomnicki(&jobs, &SearchLimit::new()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidMachineCount {
                algorithm: "brown_lomnicki",
                required: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn test_cancelled_search_aborts() {
        let jobs = JobSet::from_rows(vec![vec![1, 2, 3], vec![3, 2, 1]]).unwrap();
        let token = Arc::new(AtomicBool::new(true));
        let limit = SearchLimit::new().with_cancel_token(token);

        let outcome = brown_lomnicki(&jobs, &limit).unwrap();
        assert!(outcome.is_aborted());
    }

    #[test]
    fn test_random_instances_match_exhaustive() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..20 {
            let n = rng.random_range(2..=6);
            let rows: Vec<Vec<i64>> = (0..n)
                .map(|_| (0..3).map(|_| rng.random_range(1..=9)).collect())
                .collect();
            let jobs = JobSet::from_rows(rows).unwrap();

            let expected = exhaustive_search(&jobs, &SearchLimit::new())
                .unwrap()
                .complete()
                .unwrap();
            assert_eq!(optimum_of(&jobs).makespan, expected.makespan);
        }
    }
}
