//! Johnson's rule for the two-machine flow shop.
//!
//! # Algorithm
//!
//! Repeatedly select the remaining job whose smaller processing time is
//! minimal (ties broken by earliest remaining index). If that minimum
//! lies on machine 1, append the job to the head of the sequence;
//! otherwise prepend it to the tail. The final order is head followed by
//! tail. Optimal for makespan on two machines by Johnson's theorem.
//!
//! # Complexity
//! O(N^2) with the repeated-selection formulation (N ≤ ~10 in practice).
//!
//! # Reference
//! Johnson (1954), "Optimal Two- and Three-Stage Production Schedules
//! with Setup Times Included", Naval Research Logistics Quarterly 1(1)

use std::collections::VecDeque;

use crate::error::{Result, ScheduleError};
use crate::models::{JobSet, Order};

/// Computes the optimal two-machine processing order by Johnson's rule.
///
/// # Errors
/// `InvalidMachineCount` unless every job has exactly two machine times.
///
/// # Example
///
/// ```
/// use flowshop::algorithms::johnson;
/// use flowshop::models::JobSet;
///
/// let jobs = JobSet::from_rows(vec![
///     vec![3, 8],
///     vec![12, 4],
///     vec![6, 5],
///     vec![2, 7],
///     vec![9, 3],
/// ]).unwrap();
/// assert_eq!(johnson(&jobs).unwrap().indices(), &[3, 0, 2, 1, 4]);
/// ```
pub fn johnson(jobs: &JobSet) -> Result<Order> {
    if jobs.machine_count() != 2 {
        return Err(ScheduleError::InvalidMachineCount {
            algorithm: "johnson",
            required: 2,
            found: jobs.machine_count(),
        });
    }

    let mut remaining: Vec<usize> = (0..jobs.len()).collect();
    let mut head = Vec::new();
    let mut tail = VecDeque::new();

    // min_by_key keeps the first of equal keys, so ties fall to the
    // earliest remaining job index.
    while let Some((position, job)) = remaining
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|&(_, job)| jobs.time(job, 0).min(jobs.time(job, 1)))
    {
        if jobs.time(job, 0) <= jobs.time(job, 1) {
            head.push(job);
        } else {
            tail.push_front(job);
        }
        remaining.remove(position);
    }

    head.extend(tail);
    Ok(Order::new(head))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{exhaustive_search, SearchLimit};
    use crate::makespan;

    fn classic_jobs() -> JobSet {
        // A(3,8) B(12,4) C(6,5) D(2,7) E(9,3)
        JobSet::from_rows(vec![
            vec![3, 8],
            vec![12, 4],
            vec![6, 5],
            vec![2, 7],
            vec![9, 3],
        ])
        .unwrap()
    }

    #[test]
    fn test_classic_instance() {
        let jobs = classic_jobs();
        let order = johnson(&jobs).unwrap();
        assert_eq!(order.indices(), &[3, 0, 2, 1, 4]);

        let schedule = makespan::evaluate(&order, &jobs).unwrap();
        assert_eq!(schedule.makespan(), 35);
    }

    #[test]
    fn test_matches_exhaustive_optimum_on_classic_instance() {
        let jobs = classic_jobs();
        let johnson_makespan = makespan::evaluate(&johnson(&jobs).unwrap(), &jobs)
            .unwrap()
            .makespan();

        let optimum = exhaustive_search(&jobs, &SearchLimit::new())
            .unwrap()
            .complete()
            .unwrap();
        assert_eq!(johnson_makespan, optimum.makespan);
    }

    #[test]
    fn test_single_job() {
        let jobs = JobSet::from_rows(vec![vec![4, 9]]).unwrap();
        let order = johnson(&jobs).unwrap();
        assert_eq!(order.indices(), &[0]);
        assert_eq!(makespan::evaluate(&order, &jobs).unwrap().makespan(), 13);
    }

    #[test]
    fn test_tie_prefers_earliest_index() {
        // Jobs 0 and 1 share the minimal time 2, both on machine 1:
        // job 0 must be selected (and appended) first.
        let jobs = JobSet::from_rows(vec![vec![2, 5], vec![2, 6], vec![7, 3]]).unwrap();
        let order = johnson(&jobs).unwrap();
        assert_eq!(order.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_tail_jobs_in_reverse_selection_order() {
        // All jobs have their minimum on machine 2, so each newly selected
        // job lands in front of the previously selected tail jobs.
        let jobs = JobSet::from_rows(vec![vec![9, 1], vec![9, 2], vec![9, 3]]).unwrap();
        let order = johnson(&jobs).unwrap();
        assert_eq!(order.indices(), &[2, 1, 0]);
    }

    #[test]
    fn test_returns_permutation() {
        let jobs = classic_jobs();
        assert!(johnson(&jobs).unwrap().is_permutation_of(jobs.len()));
    }

    #[test]
    fn test_random_instances_match_exhaustive() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..20 {
            let n = rng.random_range(2..=7);
            let rows: Vec<Vec<i64>> = (0..n)
                .map(|_| vec![rng.random_range(1..=9), rng.random_range(1..=9)])
                .collect();
            let jobs = JobSet::from_rows(rows).unwrap();

            let johnson_makespan = makespan::evaluate(&johnson(&jobs).unwrap(), &jobs)
                .unwrap()
                .makespan();
            let optimum = exhaustive_search(&jobs, &SearchLimit::new())
                .unwrap()
                .complete()
                .unwrap();
            assert_eq!(johnson_makespan, optimum.makespan);
        }
    }

    #[test]
    fn test_rejects_three_machines() {
        let jobs = JobSet::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let err = johnson(&jobs).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidMachineCount {
                algorithm: "johnson",
                required: 2,
                found: 3,
            }
        );
    }
}
