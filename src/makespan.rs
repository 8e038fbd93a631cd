//! Makespan evaluator — the shared primitive of every algorithm.
//!
//! # Algorithm
//!
//! Standard flow-shop recurrence over positions `j` and machines `m`:
//!
//! ```text
//! start[0][0] = 0
//! start[m][0] = end[m-1][0]                      m > 0
//! start[0][j] = end[0][j-1]                      j > 0
//! start[m][j] = max(end[m-1][j], end[m][j-1])    otherwise
//! end[m][j]   = start[m][j] + p(order[j], m)
//! ```
//!
//! Makespan = `end[M-1][N-1]`. Pure and deterministic; identical inputs
//! yield identical tables.
//!
//! # Complexity
//! O(N * M) time and space for N jobs on M machines.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

use crate::error::{Result, ScheduleError};
use crate::models::{JobSet, Order, Schedule};

/// Evaluates a processing order against a job set, producing the full
/// start/end [`Schedule`].
///
/// # Errors
/// `PermutationMismatch` when `order` is not a permutation of
/// `0..jobs.len()`.
///
/// # Example
///
/// ```
/// use flowshop::models::{JobSet, Order};
///
/// let jobs = JobSet::from_rows(vec![vec![2, 3], vec![4, 1]]).unwrap();
/// let schedule = flowshop::makespan::evaluate(&Order::new(vec![0, 1]), &jobs).unwrap();
/// assert_eq!(schedule.makespan(), 7);
/// ```
pub fn evaluate(order: &Order, jobs: &JobSet) -> Result<Schedule> {
    if !order.is_permutation_of(jobs.len()) {
        return Err(ScheduleError::PermutationMismatch(format!(
            "order {:?} does not cover job indices 0..{}",
            order.indices(),
            jobs.len()
        )));
    }

    let n = jobs.len();
    let m = jobs.machine_count();
    let mut start = vec![vec![0i64; n]; m];
    let mut end = vec![vec![0i64; n]; m];

    for position in 0..n {
        let job = order.job_at(position);
        for machine in 0..m {
            let at = match (machine, position) {
                (0, 0) => 0,
                (0, _) => end[0][position - 1],
                (_, 0) => end[machine - 1][0],
                _ => end[machine - 1][position].max(end[machine][position - 1]),
            };
            start[machine][position] = at;
            end[machine][position] = at + jobs.time(job, machine);
        }
    }

    Ok(Schedule {
        order: order.clone(),
        start,
        end,
    })
}
