//! Job and job-set models.
//!
//! A job is an ordered vector of processing times, one per machine, in
//! the fixed machine order of the flow shop. Jobs are identified by their
//! 0-based position in the job set.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A single job: its processing time on each machine, in machine order.
///
/// Immutable once constructed. Validation (positive times, uniform machine
/// count) happens when the job joins a [`JobSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    times: Vec<i64>,
}

impl Job {
    /// Creates a job from per-machine processing times.
    pub fn new(times: Vec<i64>) -> Self {
        Self { times }
    }

    /// Processing time on the given machine (0-based).
    #[inline]
    pub fn time(&self, machine: usize) -> i64 {
        self.times[machine]
    }

    /// Number of machines this job visits.
    #[inline]
    pub fn machine_count(&self) -> usize {
        self.times.len()
    }

    /// All processing times in machine order.
    pub fn times(&self) -> &[i64] {
        &self.times
    }

    /// Total processing time across all machines.
    pub fn total_time(&self) -> i64 {
        self.times.iter().sum()
    }
}

impl From<Vec<i64>> for Job {
    fn from(times: Vec<i64>) -> Self {
        Self::new(times)
    }
}

/// An ordered, validated set of jobs sharing one machine count.
///
/// Construction enforces the structural invariants every algorithm relies
/// on: at least one job, at least two machines, the same machine count for
/// every job, and strictly positive processing times. A `JobSet` is
/// created once per invocation and never mutated.
///
/// # Example
///
/// ```
/// use flowshop::models::JobSet;
///
/// let jobs = JobSet::from_rows(vec![vec![3, 8], vec![12, 4], vec![6, 5]]).unwrap();
/// assert_eq!(jobs.len(), 3);
/// assert_eq!(jobs.machine_count(), 2);
/// assert_eq!(jobs.time(1, 0), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    /// Creates a job set, validating structural integrity.
    ///
    /// # Errors
    /// `MalformedJobSet` when the set is empty, machine counts differ
    /// between jobs, the machine count is below 2, or any processing time
    /// is not strictly positive.
    pub fn new(jobs: Vec<Job>) -> Result<Self> {
        let first = jobs
            .first()
            .ok_or_else(|| ScheduleError::MalformedJobSet("job set is empty".into()))?;

        let machine_count = first.machine_count();
        if machine_count < 2 {
            return Err(ScheduleError::MalformedJobSet(format!(
                "a flow shop needs at least 2 machines, found {machine_count}"
            )));
        }

        for (index, job) in jobs.iter().enumerate() {
            if job.machine_count() != machine_count {
                return Err(ScheduleError::MalformedJobSet(format!(
                    "job {index} has {} machine times, expected {machine_count}",
                    job.machine_count()
                )));
            }
            for (machine, &time) in job.times().iter().enumerate() {
                if time <= 0 {
                    return Err(ScheduleError::MalformedJobSet(format!(
                        "job {index} has non-positive time {time} on machine {machine}"
                    )));
                }
            }
        }

        Ok(Self { jobs })
    }

    /// Creates a job set from raw processing-time rows, one row per job.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::new(rows.into_iter().map(Job::new).collect())
    }

    /// Number of jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the set contains no jobs. Always `false` for a validated
    /// set; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// The uniform machine count shared by all jobs.
    #[inline]
    pub fn machine_count(&self) -> usize {
        self.jobs.first().map_or(0, Job::machine_count)
    }

    /// Processing time of job `job` on machine `machine` (both 0-based).
    #[inline]
    pub fn time(&self, job: usize, machine: usize) -> i64 {
        self.jobs[job].time(machine)
    }

    /// The job at the given index.
    pub fn job(&self, index: usize) -> &Job {
        &self.jobs[index]
    }

    /// All jobs in input order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}
