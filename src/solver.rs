//! Solver façade: algorithm selection, dispatch, and timing.
//!
//! Wraps the individual algorithms behind a request/response API: the
//! caller hands over a [`JobSet`] and an [`Algorithm`], and receives a
//! self-contained [`SolveReport`] — order, makespan, full schedule, and
//! compute time — or a typed failure. Machine-count preconditions are
//! rejected here, before any computation starts.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::algorithms::{
    brown_lomnicki, brute_force, exhaustive_search, johnson, SearchLimit, SearchOutcome,
};
use crate::error::{Result, ScheduleError};
use crate::makespan;
use crate::models::{JobSet, Order, Schedule};

/// Algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Johnson's rule — exact, two machines only.
    Johnson,
    /// Łomnicki-style exhaustive search — exact, any machine count.
    ExhaustiveSearch,
    /// Brown–Łomnicki branch-and-bound — exact, three machines only.
    BrownLomnicki,
    /// Exhaustive search with a Johnson tie-break on two machines.
    BruteForce,
}

impl Algorithm {
    /// The exact machine count this algorithm requires, or `None` when
    /// any count is accepted.
    pub fn required_machine_count(self) -> Option<usize> {
        match self {
            Self::Johnson => Some(2),
            Self::BrownLomnicki => Some(3),
            Self::ExhaustiveSearch | Self::BruteForce => None,
        }
    }

    /// Stable identifier, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Johnson => "johnson",
            Self::ExhaustiveSearch => "exhaustive_search",
            Self::BrownLomnicki => "brown_lomnicki",
            Self::BruteForce => "brute_force",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input container for a solve call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Jobs to sequence.
    pub jobs: JobSet,
    /// Algorithm to run.
    pub algorithm: Algorithm,
}

impl SolveRequest {
    /// Creates a new solve request.
    pub fn new(jobs: JobSet, algorithm: Algorithm) -> Self {
        Self { jobs, algorithm }
    }
}

/// A completed solve: the winning order, its schedule, and how long the
/// computation took.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// Algorithm that produced this report.
    pub algorithm: Algorithm,
    /// The computed processing order.
    pub order: Order,
    /// Makespan of that order.
    pub makespan: i64,
    /// Full start/end schedule realizing the order.
    pub schedule: Schedule,
    /// Wall-clock compute time.
    pub elapsed: Duration,
}

/// Result of a solve call: a finished report, or an abort when the
/// solver's [`SearchLimit`] ran out mid-search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// The algorithm ran to completion.
    Solved(SolveReport),
    /// The search limit was exhausted before completion.
    Aborted {
        /// Wall-clock time spent before aborting.
        elapsed: Duration,
    },
}

impl SolveOutcome {
    /// The report, if the solve completed.
    pub fn report(self) -> Option<SolveReport> {
        match self {
            Self::Solved(report) => Some(report),
            Self::Aborted { .. } => None,
        }
    }

    /// Whether the solve was aborted.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}

/// Dispatches job sets to sequencing algorithms.
///
/// Stateless apart from its configured search limit; one solver may serve
/// any number of independent solve calls, including concurrently.
///
/// # Example
///
/// ```
/// use flowshop::models::JobSet;
/// use flowshop::solver::{Algorithm, Solver};
///
/// let jobs = JobSet::from_rows(vec![vec![3, 8], vec![12, 4], vec![2, 7]]).unwrap();
/// let report = Solver::new()
///     .solve(&jobs, Algorithm::Johnson)
///     .unwrap()
///     .report()
///     .unwrap();
/// assert_eq!(report.order.len(), 3);
/// assert_eq!(report.makespan, report.schedule.makespan());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    limit: SearchLimit,
}

impl Solver {
    /// Creates a solver with an unbounded search limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search limit applied to factorial searches.
    pub fn with_limit(mut self, limit: SearchLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Runs the selected algorithm on the job set.
    ///
    /// Machine-count preconditions are checked before dispatch, so an
    /// unsupported pairing fails without starting any search. On success
    /// the winning order is re-evaluated into a full schedule for the
    /// report.
    pub fn solve(&self, jobs: &JobSet, algorithm: Algorithm) -> Result<SolveOutcome> {
        if let Some(required) = algorithm.required_machine_count() {
            let found = jobs.machine_count();
            if found != required {
                return Err(ScheduleError::InvalidMachineCount {
                    algorithm: algorithm.name(),
                    required,
                    found,
                });
            }
        }

        let started = Instant::now();
        let searched = match algorithm {
            Algorithm::Johnson => {
                let order = johnson(jobs)?;
                SearchOutcome::Complete(order)
            }
            Algorithm::ExhaustiveSearch => match exhaustive_search(jobs, &self.limit)? {
                SearchOutcome::Complete(optimum) => SearchOutcome::Complete(optimum.order),
                SearchOutcome::Aborted => SearchOutcome::Aborted,
            },
            Algorithm::BrownLomnicki => match brown_lomnicki(jobs, &self.limit)? {
                SearchOutcome::Complete(optimum) => SearchOutcome::Complete(optimum.order),
                SearchOutcome::Aborted => SearchOutcome::Aborted,
            },
            Algorithm::BruteForce => match brute_force(jobs, &self.limit)? {
                SearchOutcome::Complete(result) => SearchOutcome::Complete(result.order),
                SearchOutcome::Aborted => SearchOutcome::Aborted,
            },
        };

        let elapsed = started.elapsed();
        match searched {
            SearchOutcome::Complete(order) => {
                let schedule = makespan::evaluate(&order, jobs)?;
                Ok(SolveOutcome::Solved(SolveReport {
                    algorithm,
                    makespan: schedule.makespan(),
                    order,
                    schedule,
                    elapsed,
                }))
            }
            SearchOutcome::Aborted => Ok(SolveOutcome::Aborted { elapsed }),
        }
    }

    /// Solves from a request.
    pub fn solve_request(&self, request: &SolveRequest) -> Result<SolveOutcome> {
        self.solve(&request.jobs, request.algorithm)
    }
}
