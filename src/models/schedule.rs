//! Schedule (solution) model.
//!
//! A schedule is the fully timed realization of an [`Order`]: start and
//! end times for every job on every machine, from which the makespan is
//! read off. Schedules are derived values — always recomputed by the
//! evaluator from an order and a job set, never edited in place.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

use serde::{Deserialize, Serialize};

use super::Order;

/// Start/end times of every operation under a fixed processing order.
///
/// Both tables are indexed `[machine][position]`, where `position` is the
/// position in the order (not the job index); the job at a position is
/// `order.job_at(position)`. Built by [`crate::makespan::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The order this schedule realizes.
    pub order: Order,
    /// Start times, `start[machine][position]`.
    pub start: Vec<Vec<i64>>,
    /// End times, `end[machine][position]`.
    pub end: Vec<Vec<i64>>,
}

impl Schedule {
    /// Makespan: end time of the last position on the last machine.
    pub fn makespan(&self) -> i64 {
        self.end
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(0)
    }

    /// Number of machines.
    pub fn machine_count(&self) -> usize {
        self.start.len()
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.order.len()
    }

    /// Start time of the job at `position` on `machine`.
    #[inline]
    pub fn start_at(&self, machine: usize, position: usize) -> i64 {
        self.start[machine][position]
    }

    /// End time of the job at `position` on `machine`.
    #[inline]
    pub fn end_at(&self, machine: usize, position: usize) -> i64 {
        self.end[machine][position]
    }

    /// Idle time on a machine: gaps between consecutive operations plus
    /// the wait before its first operation.
    pub fn idle_time(&self, machine: usize) -> i64 {
        let starts = &self.start[machine];
        let ends = &self.end[machine];
        let mut idle = starts.first().copied().unwrap_or(0);
        for position in 1..starts.len() {
            idle += starts[position] - ends[position - 1];
        }
        idle
    }
}
