//! Sequencing algorithms.
//!
//! All algorithms are pure functions of their [`JobSet`](crate::models::JobSet)
//! input: no shared state between invocations, deterministic results
//! (branch-and-bound tie handling aside, see
//! [`brown_lomnicki`]). Independent invocations may run concurrently
//! with no synchronization beyond collecting results.
//!
//! The searches with factorial worst cases ([`exhaustive_search`],
//! [`brown_lomnicki`], [`brute_force`]) take a [`SearchLimit`] checked
//! between iterations; an exhausted limit surfaces as
//! [`SearchOutcome::Aborted`], not as an error.
//!
//! # References
//!
//! - Johnson (1954), "Optimal Two- and Three-Stage Production Schedules
//!   with Setup Times Included"
//! - Brown & Lomnicki (1966), "Some Applications of the Branch-and-Bound
//!   Algorithm to the Machine Scheduling Problem"

mod branch_and_bound;
mod brute_force;
mod exhaustive;
mod johnson;

pub use branch_and_bound::brown_lomnicki;
pub use brute_force::{brute_force, BruteForceResult};
pub use exhaustive::exhaustive_search;
pub use johnson::johnson;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::models::Order;

/// An optimal order together with its makespan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimum {
    /// The minimizing processing order.
    pub order: Order,
    /// Its makespan.
    pub makespan: i64,
}

/// Result of a bounded search: either a completed answer or an abort
/// because the [`SearchLimit`] was exhausted mid-search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome<T> {
    /// The search ran to completion.
    Complete(T),
    /// The deadline passed or the cancel token fired before completion.
    Aborted,
}

impl<T> SearchOutcome<T> {
    /// The completed value, if the search finished.
    pub fn complete(self) -> Option<T> {
        match self {
            Self::Complete(value) => Some(value),
            Self::Aborted => None,
        }
    }

    /// Whether the search was aborted.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Externally imposed bound on a long-running search.
///
/// Combines an optional wall-clock deadline with an optional cooperative
/// cancel token. Algorithms poll [`is_exhausted`](SearchLimit::is_exhausted)
/// between permutations / queue pops. The default limit is unbounded.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use flowshop::algorithms::SearchLimit;
///
/// let limit = SearchLimit::new().with_timeout(Duration::from_secs(5));
/// assert!(!limit.is_exhausted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchLimit {
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchLimit {
    /// Creates an unbounded limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a wall-clock budget, measured from now.
    pub fn with_timeout(mut self, budget: Duration) -> Self {
        self.deadline = Some(Instant::now() + budget);
        self
    }

    /// Attaches a cancel token. Storing `true` in the token aborts the
    /// search at its next poll.
    pub fn with_cancel_token(mut self, token: Arc<AtomicBool>) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Whether the deadline has passed or the cancel token has fired.
    pub fn is_exhausted(&self) -> bool {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return true;
            }
        }
        self.cancel
            .as_ref()
            .is_some_and(|token| token.load(Ordering::Relaxed))
    }
}
