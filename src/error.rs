//! Typed failures for flow-shop sequencing.
//!
//! Every error is detected synchronously, before or during a computation,
//! and returned to the caller. The core never logs or swallows failures;
//! mapping them to user-facing messages is the presentation layer's job.
//! Algorithms are deterministic and stateless, so no error is retryable.

use std::error::Error;
use std::fmt;

/// Result alias for flow-shop operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// A flow-shop sequencing failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// An algorithm was invoked with a machine count it does not support.
    InvalidMachineCount {
        /// Name of the rejecting algorithm.
        algorithm: &'static str,
        /// Machine count the algorithm requires.
        required: usize,
        /// Machine count found in the job set.
        found: usize,
    },
    /// The job set is structurally invalid: empty, ragged machine counts,
    /// fewer than two machines, or non-positive processing times.
    MalformedJobSet(String),
    /// An order handed to the evaluator is not a permutation of the
    /// job set's indices.
    PermutationMismatch(String),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMachineCount {
                algorithm,
                required,
                found,
            } => write!(
                f,
                "{algorithm} requires exactly {required} machines per job, found {found}"
            ),
            Self::MalformedJobSet(message) => write!(f, "malformed job set: {message}"),
            Self::PermutationMismatch(message) => {
                write!(f, "order is not a permutation of the job indices: {message}")
            }
        }
    }
}

impl Error for ScheduleError {}
