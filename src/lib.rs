//! Permutation flow-shop sequencing.
//!
//! Computes optimal orderings of jobs across a small fixed number of
//! machines, minimizing makespan. All jobs visit all machines in the
//! same machine order; an ordering is a single permutation applied on
//! every machine.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `JobSet`, `Order`, `Schedule`
//! - **`makespan`**: The shared evaluator — flow-shop recurrence producing
//!   start/end tables and the makespan of an ordering
//! - **`algorithms`**: Johnson's rule (2 machines), exhaustive search,
//!   Brown–Łomnicki branch-and-bound (3 machines), brute-force reference
//! - **`solver`**: Request/response façade — pick an algorithm, get back
//!   an order, its schedule, and the compute time
//! - **`error`**: Typed failures (`ScheduleError`)
//!
//! # References
//!
//! - Johnson (1954), "Optimal Two- and Three-Stage Production Schedules
//!   with Setup Times Included"
//! - Lomnicki (1965), "A Branch-and-Bound Algorithm for the Exact Solution
//!   of the Three-Machine Scheduling Problem"
//! - Brown & Lomnicki (1966), "Some Applications of the Branch-and-Bound
//!   Algorithm to the Machine Scheduling Problem"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

pub mod algorithms;
pub mod error;
pub mod makespan;
pub mod models;
pub mod solver;

pub use error::{Result, ScheduleError};
pub use models::{Job, JobSet, Order, Schedule};
