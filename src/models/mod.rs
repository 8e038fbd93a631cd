//! Flow-shop domain models.
//!
//! Core data types for permutation flow-shop problems and their
//! solutions. A problem is a [`JobSet`] (per-job, per-machine processing
//! times); a solution is an [`Order`] (a permutation of job indices) and
//! the [`Schedule`] derived from it.
//!
//! All types are immutable once constructed: each algorithm run produces
//! fresh `Order` and `Schedule` values, and a `Schedule` is always
//! recomputed from the `Order` that produced it, never persisted on its own.

mod job;
mod order;
mod schedule;

pub use job::{Job, JobSet};
pub use order::Order;
pub use schedule::Schedule;
