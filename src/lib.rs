//! CPU dispatch simulation for the U-Engine ecosystem.
//!
//! Accounts for job completion times and mean throughput under three
//! classical single-CPU policies. There is no real clock, I/O, or
//! concurrency: time is a counter advanced by the cycles each job
//! consumes.
//!
//! # Modules
//!
//! - **`models`**: `Job` and the `Slice` dispatch trace
//! - **`validation`**: Input integrity checks (empty list, duplicate names, negative cycles)
//! - **`scheduler`**: Engine state, the `Scheduler` trait, Round Robin,
//!   Shortest Process Next, Priority Queue, and per-policy KPIs
//! - **`simulation`**: Runs every policy over independent copies of one job list
//! - **`error`**: `SchedulerError`
//!
//! # Logging
//!
//! Dispatches and completions are emitted as `tracing` events. The
//! library never installs a subscriber.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use error::SchedulerError;
