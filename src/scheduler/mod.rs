//! CPU dispatch policies.
//!
//! Three classical policies over a fixed job set, each owning a private
//! copy of the jobs and its own clock:
//!
//! | Policy | Preemptive | Order |
//! |--------|-----------|-------|
//! | [`RoundRobin`] | yes | input order, one quantum per sweep |
//! | [`ShortestProcessNext`] | no | ascending cycles, stable on ties |
//! | [`PriorityQueue`] | no | random priority 1..=3, then name |
//!
//! # Usage
//!
//! ```
//! use u_cpu_sched::models::Job;
//! use u_cpu_sched::scheduler::{Scheduler, ShortestProcessNext};
//!
//! let jobs = vec![Job::new("A", 5), Job::new("B", 2), Job::new("C", 8)];
//! let mut spn = ShortestProcessNext::new(&jobs).unwrap();
//! spn.run();
//! assert_eq!(spn.completion_times()["B"], 2);
//! assert_eq!(spn.total_time(), 15);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod kpi;
mod priority;
mod round_robin;
mod spn;
mod state;

pub use kpi::{reports_to_json, PolicyKpi};
pub use priority::{PriorityQueue, PrioritySource, RandomPriority, MAX_PRIORITY, MIN_PRIORITY};
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use spn::ShortestProcessNext;
pub use state::{CompletionTimes, SchedulerState};

use crate::error::SchedulerError;

/// Uniform capability set of a dispatch policy.
///
/// Policies keep their own `run` signatures (Round Robin takes a
/// quantum); [`execute`](Scheduler::execute) runs with whatever the
/// policy was configured with.
pub trait Scheduler {
    /// Policy name (e.g., "Round Robin").
    fn name(&self) -> &'static str;

    /// Engine state: clock, completion times, trace.
    fn state(&self) -> &SchedulerState;

    /// Runs the policy to completion with its configured parameters.
    fn execute(&mut self) -> Result<(), SchedulerError>;

    /// Completion time per job name.
    fn completion_times(&self) -> &CompletionTimes {
        self.state().completion_times()
    }

    /// Elapsed simulated time.
    fn total_time(&self) -> i64 {
        self.state().total_time()
    }

    /// Mean of all recorded completion times; `0.0` before any dispatch.
    fn average_throughput(&self) -> f64 {
        self.state().average_throughput()
    }
}
