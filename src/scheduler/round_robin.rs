//! Round Robin: time-sliced cyclic dispatch.
//!
//! # Algorithm
//!
//! 1. Sweep the active jobs in their original order.
//! 2. Each job receives `min(quantum, remaining)` cycles; the clock
//!    advances by that amount and the job's completion time is set to
//!    the new clock value.
//! 3. After the sweep, completed jobs leave the active set.
//! 4. Repeat until the active set is empty.
//!
//! The completion time is overwritten on every slice, so it always holds
//! the last time the job had cycles applied. Once the job is done that is
//! its true completion time.
//!
//! # Complexity
//! O(C / q + n) slices, where C = total cycles, q = quantum, n = jobs.

use tracing::{info, trace};

use super::{Scheduler, SchedulerState};
use crate::error::SchedulerError;
use crate::models::Job;

/// Quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 25;

/// Preemptive round robin policy.
///
/// # Example
/// ```
/// use u_cpu_sched::models::Job;
/// use u_cpu_sched::scheduler::{RoundRobin, Scheduler};
///
/// let mut rr = RoundRobin::new(&[Job::new("A", 5), Job::new("B", 2)]).unwrap();
/// rr.run(3).unwrap();
/// assert_eq!(rr.completion_times()["A"], 7);
/// assert_eq!(rr.completion_times()["B"], 5);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobin {
    state: SchedulerState,
    quantum: i64,
}

impl RoundRobin {
    /// Creates the policy over a private copy of `jobs`.
    pub fn new(jobs: &[Job]) -> Result<Self, SchedulerError> {
        Ok(Self {
            state: SchedulerState::new(jobs)?,
            quantum: DEFAULT_QUANTUM,
        })
    }

    /// Sets the quantum used by [`Scheduler::execute`].
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Configured quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Runs until every job is complete, giving each at most `quantum`
    /// cycles per sweep.
    ///
    /// # Errors
    /// [`SchedulerError::InvalidQuantum`] if `quantum <= 0`. The check
    /// happens before any dispatch, so the state is left untouched.
    pub fn run(&mut self, quantum: i64) -> Result<(), SchedulerError> {
        if quantum <= 0 {
            return Err(SchedulerError::InvalidQuantum(quantum));
        }

        let mut active = std::mem::take(&mut self.state.jobs);
        let mut sweeps = 0usize;

        while !active.is_empty() {
            sweeps += 1;
            for job in active.iter_mut() {
                let allocated = job.consume(quantum);
                let now = self.state.record(&job.name, allocated, None);
                trace!(job = %job.name, allocated, remaining = job.cycles, now, "slice");

                if job.is_complete() {
                    info!(job = %job.name, completed_at = now, "job completed");
                }
            }
            active.retain(|job| !job.is_complete());
        }

        info!(
            policy = self.name(),
            quantum,
            sweeps,
            total_time = self.state.total_time(),
            "run finished"
        );
        Ok(())
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn state(&self) -> &SchedulerState {
        &self.state
    }

    fn execute(&mut self) -> Result<(), SchedulerError> {
        self.run(self.quantum)
    }
}
