//! Shortest Process Next: static, non-preemptive shortest-job-first.
//!
//! No jobs arrive or get preempted during a run, so one stable sort by
//! cycles up front gives the same order as repeatedly picking the
//! shortest remaining job. Equal cycle counts keep their input order.
//!
//! # Reference
//! Smith (1956), optimal for minimizing mean flow time on single machine.

use tracing::{debug, info};

use super::{Scheduler, SchedulerState};
use crate::error::SchedulerError;
use crate::models::Job;

/// Non-preemptive shortest-process-next policy.
#[derive(Debug, Clone)]
pub struct ShortestProcessNext {
    state: SchedulerState,
}

impl ShortestProcessNext {
    /// Creates the policy over a private copy of `jobs`.
    pub fn new(jobs: &[Job]) -> Result<Self, SchedulerError> {
        Ok(Self {
            state: SchedulerState::new(jobs)?,
        })
    }

    /// Runs every job to completion in ascending cycle order.
    pub fn run(&mut self) {
        let mut jobs = std::mem::take(&mut self.state.jobs);
        // `sort_by_key` is stable: ties stay in input order
        jobs.sort_by_key(|job| job.cycles);

        for job in &jobs {
            let now = self.state.record(&job.name, job.cycles, None);
            debug!(job = %job.name, cycles = job.cycles, completed_at = now, "dispatched");
        }

        info!(
            policy = self.name(),
            total_time = self.state.total_time(),
            "run finished"
        );
    }
}

impl Scheduler for ShortestProcessNext {
    fn name(&self) -> &'static str {
        "Shortest Process Next"
    }

    fn state(&self) -> &SchedulerState {
        &self.state
    }

    fn execute(&mut self) -> Result<(), SchedulerError> {
        self.run();
        Ok(())
    }
}
