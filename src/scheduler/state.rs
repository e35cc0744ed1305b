//! Engine state shared by every policy.
//!
//! Each policy instance owns one `SchedulerState`, built from its own
//! copy of the input jobs. Nothing here is shared between policies.

use std::collections::HashMap;

use crate::error::SchedulerError;
use crate::models::{Job, Slice};
use crate::validation::ensure_valid;

/// Job name → simulated time at which the job last had cycles applied.
pub type CompletionTimes = HashMap<String, i64>;

/// Time bookkeeping for one policy run.
#[derive(Debug, Clone)]
pub struct SchedulerState {
    /// Jobs not yet dispatched to completion, in dispatch order.
    pub(crate) jobs: Vec<Job>,
    total_time: i64,
    completion_times: CompletionTimes,
    trace: Vec<Slice>,
}

impl SchedulerState {
    /// Validates `jobs` and takes a private copy of them.
    ///
    /// The caller's slice is never touched again.
    pub fn new(jobs: &[Job]) -> Result<Self, SchedulerError> {
        ensure_valid(jobs)?;
        Ok(Self {
            jobs: jobs.to_vec(),
            total_time: 0,
            completion_times: HashMap::with_capacity(jobs.len()),
            trace: Vec::new(),
        })
    }

    /// Elapsed simulated time.
    pub fn total_time(&self) -> i64 {
        self.total_time
    }

    /// Completion time per job name.
    pub fn completion_times(&self) -> &CompletionTimes {
        &self.completion_times
    }

    /// Dispatches in the order they happened.
    pub fn trace(&self) -> &[Slice] {
        &self.trace
    }

    /// Jobs still waiting for cycles. Empty after a run.
    pub fn remaining_jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Arithmetic mean of all recorded completion times.
    ///
    /// Returns `0.0` when nothing has been recorded yet, matching how
    /// the KPI layer reports averages over empty sets. Summed in `f64`:
    /// n completion times near the cycle total overflow an `i64` sum.
    pub fn average_throughput(&self) -> f64 {
        if self.completion_times.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.completion_times.values().map(|&t| t as f64).sum();
        sum / self.completion_times.len() as f64
    }

    /// Advances the clock by `cycles` on behalf of `job` and records the
    /// new time as that job's completion time. Returns the new time.
    ///
    /// Validation caps the cycle total at `i64::MAX`, so the clock cannot
    /// overflow while policies only hand out the validated cycles.
    pub(crate) fn record(&mut self, job: &str, cycles: i64, priority: Option<u8>) -> i64 {
        let start = self.total_time;
        self.total_time += cycles;
        self.completion_times.insert(job.to_string(), self.total_time);

        let slice = Slice::new(job, start, self.total_time);
        self.trace.push(match priority {
            Some(p) => slice.with_priority(p),
            None => slice,
        });

        self.total_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_copies_input() {
        let jobs = vec![Job::new("A", 5)];
        let mut state = SchedulerState::new(&jobs).unwrap();
        state.jobs[0].cycles = 0;
        assert_eq!(jobs[0].cycles, 5);
    }

    #[test]
    fn test_state_rejects_invalid_jobs() {
        assert!(SchedulerState::new(&[]).is_err());
        assert!(SchedulerState::new(&[Job::new("A", -3)]).is_err());
    }

    #[test]
    fn test_record_advances_clock() {
        let mut state = SchedulerState::new(&[Job::new("A", 5), Job::new("B", 2)]).unwrap();
        assert_eq!(state.record("A", 3, None), 3);
        assert_eq!(state.record("B", 2, Some(1)), 5);
        assert_eq!(state.record("A", 2, None), 7);

        assert_eq!(state.total_time(), 7);
        assert_eq!(state.completion_times()["A"], 7);
        assert_eq!(state.completion_times()["B"], 5);
        assert_eq!(state.trace().len(), 3);
        assert_eq!(state.trace()[1], Slice::new("B", 3, 5).with_priority(1));
    }

    #[test]
    fn test_average_throughput() {
        let mut state = SchedulerState::new(&[Job::new("A", 5), Job::new("B", 2)]).unwrap();
        state.record("B", 2, None);
        state.record("A", 5, None);
        // (2 + 7) / 2
        assert!((state.average_throughput() - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_average_throughput_large_cycles() {
        let quarter = i64::MAX / 4;
        let mut state = SchedulerState::new(&[
            Job::new("A", quarter),
            Job::new("B", quarter),
            Job::new("C", quarter),
        ])
        .unwrap();
        state.record("A", quarter, None);
        state.record("B", quarter, None);
        state.record("C", quarter, None);

        assert_eq!(state.total_time(), 3 * quarter);
        // (1 + 2 + 3) * quarter / 3
        let expected = 2.0 * quarter as f64;
        assert!(state.average_throughput() > 0.0);
        assert!((state.average_throughput() - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_state_rejects_cycle_overflow() {
        let err = SchedulerState::new(&[Job::new("A", i64::MAX), Job::new("B", 1)]).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::InvalidInput(ref e)
                if e[0].kind == crate::validation::ValidationErrorKind::CycleOverflow
        ));
    }

    #[test]
    fn test_average_throughput_empty() {
        let state = SchedulerState::new(&[Job::new("A", 5)]).unwrap();
        assert!((state.average_throughput() - 0.0).abs() < 1e-10);
    }
}
