//! Job model.
//!
//! A job is the unit of schedulable work: a unique name and the number
//! of execution cycles it still needs. Policies decrement `cycles` in
//! place on their own copy; a job is complete exactly when `cycles == 0`.

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// A job to be dispatched.
///
/// # Time Representation
/// Cycles are indivisible units of simulated time. They are signed so
/// that malformed input (negative counts) can be represented and
/// rejected by [`validate_jobs`](crate::validation::validate_jobs)
/// instead of failing somewhere in deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job name within one simulation run.
    pub name: String,
    /// Remaining execution cycles.
    pub cycles: i64,
}

impl Job {
    /// Creates a job with the given name and cycle count.
    pub fn new(name: impl Into<String>, cycles: i64) -> Self {
        Self {
            name: name.into(),
            cycles,
        }
    }

    /// Whether the job has no work left.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cycles == 0
    }

    /// Consumes up to `quantum` cycles and returns how many were consumed.
    pub(crate) fn consume(&mut self, quantum: i64) -> i64 {
        let allocated = quantum.min(self.cycles);
        self.cycles -= allocated;
        allocated
    }
}

/// Parses a JSON job document: `[{"name": "A", "cycles": 5}, ...]`.
///
/// Only the shape is checked here. Semantic checks (duplicates,
/// negative cycles) happen when a policy is constructed.
///
/// # Example
/// ```
/// use u_cpu_sched::models::parse_jobs;
///
/// let jobs = parse_jobs(r#"[{"name": "A", "cycles": 5}]"#).unwrap();
/// assert_eq!(jobs[0].cycles, 5);
/// ```
pub fn parse_jobs(json: &str) -> Result<Vec<Job>, SchedulerError> {
    Ok(serde_json::from_str(json)?)
}

/// Sum of cycles across a job list.
pub fn total_cycles(jobs: &[Job]) -> i64 {
    jobs.iter().map(|j| j.cycles).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_consume_caps_at_remaining() {
        let mut job = Job::new("A", 5);
        assert_eq!(job.consume(3), 3);
        assert_eq!(job.cycles, 2);
        assert!(!job.is_complete());

        assert_eq!(job.consume(3), 2);
        assert_eq!(job.cycles, 0);
        assert!(job.is_complete());

        // Nothing left to hand out
        assert_eq!(job.consume(3), 0);
    }

    #[test]
    fn test_parse_jobs() {
        let jobs = parse_jobs(
            r#"[
                {"name": "A", "cycles": 5},
                {"name": "B", "cycles": 2}
            ]"#,
        )
        .unwrap();
        assert_eq!(jobs, vec![Job::new("A", 5), Job::new("B", 2)]);
        assert_eq!(total_cycles(&jobs), 7);
    }

    #[test]
    fn test_parse_jobs_keeps_negative_cycles() {
        // Rejected later by validation, not by the parser
        let jobs = parse_jobs(r#"[{"name": "A", "cycles": -1}]"#).unwrap();
        assert_eq!(jobs[0].cycles, -1);
    }

    #[test]
    fn test_parse_jobs_malformed() {
        let err = parse_jobs(r#"[{"name": "A"}]"#).unwrap_err();
        assert!(matches!(err, SchedulerError::Parse(_)));
    }
}
