//! Dispatch trace model.
//!
//! A slice records that a job held the CPU over `[start, end)` on a
//! policy's simulated timeline. Non-preemptive policies produce one
//! slice per job; Round Robin produces one per quantum.

use serde::{Deserialize, Serialize};

/// One contiguous run of a job on the simulated CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Dispatched job name.
    pub job: String,
    /// Simulated time the slice started.
    pub start: i64,
    /// Simulated time the slice ended.
    pub end: i64,
    /// Priority the job was dispatched with, if the policy uses one.
    pub priority: Option<u8>,
}

impl Slice {
    /// Creates a slice without a priority.
    pub fn new(job: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            job: job.into(),
            start,
            end,
            priority: None,
        }
    }

    /// Attaches the dispatch priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Cycles consumed during this slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_duration() {
        let slice = Slice::new("A", 3, 7).with_priority(2);
        assert_eq!(slice.duration(), 4);
        assert_eq!(slice.priority, Some(2));
    }
}
