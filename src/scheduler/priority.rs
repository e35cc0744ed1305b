//! Priority Queue: randomized-priority, non-preemptive dispatch.
//!
//! # Algorithm
//!
//! 1. At run time, draw a priority for every job from a [`PrioritySource`].
//!    Lower value = dispatched earlier.
//! 2. Push `(priority, name)` into a min-heap. Equal priorities fall back
//!    to lexical name order, so ties are deterministic whatever the draw.
//! 3. Pop until empty, running each job to completion.
//!
//! The default source draws uniformly from `MIN_PRIORITY..=MAX_PRIORITY`.
//! Seed it (or substitute a stub) to make a run reproducible.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{Scheduler, SchedulerState};
use crate::error::SchedulerError;
use crate::models::Job;

/// Highest dispatch priority the random source draws.
pub const MIN_PRIORITY: u8 = 1;
/// Lowest dispatch priority the random source draws.
pub const MAX_PRIORITY: u8 = 3;

/// Supplies a dispatch priority per job. Lower = dispatched first.
///
/// Closures `FnMut(&Job) -> u8` implement this, which is handy for
/// scripting a dispatch order in tests.
pub trait PrioritySource {
    /// Draws the priority for `job`.
    fn draw(&mut self, job: &Job) -> u8;
}

impl<F: FnMut(&Job) -> u8> PrioritySource for F {
    fn draw(&mut self, job: &Job) -> u8 {
        self(job)
    }
}

/// Uniform draw from `MIN_PRIORITY..=MAX_PRIORITY`, independent per job.
#[derive(Debug, Clone)]
pub struct RandomPriority<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPriority<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPriority<StdRng> {
    /// Seeded generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> PrioritySource for RandomPriority<R> {
    fn draw(&mut self, _job: &Job) -> u8 {
        self.rng.random_range(MIN_PRIORITY..=MAX_PRIORITY)
    }
}

/// Non-preemptive priority queue policy.
///
/// # Example
/// ```
/// use u_cpu_sched::models::Job;
/// use u_cpu_sched::scheduler::{PriorityQueue, Scheduler};
///
/// let jobs = vec![Job::new("A", 5), Job::new("B", 2)];
/// let mut pq = PriorityQueue::with_seed(&jobs, 42).unwrap();
/// pq.run();
/// assert_eq!(pq.total_time(), 7);
/// ```
pub struct PriorityQueue<P = RandomPriority> {
    state: SchedulerState,
    priorities: P,
}

impl PriorityQueue<RandomPriority> {
    /// Creates the policy with priorities drawn from OS entropy.
    pub fn new(jobs: &[Job]) -> Result<Self, SchedulerError> {
        Self::with_priority_source(jobs, RandomPriority::from_entropy())
    }

    /// Creates the policy with a seeded priority draw.
    pub fn with_seed(jobs: &[Job], seed: u64) -> Result<Self, SchedulerError> {
        Self::with_priority_source(jobs, RandomPriority::seeded(seed))
    }
}

impl<P: PrioritySource> PriorityQueue<P> {
    /// Creates the policy with a caller-supplied priority source.
    pub fn with_priority_source(jobs: &[Job], priorities: P) -> Result<Self, SchedulerError> {
        Ok(Self {
            state: SchedulerState::new(jobs)?,
            priorities,
        })
    }

    /// Draws priorities and runs every job to completion in heap order.
    pub fn run(&mut self) {
        let jobs = std::mem::take(&mut self.state.jobs);
        let mut heap = BinaryHeap::with_capacity(jobs.len());

        for (idx, job) in jobs.iter().enumerate() {
            let priority = self.priorities.draw(job);
            // Names are unique, so the index never decides an ordering
            heap.push(Reverse((priority, job.name.as_str(), idx)));
        }

        while let Some(Reverse((priority, name, idx))) = heap.pop() {
            let cycles = jobs[idx].cycles;
            let now = self.state.record(name, cycles, Some(priority));
            debug!(job = name, priority, cycles, completed_at = now, "dispatched");
        }

        info!(
            policy = self.name(),
            total_time = self.state.total_time(),
            "run finished"
        );
    }
}

impl<P: PrioritySource> Scheduler for PriorityQueue<P> {
    fn name(&self) -> &'static str {
        "Priority Queue"
    }

    fn state(&self) -> &SchedulerState {
        &self.state
    }

    fn execute(&mut self) -> Result<(), SchedulerError> {
        self.run();
        Ok(())
    }
}

impl<P> std::fmt::Debug for PriorityQueue<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
