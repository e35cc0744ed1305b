//! Runs every policy over the same job list.
//!
//! Each policy receives its own copy of the jobs, so no run can observe
//! another's mutations, and the caller's list is left as it was.

use serde::Deserialize;
use tracing::info;

use crate::error::SchedulerError;
use crate::models::Job;
use crate::scheduler::{
    PolicyKpi, PriorityQueue, RandomPriority, RoundRobin, Scheduler, ShortestProcessNext,
    DEFAULT_QUANTUM,
};
use crate::validation::ensure_valid;

/// Simulation parameters.
///
/// Loadable from a JSON document; missing fields take their defaults:
///
/// ```
/// use u_cpu_sched::simulation::SimulationConfig;
///
/// let config = SimulationConfig::from_json(r#"{"quantum": 10}"#).unwrap();
/// assert_eq!(config.quantum, 10);
/// assert_eq!(config.seed, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin quantum.
    pub quantum: i64,
    /// Priority draw seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON config document: `{"quantum": 25, "seed": 7}`.
    pub fn from_json(json: &str) -> Result<Self, SchedulerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the priority draw seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Driver that runs Round Robin, Shortest Process Next, and Priority
/// Queue over one job list.
///
/// # Example
///
/// ```
/// use u_cpu_sched::models::Job;
/// use u_cpu_sched::simulation::{Simulation, SimulationConfig};
///
/// let jobs = vec![Job::new("A", 5), Job::new("B", 2), Job::new("C", 8)];
/// let sim = Simulation::new(jobs, SimulationConfig::default().with_seed(1)).unwrap();
/// let reports = sim.run_all().unwrap();
/// assert_eq!(reports.len(), 3);
/// assert!(reports.iter().all(|r| r.total_time == 15));
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    jobs: Vec<Job>,
    config: SimulationConfig,
}

impl Simulation {
    /// Validates the jobs and config up front.
    pub fn new(jobs: Vec<Job>, config: SimulationConfig) -> Result<Self, SchedulerError> {
        ensure_valid(&jobs)?;
        if config.quantum <= 0 {
            return Err(SchedulerError::InvalidQuantum(config.quantum));
        }
        Ok(Self { jobs, config })
    }

    /// Input jobs, as supplied.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs all three policies in order and returns their KPIs.
    pub fn run_all(&self) -> Result<Vec<PolicyKpi>, SchedulerError> {
        let priorities = match self.config.seed {
            Some(seed) => RandomPriority::seeded(seed),
            None => RandomPriority::from_entropy(),
        };

        let mut round_robin = RoundRobin::new(&self.jobs)?.with_quantum(self.config.quantum);
        let mut spn = ShortestProcessNext::new(&self.jobs)?;
        let mut priority_queue = PriorityQueue::with_priority_source(&self.jobs, priorities)?;

        let policies: [&mut dyn Scheduler; 3] = [&mut round_robin, &mut spn, &mut priority_queue];
        let mut reports = Vec::with_capacity(policies.len());
        for policy in policies {
            policy.execute()?;
            let kpi = PolicyKpi::calculate(&*policy);
            info!(
                policy = %kpi.policy,
                average_throughput = kpi.average_throughput,
                "average throughput"
            );
            reports.push(kpi);
        }

        Ok(reports)
    }
}
