//! Per-policy performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Time | Clock value when the run ended |
//! | Average Throughput | Mean of recorded completion times |
//! | Makespan | Latest completion time |
//! | Dispatches | Number of slices handed out |
//!
//! "Throughput" here is a latency-style average (mean completion time),
//! not jobs per unit time.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Scheduler;
use crate::error::SchedulerError;

/// Summary of one finished policy run.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyKpi {
    /// Policy name.
    pub policy: String,
    /// Simulated time at the end of the run.
    pub total_time: i64,
    /// Mean completion time; `0.0` if nothing was recorded.
    pub average_throughput: f64,
    /// Latest completion time; `0` if nothing was recorded.
    pub makespan: i64,
    /// Number of dispatched slices.
    pub dispatches: usize,
    /// Completion time per job, sorted by name.
    pub completion_times: BTreeMap<String, i64>,
}

impl PolicyKpi {
    /// Computes KPIs from a scheduler's current state.
    pub fn calculate<S: Scheduler + ?Sized>(scheduler: &S) -> Self {
        let state = scheduler.state();
        let completion_times: BTreeMap<String, i64> = state
            .completion_times()
            .iter()
            .map(|(name, &t)| (name.clone(), t))
            .collect();

        Self {
            policy: scheduler.name().to_string(),
            total_time: state.total_time(),
            average_throughput: state.average_throughput(),
            makespan: completion_times.values().copied().max().unwrap_or(0),
            dispatches: state.trace().len(),
            completion_times,
        }
    }
}

/// Renders reports as a pretty-printed JSON array.
pub fn reports_to_json(reports: &[PolicyKpi]) -> Result<String, SchedulerError> {
    serde_json::to_string_pretty(reports).map_err(SchedulerError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::scheduler::{RoundRobin, ShortestProcessNext};

    #[test]
    fn test_kpi_spn() {
        let jobs = vec![Job::new("A", 5), Job::new("B", 2), Job::new("C", 8)];
        let mut spn = ShortestProcessNext::new(&jobs).unwrap();
        spn.run();

        let kpi = PolicyKpi::calculate(&spn);
        assert_eq!(kpi.policy, "Shortest Process Next");
        assert_eq!(kpi.total_time, 15);
        assert_eq!(kpi.makespan, 15);
        assert_eq!(kpi.dispatches, 3);
        assert!((kpi.average_throughput - 8.0).abs() < 1e-10); // (2+7+15)/3
        let names: Vec<&str> = kpi.completion_times.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_kpi_round_robin_dispatches() {
        let mut rr = RoundRobin::new(&[Job::new("A", 5), Job::new("B", 2)]).unwrap();
        rr.run(3).unwrap();

        let kpi = PolicyKpi::calculate(&rr);
        assert_eq!(kpi.dispatches, 3);
        assert_eq!(kpi.makespan, 7);
        assert!((kpi.average_throughput - 6.0).abs() < 1e-10); // (7+5)/2
    }

    #[test]
    fn test_kpi_before_run() {
        let rr = RoundRobin::new(&[Job::new("A", 5)]).unwrap();
        let kpi = PolicyKpi::calculate(&rr);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.dispatches, 0);
        assert!((kpi.average_throughput - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_reports_to_json() {
        let mut spn = ShortestProcessNext::new(&[Job::new("A", 4), Job::new("B", 1)]).unwrap();
        spn.run();

        let json = reports_to_json(&[PolicyKpi::calculate(&spn)]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["total_time"], 5);
        assert_eq!(parsed[0]["completion_times"]["B"], 1);
    }

    #[test]
    fn test_kpi_serializes() {
        let mut spn = ShortestProcessNext::new(&[Job::new("A", 1)]).unwrap();
        spn.run();
        let json = serde_json::to_value(PolicyKpi::calculate(&spn)).unwrap();
        assert_eq!(json["policy"], "Shortest Process Next");
        assert_eq!(json["completion_times"]["A"], 1);
    }
}
