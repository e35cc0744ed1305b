use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use u_cpu_sched::models::parse_jobs;
use u_cpu_sched::scheduler::{reports_to_json, PolicyKpi};
use u_cpu_sched::simulation::{Simulation, SimulationConfig};
use u_cpu_sched::SchedulerError;

/// Simulate CPU dispatch policies over a job file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON job file: [{"name": "A", "cycles": 5}, ...]
    #[arg(default_value = "jobs.json")]
    jobs: PathBuf,

    /// JSON config file: {"quantum": 25, "seed": 7}. Flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Round Robin quantum [default: 25].
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Seed for the priority queue's random priorities.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print reports as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SchedulerError> {
    let jobs = parse_jobs(&std::fs::read_to_string(&args.jobs)?)?;

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SimulationConfig::default(),
    };
    if let Some(quantum) = args.quantum {
        config = config.with_quantum(quantum);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let reports = Simulation::new(jobs, config)?.run_all()?;
    if args.json {
        println!("{}", reports_to_json(&reports)?);
    } else {
        reports.iter().for_each(print_report);
    }
    Ok(())
}

fn print_report(report: &PolicyKpi) {
    println!("{}", report.policy);
    for (job, time) in &report.completion_times {
        println!("  {job}: {time}");
    }
    println!(
        "  average throughput: {:.2} (total time {})",
        report.average_throughput, report.total_time
    );
}
