//! CPU scheduling.
//!
//! This module turns a declarative process workload into a dispatch schedule. It
//! provides:
//! 1. **Data model:** [`Process`] input records and [`ScheduleSegment`] trace entries.
//! 2. **Policies:** Five interchangeable dispatch policies under [`policies`].
//! 3. **Metrics:** Per-process timing statistics and aggregates under [`metrics`].
//!
//! All policies share one clock model: the simulation clock starts at the minimum
//! arrival time, and whenever no ready process exists it jumps to the next unmet
//! arrival instead of spinning.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ValidationError;

/// Schedule timing metrics derived from a completed schedule.
pub mod metrics;
/// The five dispatch policies.
pub mod policies;

pub use metrics::{ProcessMetrics, ScheduleMetrics};
pub use policies::CpuAlgorithm;

/// A process as described by the workload.
///
/// Immutable input; preemptive policies track remaining time in their own
/// working copies, so a `Process` is never mutated across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process id, e.g. `"P1"`.
    pub pid: String,
    /// Time the process becomes ready.
    pub arrival: u32,
    /// Total CPU time the process requires. Must be positive.
    pub burst: u32,
    /// Scheduling priority; lower numeric value means higher priority.
    #[serde(default)]
    pub priority: i32,
}

/// One contiguous stretch of CPU time granted to a process.
///
/// Segments are chronological and never overlap. Under preemption the same pid
/// appears in multiple segments; adjacent same-pid segments are stored separately
/// when a Round Robin quantum expires and the process is immediately re-dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSegment {
    /// Process the CPU was granted to.
    pub pid: String,
    /// Inclusive start time.
    pub start: u32,
    /// Exclusive end time; always greater than `start`.
    pub end: u32,
}

/// A CPU scheduling request: one algorithm over one workload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuRequest {
    /// Dispatch policy to simulate.
    pub algorithm: CpuAlgorithm,
    /// Time quantum; required by Round Robin, ignored by the other policies.
    #[serde(default)]
    pub quantum: Option<u32>,
    /// The workload.
    pub processes: Vec<Process>,
}

/// The complete result of a CPU scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuResponse {
    /// Chronological dispatch trace.
    pub schedule: Vec<ScheduleSegment>,
    /// Per-process timing metrics, in workload order.
    pub metrics: Vec<ProcessMetrics>,
    /// Percentage of the schedule span spent executing.
    pub utilization: f64,
    /// Processes completed per time unit of schedule span.
    pub throughput: f64,
    /// Mean waiting time over processes that ran.
    pub avg_waiting: f64,
    /// Mean turnaround time over processes that ran.
    pub avg_turnaround: f64,
    /// Mean response time over processes that ran.
    pub avg_response: f64,
}

/// Runs one CPU scheduling simulation.
///
/// Validates the workload, produces the schedule under the selected policy, and
/// derives metrics from the completed schedule. An empty workload yields an empty
/// schedule with zero metrics.
///
/// # Errors
///
/// [`ValidationError`] when a process has zero burst, a pid repeats, or Round
/// Robin is selected without a positive quantum.
pub fn simulate(request: &CpuRequest) -> Result<CpuResponse, ValidationError> {
    validate(request)?;
    trace!(
        algorithm = ?request.algorithm,
        processes = request.processes.len(),
        "cpu simulation"
    );

    let schedule = match request.algorithm {
        CpuAlgorithm::Fcfs => policies::fcfs::schedule(&request.processes),
        CpuAlgorithm::Sjf => policies::sjf::schedule(&request.processes),
        CpuAlgorithm::Srtf => policies::srtf::schedule(&request.processes),
        CpuAlgorithm::Priority => policies::priority::schedule(&request.processes),
        // Validation guarantees the quantum is present and positive.
        CpuAlgorithm::RoundRobin => {
            policies::rr::schedule(&request.processes, request.quantum.unwrap_or(1))
        }
    };

    let m = metrics::evaluate(&request.processes, &schedule);
    Ok(CpuResponse {
        schedule,
        metrics: m.per_process,
        utilization: m.utilization,
        throughput: m.throughput,
        avg_waiting: m.avg_waiting,
        avg_turnaround: m.avg_turnaround,
        avg_response: m.avg_response,
    })
}

fn validate(request: &CpuRequest) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for p in &request.processes {
        if p.burst == 0 {
            return Err(ValidationError::ZeroBurst { pid: p.pid.clone() });
        }
        if !seen.insert(p.pid.as_str()) {
            return Err(ValidationError::DuplicatePid { pid: p.pid.clone() });
        }
    }
    if request.algorithm == CpuAlgorithm::RoundRobin {
        match request.quantum {
            None => return Err(ValidationError::MissingQuantum),
            Some(0) => return Err(ValidationError::ZeroQuantum),
            Some(_) => {}
        }
    }
    Ok(())
}
