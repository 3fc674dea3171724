//! Schedule timing metrics.
//!
//! Derives per-process statistics and aggregate figures from any completed
//! schedule. It provides:
//! 1. **Per-process:** First dispatch, completion, waiting, turnaround, response.
//! 2. **Aggregates:** CPU utilization, throughput, and mean times.
//!
//! Everything here is a pure function of the schedule and the original workload;
//! it works for any policy, preemptive or not, because a process's first dispatch
//! and final completion are read off its segments rather than tracked during
//! simulation.

use serde::Serialize;

use super::{Process, ScheduleSegment};

/// Timing statistics for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    /// Process id.
    pub pid: String,
    /// Arrival time, copied from the workload.
    pub arrival: u32,
    /// Burst time, copied from the workload.
    pub burst: u32,
    /// Priority, copied from the workload.
    pub priority: i32,
    /// Time of the process's first scheduled segment; `None` if it never ran.
    pub start: Option<u32>,
    /// End time of the process's last scheduled segment.
    pub completion: u32,
    /// `turnaround - burst`: time spent ready but not running.
    pub waiting: u32,
    /// `completion - arrival`.
    pub turnaround: u32,
    /// `start - arrival`: delay until first dispatch.
    pub response: u32,
}

/// Per-process metrics plus schedule-wide aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    /// One entry per workload process, in workload order.
    pub per_process: Vec<ProcessMetrics>,
    /// Percentage of the schedule span spent executing: Σ bursts / span × 100.
    pub utilization: f64,
    /// Processes per time unit: process count / span.
    pub throughput: f64,
    /// Mean waiting time over processes that ran.
    pub avg_waiting: f64,
    /// Mean turnaround time over processes that ran.
    pub avg_turnaround: f64,
    /// Mean response time over processes that ran.
    pub avg_response: f64,
}

/// Derives all metrics from a completed schedule.
///
/// The span is `last segment end - first segment start`. Utilization and
/// throughput are 0 for an empty schedule or a zero span. A process absent from
/// the schedule reports `start: None` and zeroed times.
pub fn evaluate(processes: &[Process], schedule: &[ScheduleSegment]) -> ScheduleMetrics {
    let per_process: Vec<ProcessMetrics> = processes
        .iter()
        .map(|p| process_metrics(p, schedule))
        .collect();

    // Segments are chronological and non-overlapping, so the span endpoints are
    // the first start and the last end.
    let span = match (schedule.first(), schedule.last()) {
        (Some(first), Some(last)) => last.end - first.start,
        _ => 0,
    };
    let total_burst: u64 = processes.iter().map(|p| u64::from(p.burst)).sum();
    let (utilization, throughput) = if span == 0 {
        (0.0, 0.0)
    } else {
        (
            total_burst as f64 / f64::from(span) * 100.0,
            processes.len() as f64 / f64::from(span),
        )
    };

    let ran: Vec<&ProcessMetrics> = per_process.iter().filter(|m| m.start.is_some()).collect();
    let mean = |f: fn(&ProcessMetrics) -> u32| -> f64 {
        if ran.is_empty() {
            0.0
        } else {
            ran.iter().map(|m| f64::from(f(m))).sum::<f64>() / ran.len() as f64
        }
    };
    let avg_waiting = mean(|m| m.waiting);
    let avg_turnaround = mean(|m| m.turnaround);
    let avg_response = mean(|m| m.response);

    ScheduleMetrics {
        per_process,
        utilization,
        throughput,
        avg_waiting,
        avg_turnaround,
        avg_response,
    }
}

fn process_metrics(p: &Process, schedule: &[ScheduleSegment]) -> ProcessMetrics {
    let mut start = None;
    let mut completion = 0;
    for seg in schedule.iter().filter(|s| s.pid == p.pid) {
        if start.is_none() {
            start = Some(seg.start);
        }
        completion = seg.end;
    }

    let (waiting, turnaround, response) = match start {
        Some(s) => {
            let turnaround = completion - p.arrival;
            // Negative waiting or response would mean a defective policy.
            debug_assert!(turnaround >= p.burst && s >= p.arrival);
            (
                turnaround.saturating_sub(p.burst),
                turnaround,
                s.saturating_sub(p.arrival),
            )
        }
        None => (0, 0, 0),
    };

    ProcessMetrics {
        pid: p.pid.clone(),
        arrival: p.arrival,
        burst: p.burst,
        priority: p.priority,
        start,
        completion,
        waiting,
        turnaround,
        response,
    }
}
