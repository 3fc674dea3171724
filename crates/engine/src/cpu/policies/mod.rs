//! CPU dispatch policies.
//!
//! Implements the five textbook dispatch policies over the shared clock model.
//!
//! # Policies
//!
//! - `fcfs`: First-Come, First-Served.
//! - `sjf`: Shortest Job First (non-preemptive).
//! - `srtf`: Shortest Remaining Time First (preemptive).
//! - `priority`: Priority (non-preemptive, lower value wins).
//! - `rr`: Round Robin with a fixed quantum.
//!
//! Every tie-break is pinned: full ties always resolve to the earliest process in
//! workload order, so identical workloads produce identical schedules.

use serde::Deserialize;

use super::{Process, ScheduleSegment};

/// First-Come, First-Served.
pub mod fcfs;
/// Priority, non-preemptive.
pub mod priority;
/// Round Robin.
pub mod rr;
/// Shortest Job First, non-preemptive.
pub mod sjf;
/// Shortest Remaining Time First, preemptive.
pub mod srtf;

/// Dispatch policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CpuAlgorithm {
    /// First-Come, First-Served.
    #[serde(alias = "Fcfs")]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    #[serde(alias = "Sjf")]
    Sjf,
    /// Shortest Remaining Time First (preemptive).
    #[serde(alias = "Srtf")]
    Srtf,
    /// Non-preemptive priority; lower numeric value is higher priority.
    #[serde(alias = "Priority")]
    Priority,
    /// Round Robin with a fixed time quantum.
    #[serde(rename = "RR", alias = "RoundRobin")]
    RoundRobin,
}

/// Runs a non-preemptive policy to completion.
///
/// Repeatedly selects, among arrived and unfinished processes, the one `beats`
/// prefers, and runs it to completion. The scan is in workload order with strict
/// preference, so a full tie keeps the earliest process in the input. When no
/// process has arrived the clock jumps to the next unmet arrival.
fn run_nonpreemptive<F>(processes: &[Process], beats: F) -> Vec<ScheduleSegment>
where
    F: Fn(&Process, &Process) -> bool,
{
    let n = processes.len();
    let mut done = vec![false; n];
    let mut segments = Vec::with_capacity(n);
    let mut clock = processes.iter().map(|p| p.arrival).min().unwrap_or(0);

    for _ in 0..n {
        let next = match select(processes, &done, clock, &beats) {
            Some(i) => i,
            None => {
                clock = next_arrival(processes, &done);
                // Something must have arrived now; an unfinished process always exists here.
                match select(processes, &done, clock, &beats) {
                    Some(i) => i,
                    None => break,
                }
            }
        };
        let p = &processes[next];
        let start = clock.max(p.arrival);
        segments.push(ScheduleSegment {
            pid: p.pid.clone(),
            start,
            end: start + p.burst,
        });
        clock = start + p.burst;
        done[next] = true;
    }
    segments
}

fn select<F>(processes: &[Process], done: &[bool], clock: u32, beats: &F) -> Option<usize>
where
    F: Fn(&Process, &Process) -> bool,
{
    let mut best: Option<usize> = None;
    for (i, p) in processes.iter().enumerate() {
        if done[i] || p.arrival > clock {
            continue;
        }
        best = match best {
            Some(b) if !beats(p, &processes[b]) => Some(b),
            _ => Some(i),
        };
    }
    best
}

/// Earliest arrival among unfinished processes; the idle-time clock target.
fn next_arrival(processes: &[Process], done: &[bool]) -> u32 {
    processes
        .iter()
        .enumerate()
        .filter(|(i, _)| !done[*i])
        .map(|(_, p)| p.arrival)
        .min()
        .unwrap_or(0)
}
