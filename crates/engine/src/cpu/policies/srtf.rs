//! Shortest Remaining Time First dispatch, preemptive.
//!
//! The simulation advances in one-unit ticks: at each tick the arrived,
//! unfinished process with the least remaining time gets the CPU. Ties favor the
//! process already running (no needless preemption), otherwise the earliest
//! arrival, then workload order. One-unit granularity is what makes the tie
//! resolution deterministic.
//!
//! A segment closes and a new one opens only when the dispatched pid changes, so
//! an uninterrupted run of ticks collapses into a single segment.

use super::{Process, ScheduleSegment};

/// Builds the SRTF schedule.
pub fn schedule(processes: &[Process]) -> Vec<ScheduleSegment> {
    let n = processes.len();
    if n == 0 {
        return Vec::new();
    }

    let mut remaining: Vec<u32> = processes.iter().map(|p| p.burst).collect();
    let mut unfinished = n;
    let mut clock = processes.iter().map(|p| p.arrival).min().unwrap_or(0);
    let mut segments: Vec<ScheduleSegment> = Vec::new();
    let mut running: Option<usize> = None;

    while unfinished > 0 {
        let Some(i) = select(processes, &remaining, clock, running) else {
            // Nothing has arrived: jump to the next unmet arrival.
            clock = processes
                .iter()
                .enumerate()
                .filter(|&(i, _)| remaining[i] > 0)
                .map(|(_, p)| p.arrival)
                .min()
                .unwrap_or(clock);
            running = None;
            continue;
        };

        match segments.last_mut() {
            Some(seg) if running == Some(i) => seg.end += 1,
            _ => segments.push(ScheduleSegment {
                pid: processes[i].pid.clone(),
                start: clock,
                end: clock + 1,
            }),
        }
        clock += 1;
        remaining[i] -= 1;
        if remaining[i] == 0 {
            unfinished -= 1;
            running = None;
        } else {
            running = Some(i);
        }
    }
    segments
}

/// Picks the process for the next tick.
///
/// Scans in workload order for the minimum remaining time with arrival as the
/// first tie-break; the running process then retains the CPU if it ties the
/// minimum.
fn select(
    processes: &[Process],
    remaining: &[u32],
    clock: u32,
    running: Option<usize>,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in processes.iter().enumerate() {
        if remaining[i] == 0 || p.arrival > clock {
            continue;
        }
        best = match best {
            Some(b)
                if remaining[b] < remaining[i]
                    || (remaining[b] == remaining[i]
                        && processes[b].arrival <= p.arrival) =>
            {
                Some(b)
            }
            _ => Some(i),
        };
    }
    if let (Some(b), Some(r)) = (best, running) {
        if remaining[r] > 0 && processes[r].arrival <= clock && remaining[r] == remaining[b] {
            return Some(r);
        }
    }
    best
}
