//! Shortest Job First dispatch, non-preemptive.
//!
//! At each dispatch point the arrived, unfinished process with the smallest burst
//! runs to completion. Ties fall to the earliest arrival, then to workload order.

use super::{Process, ScheduleSegment, run_nonpreemptive};

/// Builds the SJF schedule.
pub fn schedule(processes: &[Process]) -> Vec<ScheduleSegment> {
    run_nonpreemptive(processes, |a, b| {
        a.burst < b.burst || (a.burst == b.burst && a.arrival < b.arrival)
    })
}
