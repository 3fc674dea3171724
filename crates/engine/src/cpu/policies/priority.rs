//! Priority dispatch, non-preemptive.
//!
//! At each dispatch point the arrived, unfinished process with the smallest
//! priority value runs to completion. Lower value means higher priority; ties
//! fall to the earliest arrival, then to workload order.

use super::{Process, ScheduleSegment, run_nonpreemptive};

/// Builds the priority schedule.
pub fn schedule(processes: &[Process]) -> Vec<ScheduleSegment> {
    run_nonpreemptive(processes, |a, b| {
        a.priority < b.priority || (a.priority == b.priority && a.arrival < b.arrival)
    })
}
