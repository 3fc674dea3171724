//! First-Come, First-Served dispatch.
//!
//! Processes run to completion in arrival order. Arrival ties keep the workload
//! order (the sort is stable), and the CPU idles forward to the next arrival
//! whenever it runs dry.

use super::{Process, ScheduleSegment};

/// Builds the FCFS schedule.
pub fn schedule(processes: &[Process]) -> Vec<ScheduleSegment> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);

    let mut segments = Vec::with_capacity(processes.len());
    let mut clock = 0;
    for &i in &order {
        let p = &processes[i];
        let start = clock.max(p.arrival);
        segments.push(ScheduleSegment {
            pid: p.pid.clone(),
            start,
            end: start + p.burst,
        });
        clock = start + p.burst;
    }
    segments
}
