//! CPU scheduling tests.
//!
//! Shared builders plus one module per dispatch policy and one for the metrics
//! calculator. The four-process workload from the classic scheduling exercise
//! (`P1(0,7) P2(2,4) P3(4,1) P4(5,4)`) recurs across policies so their traces
//! can be compared side by side.

use oslab_core::cpu::{Process, ScheduleSegment};

/// FCFS tests.
pub mod fcfs;
/// Metrics calculator tests.
pub mod metrics;

/// Builds a process with default priority.
pub fn proc(pid: &str, arrival: u32, burst: u32) -> Process {
    Process {
        pid: pid.to_string(),
        arrival,
        burst,
        priority: 0,
    }
}

/// Builds a process with an explicit priority.
pub fn proc_pr(pid: &str, arrival: u32, burst: u32, priority: i32) -> Process {
    Process {
        pid: pid.to_string(),
        arrival,
        burst,
        priority,
    }
}

/// Builds a schedule segment.
pub fn seg(pid: &str, start: u32, end: u32) -> ScheduleSegment {
    ScheduleSegment {
        pid: pid.to_string(),
        start,
        end,
    }
}

/// The classic four-process workload used throughout these tests.
pub fn classic_four() -> Vec<Process> {
    vec![
        proc("P1", 0, 7),
        proc("P2", 2, 4),
        proc("P3", 4, 1),
        proc("P4", 5, 4),
    ]
}
