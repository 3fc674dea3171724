//! Metrics calculator tests.
//!
//! The calculator is policy-agnostic: it reads first dispatch and final
//! completion off the segments, so preempted processes with scattered segments
//! are the interesting cases.

use pretty_assertions::assert_eq;

use oslab_core::cpu::{metrics, policies::fcfs, policies::srtf};

use super::{classic_four, proc, seg};

/// FCFS on the classic workload: a dense schedule with full utilization.
#[test]
fn fcfs_classic_aggregates() {
    let processes = classic_four();
    let schedule = fcfs::schedule(&processes);
    let m = metrics::evaluate(&processes, &schedule);

    // Span 0..16 with 16 units of burst.
    assert_eq!(m.utilization, 100.0);
    assert_eq!(m.throughput, 4.0 / 16.0);

    let p2 = &m.per_process[1];
    assert_eq!(p2.start, Some(7));
    assert_eq!(p2.completion, 11);
    assert_eq!(p2.turnaround, 9);
    assert_eq!(p2.waiting, 5);
    assert_eq!(p2.response, 5);
}

/// Under preemption, start is the first segment and completion the last.
#[test]
fn preempted_process_spans_its_segments() {
    let processes = classic_four();
    let schedule = srtf::schedule(&processes);
    let m = metrics::evaluate(&processes, &schedule);

    // P1 runs 0..2 and again 11..16.
    let p1 = &m.per_process[0];
    assert_eq!(p1.start, Some(0));
    assert_eq!(p1.completion, 16);
    assert_eq!(p1.turnaround, 16);
    assert_eq!(p1.waiting, 9);
    assert_eq!(p1.response, 0);

    // P3 preempts in and out in one unit.
    let p3 = &m.per_process[2];
    assert_eq!(p3.waiting, 0);
    assert_eq!(p3.response, 0);
}

/// An idle gap dilutes utilization and throughput.
#[test]
fn idle_gap_lowers_utilization() {
    let processes = vec![proc("A", 0, 2), proc("B", 8, 2)];
    let schedule = fcfs::schedule(&processes);
    let m = metrics::evaluate(&processes, &schedule);

    // Span 0..10 with 4 units of burst.
    assert_eq!(m.utilization, 40.0);
    assert_eq!(m.throughput, 0.2);
}

/// A schedule that starts late measures its span from the first segment.
#[test]
fn span_starts_at_first_segment() {
    let processes = vec![proc("A", 5, 5)];
    let schedule = fcfs::schedule(&processes);
    let m = metrics::evaluate(&processes, &schedule);
    assert_eq!(m.utilization, 100.0);
    assert_eq!(m.throughput, 0.2);
}

/// Empty schedules report zeros, not division errors.
#[test]
fn empty_schedule_zero_aggregates() {
    let m = metrics::evaluate(&[], &[]);
    assert_eq!(m.utilization, 0.0);
    assert_eq!(m.throughput, 0.0);
    assert_eq!(m.avg_waiting, 0.0);
    assert!(m.per_process.is_empty());
}

/// A process absent from the schedule reports `start: None` and zeroed times.
#[test]
fn unscheduled_process_has_no_start() {
    let processes = vec![proc("A", 0, 3), proc("GHOST", 0, 2)];
    let schedule = vec![seg("A", 0, 3)];
    let m = metrics::evaluate(&processes, &schedule);
    assert_eq!(m.per_process[1].start, None);
    assert_eq!(m.per_process[1].turnaround, 0);
    // Averages cover only processes that ran.
    assert_eq!(m.avg_turnaround, 3.0);
}

/// Mean times on the classic FCFS trace.
#[test]
fn fcfs_classic_averages() {
    let processes = classic_four();
    let schedule = fcfs::schedule(&processes);
    let m = metrics::evaluate(&processes, &schedule);
    // Waiting: P1=0, P2=5, P3=7, P4=7. Turnaround: 7, 9, 8, 11.
    assert_eq!(m.avg_waiting, 19.0 / 4.0);
    assert_eq!(m.avg_turnaround, 35.0 / 4.0);
    assert_eq!(m.avg_response, 19.0 / 4.0);
}
