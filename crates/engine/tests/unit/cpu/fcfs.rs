//! FCFS dispatch tests.
//!
//! FCFS runs each process to completion in arrival order, with stable ties and
//! idle time skipped forward to the next arrival.

use pretty_assertions::assert_eq;

use oslab_core::cpu::policies::fcfs;

use super::{classic_four, proc, seg};

/// The pinned textbook trace: back-to-back completions in arrival order.
#[test]
fn classic_workload_exact_trace() {
    let schedule = fcfs::schedule(&classic_four());
    assert_eq!(
        schedule,
        vec![
            seg("P1", 0, 7),
            seg("P2", 7, 11),
            seg("P3", 11, 12),
            seg("P4", 12, 16),
        ]
    );
}

/// A gap before the next arrival idles the CPU instead of stretching a segment.
#[test]
fn idle_gap_advances_clock() {
    let processes = vec![proc("A", 0, 2), proc("B", 10, 3)];
    let schedule = fcfs::schedule(&processes);
    assert_eq!(schedule, vec![seg("A", 0, 2), seg("B", 10, 13)]);
}

/// Simultaneous arrivals keep workload order (the sort is stable).
#[test]
fn arrival_ties_keep_input_order() {
    let processes = vec![proc("X", 3, 1), proc("Y", 3, 1), proc("Z", 3, 1)];
    let schedule = fcfs::schedule(&processes);
    assert_eq!(
        schedule,
        vec![seg("X", 3, 4), seg("Y", 4, 5), seg("Z", 5, 6)]
    );
}

/// A first arrival after time zero starts the clock there, not at zero.
#[test]
fn clock_starts_at_first_arrival() {
    let processes = vec![proc("A", 5, 2)];
    assert_eq!(fcfs::schedule(&processes), vec![seg("A", 5, 7)]);
}

#[test]
fn empty_workload_empty_schedule() {
    assert_eq!(fcfs::schedule(&[]), vec![]);
}
