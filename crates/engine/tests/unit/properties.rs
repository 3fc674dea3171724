//! Schedule invariants over generated workloads.
//!
//! Whatever the policy and workload, a correct schedule conserves each burst
//! exactly, never overlaps in time, and is reproducible. These hold for every
//! policy at once, so a single generator drives all five.

use proptest::prelude::*;

use oslab_core::cpu::{self, CpuAlgorithm, CpuRequest, Process};

fn arb_workload() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u32..30, 1u32..12, 0i32..5), 0..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| Process {
                pid: format!("P{i}"),
                arrival,
                burst,
                priority,
            })
            .collect()
    })
}

fn all_policies(processes: &[Process], quantum: u32) -> Vec<CpuRequest> {
    [
        CpuAlgorithm::Fcfs,
        CpuAlgorithm::Sjf,
        CpuAlgorithm::Srtf,
        CpuAlgorithm::Priority,
        CpuAlgorithm::RoundRobin,
    ]
    .into_iter()
    .map(|algorithm| CpuRequest {
        algorithm,
        quantum: Some(quantum),
        processes: processes.to_vec(),
    })
    .collect()
}

proptest! {
    /// Every schedule conserves bursts exactly and stays disjoint in time.
    #[test]
    fn schedules_conserve_bursts_and_never_overlap(
        processes in arb_workload(),
        quantum in 1u32..6,
    ) {
        for request in all_policies(&processes, quantum) {
            let response = cpu::simulate(&request).expect("generated workloads are valid");

            // Every process receives exactly its burst, split however the
            // policy likes.
            for p in &processes {
                let executed: u32 = response
                    .schedule
                    .iter()
                    .filter(|s| s.pid == p.pid)
                    .map(|s| s.end - s.start)
                    .sum();
                prop_assert_eq!(executed, p.burst, "pid {} under {:?}", p.pid, request.algorithm);
            }

            // Segments are non-empty and chronologically disjoint.
            for s in &response.schedule {
                prop_assert!(s.end > s.start);
            }
            for pair in response.schedule.windows(2) {
                prop_assert!(
                    pair[0].end <= pair[1].start,
                    "overlap under {:?}: {:?} then {:?}",
                    request.algorithm,
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    /// Per-process metrics stay consistent with the schedule geometry.
    #[test]
    fn metrics_respect_schedule_geometry(
        processes in arb_workload(),
        quantum in 1u32..6,
    ) {
        for request in all_policies(&processes, quantum) {
            let response = cpu::simulate(&request).expect("generated workloads are valid");
            for m in &response.metrics {
                let start = m.start.expect("every process runs to completion");
                prop_assert!(start >= m.arrival);
                prop_assert!(m.completion >= start + m.burst);
                prop_assert_eq!(m.turnaround, m.waiting + m.burst);
                prop_assert!(m.response <= m.waiting);
            }
        }
    }

    /// Identical input yields identical output for every policy.
    #[test]
    fn simulation_is_deterministic(
        processes in arb_workload(),
        quantum in 1u32..6,
    ) {
        for request in all_policies(&processes, quantum) {
            let first = cpu::simulate(&request).expect("generated workloads are valid");
            let second = cpu::simulate(&request).expect("generated workloads are valid");
            prop_assert_eq!(first, second);
        }
    }
}
