//! Round Robin dispatch.
//!
//! A FIFO ready queue with a fixed time quantum. A process that does not finish
//! within its quantum is preempted and re-enqueued *after* every process that
//! arrived during its slice: newcomers keep their FIFO position ahead of the
//! preempted process. An arrival at the exact instant a slice ends counts as
//! having arrived during the slice.

use std::collections::VecDeque;

use super::{Process, ScheduleSegment};

/// Builds the Round Robin schedule.
///
/// `quantum` must be positive; callers validate before dispatch.
pub fn schedule(processes: &[Process], quantum: u32) -> Vec<ScheduleSegment> {
    let n = processes.len();
    if n == 0 {
        return Vec::new();
    }

    // Arrival order with workload order as the stable tie-break.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| processes[i].arrival);

    let mut remaining: Vec<u32> = processes.iter().map(|p| p.burst).collect();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut segments = Vec::new();
    let mut next = 0;
    let mut clock = processes[order[0]].arrival;

    loop {
        while next < n && processes[order[next]].arrival <= clock {
            queue.push_back(order[next]);
            next += 1;
        }
        let Some(i) = queue.pop_front() else {
            if next >= n {
                break;
            }
            // Queue ran dry with arrivals pending: idle to the next one.
            clock = processes[order[next]].arrival;
            continue;
        };

        let slice = remaining[i].min(quantum);
        segments.push(ScheduleSegment {
            pid: processes[i].pid.clone(),
            start: clock,
            end: clock + slice,
        });
        clock += slice;
        remaining[i] -= slice;

        // Arrivals during the slice enqueue before the preempted process.
        while next < n && processes[order[next]].arrival <= clock {
            queue.push_back(order[next]);
            next += 1;
        }
        if remaining[i] > 0 {
            queue.push_back(i);
        }
    }
    segments
}
