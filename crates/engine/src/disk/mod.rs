//! Disk head-movement scheduling.
//!
//! Turns an unordered cylinder-request queue into an ordered visit path. It
//! provides:
//! 1. **Policies:** FCFS, SSTF, SCAN, and C-SCAN path construction.
//! 2. **Statistics:** The total seek distance, derived from a path on demand.
//!
//! Every path starts at the head position and visits each requested cylinder
//! exactly once. The sweep policies additionally visit the boundary cylinders
//! (the maximum, and for C-SCAN also cylinder 0) even when unrequested, because
//! the arm physically travels there before reversing or wrapping.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ValidationError;

/// Head-movement policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiskAlgorithm {
    /// Visit requests in queue order.
    #[serde(alias = "Fcfs")]
    Fcfs,
    /// Shortest Seek Time First: greedily visit the nearest request.
    #[serde(alias = "Sstf")]
    Sstf,
    /// Elevator sweep: ascend to the boundary, then descend.
    #[serde(alias = "Scan")]
    Scan,
    /// Circular sweep: ascend to the boundary, wrap to 0, ascend again.
    #[serde(rename = "CSCAN", alias = "CScan")]
    CScan,
}

/// A disk scheduling request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskRequest {
    /// Head-movement policy to simulate.
    pub algorithm: DiskAlgorithm,
    /// Queued cylinder requests, in arrival order.
    pub requests: Vec<u32>,
    /// Starting head position.
    pub head: u32,
    /// Highest addressable cylinder.
    pub max_cylinder: u32,
}

/// The ordered visit path and its derived seek total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskResponse {
    /// Cylinders in visit order, starting with the head position.
    pub path: Vec<u32>,
    /// Sum of absolute differences between consecutive path entries.
    pub total_seek: u64,
}

/// Runs one disk scheduling simulation.
///
/// # Errors
///
/// [`ValidationError`] when the head or any request lies beyond `max_cylinder`.
pub fn simulate(request: &DiskRequest) -> Result<DiskResponse, ValidationError> {
    if request.head > request.max_cylinder {
        return Err(ValidationError::HeadOutOfRange {
            head: request.head,
            max_cylinder: request.max_cylinder,
        });
    }
    if let Some(&cylinder) = request.requests.iter().find(|&&c| c > request.max_cylinder) {
        return Err(ValidationError::CylinderOutOfRange {
            cylinder,
            max_cylinder: request.max_cylinder,
        });
    }
    trace!(
        algorithm = ?request.algorithm,
        requests = request.requests.len(),
        "disk simulation"
    );

    let path = match request.algorithm {
        DiskAlgorithm::Fcfs => fcfs(&request.requests, request.head),
        DiskAlgorithm::Sstf => sstf(&request.requests, request.head),
        DiskAlgorithm::Scan => scan(&request.requests, request.head, request.max_cylinder),
        DiskAlgorithm::CScan => cscan(&request.requests, request.head, request.max_cylinder),
    };
    let total_seek = total_seek(&path);
    Ok(DiskResponse { path, total_seek })
}

/// Total head movement along a path: Σ |consecutive differences|.
pub fn total_seek(path: &[u32]) -> u64 {
    path.windows(2)
        .map(|pair| u64::from(pair[0].abs_diff(pair[1])))
        .sum()
}

fn fcfs(requests: &[u32], head: u32) -> Vec<u32> {
    let mut path = Vec::with_capacity(requests.len() + 1);
    path.push(head);
    path.extend_from_slice(requests);
    path
}

/// Greedy nearest-request selection; equal distances take the lower cylinder.
fn sstf(requests: &[u32], head: u32) -> Vec<u32> {
    let mut pending = requests.to_vec();
    let mut path = Vec::with_capacity(requests.len() + 1);
    path.push(head);
    let mut position = head;

    while !pending.is_empty() {
        let mut best = 0;
        for candidate in 1..pending.len() {
            let d = pending[candidate].abs_diff(position);
            let best_d = pending[best].abs_diff(position);
            if d < best_d || (d == best_d && pending[candidate] < pending[best]) {
                best = candidate;
            }
        }
        position = pending.swap_remove(best);
        path.push(position);
    }
    path
}

/// Ascend through requests at or above the head, touch the boundary, descend.
fn scan(requests: &[u32], head: u32, max_cylinder: u32) -> Vec<u32> {
    let (mut up, mut down) = split_at_head(requests, head);
    up.sort_unstable();
    down.sort_unstable_by(|a, b| b.cmp(a));

    let mut path = Vec::with_capacity(requests.len() + 2);
    path.push(head);
    path.extend(up);
    // The arm reverses at the boundary; record the visit unless a request
    // already put it in the path.
    if path.last() != Some(&max_cylinder) {
        path.push(max_cylinder);
    }
    path.extend(down);
    path
}

/// Ascend, touch the boundary, wrap to cylinder 0, ascend through the rest.
fn cscan(requests: &[u32], head: u32, max_cylinder: u32) -> Vec<u32> {
    let (mut up, mut down) = split_at_head(requests, head);
    up.sort_unstable();
    down.sort_unstable();

    let mut path = Vec::with_capacity(requests.len() + 3);
    path.push(head);
    path.extend(up);
    if path.last() != Some(&max_cylinder) {
        path.push(max_cylinder);
    }
    // Wrap lands on cylinder 0 before servicing the low end; skip the duplicate
    // when 0 itself is the first low request.
    if down.first() != Some(&0) {
        path.push(0);
    }
    path.extend(down);
    path
}

fn split_at_head(requests: &[u32], head: u32) -> (Vec<u32>, Vec<u32>) {
    requests.iter().copied().partition(|&c| c >= head)
}
