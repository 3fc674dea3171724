//! Banker's algorithm safety check.
//!
//! Answers whether a resource-allocation snapshot is safe: whether some order
//! exists in which every process can acquire its remaining maximum demand,
//! finish, and release what it holds. It provides:
//! 1. **Validation:** Matrix dimensions and the `allocation ≤ max` invariant.
//! 2. **Need derivation:** `need = max − allocation`.
//! 3. **Fixed-point search:** Rounds of index-order scans that finish every
//!    process whose need fits the accumulated work vector.
//!
//! The search is O(n²·m) in the worst case, which is fine at classroom scale.
//! This is a static check over one snapshot; no request or release is simulated.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ValidationError;

/// A resource-allocation snapshot to check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankersRequest {
    /// Free units per resource type.
    pub available: Vec<u64>,
    /// Declared maximum demand, one row per process.
    pub max: Vec<Vec<u64>>,
    /// Currently held units, one row per process.
    pub allocation: Vec<Vec<u64>>,
}

/// The safety verdict for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankersResponse {
    /// Whether every process can finish in some order.
    pub safe: bool,
    /// Process indices in a finishing order; empty when the state is unsafe.
    pub sequence: Vec<usize>,
    /// Remaining demand, `max − allocation`.
    pub need: Vec<Vec<u64>>,
}

/// Checks a snapshot for safety.
///
/// Starting from `work = available`, each round scans all unfinished processes
/// in index order and finishes any whose need fits `work`, releasing its
/// allocation into `work`. The search stops when a round makes no progress; the
/// state is safe iff every process finished.
///
/// # Errors
///
/// [`ValidationError`] when matrix dimensions disagree or a process holds more
/// of a resource than its declared maximum.
pub fn check(request: &BankersRequest) -> Result<BankersResponse, ValidationError> {
    let need = validate(request)?;
    let n = request.max.len();
    trace!(processes = n, resources = request.available.len(), "safety check");

    let mut work = request.available.clone();
    let mut finished = vec![false; n];
    let mut sequence = Vec::with_capacity(n);

    // Each productive round finishes at least one process, so at most n rounds run.
    let mut progress = true;
    while progress {
        progress = false;
        for i in 0..n {
            if finished[i] || !fits(&need[i], &work) {
                continue;
            }
            for (w, &held) in work.iter_mut().zip(&request.allocation[i]) {
                *w += held;
            }
            finished[i] = true;
            sequence.push(i);
            progress = true;
        }
    }

    let safe = finished.iter().all(|&f| f);
    if !safe {
        sequence.clear();
    }
    Ok(BankersResponse {
        safe,
        sequence,
        need,
    })
}

fn fits(need: &[u64], work: &[u64]) -> bool {
    need.iter().zip(work).all(|(n, w)| n <= w)
}

/// Validates dimensions and the allocation invariant, returning the need matrix.
fn validate(request: &BankersRequest) -> Result<Vec<Vec<u64>>, ValidationError> {
    let resources = request.available.len();
    if request.max.len() != request.allocation.len() {
        return Err(ValidationError::RowCountMismatch {
            max_rows: request.max.len(),
            allocation_rows: request.allocation.len(),
        });
    }
    for (matrix, rows) in [("max", &request.max), ("allocation", &request.allocation)] {
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != resources) {
            return Err(ValidationError::ColumnCountMismatch {
                matrix,
                row,
                expected: resources,
                found: r.len(),
            });
        }
    }

    let mut need = Vec::with_capacity(request.max.len());
    for (i, (max_row, alloc_row)) in request.max.iter().zip(&request.allocation).enumerate() {
        let mut need_row = Vec::with_capacity(resources);
        for (j, (&m, &a)) in max_row.iter().zip(alloc_row).enumerate() {
            if a > m {
                return Err(ValidationError::AllocationExceedsMax {
                    process: i,
                    resource: j,
                });
            }
            need_row.push(m - a);
        }
        need.push(need_row);
    }
    Ok(need)
}
