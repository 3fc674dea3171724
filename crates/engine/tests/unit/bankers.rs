//! Banker's safety check tests.
//!
//! The classic five-process, three-resource snapshot exercises the safe path;
//! a starved variant exercises the unsafe verdict. Validation rejects
//! malformed matrices before any search runs.

use pretty_assertions::assert_eq;

use oslab_core::bankers::{self, BankersRequest};
use oslab_core::error::ValidationError;

fn classic() -> BankersRequest {
    BankersRequest {
        available: vec![3, 3, 2],
        max: vec![
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
        allocation: vec![
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
    }
}

/// The classic snapshot is safe, with the index-order fixed point
/// P1, P3, P4, P0, P2.
#[test]
fn classic_snapshot_is_safe() {
    let response = bankers::check(&classic()).expect("valid request");
    assert!(response.safe);
    assert_eq!(response.sequence, vec![1, 3, 4, 0, 2]);
}

/// The derived need matrix is `max - allocation`.
#[test]
fn need_is_max_minus_allocation() {
    let response = bankers::check(&classic()).expect("valid request");
    assert_eq!(
        response.need,
        vec![
            vec![7, 4, 3],
            vec![1, 2, 2],
            vec![6, 0, 0],
            vec![0, 1, 1],
            vec![4, 3, 1],
        ]
    );
}

/// Every step of the reported sequence satisfies `need ≤ work` at the time it
/// is chosen; replaying the sequence proves the verdict.
#[test]
fn sequence_replays_under_need_bound() {
    let request = classic();
    let response = bankers::check(&request).expect("valid request");

    let mut work = request.available.clone();
    for &i in &response.sequence {
        for (n, w) in response.need[i].iter().zip(&work) {
            assert!(n <= w, "process {i} chosen while need exceeds work");
        }
        for (w, a) in work.iter_mut().zip(&request.allocation[i]) {
            *w += a;
        }
    }
}

/// With nothing available, no process is immediately satisfiable: unsafe, and
/// the sequence is empty rather than partial.
#[test]
fn starved_snapshot_is_unsafe() {
    let mut request = classic();
    request.available = vec![0, 0, 0];
    let response = bankers::check(&request).expect("valid request");
    assert!(!response.safe);
    assert_eq!(response.sequence, Vec::<usize>::new());
}

/// Zero processes are trivially safe.
#[test]
fn empty_snapshot_is_safe() {
    let response = bankers::check(&BankersRequest {
        available: vec![1, 2],
        max: vec![],
        allocation: vec![],
    })
    .expect("valid request");
    assert!(response.safe);
    assert!(response.sequence.is_empty());
}

/// Row and column mismatches are rejected with the offending location.
#[test]
fn dimension_mismatches_rejected() {
    let mut missing_row = classic();
    missing_row.allocation.pop();
    assert_eq!(
        bankers::check(&missing_row).unwrap_err(),
        ValidationError::RowCountMismatch {
            max_rows: 5,
            allocation_rows: 4
        }
    );

    let mut short_row = classic();
    short_row.max[2] = vec![9, 0];
    assert_eq!(
        bankers::check(&short_row).unwrap_err(),
        ValidationError::ColumnCountMismatch {
            matrix: "max",
            row: 2,
            expected: 3,
            found: 2
        }
    );
}

/// Holding more than the declared maximum is a configuration error.
#[test]
fn allocation_over_max_rejected() {
    let mut over = classic();
    over.allocation[4] = vec![0, 4, 2];
    assert_eq!(
        bankers::check(&over).unwrap_err(),
        ValidationError::AllocationExceedsMax {
            process: 4,
            resource: 1
        }
    );
}
