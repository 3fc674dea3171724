//! Input validation errors.
//!
//! This module defines the single rejection path of the engine. It provides:
//! 1. **Shape errors:** Mismatched resource-matrix dimensions.
//! 2. **Range errors:** Zero burst, zero quantum or frame count, cylinders beyond
//!    the disk boundary, allocation exceeding a declared maximum.
//! 3. **Identity errors:** Duplicate process ids.
//!
//! Validation runs before any simulation step; a request that fails it produces
//! no partial result. Empty workloads are not errors — they yield well-defined
//! empty results from the simulations themselves.

use thiserror::Error;

/// Reason a request was rejected before simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A process declared a zero burst time; every process must need CPU time.
    #[error("process `{pid}` has zero burst time")]
    ZeroBurst {
        /// Offending process id.
        pid: String,
    },

    /// Two processes share the same id.
    #[error("duplicate process id `{pid}`")]
    DuplicatePid {
        /// The id that appeared more than once.
        pid: String,
    },

    /// Round Robin was selected without a time quantum.
    #[error("round robin requires a time quantum")]
    MissingQuantum,

    /// The time quantum must grant at least one time unit per dispatch.
    #[error("time quantum must be at least 1")]
    ZeroQuantum,

    /// A frame set needs at least one frame to hold pages.
    #[error("frame count must be at least 1")]
    ZeroFrameCount,

    /// The initial head position lies beyond the last cylinder.
    #[error("head position {head} exceeds maximum cylinder {max_cylinder}")]
    HeadOutOfRange {
        /// Requested head position.
        head: u32,
        /// Highest addressable cylinder.
        max_cylinder: u32,
    },

    /// A queued request addresses a cylinder beyond the disk boundary.
    #[error("requested cylinder {cylinder} exceeds maximum cylinder {max_cylinder}")]
    CylinderOutOfRange {
        /// Offending cylinder number.
        cylinder: u32,
        /// Highest addressable cylinder.
        max_cylinder: u32,
    },

    /// `max` and `allocation` disagree on the number of processes.
    #[error("`max` has {max_rows} process rows but `allocation` has {allocation_rows}")]
    RowCountMismatch {
        /// Rows in the `max` matrix.
        max_rows: usize,
        /// Rows in the `allocation` matrix.
        allocation_rows: usize,
    },

    /// A matrix row disagrees with `available` on the resource-type count.
    #[error("row {row} of `{matrix}` has {found} resource columns, expected {expected}")]
    ColumnCountMismatch {
        /// Which matrix the row belongs to (`"max"` or `"allocation"`).
        matrix: &'static str,
        /// Row (process) index.
        row: usize,
        /// Columns expected, i.e. the length of `available`.
        expected: usize,
        /// Columns found.
        found: usize,
    },

    /// A process holds more of a resource than its declared maximum.
    ///
    /// This is a configuration error, not a state the algorithms simulate.
    #[error("process {process} holds more of resource {resource} than its declared maximum")]
    AllocationExceedsMax {
        /// Process (row) index.
        process: usize,
        /// Resource (column) index.
        resource: usize,
    },
}
