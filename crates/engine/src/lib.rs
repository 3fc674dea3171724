//! Deterministic simulator for textbook OS resource-allocation algorithms.
//!
//! This crate implements the simulation engine behind `oslab` with the following:
//! 1. **CPU scheduling:** Five dispatch policies (FCFS, SJF, SRTF, Priority, Round Robin)
//!    producing a segment schedule, plus per-process timing metrics and aggregates.
//! 2. **Page replacement:** FIFO and LRU eviction over a fixed frame set, producing a
//!    per-step frame timeline and fault counts.
//! 3. **Disk scheduling:** FCFS, SSTF, SCAN, and C-SCAN head-movement paths with the
//!    total seek distance as a derived statistic.
//! 4. **Deadlock avoidance:** The Banker's safety check with safe-sequence recording.
//!
//! Every simulation is a pure function from a complete request snapshot to a complete
//! result. Nothing is shared between invocations, no operation blocks, and identical
//! input always yields identical output: every tie-break rule is pinned explicitly
//! rather than left to container iteration order.

/// Thin coordinator: tagged request/response types and `dispatch`.
pub mod api;
/// The Banker's algorithm safety check.
pub mod bankers;
/// CPU scheduling policies and schedule metrics.
pub mod cpu;
/// Disk head-movement scheduling.
pub mod disk;
/// Input validation errors.
pub mod error;
/// Page replacement over a fixed frame set.
pub mod memory;

/// Tagged request enum; deserialize from JSON and hand to [`dispatch`].
pub use crate::api::Request;
/// Tagged response enum matching [`Request`].
pub use crate::api::Response;
/// Runs the simulation a request selects; the engine's single entry point.
pub use crate::api::dispatch;
/// Rejection reason for malformed input; no simulation step runs after one.
pub use crate::error::ValidationError;
