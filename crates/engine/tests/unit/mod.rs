//! # Unit Tests
//!
//! One module per engine area. Exact expected traces are written out by hand
//! from the documented rules, so a regression in any tie-break or clock rule
//! shows up as a concrete schedule, timeline, or path diff.


/// Banker's safety check.
pub mod bankers;

/// CPU scheduling policies and schedule metrics.
pub mod cpu;



/// Workload-independent invariants checked over generated inputs.
pub mod properties;
