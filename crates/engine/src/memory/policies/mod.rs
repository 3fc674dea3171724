//! Page eviction policies.
//!
//! Implements the algorithms for selecting victim frames when a referenced page
//! is not resident and the frame set is full.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.

use serde::Deserialize;

/// First-In, First-Out eviction.
pub mod fifo;
/// Least Recently Used eviction.
pub mod lru;

pub use fifo::FifoFrames;
pub use lru::LruFrames;

/// Eviction policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PagePolicy {
    /// First-In, First-Out.
    #[serde(alias = "Fifo")]
    Fifo,
    /// Least Recently Used.
    #[serde(alias = "Lru")]
    Lru,
}

/// A fixed-capacity frame set under one eviction policy.
///
/// Defines the interface for applying one reference and observing the frames.
pub trait FrameSet {
    /// Applies one page reference at the given step index.
    ///
    /// Returns `true` on a hit; on a fault the policy fills an empty frame or
    /// evicts its victim.
    fn access(&mut self, page: u32, step: usize) -> bool;

    /// The frame contents, always padded to the configured capacity.
    fn snapshot(&self) -> Vec<Option<u32>>;
}
