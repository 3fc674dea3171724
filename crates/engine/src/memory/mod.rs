//! Page replacement.
//!
//! Simulates a memory-reference string against a fixed-capacity frame set. It
//! provides:
//! 1. **Policies:** FIFO and LRU frame sets under [`policies`].
//! 2. **Timeline:** A per-step trace with post-access frame snapshots.
//! 3. **Comparison:** A single entry point running both policies over one input,
//!    the way the simulator is used side by side in class.
//!
//! Snapshots are always padded to the configured frame count, so a renderer can
//! lay out columns before the frames fill.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ValidationError;

/// FIFO and LRU eviction policies.
pub mod policies;

pub use policies::PagePolicy;
use policies::{FifoFrames, FrameSet, LruFrames};

/// One step of the reference-string trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    /// Zero-based index into the reference string.
    pub step: usize,
    /// The page referenced at this step.
    pub page: u32,
    /// Frame contents *after* the access, padded to the frame count.
    pub frames: Vec<Option<u32>>,
    /// Whether the page was already resident.
    pub hit: bool,
}

/// A page replacement request: one policy over one reference string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRequest {
    /// Eviction policy to simulate.
    pub policy: PagePolicy,
    /// Number of frames available. Must be positive.
    pub frame_count: usize,
    /// The ordered memory-reference string.
    pub references: Vec<u32>,
}

/// The trace and counters from one policy run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRun {
    /// Per-reference trace.
    pub timeline: Vec<TimelineStep>,
    /// Number of references that missed.
    pub faults: usize,
    /// Fraction of references that hit; 0 for an empty reference string.
    pub hit_ratio: f64,
}

/// Both policies run over the same input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryComparison {
    /// The FIFO run.
    pub fifo: PolicyRun,
    /// The LRU run.
    pub lru: PolicyRun,
}

/// Runs one page replacement simulation.
///
/// # Errors
///
/// [`ValidationError::ZeroFrameCount`] when `frame_count` is 0.
pub fn simulate(request: &MemoryRequest) -> Result<PolicyRun, ValidationError> {
    if request.frame_count == 0 {
        return Err(ValidationError::ZeroFrameCount);
    }
    trace!(
        policy = ?request.policy,
        frames = request.frame_count,
        references = request.references.len(),
        "page replacement simulation"
    );
    Ok(match request.policy {
        PagePolicy::Fifo => run(FifoFrames::new(request.frame_count), &request.references),
        PagePolicy::Lru => run(LruFrames::new(request.frame_count), &request.references),
    })
}

/// Runs both policies over the same reference string for side-by-side study.
///
/// # Errors
///
/// [`ValidationError::ZeroFrameCount`] when `frame_count` is 0.
pub fn compare(
    frame_count: usize,
    references: &[u32],
) -> Result<MemoryComparison, ValidationError> {
    if frame_count == 0 {
        return Err(ValidationError::ZeroFrameCount);
    }
    Ok(MemoryComparison {
        fifo: run(FifoFrames::new(frame_count), references),
        lru: run(LruFrames::new(frame_count), references),
    })
}

fn run<P: FrameSet>(mut frames: P, references: &[u32]) -> PolicyRun {
    let mut timeline = Vec::with_capacity(references.len());
    let mut faults = 0;
    for (step, &page) in references.iter().enumerate() {
        let hit = frames.access(page, step);
        if !hit {
            faults += 1;
        }
        timeline.push(TimelineStep {
            step,
            page,
            frames: frames.snapshot(),
            hit,
        });
    }
    let hit_ratio = if references.is_empty() {
        0.0
    } else {
        (references.len() - faults) as f64 / references.len() as f64
    };
    PolicyRun {
        timeline,
        faults,
        hit_ratio,
    }
}
