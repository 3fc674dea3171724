//! First-In, First-Out eviction.
//!
//! Frames behave as a circular insertion order: the first frame filled is the
//! first evicted, regardless of any hits in between. A single replacement
//! pointer advances on every fault — cold fills included — and never on hits,
//! so it always points at the oldest resident page once the frames are full.

use super::FrameSet;

/// FIFO frame set state.
#[derive(Debug)]
pub struct FifoFrames {
    frames: Vec<Option<u32>>,
    /// Next frame to fill or evict; advances circularly on every fault.
    cursor: usize,
}

impl FifoFrames {
    /// Creates an empty frame set with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: vec![None; capacity],
            cursor: 0,
        }
    }
}

impl FrameSet for FifoFrames {
    fn access(&mut self, page: u32, _step: usize) -> bool {
        if self.frames.contains(&Some(page)) {
            return true;
        }
        self.frames[self.cursor] = Some(page);
        self.cursor = (self.cursor + 1) % self.frames.len();
        false
    }

    fn snapshot(&self) -> Vec<Option<u32>> {
        self.frames.clone()
    }
}
