//! Least Recently Used eviction.
//!
//! Exact recency tracking: every access, hit or fault, stamps the page's frame
//! with the current step index. On a fault with a full frame set the occupant
//! with the smallest stamp is evicted; a stamp tie falls to the lower frame
//! index. Faults while an empty frame remains fill the lowest-index empty slot,
//! so frames fill left to right before any eviction happens.

use super::FrameSet;

/// LRU frame set state.
#[derive(Debug)]
pub struct LruFrames {
    frames: Vec<Option<u32>>,
    /// Last-used step index per frame; meaningful only for occupied frames.
    stamps: Vec<usize>,
}

impl LruFrames {
    /// Creates an empty frame set with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: vec![None; capacity],
            stamps: vec![0; capacity],
        }
    }

    /// The victim frame: smallest stamp, ties to the lower index.
    fn victim(&self) -> usize {
        let mut victim = 0;
        for i in 1..self.frames.len() {
            if self.stamps[i] < self.stamps[victim] {
                victim = i;
            }
        }
        victim
    }
}

impl FrameSet for LruFrames {
    fn access(&mut self, page: u32, step: usize) -> bool {
        if let Some(i) = self.frames.iter().position(|&f| f == Some(page)) {
            self.stamps[i] = step;
            return true;
        }
        let target = match self.frames.iter().position(Option::is_none) {
            Some(empty) => empty,
            None => self.victim(),
        };
        self.frames[target] = Some(page);
        self.stamps[target] = step;
        false
    }

    fn snapshot(&self) -> Vec<Option<u32>> {
        self.frames.clone()
    }
}
