//! Best human scores seen during one run of the simulator.

pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    capacity: usize,
    scores: Vec<u32>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Leaderboard {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity, scores: Vec::with_capacity(capacity) }
    }

    /// Inserts `score` and returns its 1-based rank, or `None` when it did not
    /// make the board. Equal scores rank below the ones already recorded.
    pub fn record(&mut self, score: u32) -> Option<usize> {
        let index = self.scores.partition_point(|&existing| existing >= score);
        if index >= self.capacity {
            return None;
        }
        self.scores.insert(index, score);
        self.scores.truncate(self.capacity);
        Some(index + 1)
    }

    /// Highest first.
    pub fn top(&self) -> &[u32] {
        &self.scores
    }

    pub fn best(&self) -> Option<u32> {
        self.scores.first().copied()
    }
}
