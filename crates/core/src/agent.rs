use serde::{Deserialize, Serialize};

use crate::types::Pos;

/// A competitor on the grid. Both the human and the autonomous side use this; the
/// caller owns them and decides how scores and move counts are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub pos: Pos,
    pub score: u32,
    pub moves: u32,
}

impl Agent {
    pub fn new(pos: Pos) -> Self {
        Self { pos, score: 0, moves: 0 }
    }

    pub fn credit(&mut self, value: u32) {
        self.score = self.score.saturating_add(value);
    }

    pub fn reset(&mut self, pos: Pos) {
        *self = Self::new(pos);
    }
}
