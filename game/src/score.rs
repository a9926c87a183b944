use serde::{Deserialize, Serialize};

/// Current score plus the best seen this process. `high` never goes down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    current: u32,
    high: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn update(&mut self, score: u32) {
        self.current = score;
        self.high = self.high.max(score);
    }

    pub fn add(&mut self, points: u32) {
        self.update(self.current.saturating_add(points));
    }

    /// Starts a new round: the current score goes back to zero, the high score stays.
    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}
