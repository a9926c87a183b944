use serde::{Deserialize, Serialize};

/// Ticks elapsed in the current round. Animation pacing is a divisor on this count, so slides
/// run at a fixed number of ticks per step regardless of wall-clock jitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    ticks: u64,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn advance(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// True on ticks where a slide should advance. A `slow_down` of 0 counts as 1.
    pub fn is_animation_frame(&self, slow_down: u64) -> bool {
        self.ticks % slow_down.max(1) == 0
    }
}
