use engine::GameLogic;
use engine::input::KeyCode;

use crate::state::{DEFAULT_ANIM_SLOW_DOWN, GameState};

/// The tile game as a pure step function over `GameState`, one call per tick.
#[derive(Debug, Clone)]
pub struct TileGame {
    seed: u64,
    anim_slow_down: u64,
}

impl TileGame {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            anim_slow_down: DEFAULT_ANIM_SLOW_DOWN,
        }
    }

    pub fn with_anim_slow_down(mut self, slow_down: u64) -> Self {
        self.anim_slow_down = slow_down.max(1);
        self
    }
}

impl GameLogic for TileGame {
    type State = GameState;
    type Input = Option<KeyCode>;

    fn initial_state(&self) -> Self::State {
        GameState::new(self.seed).with_anim_slow_down(self.anim_slow_down)
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        next.tick(input);
        next
    }
}
