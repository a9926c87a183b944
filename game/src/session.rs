use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::animation::AnimationRegistry;
use crate::board::Board;
use crate::difficulty::Difficulty;
use crate::matrix::{EMPTY_GRID, Grid};
use crate::round_timer::RoundTimer;
use crate::score::ScoreTracker;
use crate::shift::{Direction, shift_grid};

/// How a completed shift left the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
    Continue,
}

/// Everything a round needs. Created once per process and reset at each round start, so the
/// high score carries across rounds.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    /// Cells that stay put while the current shift animates.
    pub shadow: Grid,
    pub animations: AnimationRegistry,
    pub score: ScoreTracker,
    pub difficulty: Difficulty,
    pub timer: RoundTimer,
    rng: SmallRng,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            shadow: EMPTY_GRID,
            animations: AnimationRegistry::new(),
            score: ScoreTracker::new(),
            difficulty: Difficulty::default(),
            timer: RoundTimer::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn winning_tile(&self) -> u32 {
        self.difficulty.winning_tile()
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Fresh board with two random tiles; the high score is kept.
    pub fn start_round(&mut self) {
        self.timer.reset();
        self.score.reset_current();
        self.board.clear();
        self.shadow = EMPTY_GRID;
        self.animations.clear();
        self.board.insert_random_tile(&mut self.rng);
        self.board.insert_random_tile(&mut self.rng);
    }

    /// Applies a shift. When nothing moves, the board, shadow and score are left untouched.
    ///
    /// Slides that do not fit in the animation registry are dropped; the board is still updated.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let outcome = shift_grid(self.board.cells(), direction);
        if !outcome.moved() {
            return false;
        }

        self.board.set_cells(outcome.grid);
        self.shadow = outcome.shadow;
        self.score.add(outcome.gained);
        for event in &outcome.events {
            self.animations.admit(&event.to_display());
        }
        true
    }

    pub fn step_animation(&mut self) -> bool {
        self.animations.step()
    }

    /// Runs after the slide finishes: checks for a win, otherwise spawns a tile and checks
    /// for a loss.
    pub fn settle(&mut self) -> RoundOutcome {
        self.animations.clear();
        if self.board.is_won(self.winning_tile()) {
            return RoundOutcome::Won;
        }
        self.board.insert_random_tile(&mut self.rng);
        if self.board.is_lost() {
            RoundOutcome::Lost
        } else {
            RoundOutcome::Continue
        }
    }
}
