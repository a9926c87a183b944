//! Fixed-capacity registry of sliding tiles.
//!
//! Slots live in an array; a bitmap marks the ones in use. Admission into a full registry is
//! dropped on the floor: the board has already moved, only the slide is lost.

use crate::shift::DisplayMove;

pub const MAX_ANIMATIONS: usize = 16;

/// Display cells moved per axis per step.
pub const STEP_SIZE: u16 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Dead,
    Moving,
    Idle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimatedBlock {
    pub row: u16,
    pub col: u16,
    pub dest_row: u16,
    pub dest_col: u16,
    /// Drawn while sliding (the value that left the source cell).
    pub moving_value: u32,
    /// Drawn once arrived (the merged value, if any).
    pub idle_value: u32,
    pub state: BlockState,
}

impl AnimatedBlock {
    pub fn from_move(mv: &DisplayMove) -> Self {
        let mut block = Self {
            row: mv.start_row,
            col: mv.start_col,
            dest_row: mv.end_row,
            dest_col: mv.end_col,
            moving_value: mv.start_value,
            idle_value: mv.end_value,
            state: BlockState::Moving,
        };
        if block.arrived() {
            block.state = BlockState::Idle;
        }
        block
    }

    pub fn arrived(&self) -> bool {
        self.row == self.dest_row && self.col == self.dest_col
    }

    /// Value to draw in the current state, `None` for a dead slot.
    pub fn display_value(&self) -> Option<u32> {
        match self.state {
            BlockState::Dead => None,
            BlockState::Moving => Some(self.moving_value),
            BlockState::Idle => Some(self.idle_value),
        }
    }

    fn advance(&mut self) {
        self.row = approach(self.row, self.dest_row);
        self.col = approach(self.col, self.dest_col);
        if self.arrived() {
            self.state = BlockState::Idle;
        }
    }
}

fn approach(from: u16, to: u16) -> u16 {
    if from < to {
        from + (to - from).min(STEP_SIZE)
    } else {
        from - (from - to).min(STEP_SIZE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationRegistry {
    blocks: [AnimatedBlock; MAX_ANIMATIONS],
    live: u16,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the lowest free slot. Returns `false` (and changes nothing) when full.
    pub fn admit(&mut self, mv: &DisplayMove) -> bool {
        let free = !self.live;
        if free == 0 {
            log::debug!("animation registry full; dropping slide to ({}, {})", mv.end_row, mv.end_col);
            return false;
        }
        let slot = free.trailing_zeros() as usize;
        self.blocks[slot] = AnimatedBlock::from_move(mv);
        self.live |= 1 << slot;
        true
    }

    /// Advances every moving block one step. Returns whether any block is still moving.
    pub fn step(&mut self) -> bool {
        let mut moving = false;
        for block in self.blocks.iter_mut() {
            if block.state == BlockState::Moving {
                block.advance();
                moving |= block.state == BlockState::Moving;
            }
        }
        moving
    }

    pub fn clear(&mut self) {
        self.blocks = [AnimatedBlock::default(); MAX_ANIMATIONS];
        self.live = 0;
    }

    pub fn len(&self) -> usize {
        self.live.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn is_full(&self) -> bool {
        self.live == u16::MAX
    }

    pub fn any_moving(&self) -> bool {
        self.iter().any(|b| b.state == BlockState::Moving)
    }

    /// Live blocks in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &AnimatedBlock> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(slot, _)| self.live & (1 << slot) != 0)
            .map(|(_, block)| block)
    }
}
