use std::collections::VecDeque;

use winit::event::VirtualKeyCode;

/// A single key press as the game sees it: a printable ASCII byte or one of the arrows.
///
/// "No key" is `Option::None` at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(u8),
    Up,
    Down,
    Left,
    Right,
}

impl KeyCode {
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_graphic() || ch == ' ' {
            Some(Self::Char(ch as u8))
        } else {
            None
        }
    }

    /// Arrow keys only; everything printable arrives through `ReceivedCharacter`.
    pub fn from_virtual_key(key: VirtualKeyCode) -> Option<Self> {
        match key {
            VirtualKeyCode::Up => Some(Self::Up),
            VirtualKeyCode::Down => Some(Self::Down),
            VirtualKeyCode::Left => Some(Self::Left),
            VirtualKeyCode::Right => Some(Self::Right),
            _ => None,
        }
    }
}

pub const DEFAULT_KEY_QUEUE_CAPACITY: usize = 32;

/// Bounded FIFO of pending key presses; the oldest press is dropped on overflow.
#[derive(Debug, Clone)]
pub struct KeyQueue {
    keys: VecDeque<KeyCode>,
    capacity: usize,
}

impl Default for KeyQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_KEY_QUEUE_CAPACITY)
    }
}

impl KeyQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            keys: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, key: KeyCode) {
        if self.keys.len() == self.capacity {
            self.keys.pop_front();
        }
        self.keys.push_back(key);
    }

    /// Non-blocking read.
    pub fn poll(&mut self) -> Option<KeyCode> {
        self.keys.pop_front()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
