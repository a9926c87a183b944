use engine::app::ConsoleFrame;
use engine::console::ConsoleBuffer;
use engine::input::KeyCode;

use crate::input::Command;
use crate::screens;
use crate::session::GameSession;
use crate::view::{Screen, ScreenEffect, ScreenEvent};

pub const DEFAULT_ANIM_SLOW_DOWN: u64 = 1;

/// Whole-game state: the current screen, the session it drives and the console it draws on.
#[derive(Debug, Clone)]
pub struct GameState {
    pub screen: Screen,
    pub session: GameSession,
    pub console: ConsoleBuffer,
    pub anim_slow_down: u64,
    pub exit_requested: bool,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            screen: Screen::default(),
            session: GameSession::new(seed),
            console: ConsoleBuffer::default(),
            anim_slow_down: DEFAULT_ANIM_SLOW_DOWN,
            exit_requested: false,
        }
    }

    pub fn with_anim_slow_down(mut self, slow_down: u64) -> Self {
        self.anim_slow_down = slow_down.max(1);
        self
    }

    /// One external tick: dispatch the key (if any), run the effect, and keep feeding follow-up
    /// events until the machine settles for this tick.
    pub fn tick(&mut self, key: Option<KeyCode>) {
        if self.exit_requested {
            return;
        }

        let mut event = match key.and_then(Command::from_key) {
            Some(command) => ScreenEvent::Command(command),
            None => ScreenEvent::Tick,
        };

        loop {
            if matches!(event, ScreenEvent::Tick | ScreenEvent::Command(_))
                && self.screen.counts_round_time()
            {
                self.session.timer.advance();
            }

            let from = self.screen;
            let (next, effect) = from.handle(event);
            if next != from {
                log::debug!("screen {from:?} -> {next:?}");
            }
            self.screen = next;

            match self.apply(effect) {
                Some(follow_up) => event = follow_up,
                None if from.falls_through() && next != from => event = ScreenEvent::Tick,
                None => break,
            }
        }
    }

    fn apply(&mut self, effect: ScreenEffect) -> Option<ScreenEvent> {
        match effect {
            ScreenEffect::None => None,
            ScreenEffect::DrawTitle => {
                screens::draw_title(&mut self.console, self.session.score.high());
                None
            }
            ScreenEffect::DrawInstructions => {
                screens::draw_instructions(&mut self.console);
                None
            }
            ScreenEffect::DrawDifficulty => {
                screens::draw_difficulty(&mut self.console);
                None
            }
            ScreenEffect::SelectDifficulty(level) => {
                log::info!("difficulty {} (goal {})", level.label(), level.winning_tile());
                self.session.select_difficulty(level);
                None
            }
            ScreenEffect::StartRound => {
                self.session.start_round();
                None
            }
            ScreenEffect::DrawBoard => {
                screens::draw_board(&mut self.console, &self.session);
                None
            }
            ScreenEffect::Shift(direction) => {
                let moved = self.session.shift(direction);
                Some(ScreenEvent::ShiftApplied { moved })
            }
            ScreenEffect::AnimateFrame => {
                if !self.session.timer.is_animation_frame(self.anim_slow_down) {
                    return None;
                }
                screens::draw_animation_frame(&mut self.console, &self.session);
                if self.session.step_animation() {
                    return None;
                }
                // Last step: show every block resting on its destination.
                screens::draw_animation_frame(&mut self.console, &self.session);
                Some(ScreenEvent::AnimationFinished)
            }
            ScreenEffect::Settle => {
                let outcome = self.session.settle();
                log::debug!("round settled: {outcome:?}, score {}", self.session.score.current());
                Some(ScreenEvent::Settled(outcome))
            }
            ScreenEffect::DrawVictory => {
                screens::draw_victory(&mut self.console, &self.session);
                None
            }
            ScreenEffect::DrawDefeat => {
                screens::draw_defeat(&mut self.console, &self.session);
                None
            }
            ScreenEffect::Exit => {
                self.exit_requested = true;
                None
            }
        }
    }
}

impl ConsoleFrame for GameState {
    fn console(&self) -> &ConsoleBuffer {
        &self.console
    }

    fn wants_input(&self) -> bool {
        self.screen.wants_input()
    }

    fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
