use crate::difficulty::Difficulty;
use crate::input::Command;
use crate::session::RoundOutcome;
use crate::shift::Direction;

/// Every screen the game can be on. `*Enter` states run their entry effect on the next tick and
/// move to the matching input state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    TitleEnter,
    TitleInput,
    InstructionsEnter,
    InstructionsInput,
    DifficultyEnter,
    DifficultyInput,
    RoundStart,
    RoundEnter,
    RoundInput,
    Shifting,
    ShiftDone,
    Victory,
    Defeat,
    GameOverInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// A tick with no key (or a key that maps to nothing).
    Tick,
    Command(Command),
    ShiftApplied { moved: bool },
    AnimationFinished,
    Settled(RoundOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffect {
    None,
    DrawTitle,
    DrawInstructions,
    DrawDifficulty,
    SelectDifficulty(Difficulty),
    StartRound,
    DrawBoard,
    Shift(Direction),
    AnimateFrame,
    Settle,
    DrawVictory,
    DrawDefeat,
    Exit,
}

impl Screen {
    /// Pure transition function for the screen state machine.
    ///
    /// Side effects are reported via `ScreenEffect`; the caller executes them and feeds any
    /// result (shift moved, animation done, round outcome) back in as the next event.
    pub fn handle(self, event: ScreenEvent) -> (Screen, ScreenEffect) {
        use Command as C;
        use ScreenEvent as E;

        match (self, event) {
            (Screen::TitleEnter, E::Tick | E::Command(_)) => {
                (Screen::TitleInput, ScreenEffect::DrawTitle)
            }
            (Screen::TitleInput, E::Command(C::NewGame)) => {
                (Screen::DifficultyEnter, ScreenEffect::None)
            }
            (Screen::TitleInput, E::Command(C::Instructions)) => {
                (Screen::InstructionsEnter, ScreenEffect::None)
            }
            (Screen::TitleInput, E::Command(C::Quit)) => (Screen::TitleInput, ScreenEffect::Exit),

            (Screen::InstructionsEnter, E::Tick | E::Command(_)) => {
                (Screen::InstructionsInput, ScreenEffect::DrawInstructions)
            }
            (Screen::InstructionsInput, E::Command(C::Quit)) => {
                (Screen::TitleEnter, ScreenEffect::None)
            }

            (Screen::DifficultyEnter, E::Tick | E::Command(_)) => {
                (Screen::DifficultyInput, ScreenEffect::DrawDifficulty)
            }
            (Screen::DifficultyInput, E::Command(C::SelectDifficulty(level))) => {
                (Screen::RoundStart, ScreenEffect::SelectDifficulty(level))
            }

            (Screen::RoundStart, E::Tick | E::Command(_)) => {
                (Screen::RoundEnter, ScreenEffect::StartRound)
            }
            (Screen::RoundEnter, E::Tick | E::Command(_)) => {
                (Screen::RoundInput, ScreenEffect::DrawBoard)
            }
            (Screen::RoundInput, E::Command(C::Shift(direction))) => {
                (Screen::RoundInput, ScreenEffect::Shift(direction))
            }
            (Screen::RoundInput, E::ShiftApplied { moved: true }) => {
                (Screen::Shifting, ScreenEffect::None)
            }
            (Screen::RoundInput, E::Command(C::Quit)) => (Screen::TitleEnter, ScreenEffect::None),

            (Screen::Shifting, E::Tick | E::Command(_)) => {
                (Screen::Shifting, ScreenEffect::AnimateFrame)
            }
            (Screen::Shifting, E::AnimationFinished) => (Screen::ShiftDone, ScreenEffect::None),

            (Screen::ShiftDone, E::Tick | E::Command(_)) => {
                (Screen::ShiftDone, ScreenEffect::Settle)
            }
            (Screen::ShiftDone, E::Settled(RoundOutcome::Won)) => {
                (Screen::Victory, ScreenEffect::None)
            }
            (Screen::ShiftDone, E::Settled(RoundOutcome::Lost)) => {
                (Screen::Defeat, ScreenEffect::None)
            }
            (Screen::ShiftDone, E::Settled(RoundOutcome::Continue)) => {
                (Screen::RoundEnter, ScreenEffect::None)
            }

            (Screen::Victory, E::Tick | E::Command(_)) => {
                (Screen::GameOverInput, ScreenEffect::DrawVictory)
            }
            (Screen::Defeat, E::Tick | E::Command(_)) => {
                (Screen::GameOverInput, ScreenEffect::DrawDefeat)
            }
            (Screen::GameOverInput, E::Command(C::Quit)) => {
                (Screen::TitleEnter, ScreenEffect::None)
            }

            // Ignore irrelevant events in the current state.
            (state, _) => (state, ScreenEffect::None),
        }
    }

    /// States that read the keyboard. Keys stay queued everywhere else.
    pub fn wants_input(self) -> bool {
        matches!(
            self,
            Screen::TitleInput
                | Screen::InstructionsInput
                | Screen::DifficultyInput
                | Screen::RoundInput
                | Screen::GameOverInput
        )
    }

    /// States whose ticks count toward the round timer.
    pub fn counts_round_time(self) -> bool {
        matches!(
            self,
            Screen::RoundEnter | Screen::RoundInput | Screen::Shifting | Screen::ShiftDone
        )
    }

    /// Round start does its reset and then enters the round within the same tick.
    pub fn falls_through(self) -> bool {
        matches!(self, Screen::RoundStart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(c: Command) -> ScreenEvent {
        ScreenEvent::Command(c)
    }

    #[test]
    fn title_menu_routes() {
        let (s, e) = Screen::TitleEnter.handle(ScreenEvent::Tick);
        assert_eq!((s, e), (Screen::TitleInput, ScreenEffect::DrawTitle));

        assert_eq!(s.handle(cmd(Command::NewGame)).0, Screen::DifficultyEnter);
        assert_eq!(s.handle(cmd(Command::Instructions)).0, Screen::InstructionsEnter);
        assert_eq!(s.handle(cmd(Command::Quit)), (Screen::TitleInput, ScreenEffect::Exit));
        assert_eq!(
            s.handle(cmd(Command::Shift(Direction::Left))),
            (Screen::TitleInput, ScreenEffect::None)
        );
    }

    #[test]
    fn instructions_return_to_title_on_quit_only() {
        let (s, e) = Screen::InstructionsEnter.handle(ScreenEvent::Tick);
        assert_eq!((s, e), (Screen::InstructionsInput, ScreenEffect::DrawInstructions));
        assert_eq!(s.handle(cmd(Command::NewGame)).0, Screen::InstructionsInput);
        assert_eq!(s.handle(cmd(Command::Quit)).0, Screen::TitleEnter);
    }

    #[test]
    fn difficulty_digit_starts_round() {
        let (s, _) = Screen::DifficultyEnter.handle(ScreenEvent::Tick);
        assert_eq!(s, Screen::DifficultyInput);
        assert_eq!(s.handle(cmd(Command::Quit)).0, Screen::DifficultyInput);
        assert_eq!(
            s.handle(cmd(Command::SelectDifficulty(Difficulty::Moss))),
            (Screen::RoundStart, ScreenEffect::SelectDifficulty(Difficulty::Moss))
        );
    }

    #[test]
    fn round_start_falls_through_into_round_enter() {
        assert!(Screen::RoundStart.falls_through());
        let (s, e) = Screen::RoundStart.handle(ScreenEvent::Tick);
        assert_eq!((s, e), (Screen::RoundEnter, ScreenEffect::StartRound));
        assert!(!s.falls_through());
        assert_eq!(s.handle(ScreenEvent::Tick), (Screen::RoundInput, ScreenEffect::DrawBoard));
    }

    #[test]
    fn shift_moves_to_animation_only_when_tiles_moved() {
        let s = Screen::RoundInput;
        assert_eq!(
            s.handle(cmd(Command::Shift(Direction::Up))),
            (Screen::RoundInput, ScreenEffect::Shift(Direction::Up))
        );
        assert_eq!(s.handle(ScreenEvent::ShiftApplied { moved: false }).0, Screen::RoundInput);
        assert_eq!(s.handle(ScreenEvent::ShiftApplied { moved: true }).0, Screen::Shifting);
        assert_eq!(s.handle(cmd(Command::Quit)).0, Screen::TitleEnter);
    }

    #[test]
    fn shifting_settles_then_branches_on_outcome() {
        assert_eq!(
            Screen::Shifting.handle(ScreenEvent::Tick),
            (Screen::Shifting, ScreenEffect::AnimateFrame)
        );
        assert_eq!(Screen::Shifting.handle(ScreenEvent::AnimationFinished).0, Screen::ShiftDone);
        assert_eq!(
            Screen::ShiftDone.handle(ScreenEvent::Tick),
            (Screen::ShiftDone, ScreenEffect::Settle)
        );
        let settled = |o| Screen::ShiftDone.handle(ScreenEvent::Settled(o)).0;
        assert_eq!(settled(RoundOutcome::Won), Screen::Victory);
        assert_eq!(settled(RoundOutcome::Lost), Screen::Defeat);
        assert_eq!(settled(RoundOutcome::Continue), Screen::RoundEnter);
    }

    #[test]
    fn game_over_banners_wait_for_quit() {
        let (s, e) = Screen::Victory.handle(ScreenEvent::Tick);
        assert_eq!((s, e), (Screen::GameOverInput, ScreenEffect::DrawVictory));
        assert_eq!(Screen::Defeat.handle(ScreenEvent::Tick).1, ScreenEffect::DrawDefeat);
        assert_eq!(s.handle(cmd(Command::NewGame)).0, Screen::GameOverInput);
        assert_eq!(s.handle(cmd(Command::Quit)).0, Screen::TitleEnter);
    }

    #[test]
    fn only_menu_and_play_states_read_keys() {
        assert!(Screen::RoundInput.wants_input());
        assert!(!Screen::Shifting.wants_input());
        assert!(!Screen::TitleEnter.wants_input());
        assert!(Screen::Shifting.counts_round_time());
        assert!(!Screen::RoundStart.counts_round_time());
    }
}
