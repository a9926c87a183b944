pub mod app;
pub mod console;
pub mod graphics;
pub mod input;
pub mod pixels_renderer;
pub mod regression;
pub mod surface;

pub trait GameLogic {
    type State;
    type Input;

    fn initial_state(&self) -> Self::State;
    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State;
}

/// Drives a `GameLogic` one tick at a time without a window.
#[derive(Debug)]
pub struct HeadlessRunner<G: GameLogic> {
    game: G,
    state: G::State,
    frame: usize,
}

impl<G: GameLogic> HeadlessRunner<G> {
    pub fn new(game: G) -> Self {
        let state = game.initial_state();
        Self {
            game,
            state,
            frame: 0,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn state(&self) -> &G::State {
        &self.state
    }

    pub fn step(&mut self, input: G::Input) -> usize {
        self.state = self.game.step(&self.state, input);
        self.frame += 1;
        self.frame
    }

    pub fn run<I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = G::Input>,
    {
        for input in inputs {
            self.step(input);
        }
        self.frame
    }

    /// Steps with `input` until `done` holds for the state, giving up after `max_steps`.
    /// Returns whether the predicate was reached.
    pub fn run_until<F>(&mut self, max_steps: usize, mut input: impl FnMut() -> G::Input, done: F) -> bool
    where
        F: Fn(&G::State) -> bool,
    {
        for _ in 0..max_steps {
            if done(&self.state) {
                return true;
            }
            self.step(input());
        }
        done(&self.state)
    }
}
