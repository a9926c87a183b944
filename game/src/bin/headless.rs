//! Replays a key script without a window and prints the final console.
//!
//! `headless "n9<^>v"` starts a round at the 2048 goal and makes four moves. Arrows are written
//! `^ v < >`; everything else is typed as-is.

use std::process::ExitCode;

use engine::HeadlessRunner;
use engine::app::ConsoleFrame;
use env_logger::Env;

use twenty48::agent::TileGame;
use twenty48::input::parse_key_script;
use twenty48::settings::{SEED_ENV, Settings};

const MAX_IDLE_TICKS: usize = 100_000;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let script = std::env::args().nth(1).unwrap_or_default();
    let settings = match Settings::default().with_env_overrides() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let seed = settings.gameplay.seed.unwrap_or(0);
    log::info!("replaying {:?} with seed {seed} ({SEED_ENV} to change)", script);

    let mut runner = HeadlessRunner::new(TileGame::new(seed));
    for key in parse_key_script(&script) {
        if !runner.run_until(MAX_IDLE_TICKS, || None, |s| s.wants_input() || s.exit_requested()) {
            log::error!("game never asked for input");
            return ExitCode::FAILURE;
        }
        if runner.state().exit_requested() {
            break;
        }
        runner.step(Some(key));
    }
    runner.run_until(MAX_IDLE_TICKS, || None, |s| s.wants_input() || s.exit_requested());

    let state = runner.state();
    println!("{}", state.console().to_text());
    println!(
        "-- tick {} screen {:?} score {} high {}",
        runner.frame(),
        state.screen,
        state.session.score.current(),
        state.session.score.high()
    );
    ExitCode::SUCCESS
}
