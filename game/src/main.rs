use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use engine::app::{AppConfig, AppError, run_console_game};
use engine::surface::SurfaceSize;
use env_logger::Env;

use twenty48::agent::TileGame;
use twenty48::settings::{Settings, SettingsStore};

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x2048)
}

fn load_settings() -> Settings {
    let store = SettingsStore::from_env();
    log::info!("settings: {}", store.path().display());
    let settings = store.load().unwrap_or_else(|err| {
        log::warn!("{err}; using defaults");
        Settings::default()
    });
    settings.clone().with_env_overrides().unwrap_or_else(|err| {
        log::warn!("{err}; ignoring");
        settings
    })
}

fn run() -> Result<(), AppError> {
    let settings = load_settings();
    let seed = settings.gameplay.seed.unwrap_or_else(clock_seed);
    log::info!("seed {seed}");

    let game = TileGame::new(seed).with_anim_slow_down(settings.gameplay.anim_slow_down);
    let config = AppConfig {
        title: "2048: The Return of Gazool".to_string(),
        buffer_size: SurfaceSize::default_console(),
        window_scale: settings.video.window_scale,
        tick_interval: settings.gameplay.tick_interval(),
        vsync: Some(settings.video.vsync),
    };
    run_console_game(config, game)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
