use engine::app::ConsoleFrame;
use engine::graphics::{CpuRenderer, draw_console};
use engine::input::KeyCode;
use engine::regression::{
    FrameHashGolden, assert_or_update_golden_json, record_render_hashes, update_goldens_enabled,
};
use engine::surface::{RgbaBuffer, SurfaceSize};

use twenty48::agent::TileGame;
use twenty48::input::parse_key_script;
use twenty48::state::GameState;

const SEED: u64 = 2048;

fn render(state: &GameState, buf: &mut RgbaBuffer) {
    let size = buf.size();
    let mut gfx = CpuRenderer::new(buf.frame_mut(), size);
    draw_console(&mut gfx, state.console());
}

/// Pads each key with idle ticks so every animation settles before the next key.
fn with_idle_ticks(keys: Vec<KeyCode>, idle: usize) -> Vec<Option<KeyCode>> {
    let mut inputs = vec![None; idle];
    for key in keys {
        inputs.push(Some(key));
        inputs.extend(std::iter::repeat_n(None, idle));
    }
    inputs
}

fn check(name: &str, script: &str, idle: usize) {
    let inputs = with_idle_ticks(parse_key_script(script), idle);
    let size = SurfaceSize::default_console();
    let hashes = record_render_hashes(TileGame::new(SEED), inputs, size, render);

    let golden = FrameHashGolden::new(name, size.width, size.height, hashes);
    let path = engine::regression_golden_path!(name);
    if let Err(err) = assert_or_update_golden_json(&path, &golden, update_goldens_enabled()) {
        panic!("{err}");
    }
}

#[test]
fn menus_render_stably() {
    check("menus", "iqn", 2);
}

#[test]
fn opening_moves_render_stably() {
    check("opening_moves", "n9<v>^", 60);
}

#[test]
fn identical_runs_hash_identically() {
    let inputs = with_idle_ticks(parse_key_script("n5<<^"), 50);
    let size = SurfaceSize::default_console();
    let a = record_render_hashes(TileGame::new(SEED), inputs.clone(), size, render);
    let b = record_render_hashes(TileGame::new(SEED), inputs, size, render);
    assert_eq!(a, b);
    // Title, menus and board each change the picture.
    let mut distinct = a.clone();
    distinct.dedup();
    assert!(distinct.len() > 4, "only {} distinct frames", distinct.len());
}
