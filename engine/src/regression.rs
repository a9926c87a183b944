//! Engine-level regression testing helpers.
//!
//! Scenarios are replayed through a `HeadlessRunner`, every frame is rasterized by a
//! caller-provided closure, and the per-frame SHA-256 hashes are compared against a JSON golden
//! under `tests/goldens/`. A missing golden is an error; goldens are only written when
//! `GAZOOL_UPDATE_GOLDENS=1` is set.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{GameLogic, HeadlessRunner, surface::RgbaBuffer, surface::SurfaceSize};

pub const UPDATE_GOLDENS_ENV: &str = "GAZOOL_UPDATE_GOLDENS";

/// Environment flag helper: accepts `1/true/yes/on` (case-insensitive).
pub fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// If set, regression tests may update golden files in-place.
pub fn update_goldens_enabled() -> bool {
    env_flag(UPDATE_GOLDENS_ENV)
}

pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[macro_export]
macro_rules! regression_golden_path {
    ($name:expr) => {{
        let base = $crate::regression::sanitize_filename($name);
        ::std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("goldens")
            .join(format!("{base}.json"))
    }};
}

pub fn rgba_sha256_hex(rgba: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rgba);
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameHashGolden {
    pub version: u32,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub hash_alg: String,
    /// One hash per engine frame, the initial state included.
    pub hashes: Vec<String>,
}

impl FrameHashGolden {
    pub fn new(name: impl Into<String>, width: u32, height: u32, hashes: Vec<String>) -> Self {
        Self {
            version: 1,
            name: name.into(),
            width,
            height,
            hash_alg: "sha256".to_string(),
            hashes,
        }
    }
}

pub fn load_golden_json(path: impl AsRef<Path>) -> io::Result<FrameHashGolden> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("failed parsing golden json {}: {e}", path.display()),
        )
    })
}

pub fn save_golden_json(path: impl AsRef<Path>, golden: &FrameHashGolden) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, golden).map_err(io::Error::other)?;
    writer.flush()?;
    Ok(())
}

pub fn assert_or_update_golden_json(
    path: impl AsRef<Path>,
    golden: &FrameHashGolden,
    update: bool,
) -> io::Result<()> {
    let path = path.as_ref();
    let exists = path.exists();

    if update {
        save_golden_json(path, golden)?;
        if exists {
            log::info!("updated golden: {}", path.display());
        } else {
            log::info!("wrote golden: {}", path.display());
        }
        return Ok(());
    }

    if !exists {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "missing golden {} ({} frames recorded)\n(hint: set {UPDATE_GOLDENS_ENV}=1 to write it)",
                path.display(),
                golden.hashes.len()
            ),
        ));
    }

    let expected = load_golden_json(path)?;
    if expected.version != golden.version
        || expected.hash_alg != golden.hash_alg
        || expected.width != golden.width
        || expected.height != golden.height
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "golden metadata mismatch at {}:\nexpected: v{} alg={} {}x{}\nactual:   v{} alg={} {}x{}\n(hint: set {UPDATE_GOLDENS_ENV}=1 to rewrite)",
                path.display(),
                expected.version,
                expected.hash_alg,
                expected.width,
                expected.height,
                golden.version,
                golden.hash_alg,
                golden.width,
                golden.height
            ),
        ));
    }

    if expected.hashes.len() != golden.hashes.len() {
        return Err(io::Error::other(format!(
            "golden frame count mismatch at {}: expected {} hashes, got {}\n(hint: set {UPDATE_GOLDENS_ENV}=1 to rewrite)",
            path.display(),
            expected.hashes.len(),
            golden.hashes.len()
        )));
    }

    for (i, (a, b)) in expected.hashes.iter().zip(golden.hashes.iter()).enumerate() {
        if a != b {
            return Err(io::Error::other(format!(
                "golden mismatch at {} (frame {i}):\nexpected: {a}\nactual:   {b}\n(hint: set {UPDATE_GOLDENS_ENV}=1 to rewrite)",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Replays `inputs` headlessly and hashes the rasterized frame after every step.
///
/// The returned hashes start with the initial state, so there is one more hash than inputs.
pub fn record_render_hashes<G, Render>(
    game: G,
    inputs: impl IntoIterator<Item = G::Input>,
    size: SurfaceSize,
    mut render: Render,
) -> Vec<String>
where
    G: GameLogic,
    Render: FnMut(&G::State, &mut RgbaBuffer),
{
    let mut runner = HeadlessRunner::new(game);
    let mut buf = RgbaBuffer::new(size);
    let mut hashes = Vec::new();

    render(runner.state(), &mut buf);
    hashes.push(rgba_sha256_hex(buf.frame()));
    for input in inputs {
        runner.step(input);
        render(runner.state(), &mut buf);
        hashes.push(rgba_sha256_hex(buf.frame()));
    }
    hashes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_matches_known_digest() {
        assert_eq!(
            rgba_sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sanitize_replaces_path_characters() {
        assert_eq!(sanitize_filename("title/new game 1"), "title_new_game_1");
    }
}
