use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::models::ExportedGame;

/// `<dir>/<appid>.json`
pub fn game_path(dir: &Path, app_id: u64) -> PathBuf {
    dir.join(format!("{}.json", app_id))
}

/// Write a game as pretty-printed JSON, replacing any previous export
pub async fn write_game(dir: &Path, game: &ExportedGame) -> io::Result<PathBuf> {
    let json = serde_json::to_string_pretty(game).map_err(io::Error::other)?;
    let path = game_path(dir, game.app_id);

    fs::write(&path, json).await?;

    Ok(path)
}

/// Read back a previously exported game
#[cfg(test)]
pub async fn read_game(path: &Path) -> io::Result<ExportedGame> {
    let content = fs::read_to_string(path).await?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
