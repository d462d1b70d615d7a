pub mod writer;

use std::io;
use std::path::{Path, PathBuf};

use crate::credentials::Credentials;
use crate::error::ExportError;
use crate::gog::{GogClient, HttpGet};
use crate::mapper;
use crate::models::GameSummary;

/// Totals reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub games_found: usize,
    pub exported: usize,
    /// Games with no achievements, or whose achievements could not be read
    pub skipped: usize,
    pub failed_writes: usize,
}

/// What happened to a single game
enum GameOutcome {
    Saved(PathBuf),
    NoAchievements,
    WriteFailed(io::Error),
}

/// Export every owned game that has achievements into `output_dir`.
///
/// Fails before any file activity when the credentials are blank or the
/// owned-games list cannot be obtained or is empty. After that, problems
/// with an individual game are logged and the run carries on.
pub async fn run<H: HttpGet>(
    credentials: &Credentials,
    client: &GogClient<H>,
    output_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    if !credentials.is_complete() {
        return Err(ExportError::MissingCredentials);
    }

    let games = client
        .fetch_owned_games()
        .await
        .map_err(ExportError::Catalog)?;

    if games.is_empty() {
        return Err(ExportError::NoGames);
    }

    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| ExportError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

    tracing::info!("Found {} games. Fetching achievements...", games.len());

    let mut summary = ExportSummary {
        games_found: games.len(),
        ..Default::default()
    };

    for game in &games {
        match export_game(client, game, credentials.user_id(), output_dir).await {
            GameOutcome::Saved(path) => {
                tracing::info!(
                    "Saved achievements for {} ({}) to {}",
                    game.title,
                    game.id,
                    path.display()
                );
                summary.exported += 1;
            }
            GameOutcome::NoAchievements => {
                tracing::info!(
                    "No achievements found for {} ({}) or game does not support them.",
                    game.title,
                    game.id
                );
                summary.skipped += 1;
            }
            GameOutcome::WriteFailed(e) => {
                tracing::error!(
                    "Failed to write achievements for {} ({}): {}",
                    game.title,
                    game.id,
                    e
                );
                summary.failed_writes += 1;
            }
        }
    }

    tracing::info!(
        "Processing complete: {} of {} games exported, {} without achievements, {} failed to write",
        summary.exported,
        summary.games_found,
        summary.skipped,
        summary.failed_writes
    );

    Ok(summary)
}

async fn export_game<H: HttpGet>(
    client: &GogClient<H>,
    game: &GameSummary,
    user_id: &str,
    output_dir: &Path,
) -> GameOutcome {
    let achievements = match client.fetch_achievements(game.id, user_id).await {
        Some(items) if !items.is_empty() => items,
        _ => return GameOutcome::NoAchievements,
    };

    let exported = mapper::map_game(game, &achievements);

    match writer::write_game(output_dir, &exported).await {
        Ok(path) => GameOutcome::Saved(path),
        Err(e) => GameOutcome::WriteFailed(e),
    }
}
