use super::{ApiError, GogClient, HttpGet};
use crate::models::{GameDetailsResponse, GameSummary, OwnedGamesResponse};

/// Why a single owned game was left out of the catalog
#[derive(Debug, thiserror::Error)]
enum DetailError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("game details are empty")]
    EmptyBody,

    #[error("title is empty")]
    BlankTitle,
}

impl<H: HttpGet> GogClient<H> {
    /// Fetch the owned-game ids and resolve each one to its title.
    ///
    /// Only the owned-games request itself can fail the call. Games whose
    /// details cannot be fetched are logged and skipped; the rest keep the
    /// order GOG returned them in.
    pub async fn fetch_owned_games(&self) -> Result<Vec<GameSummary>, ApiError> {
        let owned = self
            .get_json::<OwnedGamesResponse>(&self.owned_games_url())
            .await?
            .owned
            .unwrap_or_default();

        if owned.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!("Found {} owned game IDs. Fetching details...", owned.len());

        let mut games = Vec::with_capacity(owned.len());
        for game_id in owned {
            match self.fetch_game_summary(game_id).await {
                Ok(game) => {
                    tracing::info!("Fetched details for: {}", game.title);
                    games.push(game);
                }
                Err(e) => {
                    tracing::warn!("Skipping game ID {}: {}", game_id, e);
                }
            }
        }

        Ok(games)
    }

    async fn fetch_game_summary(&self, game_id: u64) -> Result<GameSummary, DetailError> {
        let url = self.game_details_url(game_id);
        let response = self.http.get(&url).await?;

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                url,
            }
            .into());
        }

        if response.body.trim().is_empty() {
            return Err(DetailError::EmptyBody);
        }

        let details: GameDetailsResponse =
            serde_json::from_str(&response.body).map_err(|source| ApiError::Parse {
                url: url.clone(),
                source,
            })?;

        let title = details.title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(DetailError::BlankTitle);
        }

        Ok(GameSummary { id: game_id, title })
    }
}
