use super::{GogClient, HttpGet};
use crate::models::{AchievementItem, AchievementsResponse};

impl<H: HttpGet> GogClient<H> {
    /// Fetch a user's achievements for one game.
    ///
    /// Returns `None` whenever no usable list comes back. A failed request is
    /// routine (many games have no achievements) and is only traced at debug
    /// level; a body that does not decode is logged in full as a warning.
    pub async fn fetch_achievements(
        &self,
        game_id: u64,
        user_id: &str,
    ) -> Option<Vec<AchievementItem>> {
        let url = self.achievements_url(game_id, user_id);

        let response = match self.http.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Achievements request for game {} failed: {}", game_id, e);
                return None;
            }
        };

        if !response.is_success() {
            tracing::debug!(
                "Achievements request for game {} returned status {}",
                game_id,
                response.status
            );
            return None;
        }

        match serde_json::from_str::<AchievementsResponse>(&response.body) {
            Ok(parsed) => Some(parsed.items.unwrap_or_default()),
            Err(e) => {
                tracing::warn!(
                    "Error deserializing achievements for game {}: {}\nRaw JSON response that caused the error:\n{}",
                    game_id,
                    e,
                    response.body
                );
                None
            }
        }
    }
}
