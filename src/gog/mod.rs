//! Read-only client for the GOG web API

pub mod achievements;
pub mod catalog;
mod transport;

pub use transport::{HttpGet, ReqwestTransport};

use serde::de::DeserializeOwned;

use crate::config::GogConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("GOG API returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Unexpected response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Access token contains characters that cannot be sent in a header")]
    InvalidToken,
}

/// GOG endpoints bound to one authenticated transport
pub struct GogClient<H> {
    http: H,
    embed_url: String,
    gameplay_url: String,
}

impl<H> GogClient<H> {
    #[cfg(test)]
    pub(crate) fn transport(&self) -> &H {
        &self.http
    }
}

impl<H: HttpGet> GogClient<H> {
    pub fn new(http: H, config: &GogConfig) -> Self {
        Self {
            http,
            embed_url: config.embed_url.clone(),
            gameplay_url: config.gameplay_url.clone(),
        }
    }

    fn owned_games_url(&self) -> String {
        format!("{}/user/data/games", self.embed_url)
    }

    fn game_details_url(&self, game_id: u64) -> String {
        format!("{}/account/gameDetails/{}.json", self.embed_url, game_id)
    }

    /// The user id is escaped so it always stays a single path segment
    fn achievements_url(&self, game_id: u64, user_id: &str) -> String {
        format!(
            "{}/clients/{}/users/{}/achievements",
            self.gameplay_url,
            game_id,
            urlencoding::encode(user_id)
        )
    }

    /// GET a URL and decode a successful response body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url).await?;

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                url: url.to_string(),
            });
        }

        serde_json::from_str(&response.body).map_err(|source| ApiError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
