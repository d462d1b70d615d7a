use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::dates;

/// Response from the embed host's `/user/data/games` endpoint
#[derive(Debug, Default, Deserialize)]
pub struct OwnedGamesResponse {
    #[serde(default)]
    pub owned: Option<Vec<u64>>,
}

/// Response from `/account/gameDetails/{id}.json`
///
/// Only the title is used; the endpoint returns much more.
#[derive(Debug, Default, Deserialize)]
pub struct GameDetailsResponse {
    #[serde(default)]
    pub title: Option<String>,
}

/// Response from the gameplay host's achievements endpoint
#[derive(Debug, Default, Deserialize)]
pub struct AchievementsResponse {
    #[serde(default)]
    pub items: Option<Vec<AchievementItem>>,
}

/// A single achievement as GOG reports it.
///
/// The serde attributes are the wire contract: every snake_case name the
/// provider uses is listed here and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementItem {
    #[serde(rename = "achievement_key", deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub visible: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "image_url_unlocked", deserialize_with = "null_as_default")]
    pub unlocked_image_url: String,
    /// Present only once the user has unlocked the achievement
    #[serde(rename = "date_unlocked", with = "dates::nullable")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// An owned game whose title resolved successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub id: u64,
    /// Never blank
    pub title: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
