use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::mapper::PLATFORM;

pub const DEFAULT_EMBED_URL: &str = "https://embed.gog.com";
pub const DEFAULT_GAMEPLAY_URL: &str = "https://gameplay.gog.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub gog: GogConfig,
    pub output: OutputConfig,
    pub credentials: CredentialsConfig,
}

#[derive(Debug, Clone)]
pub struct GogConfig {
    /// Host serving the owned-games list and game details
    pub embed_url: String,
    /// Host serving per-user achievement data
    pub gameplay_url: String,
    /// `None` leaves the HTTP client's default in place
    pub timeout: Option<Duration>,
}

impl Default for GogConfig {
    fn default() -> Self {
        Self {
            embed_url: DEFAULT_EMBED_URL.to_string(),
            gameplay_url: DEFAULT_GAMEPLAY_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub achievements_dir: PathBuf,
}

/// Credentials supplied through the environment instead of the prompts
#[derive(Clone, Default)]
pub struct CredentialsConfig {
    pub user_id: Option<String>,
    pub access_token: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("user_id", &self.user_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gog = GogConfig {
            embed_url: normalize_url(
                lookup("GOG_EMBED_URL").unwrap_or_else(|| DEFAULT_EMBED_URL.to_string()),
            ),
            gameplay_url: normalize_url(
                lookup("GOG_GAMEPLAY_URL").unwrap_or_else(|| DEFAULT_GAMEPLAY_URL.to_string()),
            ),
            timeout: match non_blank(lookup("HTTP_TIMEOUT_SECS")) {
                Some(raw) => Some(Duration::from_secs(
                    raw.trim()
                        .parse()
                        .context("HTTP_TIMEOUT_SECS must be a number")?,
                )),
                None => None,
            },
        };

        let output = OutputConfig {
            achievements_dir: match non_blank(lookup("ACHIEVEMENTS_DIR")) {
                Some(dir) => PathBuf::from(dir),
                None => default_achievements_dir()?,
            },
        };

        let credentials = CredentialsConfig {
            user_id: non_blank(lookup("GOG_USER_ID")),
            access_token: non_blank(lookup("GOG_ACCESS_TOKEN")),
        };

        Ok(Config {
            gog,
            output,
            credentials,
        })
    }
}

/// `<executable dir>/Achievements/GOG`
fn default_achievements_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Unable to locate the running executable")?;
    let base = exe
        .parent()
        .context("Executable path has no parent directory")?;

    Ok(base.join("Achievements").join(PLATFORM))
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
