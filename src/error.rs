use std::path::PathBuf;

use crate::gog::ApiError;

/// Conditions that end a run before it completes
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("User ID and Access Token cannot be empty.")]
    MissingCredentials,

    #[error("Error fetching owned games from the GOG API: {0}")]
    Catalog(#[source] ApiError),

    #[error("Could not retrieve any games.")]
    NoGames,

    #[error("Could not create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Process exit code reported for this condition
    pub fn exit_code(&self) -> u8 {
        match self {
            ExportError::MissingCredentials => 2,
            ExportError::Catalog(_) => 3,
            ExportError::NoGames => 4,
            ExportError::OutputDir { .. } => 5,
        }
    }

    /// Advice for the operator, if there is any to give
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ExportError::Catalog(_) => Some(
                "Please ensure your User ID and Access Token are correct and have not expired.",
            ),
            ExportError::NoGames => {
                Some("Please check your access token and that your profile is public.")
            }
            _ => None,
        }
    }
}
