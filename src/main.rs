mod config;
mod credentials;
mod error;
mod export;
mod gog;
mod mapper;
mod models;
mod utils;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use config::{Config, GogConfig};
use credentials::Credentials;
use error::ExportError;
use export::ExportSummary;
use gog::{GogClient, ReqwestTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for failures outside the export itself (configuration, stdin, HTTP client setup)
const EXIT_SETUP_FAILURE: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gog_achievement_export=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ExportError>() {
            Some(export_error) => {
                tracing::error!("{}", export_error);
                if let Some(hint) = export_error.hint() {
                    tracing::error!("{}", hint);
                }
                ExitCode::from(export_error.exit_code())
            }
            None => {
                tracing::error!("{:#}", e);
                ExitCode::from(EXIT_SETUP_FAILURE)
            }
        },
    }
}

async fn run() -> Result<ExportSummary> {
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let credentials = match Credentials::from_config(&config.credentials) {
        Some(credentials) => {
            tracing::info!("Using credentials from the environment");
            credentials
        }
        None => {
            let stdin = io::stdin();
            Credentials::prompt(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    let client = build_client(&credentials, &config.gog)?;

    let summary = export::run(&credentials, &client, &config.output.achievements_dir).await?;
    Ok(summary)
}

/// Blank credentials are reported before the token is turned into a header
fn build_client(
    credentials: &Credentials,
    config: &GogConfig,
) -> Result<GogClient<ReqwestTransport>> {
    if !credentials.is_complete() {
        return Err(ExportError::MissingCredentials.into());
    }

    let transport = ReqwestTransport::new(credentials.access_token(), config.timeout)
        .context("Failed to initialize HTTP client")?;
    Ok(GogClient::new(transport, config))
}
