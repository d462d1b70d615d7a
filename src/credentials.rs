use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::config::CredentialsConfig;

/// The GOG user id and OAuth access token for a single run
#[derive(Clone)]
pub struct Credentials {
    user_id: String,
    access_token: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into().trim().to_string(),
            access_token: access_token.into().trim().to_string(),
        }
    }

    /// Use credentials from the environment when both are present
    pub fn from_config(config: &CredentialsConfig) -> Option<Self> {
        match (&config.user_id, &config.access_token) {
            (Some(user_id), Some(access_token)) => Some(Self::new(user_id, access_token)),
            _ => None,
        }
    }

    /// Ask for the user id, then the access token, one line each
    pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        let user_id = ask(input, output, "Please enter your GOG User ID:")?;
        let access_token = ask(input, output, "Please enter your GOG OAuth Access Token:")?;

        Ok(Self::new(user_id, access_token))
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Both values must be non-blank before any request is made
    pub fn is_complete(&self) -> bool {
        !self.user_id.is_empty() && !self.access_token.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    writeln!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;

    Ok(line.trim().to_string())
}
