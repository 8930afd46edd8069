//! Access token command implementation.

use super::build_client;
use crate::config::Config;
use crate::format::Formatter;
use crate::spapi::SellingPartner;
use anyhow::{Context, Result};

/// Exchanges the configured refresh token for an access token.
pub struct TokenCommand {
    config: Config,
}

impl TokenCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn execute(&self) -> Result<String> {
        let client = build_client(&self.config)?;
        self.execute_with_client(&client).await
    }

    /// Requests a token with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl SellingPartner) -> Result<String> {
        let token = client.access_token().await.context("Failed to obtain access token")?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_token(&token))
    }
}
