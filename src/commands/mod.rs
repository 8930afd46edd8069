//! CLI command implementations.

pub mod catalog;
pub mod fees;
pub mod offers;
pub mod restrictions;
pub mod token;

#[cfg(test)]
pub(crate) mod mock;

pub use catalog::CatalogCommand;
pub use fees::{FeesCommand, FeesOptions};
pub use offers::OffersCommand;
pub use restrictions::RestrictionsCommand;
pub use token::TokenCommand;

use crate::config::Config;
use crate::spapi::{Marketplace, SellingPartner, SpApiClient};
use anyhow::{Context, Result};

/// Builds a client from the loaded configuration.
pub(crate) fn build_client(config: &Config) -> Result<SpApiClient> {
    let credentials = config.credentials()?;
    SpApiClient::with_options(credentials, config.client_options())
        .context("Failed to create HTTP client")
}

/// Exchanges the refresh token for an access token string.
pub(crate) async fn access_token(client: &impl SellingPartner) -> Result<String> {
    let token = client.access_token().await.context("Failed to obtain access token")?;
    Ok(token.access_token)
}

/// Picks the explicit marketplace, else the configured default.
pub(crate) fn resolve_marketplace(
    explicit: Option<Marketplace>,
    config: &Config,
) -> Result<Marketplace> {
    explicit.or(config.marketplace).context(
        "No marketplace given. Pass --marketplace or set marketplace in the config file",
    )
}

/// Normalizes an ASIN and checks it is 10 alphanumeric characters.
pub(crate) fn validate_asin(asin: &str) -> Result<String> {
    let asin = asin.trim().to_uppercase();
    if asin.len() != 10 || !asin.chars().all(|c| c.is_ascii_alphanumeric()) {
        anyhow::bail!(
            "Invalid ASIN format: '{}'. ASIN should be 10 alphanumeric characters.",
            asin
        );
    }
    Ok(asin)
}

/// Joins marketplace ids into the comma-separated form Amazon expects.
pub(crate) fn marketplace_ids(marketplaces: &[Marketplace]) -> String {
    marketplaces.iter().map(|m| m.id()).collect::<Vec<_>>().join(",")
}
