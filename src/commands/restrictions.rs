//! Listings restrictions command implementation.

use super::{access_token, build_client, marketplace_ids, resolve_marketplace, validate_asin};
use crate::config::Config;
use crate::format::Formatter;
use crate::spapi::models::ListingsRestrictionsParams;
use crate::spapi::{Marketplace, SellingPartner};
use anyhow::{Context, Result};
use tracing::info;

/// Checks whether a seller may list an ASIN.
pub struct RestrictionsCommand {
    config: Config,
}

impl RestrictionsCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn execute(
        &self,
        asin: &str,
        condition_type: &str,
        seller_id: Option<&str>,
        marketplaces: &[Marketplace],
    ) -> Result<String> {
        let client = build_client(&self.config)?;
        self.execute_with_client(&client, asin, condition_type, seller_id, marketplaces).await
    }

    /// Checks restrictions with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl SellingPartner,
        asin: &str,
        condition_type: &str,
        seller_id: Option<&str>,
        marketplaces: &[Marketplace],
    ) -> Result<String> {
        let asin = validate_asin(asin)?;
        let seller_id = seller_id.or(self.config.seller_id.as_deref()).context(
            "No seller id given. Pass --seller or set seller_id (SPAPI_SELLER_ID) in the config",
        )?;

        let marketplaces = if marketplaces.is_empty() {
            vec![resolve_marketplace(None, &self.config)?]
        } else {
            marketplaces.to_vec()
        };

        let params = ListingsRestrictionsParams::new(
            asin.as_str(),
            condition_type,
            seller_id,
            marketplace_ids(&marketplaces),
        );

        info!("Checking restrictions for {} ({})", asin, condition_type);

        let token = access_token(client).await?;
        let list = client
            .listings_restrictions(&token, &params)
            .await
            .context("Failed to fetch listing restrictions")?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_restrictions(&asin, &list))
    }
}
