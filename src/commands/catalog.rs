//! Catalog lookup command implementation.

use super::{access_token, build_client, marketplace_ids, resolve_marketplace};
use crate::config::Config;
use crate::format::Formatter;
use crate::spapi::models::CatalogItemsParams;
use crate::spapi::{Marketplace, SellingPartner};
use anyhow::{Context, Result};
use tracing::info;

/// Looks up catalog items by identifier (ASIN, EAN, GTIN, ...).
pub struct CatalogCommand {
    config: Config,
}

impl CatalogCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn execute(
        &self,
        marketplaces: &[Marketplace],
        identifiers_type: &str,
        identifiers: &[String],
        included_data: &str,
    ) -> Result<String> {
        let client = build_client(&self.config)?;
        self.execute_with_client(&client, marketplaces, identifiers_type, identifiers, included_data)
            .await
    }

    /// Looks up items with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl SellingPartner,
        marketplaces: &[Marketplace],
        identifiers_type: &str,
        identifiers: &[String],
        included_data: &str,
    ) -> Result<String> {
        if identifiers.is_empty() {
            anyhow::bail!("No identifiers given");
        }

        let marketplaces = if marketplaces.is_empty() {
            vec![resolve_marketplace(None, &self.config)?]
        } else {
            marketplaces.to_vec()
        };

        let params = CatalogItemsParams::new(
            marketplace_ids(&marketplaces),
            identifiers_type,
            identifiers.join(","),
            included_data,
        );

        info!("Looking up {} {} identifiers", identifiers.len(), identifiers_type);

        let token = access_token(client).await?;
        let response =
            client.catalog_items(&token, &params).await.context("Failed to search catalog")?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_catalog(&response))
    }
}
