//! Item offers command implementation.

use super::{access_token, build_client, resolve_marketplace, validate_asin};
use crate::config::Config;
use crate::format::Formatter;
use crate::spapi::models::{BatchItemOffersRequest, BatchItemOffersResponse, ItemOffersRequest};
use crate::spapi::{Marketplace, SellingPartner};
use anyhow::{Context, Result};
use tracing::info;

/// Amazon accepts at most this many sub-requests per batch call.
const MAX_BATCH: usize = 20;

/// Fetches offer summaries for one or more ASINs.
pub struct OffersCommand {
    config: Config,
}

impl OffersCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn execute(
        &self,
        marketplace: Option<Marketplace>,
        item_condition: &str,
        customer_type: &str,
        asins: &[String],
    ) -> Result<String> {
        let client = build_client(&self.config)?;
        self.execute_with_client(&client, marketplace, item_condition, customer_type, asins)
            .await
    }

    /// Fetches offers with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl SellingPartner,
        marketplace: Option<Marketplace>,
        item_condition: &str,
        customer_type: &str,
        asins: &[String],
    ) -> Result<String> {
        let marketplace = resolve_marketplace(marketplace, &self.config)?;
        let asins = asins.iter().map(|a| validate_asin(a)).collect::<Result<Vec<_>>>()?;
        if asins.is_empty() {
            anyhow::bail!("No ASINs given");
        }

        let token = access_token(client).await?;
        let mut merged = BatchItemOffersResponse { responses: Vec::new() };

        for chunk in asins.chunks(MAX_BATCH) {
            info!("Fetching offers for {} ASINs in {}", chunk.len(), marketplace);

            let request = BatchItemOffersRequest::new(
                chunk
                    .iter()
                    .map(|asin| {
                        ItemOffersRequest::for_asin(
                            asin,
                            marketplace.id(),
                            item_condition,
                            customer_type,
                        )
                    })
                    .collect(),
            );

            let response = client
                .batch_item_offers(&token, &request)
                .await
                .context("Failed to fetch item offers")?;
            merged.responses.extend(response.responses);
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_offers(&merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock::MockSellingPartner;

    fn asins(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("B0000000{:02}", i)).collect()
    }

    #[tokio::test]
    async fn test_offers_builds_batch() {
        let client = MockSellingPartner::new();
        let cmd = OffersCommand::new(Config::default());

        let output = cmd
            .execute_with_client(
                &client,
                Some(Marketplace::Fr),
                "New",
                "Consumer",
                &["b07tty5ys8".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(output, "No offers found.");

        let batches = client.offer_batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        let sub = &batches[0].requests[0];
        assert_eq!(sub.marketplace_id, "A13V1IB3VIYZZH");
        assert_eq!(sub.item_condition, "New");
        assert_eq!(sub.customer_type, "Consumer");
        assert_eq!(sub.uri, "/products/pricing/v0/items/B07TTY5YS8/offers");
        assert_eq!(client.tokens_seen.lock().unwrap().as_slice(), ["tok123"]);
    }

    #[tokio::test]
    async fn test_offers_splits_large_batches() {
        let client = MockSellingPartner::new();
        let cmd = OffersCommand::new(Config::default());

        cmd.execute_with_client(&client, Some(Marketplace::De), "New", "Consumer", &asins(45))
            .await
            .unwrap();

        let sizes: Vec<usize> =
            client.offer_batches.lock().unwrap().iter().map(|b| b.requests.len()).collect();
        assert_eq!(sizes, vec![20, 20, 5]);
    }

    #[tokio::test]
    async fn test_offers_uses_config_marketplace() {
        let client = MockSellingPartner::new();
        let config = Config { marketplace: Some(Marketplace::Uk), ..Config::default() };

        OffersCommand::new(config)
            .execute_with_client(&client, None, "New", "Consumer", &asins(1))
            .await
            .unwrap();

        let batches = client.offer_batches.lock().unwrap();
        assert_eq!(batches[0].requests[0].marketplace_id, "A1F83G8C2ARO7P");
    }

    #[tokio::test]
    async fn test_offers_invalid_asin() {
        let client = MockSellingPartner::new();
        let cmd = OffersCommand::new(Config::default());

        let err = cmd
            .execute_with_client(&client, Some(Marketplace::Fr), "New", "Consumer", &["bad".to_string()])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid ASIN format"));
        assert!(client.offer_batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_offers_token_failure_stops() {
        let client = MockSellingPartner { reject_token: true, ..MockSellingPartner::new() };
        let cmd = OffersCommand::new(Config::default());

        let err = cmd
            .execute_with_client(&client, Some(Marketplace::Fr), "New", "Consumer", &asins(1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to obtain access token"));
        assert!(client.offer_batches.lock().unwrap().is_empty());
    }
}
