//! Fee estimate command implementation.

use super::{access_token, build_client, resolve_marketplace, validate_asin};
use crate::config::Config;
use crate::format::Formatter;
use crate::spapi::models::{FeesEstimateRequestPayload, IdType, PriceToEstimateFees};
use crate::spapi::{Marketplace, Money, SellingPartner};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::info;

/// Amazon accepts at most this many estimates per call.
const MAX_BATCH: usize = 20;

/// Pricing inputs shared by every item in one fee estimate run.
#[derive(Debug, Clone)]
pub struct FeesOptions {
    pub marketplace: Option<Marketplace>,
    pub price: Decimal,
    /// Defaults to the marketplace currency.
    pub currency: Option<String>,
    pub shipping: Option<Decimal>,
    pub amazon_fulfilled: bool,
    pub id_type: IdType,
}

/// Estimates seller fees for ASINs or SKUs at a given price.
pub struct FeesCommand {
    config: Config,
}

impl FeesCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn execute(&self, options: &FeesOptions, ids: &[String]) -> Result<String> {
        let client = build_client(&self.config)?;
        self.execute_with_client(&client, options, ids).await
    }

    /// Estimates fees with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl SellingPartner,
        options: &FeesOptions,
        ids: &[String],
    ) -> Result<String> {
        if ids.is_empty() {
            anyhow::bail!("No ids given");
        }

        let marketplace = resolve_marketplace(options.marketplace, &self.config)?;
        let currency = options.currency.as_deref().unwrap_or_else(|| marketplace.currency());

        let mut price = PriceToEstimateFees::new(Money::new(options.price, currency));
        if let Some(shipping) = options.shipping {
            price = price.with_shipping(Money::new(shipping, currency));
        }

        let requests = ids
            .iter()
            .map(|id| -> Result<FeesEstimateRequestPayload> {
                let id = match options.id_type {
                    IdType::Asin => validate_asin(id)?,
                    IdType::SellerSku => id.trim().to_string(),
                };
                Ok(FeesEstimateRequestPayload::new(
                    options.id_type,
                    id,
                    marketplace.id(),
                    options.amazon_fulfilled,
                    price.clone(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let token = access_token(client).await?;
        let mut estimates = Vec::with_capacity(requests.len());

        for chunk in requests.chunks(MAX_BATCH) {
            info!("Estimating fees for {} items in {}", chunk.len(), marketplace);
            let results =
                client.fees_estimate(&token, chunk).await.context("Failed to estimate fees")?;
            estimates.extend(results);
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_fees(&estimates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::commands::mock::MockSellingPartner;
    use crate::spapi::models::FeesEstimateResponsePayload;

    fn options(marketplace: Marketplace) -> FeesOptions {
        FeesOptions {
            marketplace: Some(marketplace),
            price: Decimal::from_str("19.99").unwrap(),
            currency: None,
            shipping: None,
            amazon_fulfilled: true,
            id_type: IdType::Asin,
        }
    }

    #[tokio::test]
    async fn test_fees_request_uses_marketplace_currency() {
        let client = MockSellingPartner::new();
        let cmd = FeesCommand::new(Config::default());

        let output = cmd
            .execute_with_client(&client, &options(Marketplace::Uk), &["B07TTY5YS8".to_string()])
            .await
            .unwrap();
        assert_eq!(output, "No fee estimates.");

        let batches = client.fee_batches.lock().unwrap();
        let request = &batches[0][0];
        assert_eq!(request.id_type, IdType::Asin);
        assert_eq!(request.id_value, "B07TTY5YS8");
        assert_eq!(request.fees_estimate_request.marketplace_id, "A1F83G8C2ARO7P");
        assert_eq!(request.fees_estimate_request.is_amazon_fulfilled, Some(true));

        let listing = &request.fees_estimate_request.price_to_estimate_fees.listing_price;
        assert_eq!(listing.currency_code, "GBP");
        assert_eq!(listing.amount, Decimal::from_str("19.99").unwrap());
        assert!(request.fees_estimate_request.price_to_estimate_fees.shipping.is_none());
    }

    #[tokio::test]
    async fn test_fees_shipping_and_currency_override() {
        let client = MockSellingPartner::new();
        let opts = FeesOptions {
            currency: Some("USD".to_string()),
            shipping: Some(Decimal::from_str("4.50").unwrap()),
            id_type: IdType::SellerSku,
            ..options(Marketplace::De)
        };

        FeesCommand::new(Config::default())
            .execute_with_client(&client, &opts, &[" my-sku-1 ".to_string()])
            .await
            .unwrap();

        let batches = client.fee_batches.lock().unwrap();
        let request = &batches[0][0];
        assert_eq!(request.id_type, IdType::SellerSku);
        assert_eq!(request.id_value, "my-sku-1");
        let price = &request.fees_estimate_request.price_to_estimate_fees;
        assert_eq!(price.listing_price.currency_code, "USD");
        assert_eq!(price.shipping.as_ref().unwrap().amount, Decimal::from_str("4.50").unwrap());
    }

    #[tokio::test]
    async fn test_fees_splits_large_batches() {
        let client = MockSellingPartner::new();
        let ids: Vec<String> = (0..21).map(|i| format!("B0000000{:02}", i)).collect();

        FeesCommand::new(Config::default())
            .execute_with_client(&client, &options(Marketplace::Fr), &ids)
            .await
            .unwrap();

        let sizes: Vec<usize> = client.fee_batches.lock().unwrap().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![20, 1]);
    }

    #[tokio::test]
    async fn test_fees_reports_in_band_errors() {
        let fees: Vec<FeesEstimateResponsePayload> = serde_json::from_str(
            r#"[{
                "Status": "ClientError",
                "FeesEstimateIdentifier": {"IdValue": "B07TTY5YS8"},
                "Error": {"Type": "Sender", "Code": "InvalidParameterValue", "Message": "Bad price"}
            }]"#,
        )
        .unwrap();
        let client = MockSellingPartner { fees, ..MockSellingPartner::new() };

        let output = FeesCommand::new(Config::default())
            .execute_with_client(&client, &options(Marketplace::Fr), &["B07TTY5YS8".to_string()])
            .await
            .unwrap();
        assert!(output.contains("B07TTY5YS8 (ClientError)"));
        assert!(output.contains("InvalidParameterValue Bad price"));
    }
}
