//! Output formatting for SP-API results (table, JSON).

use crate::config::OutputFormat;
use crate::spapi::models::catalog::CatalogItem;
use crate::spapi::models::fees::FeeDetail;
use crate::spapi::models::pricing::ItemOffersResponse;
use crate::spapi::models::{
    AccessToken, BatchItemOffersResponse, CatalogItemsResponse, FeesEstimateResponsePayload,
    RestrictionList,
};
use serde::Serialize;

const TITLE_WIDTH: usize = 50;

/// Formats API results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_token(&self, token: &AccessToken) -> String {
        match self.format {
            OutputFormat::Json => json(token),
            OutputFormat::Table => {
                let mut lines = vec![
                    format!("Token:   {}", token.access_token),
                    format!("Type:    {}", token.token_type),
                    format!("Expires: {}s", token.expires_in),
                ];
                if token.refresh_token.is_some() {
                    lines.push("Refresh: rotated".to_string());
                }
                lines.join("\n")
            }
        }
    }

    pub fn format_offers(&self, response: &BatchItemOffersResponse) -> String {
        match self.format {
            OutputFormat::Json => json(response),
            OutputFormat::Table if response.responses.is_empty() => "No offers found.".to_string(),
            OutputFormat::Table => self.table_offers(response),
        }
    }

    pub fn format_catalog(&self, response: &CatalogItemsResponse) -> String {
        match self.format {
            OutputFormat::Json => json(response),
            OutputFormat::Table if response.items.is_empty() => "No items found.".to_string(),
            OutputFormat::Table => self.table_catalog(response),
        }
    }

    pub fn format_fees(&self, estimates: &[FeesEstimateResponsePayload]) -> String {
        match self.format {
            OutputFormat::Json => json(estimates),
            OutputFormat::Table if estimates.is_empty() => "No fee estimates.".to_string(),
            OutputFormat::Table => self.table_fees(estimates),
        }
    }

    pub fn format_restrictions(&self, asin: &str, list: &RestrictionList) -> String {
        match self.format {
            OutputFormat::Json => json(list),
            OutputFormat::Table => self.table_restrictions(asin, list),
        }
    }

    // Table formatting

    fn table_offers(&self, response: &BatchItemOffersResponse) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{:<10}  {:>6}  {:>6}  {:>14}  {:>14}",
            "ASIN", "Status", "Offers", "Lowest", "Buy Box"
        ));
        lines.push(format!("{:-<10}  {:-<6}  {:-<6}  {:-<14}  {:-<14}", "", "", "", "", ""));

        for item in &response.responses {
            let summary = item.body.payload.as_ref().and_then(|p| p.summary.as_ref());

            let offers = summary
                .map(|s| s.total_offer_count.to_string())
                .unwrap_or_else(|| "N/A".to_string());

            let lowest = summary
                .and_then(|s| s.lowest_prices.iter().map(|p| &p.listing_price).min_by_key(|m| m.amount))
                .map(|m| m.to_string())
                .unwrap_or_else(|| "N/A".to_string());

            let buy_box = summary
                .and_then(|s| s.buy_box_prices.first())
                .map(|b| b.listing_price.to_string())
                .unwrap_or_else(|| "N/A".to_string());

            lines.push(format!(
                "{:<10}  {:>6}  {:>6}  {:>14}  {:>14}",
                offers_asin(item),
                item.status.status_code,
                offers,
                lowest,
                buy_box
            ));

            for error in &item.body.errors {
                lines.push(format!("  ! {}: {}", error.code, error.message));
            }
        }

        lines.push(String::new());
        lines.push(format!("Total: {} items", response.responses.len()));

        lines.join("\n")
    }

    fn table_catalog(&self, response: &CatalogItemsResponse) -> String {
        let mut lines = Vec::new();

        lines.push(format!("{:<10}  {:<20}  {}", "ASIN", "Brand", "Title"));
        lines.push(format!("{:-<10}  {:-<20}  {:-<TITLE_WIDTH$}", "", "", ""));

        for item in &response.items {
            let (brand, title) = catalog_labels(item);
            lines.push(format!(
                "{:<10}  {:<20}  {}",
                item.asin,
                truncate(&brand, 20),
                truncate(&title, TITLE_WIDTH)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} items", response.number_of_results));

        lines.join("\n")
    }

    fn table_fees(&self, estimates: &[FeesEstimateResponsePayload]) -> String {
        let mut lines = Vec::new();

        for estimate in estimates {
            let id = estimate
                .fees_estimate_identifier
                .as_ref()
                .and_then(|i| i.id_value.as_deref())
                .unwrap_or("?");
            let status = estimate.status.as_deref().unwrap_or("Unknown");

            lines.push(format!("{} ({})", id, status));

            if let Some(error) = &estimate.error {
                lines.push(format!("  Error: {} {}", error.code, error.message));
            }

            if let Some(fees) = &estimate.fees_estimate {
                match &fees.total_fees_estimate {
                    Some(total) => lines.push(format!("  Total fees: {}", total)),
                    None => lines.push("  Total fees: N/A".to_string()),
                }
                for detail in &fees.fee_detail_list {
                    push_fee_detail(&mut lines, detail, 2);
                }
            }

            lines.push(String::new());
        }

        lines.join("\n").trim_end().to_string()
    }

    fn table_restrictions(&self, asin: &str, list: &RestrictionList) -> String {
        if list.is_unrestricted() {
            return format!("{}: no restrictions, can be listed", asin);
        }

        let mut lines = vec![format!("{}: {} restriction(s)", asin, list.restrictions.len())];

        for restriction in &list.restrictions {
            let condition = restriction.condition_type.as_deref().unwrap_or("any condition");
            lines.push(format!("  {} ({})", restriction.marketplace_id, condition));

            for reason in &restriction.reasons {
                match &reason.reason_code {
                    Some(code) => lines.push(format!("    {}: {}", code, reason.message)),
                    None => lines.push(format!("    {}", reason.message)),
                }
                for link in &reason.links {
                    let title = link.title.as_deref().unwrap_or("Link");
                    lines.push(format!("      {} {} {}", title, link.verb, link.resource));
                }
            }
        }

        lines.join("\n")
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

fn offers_asin(item: &ItemOffersResponse) -> &str {
    item.body
        .payload
        .as_ref()
        .and_then(|p| p.asin.as_deref())
        .or(item.request.asin.as_deref())
        .unwrap_or("?")
}

fn catalog_labels(item: &CatalogItem) -> (String, String) {
    let summary = item.summaries.first();
    let brand = summary.and_then(|s| s.brand.clone()).unwrap_or_else(|| "N/A".to_string());
    let title = summary.and_then(|s| s.item_name.clone()).unwrap_or_else(|| "N/A".to_string());
    (brand, title)
}

fn push_fee_detail(lines: &mut Vec<String>, detail: &FeeDetail, indent: usize) {
    lines.push(format!("{:indent$}{:<28} {}", "", detail.fee_type, detail.final_fee));
    for included in &detail.included_fee_detail_list {
        push_fee_detail(lines, included, indent + 2);
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let head: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offers_response() -> BatchItemOffersResponse {
        serde_json::from_str(
            r#"{
                "responses": [{
                    "headers": {"x-amzn-RequestId": "r1"},
                    "status": {"statusCode": 200, "reasonPhrase": "OK"},
                    "body": {
                        "payload": {
                            "marketplaceId": "A13V1IB3VIYZZH",
                            "ASIN": "B07TTY5YS8",
                            "ItemCondition": "New",
                            "status": "Success",
                            "Identifier": {"MarketplaceId": "A13V1IB3VIYZZH", "ItemCondition": "New"},
                            "Summary": {
                                "TotalOfferCount": 3,
                                "LowestPrices": [
                                    {"condition": "new", "fulfillmentChannel": "Amazon",
                                     "ListingPrice": {"CurrencyCode": "EUR", "Amount": 21.5}},
                                    {"condition": "new", "fulfillmentChannel": "Merchant",
                                     "ListingPrice": {"CurrencyCode": "EUR", "Amount": 19.99}}
                                ],
                                "BuyBoxPrices": [
                                    {"condition": "New",
                                     "ListingPrice": {"CurrencyCode": "EUR", "Amount": 21.5}}
                                ]
                            },
                            "Offers": []
                        }
                    },
                    "request": {"MarketplaceId": "A13V1IB3VIYZZH", "ItemCondition": "New", "Asin": "B07TTY5YS8"}
                }]
            }"#,
        )
        .unwrap()
    }

    fn fees_estimates() -> Vec<FeesEstimateResponsePayload> {
        serde_json::from_str(
            r#"[{
                "Status": "Success",
                "FeesEstimateIdentifier": {"IdValue": "B07TTY5YS8"},
                "FeesEstimate": {
                    "TimeOfFeesEstimation": "2026-01-01T00:00:00Z",
                    "TotalFeesEstimate": {"CurrencyCode": "EUR", "Amount": 7.5},
                    "FeeDetailList": [{
                        "FeeType": "ReferralFee",
                        "FeeAmount": {"CurrencyCode": "EUR", "Amount": 4.5},
                        "FinalFee": {"CurrencyCode": "EUR", "Amount": 4.5},
                        "IncludedFeeDetailList": [{
                            "FeeType": "VariableClosingFee",
                            "FeeAmount": {"CurrencyCode": "EUR", "Amount": 3.0},
                            "FinalFee": {"CurrencyCode": "EUR", "Amount": 3.0}
                        }]
                    }]
                }
            }]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_token_table() {
        let token = AccessToken {
            access_token: "tok123".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            refresh_token: None,
        };
        let output = Formatter::new(OutputFormat::Table).format_token(&token);
        assert!(output.contains("tok123"));
        assert!(output.contains("3600s"));
        assert!(!output.contains("Refresh"));
    }

    #[test]
    fn test_token_json() {
        let token = AccessToken {
            access_token: "tok123".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            refresh_token: None,
        };
        let output = Formatter::new(OutputFormat::Json).format_token(&token);
        let parsed: AccessToken = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_offers_table() {
        let output = Formatter::new(OutputFormat::Table).format_offers(&offers_response());
        assert!(output.contains("ASIN"));
        assert!(output.contains("B07TTY5YS8"));
        assert!(output.contains("EUR 19.99"));
        assert!(output.contains("EUR 21.50"));
        assert!(output.contains("Total: 1 items"));
    }

    #[test]
    fn test_offers_empty() {
        let empty = BatchItemOffersResponse { responses: vec![] };
        assert_eq!(Formatter::new(OutputFormat::Table).format_offers(&empty), "No offers found.");
        assert!(Formatter::new(OutputFormat::Json).format_offers(&empty).contains("\"responses\""));
    }

    #[test]
    fn test_catalog_table() {
        let response: CatalogItemsResponse = serde_json::from_str(
            r#"{
                "numberOfResults": 1,
                "items": [{
                    "asin": "B07TTY5YS8",
                    "summaries": [{
                        "marketplaceId": "A13V1IB3VIYZZH",
                        "brand": "Acme",
                        "itemName": "A very long product title that certainly goes past the fifty character column"
                    }]
                }]
            }"#,
        )
        .unwrap();

        let output = Formatter::new(OutputFormat::Table).format_catalog(&response);
        assert!(output.contains("B07TTY5YS8"));
        assert!(output.contains("Acme"));
        assert!(output.contains("..."));
        assert!(output.contains("Total: 1 items"));
    }

    #[test]
    fn test_catalog_empty() {
        let response = CatalogItemsResponse {
            number_of_results: 0,
            pagination: None,
            refinements: None,
            items: vec![],
        };
        assert_eq!(Formatter::new(OutputFormat::Table).format_catalog(&response), "No items found.");
    }

    #[test]
    fn test_fees_table_nested() {
        let output = Formatter::new(OutputFormat::Table).format_fees(&fees_estimates());
        assert!(output.starts_with("B07TTY5YS8 (Success)"));
        assert!(output.contains("Total fees: EUR 7.50"));
        assert!(output.contains("  ReferralFee"));
        assert!(output.contains("    VariableClosingFee"));
    }

    #[test]
    fn test_fees_json_is_array() {
        let output = Formatter::new(OutputFormat::Json).format_fees(&fees_estimates());
        assert!(output.trim_start().starts_with('['));
    }

    #[test]
    fn test_restrictions_table() {
        let formatter = Formatter::new(OutputFormat::Table);

        let empty = RestrictionList::default();
        assert_eq!(
            formatter.format_restrictions("B07TTY5YS8", &empty),
            "B07TTY5YS8: no restrictions, can be listed"
        );

        let list: RestrictionList = serde_json::from_str(
            r#"{"restrictions":[{"marketplaceId":"A13V1IB3VIYZZH","reasons":[
                {"reasonCode":"APPROVAL_REQUIRED","message":"Approval needed",
                 "links":[{"resource":"https://sellercentral.amazon.fr/x","verb":"GET"}]}
            ]}]}"#,
        )
        .unwrap();
        let output = formatter.format_restrictions("B07TTY5YS8", &list);
        assert!(output.contains("1 restriction(s)"));
        assert!(output.contains("APPROVAL_REQUIRED: Approval needed"));
        assert!(output.contains("GET https://sellercentral.amazon.fr/x"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
        assert_eq!(truncate("éééééééééé", 5), "éé...");
    }
}
