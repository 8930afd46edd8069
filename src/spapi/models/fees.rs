//! Product Fees v0 (`getMyFeesEstimates`).
//!
//! Unlike the other endpoints, both the request and the response bodies are
//! bare JSON arrays.

use super::money::Money;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of identifier a fee estimate is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdType {
    #[serde(rename = "ASIN")]
    Asin,
    #[serde(rename = "SellerSKU")]
    SellerSku,
}

impl std::str::FromStr for IdType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asin" => Ok(IdType::Asin),
            "sku" | "sellersku" => Ok(IdType::SellerSku),
            _ => Err(format!("Unknown id type: {}. Use: asin, sku", s)),
        }
    }
}

/// Fulfillment program used when estimating FBA fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionalFulfillmentProgram {
    FbaCore,
    FbaSnl,
    FbaEfn,
}

/// One element of the request array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeesEstimateRequestPayload {
    #[serde(rename = "FeesEstimateRequest")]
    pub fees_estimate_request: FeesEstimateRequest,
    #[serde(rename = "IdType")]
    pub id_type: IdType,
    #[serde(rename = "IdValue")]
    pub id_value: String,
}

impl FeesEstimateRequestPayload {
    /// Builds an estimate request for a single item. `Identifier` echoes
    /// the id value so results can be matched back to requests.
    pub fn new(
        id_type: IdType,
        id_value: impl Into<String>,
        marketplace_id: impl Into<String>,
        is_amazon_fulfilled: bool,
        price: PriceToEstimateFees,
    ) -> Self {
        let id_value = id_value.into();
        Self {
            fees_estimate_request: FeesEstimateRequest {
                marketplace_id: marketplace_id.into(),
                is_amazon_fulfilled: Some(is_amazon_fulfilled),
                price_to_estimate_fees: price,
                identifier: id_value.clone(),
                optional_fulfillment_program: None,
            },
            id_type,
            id_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimateRequest {
    pub marketplace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_amazon_fulfilled: Option<bool>,
    pub price_to_estimate_fees: PriceToEstimateFees,
    /// Caller-chosen id echoed back as `SellerInputIdentifier`.
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_fulfillment_program: Option<OptionalFulfillmentProgram>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceToEstimateFees {
    pub listing_price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Points>,
}

impl PriceToEstimateFees {
    pub fn new(listing_price: Money) -> Self {
        Self { listing_price, shipping: None, points: None }
    }

    pub fn with_shipping(mut self, shipping: Money) -> Self {
        self.shipping = Some(shipping);
        self
    }
}

/// Amazon points offered with the item (JP marketplace only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Points {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_monetary_value: Option<Money>,
}

/// One element of the response array.
///
/// A non-`Success` status means the estimate is absent and `error` explains
/// why; it is not a transport or upstream failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimateResponsePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees_estimate_identifier: Option<FeesEstimateIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees_estimate: Option<FeesEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FeesEstimateError>,
}

impl FeesEstimateResponsePayload {
    /// True when Amazon produced an estimate for this item.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("Success")
    }
}

/// Echo of the request an estimate belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimateIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_amazon_fulfilled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_to_estimate_fees: Option<PriceToEstimateFees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_input_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_fulfillment_program: Option<OptionalFulfillmentProgram>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimate {
    pub time_of_fees_estimation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_fees_estimate: Option<Money>,
    #[serde(default)]
    pub fee_detail_list: Vec<FeeDetail>,
}

/// A fee and the fees it is composed of. The nesting is a finite tree of
/// arbitrary depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeeDetail {
    pub fee_type: String,
    pub fee_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_promotion: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Money>,
    pub final_fee: Money,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_fee_detail_list: Vec<FeeDetail>,
}

impl FeeDetail {
    /// Depth of the detail tree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.included_fee_detail_list.iter().map(FeeDetail::depth).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimateError {
    #[serde(rename = "Type")]
    pub error_type: String,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub detail: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn eur(amount: Decimal) -> Money {
        Money::new(amount, "EUR")
    }

    #[test]
    fn test_request_is_pascal_case() {
        let payload = FeesEstimateRequestPayload::new(
            IdType::Asin,
            "B07TTY5YS8",
            "A13V1IB3VIYZZH",
            true,
            PriceToEstimateFees::new(eur(Decimal::new(2999, 2))).with_shipping(eur(Decimal::ZERO)),
        );
        let value = serde_json::to_value(vec![payload]).unwrap();
        assert_eq!(
            value,
            json!([{
                "FeesEstimateRequest": {
                    "MarketplaceId": "A13V1IB3VIYZZH",
                    "IsAmazonFulfilled": true,
                    "PriceToEstimateFees": {
                        "ListingPrice": {"CurrencyCode": "EUR", "Amount": 29.99},
                        "Shipping": {"CurrencyCode": "EUR", "Amount": 0}
                    },
                    "Identifier": "B07TTY5YS8"
                },
                "IdType": "ASIN",
                "IdValue": "B07TTY5YS8"
            }])
        );
    }

    #[test]
    fn test_id_type_wire_names() {
        assert_eq!(serde_json::to_string(&IdType::SellerSku).unwrap(), "\"SellerSKU\"");
        assert_eq!("sku".parse::<IdType>().unwrap(), IdType::SellerSku);
        assert_eq!("ASIN".parse::<IdType>().unwrap(), IdType::Asin);
        assert!("upc".parse::<IdType>().is_err());
    }

    #[test]
    fn test_fulfillment_program_wire_names() {
        assert_eq!(
            serde_json::to_string(&OptionalFulfillmentProgram::FbaEfn).unwrap(),
            "\"FBA_EFN\""
        );
    }

    #[test]
    fn test_failed_item_has_no_estimate() {
        let result: FeesEstimateResponsePayload = serde_json::from_value(json!({
            "Status": "ClientError",
            "FeesEstimateIdentifier": {"MarketplaceId": "A13V1IB3VIYZZH", "IdType": "ASIN", "IdValue": "BAD"},
            "FeesEstimate": null,
            "Error": {"Type": "Sender", "Code": "InvalidParameterValue", "Message": "Unknown ASIN", "Detail": []}
        }))
        .unwrap();
        assert!(!result.is_success());
        assert!(result.fees_estimate.is_none());
        assert_eq!(result.error.unwrap().code, "InvalidParameterValue");
    }

    #[test]
    fn test_fee_detail_depth() {
        let leaf = FeeDetail {
            fee_type: "Leaf".to_string(),
            fee_amount: eur(Decimal::ONE),
            fee_promotion: None,
            tax_amount: None,
            final_fee: eur(Decimal::ONE),
            included_fee_detail_list: Vec::new(),
        };
        let middle = FeeDetail { included_fee_detail_list: vec![leaf.clone()], ..leaf.clone() };
        let root = FeeDetail {
            included_fee_detail_list: vec![leaf.clone(), middle],
            ..leaf.clone()
        };
        assert_eq!(leaf.depth(), 1);
        assert_eq!(root.depth(), 3);
    }
}
