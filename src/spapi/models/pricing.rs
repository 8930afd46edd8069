//! Product Pricing v0 batch item offers (`getItemOffersBatch`).
//!
//! Field casing follows Amazon's schema verbatim, which mixes PascalCase
//! and camelCase even inside a single object.

use super::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of a batch item offers call: `{"requests":[...]}`.
///
/// Size limits are not checked here; an oversized batch is rejected upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchItemOffersRequest {
    pub requests: Vec<ItemOffersRequest>,
}

impl BatchItemOffersRequest {
    /// Creates a batch from individual item requests.
    pub fn new(requests: Vec<ItemOffersRequest>) -> Self {
        Self { requests }
    }
}

/// One sub-request of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOffersRequest {
    #[serde(rename = "MarketplaceId")]
    pub marketplace_id: String,
    #[serde(rename = "ItemCondition")]
    pub item_condition: String,
    #[serde(rename = "CustomerType")]
    pub customer_type: String,
    /// Resource path, e.g. `/products/pricing/v0/items/B07TTY5YS8/offers`.
    pub uri: String,
    pub method: String,
}

impl ItemOffersRequest {
    /// Builds a `GET` sub-request for the offers of one ASIN.
    pub fn for_asin(
        asin: &str,
        marketplace_id: impl Into<String>,
        item_condition: impl Into<String>,
        customer_type: impl Into<String>,
    ) -> Self {
        Self {
            marketplace_id: marketplace_id.into(),
            item_condition: item_condition.into(),
            customer_type: customer_type.into(),
            uri: format!("/products/pricing/v0/items/{}/offers", asin),
            method: "GET".to_string(),
        }
    }
}

/// Response of a batch call: one entry per sub-request, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItemOffersResponse {
    #[serde(default)]
    pub responses: Vec<ItemOffersResponse>,
}

/// Result of one sub-request. Its own `status` must be checked: a batch
/// returning 200 can still contain failed items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOffersResponse {
    #[serde(default)]
    pub headers: ResponseHeaders,
    pub status: StatusLine,
    pub body: OffersBody,
    pub request: ItemOffersRequestEcho,
}

impl ItemOffersResponse {
    /// True when the sub-request itself returned a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status.status_code)
    }
}

/// Per-item HTTP headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseHeaders {
    #[serde(rename = "x-amzn-RequestId", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

/// Per-item HTTP status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusLine {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_phrase: Option<String>,
}

/// Per-item body: a payload on success, errors otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffersBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<OffersPayload>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
}

/// Error entry of a failed sub-request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Offers for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffersPayload {
    #[serde(rename = "marketplaceId")]
    pub marketplace_id: String,
    #[serde(rename = "ASIN", default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(rename = "SKU", default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(rename = "ItemCondition")]
    pub item_condition: String,
    pub status: String,
    #[serde(rename = "Identifier")]
    pub identifier: ItemIdentifier,
    /// `None` when Amazon has no buy-box data for the item.
    #[serde(rename = "Summary", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(rename = "Offers", default)]
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIdentifier {
    #[serde(rename = "MarketplaceId")]
    pub marketplace_id: String,
    #[serde(rename = "ASIN", default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(rename = "SellerSKU", default, skip_serializing_if = "Option::is_none")]
    pub seller_sku: Option<String>,
    #[serde(rename = "ItemCondition")]
    pub item_condition: String,
}

/// Buy box and competitive summary for an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Summary {
    pub total_offer_count: i64,
    #[serde(default)]
    pub number_of_offers: Vec<OfferCount>,
    #[serde(default)]
    pub lowest_prices: Vec<LowestPrice>,
    #[serde(default)]
    pub buy_box_prices: Vec<BuyBoxPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_price: Option<Money>,
    #[serde(default)]
    pub buy_box_eligible_offers: Vec<OfferCount>,
    #[serde(default)]
    pub sales_rankings: Vec<SalesRank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers_available_time: Option<String>,
}

/// Offer count for a condition and fulfillment channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "fulfillmentChannel", default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_channel: Option<String>,
    #[serde(rename = "OfferCount")]
    pub offer_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowestPrice {
    pub condition: String,
    #[serde(rename = "fulfillmentChannel")]
    pub fulfillment_channel: String,
    #[serde(rename = "LandedPrice", default, skip_serializing_if = "Option::is_none")]
    pub landed_price: Option<Money>,
    #[serde(rename = "ListingPrice")]
    pub listing_price: Money,
    #[serde(rename = "Shipping", default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyBoxPrice {
    pub condition: String,
    #[serde(rename = "LandedPrice", default, skip_serializing_if = "Option::is_none")]
    pub landed_price: Option<Money>,
    #[serde(rename = "ListingPrice")]
    pub listing_price: Money,
    #[serde(rename = "Shipping", default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Money>,
    #[serde(rename = "sellerId", default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesRank {
    pub product_category_id: String,
    pub rank: i64,
}

/// A single seller offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_offer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    pub sub_condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_feedback_rating: Option<SellerFeedbackRating>,
    pub shipping_time: ShippingTime,
    pub listing_price: Money,
    pub shipping: Money,
    /// `None` when Amazon omits the origin, not an empty country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ships_from: Option<ShipsFrom>,
    pub is_fulfilled_by_amazon: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prime_information: Option<PrimeInformation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_buy_box_winner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured_merchant: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SellerFeedbackRating {
    /// Percentage of positive ratings over the last 12 months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_positive_feedback_rating: Option<f64>,
    pub feedback_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipsFrom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrimeInformation {
    pub is_prime: bool,
    pub is_national_prime: bool,
}

/// The sub-request as Amazon echoes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOffersRequestEcho {
    #[serde(rename = "MarketplaceId")]
    pub marketplace_id: String,
    #[serde(rename = "CustomerType", default, skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,
    #[serde(rename = "ItemCondition")]
    pub item_condition: String,
    #[serde(rename = "Asin", default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}
