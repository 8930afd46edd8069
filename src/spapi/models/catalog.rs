//! Catalog Items 2022-04-01 (`searchCatalogItems`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query parameters for a catalog lookup.
///
/// Each field is a caller-prepared, comma-separated list. Values are not
/// checked against Amazon's enums; invalid ones come back as a 4xx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItemsParams {
    pub marketplace_ids: String,
    /// e.g. `GTIN`, `EAN`, `UPC`, `ASIN`, `SKU`
    pub identifiers_type: String,
    pub identifiers: String,
    /// e.g. `identifiers,summaries,salesRanks,images,attributes`
    pub included_data: String,
}

impl CatalogItemsParams {
    pub fn new(
        marketplace_ids: impl Into<String>,
        identifiers_type: impl Into<String>,
        identifiers: impl Into<String>,
        included_data: impl Into<String>,
    ) -> Self {
        Self {
            marketplace_ids: marketplace_ids.into(),
            identifiers_type: identifiers_type.into(),
            identifiers: identifiers.into(),
            included_data: included_data.into(),
        }
    }

    /// Query pairs in the order Amazon documents them.
    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("marketplaceIds", self.marketplace_ids.as_str()),
            ("identifiersType", self.identifiers_type.as_str()),
            ("identifiers", self.identifiers.as_str()),
            ("includedData", self.included_data.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemsResponse {
    pub number_of_results: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinements: Option<Refinements>,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// Page tokens. Returned for keyword searches; not followed by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refinements {
    #[serde(default)]
    pub brands: Vec<BrandRefinement>,
    #[serde(default)]
    pub classifications: Vec<ClassificationRefinement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRefinement {
    pub number_of_results: i64,
    pub brand_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRefinement {
    pub number_of_results: i64,
    pub display_name: String,
    pub classification_id: String,
}

/// A catalog item. Which sections are filled depends on `includedData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub asin: String,
    /// Schema-less attributes; their shape varies by product type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<IdentifiersByMarketplace>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImagesByMarketplace>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sales_ranks: Vec<SalesRanksByMarketplace>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summaries: Vec<ItemSummary>,
}

impl CatalogItem {
    /// Returns the summary for a marketplace, if included.
    pub fn summary(&self, marketplace_id: &str) -> Option<&ItemSummary> {
        self.summaries.iter().find(|s| s.marketplace_id == marketplace_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifiersByMarketplace {
    pub marketplace_id: String,
    #[serde(default)]
    pub identifiers: Vec<ItemIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemIdentifier {
    pub identifier_type: String,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesByMarketplace {
    pub marketplace_id: String,
    #[serde(default)]
    pub images: Vec<ItemImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemImage {
    /// `MAIN`, `PT01`, ...
    pub variant: String,
    pub link: String,
    pub height: i32,
    pub width: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRanksByMarketplace {
    pub marketplace_id: String,
    #[serde(default)]
    pub classification_ranks: Vec<ClassificationRank>,
    #[serde(default)]
    pub display_group_ranks: Vec<DisplayGroupRank>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRank {
    pub classification_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub rank: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayGroupRank {
    pub website_display_group: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub rank: i64,
}

/// Per-marketplace summary of an item. Every field is optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub marketplace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adult_product: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autographed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_classification: Option<BrowseClassification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_classification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memorabilia: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_in_eligible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_display_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_display_group_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseClassification {
    pub display_name: String,
    pub classification_id: String,
}
