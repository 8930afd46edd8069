//! Listings Restrictions 2021-08-01 (`getListingsRestrictions`).

use serde::{Deserialize, Serialize};

/// Query parameters for a restrictions lookup. All four are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsRestrictionsParams {
    pub asin: String,
    /// e.g. `new_new`, `used_like_new`
    pub condition_type: String,
    pub seller_id: String,
    /// Comma-separated marketplace ids.
    pub marketplace_ids: String,
}

impl ListingsRestrictionsParams {
    pub fn new(
        asin: impl Into<String>,
        condition_type: impl Into<String>,
        seller_id: impl Into<String>,
        marketplace_ids: impl Into<String>,
    ) -> Self {
        Self {
            asin: asin.into(),
            condition_type: condition_type.into(),
            seller_id: seller_id.into(),
            marketplace_ids: marketplace_ids.into(),
        }
    }

    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("asin", self.asin.as_str()),
            ("conditionType", self.condition_type.as_str()),
            ("sellerId", self.seller_id.as_str()),
            ("marketplaceIds", self.marketplace_ids.as_str()),
        ]
    }
}

/// Restrictions for a listing. An empty list means the seller may list the
/// item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionList {
    pub restrictions: Vec<Restriction>,
}

impl RestrictionList {
    pub fn is_unrestricted(&self) -> bool {
        self.restrictions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    pub marketplace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
    #[serde(default)]
    pub reasons: Vec<Reason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    /// `APPROVAL_REQUIRED`, `ASIN_NOT_FOUND` or `NOT_ELIGIBLE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Hyperlink to a page where the seller can act on a restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub resource: String,
    pub verb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Media type of the linked resource.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        let params =
            ListingsRestrictionsParams::new("B07TTY5YS8", "new_new", "AJI6WKJB10KAL", "A13V1IB3VIYZZH");
        assert_eq!(
            params.query_pairs(),
            [
                ("asin", "B07TTY5YS8"),
                ("conditionType", "new_new"),
                ("sellerId", "AJI6WKJB10KAL"),
                ("marketplaceIds", "A13V1IB3VIYZZH"),
            ]
        );
    }

    #[test]
    fn test_empty_restrictions() {
        let list: RestrictionList = serde_json::from_str(r#"{"restrictions":[]}"#).unwrap();
        assert!(list.is_unrestricted());
    }

    #[test]
    fn test_decode_reason_with_links() {
        let list: RestrictionList = serde_json::from_str(
            r#"{
                "restrictions": [{
                    "marketplaceId": "A13V1IB3VIYZZH",
                    "conditionType": "new_new",
                    "reasons": [{
                        "reasonCode": "APPROVAL_REQUIRED",
                        "message": "You need approval to list in this category.",
                        "links": [{
                            "resource": "https://sellercentral.amazon.fr/hz/approvalrequest",
                            "verb": "GET",
                            "title": "Request Approval via Seller Central.",
                            "type": "text/html"
                        }]
                    }]
                }]
            }"#,
        )
        .unwrap();

        assert!(!list.is_unrestricted());
        let restriction = &list.restrictions[0];
        assert_eq!(restriction.marketplace_id, "A13V1IB3VIYZZH");
        assert_eq!(restriction.condition_type.as_deref(), Some("new_new"));

        let reason = &restriction.reasons[0];
        assert_eq!(reason.reason_code.as_deref(), Some("APPROVAL_REQUIRED"));
        assert_eq!(reason.links[0].verb, "GET");
        assert_eq!(reason.links[0].content_type.as_deref(), Some("text/html"));
    }

    #[test]
    fn test_reason_without_code_or_links() {
        let reason: Reason = serde_json::from_str(r#"{"message":"Not eligible"}"#).unwrap();
        assert!(reason.reason_code.is_none());
        assert!(reason.links.is_empty());
    }
}
