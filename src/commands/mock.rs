//! In-memory `SellingPartner` used by the command tests.

use crate::spapi::models::{
    AccessToken, BatchItemOffersRequest, BatchItemOffersResponse, CatalogItemsParams,
    CatalogItemsResponse, FeesEstimateRequestPayload, FeesEstimateResponsePayload,
    ListingsRestrictionsParams, RestrictionList,
};
use crate::spapi::{Error, Result, SellingPartner};
use async_trait::async_trait;
use std::sync::Mutex;

/// Returns canned responses and records what each call received.
#[derive(Default)]
pub(crate) struct MockSellingPartner {
    pub reject_token: bool,
    pub offers: Option<BatchItemOffersResponse>,
    pub catalog: Option<CatalogItemsResponse>,
    pub fees: Vec<FeesEstimateResponsePayload>,
    pub restrictions: RestrictionList,
    pub offer_batches: Mutex<Vec<BatchItemOffersRequest>>,
    pub catalog_params: Mutex<Vec<CatalogItemsParams>>,
    pub fee_batches: Mutex<Vec<Vec<FeesEstimateRequestPayload>>>,
    pub restriction_params: Mutex<Vec<ListingsRestrictionsParams>>,
    pub tokens_seen: Mutex<Vec<String>>,
}

impl MockSellingPartner {
    pub fn new() -> Self {
        Self::default()
    }

    fn seen(&self, access_token: &str) {
        self.tokens_seen.lock().unwrap().push(access_token.to_string());
    }
}

#[async_trait]
impl SellingPartner for MockSellingPartner {
    async fn access_token(&self) -> Result<AccessToken> {
        if self.reject_token {
            return Err(Error::Upstream {
                status: 400,
                body: r#"{"error":"invalid_grant"}"#.to_string(),
            });
        }
        Ok(AccessToken {
            access_token: "tok123".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            refresh_token: None,
        })
    }

    async fn batch_item_offers(
        &self,
        access_token: &str,
        request: &BatchItemOffersRequest,
    ) -> Result<BatchItemOffersResponse> {
        self.seen(access_token);
        self.offer_batches.lock().unwrap().push(request.clone());
        Ok(self.offers.clone().unwrap_or(BatchItemOffersResponse { responses: vec![] }))
    }

    async fn catalog_items(
        &self,
        access_token: &str,
        params: &CatalogItemsParams,
    ) -> Result<CatalogItemsResponse> {
        self.seen(access_token);
        self.catalog_params.lock().unwrap().push(params.clone());
        Ok(self.catalog.clone().unwrap_or(CatalogItemsResponse {
            number_of_results: 0,
            pagination: None,
            refinements: None,
            items: vec![],
        }))
    }

    async fn fees_estimate(
        &self,
        access_token: &str,
        requests: &[FeesEstimateRequestPayload],
    ) -> Result<Vec<FeesEstimateResponsePayload>> {
        self.seen(access_token);
        self.fee_batches.lock().unwrap().push(requests.to_vec());
        Ok(self.fees.clone())
    }

    async fn listings_restrictions(
        &self,
        access_token: &str,
        params: &ListingsRestrictionsParams,
    ) -> Result<RestrictionList> {
        self.seen(access_token);
        self.restriction_params.lock().unwrap().push(params.clone());
        Ok(self.restrictions.clone())
    }
}
