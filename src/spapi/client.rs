//! HTTP client for the Selling Partner API.

use crate::spapi::error::{Error, Result};
use crate::spapi::models::{
    AccessToken, BatchItemOffersRequest, BatchItemOffersResponse, CatalogItemsParams,
    CatalogItemsResponse, Credentials, FeesEstimateRequestPayload, FeesEstimateResponsePayload,
    ListingsRestrictionsParams, RestrictionList,
};
use crate::spapi::regions::Region;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::{Client, RequestBuilder};

/// Login with Amazon token endpoint.
pub const TOKEN_URL: &str = "https://api.amazon.com/auth/o2/token";

const ACCESS_TOKEN_HEADER: &str = "x-amz-access-token";

const ITEM_OFFERS_BATCH_PATH: &str = "/batches/products/pricing/v0/itemOffers";
const CATALOG_ITEMS_PATH: &str = "/catalog/2022-04-01/items";
const FEES_ESTIMATE_PATH: &str = "/products/fees/v0/feesEstimate";
const LISTINGS_RESTRICTIONS_PATH: &str = "/listings/2021-08-01/restrictions";

/// Operations exposed by the client - enables mocking for tests.
///
/// Every call except [`access_token`](SellingPartner::access_token) needs a
/// token obtained from it. Tokens are not cached or refreshed.
#[async_trait]
pub trait SellingPartner: Send + Sync {
    /// Exchanges the stored refresh token for an access token.
    async fn access_token(&self) -> Result<AccessToken>;

    /// Fetches offers for a batch of items in one call.
    async fn batch_item_offers(
        &self,
        access_token: &str,
        request: &BatchItemOffersRequest,
    ) -> Result<BatchItemOffersResponse>;

    /// Looks up catalog items by identifier.
    async fn catalog_items(
        &self,
        access_token: &str,
        params: &CatalogItemsParams,
    ) -> Result<CatalogItemsResponse>;

    /// Estimates seller fees for a list of items.
    async fn fees_estimate(
        &self,
        access_token: &str,
        requests: &[FeesEstimateRequestPayload],
    ) -> Result<Vec<FeesEstimateResponsePayload>>;

    /// Returns the listing restrictions that apply to an ASIN for a seller.
    async fn listings_restrictions(
        &self,
        access_token: &str,
        params: &ListingsRestrictionsParams,
    ) -> Result<RestrictionList>;
}

/// Connection options for [`SpApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// SP-API base URL, without a trailing path.
    pub endpoint: String,
    /// LWA token endpoint.
    pub auth_url: String,
    /// Value of the `user-agent` header sent on SP-API calls.
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Proxy URL (e.g., socks5://host:port)
    pub proxy: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: Region::default().endpoint().to_string(),
            auth_url: TOKEN_URL.to_string(),
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            proxy: None,
        }
    }
}

impl ClientOptions {
    /// Targets the production endpoint of a region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.endpoint = region.endpoint().to_string();
        self
    }

    /// Targets a custom SP-API base URL (sandbox, mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

/// Default `user-agent` for SP-API calls.
pub fn default_user_agent() -> String {
    format!("amz-spapi/{}", env!("CARGO_PKG_VERSION"))
}

/// SP-API client handle.
///
/// Holds credentials and a pooled connection; nothing on it changes after
/// construction, so one handle can serve concurrent calls from many tasks.
pub struct SpApiClient {
    http: Client,
    credentials: Credentials,
    endpoint: String,
    auth_url: String,
    user_agent: String,
}

impl SpApiClient {
    /// Creates a client for the default (EU) endpoint.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_options(credentials, ClientOptions::default())
    }

    /// Creates a client with explicit connection options.
    pub fn with_options(credentials: Credentials, options: ClientOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout);

        if let Some(proxy_url) = &options.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url.as_str())
                .map_err(|e| Error::InvalidConfig(format!("invalid proxy {}: {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let http = builder.build().map_err(|e| Error::InvalidConfig(e.to_string()))?;

        Ok(Self {
            http,
            credentials,
            endpoint: options.endpoint.trim_end_matches('/').to_string(),
            auth_url: options.auth_url,
            user_agent: options.user_agent,
        })
    }

    /// Returns the SP-API base URL in use.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the LWA token URL in use.
    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Starts an SP-API request carrying the access token and user agent.
    fn api_request(&self, request: RequestBuilder, access_token: &str) -> RequestBuilder {
        request
            .header(ACCESS_TOKEN_HEADER, access_token)
            .header("user-agent", self.user_agent.as_str())
    }

    fn get(&self, path: &str, query: &[(&str, &str)], access_token: &str) -> RequestBuilder {
        let url = with_query(&self.url(path), query);
        debug!("GET {}", url);
        self.api_request(self.http.get(url), access_token)
    }

    fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        access_token: &str,
    ) -> Result<RequestBuilder> {
        let body = serde_json::to_vec(body).map_err(Error::Encode)?;
        debug!("POST {} ({} bytes)", path, body.len());
        Ok(self
            .api_request(self.http.post(self.url(path)), access_token)
            .header("content-type", "application/json")
            .body(body))
    }

    /// Sends a request and decodes a 2xx JSON body.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<T> {
        let response = request.send().await.map_err(Error::from_transport)?;

        let status = response.status();
        debug!("{} response status: {}", operation, status);

        let body = response.text().await.map_err(Error::from_transport)?;

        if !status.is_success() {
            warn!("{} failed with status {}", operation, status);
            return Err(Error::Upstream { status: status.as_u16(), body });
        }

        serde_json::from_str(&body).map_err(|source| Error::Decode { source, body })
    }
}

#[async_trait]
impl SellingPartner for SpApiClient {
    async fn access_token(&self) -> Result<AccessToken> {
        info!("Requesting access token");

        let request = self
            .http
            .post(self.auth_url.as_str())
            .header("content-type", "application/x-www-form-urlencoded")
            .body(self.credentials.refresh_grant_form());

        self.execute(request, "access_token").await
    }

    async fn batch_item_offers(
        &self,
        access_token: &str,
        request: &BatchItemOffersRequest,
    ) -> Result<BatchItemOffersResponse> {
        info!("Fetching item offers for {} items", request.requests.len());

        let request = self.post_json(ITEM_OFFERS_BATCH_PATH, request, access_token)?;
        self.execute(request, "batch_item_offers").await
    }

    async fn catalog_items(
        &self,
        access_token: &str,
        params: &CatalogItemsParams,
    ) -> Result<CatalogItemsResponse> {
        info!("Searching catalog: {} {}", params.identifiers_type, params.identifiers);

        let request = self.get(CATALOG_ITEMS_PATH, &params.query_pairs(), access_token);
        self.execute(request, "catalog_items").await
    }

    async fn fees_estimate(
        &self,
        access_token: &str,
        requests: &[FeesEstimateRequestPayload],
    ) -> Result<Vec<FeesEstimateResponsePayload>> {
        info!("Estimating fees for {} items", requests.len());

        let request = self.post_json(FEES_ESTIMATE_PATH, requests, access_token)?;
        self.execute(request, "fees_estimate").await
    }

    async fn listings_restrictions(
        &self,
        access_token: &str,
        params: &ListingsRestrictionsParams,
    ) -> Result<RestrictionList> {
        info!("Fetching listing restrictions for {}", params.asin);

        let request = self.get(LISTINGS_RESTRICTIONS_PATH, &params.query_pairs(), access_token);
        self.execute(request, "listings_restrictions").await
    }
}

/// Races an operation against a cancellation signal.
///
/// Returns [`Error::Cancelled`] if `signal` completes first; the in-flight
/// request is dropped and its connection released.
pub async fn cancellable<T, S, F>(signal: S, operation: F) -> Result<T>
where
    S: Future<Output = ()>,
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = signal => {
            debug!("Operation cancelled by caller");
            Err(Error::Cancelled)
        }
        result = operation => result,
    }
}

fn with_query(url: &str, query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        return url.to_string();
    }

    let encoded = query
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", url, encoded)
}
