//! Request and response types mirroring Amazon's JSON schemas.

pub mod auth;
pub mod catalog;
pub mod fees;
pub mod money;
pub mod pricing;
pub mod restrictions;

pub use auth::{AccessToken, Credentials};
pub use catalog::{CatalogItem, CatalogItemsParams, CatalogItemsResponse};
pub use fees::{
    FeeDetail, FeesEstimate, FeesEstimateRequestPayload, FeesEstimateResponsePayload, IdType,
    PriceToEstimateFees,
};
pub use money::Money;
pub use pricing::{BatchItemOffersRequest, BatchItemOffersResponse, ItemOffersRequest};
pub use restrictions::{ListingsRestrictionsParams, Restriction, RestrictionList};
