//! Selling Partner API client, data models and marketplace tables.

pub mod client;
pub mod error;
pub mod models;
pub mod regions;

pub use client::{cancellable, ClientOptions, SellingPartner, SpApiClient, TOKEN_URL};
pub use error::{Error, Result};
pub use models::{AccessToken, Credentials, Money};
pub use regions::{Marketplace, Region};
