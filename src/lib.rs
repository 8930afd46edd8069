//! amz-spapi - Typed async client for Amazon's Selling Partner API
//!
//! Covers Login with Amazon token exchange, batch item offers, catalog
//! lookup, fee estimates and listings restrictions, plus a small CLI.

pub mod commands;
pub mod config;
pub mod format;
pub mod spapi;

pub use config::Config;
pub use spapi::{
    cancellable, AccessToken, ClientOptions, Credentials, Error, Marketplace, Money, Region,
    SellingPartner, SpApiClient,
};
