//! Monetary amounts shared by the pricing and fees APIs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency amount as used by the pricing and fees APIs.
///
/// Amazon sends `Amount` as a JSON number. Its digits are read straight
/// into a [`Decimal`] and written back unchanged, never through an `f64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(rename = "CurrencyCode")]
    pub currency_code: String,
    #[serde(rename = "Amount", with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl Money {
    /// Creates an amount in the given currency.
    pub fn new(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self { currency_code: currency_code.into(), amount }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency_code, self.amount)
    }
}
