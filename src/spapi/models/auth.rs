//! Login with Amazon credentials and access tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Long-lived application credentials. Written once, never mutated.
///
/// The values are only ever read to build the token request form;
/// `Debug` redacts all of them.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl Credentials {
    /// Creates credentials from an LWA client id, client secret and refresh token.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Encodes the `refresh_token` grant as an `application/x-www-form-urlencoded` body.
    pub(crate) fn refresh_grant_form(&self) -> String {
        [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.refresh_token.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &"<redacted>")
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Short-lived access token returned by the LWA token endpoint.
///
/// Not cached by the client; callers track `expires_in` themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
    /// Present when Amazon rotates the refresh token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}
