//! Error taxonomy shared by every SP-API operation.

use thiserror::Error;

/// Result alias for SP-API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`SpApiClient`](crate::spapi::SpApiClient) operations.
///
/// Nothing here is retried internally. Partial failures inside a batch
/// (pricing, fees) are not errors: they arrive in-band on each element.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, TLS or IO failure. The response body is never inspected.
    #[error("transport error: {0}")]
    Transport(#[source] wreq::Error),

    /// The configured request timeout elapsed before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// The caller's cancellation signal fired before the request completed.
    #[error("request cancelled")]
    Cancelled,

    /// A response arrived with a non-2xx status. `body` is the raw text
    /// Amazon returned; its error schema is not parsed.
    #[error("SP-API returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// A 2xx response whose body does not match the expected schema.
    #[error("failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The request payload could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The client could not be built from the supplied options.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Maps a transport failure, folding timeouts into [`Error::Timeout`].
    pub(crate) fn from_transport(err: wreq::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }

    /// Returns the HTTP status for upstream errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body carried by upstream and decode errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Upstream { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True when Amazon answered with a non-2xx status.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}
