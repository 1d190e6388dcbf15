//! Adapter error types.
//!
//! Every failure the adapter can produce is a variant here; nothing is logged
//! and swallowed. The completion boundary always returns a `Result` so hosts
//! can distinguish success from failure.

use thiserror::Error;

/// Errors produced by the adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The request's turn sequence cannot be sent as-is. Fatal per request,
    /// never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A non-2xx HTTP response or a transport failure.
    #[error("request failed: {message}")]
    RequestFailed {
        /// HTTP status code, when the failure came from a response.
        status: Option<u16>,
        /// The HTTP status text, optionally with the API's own message.
        message: String,
    },

    /// An empty or blank credential. Fails before any network call.
    #[error("credential missing: {0}")]
    CredentialMissing(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Out-of-range sampling parameter or otherwise bad adapter config.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdapterError {
    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a request-failed error from an HTTP status.
    pub fn request_failed(status: u16, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create a request-failed error for a transport failure (no status).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: None,
            message: message.into(),
        }
    }

    /// Create a credential-missing error.
    pub fn credential_missing(message: impl Into<String>) -> Self {
        Self::CredentialMissing(message.into())
    }

    /// Create an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// The stable kind tag hosts use to classify failures.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid-input",
            Self::RequestFailed { .. } => "request-failed",
            Self::CredentialMissing(_) => "credential-missing",
            Self::InvalidResponse(_) => "invalid-response",
            Self::Configuration(_) => "configuration",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }

    /// The HTTP status code, when this failure carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
