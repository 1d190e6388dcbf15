//! Credential resolution and session-key exchange.
//!
//! Two credential shapes are accepted: a long-lived API key used directly as
//! a bearer token, and a captured browser session `authorization` header
//! exchanged for a short-lived API key via an undocumented RPC. The exchange
//! runs once per outgoing chat call; the minted key's validity window is
//! unconfirmed, so nothing is cached.

use cohere_bridge_core::{AdapterError, AdapterResult, Credential};
use reqwest::Client;
use tracing::{debug, warn};

use crate::types::RawKeyResponse;

/// The RPC that mints a default API key for a browser session.
pub const SESSION_KEY_EXCHANGE_URL: &str =
    "https://production.api.os.cohere.com/rpc/BlobheartAPI/GetOrCreateDefaultAPIKey";

/// Exchanges session tokens for short-lived API keys and resolves
/// credentials to bearer keys.
#[derive(Debug, Clone)]
pub struct SessionKeyExchanger {
    client: Client,
    endpoint: String,
}

impl SessionKeyExchanger {
    /// Create an exchanger on the production endpoint.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            client,
            endpoint: SESSION_KEY_EXCHANGE_URL.to_string(),
        }
    }

    /// Override the exchange endpoint. Used by tests.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Resolve a credential to the bearer key used on the chat call.
    ///
    /// API keys pass through; session tokens are exchanged. A blank secret
    /// fails with a credential-missing error before any network call.
    pub async fn resolve(&self, credential: &Credential) -> AdapterResult<String> {
        if credential.is_blank() {
            return Err(AdapterError::credential_missing(match credential {
                Credential::ApiKey(_) => "API key is empty",
                Credential::SessionToken(_) => "session authorization is empty",
            }));
        }
        match credential {
            Credential::ApiKey(key) => Ok(key.clone()),
            Credential::SessionToken(token) => self.exchange(token).await,
        }
    }

    /// Exchange a raw session `authorization` header for an API key.
    pub async fn exchange(&self, session_token: &str) -> AdapterResult<String> {
        if session_token.trim().is_empty() {
            return Err(AdapterError::credential_missing(
                "session authorization is empty",
            ));
        }

        debug!("exchanging session token for API key");
        let response = self
            .client
            .post(&self.endpoint)
            .header("authorization", session_token)
            .header("content-type", "application/json")
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| AdapterError::transport(format!("session key exchange failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            warn!(status = status.as_u16(), "session key exchange rejected");
            return Err(AdapterError::request_failed(
                status.as_u16(),
                format!("session key exchange failed: {reason}"),
            ));
        }

        let body: RawKeyResponse = response
            .json()
            .await
            .map_err(|e| AdapterError::invalid_response(e.to_string()))?;
        Ok(body.raw_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_fail_fast() {
        let exchanger = SessionKeyExchanger::new(Client::new());

        let err = tokio_test::block_on(
            exchanger.resolve(&Credential::ApiKey(String::new())),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "credential-missing");

        let err = tokio_test::block_on(
            exchanger.resolve(&Credential::SessionToken("  ".into())),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "credential-missing");
    }

    #[test]
    fn test_api_key_passes_through() {
        let exchanger = SessionKeyExchanger::new(Client::new());
        let key = tokio_test::block_on(
            exchanger.resolve(&Credential::ApiKey("co-key".into())),
        )
        .unwrap();
        assert_eq!(key, "co-key");
    }
}
