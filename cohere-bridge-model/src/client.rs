//! The Cohere chat client and the host-facing registration contract.
//!
//! One client is registered per credential. A chat call validates the turn
//! sequence, normalizes it, resolves the credential to a bearer key, issues
//! a single POST, and maps the response back to a host generation. Timeout,
//! retry, and concurrency enforcement stay with the host.

use std::pin::Pin;

use async_trait::async_trait;
use cohere_bridge_core::{
    AdapterError, AdapterResult, ChatGeneration, ChatGenerationChunk, ChatTurn, ClientConfig,
    SamplingOptions, DEFAULT_FREQUENCY_PENALTY, DEFAULT_K, DEFAULT_P, DEFAULT_PRESENCE_PENALTY,
    DEFAULT_TEMPERATURE,
};
use futures::Stream;
use reqwest::Client;
use tracing::{debug, warn};

use crate::auth::SessionKeyExchanger;
use crate::catalog::{ModelCatalog, ModelInfo};
use crate::history::{normalize, NormalizedPrompt};
use crate::types::{ApiErrorBody, ChatRequest, ChatResponse};

/// Production chat API base URL.
pub const COHERE_BASE_URL: &str = "https://api.cohere.com";

/// A stream of generation chunks.
///
/// The adapter yields exactly one chunk per request; the stream shape exists
/// for hosts with a streaming-only consumption path.
pub type GenerationStream =
    Pin<Box<dyn Stream<Item = AdapterResult<ChatGenerationChunk>> + Send>>;

/// The registration contract a chat-orchestration host consumes.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Platform identifier this client registers under.
    fn platform(&self) -> &str;

    /// Prepare the client. Populates the model metadata cache.
    async fn init(&self) -> AdapterResult<()>;

    /// All models this client can serve.
    async fn models(&self) -> AdapterResult<Vec<ModelInfo>>;

    /// Run one chat completion over the full ordered turn sequence.
    async fn chat(
        &self,
        model: &str,
        turns: &[ChatTurn],
        overrides: &SamplingOptions,
    ) -> AdapterResult<ChatGeneration>;

    /// Streaming-shaped completion: one completed generation as one chunk.
    async fn chat_stream(
        &self,
        model: &str,
        turns: &[ChatTurn],
        overrides: &SamplingOptions,
    ) -> AdapterResult<GenerationStream>;

    /// Release the client. No-op for this adapter.
    async fn dispose(&self) -> AdapterResult<()>;
}

/// Chat client for the Cohere v1 chat API.
#[derive(Debug)]
pub struct CohereChatClient {
    config: ClientConfig,
    sampling: SamplingOptions,
    http: Client,
    base_url: String,
    exchanger: SessionKeyExchanger,
    catalog: ModelCatalog,
}

impl CohereChatClient {
    /// Create a client from one registered config and the shared sampling
    /// options. Sampling ranges are validated here, before any request.
    pub fn new(config: ClientConfig, sampling: SamplingOptions) -> AdapterResult<Self> {
        sampling.validate()?;
        let http = Client::new();
        Ok(Self {
            exchanger: SessionKeyExchanger::new(http.clone()),
            config,
            sampling,
            http,
            base_url: COHERE_BASE_URL.to_string(),
            catalog: ModelCatalog::new(),
        })
    }

    /// Override the chat API base URL. Used by tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the session-key exchange endpoint. Used by tests.
    #[must_use]
    pub fn with_exchange_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.exchanger = self.exchanger.with_endpoint(endpoint);
        self
    }

    fn build_request(
        &self,
        model: &str,
        message: String,
        prompt: NormalizedPrompt,
        overrides: &SamplingOptions,
    ) -> ChatRequest {
        let sampling = self.sampling.merge(overrides);
        ChatRequest {
            message,
            chat_history: prompt.history,
            model: model.to_string(),
            preamble: prompt.preamble,
            connectors: Vec::new(),
            stream: false,
            prompt_truncation: "OFF".to_string(),
            temperature: Some(sampling.temperature.unwrap_or(DEFAULT_TEMPERATURE)),
            k: Some(sampling.k.unwrap_or(DEFAULT_K)),
            p: Some(sampling.p.unwrap_or(DEFAULT_P)),
            frequency_penalty: Some(
                sampling.frequency_penalty.unwrap_or(DEFAULT_FREQUENCY_PENALTY),
            ),
            presence_penalty: Some(
                sampling.presence_penalty.unwrap_or(DEFAULT_PRESENCE_PENALTY),
            ),
            documents: sampling.documents.unwrap_or_default(),
        }
    }

    async fn dispatch(&self, bearer: &str, body: &ChatRequest) -> AdapterResult<ChatResponse> {
        let response = self
            .http
            .post(format!("{}/v1/chat", self.base_url))
            .header("authorization", format!("Bearer {bearer}"))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| AdapterError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            let body_text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorBody>(&body_text) {
                Ok(api) => format!("{reason}: {}", api.message),
                Err(_) => reason.to_string(),
            };
            warn!(status = status.as_u16(), %message, "chat request failed");
            return Err(AdapterError::request_failed(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| AdapterError::invalid_response(e.to_string()))
    }
}

#[async_trait]
impl ModelClient for CohereChatClient {
    fn platform(&self) -> &str {
        "cohere"
    }

    async fn init(&self) -> AdapterResult<()> {
        let count = self.catalog.models().len();
        debug!(models = count, "cohere client initialized");
        Ok(())
    }

    async fn models(&self) -> AdapterResult<Vec<ModelInfo>> {
        Ok(self.catalog.models())
    }

    async fn chat(
        &self,
        model: &str,
        turns: &[ChatTurn],
        overrides: &SamplingOptions,
    ) -> AdapterResult<ChatGeneration> {
        match turns.last() {
            Some(turn) if turn.is_human() => {}
            Some(turn) => {
                return Err(AdapterError::invalid_input(format!(
                    "last turn must be human-authored, got {}",
                    turn.role_name()
                )))
            }
            None => return Err(AdapterError::invalid_input("turn sequence is empty")),
        }

        let mut prompt = normalize(turns);
        let message = prompt
            .message
            .take()
            .ok_or_else(|| AdapterError::invalid_input("no human turn to send"))?;

        let bearer = self.exchanger.resolve(&self.config.credential).await?;
        let body = self.build_request(model, message, prompt, overrides);

        debug!(
            model,
            history = body.chat_history.len(),
            "dispatching chat completion"
        );
        let parsed = self.dispatch(&bearer, &body).await?;
        debug!(
            model,
            generation_id = parsed.generation_id.as_deref(),
            finish_reason = parsed.finish_reason.as_deref(),
            "chat completion received"
        );

        Ok(ChatGeneration::new(model, parsed.text))
    }

    async fn chat_stream(
        &self,
        model: &str,
        turns: &[ChatTurn],
        overrides: &SamplingOptions,
    ) -> AdapterResult<GenerationStream> {
        let generation = self.chat(model, turns, overrides).await?;
        let chunk: AdapterResult<ChatGenerationChunk> =
            Ok(ChatGenerationChunk::from(generation));
        Ok(Box::pin(futures::stream::iter(std::iter::once(chunk))))
    }

    async fn dispose(&self) -> AdapterResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohere_bridge_core::Credential;

    fn client() -> CohereChatClient {
        CohereChatClient::new(
            ClientConfig::new(Credential::ApiKey("co-key".into())),
            SamplingOptions::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range_sampling() {
        let err = CohereChatClient::new(
            ClientConfig::new(Credential::ApiKey("co-key".into())),
            SamplingOptions::new().temperature(3.0),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "configuration");
    }

    #[test]
    fn test_platform_name() {
        assert_eq!(client().platform(), "cohere");
    }

    #[test]
    fn test_models_come_from_catalog() {
        let models = tokio_test::block_on(client().models()).unwrap();
        assert_eq!(models.len(), 7);
    }

    #[test]
    fn test_chat_rejects_trailing_assistant_turn() {
        let turns = vec![ChatTurn::human("Q"), ChatTurn::assistant("A")];
        let err = tokio_test::block_on(client().chat(
            "command-r",
            &turns,
            &SamplingOptions::new(),
        ))
        .unwrap_err();
        assert_eq!(err.kind(), "invalid-input");
        assert!(err.to_string().contains("assistant"));
    }

    #[test]
    fn test_chat_rejects_empty_sequence() {
        let err = tokio_test::block_on(client().chat(
            "command-r",
            &[],
            &SamplingOptions::new(),
        ))
        .unwrap_err();
        assert_eq!(err.kind(), "invalid-input");
    }

    #[test]
    fn test_build_request_applies_defaults_and_overrides() {
        let client = CohereChatClient::new(
            ClientConfig::new(Credential::ApiKey("co-key".into())),
            SamplingOptions::new().temperature(0.4),
        )
        .unwrap();

        let prompt = normalize(&[ChatTurn::system("Be terse."), ChatTurn::human("Hi")]);
        let body = client.build_request(
            "command-r-plus",
            "Hi".into(),
            prompt,
            &SamplingOptions::new().k(25),
        );

        assert_eq!(body.model, "command-r-plus");
        assert_eq!(body.preamble, "Be terse.");
        assert_eq!(body.temperature, Some(0.4));
        assert_eq!(body.k, Some(25));
        assert_eq!(body.p, Some(DEFAULT_P));
        assert!(!body.stream);
        assert_eq!(body.prompt_truncation, "OFF");
        assert!(body.connectors.is_empty());
    }
}
