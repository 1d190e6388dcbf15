//! Sampling settings and adapter configuration.
//!
//! `SamplingOptions` mirrors the operator-facing parameter schema: every field
//! is optional, with the documented defaults applied when a request body is
//! built. `AdapterConfig` is the operator surface (a list of secret
//! credentials plus shared sampling), fanned out into one `ClientConfig` per
//! credential the way the host registers clients.

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, AdapterResult};

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 1.0;
/// Default top-k.
pub const DEFAULT_K: u32 = 0;
/// Default top-p.
pub const DEFAULT_P: f64 = 0.75;
/// Default frequency penalty.
pub const DEFAULT_FREQUENCY_PENALTY: f64 = 0.0;
/// Default presence penalty.
pub const DEFAULT_PRESENCE_PENALTY: f64 = 0.0;

/// A reference document the model may ground its reply on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document title.
    pub title: String,
    /// Document body.
    pub text: String,
}

impl Document {
    /// Create a new document.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Sampling parameters for chat generation.
///
/// Unset fields fall back to the documented defaults when the request body is
/// built, so an empty `SamplingOptions` doubles as the per-request override
/// set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    /// Sampling temperature, 0 to 1. Higher is more random.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Top-k: only the `k` most likely tokens are considered at each step.
    /// 0 to 500; 0 disables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,

    /// Top-p: only tokens with total probability mass `p` are considered.
    /// 0.01 to 0.99. Applied after `k` when both are set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,

    /// Frequency penalty, 0 to 1, proportional to token repetition count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,

    /// Presence penalty, 0 to 1, applied to every token already seen
    /// regardless of frequency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,

    /// Reference documents to ground replies on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Document>>,
}

impl SamplingOptions {
    /// Create empty options (all defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set temperature.
    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set top-k.
    #[must_use]
    pub fn k(mut self, k: u32) -> Self {
        self.k = Some(k);
        self
    }

    /// Set top-p.
    #[must_use]
    pub fn p(mut self, p: f64) -> Self {
        self.p = Some(p);
        self
    }

    /// Set frequency penalty.
    #[must_use]
    pub fn frequency_penalty(mut self, penalty: f64) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    /// Set presence penalty.
    #[must_use]
    pub fn presence_penalty(mut self, penalty: f64) -> Self {
        self.presence_penalty = Some(penalty);
        self
    }

    /// Set reference documents.
    #[must_use]
    pub fn documents(mut self, documents: Vec<Document>) -> Self {
        self.documents = Some(documents);
        self
    }

    /// Merge with another set of options, preferring values from `other`.
    #[must_use]
    pub fn merge(&self, other: &SamplingOptions) -> SamplingOptions {
        SamplingOptions {
            temperature: other.temperature.or(self.temperature),
            k: other.k.or(self.k),
            p: other.p.or(self.p),
            frequency_penalty: other.frequency_penalty.or(self.frequency_penalty),
            presence_penalty: other.presence_penalty.or(self.presence_penalty),
            documents: other
                .documents
                .clone()
                .or_else(|| self.documents.clone()),
        }
    }

    /// Check every set field against its documented range.
    pub fn validate(&self) -> AdapterResult<()> {
        if let Some(t) = self.temperature {
            if !(0.0..=1.0).contains(&t) {
                return Err(AdapterError::configuration(format!(
                    "temperature {t} out of range 0-1"
                )));
            }
        }
        if let Some(k) = self.k {
            if k > 500 {
                return Err(AdapterError::configuration(format!(
                    "k {k} out of range 0-500"
                )));
            }
        }
        if let Some(p) = self.p {
            if !(0.01..=0.99).contains(&p) {
                return Err(AdapterError::configuration(format!(
                    "p {p} out of range 0.01-0.99"
                )));
            }
        }
        if let Some(fp) = self.frequency_penalty {
            if !(0.0..=1.0).contains(&fp) {
                return Err(AdapterError::configuration(format!(
                    "frequency_penalty {fp} out of range 0-1"
                )));
            }
        }
        if let Some(pp) = self.presence_penalty {
            if !(0.0..=1.0).contains(&pp) {
                return Err(AdapterError::configuration(format!(
                    "presence_penalty {pp} out of range 0-1"
                )));
            }
        }
        Ok(())
    }
}

/// A secret credential the adapter authenticates with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Credential {
    /// A long-lived API key used directly as a bearer token.
    ApiKey(String),
    /// A captured browser session `authorization` header, exchanged for a
    /// short-lived API key before each chat call.
    SessionToken(String),
}

impl Credential {
    /// Whether the underlying secret is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::ApiKey(s) | Self::SessionToken(s) => s.trim().is_empty(),
        }
    }
}

/// Per-client configuration the host registers one model client with.
///
/// The timeout, retry, and concurrency knobs are pass-through data for the
/// host framework; the adapter itself never enforces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// The credential this client authenticates with.
    pub credential: Credential,
    /// Request timeout in seconds, enforced by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Maximum retry attempts, enforced by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    /// Maximum concurrent in-flight chats, enforced by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_max: Option<u32>,
}

impl ClientConfig {
    /// Create a config with just a credential.
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            timeout_secs: None,
            max_retries: None,
            concurrent_max: None,
        }
    }
}

/// Operator-level adapter configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Secret credentials; one model client is registered per entry.
    pub credentials: Vec<Credential>,
    /// Sampling parameters shared by every client.
    #[serde(default)]
    pub sampling: SamplingOptions,
    /// Request timeout in seconds, passed through to the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Maximum retry attempts, passed through to the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
    /// Maximum concurrent in-flight chats, passed through to the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_max: Option<u32>,
}

impl AdapterConfig {
    /// Validate the configuration as a whole.
    pub fn validate(&self) -> AdapterResult<()> {
        if self.credentials.is_empty() {
            return Err(AdapterError::configuration(
                "at least one credential is required",
            ));
        }
        self.sampling.validate()
    }

    /// Fan out one client config per credential, carrying the shared knobs.
    #[must_use]
    pub fn client_configs(&self) -> Vec<ClientConfig> {
        self.credentials
            .iter()
            .map(|credential| ClientConfig {
                credential: credential.clone(),
                timeout_secs: self.timeout_secs,
                max_retries: self.max_retries,
                concurrent_max: self.concurrent_max,
            })
            .collect()
    }
}
