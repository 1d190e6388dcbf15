//! Cohere v1 chat API wire types.
//!
//! Cohere takes a single current `message` plus a role-tagged `chat_history`
//! and a flattened `preamble`, rather than an OpenAI-style messages array.

use cohere_bridge_core::Document;
use serde::{Deserialize, Serialize};

/// Chat request body for `POST /v1/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The current user message.
    pub message: String,
    /// Previous conversation turns, oldest first.
    pub chat_history: Vec<ChatMessage>,
    /// Model identifier.
    pub model: String,
    /// Flattened system preamble. Sent even when empty.
    pub preamble: String,
    /// Connector list; always empty for this adapter.
    pub connectors: Vec<serde_json::Value>,
    /// Whether to stream. Always `false`; the adapter has no real streaming.
    pub stream: bool,
    /// Prompt truncation mode. Always `"OFF"`.
    pub prompt_truncation: String,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Top-k sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    /// Top-p nucleus sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    /// Frequency penalty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    /// Presence penalty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    /// Reference documents. Sent even when empty.
    pub documents: Vec<Document>,
}

/// A message in chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: USER or CHATBOT.
    pub role: Role,
    /// Message content.
    pub message: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            message: message.into(),
        }
    }

    /// Create a chatbot message.
    pub fn chatbot(message: impl Into<String>) -> Self {
        Self {
            role: Role::Chatbot,
            message: message.into(),
        }
    }
}

/// History role in Cohere's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// End-user message.
    User,
    /// Model message.
    Chatbot,
}

/// Chat response from `POST /v1/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Generated text.
    pub text: String,
    /// Generation ID.
    #[serde(default)]
    pub generation_id: Option<String>,
    /// Finish reason.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Best-effort parse of a Cohere error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Error message.
    pub message: String,
}

/// Response from the session-key exchange RPC.
#[derive(Debug, Clone, Deserialize)]
pub struct RawKeyResponse {
    /// The minted API key.
    #[serde(rename = "rawKey")]
    pub raw_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
        assert_eq!(serde_json::to_string(&Role::Chatbot).unwrap(), "\"CHATBOT\"");
    }

    #[test]
    fn test_chat_message_constructors() {
        let msg = ChatMessage::user("Hi there");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.message, "Hi there");

        let msg = ChatMessage::chatbot("Hello");
        assert_eq!(msg.role, Role::Chatbot);
    }

    #[test]
    fn test_request_serializes_fixed_fields() {
        let req = ChatRequest {
            message: "Q".into(),
            chat_history: vec![ChatMessage::user("Hi")],
            model: "command-r-plus".into(),
            preamble: String::new(),
            connectors: Vec::new(),
            stream: false,
            prompt_truncation: "OFF".into(),
            temperature: Some(1.0),
            k: Some(0),
            p: Some(0.75),
            frequency_penalty: Some(0.0),
            presence_penalty: Some(0.0),
            documents: Vec::new(),
        };

        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["connectors"], serde_json::json!([]));
        assert_eq!(json["stream"], serde_json::json!(false));
        assert_eq!(json["prompt_truncation"], serde_json::json!("OFF"));
        assert_eq!(json["preamble"], serde_json::json!(""));
        assert_eq!(json["documents"], serde_json::json!([]));
        assert_eq!(json["chat_history"][0]["role"], serde_json::json!("USER"));
    }

    #[test]
    fn test_raw_key_response_field_name() {
        let parsed: RawKeyResponse =
            serde_json::from_str(r#"{"rawKey":"co-minted"}"#).unwrap();
        assert_eq!(parsed.raw_key, "co-minted");
    }

    #[test]
    fn test_chat_response_tolerates_missing_optionals() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"text":"Hello"}"#).unwrap();
        assert_eq!(parsed.text, "Hello");
        assert!(parsed.generation_id.is_none());
        assert!(parsed.finish_reason.is_none());
    }
}
