//! # cohere-bridge-model
//!
//! The Cohere adapter: turns a host's ordered chat-turn sequence into
//! Cohere's `message` / `preamble` / `chat_history` wire shape, issues the
//! chat call, and maps the response back to a host generation.
//!
//! ## Example
//!
//! ```ignore
//! use cohere_bridge_core::{ChatTurn, ClientConfig, Credential, SamplingOptions};
//! use cohere_bridge_model::{CohereChatClient, ModelClient};
//!
//! let client = CohereChatClient::new(
//!     ClientConfig::new(Credential::ApiKey(api_key)),
//!     SamplingOptions::new().temperature(0.3),
//! )?;
//!
//! let turns = vec![
//!     ChatTurn::system("Be terse."),
//!     ChatTurn::human("What is the tallest penguin?"),
//! ];
//! let generation = client
//!     .chat("command-r-plus", &turns, &SamplingOptions::new())
//!     .await?;
//! println!("{}", generation.text);
//! ```
//!
//! ## API Notes
//!
//! - Base URL: `https://api.cohere.com/v1`
//! - Auth: `authorization: Bearer <key>`; session tokens are exchanged for a
//!   key on every call via an undocumented RPC
//! - Uses `message` + `chat_history` + `preamble` instead of an
//!   OpenAI-style messages array

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod auth;
pub mod catalog;
pub mod client;
pub mod history;
pub mod types;

// Re-exports for convenience
pub use auth::{SessionKeyExchanger, SESSION_KEY_EXCHANGE_URL};
pub use catalog::{builtin_models, ModelCatalog, ModelInfo, MAX_CONTEXT_TOKENS};
pub use client::{CohereChatClient, GenerationStream, ModelClient, COHERE_BASE_URL};
pub use history::{normalize, NormalizedPrompt};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};
