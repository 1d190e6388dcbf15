//! # cohere-bridge
//!
//! A small adapter that lets a chat-orchestration host talk to the Cohere
//! chat completion API, authenticating with either a long-lived API key or a
//! captured browser session token.
//!
//! The adapter's job is narrow: translate the host's ordered, role-tagged
//! turn sequence into Cohere's `message` / `preamble` / `chat_history`
//! payload, issue the HTTP call, and hand the response back as a chat
//! generation. Retry, timeout, and concurrency policy stay with the host.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cohere_bridge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AdapterConfig {
//!         credentials: vec![Credential::ApiKey(std::env::var("CO_API_KEY")?)],
//!         sampling: SamplingOptions::new().temperature(0.3),
//!         ..Default::default()
//!     };
//!     config.validate()?;
//!
//!     let client = CohereChatClient::new(
//!         config.client_configs().remove(0),
//!         config.sampling.clone(),
//!     )?;
//!     client.init().await?;
//!
//!     let turns = vec![
//!         ChatTurn::system("Be terse."),
//!         ChatTurn::human("What is the tallest penguin?"),
//!     ];
//!     let generation = client
//!         .chat("command-r-plus", &turns, &SamplingOptions::new())
//!         .await?;
//!     println!("{}", generation.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`cohere_bridge_core`] - turns, settings, generations, errors
//! - [`cohere_bridge_model`] - normalization, wire types, auth, catalog,
//!   and the HTTP client

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub use cohere_bridge_core::{
    AdapterConfig, AdapterError, AdapterResult, ChatGeneration, ChatGenerationChunk, ChatTurn,
    ClientConfig, Credential, Document, SamplingOptions,
};
pub use cohere_bridge_model::{
    builtin_models, normalize, CohereChatClient, GenerationStream, ModelClient, ModelInfo,
    NormalizedPrompt,
};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use cohere_bridge_core::{
        AdapterConfig, AdapterError, AdapterResult, ChatGeneration, ChatGenerationChunk, ChatTurn,
        ClientConfig, Credential, Document, SamplingOptions,
    };
    pub use cohere_bridge_model::{
        normalize, CohereChatClient, GenerationStream, ModelClient, ModelInfo, NormalizedPrompt,
    };
}
