//! # cohere-bridge-core
//!
//! Host-side abstractions for the cohere-bridge adapter workspace:
//!
//! - **Turns**: role-tagged conversation messages ([`ChatTurn`])
//! - **Settings**: sampling parameters and adapter configuration
//! - **Generations**: completion results handed back to the host
//! - **Errors**: the adapter error hierarchy ([`AdapterError`])
//!
//! This crate is deliberately transport-free; the Cohere wire shapes and the
//! HTTP client live in `cohere-bridge-model`.
//!
//! ## Example
//!
//! ```rust
//! use cohere_bridge_core::{ChatTurn, SamplingOptions};
//!
//! let turns = vec![
//!     ChatTurn::system("Be terse."),
//!     ChatTurn::human("Hi"),
//! ];
//! assert!(turns.last().is_some_and(ChatTurn::is_human));
//!
//! let sampling = SamplingOptions::new().temperature(0.3).p(0.9);
//! sampling.validate().expect("within documented ranges");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod generation;
pub mod settings;
pub mod turns;

// Re-exports for convenience
pub use error::{AdapterError, AdapterResult};
pub use generation::{ChatGeneration, ChatGenerationChunk};
pub use settings::{
    AdapterConfig, ClientConfig, Credential, Document, SamplingOptions, DEFAULT_FREQUENCY_PENALTY,
    DEFAULT_K, DEFAULT_P, DEFAULT_PRESENCE_PENALTY, DEFAULT_TEMPERATURE,
};
pub use turns::ChatTurn;
