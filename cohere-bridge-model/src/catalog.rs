//! Static model catalog.
//!
//! Cohere has no listing endpoint this adapter uses; the model table is
//! fixed. Metadata is populated into a per-client cache once and reused,
//! never invalidated.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Common Cohere model identifiers.
pub mod models {
    /// Command-R Plus - most capable model.
    pub const COMMAND_R_PLUS: &str = "command-r-plus";
    /// Command-R - balanced performance.
    pub const COMMAND_R: &str = "command-r";
    /// Command - legacy model.
    pub const COMMAND: &str = "command";
    /// Command nightly build.
    pub const COMMAND_NIGHTLY: &str = "command-nightly";
    /// Command Light - faster, smaller.
    pub const COMMAND_LIGHT: &str = "command-light";
    /// Command Light nightly build.
    pub const COMMAND_LIGHT_NIGHTLY: &str = "command-light-nightly";
    /// Aya 23 - multilingual.
    pub const C4AI_AYA_23: &str = "c4ai-aya-23";
}

const MODEL_NAMES: [&str; 7] = [
    models::COMMAND_R_PLUS,
    models::COMMAND_R,
    models::COMMAND,
    models::COMMAND_NIGHTLY,
    models::COMMAND_LIGHT,
    models::COMMAND_LIGHT_NIGHTLY,
    models::C4AI_AYA_23,
];

/// Context window shared by the whole command family.
pub const MAX_CONTEXT_TOKENS: u32 = 128_000;

/// Static metadata for one registered model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier.
    pub name: String,
    /// Maximum context size in tokens.
    pub max_tokens: u32,
}

impl ModelInfo {
    /// Whether the model supports the given host chat mode. Only plain
    /// `chat` is supported.
    #[must_use]
    pub fn supports_chat_mode(&self, mode: &str) -> bool {
        mode == "chat"
    }
}

/// The builtin model table.
#[must_use]
pub fn builtin_models() -> Vec<ModelInfo> {
    MODEL_NAMES
        .iter()
        .map(|name| ModelInfo {
            name: (*name).to_string(),
            max_tokens: MAX_CONTEXT_TOKENS,
        })
        .collect()
}

/// Per-client model metadata cache.
///
/// Populated on first access and reused for the client's lifetime. The host
/// guarantees a single initialization path, but the lock keeps the cache
/// safe to share across request tasks anyway.
#[derive(Debug, Default)]
pub struct ModelCatalog {
    cache: RwLock<Option<HashMap<String, ModelInfo>>>,
}

impl ModelCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_populated(&self) {
        let mut cache = self.cache.write();
        if cache.is_none() {
            *cache = Some(
                builtin_models()
                    .into_iter()
                    .map(|info| (info.name.clone(), info))
                    .collect(),
            );
        }
    }

    /// All registered models.
    #[must_use]
    pub fn models(&self) -> Vec<ModelInfo> {
        self.ensure_populated();
        let cache = self.cache.read();
        cache
            .as_ref()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Look up one model by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ModelInfo> {
        self.ensure_populated();
        let cache = self.cache.read();
        cache.as_ref().and_then(|map| map.get(name).cloned())
    }

    /// Whether the cache has been populated yet.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.cache.read().is_some()
    }
}
