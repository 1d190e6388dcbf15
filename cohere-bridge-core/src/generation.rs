//! Chat generation results returned to the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::turns::ChatTurn;

/// The result of one completed chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatGeneration {
    /// The generated text.
    pub text: String,
    /// The same text as an assistant turn, ready to append to history.
    pub message: ChatTurn,
    /// Name of the model that produced this generation.
    pub model: String,
    /// When the response was received.
    pub created_at: DateTime<Utc>,
}

impl ChatGeneration {
    /// Create a generation from a model name and response text.
    pub fn new(model: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            message: ChatTurn::assistant(text.clone()),
            text,
            model: model.into(),
            created_at: Utc::now(),
        }
    }
}

/// One chunk of a streamed generation.
///
/// The adapter does not stream for real; a completed generation is wrapped as
/// a single chunk to satisfy the host's streaming-shaped interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatGenerationChunk {
    /// The chunk text.
    pub text: String,
    /// The chunk as an assistant turn.
    pub message: ChatTurn,
}

impl From<ChatGeneration> for ChatGenerationChunk {
    fn from(generation: ChatGeneration) -> Self {
        Self {
            text: generation.text,
            message: generation.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generation_carries_assistant_turn() {
        let generation = ChatGeneration::new("command-r-plus", "Hello!");
        assert_eq!(generation.text, "Hello!");
        assert_eq!(generation.message, ChatTurn::assistant("Hello!"));
        assert_eq!(generation.model, "command-r-plus");
    }

    #[test]
    fn test_chunk_from_generation() {
        let generation = ChatGeneration::new("command-r", "partial");
        let chunk = ChatGenerationChunk::from(generation.clone());
        assert_eq!(chunk.text, generation.text);
        assert_eq!(chunk.message, generation.message);
    }
}
