//! Chat turn types.
//!
//! A conversation reaching the adapter is an ordered sequence of turns, each
//! tagged with the speaker's role. The closed enum replaces runtime role-tag
//! checks with exhaustive matching.

use serde::{Deserialize, Serialize};

/// One message in a conversation, tagged with the speaker's role.
///
/// Turns are produced by the host and owned by the caller for the duration of
/// one request; the adapter never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "content", rename_all = "lowercase")]
pub enum ChatTurn {
    /// System-level instruction. Folded into the Cohere preamble.
    System(String),
    /// A message authored by the end user.
    Human(String),
    /// A message previously produced by the model.
    Assistant(String),
}

impl ChatTurn {
    /// Create a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Create a human turn.
    pub fn human(content: impl Into<String>) -> Self {
        Self::Human(content.into())
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// The text content of this turn.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::System(c) | Self::Human(c) | Self::Assistant(c) => c,
        }
    }

    /// The role tag as the host spells it.
    #[must_use]
    pub fn role_name(&self) -> &'static str {
        match self {
            Self::System(_) => "system",
            Self::Human(_) => "human",
            Self::Assistant(_) => "assistant",
        }
    }

    /// Whether this turn was authored by the end user.
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, Self::Human(_))
    }

    /// Whether this turn carries system-level instructions.
    #[must_use]
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System(_))
    }

    /// Whether this turn was produced by the model.
    #[must_use]
    pub fn is_assistant(&self) -> bool {
        matches!(self, Self::Assistant(_))
    }
}
