//! Message-history normalization.
//!
//! Cohere wants a conversation in three pieces: the current user `message`,
//! a flattened system `preamble`, and the remaining turns as role-tagged
//! `chat_history`. [`normalize`] performs that split over the host's ordered
//! turn sequence without mutating it.

use cohere_bridge_core::ChatTurn;

use crate::types::ChatMessage;

/// The three fields Cohere's chat endpoint requires, derived from one turn
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPrompt {
    /// Content of the most recent human turn; `None` when the sequence has
    /// no human turn at all. Callers decide how to surface that case.
    pub message: Option<String>,
    /// All system-turn contents, space-joined in original order and trimmed.
    pub preamble: String,
    /// Every remaining turn in original order, mapped to Cohere's role
    /// vocabulary. Never contains the selected turn or any system turn.
    pub history: Vec<ChatMessage>,
}

/// Split a turn sequence into Cohere's `message` / `preamble` /
/// `chat_history` shape.
///
/// The most recent human turn becomes the current message and is excluded
/// from the history; earlier human turns stay in history as `USER`. System
/// turns are folded into the preamble in order. Every other turn maps to
/// `CHATBOT`. The input is left untouched and this function never fails.
pub fn normalize(turns: &[ChatTurn]) -> NormalizedPrompt {
    let current = turns.iter().rposition(ChatTurn::is_human);
    let message = current.map(|i| turns[i].content().to_string());

    let mut preamble = String::new();
    let mut history = Vec::with_capacity(turns.len());

    for (i, turn) in turns.iter().enumerate() {
        if Some(i) == current {
            continue;
        }
        match turn {
            ChatTurn::System(content) => {
                preamble.push_str(content);
                preamble.push(' ');
            }
            ChatTurn::Human(content) => history.push(ChatMessage::user(content.clone())),
            ChatTurn::Assistant(content) => history.push(ChatMessage::chatbot(content.clone())),
        }
    }

    NormalizedPrompt {
        message,
        preamble: preamble.trim().to_string(),
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn turns(entries: &[(&str, &str)]) -> Vec<ChatTurn> {
        entries.iter()
            .map(|(role, content)| match *role {
                "system" => ChatTurn::system(*content),
                "human" => ChatTurn::human(*content),
                "assistant" => ChatTurn::assistant(*content),
                other => panic!("unknown role {other}"),
            })
            .collect()
    }

    #[test]
    fn test_trailing_human_becomes_message() {
        let input = turns(&[
            ("system", "Be terse."),
            ("human", "Hi"),
            ("assistant", "Hello"),
            ("human", "Bye"),
        ]);

        let prompt = normalize(&input);
        assert_eq!(prompt.message.as_deref(), Some("Bye"));
        assert_eq!(prompt.preamble, "Be terse.");
        assert_eq!(
            prompt.history,
            vec![ChatMessage::user("Hi"), ChatMessage::chatbot("Hello")]
        );
        // Exactly one turn was removed from the working set.
        assert_eq!(prompt.history.len(), input.len() - 2);
        // The caller's sequence is untouched.
        assert_eq!(input.len(), 4);
    }

    #[test]
    fn test_consecutive_system_turns_join_in_order() {
        let input = turns(&[("system", "A."), ("system", "B."), ("human", "Q")]);

        let prompt = normalize(&input);
        assert_eq!(prompt.message.as_deref(), Some("Q"));
        assert_eq!(prompt.preamble, "A. B.");
        assert!(prompt.history.is_empty());
    }

    #[test]
    fn test_only_most_recent_human_selected() {
        let input = turns(&[
            ("human", "first"),
            ("assistant", "reply"),
            ("human", "second"),
            ("human", "third"),
        ]);

        let prompt = normalize(&input);
        assert_eq!(prompt.message.as_deref(), Some("third"));
        assert_eq!(
            prompt.history,
            vec![
                ChatMessage::user("first"),
                ChatMessage::chatbot("reply"),
                ChatMessage::user("second"),
            ]
        );
    }

    #[test]
    fn test_selected_turn_need_not_be_last() {
        // A trailing assistant turn is never the current message; the human
        // turn before it is selected and the assistant turn stays in history.
        let input = turns(&[("human", "Q"), ("assistant", "A")]);

        let prompt = normalize(&input);
        assert_eq!(prompt.message.as_deref(), Some("Q"));
        assert_eq!(prompt.history, vec![ChatMessage::chatbot("A")]);
    }

    #[test]
    fn test_no_human_turn_yields_none() {
        let input = turns(&[("system", "Rules."), ("assistant", "Hi")]);

        let prompt = normalize(&input);
        assert_eq!(prompt.message, None);
        assert_eq!(prompt.preamble, "Rules.");
        assert_eq!(prompt.history, vec![ChatMessage::chatbot("Hi")]);
    }

    #[test]
    fn test_empty_input() {
        let prompt = normalize(&[]);
        assert_eq!(prompt.message, None);
        assert_eq!(prompt.preamble, "");
        assert!(prompt.history.is_empty());
    }

    #[rstest]
    #[case(turns(&[("human", "only")]), Some("only"), "", 0)]
    #[case(turns(&[("system", "S"), ("human", "h")]), Some("h"), "S", 0)]
    #[case(turns(&[("assistant", "a"), ("human", "h")]), Some("h"), "", 1)]
    #[case(turns(&[("assistant", "a")]), None, "", 1)]
    fn test_shape(
        #[case] input: Vec<ChatTurn>,
        #[case] message: Option<&str>,
        #[case] preamble: &str,
        #[case] history_len: usize,
    ) {
        let prompt = normalize(&input);
        assert_eq!(prompt.message.as_deref(), message);
        assert_eq!(prompt.preamble, preamble);
        assert_eq!(prompt.history.len(), history_len);
    }

    #[test]
    fn test_system_turns_never_reach_history() {
        let input = turns(&[
            ("system", "one"),
            ("human", "h1"),
            ("system", "two"),
            ("assistant", "a1"),
            ("system", "three"),
            ("human", "h2"),
        ]);

        let prompt = normalize(&input);
        assert_eq!(prompt.preamble, "one two three");
        assert_eq!(
            prompt.history,
            vec![ChatMessage::user("h1"), ChatMessage::chatbot("a1")]
        );
    }

    #[test]
    fn test_renormalizing_reconstruction_is_stable() {
        let input = turns(&[
            ("system", "Be terse."),
            ("human", "Hi"),
            ("assistant", "Hello"),
            ("human", "Bye"),
        ]);
        let first = normalize(&input);

        // Rebuild a turn sequence from the normalized output and run it
        // through again: the split must not drift.
        let mut rebuilt = Vec::new();
        if !first.preamble.is_empty() {
            rebuilt.push(ChatTurn::system(first.preamble.clone()));
        }
        for msg in &first.history {
            rebuilt.push(match msg.role {
                Role::User => ChatTurn::human(msg.message.clone()),
                Role::Chatbot => ChatTurn::assistant(msg.message.clone()),
            });
        }
        rebuilt.push(ChatTurn::human(first.message.clone().unwrap()));

        let second = normalize(&rebuilt);
        assert_eq!(second, first);
    }
}
