/// Where a transcript entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
    System,
}

/// A single transcript entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub origin: Origin,
    pub text: String,
}

impl ChatMessage {
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            origin,
            text: text.into(),
        }
    }
}

/// Ordered, append-only sequence of messages for one session.
///
/// Entries are only removed en masse by [`Transcript::clear`] when the
/// conversation is reset.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Appends a message and returns a reference to the stored entry.
    pub fn append(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        // push guarantees at least one element
        &self.messages[self.messages.len() - 1]
    }

    /// Discards all entries.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::new(Origin::User, "hello"));
        transcript.append(ChatMessage::new(Origin::Assistant, "hi"));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].origin, Origin::User);
        assert_eq!(transcript.messages()[0].text, "hello");
        assert_eq!(transcript.messages()[1].origin, Origin::Assistant);
        assert_eq!(transcript.messages()[1].text, "hi");
    }

    #[test]
    fn test_append_returns_stored_entry() {
        let mut transcript = Transcript::new();
        let entry = transcript.append(ChatMessage::new(Origin::System, "status"));

        assert_eq!(entry.text, "status");
        assert_eq!(entry.origin, Origin::System);
    }

    #[test]
    fn test_clear_empties_transcript() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::new(Origin::User, "one"));
        transcript.append(ChatMessage::new(Origin::Assistant, "two"));

        transcript.clear();

        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_last_returns_newest_entry() {
        let mut transcript = Transcript::new();
        transcript.append(ChatMessage::new(Origin::User, "first"));
        transcript.append(ChatMessage::new(Origin::User, "second"));

        assert_eq!(transcript.last().unwrap().text, "second");
    }
}
