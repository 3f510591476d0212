//! Conversation session — owns the transcript for one conversation.

use uuid::Uuid;

use super::transcript::Transcript;

/// A session owns the transcript store for the lifetime of one conversation.
///
/// Created at conversation start, mutated turn by turn through the turn
/// controller, dropped when the conversation ends. Not persisted.
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub transcript: Transcript,
}

impl Session {
    /// Start a fresh session with an empty transcript.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            transcript: Transcript::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(Session::new().id, Session::new().id);
    }
}
