//! Conversation transcript — the append-only context window.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One unit of a model response, decoded once at the service boundary.
///
/// Tags the schema doesn't anticipate land in `Unknown` rather than failing
/// the whole decode; the turn controller rejects them where position matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    ToolUse { id: String, name: String, input: Value },
    #[serde(other)]
    Unknown,
}

/// Content of a transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryContent {
    /// Plain text: user input or final assistant text.
    Text(String),
    /// A full assistant block sequence, preserved verbatim.
    Blocks(Vec<ContentBlock>),
    /// A tool's output, linked back to the requesting `ToolUse` block.
    ToolResult { tool_use_id: String, content: String },
}

/// A single entry in the conversation transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: EntryContent,
}

impl TranscriptEntry {
    /// Create a user entry with plain text content.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: EntryContent::Text(content.into()),
        }
    }

    /// Create an assistant entry with plain text content.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: EntryContent::Text(content.into()),
        }
    }

    /// Create an assistant entry carrying a full block sequence.
    pub fn assistant_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content: EntryContent::Blocks(blocks),
        }
    }

    /// Create a tool-result entry. Tool results travel under the user role.
    pub fn tool_result(tool_use_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: EntryContent::ToolResult {
                tool_use_id: tool_use_id.into(),
                content: content.into(),
            },
        }
    }
}

/// Append-only transcript store.
///
/// The store enforces no role alternation itself; structural correctness is
/// the turn controller's responsibility. Entries are never edited or removed.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry at the end.
    pub fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// The full ordered sequence, used verbatim as the model context.
    pub fn snapshot(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the transcript has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
