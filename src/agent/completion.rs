//! Completion client trait and outcome type.

use async_trait::async_trait;

use super::transcript::{ContentBlock, TranscriptEntry};

/// Outcome of one completion call.
///
/// Transport problems are data, not errors: the client absorbs every
/// underlying failure into `Failure` so the turn controller has a single
/// uniform decision point. There is no partial or streaming state.
#[derive(Debug, Clone)]
pub enum Completion {
    Success { content: Vec<ContentBlock> },
    Failure { message: String },
}

/// Completion client trait — swappable service abstraction.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the full transcript snapshot and get the next model response.
    ///
    /// Must not return an error for transport-level failures; those are
    /// reported as [`Completion::Failure`].
    async fn complete(&self, transcript: &[TranscriptEntry], max_tokens: u32) -> Completion;

    /// Model identifier used by this client.
    fn model(&self) -> &str;
}

/// Fake completion client for testing.
///
/// Plays back a scripted sequence of outcomes and records every transcript
/// snapshot it was called with, so tests can assert cumulative history.
#[cfg(test)]
#[derive(Clone)]
pub(crate) struct FakeCompletionClient {
    outcomes: std::sync::Arc<std::sync::Mutex<std::collections::VecDeque<Completion>>>,
    calls: std::sync::Arc<std::sync::Mutex<Vec<Vec<TranscriptEntry>>>>,
}

#[cfg(test)]
impl FakeCompletionClient {
    /// Create with a scripted sequence of outcomes.
    pub fn new(outcomes: Vec<Completion>) -> Self {
        Self {
            outcomes: std::sync::Arc::new(std::sync::Mutex::new(outcomes.into())),
            calls: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// A successful outcome holding a single text block.
    pub fn text(text: &str) -> Completion {
        Completion::Success {
            content: vec![ContentBlock::Text {
                text: text.to_string(),
            }],
        }
    }

    /// The transcript snapshots observed so far, one per call.
    pub fn calls(&self) -> Vec<Vec<TranscriptEntry>> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl CompletionClient for FakeCompletionClient {
    async fn complete(&self, transcript: &[TranscriptEntry], _max_tokens: u32) -> Completion {
        self.calls.lock().unwrap().push(transcript.to_vec());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Completion::Failure {
                message: "no scripted outcome left".to_string(),
            })
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}
