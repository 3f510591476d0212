//! Turn controller — drives one user turn through the completion protocol.
//!
//! A turn is: append the user entry, query the model, then either return its
//! text directly or service exactly one tool request and query again for the
//! final text. The controller is the only writer of the session transcript.

use tracing::{debug, info};

use crate::error::Error;
use crate::tools::ToolRegistry;
use crate::Result;

use super::completion::{Completion, CompletionClient};
use super::session::Session;
use super::transcript::{ContentBlock, TranscriptEntry};

/// Fixed output-token ceiling for every completion call.
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// The turn controller processes user input through the model and at most
/// one round of tool dispatch.
pub struct TurnController<C: CompletionClient> {
    client: C,
    tools: ToolRegistry,
}

impl<C: CompletionClient> TurnController<C> {
    /// Create a new turn controller.
    pub fn new(client: C, tools: ToolRegistry) -> Self {
        Self { client, tools }
    }

    /// Process one user turn and return the assistant-visible text.
    ///
    /// A failed completion call terminates the turn with a formatted
    /// `"An error occurred: ..."` string and leaves no dangling assistant
    /// entry. An unknown tool or an unclassifiable response shape is a
    /// contract violation and aborts the turn with an error.
    pub async fn process_turn(&self, session: &mut Session, user_input: &str) -> Result<String> {
        session.transcript.append(TranscriptEntry::user(user_input));
        info!(
            "Turn started ({} transcript entries)",
            session.transcript.len()
        );

        let content = match self
            .client
            .complete(session.transcript.snapshot(), MAX_OUTPUT_TOKENS)
            .await
        {
            Completion::Success { content } => content,
            Completion::Failure { message } => return Ok(format!("An error occurred: {message}")),
        };

        // A tool request is only reliably found at the end of the sequence;
        // the service may prepend explanatory text blocks before it.
        if let Some(ContentBlock::ToolUse { id, name, input }) = content.last().cloned() {
            debug!("Model requested tool '{}' ({})", name, id);
            session
                .transcript
                .append(TranscriptEntry::assistant_blocks(content));

            let result = self.tools.dispatch(&name, input).await?;
            session
                .transcript
                .append(TranscriptEntry::tool_result(id, result));

            let follow_up = match self
                .client
                .complete(session.transcript.snapshot(), MAX_OUTPUT_TOKENS)
                .await
            {
                Completion::Success { content } => content,
                Completion::Failure { message } => {
                    return Ok(format!("An error occurred: {message}"))
                }
            };

            match follow_up.into_iter().next() {
                Some(ContentBlock::Text { text }) => {
                    session.transcript.append(TranscriptEntry::assistant(&text));
                    Ok(text)
                }
                other => Err(Error::UnexpectedResponse(format!(
                    "follow-up response did not start with text: {other:?}"
                ))),
            }
        } else if let Some(ContentBlock::Text { text }) = content.first() {
            let text = text.clone();
            session.transcript.append(TranscriptEntry::assistant(&text));
            Ok(text)
        } else {
            Err(Error::UnexpectedResponse(format!(
                "no leading text or trailing tool_use block: {content:?}"
            )))
        }
    }
}
