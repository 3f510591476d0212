//! Anthropic messages API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::tools::ToolDefinition;
use crate::Result;

use super::completion::{Completion, CompletionClient};
use super::transcript::{ContentBlock, EntryContent, Role, TranscriptEntry};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the Anthropic messages endpoint.
///
/// Holds the fixed system instruction and tool-schema declaration for its
/// whole lifetime. `complete` never fails: every transport or decoding
/// problem comes back as a [`Completion::Failure`].
pub struct ClaudeClient {
    client: Client,
    api_key: String,
    model: String,
    system: String,
    tools: Vec<ToolDefinition>,
}

impl ClaudeClient {
    /// Create a client from explicit configuration.
    ///
    /// Fails when no API key is configured; credentials are never read
    /// implicitly from the process environment.
    pub fn new(
        config: &Config,
        system: impl Into<String>,
        tools: Vec<ToolDefinition>,
    ) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::Config(
                "No API key configured. Run 'eva onboard' first.".to_string(),
            ));
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            system: system.into(),
            tools,
        })
    }

    fn build_request(&self, transcript: &[TranscriptEntry], max_tokens: u32) -> MessagesRequest {
        MessagesRequest {
            model: self.model.clone(),
            max_tokens,
            system: self.system.clone(),
            messages: transcript.iter().map(to_wire).collect(),
            tools: self
                .tools
                .iter()
                .map(|t| WireTool {
                    name: t.name.clone(),
                    description: t.description.clone(),
                    input_schema: t.parameters.clone(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl CompletionClient for ClaudeClient {
    async fn complete(&self, transcript: &[TranscriptEntry], max_tokens: u32) -> Completion {
        let request = self.build_request(transcript, max_tokens);
        debug!(
            "Calling {} with {} messages",
            self.model,
            request.messages.len()
        );

        let response = match self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return Completion::Failure {
                    message: format!("request failed: {e}"),
                }
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Completion::Failure {
                    message: format!("failed to read response: {e}"),
                }
            }
        };

        if !status.is_success() {
            return Completion::Failure {
                message: format!("API error ({status}): {body}"),
            };
        }

        match serde_json::from_str::<MessagesResponse>(&body) {
            Ok(parsed) => {
                debug!("Completion finished: {:?}", parsed.stop_reason);
                Completion::Success {
                    content: parsed.content,
                }
            }
            Err(e) => Completion::Failure {
                message: format!("malformed response: {e}"),
            },
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Convert a transcript entry to its wire shape.
fn to_wire(entry: &TranscriptEntry) -> WireMessage {
    let role = match entry.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };

    let content = match &entry.content {
        EntryContent::Text(text) => WireContent::Text(text.clone()),
        EntryContent::Blocks(blocks) => WireContent::Blocks(
            blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(WireBlock::Text { text: text.clone() }),
                    ContentBlock::ToolUse { id, name, input } => Some(WireBlock::ToolUse {
                        id: id.clone(),
                        name: name.clone(),
                        input: input.clone(),
                    }),
                    // Unknown blocks have no wire shape; drop them from
                    // outbound context.
                    ContentBlock::Unknown => None,
                })
                .collect(),
        ),
        EntryContent::ToolResult {
            tool_use_id,
            content,
        } => WireContent::Blocks(vec![WireBlock::ToolResult {
            tool_use_id: tool_use_id.clone(),
            content: content.clone(),
        }]),
    };

    WireMessage {
        role: role.to_string(),
        content,
    }
}

// Anthropic API wire types

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: WireContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum WireContent {
    Text(String),
    Blocks(Vec<WireBlock>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        content: String,
    },
}

#[derive(Debug, Serialize)]
struct WireTool {
    name: String,
    description: String,
    input_schema: Value,
}

#[derive(Debug, serde::Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client() -> ClaudeClient {
        let config = Config {
            api_key: "sk-test".to_string(),
            model: "claude-3-5-sonnet-20241022".to_string(),
        };
        ClaudeClient::new(
            &config,
            "You are Eva.",
            vec![ToolDefinition {
                name: "get_quote".to_string(),
                description: "Quote a premium".to_string(),
                parameters: json!({"type": "object"}),
            }],
        )
        .unwrap()
    }

    #[test]
    fn test_missing_api_key_fails_loudly() {
        let config = Config {
            api_key: "  ".to_string(),
            ..Config::default()
        };
        let result = ClaudeClient::new(&config, "system", vec![]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_user_text_serializes_as_plain_string() {
        let wire = to_wire(&TranscriptEntry::user("Hello"));
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "Hello"}));
    }

    #[test]
    fn test_assistant_blocks_serialize_as_block_array() {
        let entry = TranscriptEntry::assistant_blocks(vec![
            ContentBlock::Text {
                text: "Let me check.".to_string(),
            },
            ContentBlock::ToolUse {
                id: "toolu_01".to_string(),
                name: "get_quote".to_string(),
                input: json!({"driver_age": 30}),
            },
        ]);
        let value = serde_json::to_value(to_wire(&entry)).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "assistant",
                "content": [
                    {"type": "text", "text": "Let me check."},
                    {"type": "tool_use", "id": "toolu_01", "name": "get_quote",
                     "input": {"driver_age": 30}}
                ]
            })
        );
    }

    #[test]
    fn test_tool_result_serializes_under_user_role() {
        let entry = TranscriptEntry::tool_result("toolu_01", "Quote generated: $78.00 per month");
        let value = serde_json::to_value(to_wire(&entry)).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "user",
                "content": [{
                    "type": "tool_result",
                    "tool_use_id": "toolu_01",
                    "content": "Quote generated: $78.00 per month"
                }]
            })
        );
    }

    #[test]
    fn test_request_carries_system_and_tool_schema() {
        let client = test_client();
        let request = client.build_request(&[TranscriptEntry::user("Hi")], 2048);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(value["max_tokens"], 2048);
        assert_eq!(value["system"], "You are Eva.");
        assert_eq!(value["tools"][0]["name"], "get_quote");
        assert_eq!(value["tools"][0]["input_schema"]["type"], "object");
    }

    #[test]
    fn test_response_decoding_tolerates_unknown_blocks() {
        let body = json!({
            "content": [
                {"type": "server_tool_use", "id": "x"},
                {"type": "text", "text": "Done"}
            ],
            "stop_reason": "end_turn"
        });
        let parsed: MessagesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.content[0], ContentBlock::Unknown);
        assert_eq!(
            parsed.content[1],
            ContentBlock::Text {
                text: "Done".to_string()
            }
        );
    }
}
