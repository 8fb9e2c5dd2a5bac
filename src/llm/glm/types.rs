//! GLM-specific request and response types
//!
//! These types map directly to the ZAI (BigModel) chat completions API
//! schema, which follows the OpenAI wire format with a GLM-specific
//! `thinking` switch and `reasoning_content` delta channel.

use serde::{Deserialize, Serialize};

use crate::llm::types::{ChatMessage, MessageContent, MessageRole};

/// Request body for `POST /api/paas/v4/chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct GlmChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation, system message first
    pub messages: Vec<GlmMessage>,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Always true for streaming
    pub stream: bool,
    /// Deep reasoning mode switch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<GlmThinking>,
}

/// The `thinking` request field
#[derive(Debug, Clone, Serialize)]
pub struct GlmThinking {
    /// "enabled" or "disabled"
    #[serde(rename = "type")]
    pub mode: String,
}

impl GlmThinking {
    /// Enable the reasoning channel
    pub fn enabled() -> Self {
        Self {
            mode: "enabled".to_string(),
        }
    }
}

/// A single message in the GLM conversation
#[derive(Debug, Clone, Serialize)]
pub struct GlmMessage {
    /// Role: "system", "user" or "assistant"
    pub role: String,
    /// Content (string or array of parts, forwarded as-is)
    pub content: serde_json::Value,
}

impl From<ChatMessage> for GlmMessage {
    fn from(message: ChatMessage) -> Self {
        let role = match message.role {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };
        let content = match message.content {
            MessageContent::Text(text) => serde_json::Value::String(text),
            MessageContent::Parts(parts) => {
                serde_json::to_value(parts).unwrap_or(serde_json::Value::Null)
            }
        };
        Self {
            role: role.to_string(),
            content,
        }
    }
}

/// One SSE chunk from the streaming completions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GlmStreamChunk {
    /// Completion ID
    #[serde(default)]
    pub id: Option<String>,
    /// Candidate completions (always a single choice here)
    #[serde(default)]
    pub choices: Vec<GlmChoice>,
}

/// A single streamed choice
#[derive(Debug, Clone, Deserialize)]
pub struct GlmChoice {
    /// Choice index
    #[serde(default)]
    pub index: usize,
    /// Incremental payload
    #[serde(default)]
    pub delta: GlmDelta,
    /// Set on the final chunk of a choice
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Incremental message delta
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlmDelta {
    /// Visible output text
    #[serde(default)]
    pub content: Option<String>,
    /// Hidden chain-of-thought text (thinking mode only)
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

/// Error envelope returned on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct GlmErrorResponse {
    /// Error details
    pub error: GlmErrorData,
}

/// Error details
#[derive(Debug, Clone, Deserialize)]
pub struct GlmErrorData {
    /// Provider error code
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::ContentPart;

    #[test]
    fn test_request_serialization_skips_absent_fields() {
        let request = GlmChatRequest {
            model: "glm-4.6".to_string(),
            messages: vec![GlmMessage {
                role: "user".to_string(),
                content: serde_json::Value::String("hi".to_string()),
            }],
            max_tokens: 8192,
            temperature: None,
            stream: true,
            thinking: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"glm-4.6\""));
        assert!(json.contains("\"stream\":true"));
        assert!(!json.contains("temperature"));
        assert!(!json.contains("thinking"));
    }

    #[test]
    fn test_thinking_enabled_serialization() {
        let json = serde_json::to_string(&GlmThinking::enabled()).unwrap();
        assert_eq!(json, r#"{"type":"enabled"}"#);
    }

    #[test]
    fn test_message_from_text_content() {
        let glm: GlmMessage = ChatMessage::user("build me a site").into();
        assert_eq!(glm.role, "user");
        assert_eq!(glm.content, serde_json::json!("build me a site"));
    }

    #[test]
    fn test_message_from_parts_keeps_structure() {
        let msg = ChatMessage {
            role: MessageRole::User,
            content: MessageContent::Parts(vec![ContentPart {
                part_type: "text".to_string(),
                text: Some("menu attached".to_string()),
                extra: serde_json::Map::new(),
            }]),
        };
        let glm: GlmMessage = msg.into();
        assert_eq!(glm.content[0]["type"], "text");
        assert_eq!(glm.content[0]["text"], "menu attached");
    }

    #[test]
    fn test_chunk_deserialization() {
        let json = r#"{"id":"2024","choices":[{"index":0,"delta":{"content":"Hello","reasoning_content":null},"finish_reason":null}]}"#;
        let chunk: GlmStreamChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.choices.len(), 1);
        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("Hello"));
        assert!(chunk.choices[0].finish_reason.is_none());
    }

    #[test]
    fn test_finish_chunk_deserialization() {
        let json = r#"{"choices":[{"index":0,"delta":{},"finish_reason":"length"}]}"#;
        let chunk: GlmStreamChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.choices[0].finish_reason.as_deref(), Some("length"));
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"error":{"code":"1210","message":"API key invalid"}}"#;
        let err: GlmErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.code.as_deref(), Some("1210"));
        assert_eq!(err.error.message, "API key invalid");
    }
}
