//! Core types for the LLM abstraction layer

use serde::{Deserialize, Serialize};

/// Request to stream a chat completion from an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation history
    pub messages: Vec<ChatMessage>,
    /// System prompt/instructions
    pub system: Option<String>,
    /// Generation parameters
    pub config: GenerationConfig,
}

/// A single message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content, either a plain string or structured parts
    pub content: MessageContent,
}

impl ChatMessage {
    /// Create a new user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create a new assistant message with text content
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instructions to the model
    System,
    /// Human input
    User,
    /// Model output
    Assistant,
}

/// Message content: web clients send either a bare string or an array of
/// typed parts (text plus attachments)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Simple text content
    Text(String),
    /// Array of content parts
    Parts(Vec<ContentPart>),
}

/// One part of a structured message.
///
/// Non-text parts (images, files) are passed through to the provider
/// untouched; `extra` keeps their fields intact across the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPart {
    /// Part type ("text", "image_url", ...)
    #[serde(rename = "type")]
    pub part_type: String,
    /// Text payload, present when `part_type` is "text"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Any provider-specific fields, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Parameters for controlling text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Randomness (0.0-1.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Ask the provider for its reasoning/deliberation channel
    pub thinking: bool,
}

impl GenerationConfig {
    /// Create a new configuration with the specified max tokens
    pub fn new(max_tokens: u32) -> Self {
        Self {
            max_tokens,
            temperature: None,
            thinking: false,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Enable the provider's reasoning mode
    pub fn with_thinking(mut self) -> Self {
        self.thinking = true;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: None,
            thinking: false,
        }
    }
}

/// Events emitted during streaming generation
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Incremental visible output text
    ContentDelta { text: String },
    /// Incremental reasoning text (secondary channel, never shown to users)
    ReasoningDelta { text: String },
    /// Terminal reason signaled by the provider
    Finished { reason: FinishReason },
}

/// Reason why generation finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    /// Natural completion
    Stop,
    /// Hit the output token limit
    Length,
    /// Model wants to call a tool
    ToolCalls,
    /// Blocked by the provider's content filters
    Sensitive,
    /// Provider-specific reason
    Other(String),
}

impl FinishReason {
    /// Parse a provider finish_reason string
    pub fn from_provider(reason: &str) -> Self {
        match reason {
            "stop" => FinishReason::Stop,
            "length" => FinishReason::Length,
            "tool_calls" => FinishReason::ToolCalls,
            "sensitive" => FinishReason::Sensitive,
            other => FinishReason::Other(other.to_string()),
        }
    }
}
