//! LLM Abstraction Layer
//!
//! This module provides a unified streaming interface over chat completion
//! providers. The only production provider is GLM-4.6; the trait seam exists
//! so the relay can be exercised with scripted providers in tests.

pub mod error;
pub mod glm;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use error::LlmError;
pub use glm::{GlmClient, GlmModel};
pub use provider::{ChatProvider, EventStream, StreamChatFuture};
pub use types::{
    ChatMessage, ChatRequest, ContentPart, FinishReason, GenerationConfig, MessageContent,
    MessageRole, StreamEvent,
};
