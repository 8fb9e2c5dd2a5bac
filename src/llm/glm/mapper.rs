//! Mapping between abstraction types and GLM-specific types

use crate::llm::types::{ChatRequest, FinishReason, MessageRole, StreamEvent};

use super::types::{GlmChatRequest, GlmMessage, GlmStreamChunk, GlmThinking};

/// Convert our abstraction request to GLM's request format
///
/// The system prompt becomes the leading message of the array, which is how
/// the completions API expects it.
pub fn to_glm_request(request: ChatRequest, model: &str) -> GlmChatRequest {
    let mut messages: Vec<GlmMessage> = Vec::with_capacity(request.messages.len() + 1);

    if let Some(system) = request.system {
        messages.push(GlmMessage {
            role: role_str(MessageRole::System).to_string(),
            content: serde_json::Value::String(system),
        });
    }
    messages.extend(request.messages.into_iter().map(GlmMessage::from));

    GlmChatRequest {
        model: model.to_string(),
        messages,
        max_tokens: request.config.max_tokens,
        temperature: request.config.temperature,
        stream: true,
        thinking: request.config.thinking.then(GlmThinking::enabled),
    }
}

fn role_str(role: MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    }
}

/// Convert a GLM stream chunk to abstraction events
///
/// Returns a vector because one chunk can carry reasoning text, content text
/// and a finish reason at the same time.
pub fn from_glm_chunk(chunk: GlmStreamChunk) -> Vec<StreamEvent> {
    let mut events = Vec::new();

    let Some(choice) = chunk.choices.into_iter().next() else {
        return events;
    };

    if let Some(text) = choice.delta.reasoning_content {
        if !text.is_empty() {
            events.push(StreamEvent::ReasoningDelta { text });
        }
    }

    if let Some(text) = choice.delta.content {
        if !text.is_empty() {
            events.push(StreamEvent::ContentDelta { text });
        }
    }

    if let Some(reason) = choice.finish_reason {
        events.push(StreamEvent::Finished {
            reason: FinishReason::from_provider(&reason),
        });
    }

    events
}
