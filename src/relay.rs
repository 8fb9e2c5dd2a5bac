//! Stream relay: bridges one upstream generation call to one downstream
//! event stream
//!
//! The relay owns the gate slot for the lifetime of the stream. The
//! [`SlotGuard`] is moved into the generator, so the slot is released
//! exactly once whenever the generator is torn down: normal completion,
//! upstream failure, or the client disconnecting and dropping the response
//! body mid-stream.

use async_stream::stream;
use futures::stream::Stream;
use futures::StreamExt;
use pin_utils::pin_mut;
use std::sync::Arc;

use crate::gate::SlotGuard;
use crate::llm::{
    ChatMessage, ChatProvider, ChatRequest, FinishReason, GenerationConfig, StreamEvent,
};
use crate::prompt::{SYSTEM_PROMPT, TRUNCATION_NOTICE};

/// Max output tokens supported by GLM-4.6
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Sampling temperature used for every generation
const TEMPERATURE: f32 = 0.95;

/// One downstream frame of a relayed response.
///
/// `Complete` and `Error` are terminal: every relay emits exactly one of
/// them, as its last frame.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayFrame {
    /// Incremental visible text
    Chunk(String),
    /// Successful completion carrying the full accumulated text
    Complete(String),
    /// Failure; the stream ends here instead of a `Complete`
    Error(String),
}

impl RelayFrame {
    /// Whether this frame ends the stream
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RelayFrame::Chunk(_))
    }
}

/// Relay one conversation through the provider, yielding downstream frames.
///
/// Preconditions: the caller has already acquired `slot`; the relay releases
/// it when the returned stream is dropped or runs to completion.
///
/// Guarantees:
/// - frames are emitted in upstream production order, one per content delta
/// - reasoning deltas are accumulated for diagnostics and never emitted
/// - a `length` finish reason appends the truncation notice as one extra
///   chunk before the terminal frame
/// - exactly one terminal frame is emitted, last
/// - the task yields after every emission so concurrent relays interleave
pub fn relay(
    provider: Arc<dyn ChatProvider>,
    slot: SlotGuard,
    messages: Vec<ChatMessage>,
) -> impl Stream<Item = RelayFrame> + Send {
    stream! {
        // Owned by the generator: dropped (and the slot released) on every
        // exit path, including the stream being dropped mid-flight.
        let _slot = slot;

        let request = ChatRequest {
            messages,
            system: Some(SYSTEM_PROMPT.to_string()),
            config: GenerationConfig::new(MAX_OUTPUT_TOKENS)
                .with_temperature(TEMPERATURE)
                .with_thinking(),
        };

        let upstream = match provider.stream_chat(request).await {
            Ok(stream) => stream,
            Err(e) => {
                tracing::error!(error = %e, "failed to open upstream generation stream");
                yield RelayFrame::Error(e.to_string());
                return;
            }
        };
        pin_mut!(upstream);

        let mut full_content = String::new();
        let mut reasoning_chars = 0usize;
        let mut finish_reason = None;

        while let Some(event) = upstream.next().await {
            match event {
                Ok(StreamEvent::ContentDelta { text }) => {
                    full_content.push_str(&text);
                    yield RelayFrame::Chunk(text);
                    // Let other in-flight relays make progress between chunks
                    tokio::task::yield_now().await;
                }
                Ok(StreamEvent::ReasoningDelta { text }) => {
                    // Diagnostics only; the reasoning channel never reaches
                    // the client
                    reasoning_chars += text.len();
                }
                Ok(StreamEvent::Finished { reason }) => {
                    finish_reason = Some(reason);
                }
                Err(e) => {
                    tracing::error!(error = %e, "upstream stream failed mid-generation");
                    yield RelayFrame::Error(e.to_string());
                    return;
                }
            }
        }

        if reasoning_chars > 0 {
            tracing::debug!(reasoning_chars, "model used reasoning channel");
        }

        if finish_reason == Some(FinishReason::Length) {
            tracing::warn!("response truncated at the output token limit");
            full_content.push_str(TRUNCATION_NOTICE);
            yield RelayFrame::Chunk(TRUNCATION_NOTICE.to_string());
        }

        yield RelayFrame::Complete(full_content);
    }
}
