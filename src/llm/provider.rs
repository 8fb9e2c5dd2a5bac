//! Provider trait for LLM implementations

use futures::stream::Stream;
use std::future::Future;
use std::pin::Pin;

use super::error::LlmError;
use super::types::{ChatRequest, StreamEvent};

/// Stream of events representing one incremental model response
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, LlmError>> + Send + Sync>>;

/// Boxed future returned by [`ChatProvider::stream_chat`].
///
/// `Sync` is required so the relay stream built on top of it satisfies
/// `warp::sse::reply`'s `Sync` bound.
pub type StreamChatFuture<'a> =
    Pin<Box<dyn Future<Output = Result<EventStream, LlmError>> + Send + Sync + 'a>>;

/// Main interface that all LLM provider implementations must satisfy
///
/// The relay only ever talks to this trait, so tests can substitute a
/// scripted provider for the real GLM client.
pub trait ChatProvider: Send + Sync {
    /// Open one streaming generation call.
    ///
    /// Returns a stream of incremental events (content deltas, reasoning
    /// deltas, and a terminal finish reason), or an error if the request
    /// could not be opened at all.
    fn stream_chat(&self, request: ChatRequest) -> StreamChatFuture<'_>;
}
