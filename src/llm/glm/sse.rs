//! Server-Sent Events (SSE) parser for GLM streaming responses
//!
//! The completions endpoint streams OpenAI-style frames:
//!
//! ```text
//! data: {"id":"...","choices":[{"delta":{"content":"Hi"}}]}
//!
//! data: {"choices":[{"delta":{},"finish_reason":"stop"}]}
//!
//! data: [DONE]
//! ```
//!
//! This parser buffers incoming bytes, splits on the double-newline frame
//! boundary, strips the `data:` prefix, drops the `[DONE]` sentinel, and
//! decodes each remaining payload as a [`GlmStreamChunk`].

use bytes::Bytes;
use futures::stream::Stream;
use futures::StreamExt;
use std::pin::Pin;

use crate::llm::error::LlmError;

use super::types::GlmStreamChunk;

/// Parse a stream of bytes as GLM SSE chunks
pub fn parse_sse_stream(
    byte_stream: Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send + Sync>>,
) -> Pin<Box<dyn Stream<Item = Result<GlmStreamChunk, LlmError>> + Send + Sync>> {
    // Buffer to accumulate partial frames
    let mut buffer = String::new();

    let chunk_stream = byte_stream.flat_map(move |chunk_result| {
        let chunk = match chunk_result {
            Ok(bytes) => bytes,
            Err(e) => {
                return futures::stream::iter(vec![Err(LlmError::StreamError(e.to_string()))]);
            }
        };

        let text = match std::str::from_utf8(&chunk) {
            Ok(t) => t,
            Err(e) => {
                return futures::stream::iter(vec![Err(LlmError::StreamError(format!(
                    "Invalid UTF-8 in stream: {}",
                    e
                )))]);
            }
        };

        buffer.push_str(text);

        // Process complete frames (delimited by \n\n)
        let mut chunks = Vec::new();
        while let Some(frame_end) = buffer.find("\n\n") {
            let frame_text = buffer[..frame_end].to_string();
            buffer.drain(..=frame_end + 1);

            if let Some(parsed) = parse_frame(&frame_text) {
                chunks.push(parsed);
            }
        }

        futures::stream::iter(chunks)
    });

    Box::pin(chunk_stream)
}

/// Parse a single SSE frame from its text representation
fn parse_frame(frame_text: &str) -> Option<Result<GlmStreamChunk, LlmError>> {
    let mut data: Option<String> = None;

    for line in frame_text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(':') {
            continue;
        }
        if let Some(data_val) = line.strip_prefix("data:") {
            let data_val = data_val.trim();
            // Multiple data lines in one frame are joined with newlines
            match &mut data {
                Some(existing) => {
                    existing.push('\n');
                    existing.push_str(data_val);
                }
                None => data = Some(data_val.to_string()),
            }
        }
    }

    let data = data?;

    // Empty keep-alives and the end-of-stream sentinel carry no chunk
    if data.is_empty() || data == "[DONE]" {
        return None;
    }

    match serde_json::from_str::<GlmStreamChunk>(&data) {
        Ok(chunk) => Some(Ok(chunk)),
        Err(e) => Some(Err(LlmError::SerializationError(format!(
            "Failed to parse GLM SSE chunk: {}. Data: {}",
            e, data
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn test_parse_content_delta() {
        let data = b"data: {\"id\":\"c1\",\"choices\":[{\"index\":0,\"delta\":{\"content\":\"Hello\"},\"finish_reason\":null}]}\n\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut sse_stream = parse_sse_stream(byte_stream);
        let chunk = sse_stream.next().await.unwrap().unwrap();

        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("Hello"));
    }

    #[tokio::test]
    async fn test_parse_reasoning_delta() {
        let data = b"data: {\"choices\":[{\"index\":0,\"delta\":{\"reasoning_content\":\"planning pages\"}}]}\n\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut sse_stream = parse_sse_stream(byte_stream);
        let chunk = sse_stream.next().await.unwrap().unwrap();

        assert_eq!(
            chunk.choices[0].delta.reasoning_content.as_deref(),
            Some("planning pages")
        );
        assert!(chunk.choices[0].delta.content.is_none());
    }

    #[tokio::test]
    async fn test_parse_finish_reason() {
        let data =
            b"data: {\"choices\":[{\"index\":0,\"delta\":{},\"finish_reason\":\"length\"}]}\n\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut sse_stream = parse_sse_stream(byte_stream);
        let chunk = sse_stream.next().await.unwrap().unwrap();

        assert_eq!(chunk.choices[0].finish_reason.as_deref(), Some("length"));
    }

    #[tokio::test]
    async fn test_done_sentinel_is_dropped() {
        let data = b"data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"Hi\"}}]}\n\ndata: [DONE]\n\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut sse_stream = parse_sse_stream(byte_stream);
        assert!(sse_stream.next().await.is_some());
        assert!(sse_stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_parse_multiple_frames_in_one_read() {
        let data = b"data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"a\"}}]}\n\ndata: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"b\"}}]}\n\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut sse_stream = parse_sse_stream(byte_stream);
        let first = sse_stream.next().await.unwrap().unwrap();
        let second = sse_stream.next().await.unwrap().unwrap();

        assert_eq!(first.choices[0].delta.content.as_deref(), Some("a"));
        assert_eq!(second.choices[0].delta.content.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_parse_frame_split_across_reads() {
        let chunk1 = b"data: {\"choices\":[{\"index\":0,\"delta\":{\"cont";
        let chunk2 = b"ent\":\"Hello\"}}]}\n\n";

        let byte_stream = Box::pin(stream::iter(vec![
            Ok(Bytes::from_static(chunk1)),
            Ok(Bytes::from_static(chunk2)),
        ]));

        let mut sse_stream = parse_sse_stream(byte_stream);
        let chunk = sse_stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("Hello"));
    }

    #[tokio::test]
    async fn test_comment_lines_are_skipped() {
        let data = b": keep-alive\n\ndata: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"x\"}}]}\n\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut sse_stream = parse_sse_stream(byte_stream);
        let chunk = sse_stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_multiple_data_lines_join_with_newline() {
        // JSON tolerates the newline the join inserts between tokens
        let data = b"data: {\"choices\":[{\"index\":0,\"delta\":\ndata: {\"content\":\"split\"}}]}\n\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut sse_stream = parse_sse_stream(byte_stream);
        let chunk = sse_stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("split"));
    }

    #[tokio::test]
    async fn test_parse_invalid_json() {
        let data = b"data: {invalid json}\n\n";
        let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from_static(data))]));

        let mut sse_stream = parse_sse_stream(byte_stream);
        let result = sse_stream.next().await.unwrap();
        assert!(result.is_err());
    }
}
