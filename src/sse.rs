use serde_json::json;
use std::convert::Infallible;
use warp::sse::Event;

use crate::relay::RelayFrame;

/// Create a chunk SSE event carrying one piece of incremental text
pub fn create_chunk_event(chunk: String) -> Result<Event, Infallible> {
    let payload = json!({
        "chunk": chunk,
        "done": false
    });

    Ok(Event::default().data(payload.to_string()))
}

/// Create the terminal SSE event for a successful completion
pub fn create_complete_event(content: String) -> Result<Event, Infallible> {
    let payload = json!({
        "content": content,
        "done": true
    });

    Ok(Event::default().data(payload.to_string()))
}

/// Create the terminal SSE event for a failed generation
pub fn create_error_event(error: String) -> Result<Event, Infallible> {
    let payload = json!({
        "error": error,
        "done": true
    });

    Ok(Event::default().data(payload.to_string()))
}

/// Convert a relay frame into its SSE wire event
pub fn frame_to_event(frame: RelayFrame) -> Result<Event, Infallible> {
    match frame {
        RelayFrame::Chunk(chunk) => create_chunk_event(chunk),
        RelayFrame::Complete(content) => create_complete_event(content),
        RelayFrame::Error(error) => create_error_event(error),
    }
}
