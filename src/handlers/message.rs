// POST /api/message handler

use futures_util::StreamExt;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Reply;

use crate::guard;
use crate::models::{ErrorBody, MessageRequest, SiteFullBody};
use crate::prompt::OFF_TOPIC_REFUSAL;
use crate::relay::relay;
use crate::sse::frame_to_event;
use crate::state::AppState;

pub async fn message_handler(
    state: Arc<AppState>,
    request: MessageRequest,
) -> Result<warp::reply::Response, warp::Rejection> {
    if request.messages.is_empty() {
        let reply = warp::reply::json(&ErrorBody::new("No messages provided"));
        return Ok(warp::reply::with_status(reply, StatusCode::BAD_REQUEST).into_response());
    }

    // Policy pre-filter runs before the gate so a rejected request never
    // consumes a slot
    if guard::should_reject(&request.messages) {
        if let Some(text) = guard::latest_user_text(&request.messages) {
            let preview: String = text.chars().take(100).collect();
            tracing::info!(message = %preview, "blocked off-topic request");
        }
        let reply = warp::reply::json(&ErrorBody::new(OFF_TOPIC_REFUSAL));
        return Ok(warp::reply::with_status(reply, StatusCode::BAD_REQUEST).into_response());
    }

    let Some(provider) = state.chat.clone() else {
        tracing::error!("GLM client not configured; rejecting /api/message");
        let reply = warp::reply::json(&ErrorBody::new(
            "Server missing GLM_API_KEY. Set it in .env and restart the server.",
        ));
        return Ok(
            warp::reply::with_status(reply, StatusCode::INTERNAL_SERVER_ERROR).into_response(),
        );
    };

    let Some(slot) = state.gate.acquire_slot() else {
        tracing::warn!(
            current = state.gate.snapshot(),
            max = state.gate.capacity(),
            "site at capacity, rejecting request"
        );
        let reply = warp::reply::json(&SiteFullBody::new(
            state.gate.snapshot(),
            state.gate.capacity(),
        ));
        return Ok(
            warp::reply::with_status(reply, StatusCode::SERVICE_UNAVAILABLE).into_response(),
        );
    };

    tracing::info!(
        active = state.gate.snapshot(),
        max = state.gate.capacity(),
        "connection acquired"
    );

    let frames = relay(provider, slot, request.messages);
    let events = frames.map(frame_to_event);

    Ok(warp::sse::reply(warp::sse::keep_alive().stream(events)).into_response())
}
