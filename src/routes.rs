// Route definitions

use std::sync::Arc;
use warp::Filter;

use crate::handlers;
use crate::state::AppState;

/// Build the full filter tree: the four API routes plus CORS for the
/// configured frontend origins.
pub fn configure_routes(
    state: Arc<AppState>,
    frontend_origins: &[String],
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let mut cors = warp::cors()
        .allow_credentials(true)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"]);
    for origin in frontend_origins {
        cors = cors.allow_origin(origin.as_str());
    }

    api_routes(state).with(cors.build())
}

/// The API routes without CORS, used directly by endpoint tests
pub fn api_routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // POST /api/message
    let message = warp::path!("api" / "message")
        .and(warp::post())
        .and(with_state(Arc::clone(&state)))
        .and(warp::body::json())
        .and_then(handlers::message_handler);

    // POST /api/create-checkout-session
    let checkout = warp::path!("api" / "create-checkout-session")
        .and(warp::post())
        .and(with_state(Arc::clone(&state)))
        .and(warp::body::json())
        .and_then(handlers::checkout_handler);

    // POST /api/cancel-subscription
    let cancel = warp::path!("api" / "cancel-subscription")
        .and(warp::post())
        .and(with_state(Arc::clone(&state)))
        .and(warp::body::json())
        .and_then(handlers::cancel_subscription_handler);

    // POST /api/delete-account
    let delete_account = warp::path!("api" / "delete-account")
        .and(warp::post())
        .and(with_state(state))
        .and(warp::header::optional::<String>("authorization"))
        .and(warp::body::json())
        .and_then(handlers::delete_account_handler);

    message.or(checkout).or(cancel).or(delete_account)
}

fn with_state(
    state: Arc<AppState>,
) -> impl Filter<Extract = (Arc<AppState>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || Arc::clone(&state))
}
