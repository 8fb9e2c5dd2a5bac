// POST /api/create-checkout-session handler

use std::sync::Arc;
use warp::http::StatusCode;
use warp::Reply;

use crate::models::{CheckoutRequest, CheckoutResponse, ErrorBody};
use crate::state::AppState;
use crate::stripe::{CheckoutSessionParams, StripeError};

pub async fn checkout_handler(
    state: Arc<AppState>,
    request: CheckoutRequest,
) -> Result<warp::reply::Response, warp::Rejection> {
    let Some(stripe) = state.stripe.clone() else {
        tracing::error!("STRIPE_SECRET_KEY not configured");
        let reply = warp::reply::json(&ErrorBody::new("Stripe not configured on server"));
        return Ok(
            warp::reply::with_status(reply, StatusCode::INTERNAL_SERVER_ERROR).into_response(),
        );
    };

    // Validate before any external call
    let (Some(price_id), Some(success_url), Some(cancel_url)) = (
        request.price_id,
        request.success_url,
        request.cancel_url,
    ) else {
        tracing::warn!("checkout request missing required fields");
        let reply = warp::reply::json(&ErrorBody::new(
            "Missing required fields: priceId, successUrl, or cancelUrl",
        ));
        return Ok(warp::reply::with_status(reply, StatusCode::BAD_REQUEST).into_response());
    };

    tracing::info!(
        price_id = %price_id,
        email = request.customer_email.as_deref().unwrap_or(""),
        "creating Stripe checkout session"
    );

    let params = CheckoutSessionParams {
        price_id,
        success_url,
        cancel_url,
        customer_email: request.customer_email,
        client_reference_id: request.client_reference_id,
    };

    match stripe.create_checkout_session(params).await {
        Ok(session) => {
            tracing::info!(session_id = %session.id, "Stripe session created");
            let reply = warp::reply::json(&CheckoutResponse {
                session_id: session.id,
            });
            Ok(warp::reply::with_status(reply, StatusCode::OK).into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "checkout session creation failed");
            let status = match e {
                StripeError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let reply = warp::reply::json(&ErrorBody::new(e.to_string()));
            Ok(warp::reply::with_status(reply, status).into_response())
        }
    }
}
