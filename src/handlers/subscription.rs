// POST /api/cancel-subscription handler

use std::sync::Arc;
use warp::http::StatusCode;
use warp::Reply;

use crate::models::{CancelRequest, CancelResponse, ErrorBody};
use crate::state::AppState;
use crate::stripe::StripeError;

pub async fn cancel_subscription_handler(
    state: Arc<AppState>,
    request: CancelRequest,
) -> Result<warp::reply::Response, warp::Rejection> {
    let Some(stripe) = state.stripe.clone() else {
        tracing::error!("STRIPE_SECRET_KEY not configured");
        let reply = warp::reply::json(&ErrorBody::new("Stripe not configured on server"));
        return Ok(
            warp::reply::with_status(reply, StatusCode::INTERNAL_SERVER_ERROR).into_response(),
        );
    };

    let Some(subscription_id) = request.stripe_subscription_id else {
        tracing::warn!("cancel request missing stripeSubscriptionId");
        let reply = warp::reply::json(&ErrorBody::new("Missing stripeSubscriptionId"));
        return Ok(warp::reply::with_status(reply, StatusCode::BAD_REQUEST).into_response());
    };

    tracing::info!(subscription_id = %subscription_id, "canceling Stripe subscription");

    match stripe.cancel_at_period_end(&subscription_id).await {
        Ok(subscription) => {
            tracing::info!(
                subscription_id = %subscription.id,
                access_until = subscription.current_period_end,
                "Stripe subscription canceled"
            );
            let reply = warp::reply::json(&CancelResponse {
                success: true,
                subscription,
            });
            Ok(warp::reply::with_status(reply, StatusCode::OK).into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "subscription cancellation failed");
            let status = match e {
                StripeError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let reply = warp::reply::json(&ErrorBody::new(e.to_string()));
            Ok(warp::reply::with_status(reply, status).into_response())
        }
    }
}
