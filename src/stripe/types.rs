//! Stripe API response types
//!
//! Only the fields the proxies surface are modeled; everything else in
//! Stripe's payloads is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Parameters for creating a subscription checkout session
#[derive(Debug, Clone)]
pub struct CheckoutSessionParams {
    /// Stripe price to subscribe to
    pub price_id: String,
    /// Redirect after successful payment
    pub success_url: String,
    /// Redirect after abandoning checkout
    pub cancel_url: String,
    /// Pre-filled customer email
    pub customer_email: Option<String>,
    /// Caller-supplied reference propagated to webhooks
    pub client_reference_id: Option<String>,
}

/// A created checkout session
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Session ID handed to the frontend for redirect
    pub id: String,
}

/// The slice of a Stripe subscription the cancel proxy reports back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID
    pub id: String,
    /// Subscription status ("active", "canceled", ...)
    pub status: String,
    /// Whether the subscription ends at the current period boundary
    #[serde(default)]
    pub cancel_at_period_end: bool,
    /// Unix timestamp of the current period end
    #[serde(default)]
    pub current_period_end: Option<i64>,
}

/// Error envelope returned by Stripe on failures
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details
    pub error: StripeErrorData,
}

/// Error details
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorData {
    /// Error category ("invalid_request_error", "api_error", ...)
    #[serde(rename = "type", default)]
    pub error_type: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}
