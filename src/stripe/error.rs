//! Error types for the Stripe client

use thiserror::Error;

/// Errors returned by the Stripe API layer
#[derive(Debug, Error)]
pub enum StripeError {
    /// Stripe rejected the request as malformed (maps to a client error)
    #[error("Invalid Stripe request: {0}")]
    InvalidRequest(String),

    /// Any other Stripe-side failure (maps to a server error)
    #[error("Stripe error: {0}")]
    Api(String),

    /// Transport-level failure before Stripe answered
    #[error("Stripe request failed: {0}")]
    Http(#[from] reqwest::Error),
}
