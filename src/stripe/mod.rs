//! Stripe payments integration
//!
//! Checkout-session creation and subscription cancellation, proxied for the
//! frontend. The secret key never leaves the server.

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::StripeClient;
pub use error::StripeError;
pub use types::{CheckoutSession, CheckoutSessionParams, Subscription};
