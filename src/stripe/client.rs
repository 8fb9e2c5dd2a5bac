//! Stripe client implementation
//!
//! Thin wrapper over Stripe's form-encoded REST API. Exactly two operations
//! are needed: creating a subscription checkout session and flagging a
//! subscription to cancel at period end.

use reqwest::Client;

use super::error::StripeError;
use super::types::{CheckoutSession, CheckoutSessionParams, StripeErrorResponse, Subscription};

/// Stripe REST API base URL
const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Client for the Stripe REST API
pub struct StripeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Secret key sent as a bearer token
    secret_key: String,
    /// API base URL (overridable for tests)
    base_url: String,
}

impl StripeClient {
    /// Create a new Stripe client from a secret key
    pub fn new(secret_key: String) -> Self {
        Self {
            http_client: Client::new(),
            secret_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a subscription-mode checkout session (card, quantity 1)
    pub async fn create_checkout_session(
        &self,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, StripeError> {
        let mut form: Vec<(&str, String)> = vec![
            ("payment_method_types[0]", "card".to_string()),
            ("line_items[0][price]", params.price_id),
            ("line_items[0][quantity]", "1".to_string()),
            ("mode", "subscription".to_string()),
            ("success_url", params.success_url),
            ("cancel_url", params.cancel_url),
        ];
        if let Some(email) = params.customer_email {
            form.push(("customer_email", email));
        }
        if let Some(reference) = params.client_reference_id {
            form.push(("client_reference_id", reference));
        }

        let url = format!("{}/checkout/sessions", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Flag a subscription to cancel when the current billing period ends.
    /// The customer keeps access until then.
    pub async fn cancel_at_period_end(
        &self,
        subscription_id: &str,
    ) -> Result<Subscription, StripeError> {
        let url = format!("{}/subscriptions/{}", self.base_url, subscription_id);
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&[("cancel_at_period_end", "true")])
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Decode a Stripe response, mapping its error envelope onto
    /// [`StripeError`] categories
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StripeError> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body)
                .map_err(|e| StripeError::Api(format!("unexpected Stripe response: {}", e)));
        }

        let body = response.text().await.unwrap_or_else(|_| String::new());
        match serde_json::from_str::<StripeErrorResponse>(&body) {
            Ok(parsed) if parsed.error.error_type == "invalid_request_error" => {
                Err(StripeError::InvalidRequest(parsed.error.message))
            }
            Ok(parsed) => Err(StripeError::Api(parsed.error.message)),
            Err(_) => Err(StripeError::Api(format!("HTTP {}: {}", status, body))),
        }
    }
}
