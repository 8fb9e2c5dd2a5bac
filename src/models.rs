// HTTP request and response body types

use serde::{Deserialize, Serialize};

use crate::llm::ChatMessage;

/// Body of `POST /api/message`
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    /// Conversation history, oldest first
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Body of `POST /api/create-checkout-session`
///
/// Required fields arrive as options so the handler can answer with its own
/// 400 body instead of a generic deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub price_id: Option<String>,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
    pub customer_email: Option<String>,
    pub client_reference_id: Option<String>,
}

/// Body of `POST /api/cancel-subscription`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub stripe_subscription_id: Option<String>,
}

/// Body of `POST /api/delete-account`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub user_id: Option<String>,
}

/// Generic `{"error": ...}` body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 503 body returned when the admission gate is full
#[derive(Debug, Clone, Serialize)]
pub struct SiteFullBody {
    /// Always "SITE_FULL"
    pub error: &'static str,
    /// Human-readable explanation
    pub message: &'static str,
    /// Gate count at rejection time (informational)
    pub current_users: usize,
    /// Gate capacity
    pub max_users: usize,
}

impl SiteFullBody {
    pub fn new(current_users: usize, max_users: usize) -> Self {
        Self {
            error: "SITE_FULL",
            message: crate::prompt::SITE_FULL_MESSAGE,
            current_users,
            max_users,
        }
    }
}

/// Success body of `POST /api/create-checkout-session`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub session_id: String,
}

/// Success body of `POST /api/cancel-subscription`
#[derive(Debug, Clone, Serialize)]
pub struct CancelResponse {
    pub success: bool,
    pub subscription: crate::stripe::Subscription,
}

/// Success body of `POST /api/delete-account`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
