//! GLM client implementation

use futures::StreamExt;
use reqwest::Client;

use crate::llm::error::LlmError;
use crate::llm::provider::{ChatProvider, EventStream, StreamChatFuture};
use crate::llm::types::ChatRequest;

use super::mapper::{from_glm_chunk, to_glm_request};
use super::sse::parse_sse_stream;
use super::types::GlmErrorResponse;

/// Default chat completions endpoint for the ZAI (BigModel) platform
const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";

/// GLM model identifiers
#[derive(Debug, Clone)]
pub enum GlmModel {
    /// GLM-4.6 flagship model (supports thinking mode, 8192 output tokens)
    Glm46,
}

impl GlmModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &str {
        match self {
            GlmModel::Glm46 => "glm-4.6",
        }
    }
}

/// Client for the GLM streaming chat completions API
pub struct GlmClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key sent as a bearer token
    api_key: String,
    /// API base URL (overridable for tests)
    base_url: String,
    /// Model to use
    model: GlmModel,
}

impl GlmClient {
    /// Create a new GLM client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: String, model: GlmModel) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        })
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the endpoint URL for streaming completions
    fn build_endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Make a streaming request to GLM
    async fn make_streaming_request(&self, request: ChatRequest) -> Result<EventStream, LlmError> {
        let glm_request = to_glm_request(request, self.model.as_str());

        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&glm_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            // Surface the provider's own error message when it sent one
            if let Ok(parsed) = serde_json::from_str::<GlmErrorResponse>(&body) {
                return Err(LlmError::ProviderError {
                    code: parsed.error.code.unwrap_or_else(|| status.to_string()),
                    message: parsed.error.message,
                });
            }
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let byte_stream = response.bytes_stream();
        let sse_stream = parse_sse_stream(Box::pin(byte_stream));

        let event_stream = sse_stream.flat_map(|result| match result {
            Ok(chunk) => futures::stream::iter(
                from_glm_chunk(chunk).into_iter().map(Ok).collect::<Vec<_>>(),
            ),
            Err(e) => futures::stream::iter(vec![Err(e)]),
        });

        Ok(Box::pin(event_stream))
    }
}

impl ChatProvider for GlmClient {
    fn stream_chat(&self, request: ChatRequest) -> StreamChatFuture<'_> {
        Box::pin(self.make_streaming_request(request))
    }
}
