//! Supabase client implementation
//!
//! Row deletion goes through the PostgREST endpoint, auth-user deletion
//! through the GoTrue admin API. Both authenticate with the service-role
//! key, so this client must only ever run server-side.

use async_trait::async_trait;
use reqwest::Client;

use super::error::SupabaseError;
use super::UserDataStore;

/// Client for the Supabase REST and Admin APIs
pub struct SupabaseClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Project base URL (https://<project>.supabase.co)
    base_url: String,
    /// Service-role key (bypasses row-level security)
    service_role_key: String,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, service_role_key: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key,
        }
    }

    fn check(status: reqwest::StatusCode, body: String) -> Result<(), SupabaseError> {
        // PostgREST answers 200 or 204 for deletes depending on preference
        // headers
        if status.is_success() {
            Ok(())
        } else {
            Err(SupabaseError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn delete(&self, url: String) -> Result<(), SupabaseError> {
        let response = self
            .http_client
            .delete(&url)
            .header("apikey", &self.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.service_role_key),
            )
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_else(|_| String::new());
        Self::check(status, body)
    }
}

#[async_trait]
impl UserDataStore for SupabaseClient {
    async fn delete_rows(&self, table: &str, user_id: &str) -> Result<(), SupabaseError> {
        let url = format!("{}/rest/v1/{}?id=eq.{}", self.base_url, table, user_id);
        self.delete(url).await
    }

    async fn delete_auth_user(&self, user_id: &str) -> Result<(), SupabaseError> {
        let url = format!("{}/auth/v1/admin/users/{}", self.base_url, user_id);
        self.delete(url).await
    }
}
