//! Environment-driven configuration
//!
//! Every external dependency is keyed off an environment variable. Missing
//! secrets degrade the corresponding endpoint to a configuration error at
//! request time instead of preventing startup; the gaps are logged loudly
//! when the server boots.

use std::env;

/// Default number of simultaneous generation streams
pub const DEFAULT_MAX_CONNECTIONS: usize = 16;

/// Server configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Allowed CORS origins (FRONTEND_URL, comma-separated)
    pub frontend_origins: Vec<String>,
    /// GLM API key (GLM_API_KEY)
    pub glm_api_key: Option<String>,
    /// Stripe secret key (STRIPE_SECRET_KEY)
    pub stripe_secret_key: Option<String>,
    /// Supabase project URL (SUPABASE_URL)
    pub supabase_url: Option<String>,
    /// Supabase service-role key (SUPABASE_SERVICE_KEY)
    pub supabase_service_key: Option<String>,
    /// Listen port (PORT)
    pub port: u16,
    /// Admission gate capacity (MAX_CONNECTIONS)
    pub max_connections: usize,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        let frontend_origins = env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            frontend_origins,
            glm_api_key: non_empty_var("GLM_API_KEY"),
            stripe_secret_key: non_empty_var("STRIPE_SECRET_KEY"),
            supabase_url: non_empty_var("SUPABASE_URL"),
            supabase_service_key: non_empty_var("SUPABASE_SERVICE_KEY"),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(5000),
            max_connections: env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|max| max.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }

    /// Log a warning for every missing secret so misconfiguration is visible
    /// at startup, not just on first use
    pub fn warn_missing(&self) {
        if self.glm_api_key.is_none() {
            tracing::warn!("GLM_API_KEY not set; /api/message will return a configuration error");
        }
        if self.stripe_secret_key.is_none() {
            tracing::warn!("STRIPE_SECRET_KEY not set; Stripe checkout will not work");
        }
        if self.supabase_url.is_none() || self.supabase_service_key.is_none() {
            tracing::warn!("Supabase not configured; account deletion will not work");
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
