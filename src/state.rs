//! Shared application state
//!
//! One `AppState` is built at startup and cloned (via `Arc`) into every
//! request handler. External clients are optional: a missing secret leaves
//! the slot `None` and the corresponding endpoint answers with a
//! configuration error.

use std::sync::Arc;

use crate::config::Config;
use crate::gate::AdmissionGate;
use crate::llm::{ChatProvider, GlmClient, GlmModel};
use crate::stripe::StripeClient;
use crate::supabase::{SupabaseClient, UserDataStore};

/// Everything the handlers share
pub struct AppState {
    /// Global concurrency gate for generation streams
    pub gate: Arc<AdmissionGate>,
    /// Upstream model client, if GLM_API_KEY is configured
    pub chat: Option<Arc<dyn ChatProvider>>,
    /// Stripe client, if STRIPE_SECRET_KEY is configured
    pub stripe: Option<Arc<StripeClient>>,
    /// Account data store, if Supabase is configured
    pub accounts: Option<Arc<dyn UserDataStore>>,
}

impl AppState {
    /// Build state from configuration
    pub fn from_config(config: &Config) -> Arc<Self> {
        let chat = config.glm_api_key.clone().and_then(|api_key| {
            match GlmClient::new(api_key, GlmModel::Glm46) {
                Ok(client) => Some(Arc::new(client) as Arc<dyn ChatProvider>),
                Err(e) => {
                    tracing::error!(error = %e, "failed to build GLM client");
                    None
                }
            }
        });

        let stripe = config
            .stripe_secret_key
            .clone()
            .map(|secret_key| Arc::new(StripeClient::new(secret_key)));

        let accounts = match (&config.supabase_url, &config.supabase_service_key) {
            (Some(url), Some(key)) => Some(Arc::new(SupabaseClient::new(
                url.clone(),
                key.clone(),
            )) as Arc<dyn UserDataStore>),
            _ => None,
        };

        Arc::new(Self {
            gate: Arc::new(AdmissionGate::new(config.max_connections)),
            chat,
            stripe,
            accounts,
        })
    }
}
