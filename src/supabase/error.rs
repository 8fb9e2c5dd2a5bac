//! Error types for the Supabase client

use thiserror::Error;

/// Errors returned by the Supabase REST layer
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Supabase answered with a non-success status
    #[error("Supabase error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure
    #[error("Supabase request failed: {0}")]
    Http(#[from] reqwest::Error),
}
