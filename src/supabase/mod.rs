//! Supabase integration for account deletion
//!
//! The deletion handler talks to the [`UserDataStore`] trait rather than the
//! concrete client so the ordered-deletion orchestration can be tested with
//! a scripted store.

pub mod client;
pub mod error;

use async_trait::async_trait;

pub use client::SupabaseClient;
pub use error::SupabaseError;

/// Tables holding per-user rows, deleted in this order so foreign-key
/// constraints are respected before the profile row goes away
pub const USER_DATA_TABLES: [&str; 4] = ["payments", "subscriptions", "projects", "user_profiles"];

/// Store of per-user data that an account deletion must clear
#[async_trait]
pub trait UserDataStore: Send + Sync {
    /// Delete this user's rows from one table
    async fn delete_rows(&self, table: &str, user_id: &str) -> Result<(), SupabaseError>;

    /// Delete the identity record itself
    async fn delete_auth_user(&self, user_id: &str) -> Result<(), SupabaseError>;
}
