//! Portal HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules and the shared helper that turns a bearer
//! session token into a principal.
pub mod access;
pub mod error;
pub mod licenses;
pub mod modules;
pub mod openapi;
pub mod system;
pub mod types;

use crate::api::error::{api_forbidden, api_unauthorized, ApiError};
use crate::app::AppState;
use crate::auth::extract_bearer;
use axum::http::HeaderMap;
use resilia_access::Principal;

pub(crate) fn require_principal(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Principal, ApiError> {
    let bearer = extract_bearer(headers).ok_or_else(|| api_unauthorized("missing bearer token"))?;
    state.verifier.resolve(bearer).map_err(|err| {
        tracing::debug!(error = %err, "session rejected");
        api_unauthorized("invalid session token")
    })
}

pub(crate) fn require_system_admin(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Principal, ApiError> {
    let principal = require_principal(state, headers)?;
    if !principal.is_system_admin {
        return Err(api_forbidden("system administrator capability required"));
    }
    Ok(principal)
}
