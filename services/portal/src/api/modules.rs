//! Module navigation listing.
//!
//! # Purpose and responsibility
//! Evaluates every catalog entry for the calling principal so the shell can
//! render the navigation with locked/unlocked state in one round trip.
use crate::api::error::ApiError;
use crate::api::require_principal;
use crate::api::types::{ModuleAccessSummary, ModuleListResponse};
use crate::app::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

#[utoipa::path(
    get,
    path = "/v1/modules",
    tag = "access",
    responses(
        (status = 200, description = "Catalog evaluated for the caller", body = ModuleListResponse),
        (status = 401, description = "Missing or invalid session token")
    )
)]
/// List the catalog with the caller's access state per module.
///
/// # What it does
/// Runs one decision per catalog entry in declaration order. License-gated
/// entries each perform their own lookup; there is no cross-entry caching,
/// so a revocation shows up on the next call.
///
/// # Errors
/// - 401 when the bearer token is missing or fails verification.
pub(crate) async fn list_modules(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ModuleListResponse>, ApiError> {
    let principal = require_principal(&state, &headers)?;

    let mut modules = Vec::with_capacity(state.catalog.len());
    for entry in state.catalog.entries() {
        let decision = state.engine.decide(&principal, &entry.name).await;
        modules.push(ModuleAccessSummary {
            name: entry.name.to_string(),
            path: entry.path.clone(),
            allowed: decision.allowed,
            reason: decision.reason_code().map(str::to_string),
        });
    }
    Ok(Json(ModuleListResponse { modules }))
}
