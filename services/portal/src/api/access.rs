//! Access decision endpoint.
//!
//! # Purpose and responsibility
//! Evaluates the rule chain for one module on behalf of the calling session
//! and returns the decision plus, on denial, the lock-screen redirect path.
//!
//! # Where it fits
//! The navigation layer calls this before entering a module and either
//! proceeds or redirects to `lock_path`.
//!
//! # Key invariants and assumptions
//! - The decision itself is always a 200; only a missing/invalid session is
//!   an error status.
//! - Denials expose the generic reason code and the module's public name,
//!   nothing else.
use crate::api::error::ApiError;
use crate::api::require_principal;
use crate::api::types::AccessDecisionResponse;
use crate::app::AppState;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use resilia_access::{ModuleCatalog, ModuleName};

#[utoipa::path(
    get,
    path = "/v1/access/{module}",
    tag = "access",
    params(("module" = String, Path, description = "Module display name")),
    responses(
        (status = 200, description = "Access decision for the module", body = AccessDecisionResponse),
        (status = 401, description = "Missing or invalid session token")
    )
)]
/// Decide whether the calling principal may enter a module.
///
/// # What it does
/// Resolves the session to a principal, runs the decision engine, and maps
/// the outcome onto the navigation contract.
///
/// # Errors
/// - 401 when the bearer token is missing or fails verification.
pub(crate) async fn access_decision(
    Path(module): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AccessDecisionResponse>, ApiError> {
    let principal = require_principal(&state, &headers)?;
    let module = ModuleName::new(module);
    let decision = state.engine.decide(&principal, &module).await;

    let lock_path = (!decision.allowed).then(|| ModuleCatalog::lock_path(&module));
    Ok(Json(AccessDecisionResponse {
        module: module.to_string(),
        allowed: decision.allowed,
        reason: decision.reason_code().map(str::to_string),
        lock_path,
    }))
}
