//! License administration endpoints.
//!
//! # Purpose and responsibility
//! Lets system administrators inspect and mutate organization entitlements.
//! Grants and revocations take effect on the next access decision; nothing
//! is cached in the engine.
//!
//! # Security considerations
//! - Every endpoint requires the administrator capability flag; an ordinary
//!   role, however senior, is rejected with 403.
use crate::api::error::{api_internal, api_validation_error, ApiError};
use crate::api::require_system_admin;
use crate::api::types::LicenseListResponse;
use crate::app::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use resilia_access::{ModuleName, OrgId};

#[utoipa::path(
    get,
    path = "/v1/orgs/{org_id}/licenses",
    tag = "licenses",
    params(("org_id" = String, Path, description = "Organization identifier")),
    responses(
        (status = 200, description = "License records for the organization", body = LicenseListResponse),
        (status = 401, description = "Missing or invalid session token"),
        (status = 403, description = "Caller is not a system administrator")
    )
)]
/// List license records for an organization.
pub(crate) async fn list_licenses(
    Path(org_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LicenseListResponse>, ApiError> {
    require_system_admin(&state, &headers)?;
    let items = state
        .store
        .list_for_org(&OrgId::new(org_id))
        .await
        .map_err(|err| api_internal("failed to list licenses", &err))?;
    Ok(Json(LicenseListResponse { items }))
}

#[utoipa::path(
    put,
    path = "/v1/orgs/{org_id}/licenses/{module}",
    tag = "licenses",
    params(
        ("org_id" = String, Path, description = "Organization identifier"),
        ("module" = String, Path, description = "Module display name")
    ),
    responses(
        (status = 204, description = "License granted"),
        (status = 400, description = "Module is not license-gated"),
        (status = 401, description = "Missing or invalid session token"),
        (status = 403, description = "Caller is not a system administrator")
    )
)]
/// Grant an organization a module license.
///
/// # Errors
/// - 400 when the module is unknown or not license-gated; entitlement rows
///   for open or role-only modules would never be read.
pub(crate) async fn grant_license(
    Path((org_id, module)): Path<(String, String)>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    require_system_admin(&state, &headers)?;
    let module = ensure_license_gated(&state, module)?;
    state
        .store
        .set_licensed(&OrgId::new(org_id), &module, true)
        .await
        .map_err(|err| api_internal("failed to grant license", &err))?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/v1/orgs/{org_id}/licenses/{module}",
    tag = "licenses",
    params(
        ("org_id" = String, Path, description = "Organization identifier"),
        ("module" = String, Path, description = "Module display name")
    ),
    responses(
        (status = 204, description = "License revoked"),
        (status = 400, description = "Module is not license-gated"),
        (status = 401, description = "Missing or invalid session token"),
        (status = 403, description = "Caller is not a system administrator")
    )
)]
/// Revoke an organization's module license.
pub(crate) async fn revoke_license(
    Path((org_id, module)): Path<(String, String)>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    require_system_admin(&state, &headers)?;
    let module = ensure_license_gated(&state, module)?;
    state
        .store
        .set_licensed(&OrgId::new(org_id), &module, false)
        .await
        .map_err(|err| api_internal("failed to revoke license", &err))?;
    Ok(StatusCode::NO_CONTENT)
}

fn ensure_license_gated(state: &AppState, module: String) -> Result<ModuleName, ApiError> {
    let module = ModuleName::new(module);
    match state.catalog.entry(&module) {
        Some(entry) if entry.rule.requires_license() => Ok(module),
        Some(_) => Err(api_validation_error("module is not license-gated")),
        None => Err(api_validation_error("unknown module")),
    }
}
