//! OpenAPI schema aggregation for the portal API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document for
//! docs and client generation.
use crate::api::{
    access, licenses, modules, system,
    types::{
        AccessDecisionResponse, ErrorResponse, HealthStatus, LicenseListResponse,
        ModuleAccessSummary, ModuleListResponse, SystemInfo,
    },
};
use crate::store::LicenseRecord;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "resilia-portal",
        version = "v1",
        description = "Resilia portal access-decision HTTP API"
    ),
    paths(
        system::system_info,
        system::system_health,
        access::access_decision,
        modules::list_modules,
        licenses::list_licenses,
        licenses::grant_license,
        licenses::revoke_license
    ),
    components(schemas(
        SystemInfo,
        HealthStatus,
        ErrorResponse,
        AccessDecisionResponse,
        ModuleAccessSummary,
        ModuleListResponse,
        LicenseRecord,
        LicenseListResponse
    )),
    tags(
        (name = "system", description = "System and health endpoints"),
        (name = "access", description = "Module access decisions"),
        (name = "licenses", description = "Organization license administration")
    )
)]
pub struct ApiDoc;
