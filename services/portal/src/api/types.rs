//! HTTP API request/response types.
//!
//! # Purpose
//! Defines shared payload shapes for the portal REST API and OpenAPI schema
//! generation.
use crate::store::LicenseRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SystemInfo {
    pub service: String,
    pub api_version: String,
    pub module_count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

/// Outcome of one access evaluation, as surfaced to the navigation layer.
///
/// `lock_path` is present exactly when the decision denies; it is the
/// percent-encoded redirect target naming the locked module.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccessDecisionResponse {
    pub module: String,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_path: Option<String>,
}

/// One catalog module evaluated for the calling principal.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModuleAccessSummary {
    pub name: String,
    pub path: String,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModuleListResponse {
    pub modules: Vec<ModuleAccessSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LicenseListResponse {
    pub items: Vec<LicenseRecord>,
}
