//! Portal HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! This module centralizes route composition to keep `main` small and testable.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::auth::session::SessionVerifier;
use crate::store::LicenseStore;
use axum::Router;
use resilia_access::{DecisionEngine, ModuleCatalog};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub api_version: String,
    pub catalog: Arc<ModuleCatalog>,
    pub engine: DecisionEngine,
    pub store: Arc<dyn LicenseStore>,
    pub verifier: Arc<SessionVerifier>,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    Router::new()
        .route(
            "/v1/system/info",
            axum::routing::get(api::system::system_info),
        )
        .route(
            "/v1/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route(
            "/v1/access/:module",
            axum::routing::get(api::access::access_decision),
        )
        .route("/v1/modules", axum::routing::get(api::modules::list_modules))
        .route(
            "/v1/orgs/:org_id/licenses",
            axum::routing::get(api::licenses::list_licenses),
        )
        .route(
            "/v1/orgs/:org_id/licenses/:module",
            axum::routing::put(api::licenses::grant_license)
                .delete(api::licenses::revoke_license),
        )
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/v1/openapi.json", ApiDoc::openapi()),
        )
        .layer(trace_layer)
        .with_state(state)
}
