//! Resilia portal HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, the module catalog, the license store, session
//! verification, and HTTP routing, then starts the API server.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
mod api;
mod app;
mod auth;
mod config;
mod observability;
mod store;

use anyhow::Context;
use app::{build_router, AppState};
use auth::session::SessionVerifier;
use resilia_access::{DecisionEngine, ModuleCatalog};
use std::future::Future;
use std::sync::Arc;
use store::memory::InMemoryLicenseStore;

const SESSION_LEEWAY_SECONDS: u64 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::PortalConfig::from_env_or_yaml().expect("portal config");
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::PortalConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("resilia-portal");
    let state = build_state(&config)?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "portal listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state(config: &config::PortalConfig) -> anyhow::Result<AppState> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read catalog: {}", path.display()))?;
            ModuleCatalog::from_yaml(&contents).with_context(|| "parse catalog yaml")?
        }
        None => ModuleCatalog::builtin(),
    };
    let catalog = Arc::new(catalog);
    let store = Arc::new(InMemoryLicenseStore::new());
    let verifier = SessionVerifier::from_hex(&config.session_public_key, SESSION_LEEWAY_SECONDS)
        .map_err(|err| anyhow::anyhow!("session public key: {err}"))?;

    Ok(AppState {
        api_version: "v1".to_string(),
        catalog: catalog.clone(),
        engine: DecisionEngine::new(catalog, store.clone()),
        store,
        verifier: Arc::new(verifier),
    })
}
