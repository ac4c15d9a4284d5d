use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

// Portal configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    /// Hex-encoded Ed25519 public key of the identity service.
    pub session_public_key: String,
    /// Optional YAML catalog replacing the builtin module table.
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct PortalConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    session_public_key: Option<String>,
    catalog_path: Option<PathBuf>,
}

impl PortalConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("PORTAL_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .with_context(|| "parse PORTAL_BIND")?;
        let metrics_bind = std::env::var("PORTAL_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9090".to_string())
            .parse()
            .with_context(|| "parse PORTAL_METRICS_BIND")?;
        let session_public_key = std::env::var("PORTAL_SESSION_PUBLIC_KEY")
            .with_context(|| "PORTAL_SESSION_PUBLIC_KEY is required")?;
        let catalog_path = std::env::var("PORTAL_CATALOG").ok().map(PathBuf::from);
        Ok(Self {
            bind_addr,
            metrics_bind,
            session_public_key,
            catalog_path,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("PORTAL_CONFIG") {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("read PORTAL_CONFIG: {path}"))?;
            let override_cfg: PortalConfigOverride =
                serde_yaml::from_str(&contents).with_context(|| "parse portal config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.session_public_key {
                config.session_public_key = value;
            }
            if let Some(value) = override_cfg.catalog_path {
                config.catalog_path = Some(value);
            }
        }
        Ok(config)
    }
}
