//! In-memory implementation of the license store.
//!
//! # Purpose
//! Backs the portal's license endpoints and the decision engine's lookups
//! with `HashMap`s guarded by `tokio::sync::RwLock`. It exists for:
//! - local development and tests (no external dependencies)
//! - deployments where the billing system pushes entitlements at boot
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: reads take a read lock, writes a write
//!   lock. Revocations are visible to the next decision with no staleness
//!   window, which keeps the fail-closed story simple.
use super::{LicenseRecord, LicenseStore, StoreResult};
use async_trait::async_trait;
use resilia_access::{LicenseResult, LicenseSource, ModuleName, OrgId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone)]
pub struct InMemoryLicenseStore {
    records: Arc<RwLock<HashMap<(OrgId, ModuleName), bool>>>,
}

impl InMemoryLicenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed initial entitlements, typically from deployment configuration.
    pub async fn seed<O, M>(&self, granted: impl IntoIterator<Item = (O, M)>)
    where
        O: Into<String>,
        M: Into<String>,
    {
        let mut records = self.records.write().await;
        for (org, module) in granted {
            records.insert((OrgId::new(org), ModuleName::new(module)), true);
        }
    }
}

#[async_trait]
impl LicenseSource for InMemoryLicenseStore {
    async fn is_licensed(&self, org: &OrgId, module: &ModuleName) -> LicenseResult<bool> {
        let records = self.records.read().await;
        Ok(records
            .get(&(org.clone(), module.clone()))
            .copied()
            .unwrap_or(false))
    }
}

#[async_trait]
impl LicenseStore for InMemoryLicenseStore {
    async fn set_licensed(
        &self,
        org: &OrgId,
        module: &ModuleName,
        is_licensed: bool,
    ) -> StoreResult<()> {
        let mut records = self.records.write().await;
        records.insert((org.clone(), module.clone()), is_licensed);
        Ok(())
    }

    async fn list_for_org(&self, org: &OrgId) -> StoreResult<Vec<LicenseRecord>> {
        let records = self.records.read().await;
        let mut items: Vec<LicenseRecord> = records
            .iter()
            .filter(|((record_org, _), _)| record_org == org)
            .map(|((record_org, module), is_licensed)| LicenseRecord {
                organization_id: record_org.clone(),
                module_name: module.clone(),
                is_licensed: *is_licensed,
            })
            .collect();
        items.sort_by(|a, b| a.module_name.as_str().cmp(b.module_name.as_str()));
        Ok(items)
    }
}
