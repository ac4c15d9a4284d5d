use async_trait::async_trait;
use resilia_access::{LicenseSource, ModuleName, OrgId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One organization/module entitlement row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LicenseRecord {
    #[schema(value_type = String)]
    pub organization_id: OrgId,
    #[schema(value_type = String)]
    pub module_name: ModuleName,
    pub is_licensed: bool,
}

/// Read/write license storage behind the portal's admin endpoints.
///
/// The read side doubles as the engine's [`LicenseSource`], so a single
/// backend answers both admin listings and per-decision lookups. Durable
/// backends live outside this service; this trait is the seam.
#[async_trait]
pub trait LicenseStore: LicenseSource + Send + Sync {
    async fn set_licensed(
        &self,
        org: &OrgId,
        module: &ModuleName,
        is_licensed: bool,
    ) -> StoreResult<()>;

    async fn list_for_org(&self, org: &OrgId) -> StoreResult<Vec<LicenseRecord>>;
}
