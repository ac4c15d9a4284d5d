//! License source seam.
//!
//! # Purpose
//! Defines the collaborator contract answering "is module M licensed for
//! organization O?" together with an in-memory implementation for tests and
//! single-process deployments.
//!
//! # Key invariants
//! - License records are owned by the source; the engine reads per call and
//!   never caches a verdict across evaluations.
//! - A failed lookup must end in denial. The engine maps any error here to
//!   an unlicensed outcome; implementations must not report `Ok(true)` on
//!   partial data.
use crate::{ModuleName, OrgId};
use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LicenseError {
    #[error("license source unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type LicenseResult<T> = Result<T, LicenseError>;

/// Read-side contract for organization module licensing.
///
/// Implementations may be backed by a database, a billing service, or plain
/// memory. Caching, if any, lives behind this trait with its own staleness
/// bound so revocation is visible on the next call.
#[async_trait]
pub trait LicenseSource: Send + Sync {
    async fn is_licensed(&self, org: &OrgId, module: &ModuleName) -> LicenseResult<bool>;
}

/// Fixed in-memory license set.
///
/// # Example
/// ```rust
/// use resilia_access::{LicenseSource, ModuleName, OrgId, StaticLicenses};
///
/// # async fn check() {
/// let licenses = StaticLicenses::new([("org-a", "BCM Plan")]);
/// let licensed = licenses
///     .is_licensed(&OrgId::new("org-a"), &ModuleName::new("BCM Plan"))
///     .await
///     .unwrap();
/// assert!(licensed);
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct StaticLicenses {
    granted: HashSet<(OrgId, ModuleName)>,
}

impl StaticLicenses {
    pub fn new<O, M>(granted: impl IntoIterator<Item = (O, M)>) -> Self
    where
        O: Into<String>,
        M: Into<String>,
    {
        Self {
            granted: granted
                .into_iter()
                .map(|(org, module)| (OrgId::new(org), ModuleName::new(module)))
                .collect(),
        }
    }

    /// Grants every licensed module in the builtin catalog to the
    /// organization. Intended for local development setups.
    pub fn all_for_org(org: &OrgId) -> Self {
        let catalog = crate::ModuleCatalog::builtin();
        Self {
            granted: catalog
                .entries()
                .filter(|entry| entry.rule.requires_license())
                .map(|entry| (org.clone(), entry.name.clone()))
                .collect(),
        }
    }
}

#[async_trait]
impl LicenseSource for StaticLicenses {
    async fn is_licensed(&self, org: &OrgId, module: &ModuleName) -> LicenseResult<bool> {
        Ok(self.granted.contains(&(org.clone(), module.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_licenses_answer_membership() {
        let licenses = StaticLicenses::new([("org-a", "BCM Plan"), ("org-b", "Policy")]);
        let org = OrgId::new("org-a");
        assert!(licenses
            .is_licensed(&org, &ModuleName::new("BCM Plan"))
            .await
            .expect("lookup"));
        assert!(!licenses
            .is_licensed(&org, &ModuleName::new("Policy"))
            .await
            .expect("lookup"));
    }

    #[tokio::test]
    async fn all_for_org_covers_licensed_modules_only() {
        let org = OrgId::new("org-dev");
        let licenses = StaticLicenses::all_for_org(&org);
        assert!(licenses
            .is_licensed(&org, &ModuleName::new("Risk Analysis"))
            .await
            .expect("lookup"));
        // Open and explicit-role modules carry no license records.
        assert!(!licenses
            .is_licensed(&org, &ModuleName::new("Home"))
            .await
            .expect("lookup"));
        assert!(!licenses
            .is_licensed(&org, &ModuleName::new("Admin Panel"))
            .await
            .expect("lookup"));
    }
}
